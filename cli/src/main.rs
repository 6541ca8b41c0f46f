use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use floodit_core::*;
use std::path::PathBuf;

mod render;
mod store;

#[derive(Parser, Debug)]
#[command(version, about = "Capture the whole grid in as few color picks as possible", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Where the game is kept between runs
    #[arg(long, global = true, default_value = "floodit-save.json")]
    save: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a new game, dropping the saved one
    New(NewArgs),
    /// Print the grid
    Show,
    /// Give the captured region a new color
    Select { color: u8 },
    /// Step back one move
    Undo,
    /// Step forward again after an undo
    Redo,
    /// Deal a fresh grid with the current settings
    Reset {
        /// Force a seed instead of random
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Change the rules used for the following moves
    Settings {
        #[arg(long, value_enum)]
        topology: Option<TopologyArg>,
        #[arg(long, value_enum)]
        adjacency: Option<AdjacencyArg>,
    },
}

#[derive(clap::Args, Debug)]
struct NewArgs {
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: Coord,

    #[arg(long, default_value_t = DEFAULT_COLORS)]
    colors: u8,

    #[arg(long, value_enum, default_value_t = TopologyArg::Plane)]
    topology: TopologyArg,

    #[arg(long, value_enum, default_value_t = AdjacencyArg::Orthogonal)]
    adjacency: AdjacencyArg,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl NewArgs {
    fn config(&self) -> Result<GameConfig> {
        GameConfig::new(self.size, self.topology.into(), self.adjacency.into())
            .and_then(|config| config.with_colors(self.colors))
            .context("invalid game settings")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TopologyArg {
    Plane,
    Torus,
}

impl From<TopologyArg> for Topology {
    fn from(other: TopologyArg) -> Self {
        match other {
            TopologyArg::Plane => Topology::Plane,
            TopologyArg::Torus => Topology::Torus,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AdjacencyArg {
    Orthogonal,
    Diagonal,
}

impl From<AdjacencyArg> for Adjacency {
    fn from(other: AdjacencyArg) -> Self {
        match other {
            AdjacencyArg::Orthogonal => Adjacency::Orthogonal,
            AdjacencyArg::Diagonal => Adjacency::Diagonal,
        }
    }
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn colors_for(seed: Option<u64>) -> RandomColors {
    let seed = seed.unwrap_or_else(store::clock_seed);
    log::info!("seed: {seed}");
    RandomColors::from_seed(seed)
}

/// Applies one command to the session; history misses are reported instead of failing the run.
fn apply(session: &mut Session, command: Command) -> Result<()> {
    match command {
        Command::New(args) => session.new_game(args.config()?, &mut colors_for(args.seed))?,
        Command::Show => {}
        Command::Select { color } => {
            let outcome = session
                .select(Color(color))
                .with_context(|| format!("cannot select color {color}"))?;
            if !outcome.has_update() {
                log::info!("region already has color {color}");
            }
        }
        Command::Undo => match session.undo() {
            Err(GameError::EmptyHistory) => log::warn!("nothing to undo"),
            other => other?,
        },
        Command::Redo => match session.redo() {
            Err(GameError::EmptyHistory) => log::warn!("nothing to redo"),
            other => other?,
        },
        Command::Reset { seed } => session.reset(&mut colors_for(seed))?,
        Command::Settings {
            topology,
            adjacency,
        } => {
            if let Some(topology) = topology {
                session
                    .set_topology(topology.into())
                    .context("cannot change topology, the captured region would split")?;
            }
            if let Some(adjacency) = adjacency {
                session
                    .set_adjacency(adjacency.into())
                    .context("cannot change adjacency, the captured region would split")?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let session = match args.command {
        // the saved game is about to be replaced, so it is not read at all
        Command::New(new) => Session::new(new.config()?, &mut colors_for(new.seed))?,
        command => {
            let mut session = store::load_or_new(&args.save, || colors_for(None))?;
            apply(&mut session, command)?;
            session
        }
    };

    print!("{}", render::render(&session));
    store::save(&args.save, &session)
}
