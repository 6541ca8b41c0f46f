use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Live game: the grid, the color currently held by the captured region, and the rules used to grow it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    grid: Grid,
    selected: Color,
    steps: u32,
    colors: u8,
    topology: Topology,
    adjacency: Adjacency,
}

impl GameState {
    pub fn new(config: GameConfig, source: &mut impl ColorSource) -> Result<Self> {
        config.validate()?;
        let grid = Grid::generate(config.size, config.colors, source)?;
        Self::start(grid, config.colors, config.topology, config.adjacency)
    }

    /// Starts a game on a fixed layout, e.g. a replayed or hand-made board.
    pub fn from_colors(
        colors: Array2<Color>,
        palette: u8,
        topology: Topology,
        adjacency: Adjacency,
    ) -> Result<Self> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&palette)
            || colors.iter().any(|color| !color.is_in_palette(palette))
        {
            return Err(GameError::InvalidConfiguration);
        }
        let grid = Grid::from_colors(colors)?;
        Self::start(grid, palette, topology, adjacency)
    }

    fn start(mut grid: Grid, colors: u8, topology: Topology, adjacency: Adjacency) -> Result<Self> {
        grid.capture(ORIGIN)?;
        let selected = grid.color_of(ORIGIN)?;
        let mut state = Self {
            grid,
            selected,
            steps: 0,
            colors,
            topology,
            adjacency,
        };
        state.flood();
        Ok(state)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord {
        self.grid.size()
    }

    pub fn selected(&self) -> Color {
        self.selected
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn colors(&self) -> u8 {
        self.colors
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    pub fn neighborhood(&self) -> Neighborhood {
        Neighborhood::new(self.topology, self.adjacency)
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            colors: self.colors,
            topology: self.topology,
            adjacency: self.adjacency,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.grid.is_fully_captured()
    }

    pub fn is_captured(&self, coords: Coord2) -> Result<bool> {
        self.grid.is_captured(coords)
    }

    /// Color shown at `coords`: captured cells take the region's color, the rest keep their own.
    pub fn color_at(&self, coords: Coord2) -> Result<Color> {
        let cell = self.grid.get(coords)?;
        Ok(if cell.captured { self.selected } else { cell.color })
    }

    pub fn set_topology(&mut self, topology: Topology) -> Result<CellCount> {
        self.set_neighborhood(Neighborhood::new(topology, self.adjacency))
    }

    pub fn set_adjacency(&mut self, adjacency: Adjacency) -> Result<CellCount> {
        self.set_neighborhood(Neighborhood::new(self.topology, adjacency))
    }

    /// Switches to new neighbor rules mid-game and floods under them.
    ///
    /// Refused with `InvalidConfiguration` when the captured region would fall apart under the new
    /// rules, e.g. cells reached through a wrap once the torus becomes a plane. Returns how many
    /// cells the new rules added.
    pub fn set_neighborhood(&mut self, neighborhood: Neighborhood) -> Result<CellCount> {
        if !self.grid.is_region_connected(neighborhood) {
            return Err(GameError::InvalidConfiguration);
        }
        self.topology = neighborhood.topology;
        self.adjacency = neighborhood.adjacency;
        Ok(self.flood())
    }

    /// Whether no uncaptured cell of the selected color touches the region.
    fn is_region_closed(&self) -> bool {
        let neighborhood = self.neighborhood();
        self.grid.captured_cells().all(|coords| {
            self.grid
                .neighbors(coords, neighborhood)
                .into_iter()
                .all(|pos| self.grid[pos].captured || self.grid[pos].color != self.selected)
        })
    }

    /// Applies an accepted selection to this state: recolor the region, grow it, count the step.
    ///
    /// History bookkeeping is the caller's concern, see [`Session::select`].
    pub(crate) fn apply_selection(&mut self, color: Color) -> CellCount {
        self.selected = color;
        let captured = self.flood();
        self.steps += 1;
        captured
    }

    /// Captures every cell reachable from the region through cells of the selected color.
    ///
    /// Returns how many cells were newly captured; calling it again without changing the color finds none.
    pub fn flood(&mut self) -> CellCount {
        let neighborhood = self.neighborhood();
        let mut to_visit: Vec<Coord2> = self.grid.captured_cells().collect();
        let mut captured: CellCount = 0;

        while let Some(coords) = to_visit.pop() {
            for pos in self.grid.neighbors(coords, neighborhood) {
                let cell = self.grid[pos];
                if cell.captured || cell.color != self.selected {
                    continue;
                }
                if let Ok(true) = self.grid.capture(pos) {
                    captured += 1;
                    to_visit.push(pos);
                }
            }
        }

        log::trace!(
            "flood with color {} captured {} cells, {} of {} now held",
            self.selected,
            captured,
            self.grid.captured_count(),
            self.grid.total_cells()
        );
        captured
    }

    /// Checks a state that did not come from this crate, e.g. one decoded from a save.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&self.colors)
            || !self.selected.is_in_palette(self.colors)
        {
            return Err(GameError::InvalidConfiguration);
        }
        self.grid.validate(self.colors)?;
        if !self.grid.is_captured(ORIGIN)?
            || !self.grid.is_region_connected(self.neighborhood())
            || !self.is_region_closed()
        {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(())
    }
}
