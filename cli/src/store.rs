use anyhow::{Context, Result};
use floodit_core::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed taken from the wall clock when none was requested.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        // low 64 bits of the nanosecond count, the part that actually changes between runs
        .map(|elapsed| (elapsed.as_nanos() & u128::from(u64::MAX)) as u64)
        .unwrap_or_default()
}

/// Reads the saved session, or deals a default game when there is none or it cannot be used.
///
/// `new_source` is only called when a new game has to be dealt.
pub fn load_or_new<S: ColorSource>(path: &Path, new_source: impl FnOnce() -> S) -> Result<Session> {
    match fs::read_to_string(path) {
        Ok(data) => match Session::load_json(&data) {
            Ok(session) => return Ok(session),
            Err(err) => log::warn!("ignoring saved game at {}: {err}", path.display()),
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("no saved game at {}, starting a new one", path.display());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("could not read {}", path.display()));
        }
    }
    Ok(Session::new(GameConfig::default(), &mut new_source())?)
}

pub fn save(path: &Path, session: &Session) -> Result<()> {
    let data = session.save_json()?;
    fs::write(path, data).with_context(|| format!("could not write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("floodit-{}-{name}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file_starts_default_game() {
        let path = scratch("missing");

        let session = load_or_new(&path, || RandomColors::from_seed(2)).unwrap();

        assert_eq!(session.state().config(), GameConfig::default());
        assert!(!session.can_undo());
    }

    #[test]
    fn saved_game_is_restored() {
        let path = scratch("restore");
        let config = GameConfig::new(5, Topology::Torus, Adjacency::Diagonal).unwrap();
        let mut session = Session::new(config, &mut RandomColors::from_seed(4)).unwrap();
        let color = Color((session.state().selected().index() + 1) % DEFAULT_COLORS);
        session.select(color).unwrap();

        save(&path, &session).unwrap();
        let loaded =
            load_or_new(&path, || -> RandomColors { panic!("a saved game needs no colors") }).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, session);
    }

    #[test]
    fn unreadable_save_falls_back_to_new_game() {
        let path = scratch("corrupt");
        fs::write(&path, "not a saved game").unwrap();

        let session = load_or_new(&path, || RandomColors::from_seed(2)).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(session.steps(), 0);
    }

    #[test]
    fn clock_seed_is_not_zero() {
        let seeds = [clock_seed(), clock_seed()];

        assert!(seeds.iter().all(|&seed| seed != 0));
    }
}
