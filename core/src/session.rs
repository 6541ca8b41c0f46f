use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of selecting a color
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Captured,
    Finished,
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Captured => true,
            Self::Finished => true,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// A game being played: the live state plus everything needed to step back and forth through it.
///
/// Every method runs a whole transition or fails without touching anything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    state: GameState,
    history: History<GameState>,
}

impl Session {
    pub fn new(config: GameConfig, source: &mut impl ColorSource) -> Result<Self> {
        Ok(Self::from_state(GameState::new(config, source)?))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            history: History::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &History<GameState> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn steps(&self) -> u32 {
        self.state.steps()
    }

    /// Selects the next color for the captured region.
    ///
    /// Picking the color the region already has is not a move: no step is counted and nothing is recorded.
    pub fn select(&mut self, color: Color) -> Result<SelectOutcome> {
        if !color.is_in_palette(self.state.colors()) {
            return Err(GameError::InvalidColor);
        }
        if self.state.is_finished() {
            return Err(GameError::AlreadyFinished);
        }
        if color == self.state.selected() {
            return Ok(SelectOutcome::NoChange);
        }

        self.history.record(self.state.clone());
        let captured = self.state.apply_selection(color);
        log::debug!(
            "step {}: selected {}, captured {} cells",
            self.state.steps(),
            color,
            captured
        );

        Ok(if self.state.is_finished() {
            log::debug!("grid captured in {} steps", self.state.steps());
            SelectOutcome::Finished
        } else {
            SelectOutcome::Captured
        })
    }

    pub fn undo(&mut self) -> Result<()> {
        if !self.history.can_undo() {
            return Err(GameError::EmptyHistory);
        }
        self.state = self.history.undo(self.state.clone())?;
        log::debug!("undo, back to step {}", self.state.steps());
        Ok(())
    }

    pub fn redo(&mut self) -> Result<()> {
        if !self.history.can_redo() {
            return Err(GameError::EmptyHistory);
        }
        self.state = self.history.redo(self.state.clone())?;
        log::debug!("redo, forward to step {}", self.state.steps());
        Ok(())
    }

    /// Deals a fresh grid with the current settings and forgets all history.
    pub fn reset(&mut self, source: &mut impl ColorSource) -> Result<()> {
        self.new_game(self.state.config(), source)
    }

    /// Deals a fresh grid with new settings and forgets all history.
    pub fn new_game(&mut self, config: GameConfig, source: &mut impl ColorSource) -> Result<()> {
        self.state = GameState::new(config, source)?;
        self.history.clear();
        log::debug!("new game: {:?}", config);
        Ok(())
    }

    /// Changes how edges behave from now on. Recorded snapshots keep their own rules.
    ///
    /// The region is flooded again under the new rules; a change that would split it is refused.
    pub fn set_topology(&mut self, topology: Topology) -> Result<()> {
        let from = self.state.topology();
        let captured = self.state.set_topology(topology)?;
        log::debug!("topology {from:?} -> {topology:?}, captured {captured} cells");
        Ok(())
    }

    /// Changes which cells touch from now on, with the same rules as [`Session::set_topology`].
    pub fn set_adjacency(&mut self, adjacency: Adjacency) -> Result<()> {
        let from = self.state.adjacency();
        let captured = self.state.set_adjacency(adjacency)?;
        log::debug!("adjacency {from:?} -> {adjacency:?}, captured {captured} cells");
        Ok(())
    }

    pub fn save_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| {
            log::warn!("could not encode session: {err}");
            GameError::MalformedSnapshot
        })
    }

    pub fn load_json(data: &str) -> Result<Self> {
        let session: Self = serde_json::from_str(data).map_err(|err| {
            log::warn!("could not decode session: {err}");
            GameError::MalformedSnapshot
        })?;
        session.validate()?;
        Ok(session)
    }

    /// Checks the live state and every snapshot.
    pub fn validate(&self) -> Result<()> {
        let snapshots = self
            .history
            .undo_snapshots()
            .chain(self.history.redo_snapshots());

        for state in core::iter::once(&self.state).chain(snapshots) {
            state.validate().inspect_err(|err| {
                log::warn!("rejecting session, step {} is inconsistent: {err}", state.steps());
            })?;
        }
        Ok(())
    }
}
