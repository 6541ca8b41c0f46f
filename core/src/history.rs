use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Undo and redo stacks of whole-state snapshots.
///
/// Snapshots are owned by the stack that holds them. Callers hand in copies of their live state, never the
/// live state itself, so nothing stored here is ever mutated after the push.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History<T> {
    undo: Vec<T>,
    redo: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the state from before a new move; anything that was undone can no longer be redone.
    pub fn record(&mut self, snapshot: T) {
        self.redo.clear();
        self.undo.push(snapshot);
    }

    /// Swaps `current` for the most recent undo snapshot, keeping `current` for a later redo.
    pub fn undo(&mut self, current: T) -> Result<T> {
        let previous = self.undo.pop().ok_or(GameError::EmptyHistory)?;
        self.redo.push(current);
        Ok(previous)
    }

    /// Swaps `current` for the most recently undone snapshot, keeping `current` for a later undo.
    pub fn redo(&mut self, current: T) -> Result<T> {
        let next = self.redo.pop().ok_or(GameError::EmptyHistory)?;
        self.undo.push(current);
        Ok(next)
    }

    pub fn peek_undo(&self) -> Result<&T> {
        self.undo.last().ok_or(GameError::EmptyHistory)
    }

    pub fn peek_redo(&self) -> Result<&T> {
        self.redo.last().ok_or(GameError::EmptyHistory)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Undo snapshots, oldest first.
    pub fn undo_snapshots(&self) -> impl Iterator<Item = &T> {
        self.undo.iter()
    }

    /// Redo snapshots, oldest first.
    pub fn redo_snapshots(&self) -> impl Iterator<Item = &T> {
        self.redo.iter()
    }
}
