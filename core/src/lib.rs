#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use history::*;
pub use neighbors::*;
pub use session::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod grid;
mod history;
mod neighbors;
mod session;
mod types;

/// Smallest palette that still leaves a choice.
pub const MIN_COLORS: u8 = 2;

pub const MAX_COLORS: u8 = 16;

pub const DEFAULT_COLORS: u8 = 6;

pub const DEFAULT_SIZE: Coord = 14;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub colors: u8,
    pub topology: Topology,
    pub adjacency: Adjacency,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, colors: u8, topology: Topology, adjacency: Adjacency) -> Self {
        Self {
            size,
            colors,
            topology,
            adjacency,
        }
    }

    pub fn new(size: Coord, topology: Topology, adjacency: Adjacency) -> Result<Self> {
        let config = Self::new_unchecked(size, DEFAULT_COLORS, topology, adjacency);
        config.validate()?;
        Ok(config)
    }

    pub fn with_colors(self, colors: u8) -> Result<Self> {
        let config = Self { colors, ..self };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || !(MIN_COLORS..=MAX_COLORS).contains(&self.colors) {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn neighborhood(&self) -> Neighborhood {
        Neighborhood::new(self.topology, self.adjacency)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, DEFAULT_COLORS, Topology::Plane, Adjacency::Orthogonal)
    }
}
