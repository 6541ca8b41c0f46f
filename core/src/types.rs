use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for the grid side and positions.
pub type Coord = u8;

/// Count type used for captured-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// The cell every game grows its captured region from.
pub const ORIGIN: Coord2 = (0, 0);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Index into the game palette.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn is_in_palette(self, colors: u8) -> bool {
        self.0 < colors
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the grid edges behave.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    /// Edges are boundaries.
    #[default]
    Plane,
    /// Each edge wraps to the opposite one.
    Torus,
}

impl Topology {
    pub const fn wraps(self) -> bool {
        matches!(self, Self::Torus)
    }
}

/// Which cells count as touching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adjacency {
    /// Up, down, left and right.
    #[default]
    Orthogonal,
    /// Orthogonal plus the four diagonals.
    Diagonal,
}

impl Adjacency {
    pub const fn includes_diagonals(self) -> bool {
        matches!(self, Self::Diagonal)
    }
}
