use crate::*;
pub use random::*;

mod random;

/// Source of cell colors for freshly generated grids.
///
/// Grids are filled row by row, one call per cell. Keeping this pluggable lets callers replay a board from a
/// seed or hand in a fixed layout.
pub trait ColorSource {
    /// Picks a color in `0..colors`.
    fn next_color(&mut self, colors: u8) -> Color;
}

impl<F> ColorSource for F
where
    F: FnMut(u8) -> Color,
{
    fn next_color(&mut self, colors: u8) -> Color {
        self(colors)
    }
}
