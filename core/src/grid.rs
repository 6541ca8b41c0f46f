use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One square of the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Color assigned when the grid was generated.
    pub color: Color,
    pub captured: bool,
}

impl Cell {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            captured: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    captured_count: CellCount,
}

impl Grid {
    pub fn from_colors(colors: Array2<Color>) -> Result<Self> {
        let (rows, cols) = colors.dim();
        if rows == 0 || rows != cols || Coord::try_from(rows).is_err() {
            return Err(GameError::InvalidConfiguration);
        }

        Ok(Self {
            cells: colors.mapv(Cell::new),
            captured_count: 0,
        })
    }

    pub fn generate(size: Coord, colors: u8, source: &mut impl ColorSource) -> Result<Self> {
        if size == 0 || colors == 0 {
            return Err(GameError::InvalidConfiguration);
        }

        let side = usize::from(size);
        let cells = Array2::from_shape_simple_fn((side, side), || {
            let color = source.next_color(colors);
            // clamp misbehaving sources into the palette
            Cell::new(Color(color.index() % colors))
        });

        Ok(Self {
            cells,
            captured_count: 0,
        })
    }

    pub fn size(&self) -> Coord {
        Coord::try_from(self.cells.nrows()).unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn captured_count(&self) -> CellCount {
        self.captured_count
    }

    pub fn is_fully_captured(&self) -> bool {
        self.captured_count == self.total_cells()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn is_captured(&self, coords: Coord2) -> Result<bool> {
        self.get(coords).map(|cell| cell.captured)
    }

    pub fn color_of(&self, coords: Coord2) -> Result<Color> {
        self.get(coords).map(|cell| cell.color)
    }

    /// Marks a cell as captured, returning whether it was uncaptured before.
    pub fn capture(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.captured {
            return Ok(false);
        }
        cell.captured = true;
        self.captured_count += 1;
        Ok(true)
    }

    /// Every cell with its coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn captured_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.captured)
            .map(|(coords, _)| coords)
    }

    pub fn neighbors(&self, coords: Coord2, neighborhood: Neighborhood) -> Neighbors {
        neighborhood.neighbors(coords, self.size())
    }

    /// Whether every captured cell can be reached from the origin through captured cells only.
    pub fn is_region_connected(&self, neighborhood: Neighborhood) -> bool {
        if !self.validate_coords(ORIGIN).is_ok_and(|origin| self[origin].captured) {
            return self.captured_count == 0;
        }

        let mut seen: Array2<bool> = Array2::default(self.cells.dim());
        seen[ORIGIN.to_nd_index()] = true;
        let mut to_visit = alloc::vec![ORIGIN];
        let mut reached: CellCount = 1;

        while let Some(coords) = to_visit.pop() {
            for pos in self.neighbors(coords, neighborhood) {
                let index = pos.to_nd_index();
                if self[pos].captured && !seen[index] {
                    seen[index] = true;
                    reached += 1;
                    to_visit.push(pos);
                }
            }
        }
        reached == self.captured_count
    }

    /// Checks the internal bookkeeping of a grid that did not come from this crate, e.g. a loaded save.
    pub fn validate(&self, colors: u8) -> Result<()> {
        let (rows, cols) = self.cells.dim();
        if rows == 0 || rows != cols || Coord::try_from(rows).is_err() {
            return Err(GameError::InvalidConfiguration);
        }

        if self.cells.iter().any(|cell| !cell.color.is_in_palette(colors)) {
            return Err(GameError::InvalidConfiguration);
        }

        let counted = self.cells.iter().filter(|cell| cell.captured).count();
        if counted != usize::from(self.captured_count) {
            return Err(GameError::InvalidConfiguration);
        }

        Ok(())
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
