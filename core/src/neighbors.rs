use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Neighbor coordinates of a single cell, never more than eight.
pub type Neighbors = SmallVec<[Coord2; 8]>;

const ORTHOGONAL: [(i16, i16); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL: [(i16, i16); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Topology and adjacency rules that together decide which cells touch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighborhood {
    pub topology: Topology,
    pub adjacency: Adjacency,
}

impl Neighborhood {
    pub const fn new(topology: Topology, adjacency: Adjacency) -> Self {
        Self {
            topology,
            adjacency,
        }
    }

    pub fn neighbors(self, center: Coord2, size: Coord) -> Neighbors {
        neighbors(center, size, self.topology, self.adjacency)
    }
}

/// Moves a single axis by `delta`, wrapping on a torus and dropping the result on a plane edge.
fn shift(index: Coord, delta: i16, size: Coord, topology: Topology) -> Option<Coord> {
    let next = i16::from(index) + delta;
    let size = i16::from(size);
    let next = match topology {
        Topology::Plane if next < 0 || next >= size => return None,
        Topology::Plane => next,
        Topology::Torus => next.rem_euclid(size),
    };
    Coord::try_from(next).ok()
}

/// Applies `delta` to both axes independently, so a diagonal wrap combines both axis wraps.
fn apply_delta(center: Coord2, delta: (i16, i16), size: Coord, topology: Topology) -> Option<Coord2> {
    let (row, col) = center;
    let (d_row, d_col) = delta;
    Some((
        shift(row, d_row, size, topology)?,
        shift(col, d_col, size, topology)?,
    ))
}

/// Cells touching `center` on a `size × size` grid.
///
/// Wrapping on small tori can produce the same coordinate more than once, or the center itself; both are
/// filtered out so every returned coordinate is a distinct cell other than `center`.
pub fn neighbors(center: Coord2, size: Coord, topology: Topology, adjacency: Adjacency) -> Neighbors {
    let mut found = Neighbors::new();
    if size == 0 {
        return found;
    }

    let diagonals: &[(i16, i16)] = if adjacency.includes_diagonals() {
        &DIAGONAL
    } else {
        &[]
    };

    for &delta in ORTHOGONAL.iter().chain(diagonals) {
        if let Some(pos) = apply_delta(center, delta, size, topology) {
            if pos != center && !found.contains(&pos) {
                found.push(pos);
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn sorted(mut cells: Neighbors) -> Vec<Coord2> {
        cells.sort_unstable();
        cells.into_vec()
    }

    #[test]
    fn plane_orthogonal_drops_cells_past_the_edge() {
        let found = neighbors((0, 0), 3, Topology::Plane, Adjacency::Orthogonal);
        assert_eq!(sorted(found), [(0, 1), (1, 0)]);

        let found = neighbors((1, 1), 3, Topology::Plane, Adjacency::Orthogonal);
        assert_eq!(sorted(found), [(0, 1), (1, 0), (1, 2), (2, 1)]);
    }

    #[test]
    fn plane_diagonal_corner_and_center() {
        let found = neighbors((2, 2), 3, Topology::Plane, Adjacency::Diagonal);
        assert_eq!(sorted(found), [(1, 1), (1, 2), (2, 1)]);

        let found = neighbors((1, 1), 3, Topology::Plane, Adjacency::Diagonal);
        assert_eq!(found.len(), 8);
    }

    #[test]
    fn torus_orthogonal_wraps_each_axis() {
        let found = neighbors((0, 0), 4, Topology::Torus, Adjacency::Orthogonal);
        assert_eq!(sorted(found), [(0, 1), (0, 3), (1, 0), (3, 0)]);

        let found = neighbors((3, 2), 4, Topology::Torus, Adjacency::Orthogonal);
        assert_eq!(sorted(found), [(0, 2), (2, 2), (3, 1), (3, 3)]);
    }

    #[test]
    fn torus_diagonal_corner_wraps_both_axes() {
        let found = neighbors((0, 0), 5, Topology::Torus, Adjacency::Diagonal);
        assert_eq!(found.len(), 8);
        assert!(found.contains(&(4, 4)));
        assert!(found.contains(&(4, 1)));
        assert!(found.contains(&(1, 4)));
        assert!(found.contains(&(1, 1)));
    }

    #[test]
    fn torus_diagonal_edge_cell_is_a_true_reflection() {
        // left edge, middle row: the up-left neighbor keeps the row offset and wraps the column only
        let found = neighbors((2, 0), 5, Topology::Torus, Adjacency::Diagonal);
        assert_eq!(
            sorted(found),
            [(1, 0), (1, 1), (1, 4), (2, 1), (2, 4), (3, 0), (3, 1), (3, 4)]
        );
    }

    #[test]
    fn torus_diagonal_neighbors_are_symmetric() {
        let size = 5;
        for row in 0..size {
            for col in 0..size {
                let found = neighbors((row, col), size, Topology::Torus, Adjacency::Diagonal);
                assert_eq!(found.len(), 8);
                for &other in &found {
                    let back = neighbors(other, size, Topology::Torus, Adjacency::Diagonal);
                    assert!(back.contains(&(row, col)), "{other:?} -> {:?}", (row, col));
                }
            }
        }
    }

    #[test]
    fn small_torus_collapses_duplicates_and_skips_self() {
        for row in 0..2 {
            for col in 0..2 {
                let found = neighbors((row, col), 2, Topology::Torus, Adjacency::Diagonal);
                assert_eq!(found.len(), 3);
                assert!(!found.contains(&(row, col)));
            }
        }

        assert!(neighbors((0, 0), 1, Topology::Torus, Adjacency::Diagonal).is_empty());
        assert!(neighbors((0, 0), 1, Topology::Plane, Adjacency::Diagonal).is_empty());
    }

    #[test]
    fn plane_never_crosses_to_the_opposite_edge() {
        let size = 6;
        for index in 0..size {
            for center in [(index, size - 1), (size - 1, index)] {
                let found = neighbors(center, size, Topology::Plane, Adjacency::Diagonal);
                assert!(found.iter().all(|&(row, col)| {
                    !(center.1 == size - 1 && col == 0) && !(center.0 == size - 1 && row == 0)
                }));
            }
        }
    }

    #[test]
    fn neighborhood_matches_free_function() {
        let rules = Neighborhood::new(Topology::Torus, Adjacency::Orthogonal);
        assert_eq!(
            rules.neighbors((0, 3), 4),
            neighbors((0, 3), 4, Topology::Torus, Adjacency::Orthogonal)
        );
    }
}
