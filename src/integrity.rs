//! Void-integrity check.
//!
//! Rejects grid states that seal off empty space too small to ever hold a
//! piece. The check is local: it looks at each empty cell's open neighbours
//! and flags the three shapes an enclosed region of 1, 2 or 3 cells can take.
//! Enclosed regions of 4 or more cells pass, even when the piece cannot
//! actually fit into them.

use crate::grid::Grid;
use crate::pieces::Coord;

/// Why an empty cell was judged unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SealedVoid {
    /// An empty cell with no empty neighbour.
    Single(Coord),
    /// Two empty cells adjacent only to each other.
    Pair(Coord),
    /// Three empty cells in a path, the middle one reported.
    Triple(Coord),
}

impl SealedVoid {
    /// The empty cell the pattern was found at.
    pub fn cell(self) -> Coord {
        match self {
            SealedVoid::Single(cell) | SealedVoid::Pair(cell) | SealedVoid::Triple(cell) => cell,
        }
    }
}

/// Finds the first empty cell, in index order, that sits in a sealed void.
pub fn find_sealed_void(grid: &Grid) -> Option<SealedVoid> {
    grid.empty_cells().find_map(|cell| classify(grid, cell))
}

/// True iff no empty cell sits in an enclosed region of fewer than 4 cells.
pub fn is_integral(grid: &Grid) -> bool {
    find_sealed_void(grid).is_none()
}

fn classify(grid: &Grid, cell: Coord) -> Option<SealedVoid> {
    let mut neighbors = [(0, 0, 0); 6];
    let mut open = 0;
    for neighbor in grid.open_neighbors(cell) {
        neighbors[open] = neighbor;
        open += 1;
    }

    match open {
        0 => Some(SealedVoid::Single(cell)),
        // the only neighbour's only opening is back to this cell
        1 if grid.count_openings(neighbors[0]) == 1 => Some(SealedVoid::Pair(cell)),
        2 if grid.count_openings(neighbors[0]) + grid.count_openings(neighbors[1]) == 2 => {
            Some(SealedVoid::Triple(cell))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{grid_from, SEALED_CORNER, TILED_4X4X4};

    #[test]
    fn test_empty_grid_is_integral() {
        assert!(is_integral(&Grid::new(4)));
        assert!(is_integral(&Grid::new(6)));
    }

    #[test]
    fn test_full_grid_is_integral() {
        let grid = grid_from(4, TILED_4X4X4);
        assert_eq!(grid.empty_cell_count(), 0);
        assert!(is_integral(&grid));
    }

    #[test]
    fn test_single_cell_grid_is_sealed() {
        // the grid boundary walls in the only cell
        let grid = Grid::new(1);
        assert_eq!(find_sealed_void(&grid), Some(SealedVoid::Single((0, 0, 0))));
    }

    #[test]
    fn test_enclosed_single_cell_is_rejected() {
        let grid = grid_from(4, SEALED_CORNER);
        assert_eq!(grid.count_openings((0, 0, 0)), 0);
        assert_eq!(find_sealed_void(&grid), Some(SealedVoid::Single((0, 0, 0))));
        assert!(!is_integral(&grid));
    }

    #[test]
    fn test_enclosed_pair_is_rejected() {
        let grid = grid_from(
            4,
            &[
                ((0, 0, 2), (0, 0, 1)),
                ((0, 2, 0), (1, 0, 0)),
                ((1, 0, 2), (0, 0, 1)),
                ((1, 1, 1), (0, 1, 2)),
                ((2, 0, 1), (0, 1, 1)),
            ],
        );
        assert_eq!(find_sealed_void(&grid), Some(SealedVoid::Pair((0, 0, 0))));
        assert!(!is_integral(&grid));
    }

    #[test]
    fn test_enclosed_triple_is_rejected() {
        let grid = grid_from(
            4,
            &[
                ((0, 0, 2), (0, 0, 1)),
                ((0, 2, 0), (1, 0, 0)),
                ((1, 0, 2), (0, 0, 1)),
                ((1, 1, 1), (0, 1, 2)),
                ((2, 0, 2), (0, 0, 1)),
                ((2, 2, 0), (1, 0, 0)),
                ((3, 0, 1), (0, 0, 1)),
            ],
        );
        // the end cell of the path passes; its middle neighbour is reported
        assert_eq!(find_sealed_void(&grid), Some(SealedVoid::Triple((1, 0, 0))));
        assert_eq!(find_sealed_void(&grid).map(SealedVoid::cell), Some((1, 0, 0)));
        assert!(!is_integral(&grid));
    }

    #[test]
    fn test_enclosed_four_cells_are_accepted() {
        // same walls as the triple, extended so the row (0..4, 0, 0) is the void
        let grid = grid_from(
            4,
            &[
                ((0, 0, 2), (0, 0, 1)),
                ((0, 2, 0), (1, 0, 0)),
                ((1, 0, 2), (0, 0, 1)),
                ((1, 1, 1), (0, 1, 2)),
                ((2, 0, 2), (0, 0, 1)),
                ((2, 2, 0), (1, 0, 0)),
                ((3, 1, 1), (0, 2, 1)),
            ],
        );
        for x in 0..4 {
            assert_eq!(grid.occupant((x, 0, 0)), None);
            for neighbor in grid.open_neighbors((x, 0, 0)) {
                assert_eq!(neighbor.1 + neighbor.2, 0, "void leaks at {neighbor:?}");
            }
        }
        assert!(is_integral(&grid));
    }

    #[test]
    fn test_removing_a_piece_from_full_grid_stays_integral() {
        let mut grid = grid_from(4, TILED_4X4X4);
        for piece in grid.sorted_pieces() {
            grid.remove(piece.id);
            assert!(is_integral(&grid), "single T-shaped void after removing {}", piece.id);
            grid.place(piece);
        }
    }
}
