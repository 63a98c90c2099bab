//! Hand-checked layouts shared by the unit tests.

use crate::grid::Grid;
use crate::pieces::{Coord, Piece, PieceId, RotationCode};

/// An anchor plus `(r, s, t)` rotation components.
pub type Layout = &'static [(Coord, (u8, u8, u8))];

/// A complete tiling of the 4x4x4 cube by 16 pieces.
pub const TILED_4X4X4: Layout = &[
    ((0, 0, 1), (0, 0, 1)),
    ((0, 1, 3), (1, 0, 0)),
    ((0, 2, 0), (1, 0, 0)),
    ((0, 2, 2), (1, 0, 0)),
    ((1, 2, 1), (0, 2, 0)),
    ((1, 3, 1), (0, 1, 3)),
    ((1, 3, 3), (0, 2, 0)),
    ((1, 0, 1), (0, 1, 1)),
    ((2, 0, 3), (0, 1, 2)),
    ((2, 1, 0), (1, 2, 0)),
    ((2, 1, 2), (0, 1, 3)),
    ((3, 2, 2), (1, 2, 0)),
    ((3, 2, 3), (1, 2, 0)),
    ((2, 3, 1), (0, 1, 1)),
    ((3, 0, 1), (0, 0, 1)),
    ((3, 2, 0), (1, 1, 0)),
];

/// Three pieces walling in the empty corner cell (0, 0, 0) of a 4x4x4 grid.
pub const SEALED_CORNER: Layout = &[
    ((0, 0, 2), (0, 0, 1)),
    ((0, 2, 0), (1, 0, 0)),
    ((1, 0, 1), (0, 0, 1)),
];

/// Places each layout entry with identities 1, 2, 3, ...
pub fn grid_from(side: usize, layout: &[(Coord, (u8, u8, u8))]) -> Grid {
    let mut grid = Grid::new(side);
    for (i, &(anchor, (r, s, t))) in layout.iter().enumerate() {
        grid.place(Piece::new(
            anchor,
            RotationCode::new(r, s, t),
            PieceId(i as u32 + 1),
        ));
    }
    grid
}
