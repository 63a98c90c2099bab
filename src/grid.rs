//! Occupancy grid for the cube being tiled.
//!
//! The grid is a flat x-major array of cells, each either empty or owned by a
//! piece identity, plus a map from identity to the placed piece. Both are
//! updated together by [`Grid::place`] and [`Grid::remove`], so a cell is
//! owned by a piece exactly when that piece's absolute cells include it.

use rustc_hash::FxHashMap;

use crate::pieces::{Coord, Piece, PieceId};

/// The six axis-aligned neighbour offsets.
pub const NEIGHBOR_OFFSETS: [Coord; 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Labels used by [`Grid::format_layers`]; identities wrap after 62.
const LABELS: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An N x N x N occupancy store.
#[derive(Clone, Debug)]
pub struct Grid {
    side: usize,
    cells: Vec<Option<PieceId>>,
    pieces: FxHashMap<PieceId, Piece>,
}

impl Grid {
    /// Creates an empty grid of the given side length.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![None; side * side * side],
            pieces: FxHashMap::default(),
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (`side^3`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Converts a coordinate to its x-major cell index, or `None` if out of bounds.
    ///
    /// Index order is `idx = x * side * side + y * side + z`.
    #[inline]
    pub fn index_of(&self, (x, y, z): Coord) -> Option<usize> {
        let side = self.side as i32;
        if (0..side).contains(&x) && (0..side).contains(&y) && (0..side).contains(&z) {
            Some((x as usize * self.side + y as usize) * self.side + z as usize)
        } else {
            None
        }
    }

    /// Converts a cell index back to coordinates.
    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        (
            (index / (self.side * self.side)) as i32,
            ((index / self.side) % self.side) as i32,
            (index % self.side) as i32,
        )
    }

    /// The piece owning a cell, or `None` if the cell is empty or out of bounds.
    #[inline]
    pub fn occupant(&self, coord: Coord) -> Option<PieceId> {
        self.index_of(coord).and_then(|index| self.cells[index])
    }

    /// True iff the cell is in bounds and empty.
    #[inline]
    pub fn is_open(&self, coord: Coord) -> bool {
        matches!(self.index_of(coord), Some(index) if self.cells[index].is_none())
    }

    /// True iff every cell is in bounds and empty.
    pub fn is_free(&self, cells: &[Coord]) -> bool {
        cells.iter().all(|&cell| self.is_open(cell))
    }

    /// Places a piece on the grid.
    ///
    /// # Panics
    ///
    /// Panics if any of the piece's cells is out of bounds or occupied, or if a
    /// piece with the same identity is already placed.
    pub fn place(&mut self, piece: Piece) {
        let cells = piece.absolute_cells();
        assert!(
            self.is_free(&cells),
            "piece {} at {:?} overlaps or leaves the grid",
            piece.id,
            piece.anchor
        );
        assert!(
            !self.pieces.contains_key(&piece.id),
            "piece {} is already placed",
            piece.id
        );

        for cell in cells {
            if let Some(index) = self.index_of(cell) {
                self.cells[index] = Some(piece.id);
            }
        }
        self.pieces.insert(piece.id, piece);
    }

    /// Removes a placed piece, clearing its cells. Returns the removed piece,
    /// or `None` if no piece with that identity is placed.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.pieces.remove(&id)?;
        for cell in piece.absolute_cells() {
            if let Some(index) = self.index_of(cell) {
                self.cells[index] = None;
            }
        }
        Some(piece)
    }

    /// Number of the six axis neighbours of `coord` that are in bounds and empty.
    #[inline]
    pub fn count_openings(&self, (x, y, z): Coord) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy, dz)| self.is_open((x + dx, y + dy, z + dz)))
            .count() as u8
    }

    /// In-bounds empty axis neighbours of `coord`.
    pub fn open_neighbors(&self, (x, y, z): Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy, dz)| (x + dx, y + dy, z + dz))
            .filter(move |&neighbor| self.is_open(neighbor))
    }

    /// Sum of [`Grid::count_openings`] over the piece's four cells.
    ///
    /// A shared empty neighbour is counted once per adjacent piece cell.
    pub fn piece_openings(&self, piece: &Piece) -> u32 {
        piece
            .absolute_cells()
            .iter()
            .map(|&cell| u32::from(self.count_openings(cell)))
            .sum()
    }

    /// Number of placed pieces.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Placed pieces in arbitrary order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Placed pieces sorted by identity.
    pub fn sorted_pieces(&self) -> Vec<Piece> {
        let mut pieces: Vec<Piece> = self.pieces.values().copied().collect();
        pieces.sort_unstable_by_key(|piece| piece.id);
        pieces
    }

    /// Coordinates of every empty cell, in index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(index, _)| self.coord_of(index))
    }

    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Copy of the cell array in x-major order.
    pub fn snapshot(&self) -> Vec<Option<PieceId>> {
        self.cells.clone()
    }

    /// Formats the grid as z-layers side by side.
    ///
    /// Rows run from top (y = side - 1) to bottom. Empty cells show as '.',
    /// occupied cells as a base-62 label of the owning identity.
    pub fn format_layers(&self) -> String {
        let side = self.side;
        let mut output = String::new();

        for z in 0..side {
            if z > 0 {
                output.push_str("  ");
            }
            output.push_str(&format!("z={:<width$}", z, width = side.saturating_sub(2)));
        }
        output.push('\n');

        for y in (0..side).rev() {
            for z in 0..side {
                if z > 0 {
                    output.push_str("  ");
                }
                for x in 0..side {
                    let coord = (x as i32, y as i32, z as i32);
                    output.push(match self.occupant(coord) {
                        None => '.',
                        Some(id) => label(id),
                    });
                }
            }
            output.push('\n');
        }

        output
    }
}

/// Display character for a piece identity.
pub fn label(id: PieceId) -> char {
    let slot = id.0 as usize % LABELS.len();
    char::from(LABELS[slot])
}
