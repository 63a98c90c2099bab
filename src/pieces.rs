//! Coordinate, orientation code and piece definitions.
//!
//! A piece is the t-tetracube: four unit cubes in a flat "T". It is described
//! by an anchor cell (the stem of the T), a rotation code selecting one entry
//! of the orientation table, and an identity token.

use std::fmt;

use crate::geometry::orientation_for;

/// A 3D coordinate representing a unit cube position.
pub type Coord = (i32, i32, i32);

/// Number of unit cubes in a t-tetracube.
pub const CUBES_PER_PIECE: usize = 4;

/// Number of values each rotation index can take.
pub const ROTATION_STEPS: u8 = 4;

/// Total number of rotation codes (4 x 4 x 4).
pub const NUM_ROTATION_CODES: usize = 64;

/// Three independent quarter-turn indices `(r, s, t)`, each in `0..4`.
///
/// The code has no arithmetic meaning beyond indexing the orientation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RotationCode {
    r: u8,
    s: u8,
    t: u8,
}

impl RotationCode {
    /// Creates a rotation code.
    ///
    /// # Panics
    ///
    /// Panics if any component is outside `0..4`.
    pub const fn new(r: u8, s: u8, t: u8) -> Self {
        assert!(
            r < ROTATION_STEPS && s < ROTATION_STEPS && t < ROTATION_STEPS,
            "rotation components must be in 0..4"
        );
        Self { r, s, t }
    }

    /// Creates a rotation code, returning `None` if any component is out of range.
    pub const fn try_new(r: u8, s: u8, t: u8) -> Option<Self> {
        if r < ROTATION_STEPS && s < ROTATION_STEPS && t < ROTATION_STEPS {
            Some(Self { r, s, t })
        } else {
            None
        }
    }

    /// Inverse of [`RotationCode::index`].
    pub const fn from_index(index: usize) -> Self {
        assert!(index < NUM_ROTATION_CODES, "rotation index must be in 0..64");
        Self::new((index / 16) as u8, ((index / 4) % 4) as u8, (index % 4) as u8)
    }

    /// Position of this code in the orientation table (`r * 16 + s * 4 + t`).
    #[inline]
    pub const fn index(self) -> usize {
        self.r as usize * 16 + self.s as usize * 4 + self.t as usize
    }

    pub const fn r(self) -> u8 {
        self.r
    }

    pub const fn s(self) -> u8 {
        self.s
    }

    pub const fn t(self) -> u8 {
        self.t
    }

    /// Iterates over all 64 codes in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUM_ROTATION_CODES).map(Self::from_index)
    }
}

impl fmt::Display for RotationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.r, self.s, self.t)
    }
}

/// Identity token of a piece. Unique within one solver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A candidate or placed t-tetracube.
///
/// Immutable once built; the absolute cells are derived on demand from the
/// orientation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub anchor: Coord,
    pub rotation: RotationCode,
    pub id: PieceId,
}

impl Piece {
    pub const fn new(anchor: Coord, rotation: RotationCode, id: PieceId) -> Self {
        Self {
            anchor,
            rotation,
            id,
        }
    }

    /// Offsets of the four cubes relative to the anchor, in A, B, C, D order.
    #[inline]
    pub fn relative_cells(&self) -> &'static [Coord; CUBES_PER_PIECE] {
        orientation_for(self.rotation)
    }

    /// The four grid cells this piece covers.
    #[inline]
    pub fn absolute_cells(&self) -> [Coord; CUBES_PER_PIECE] {
        let (ax, ay, az) = self.anchor;
        self.relative_cells().map(|(dx, dy, dz)| (ax + dx, ay + dy, az + dz))
    }
}
