//! Orientation table for the t-tetracube.
//!
//! The piece has four named cubes A, B, C and D. B sits on the anchor. A and C
//! occupy two opposite face-centers of the 3x3x3 neighbourhood around B, and D
//! occupies one of the four face-centers left over. The rotation indices pick
//! the A-C axis (from `r` and `t`) and the D position (from `s`).
//!
//! The 64 entries are computed once at compile time. Several codes produce the
//! same shape; every one of the 12 distinct orientations of the piece is
//! reachable.

use crate::pieces::{Coord, RotationCode, CUBES_PER_PIECE, NUM_ROTATION_CODES};

/// The seven named positions around (and including) the anchor cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Up,
    Down,
    Center,
}

impl Face {
    /// Offset of this position from the anchor.
    pub const fn offset(self) -> Coord {
        match self {
            Face::Front => (-1, 0, 0),
            Face::Back => (1, 0, 0),
            Face::Left => (0, 1, 0),
            Face::Right => (0, -1, 0),
            Face::Up => (0, 0, 1),
            Face::Down => (0, 0, -1),
            Face::Center => (0, 0, 0),
        }
    }
}

/// Picks the A and C faces plus the ordered D candidates for a rotation code.
///
/// Each (r, t) pair lands in exactly one arm.
const fn arrangement(r: u8, t: u8) -> (Face, Face, [Face; 4]) {
    use Face::*;

    match (r, t) {
        (0, 0) | (2, 2) => {
            let d = if r == 0 {
                [Left, Up, Right, Down]
            } else {
                [Right, Down, Left, Up]
            };
            (Front, Back, d)
        }
        (0, 2) | (2, 0) => {
            let d = if r == 0 {
                [Left, Down, Right, Up]
            } else {
                [Right, Up, Left, Down]
            };
            (Back, Front, d)
        }
        (0, 1) | (1, 1) | (2, 3) | (3, 1) => {
            let d = if r == 0 {
                [Left, Back, Right, Front]
            } else {
                [Right, Front, Left, Back]
            };
            (Up, Down, d)
        }
        (0, 3) | (1, 3) | (2, 1) | (3, 3) => {
            let d = if r == 0 {
                [Left, Front, Right, Back]
            } else {
                [Right, Back, Left, Front]
            };
            (Down, Up, d)
        }
        (1, 0) | (3, 2) => {
            let d = if r == 1 {
                [Back, Up, Front, Down]
            } else {
                [Front, Down, Back, Up]
            };
            (Left, Right, d)
        }
        (1, 2) | (3, 0) => {
            let d = if r == 1 {
                [Back, Down, Front, Up]
            } else {
                [Front, Up, Back, Down]
            };
            (Right, Left, d)
        }
        _ => panic!("rotation components must be in 0..4"),
    }
}

/// Derives the relative cells for one rotation code, in A, B, C, D order.
pub const fn derive_orientation(code: RotationCode) -> [Coord; CUBES_PER_PIECE] {
    let (a, c, d_candidates) = arrangement(code.r(), code.t());
    let d = d_candidates[code.s() as usize];
    [a.offset(), Face::Center.offset(), c.offset(), d.offset()]
}

const fn build_orientation_table() -> [[Coord; CUBES_PER_PIECE]; NUM_ROTATION_CODES] {
    let mut table = [[(0, 0, 0); CUBES_PER_PIECE]; NUM_ROTATION_CODES];
    let mut index = 0;
    while index < NUM_ROTATION_CODES {
        table[index] = derive_orientation(RotationCode::from_index(index));
        index += 1;
    }
    table
}

static ORIENTATIONS: [[Coord; CUBES_PER_PIECE]; NUM_ROTATION_CODES] =
    build_orientation_table();

/// Relative cells for a rotation code. Index 1 is always the anchor `(0, 0, 0)`.
#[inline]
pub fn orientation_for(code: RotationCode) -> &'static [Coord; CUBES_PER_PIECE] {
    &ORIENTATIONS[code.index()]
}

/// All 24 proper rotations of the cube, as coordinate maps.
///
/// Organized as 6 face-up choices x 4 quarter turns around the vertical axis.
pub const ROTATIONS: [fn(Coord) -> Coord; 24] = [
    // +Z up
    |(x, y, z)| (x, y, z),
    |(x, y, z)| (-y, x, z),
    |(x, y, z)| (-x, -y, z),
    |(x, y, z)| (y, -x, z),
    // +Y up
    |(x, y, z)| (x, -z, y),
    |(x, y, z)| (z, x, y),
    |(x, y, z)| (-x, z, y),
    |(x, y, z)| (-z, -x, y),
    // -Z up
    |(x, y, z)| (x, -y, -z),
    |(x, y, z)| (y, x, -z),
    |(x, y, z)| (-x, y, -z),
    |(x, y, z)| (-y, -x, -z),
    // -Y up
    |(x, y, z)| (x, z, -y),
    |(x, y, z)| (-z, x, -y),
    |(x, y, z)| (-x, -z, -y),
    |(x, y, z)| (z, -x, -y),
    // +X up
    |(x, y, z)| (z, y, -x),
    |(x, y, z)| (-y, z, -x),
    |(x, y, z)| (-z, -y, -x),
    |(x, y, z)| (y, -z, -x),
    // -X up
    |(x, y, z)| (-z, y, x),
    |(x, y, z)| (-y, -z, x),
    |(x, y, z)| (z, -y, x),
    |(x, y, z)| (y, z, x),
];

/// Translates cells so the minimum x, y, z are zero, then sorts them.
///
/// Two cell sets with the same normalized form are the same shape up to
/// translation.
pub fn normalize_shape(cells: &[Coord]) -> Vec<Coord> {
    let min_x = cells.iter().map(|c| c.0).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.1).min().unwrap_or(0);
    let min_z = cells.iter().map(|c| c.2).min().unwrap_or(0);

    let mut shape: Vec<Coord> = cells
        .iter()
        .map(|&(x, y, z)| (x - min_x, y - min_y, z - min_z))
        .collect();
    shape.sort_unstable();
    shape
}

/// Every distinct orientation of a shape under the 24 cube rotations.
pub fn all_orientations(cells: &[Coord]) -> Vec<Vec<Coord>> {
    let mut orientations: Vec<Vec<Coord>> = ROTATIONS
        .iter()
        .map(|rotate| {
            let rotated: Vec<Coord> = cells.iter().map(|&cell| rotate(cell)).collect();
            normalize_shape(&rotated)
        })
        .collect();

    orientations.sort();
    orientations.dedup();
    orientations
}

/// The distinct shapes produced by the 64 table entries.
pub fn table_shapes() -> Vec<Vec<Coord>> {
    let mut shapes: Vec<Vec<Coord>> = ORIENTATIONS
        .iter()
        .map(|cells| normalize_shape(cells))
        .collect();
    shapes.sort();
    shapes.dedup();
    shapes
}

/// Number of distinct orientations the piece has in space.
pub fn piece_orientation_count() -> usize {
    all_orientations(&ORIENTATIONS[0]).len()
}

/// Renders the table, one code per line: `rst: A B C D`.
pub fn format_orientation_table() -> String {
    let mut output = String::new();
    for code in RotationCode::all() {
        output.push_str(&format!("{code}:"));
        for &(x, y, z) in orientation_for(code) {
            output.push_str(&format!(" ({x:>2},{y:>2},{z:>2})"));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_four_distinct_cells_with_anchor() {
        for code in RotationCode::all() {
            let cells = orientation_for(code);
            assert_eq!(cells[1], (0, 0, 0), "B must sit on the anchor for {code}");
            for i in 0..CUBES_PER_PIECE {
                for j in (i + 1)..CUBES_PER_PIECE {
                    assert_ne!(cells[i], cells[j], "duplicate cell in {code}");
                }
            }
        }
    }

    #[test]
    fn test_a_and_c_are_antipodal_and_d_is_orthogonal() {
        for code in RotationCode::all() {
            let [a, _, c, d] = *orientation_for(code);
            assert_eq!((a.0 + c.0, a.1 + c.1, a.2 + c.2), (0, 0, 0), "{code}");
            let dot = a.0 * d.0 + a.1 * d.1 + a.2 * d.2;
            assert_eq!(dot, 0, "D must not lie on the A-C axis for {code}");
        }
    }

    #[test]
    fn test_table_reaches_every_orientation_of_the_piece() {
        let flat_t = [(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0)];
        let expected = all_orientations(&flat_t);
        assert_eq!(expected.len(), 12);
        assert_eq!(piece_orientation_count(), 12);
        assert_eq!(table_shapes(), expected);
    }

    #[test]
    fn test_each_code_matches_its_derivation() {
        for code in RotationCode::all() {
            assert_eq!(*orientation_for(code), derive_orientation(code));
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(
            *orientation_for(RotationCode::new(0, 0, 0)),
            [(-1, 0, 0), (0, 0, 0), (1, 0, 0), (0, 1, 0)]
        );
        assert_eq!(
            *orientation_for(RotationCode::new(3, 3, 3)),
            [(0, 0, -1), (0, 0, 0), (0, 0, 1), (-1, 0, 0)]
        );
        assert_eq!(
            *orientation_for(RotationCode::new(1, 1, 0)),
            [(0, 1, 0), (0, 0, 0), (0, -1, 0), (0, 0, 1)]
        );
    }

    #[test]
    fn test_orientation_table_snapshot() {
        insta::assert_snapshot!("orientation_table", format_orientation_table());
    }
}
