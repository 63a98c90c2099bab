//! File I/O for saving and loading a tiling.
//!
//! Binary format for `tiling.bin` (little endian):
//! - u32: cube side
//! - u32: piece count
//! - repeat per piece:
//!   - u32: identity
//!   - 3 bytes: anchor x, y, z
//!   - 3 bytes: rotation r, s, t
//!
//! `tiling.txt` holds the same grid as layered text for reading by eye.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{bail, Context};

use crate::config::{MAX_SIDE, MIN_SIDE};
use crate::grid::Grid;
use crate::pieces::{Piece, PieceId, RotationCode, CUBES_PER_PIECE};

pub const TILING_BIN: &str = "tiling.bin";
pub const TILING_TXT: &str = "tiling.txt";

/// Saves the grid to both binary and text files in `dir`.
pub fn save(grid: &Grid, dir: &Path) -> anyhow::Result<()> {
    save_text(grid, &dir.join(TILING_TXT))?;
    save_binary(grid, &dir.join(TILING_BIN))?;
    Ok(())
}

fn save_text(grid: &Grid, path: &Path) -> anyhow::Result<()> {
    let mut file = BufWriter::new(
        File::create(path).with_context(|| format!("creating {}", path.display()))?,
    );
    writeln!(
        file,
        "{} of {} pieces, {} empty cells:\n",
        grid.piece_count(),
        grid.cell_count() / CUBES_PER_PIECE,
        grid.empty_cell_count()
    )?;
    write!(file, "{}", grid.format_layers())?;
    file.flush()?;
    Ok(())
}

fn save_binary(grid: &Grid, path: &Path) -> anyhow::Result<()> {
    let mut file = BufWriter::new(
        File::create(path).with_context(|| format!("creating {}", path.display()))?,
    );

    file.write_all(&(grid.side() as u32).to_le_bytes())?;
    file.write_all(&(grid.piece_count() as u32).to_le_bytes())?;

    for piece in grid.sorted_pieces() {
        let (x, y, z) = piece.anchor;
        let rotation = piece.rotation;
        file.write_all(&piece.id.0.to_le_bytes())?;
        file.write_all(&[x as u8, y as u8, z as u8])?;
        file.write_all(&[rotation.r(), rotation.s(), rotation.t()])?;
    }

    file.flush()?;
    Ok(())
}

fn read_u32(reader: &mut impl Read) -> std::io::Result<u32> {
    let mut buffer = [0u8; 4];
    reader.read_exact(&mut buffer)?;
    Ok(u32::from_le_bytes(buffer))
}

fn read_side(reader: &mut impl Read) -> anyhow::Result<usize> {
    let side = read_u32(reader).context("reading cube side")? as usize;
    if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
        bail!("unsupported cube side {side}");
    }
    Ok(side)
}

fn open(dir: &Path) -> anyhow::Result<BufReader<File>> {
    let path = dir.join(TILING_BIN);
    let file = File::open(&path)
        .with_context(|| format!("opening {} (run `tetracube solve` first)", path.display()))?;
    Ok(BufReader::new(file))
}

/// Loads the saved tiling, rebuilding and re-checking the grid.
pub fn load(dir: &Path) -> anyhow::Result<Grid> {
    let mut file = open(dir)?;

    let side = read_side(&mut file)?;
    let piece_count = read_u32(&mut file).context("reading piece count")? as usize;
    if piece_count > side * side * side / CUBES_PER_PIECE {
        bail!("{piece_count} pieces cannot fit a cube of side {side}");
    }

    let mut grid = Grid::new(side);
    for index in 0..piece_count {
        let id = PieceId(read_u32(&mut file).with_context(|| format!("reading piece {index}"))?);
        let mut record = [0u8; 6];
        file.read_exact(&mut record)
            .with_context(|| format!("reading piece {index}"))?;

        let anchor = (record[0] as i32, record[1] as i32, record[2] as i32);
        let Some(rotation) = RotationCode::try_new(record[3], record[4], record[5]) else {
            bail!("piece {id} has invalid rotation {:?}", &record[3..]);
        };
        let piece = Piece::new(anchor, rotation, id);

        if grid.piece(id).is_some() {
            bail!("piece {id} appears twice");
        }
        if !grid.is_free(&piece.absolute_cells()) {
            bail!("piece {id} at {anchor:?} overlaps another piece or leaves the cube");
        }
        grid.place(piece);
    }

    Ok(grid)
}

/// Returns the number of saved pieces without loading them.
pub fn count(dir: &Path) -> anyhow::Result<usize> {
    let mut file = open(dir)?;
    read_side(&mut file)?;
    Ok(read_u32(&mut file).context("reading piece count")? as usize)
}
