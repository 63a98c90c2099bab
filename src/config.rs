//! Solver configuration.

use anyhow::bail;

use crate::pieces::CUBES_PER_PIECE;

/// Largest supported side; cell coordinates are persisted as single bytes.
pub const MAX_SIDE: usize = 255;

/// The piece is three cells long, so nothing smaller can hold one.
pub const MIN_SIDE: usize = 3;

/// Parameters fixed for the lifetime of a solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Side length N of the cube.
    pub side: usize,
    /// Random candidates drawn per attempt.
    pub batch_size: usize,
    /// Attempts per step before declaring a stall.
    pub max_attempt_batches: usize,
    /// Pieces removed by the first stall after a reset.
    pub stall_base_removal: usize,
    /// Consecutive stalls between doublings of the removal count.
    pub stall_doubling_period: u32,
    /// Seed for reproducible runs; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            side: 6,
            batch_size: 1800,
            max_attempt_batches: 12,
            stall_base_removal: 3,
            stall_doubling_period: 100,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Total cells in the cube.
    pub fn cell_count(&self) -> usize {
        self.side * self.side * self.side
    }

    /// Number of pieces in a complete tiling (`N^3 / 4`).
    pub fn target_piece_count(&self) -> usize {
        self.cell_count() / CUBES_PER_PIECE
    }

    /// Rejects configurations whose cube can never be completely tiled.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.side < MIN_SIDE {
            bail!("cube side {} is smaller than the piece, which spans {MIN_SIDE} cells", self.side);
        }
        if self.side > MAX_SIDE {
            bail!("cube side {} exceeds the maximum of {MAX_SIDE}", self.side);
        }
        if self.cell_count() % CUBES_PER_PIECE != 0 {
            bail!(
                "a cube of side {} has {} cells, which {CUBES_PER_PIECE}-cell pieces cannot tile",
                self.side,
                self.cell_count()
            );
        }
        if self.batch_size == 0 {
            bail!("batch size must be positive");
        }
        if self.max_attempt_batches == 0 {
            bail!("at least one attempt batch is required");
        }
        if self.stall_base_removal == 0 {
            bail!("stall recovery must remove at least one piece");
        }
        if self.stall_doubling_period == 0 {
            bail!("stall doubling period must be positive");
        }
        Ok(())
    }
}
