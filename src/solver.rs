//! Step-driven tiling solver.
//!
//! Each call to [`Solver::advance_one_step`] either adds one piece or, after
//! all attempts fail, prunes the grid through stall recovery. Between steps
//! the grid is always consistent, so callers may stop at any step boundary.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SolverConfig;
use crate::grid::Grid;
use crate::pieces::{Piece, PieceId};
use crate::recovery::StallRecovery;
use crate::search::place_best_fit;

/// Result of one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// A new piece was committed during this step.
    pub placed: bool,
    /// The cube is completely tiled.
    pub complete: bool,
}

/// Totals reported by [`Solver::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u64,
    pub stalls: u64,
    pub complete: bool,
}

/// Owns the grid, random source and recovery state of one tiling run.
pub struct Solver {
    config: SolverConfig,
    grid: Grid,
    rng: StdRng,
    recovery: StallRecovery,
    next_id: u32,
    steps: u64,
    stalls: u64,
}

impl Solver {
    /// Validates the configuration and starts from an empty grid.
    pub fn new(config: SolverConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let recovery = StallRecovery::new(config.stall_base_removal, config.stall_doubling_period);

        log::info!(
            "tiling a {side}x{side}x{side} cube with {} pieces (seed {:?})",
            config.target_piece_count(),
            config.seed,
            side = config.side
        );

        Ok(Self {
            grid: Grid::new(config.side),
            config,
            rng,
            recovery,
            next_id: 1,
            steps: 0,
            stalls: 0,
        })
    }

    /// Tries to add one piece; on failure removes exposed pieces instead.
    pub fn advance_one_step(&mut self) -> StepOutcome {
        if self.is_complete() {
            return StepOutcome {
                placed: false,
                complete: true,
            };
        }

        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.steps += 1;

        let placed = place_best_fit(
            &mut self.grid,
            id,
            self.config.max_attempt_batches,
            self.config.batch_size,
            &mut self.rng,
        );

        if !placed {
            self.stalls += 1;
            let removed = self.recovery.relieve(&mut self.grid);
            log::debug!(
                "step {}: stalled at {} pieces, removed {}",
                self.steps,
                self.grid.piece_count() + removed.len(),
                removed.len()
            );
        }

        let complete = self.is_complete();
        if complete {
            log::info!(
                "cube complete after {} steps and {} stalls",
                self.steps,
                self.stalls
            );
        }

        StepOutcome { placed, complete }
    }

    /// Advances until the cube is complete or `max_steps` steps have been taken
    /// by this call. `None` runs without a budget.
    pub fn run(&mut self, max_steps: Option<u64>) -> RunSummary {
        let mut taken = 0;
        while !self.is_complete() && max_steps.map_or(true, |limit| taken < limit) {
            self.advance_one_step();
            taken += 1;
        }

        if !self.is_complete() {
            log::info!(
                "stopped after {taken} steps with {}/{} pieces",
                self.placed_piece_count(),
                self.target_piece_count()
            );
        }

        RunSummary {
            steps: self.steps,
            stalls: self.stalls,
            complete: self.is_complete(),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell states in x-major order.
    pub fn grid_snapshot(&self) -> Vec<Option<PieceId>> {
        self.grid.snapshot()
    }

    /// Placed pieces sorted by identity.
    pub fn pieces(&self) -> Vec<Piece> {
        self.grid.sorted_pieces()
    }

    pub fn placed_piece_count(&self) -> usize {
        self.grid.piece_count()
    }

    pub fn target_piece_count(&self) -> usize {
        self.config.target_piece_count()
    }

    pub fn is_complete(&self) -> bool {
        self.placed_piece_count() == self.target_piece_count()
    }

    /// Steps taken since the solver was created.
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// Steps that ended in stall recovery.
    pub fn stall_count(&self) -> u64 {
        self.stalls
    }

    /// Consumes the solver, keeping only the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
