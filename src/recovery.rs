//! Stall recovery.
//!
//! When no piece can be added, the most exposed placed pieces are pulled out
//! to reopen space. The number removed doubles after every `doubling_period`
//! consecutive stalls, and drops back to the base once the grid is emptied.

use std::cmp::Reverse;

use crate::grid::Grid;
use crate::pieces::PieceId;

/// Escalating removal state. One instance lives for the whole solver run.
#[derive(Clone, Debug)]
pub struct StallRecovery {
    base_removal: usize,
    doubling_period: u32,
    stalls_since_reset: u32,
}

impl StallRecovery {
    /// # Panics
    ///
    /// Panics if `doubling_period` is zero.
    pub fn new(base_removal: usize, doubling_period: u32) -> Self {
        assert!(doubling_period > 0, "doubling period must be positive");
        Self {
            base_removal,
            doubling_period,
            stalls_since_reset: 0,
        }
    }

    /// Stalls handled since the grid was last emptied.
    pub fn stalls_since_reset(&self) -> u32 {
        self.stalls_since_reset
    }

    /// How many pieces the next call to [`StallRecovery::relieve`] removes.
    pub fn removal_count(&self) -> usize {
        let doublings = self.stalls_since_reset / self.doubling_period;
        match 1usize.checked_shl(doublings) {
            Some(factor) => self.base_removal.saturating_mul(factor),
            None => usize::MAX,
        }
    }

    /// Removes the most exposed pieces and returns their identities.
    ///
    /// Exposure is [`Grid::piece_openings`], measured before any removal. Ties
    /// go to the older identity.
    pub fn relieve(&mut self, grid: &mut Grid) -> Vec<PieceId> {
        let count = self.removal_count();

        let mut ranked: Vec<(u32, PieceId)> = grid
            .pieces()
            .map(|piece| (grid.piece_openings(piece), piece.id))
            .collect();
        ranked.sort_unstable_by_key(|&(openings, id)| (Reverse(openings), id));

        let removed: Vec<PieceId> = ranked.into_iter().take(count).map(|(_, id)| id).collect();
        for &id in &removed {
            grid.remove(id);
        }

        self.stalls_since_reset += 1;
        if grid.is_empty() {
            log::debug!("stall emptied the grid, removal count back to {}", self.base_removal);
            self.stalls_since_reset = 0;
        } else {
            log::debug!(
                "stall {}: removed {} of {count} requested pieces",
                self.stalls_since_reset,
                removed.len()
            );
        }

        removed
    }
}
