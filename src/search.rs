//! Randomized best-fit placement.
//!
//! Each attempt draws a batch of random candidates, keeps those that fit,
//! and commits the one with the fewest empty neighbours. A commit that would
//! seal off an unusable void is rolled back and the attempt counts as failed.

use rand::Rng;

use crate::grid::Grid;
use crate::integrity::find_sealed_void;
use crate::pieces::{Piece, PieceId, RotationCode, ROTATION_STEPS};

/// Draws a piece with a uniform anchor in `[0, side)^3` and a uniform rotation code.
///
/// The piece may stick out of the grid; callers filter with [`Grid::is_free`].
pub fn random_piece<R: Rng + ?Sized>(rng: &mut R, side: usize, id: PieceId) -> Piece {
    let side = side as i32;
    let anchor = (
        rng.gen_range(0..side),
        rng.gen_range(0..side),
        rng.gen_range(0..side),
    );
    let rotation = RotationCode::new(
        rng.gen_range(0..ROTATION_STEPS),
        rng.gen_range(0..ROTATION_STEPS),
        rng.gen_range(0..ROTATION_STEPS),
    );
    Piece::new(anchor, rotation, id)
}

/// The snuggest fitting piece in one random batch, or `None` if nothing fits.
///
/// Ties keep generation order.
pub fn best_candidate<R: Rng + ?Sized>(
    grid: &Grid,
    id: PieceId,
    batch_size: usize,
    rng: &mut R,
) -> Option<Piece> {
    // draw the whole batch first so the rng stream does not depend on grid state
    let batch: Vec<Piece> = (0..batch_size)
        .map(|_| random_piece(&mut *rng, grid.side(), id))
        .collect();

    batch
        .into_iter()
        .filter(|piece| grid.is_free(&piece.absolute_cells()))
        .min_by_key(|piece| grid.piece_openings(piece))
}

/// Tries to add one piece with identity `id`.
///
/// Makes up to `max_attempt_batches` attempts. Returns true once a piece is
/// committed; on false the grid is exactly as it was before the call.
pub fn place_best_fit<R: Rng + ?Sized>(
    grid: &mut Grid,
    id: PieceId,
    max_attempt_batches: usize,
    batch_size: usize,
    rng: &mut R,
) -> bool {
    for attempt in 1..=max_attempt_batches {
        let Some(piece) = best_candidate(grid, id, batch_size, rng) else {
            log::trace!("attempt {attempt}: no candidate for {id} fits");
            continue;
        };

        grid.place(piece);
        match find_sealed_void(grid) {
            None => {
                log::debug!(
                    "placed {id} at {:?} rotation {} on attempt {attempt}",
                    piece.anchor,
                    piece.rotation
                );
                return true;
            }
            Some(void) => {
                log::trace!("attempt {attempt}: {id} would seal {void:?}, reverting");
                grid.remove(id);
            }
        }
    }

    false
}
