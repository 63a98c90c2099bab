use std::collections::HashSet;

use tetracube::{Coord, Solver, SolverConfig};

fn seeded(side: usize, batch_size: usize, seed: u64) -> Solver {
    Solver::new(SolverConfig {
        side,
        batch_size,
        seed: Some(seed),
        ..SolverConfig::default()
    })
    .expect("valid configuration")
}

/// Every placed cell belongs to exactly one piece.
fn assert_no_overlap(solver: &Solver) {
    let mut seen: HashSet<Coord> = HashSet::new();
    for piece in solver.pieces() {
        for cell in piece.absolute_cells() {
            assert!(seen.insert(cell), "cell {cell:?} claimed twice");
        }
    }
    assert_eq!(seen.len(), solver.placed_piece_count() * 4);
}

#[test]
fn small_cube_never_overlaps_and_completes() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut solver = seeded(4, 300, 2024);
    for _ in 0..20_000 {
        let outcome = solver.advance_one_step();
        assert_no_overlap(&solver);
        if outcome.complete {
            break;
        }
    }

    assert!(solver.is_complete());
    assert_eq!(solver.placed_piece_count(), 16);
    assert!(solver.grid_snapshot().iter().all(Option::is_some));
}

#[test]
fn several_seeds_complete_small_cube() {
    for seed in 0..5 {
        let mut solver = seeded(4, 300, seed);
        let summary = solver.run(Some(20_000));
        assert!(summary.complete, "seed {seed}: {summary:?}");
        assert_eq!(solver.grid().empty_cell_count(), 0);
    }
}

#[test]
#[ignore = "takes minutes when not running in release mode"]
fn default_cube_is_completely_tiled() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut solver = seeded(6, 1800, 42);
    let summary = solver.run(Some(100_000));
    log::info!("{summary:?}");

    assert!(summary.complete, "{summary:?}");
    assert!(solver.is_complete());
    assert_eq!(solver.placed_piece_count(), 54);
    assert_eq!(solver.grid().empty_cell_count(), 0);
    assert_no_overlap(&solver);
}
