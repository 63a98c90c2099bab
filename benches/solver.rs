//! Benchmarks for the tiling solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tetracube::geometry::orientation_for;
use tetracube::integrity::is_integral;
use tetracube::search::place_best_fit;
use tetracube::{Grid, PieceId, RotationCode, Solver, SolverConfig};

/// Builds a half-filled 6x6x6 grid from a fixed seed.
fn half_filled_grid() -> Grid {
    let mut solver = Solver::new(SolverConfig {
        seed: Some(7),
        ..SolverConfig::default()
    })
    .expect("default configuration is valid");
    while solver.placed_piece_count() < 27 {
        solver.advance_one_step();
    }
    solver.into_grid()
}

/// Benchmark looking up all 64 orientations.
fn bench_orientations(c: &mut Criterion) {
    c.bench_function("orientation_lookup", |b| {
        b.iter(|| {
            RotationCode::all()
                .map(|code| orientation_for(black_box(code))[3].0)
                .sum::<i32>()
        })
    });
}

/// Benchmark the void-integrity check on a partly filled cube.
fn bench_integrity(c: &mut Criterion) {
    let grid = half_filled_grid();
    c.bench_function("is_integral_6x6x6", |b| b.iter(|| is_integral(black_box(&grid))));
}

/// Benchmark a single best-fit placement, undone after each iteration.
fn bench_place_best_fit(c: &mut Criterion) {
    let mut grid = half_filled_grid();
    let mut rng = StdRng::seed_from_u64(1);
    let id = PieceId(u32::MAX);

    c.bench_function("place_best_fit_1800", |b| {
        b.iter(|| {
            let placed = place_best_fit(&mut grid, id, 12, 1800, &mut rng);
            grid.remove(id);
            placed
        })
    });
}

/// Benchmark tiling a 4x4x4 cube from scratch.
fn bench_solve_4x4x4(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);
    group.bench_function("4x4x4", |b| {
        b.iter(|| {
            let mut solver = Solver::new(SolverConfig {
                side: 4,
                batch_size: 300,
                seed: Some(42),
                ..SolverConfig::default()
            })
            .expect("side 4 is valid");
            solver.run(None)
        })
    });
    group.finish();
}

/// Benchmark formatting a grid for display.
fn bench_format_layers(c: &mut Criterion) {
    let grid = half_filled_grid();
    c.bench_function("format_layers", |b| b.iter(|| black_box(&grid).format_layers()));
}

criterion_group!(
    benches,
    bench_orientations,
    bench_integrity,
    bench_place_best_fit,
    bench_solve_4x4x4,
    bench_format_layers
);
criterion_main!(benches);
