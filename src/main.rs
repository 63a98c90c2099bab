//! T-Tetracube Tiler
//!
//! Fills a cube with t-tetracubes (four unit cubes in a flat T) until no cell
//! is left empty, saves the tiling, and shows it in an interactive 3D viewer.

mod visualization;

use std::path::Path;

use clap::{Args, Parser, Subcommand};

use tetracube::{geometry, persistence, Grid, Solver, SolverConfig};

/// Tiles a cube with t-tetracubes and visualizes the result.
#[derive(Parser)]
#[command(name = "tetracube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Tile the cube and save the result to disk.
    Solve(SolveArgs),
    /// Display the saved tiling in an interactive 3D viewer.
    Display,
    /// Show the number of pieces in the saved tiling.
    Count,
    /// Print the 64-entry orientation table.
    Orientations,
    /// Export the saved tiling as JavaScript for a web page.
    ExportJs,
}

#[derive(Args)]
struct SolveArgs {
    /// Side length of the cube; the cell count must be a multiple of 4.
    #[arg(long, default_value_t = 6)]
    side: usize,
    /// Random candidates drawn per attempt.
    #[arg(long, default_value_t = 1800)]
    batch_size: usize,
    /// Attempts per step before the step counts as a stall.
    #[arg(long, default_value_t = 12)]
    max_batches: usize,
    /// Pieces removed by the first stall.
    #[arg(long, default_value_t = 3)]
    stall_base: usize,
    /// Consecutive stalls between doublings of the removal count.
    #[arg(long, default_value_t = 100)]
    stall_period: u32,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Give up after this many steps.
    #[arg(long)]
    max_steps: Option<u64>,
}

impl Default for SolveArgs {
    fn default() -> Self {
        let config = SolverConfig::default();
        Self {
            side: config.side,
            batch_size: config.batch_size,
            max_batches: config.max_attempt_batches,
            stall_base: config.stall_base_removal,
            stall_period: config.stall_doubling_period,
            seed: config.seed,
            max_steps: None,
        }
    }
}

impl SolveArgs {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            side: self.side,
            batch_size: self.batch_size,
            max_attempt_batches: self.max_batches,
            stall_base_removal: self.stall_base,
            stall_doubling_period: self.stall_period,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let here = Path::new(".");

    match cli.command {
        Some(Command::Solve(args)) => {
            run_solver(&args, here)?;
        }
        Some(Command::Display) => run_display(here)?,
        Some(Command::Count) => run_count(here)?,
        Some(Command::Orientations) => run_orientations(),
        Some(Command::ExportJs) => run_export_js(here)?,
        None => {
            // default: solve and display
            let grid = run_solver(&SolveArgs::default(), here)?;
            println!("Controls: Up/Down explode, R reset");
            visualization::display(grid);
        }
    }

    Ok(())
}

/// Runs the solver, saves the tiling and returns the final grid.
fn run_solver(args: &SolveArgs, dir: &Path) -> anyhow::Result<Grid> {
    let mut solver = Solver::new(args.config())?;
    let summary = solver.run(args.max_steps);

    println!(
        "{} after {} steps ({} stalls): {}/{} pieces",
        if summary.complete { "Complete" } else { "Stopped" },
        summary.steps,
        summary.stalls,
        solver.placed_piece_count(),
        solver.target_piece_count()
    );
    print!("{}", solver.grid().format_layers());

    let grid = solver.into_grid();
    persistence::save(&grid, dir)?;
    println!("Wrote {} and {}", persistence::TILING_TXT, persistence::TILING_BIN);

    Ok(grid)
}

fn run_display(dir: &Path) -> anyhow::Result<()> {
    let grid = persistence::load(dir)?;
    println!("Loaded {} pieces", grid.piece_count());
    println!("Controls: Up/Down explode, R reset");
    visualization::display(grid);
    Ok(())
}

fn run_count(dir: &Path) -> anyhow::Result<()> {
    println!("{} pieces", persistence::count(dir)?);
    Ok(())
}

fn run_orientations() {
    print!("{}", geometry::format_orientation_table());
    println!(
        "{} codes reach {} of the piece's {} orientations",
        tetracube::pieces::NUM_ROTATION_CODES,
        geometry::table_shapes().len(),
        geometry::piece_orientation_count()
    );
}

fn run_export_js(dir: &Path) -> anyhow::Result<()> {
    let grid = persistence::load(dir)?;
    print!("{}", format_js(&grid));
    Ok(())
}

/// Formats the pieces as `const TILING = { side, pieces: [[id, [[x,y,z], ...]], ...] };`.
fn format_js(grid: &Grid) -> String {
    let pieces = grid.sorted_pieces();
    let mut output = format!("const TILING = {{\n  side: {},\n  pieces: [\n", grid.side());
    for (i, piece) in pieces.iter().enumerate() {
        let cells: Vec<String> = piece
            .absolute_cells()
            .iter()
            .map(|(x, y, z)| format!("[{x},{y},{z}]"))
            .collect();
        output.push_str(&format!("    [{}, [{}]]", piece.id.0, cells.join(",")));
        if i < pieces.len() - 1 {
            output.push(',');
        }
        output.push('\n');
    }
    output.push_str("  ],\n};\n");
    output
}
