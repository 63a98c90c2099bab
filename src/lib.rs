//! T-Tetracube Tiling Library
//!
//! Fills an N x N x N cube with copies of the t-tetracube using a randomized
//! best-fit search. A local void-integrity check keeps the search from sealing
//! off pockets too small for a piece, and stall recovery pulls out the most
//! exposed pieces whenever the search gets stuck.

pub mod config;
pub mod geometry;
pub mod grid;
pub mod integrity;
pub mod persistence;
pub mod pieces;
pub mod recovery;
pub mod search;
pub mod solver;

#[cfg(test)]
mod fixtures;

pub use config::SolverConfig;
pub use grid::Grid;
pub use pieces::{Coord, Piece, PieceId, RotationCode};
pub use solver::{RunSummary, Solver, StepOutcome};
