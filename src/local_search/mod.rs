//! Local search for the Euclidean TSP: simulated annealing over the
//! 2-opt neighborhood, seeded with a nearest-neighbor construction.
//!
//! The engine is anytime and deterministic for a fixed seed. Tour
//! length is maintained incrementally from 2-opt deltas and stays
//! consistent with full recomputation after every accepted move.

mod config;
mod construct;
mod runner;
pub mod two_opt;

pub use config::AnnealConfig;
pub use construct::nearest_neighbor;
pub use runner::{AnnealResult, AnnealRunner, Milestone};
