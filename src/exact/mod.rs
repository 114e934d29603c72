//! Exhaustive optimal solver.
//!
//! Bounded enumeration of all tours with the first vertex fixed. Only
//! practical for very small instances; shares the (tour, length)
//! contract with the approximation and local-search solvers and honors
//! the same wall-clock cutoff discipline.

mod runner;

pub use runner::{ExactResult, ExactRunner};
