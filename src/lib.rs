//! Solvers for the Euclidean Traveling Salesman Problem.
//!
//! Three strategies with different cost/quality tradeoffs:
//!
//! - **Exact** ([`exact`]): exhaustive enumeration with the first
//!   vertex fixed. Optimal, only viable for tiny instances, honors a
//!   wall-clock cutoff.
//! - **2-approximation** ([`approx`]): minimum spanning tree (dense
//!   Prim) plus depth-first preorder traversal. Deterministic, O(V²),
//!   tour length at most twice the optimum.
//! - **Local search** ([`local_search`]): nearest-neighbor construction
//!   refined by simulated annealing over the 2-opt neighborhood.
//!   Anytime, seed-reproducible, time-budgeted.
//!
//! All solvers consume an [`instance::Instance`] (id → point mapping)
//! and return a tour — a cyclic permutation of the vertex ids — with
//! its integer length. Distances are Euclidean, rounded to the nearest
//! integer ([`geometry::distance`]).
//!
//! Instances target the 2-D Euclidean case only; this is not a general
//! combinatorial-optimization framework.

pub mod approx;
pub mod exact;
pub mod geometry;
pub mod instance;
pub mod io;
pub mod local_search;
