//! MST-based 2-approximation for the Euclidean TSP.
//!
//! Builds a minimum spanning tree with dense Prim, then takes the
//! depth-first preorder of the tree as the tour. Shortcutting the
//! doubled spanning tree this way yields a tour at most twice the
//! optimum on metric instances.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem"
//! - Cormen et al., *Introduction to Algorithms*, §35.2 (approx-TSP-tour)

mod mst;
mod runner;
mod traversal;

pub use mst::build_mst;
pub use runner::{ApproxResult, ApproxRunner};
pub use traversal::{adjacency, preorder};
