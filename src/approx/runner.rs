//! 2-approximation execution: MST → adjacency → preorder → tour.

use super::mst::build_mst;
use super::traversal::{adjacency, preorder};
use crate::geometry::tour_length;
use crate::instance::{Instance, VertexId};

/// Result of the 2-approximation solver.
#[derive(Debug, Clone)]
pub struct ApproxResult {
    /// Tour as vertex identifiers, a permutation of the instance's ids.
    pub tour: Vec<VertexId>,

    /// Total cyclic tour length.
    pub length: i64,
}

/// Executes the MST-doubling 2-approximation.
pub struct ApproxRunner;

impl ApproxRunner {
    /// Runs the approximation on the given instance.
    ///
    /// The preorder walk of a minimum spanning tree shortcuts the tree's
    /// Eulerian doubling, so the returned tour is at most twice the
    /// optimal length. Deterministic: the traversal starts at the
    /// smallest vertex id and all tie breaks follow ascending id order.
    ///
    /// # Panics
    ///
    /// Panics if the instance has fewer than 2 vertices, or if the
    /// traversal fails to cover the spanning tree (an internal
    /// invariant violation, never a normal outcome).
    pub fn run(instance: &Instance) -> ApproxResult {
        assert!(
            instance.len() >= 2,
            "approximation requires at least 2 vertices, got {}",
            instance.len()
        );

        let parent = build_mst(instance);
        let adj = adjacency(&parent);
        let order = preorder(&adj, 0);
        assert_eq!(
            order.len(),
            instance.len(),
            "preorder traversal did not cover the spanning tree"
        );

        let length = tour_length(&order, instance);
        log::debug!(
            "approximation: {} vertices, tour length {}",
            instance.len(),
            length
        );

        ApproxResult {
            tour: instance.to_ids(&order),
            length,
        }
    }
}
