//! 2-opt neighborhood operator.
//!
//! A 2-opt move removes the tour edges `(t[i], t[i+1])` and
//! `(t[j], t[j+1])` (indices cyclic) and reconnects as `(t[i], t[j])`
//! and `(t[i+1], t[j+1])`, which is equivalent to reversing the segment
//! `t[i+1..=j]`.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman
//! problems", *Operations Research* 6(6), 791-812.

use crate::geometry::distance;
use crate::instance::Instance;

/// Net change in cyclic tour length if the move `(i, j)` were applied,
/// computed in O(1) from the four affected edges. Negative means the
/// move shortens the tour.
///
/// Requires `i < j < order.len()`. The pair `(i, i+1)` is degenerate
/// (the two edges share an endpoint) and must be rejected by the caller
/// before evaluation.
pub fn delta(order: &[usize], instance: &Instance, i: usize, j: usize) -> i64 {
    debug_assert!(i < j && j < order.len());
    let n = order.len();
    let a = instance.point(order[i]);
    let b = instance.point(order[(i + 1) % n]);
    let c = instance.point(order[j]);
    let d = instance.point(order[(j + 1) % n]);

    (distance(a, c) + distance(b, d)) - (distance(a, b) + distance(c, d))
}

/// Applies the move `(i, j)`: returns a new tour with the segment
/// `order[i+1..=j]` reversed. Self-inverse: applying the same move
/// twice restores the original tour.
///
/// The caller must reject degenerate pairs (`i == j` or `j == i + 1`)
/// before invoking; they are no-op moves and must not count as
/// progress.
pub fn apply(order: &[usize], i: usize, j: usize) -> Vec<usize> {
    debug_assert!(i + 1 < j && j < order.len(), "degenerate 2-opt move ({i}, {j})");
    let mut new_order = order.to_vec();
    new_order[i + 1..=j].reverse();
    new_order
}
