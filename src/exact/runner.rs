//! Exhaustive enumeration execution.

use std::time::{Duration, Instant};

use crate::geometry::tour_length;
use crate::instance::{Instance, VertexId};

/// The clock is polled once every this many permutations.
const TIME_CHECK_INTERVAL: u64 = 1000;

/// Result of an exhaustive search.
#[derive(Debug, Clone)]
pub struct ExactResult {
    /// Best tour found, as vertex identifiers.
    pub tour: Vec<VertexId>,

    /// Length of the best tour. Optimal when `completed` is true.
    pub length: i64,

    /// Whether the full permutation space was enumerated.
    pub completed: bool,

    /// Number of tours evaluated.
    pub permutations_checked: u64,
}

/// Exhaustive optimal solver: enumerates all `(n-1)!` tours with the
/// first vertex fixed.
pub struct ExactRunner;

impl ExactRunner {
    /// Enumerates tours in lexicographic order until exhaustion or the
    /// wall-clock cutoff, returning the best tour seen.
    ///
    /// # Panics
    ///
    /// Panics if the instance has fewer than 2 vertices.
    pub fn run(instance: &Instance, time_limit: Option<Duration>) -> ExactResult {
        let n = instance.len();
        assert!(n >= 2, "exact search requires at least 2 vertices, got {n}");

        let start = Instant::now();

        // Fixing the first vertex removes rotational duplicates.
        let mut rest: Vec<usize> = (1..n).collect();
        let mut order: Vec<usize> = Vec::with_capacity(n);
        let mut best: Vec<usize> = Vec::new();
        let mut best_length = i64::MAX;
        let mut checked = 0u64;
        let mut completed = true;

        loop {
            order.clear();
            order.push(0);
            order.extend_from_slice(&rest);

            let length = tour_length(&order, instance);
            if length < best_length {
                best_length = length;
                best = order.clone();
            }
            checked += 1;

            if checked.is_multiple_of(TIME_CHECK_INTERVAL) {
                if let Some(limit) = time_limit {
                    let elapsed = start.elapsed();
                    if elapsed >= limit {
                        log::info!(
                            "exact: time limit reached after {:.2}s, {checked} permutations checked",
                            elapsed.as_secs_f64()
                        );
                        completed = false;
                        break;
                    }
                }
            }

            if !next_permutation(&mut rest) {
                break;
            }
        }

        log::info!("exact: best length {best_length} over {checked} permutations");

        ExactResult {
            tour: instance.to_ids(&best),
            length: best_length,
            completed,
            permutations_checked: checked,
        }
    }
}

/// Advances `arr` to its lexicographic successor in place. Returns
/// false when `arr` was already the last permutation.
fn next_permutation(arr: &mut [usize]) -> bool {
    if arr.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix marks the pivot.
    let mut i = arr.len() - 1;
    while i > 0 && arr[i - 1] >= arr[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let pivot = i - 1;

    let mut j = arr.len() - 1;
    while arr[j] <= arr[pivot] {
        j -= 1;
    }
    arr.swap(pivot, j);
    arr[i..].reverse();
    true
}
