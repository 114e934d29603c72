//! Nearest-neighbor tour construction.

use crate::geometry::distance;
use crate::instance::Instance;

/// Greedily builds a tour by repeatedly appending the closest unvisited
/// vertex, O(V²).
///
/// `start` is a dense index; `None` starts from index 0 (smallest id).
/// Unvisited candidates are scanned in ascending index order with a
/// strict `<` comparison, so distance ties keep the first-found vertex
/// and the construction is deterministic.
///
/// # Panics
///
/// Panics if the instance is empty or `start` is out of range.
pub fn nearest_neighbor(instance: &Instance, start: Option<usize>) -> Vec<usize> {
    let n = instance.len();
    assert!(n > 0, "cannot construct a tour over an empty instance");
    let start = start.unwrap_or(0);
    assert!(start < n, "start index {start} out of range for {n} vertices");

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    visited[start] = true;
    order.push(start);

    let mut current = start;
    for _ in 1..n {
        let here = instance.point(current);
        let mut nearest = None;
        let mut min_dist = i64::MAX;
        for v in 0..n {
            if !visited[v] {
                let d = distance(here, instance.point(v));
                if d < min_dist {
                    min_dist = d;
                    nearest = Some(v);
                }
            }
        }
        // Unvisited vertices remain as long as the loop runs.
        let next = nearest.expect("no unvisited vertex found");
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}
