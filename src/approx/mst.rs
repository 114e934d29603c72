//! Minimum spanning tree construction.
//!
//! Dense Prim's algorithm, O(V²) with no priority queue: on a complete
//! Euclidean graph every vertex pair is an edge, so the linear-scan
//! variant beats a heap-based one.
//!
//! # Reference
//!
//! Prim, R.C. (1957). "Shortest connection networks and some
//! generalizations", *Bell System Technical Journal* 36(6), 1389-1401.

use crate::geometry::distance;
use crate::instance::Instance;

/// Builds a minimum spanning tree over the instance, rooted at dense
/// index 0 (the smallest vertex id).
///
/// Returns the parent relation: `parent[v]` is `Some(u)` for every
/// non-root vertex, `None` exactly at the root. Ties in the minimum-key
/// scan break to the lowest dense index, so the tree is deterministic
/// for a given instance.
///
/// # Panics
///
/// Panics if the instance has fewer than 2 vertices; callers must
/// reject degenerate instances before solving.
pub fn build_mst(instance: &Instance) -> Vec<Option<usize>> {
    let n = instance.len();
    assert!(n >= 2, "MST requires at least 2 vertices, got {n}");

    let mut in_tree = vec![false; n];
    let mut key = vec![i64::MAX; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    key[0] = 0;

    for _ in 0..n {
        // Cheapest vertex not yet in the tree, first-found on ties.
        let mut u = None;
        let mut min_key = i64::MAX;
        for v in 0..n {
            if !in_tree[v] && key[v] < min_key {
                min_key = key[v];
                u = Some(v);
            }
        }
        let Some(u) = u else { break };
        in_tree[u] = true;

        let pu = instance.point(u);
        for v in 0..n {
            if !in_tree[v] {
                let w = distance(pu, instance.point(v));
                if w < key[v] {
                    key[v] = w;
                    parent[v] = Some(u);
                }
            }
        }
    }

    parent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn line_instance() -> Instance {
        Instance::new(vec![
            (1, Point::new(0.0, 0.0)),
            (2, Point::new(1.0, 0.0)),
            (3, Point::new(2.0, 0.0)),
            (4, Point::new(3.0, 0.0)),
        ])
    }

    #[test]
    fn test_mst_line_is_a_path() {
        let parent = build_mst(&line_instance());
        assert_eq!(parent, vec![None, Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_mst_root_has_no_parent() {
        let parent = build_mst(&line_instance());
        assert_eq!(parent[0], None);
        assert_eq!(parent.iter().filter(|p| p.is_some()).count(), 3);
    }

    #[test]
    fn test_mst_parents_reach_root_acyclically() {
        let instance = Instance::new(vec![
            (1, Point::new(0.0, 0.0)),
            (2, Point::new(4.0, 0.0)),
            (3, Point::new(0.0, 3.0)),
            (4, Point::new(4.0, 3.0)),
            (5, Point::new(2.0, 1.5)),
        ]);
        let parent = build_mst(&instance);
        for start in 0..instance.len() {
            let mut v = start;
            let mut steps = 0;
            while let Some(p) = parent[v] {
                v = p;
                steps += 1;
                assert!(steps <= instance.len(), "cycle in parent relation");
            }
            assert_eq!(v, 0, "parent chain must end at the root");
        }
    }

    #[test]
    fn test_mst_total_weight_square() {
        // Unit square: MST weight is 3 (three unit edges).
        let instance = Instance::new(vec![
            (1, Point::new(0.0, 0.0)),
            (2, Point::new(0.0, 1.0)),
            (3, Point::new(1.0, 1.0)),
            (4, Point::new(1.0, 0.0)),
        ]);
        let parent = build_mst(&instance);
        let weight: i64 = parent
            .iter()
            .enumerate()
            .filter_map(|(v, p)| {
                p.map(|p| distance(instance.point(v), instance.point(p)))
            })
            .sum();
        assert_eq!(weight, 3);
    }

    #[test]
    #[should_panic(expected = "at least 2 vertices")]
    fn test_mst_rejects_single_vertex() {
        let instance = Instance::new(vec![(1, Point::new(0.0, 0.0))]);
        build_mst(&instance);
    }
}
