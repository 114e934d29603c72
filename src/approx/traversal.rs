//! Spanning-tree traversal: adjacency view and depth-first preorder.

/// Expands a parent relation into an undirected adjacency view.
///
/// Each parent edge contributes both directions. Neighbor lists are
/// deterministic: entries appear in ascending order of the child index
/// that introduced them. The view is transient — rebuild it from the
/// parent relation rather than mutating it.
pub fn adjacency(parent: &[Option<usize>]) -> Vec<Vec<usize>> {
    let mut adj = vec![Vec::new(); parent.len()];
    for (v, p) in parent.iter().enumerate() {
        if let Some(p) = *p {
            adj[v].push(p);
            adj[p].push(v);
        }
    }
    adj
}

/// Depth-first preorder over the adjacency view, starting at `root`.
///
/// A vertex is appended to the output the moment it is first reached,
/// before any of its children. Implemented with an explicit stack so
/// the walk cannot overflow the call stack on large instances; the
/// sequence is identical to the recursive formulation (children are
/// pushed in reverse so they pop in neighbor-list order).
///
/// Visits exactly the vertices reachable from `root`. On a spanning
/// tree that is all of them; a shorter output signals a malformed
/// parent relation and is asserted on by the caller.
pub fn preorder(adjacency: &[Vec<usize>], root: usize) -> Vec<usize> {
    let mut visited = vec![false; adjacency.len()];
    let mut order = Vec::with_capacity(adjacency.len());
    let mut stack = vec![root];

    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        order.push(u);
        for &v in adjacency[u].iter().rev() {
            if !visited[v] {
                stack.push(v);
            }
        }
    }

    order
}
