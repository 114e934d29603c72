//! Problem instance: a read-only mapping from vertex identifiers to points.
//!
//! Vertices are stored sorted by identifier, so dense index order is
//! ascending identifier order. Every determinism rule in the solvers
//! (start vertex, minimum-key tie breaks, nearest-neighbor tie breaks)
//! reduces to "scan dense indices in ascending order".

use crate::geometry::Point;

/// External vertex identifier, as read from the instance file.
pub type VertexId = u32;

/// An immutable set of identified 2-D points.
///
/// Solvers operate on dense indices `0..len()` and translate back to
/// [`VertexId`] at the boundary via [`Instance::to_ids`].
#[derive(Debug, Clone)]
pub struct Instance {
    /// Sorted by id ascending; ids are unique.
    vertices: Vec<(VertexId, Point)>,
}

impl Instance {
    /// Builds an instance from `(id, point)` pairs.
    ///
    /// Sorts by id. Uniqueness of ids is the loader's responsibility
    /// (checked in `io::read_instance`); a duplicate here is a
    /// programming error and is caught by a debug assertion.
    pub fn new(mut vertices: Vec<(VertexId, Point)>) -> Self {
        vertices.sort_by_key(|&(id, _)| id);
        debug_assert!(
            vertices.windows(2).all(|w| w[0].0 < w[1].0),
            "duplicate vertex id in instance"
        );
        Self { vertices }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Identifier of the vertex at dense index `index`.
    pub fn id(&self, index: usize) -> VertexId {
        self.vertices[index].0
    }

    /// Point of the vertex at dense index `index`.
    pub fn point(&self, index: usize) -> Point {
        self.vertices[index].1
    }

    /// All identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|&(id, _)| id)
    }

    /// Translates a dense-index ordering into vertex identifiers.
    pub fn to_ids(&self, order: &[usize]) -> Vec<VertexId> {
        order.iter().map(|&i| self.id(i)).collect()
    }
}
