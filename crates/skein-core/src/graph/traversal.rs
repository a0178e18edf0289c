use crate::graph::digraph::Graph;
use crate::graph::vertex::{Neighbor, VertexId};

/// Trait for providing graph adjacency to the traversal and path algorithms
pub trait GraphProvider {
    /// Number of vertices; valid ids are `0..vertex_count()` in insertion order
    fn vertex_count(&self) -> usize;
    fn label_of(&self, id: VertexId) -> &str;
    fn successors(&self, id: VertexId) -> &[Neighbor];
}

impl GraphProvider for Graph {
    fn vertex_count(&self) -> usize {
        self.vertex_count()
    }

    fn label_of(&self, id: VertexId) -> &str {
        self.vertex_at(id).label()
    }

    fn successors(&self, id: VertexId) -> &[Neighbor] {
        self.vertex_at(id).neighbors()
    }
}
