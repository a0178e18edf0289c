//! Labeled, weighted directed graphs
//!
//! Provides the graph ADT and its algorithms:
//! - `Graph` arena of labeled vertices with weighted outgoing edges
//! - Lazy BFS and DFS traversal
//! - Dijkstra shortest paths (linear scan or binary heap)
//! - DOT rendering
//! - Graph provider trait used by the algorithms

pub mod algos;
pub mod digraph;
pub mod dot;
pub mod traversal;
pub mod types;
pub mod vertex;

pub use algos::{Bfs, Dfs};
pub use digraph::Graph;
pub use dot::{is_dot_identifier, validate_dot_name, Dot, DEFAULT_GRAPH_NAME};
pub use traversal::GraphProvider;
pub use types::{
    parse_weight, DuplicateVertexPolicy, GraphOptions, PathStrategy, ShortestPath, Weight,
};
pub use vertex::{Neighbor, Vertex, VertexId};
