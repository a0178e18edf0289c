//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Lazy breadth-first traversal
//! - `dfs`: Lazy depth-first traversal with an explicit stack
//! - `dijkstra`: Single-source shortest paths and path reconstruction

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::{reconstruct_path, shortest_path_tree, ShortestPathTree};
