use crate::error::{Result, SkeinError};
use crate::graph::algos::{reconstruct_path, shortest_path_tree, Bfs, Dfs};
use crate::graph::types::{DuplicateVertexPolicy, GraphOptions, PathStrategy, ShortestPath, Weight};
use crate::graph::vertex::{Vertex, VertexId};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// A directed graph of labeled vertices joined by weighted edges.
///
/// Vertices live in an arena in insertion order and are looked up by label.
/// Adjacency stores `VertexId`s, never references, so the graph owns every
/// vertex outright. Vertices are never removed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
    options: GraphOptions,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertex_id(label).map(|id| self.vertex_at(id))
    }

    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub(crate) fn vertex_at(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Vertex labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(Vertex::label)
    }

    /// Every edge as `(src, dest, weight)`, grouped by source in vertex
    /// insertion order, then by edge insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Weight)> + '_ {
        self.vertices.iter().flat_map(move |vertex| {
            vertex.neighbors().iter().map(move |neighbor| {
                (
                    vertex.label(),
                    self.vertex_at(neighbor.target).label(),
                    neighbor.weight,
                )
            })
        })
    }

    fn require(&self, label: &str) -> Result<VertexId> {
        self.vertex_id(label)
            .ok_or_else(|| SkeinError::not_found("vertex", label))
    }

    /// Add a vertex with the given label.
    ///
    /// The empty label is rejected. An existing label is rejected or
    /// replaced according to the graph's `DuplicateVertexPolicy`.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> Result<&mut Self> {
        let label = label.into();
        if label.is_empty() {
            crate::bail_invalid!("vertex label", "label must not be empty");
        }

        if let Some(id) = self.vertex_id(&label) {
            match self.options.duplicate_vertex {
                DuplicateVertexPolicy::Reject => {
                    crate::bail_invalid!("vertex label", format!("'{}' already exists", label));
                }
                DuplicateVertexPolicy::Replace => {
                    debug!(label = %label, "replacing vertex, outgoing edges dropped");
                    self.vertices[id.index()].clear_neighbors();
                    return Ok(self);
                }
            }
        }

        let id = VertexId::from_index(self.vertices.len());
        debug!(label = %label, index = id.index(), "added vertex");
        self.index.insert(label.clone(), id);
        self.vertices.push(Vertex::new(label));
        Ok(self)
    }

    /// Add a directed edge from `src` to `dest`.
    ///
    /// Both vertices must already exist. Adding an edge that is already
    /// present keeps the original weight. Nothing is mutated on error.
    pub fn add_edge(&mut self, src: &str, dest: &str, weight: f64) -> Result<&mut Self> {
        let weight = Weight::new(weight)?;
        let src_id = self.vertex_id(src).ok_or_else(|| {
            SkeinError::invalid_argument("edge source", format!("'{}' is not in the graph", src))
        })?;
        let dest_id = self.vertex_id(dest).ok_or_else(|| {
            SkeinError::invalid_argument(
                "edge destination",
                format!("'{}' is not in the graph", dest),
            )
        })?;

        if self.vertices[src_id.index()].add_neighbor(dest_id, weight) {
            debug!(src, dest, weight = %weight, "added edge");
        } else {
            debug!(src, dest, "edge already present, keeping original weight");
        }
        Ok(self)
    }

    /// Weight of the edge `src -> dest`, or `Weight::INFINITY` if there is none
    pub fn get_weight(&self, src: &str, dest: &str) -> Result<Weight> {
        let src_id = self.require(src)?;
        let dest_id = self.require(dest)?;
        Ok(self.vertex_at(src_id).get_weight(dest_id))
    }

    /// Breadth-first traversal from `start`
    pub fn bfs(&self, start: &str) -> Result<Bfs<'_>> {
        let start = self.require(start)?;
        Ok(Bfs::new(self, start))
    }

    /// Depth-first traversal from `start`
    pub fn dfs(&self, start: &str) -> Result<Dfs<'_>> {
        let start = self.require(start)?;
        Ok(Dfs::new(self, start))
    }

    /// Shortest path from `src` to `dest` using the configured strategy
    pub fn dsp(&self, src: &str, dest: &str) -> Result<ShortestPath> {
        self.dsp_with(src, dest, self.options.path_strategy)
    }

    /// Shortest path from `src` to `dest`.
    ///
    /// An unreachable destination is not an error: it yields an infinite
    /// distance and an empty path.
    #[tracing::instrument(skip(self), fields(src = %src, dest = %dest, strategy = %strategy))]
    pub fn dsp_with(&self, src: &str, dest: &str, strategy: PathStrategy) -> Result<ShortestPath> {
        let src_id = self.require(src)?;
        let dest_id = self.require(dest)?;

        let tree = shortest_path_tree(self, src_id, strategy);
        if !tree.is_reachable(dest_id) {
            debug!("destination unreachable");
            return Ok(ShortestPath::unreachable());
        }

        let path = reconstruct_path(&tree, self, dest_id);
        let distance = tree.distance(dest_id);
        debug!(distance = %distance, hops = path.len().saturating_sub(1), "path found");
        Ok(ShortestPath { distance, path })
    }

    /// Shortest path from `src` to every vertex using the configured strategy
    pub fn dsp_all(&self, src: &str) -> Result<BTreeMap<String, Vec<String>>> {
        self.dsp_all_with(src, self.options.path_strategy)
    }

    /// Shortest path from `src` to every vertex, keyed by destination label.
    ///
    /// Unreachable vertices map to an empty path and `src` maps to `[src]`.
    /// All paths come from a single relaxation run.
    #[tracing::instrument(skip(self), fields(src = %src, strategy = %strategy))]
    pub fn dsp_all_with(
        &self,
        src: &str,
        strategy: PathStrategy,
    ) -> Result<BTreeMap<String, Vec<String>>> {
        let src_id = self.require(src)?;
        let tree = shortest_path_tree(self, src_id, strategy);

        let paths: BTreeMap<String, Vec<String>> = (0..self.vertex_count())
            .map(VertexId::from_index)
            .map(|id| {
                (
                    self.vertex_at(id).label().to_string(),
                    reconstruct_path(&tree, self, id),
                )
            })
            .collect();

        debug!(
            reachable = paths.values().filter(|p| !p.is_empty()).count(),
            "computed all paths"
        );
        Ok(paths)
    }
}
