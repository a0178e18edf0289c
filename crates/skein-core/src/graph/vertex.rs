use crate::graph::types::Weight;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Handle to a vertex inside a graph.
///
/// Ids are dense arena indices assigned in insertion order, so iterating
/// `0..vertex_count` visits vertices in the order they were added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn from_index(index: usize) -> Self {
        VertexId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Outgoing edge stored on the source vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub target: VertexId,
    pub weight: Weight,
}

/// A labeled vertex and its outgoing adjacency.
///
/// Two vertices are equal iff their labels are equal.
#[derive(Debug, Clone)]
pub struct Vertex {
    label: String,
    neighbors: Vec<Neighbor>,
    slots: HashMap<VertexId, usize>,
}

impl Vertex {
    pub(crate) fn new(label: String) -> Self {
        Self {
            label,
            neighbors: Vec::new(),
            slots: HashMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Record a directed edge to `target`.
    ///
    /// First write wins: if an edge to `target` already exists the stored
    /// weight is kept and `false` is returned.
    pub fn add_neighbor(&mut self, target: VertexId, weight: Weight) -> bool {
        if self.slots.contains_key(&target) {
            return false;
        }
        self.slots.insert(target, self.neighbors.len());
        self.neighbors.push(Neighbor { target, weight });
        true
    }

    /// Weight of the edge to `target`, or `Weight::INFINITY` if there is none
    pub fn get_weight(&self, target: VertexId) -> Weight {
        self.slots
            .get(&target)
            .map(|&slot| self.neighbors[slot].weight)
            .unwrap_or(Weight::INFINITY)
    }

    pub fn has_neighbor(&self, target: VertexId) -> bool {
        self.slots.contains_key(&target)
    }

    /// Outgoing edges in insertion order
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors.clear();
        self.slots.clear();
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}
