mod path;

use crate::graph::types::{PathStrategy, Weight};
use crate::graph::vertex::VertexId;
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub use path::reconstruct_path;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then by
/// insertion order so ties settle exactly as the linear scan would)
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    vertex: VertexId,
    distance: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .value()
            .total_cmp(&other.distance.value())
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Settled distances and predecessors from one source vertex
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: Vec<Weight>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    fn new(source: VertexId, vertex_count: usize) -> Self {
        let mut distances = vec![Weight::INFINITY; vertex_count];
        distances[source.index()] = Weight::ZERO;
        Self {
            source,
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn distance(&self, vertex: VertexId) -> Weight {
        self.distances[vertex.index()]
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors[vertex.index()]
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_finite()
    }

    /// Relax every outgoing edge of `current`; returns the improved vertices
    fn relax(&mut self, provider: &dyn GraphProvider, current: VertexId) -> Vec<VertexId> {
        let base = self.distance(current);
        let mut improved = Vec::new();
        for neighbor in provider.successors(current) {
            let candidate = base + neighbor.weight;
            if candidate < self.distance(neighbor.target) {
                self.distances[neighbor.target.index()] = candidate;
                self.predecessors[neighbor.target.index()] = Some(current);
                improved.push(neighbor.target);
            }
        }
        improved
    }
}

/// Run Dijkstra from `source` over every vertex of the graph
pub fn shortest_path_tree(
    provider: &dyn GraphProvider,
    source: VertexId,
    strategy: PathStrategy,
) -> ShortestPathTree {
    match strategy {
        PathStrategy::LinearScan => linear_scan(provider, source),
        PathStrategy::Heap => heap_search(provider, source),
    }
}

/// Reference strategy: repeatedly settle the unsettled vertex with the
/// smallest tentative distance, first in insertion order on ties.
fn linear_scan(provider: &dyn GraphProvider, source: VertexId) -> ShortestPathTree {
    let vertex_count = provider.vertex_count();
    let mut tree = ShortestPathTree::new(source, vertex_count);
    let mut settled = vec![false; vertex_count];

    for _ in 0..vertex_count {
        let mut current: Option<VertexId> = None;
        for index in 0..vertex_count {
            if settled[index] {
                continue;
            }
            let candidate = VertexId::from_index(index);
            match current {
                Some(best) if tree.distance(candidate) >= tree.distance(best) => {}
                _ => current = Some(candidate),
            }
        }

        let Some(current) = current else {
            break;
        };
        settled[current.index()] = true;
        tree.relax(provider, current);
    }

    tree
}

/// Heap strategy with lazy deletion. Vertices never reached stay at infinity
/// and are never pushed; stale entries are skipped once their vertex settles.
fn heap_search(provider: &dyn GraphProvider, source: VertexId) -> ShortestPathTree {
    let vertex_count = provider.vertex_count();
    let mut tree = ShortestPathTree::new(source, vertex_count);
    let mut settled = vec![false; vertex_count];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    heap.push(Reverse(HeapEntry {
        vertex: source,
        distance: Weight::ZERO,
    }));

    while let Some(Reverse(HeapEntry { vertex: current, .. })) = heap.pop() {
        if settled[current.index()] {
            continue;
        }
        settled[current.index()] = true;

        for improved in tree.relax(provider, current) {
            heap.push(Reverse(HeapEntry {
                vertex: improved,
                distance: tree.distance(improved),
            }));
        }
    }

    tree
}
