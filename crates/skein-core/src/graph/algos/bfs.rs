use crate::graph::vertex::VertexId;
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};
use std::iter::FusedIterator;

/// Lazy breadth-first traversal yielding vertex labels.
///
/// Each level (the frontier) is drained in order; unvisited successors are
/// collected into the next frontier. A vertex is marked visited when it is
/// emitted, so a vertex queued twice within one level is emitted once.
pub struct Bfs<'g> {
    provider: &'g dyn GraphProvider,
    visited: HashSet<VertexId>,
    frontier: VecDeque<VertexId>,
    next_frontier: Vec<VertexId>,
    depth: usize,
}

impl<'g> Bfs<'g> {
    pub(crate) fn new(provider: &'g dyn GraphProvider, start: VertexId) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        Self {
            provider,
            visited: HashSet::new(),
            frontier,
            next_frontier: Vec::new(),
            depth: 0,
        }
    }

    /// Level of the frontier currently being drained (start vertex is 0)
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn advance_level(&mut self) -> bool {
        if self.next_frontier.is_empty() {
            return false;
        }
        self.frontier.extend(self.next_frontier.drain(..));
        self.depth += 1;
        true
    }
}

impl<'g> Iterator for Bfs<'g> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(current) = self.frontier.pop_front() else {
                if self.advance_level() {
                    continue;
                }
                return None;
            };

            if !self.visited.insert(current) {
                continue;
            }

            for neighbor in self.provider.successors(current) {
                if !self.visited.contains(&neighbor.target) {
                    self.next_frontier.push(neighbor.target);
                }
            }

            return Some(self.provider.label_of(current));
        }
    }
}

impl FusedIterator for Bfs<'_> {}
