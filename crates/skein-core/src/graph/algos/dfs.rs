use crate::graph::vertex::VertexId;
use crate::graph::GraphProvider;
use std::collections::HashSet;
use std::iter::FusedIterator;

/// Lazy depth-first traversal yielding vertex labels.
///
/// Uses an explicit stack rather than recursion. Successors are pushed in
/// edge insertion order, so siblings come off the stack in reverse order.
pub struct Dfs<'g> {
    provider: &'g dyn GraphProvider,
    visited: HashSet<VertexId>,
    stack: Vec<VertexId>,
}

impl<'g> Dfs<'g> {
    pub(crate) fn new(provider: &'g dyn GraphProvider, start: VertexId) -> Self {
        Self {
            provider,
            visited: HashSet::new(),
            stack: vec![start],
        }
    }
}

impl<'g> Iterator for Dfs<'g> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if !self.visited.insert(current) {
                continue;
            }

            for neighbor in self.provider.successors(current) {
                if !self.visited.contains(&neighbor.target) {
                    self.stack.push(neighbor.target);
                }
            }

            return Some(self.provider.label_of(current));
        }
        None
    }
}

impl FusedIterator for Dfs<'_> {}
