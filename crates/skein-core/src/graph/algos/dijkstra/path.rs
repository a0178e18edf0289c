//! Path reconstruction from a shortest-path tree

use super::ShortestPathTree;
use crate::graph::vertex::VertexId;
use crate::graph::GraphProvider;

/// Walk predecessors back from `dest` to the tree's source and return the
/// labels in source-to-destination order. Unreachable destinations yield an
/// empty path.
pub fn reconstruct_path(
    tree: &ShortestPathTree,
    provider: &dyn GraphProvider,
    dest: VertexId,
) -> Vec<String> {
    if !tree.is_reachable(dest) {
        return Vec::new();
    }

    let mut path_nodes: Vec<VertexId> = vec![dest];
    let mut current = dest;

    while current != tree.source() {
        if let Some(pred) = tree.predecessor(current) {
            path_nodes.push(pred);
            current = pred;
        } else {
            break;
        }
    }

    path_nodes.reverse();

    path_nodes
        .into_iter()
        .map(|id| provider.label_of(id).to_string())
        .collect()
}
