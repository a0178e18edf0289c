//! Graphviz DOT rendering

use crate::error::Result;
use crate::graph::digraph::Graph;
use std::fmt;

/// Name used for the `digraph` block when none is configured
pub const DEFAULT_GRAPH_NAME: &str = "G";

/// Display adapter rendering a graph as a DOT `digraph`.
///
/// One line per edge, grouped by source vertex in insertion order:
///
/// ```text
/// digraph G {
///    A -> B [label="1.0",weight="1.0"];
/// }
/// ```
///
/// Vertex labels are written verbatim, not quoted or escaped; labels with
/// spaces, quotes or other non-identifier characters produce DOT that
/// Graphviz will reject. The block name is checked by [`validate_dot_name`]
/// at the CLI and config boundaries.
pub struct Dot<'g> {
    graph: &'g Graph,
    name: &'g str,
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {} {{", self.name)?;
        for (src, dest, weight) in self.graph.edges() {
            writeln!(
                f,
                "   {} -> {} [label=\"{}\",weight=\"{}\"];",
                src, dest, weight, weight
            )?;
        }
        writeln!(f, "}}")
    }
}

/// DOT ID rule for unquoted names: alphanumerics and `_`, not starting
/// with a digit
pub fn is_dot_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Reject a `digraph` name that would need quoting
pub fn validate_dot_name(name: &str) -> Result<()> {
    if !is_dot_identifier(name) {
        crate::bail_invalid!(
            "dot name",
            format!("'{}' (expected letters, digits and underscores)", name)
        );
    }
    Ok(())
}

impl Graph {
    pub fn dot(&self) -> Dot<'_> {
        self.dot_named(DEFAULT_GRAPH_NAME)
    }

    pub fn dot_named<'g>(&'g self, name: &'g str) -> Dot<'g> {
        Dot { graph: self, name }
    }

    pub fn to_dot(&self) -> String {
        self.dot().to_string()
    }

    pub fn to_dot_named(&self, name: &str) -> String {
        self.dot_named(name).to_string()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dot(), f)
    }
}
