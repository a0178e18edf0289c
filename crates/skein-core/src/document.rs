//! Graph documents
//!
//! A document lists vertices and edges in TOML or JSON:
//!
//! ```toml
//! vertices = ["A", "B"]
//!
//! [[edges]]
//! src = "A"
//! dest = "B"
//! weight = 2.5
//! ```
//!
//! Documents are parsed loosely (any value is accepted where a label or
//! weight is expected, including `null` and nested arrays) and validated when replayed into a [`Graph`], so
//! boundary input goes through exactly the same checks as library calls.

use crate::error::{Result, SkeinError};
use crate::graph::{parse_weight, Graph, GraphOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// A scalar as it appears in a document, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// `null`, arrays and tables; never a valid label or weight
    Other(serde_json::Value),
}

impl RawScalar {
    /// Vertex labels must be strings
    pub fn to_label(&self) -> Result<String> {
        match self {
            RawScalar::Text(text) => Ok(text.clone()),
            other => Err(SkeinError::invalid_argument(
                "vertex label",
                format!("{} is not a string", other),
            )),
        }
    }

    /// Edge weights must be numbers or numeric text
    pub fn to_weight(&self) -> Result<f64> {
        match self {
            RawScalar::Integer(value) => Ok(*value as f64),
            RawScalar::Float(value) => Ok(*value),
            RawScalar::Text(text) => Ok(parse_weight(text)?.value()),
            other @ (RawScalar::Bool(_) | RawScalar::Other(_)) => Err(
                SkeinError::invalid_argument("edge weight", format!("{} is not numeric", other)),
            ),
        }
    }
}

impl fmt::Display for RawScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawScalar::Bool(value) => write!(f, "{}", value),
            RawScalar::Integer(value) => write!(f, "{}", value),
            RawScalar::Float(value) => write!(f, "{}", value),
            RawScalar::Text(text) => write!(f, "'{}'", text),
            RawScalar::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for RawScalar {
    fn from(text: &str) -> Self {
        RawScalar::Text(text.to_string())
    }
}

/// One directed edge in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub src: RawScalar,
    pub dest: RawScalar,
    pub weight: RawScalar,
}

/// Serialized description of a graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub vertices: Vec<RawScalar>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Read a document, choosing the parser from the file extension
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if extension != "toml" && extension != "json" {
            crate::bail_unsupported!("graph document format", path.display(), "toml, json");
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SkeinError::io_operation("read graph", path.display(), e))?;

        if extension == "toml" {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Replay every vertex, then every edge, into a new graph
    #[tracing::instrument(skip(self), fields(vertices = self.vertices.len(), edges = self.edges.len()))]
    pub fn build(&self, options: GraphOptions) -> Result<Graph> {
        let start = Instant::now();
        let mut graph = Graph::with_options(options);

        for raw in &self.vertices {
            graph.add_vertex(raw.to_label()?)?;
        }
        for edge in &self.edges {
            let src = edge.src.to_label()?;
            let dest = edge.dest.to_label()?;
            graph.add_edge(&src, &dest, edge.weight.to_weight()?)?;
        }

        crate::trace_time!(
            start,
            "build_graph",
            vertices = graph.vertex_count(),
            edges = graph.edge_count()
        );
        Ok(graph)
    }
}
