//! Configuration type definitions

use crate::graph::types::{DuplicateVertexPolicy, PathStrategy};
use crate::graph::DEFAULT_GRAPH_NAME;
use serde::{Deserialize, Serialize};

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Top-level skein configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeinConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Shortest-path settings
    #[serde(default)]
    pub shortest_path: ShortestPathConfig,

    /// DOT output settings
    #[serde(default)]
    pub dot: DotConfig,
}

/// Configuration for graph construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// What to do when a vertex label is added twice
    #[serde(default)]
    pub duplicate_vertex: DuplicateVertexPolicy,
}

/// Configuration for shortest-path queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathConfig {
    /// Minimum-selection strategy: "linear-scan" or "heap"
    #[serde(default)]
    pub strategy: PathStrategy,
}

/// Configuration for DOT rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotConfig {
    /// Name of the emitted `digraph` block
    #[serde(default = "default_dot_name")]
    pub name: String,
}

impl Default for SkeinConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            graph: GraphConfig::default(),
            shortest_path: ShortestPathConfig::default(),
            dot: DotConfig::default(),
        }
    }
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            name: default_dot_name(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_dot_name() -> String {
    DEFAULT_GRAPH_NAME.to_string()
}
