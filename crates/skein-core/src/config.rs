//! Configuration for skein
//!
//! Configuration is a TOML file with optional `[graph]`, `[shortest_path]`
//! and `[dot]` sections; every field has a default.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, SkeinError};
use crate::graph::{validate_dot_name, GraphOptions};

pub use types::{
    DotConfig, GraphConfig, ShortestPathConfig, SkeinConfig, CONFIG_FORMAT_VERSION,
};

impl SkeinConfig {
    /// Options for graphs built under this configuration
    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            duplicate_vertex: self.graph.duplicate_vertex,
            path_strategy: self.shortest_path.strategy,
        }
    }

    /// Load configuration from a file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SkeinError::io_operation("read config", path.display(), e))?;
        let config: SkeinConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            crate::bail_unsupported!(
                "config version",
                config.version,
                format!("<= {}", CONFIG_FORMAT_VERSION)
            );
        }
        validate_dot_name(&config.dot.name)?;

        tracing::debug!(
            duplicate_vertex = ?config.graph.duplicate_vertex,
            strategy = %config.shortest_path.strategy,
            "loaded config"
        );
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| SkeinError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}
