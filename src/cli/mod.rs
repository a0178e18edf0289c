//! CLI argument parsing for skein
//!
//! Uses clap for argument parsing.
//! Supports global flags: --graph, --config, --format, --quiet, --verbose

pub mod format;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_strategy;
pub use output::OutputFormat;
use skein_core::graph::PathStrategy;

/// Skein - query and render weighted directed graphs
#[derive(Parser, Debug)]
#[command(name = "skein")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph document to load (.toml or .json)
    #[arg(long, short, global = true, env = "SKEIN_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, env = "SKEIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Silence stderr: no logs and no error message (exit code only).
    /// JSON error envelopes are still written.
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `skein_core=trace`);
    /// overrides SKEIN_LOG and RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the weight of the edge SRC -> DEST (`inf` if absent)
    Weight {
        /// Source vertex label
        src: String,

        /// Destination vertex label
        dest: String,
    },

    /// Breadth-first traversal from a vertex
    Bfs {
        /// Start vertex label
        start: String,
    },

    /// Depth-first traversal from a vertex
    Dfs {
        /// Start vertex label
        start: String,
    },

    /// Shortest path between two vertices
    Path {
        /// Source vertex label
        src: String,

        /// Destination vertex label
        dest: String,

        /// Minimum-selection strategy (linear-scan, heap)
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<PathStrategy>,
    },

    /// Shortest paths from a vertex to every vertex
    Paths {
        /// Source vertex label
        src: String,

        /// Minimum-selection strategy (linear-scan, heap)
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<PathStrategy>,
    },

    /// Render the graph in Graphviz DOT format
    Dot {
        /// Name of the digraph block (overrides config)
        #[arg(long)]
        name: Option<String>,
    },

    /// Show vertex and edge counts
    Stats,
}
