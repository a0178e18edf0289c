//! Graph and config loading for commands

use skein_core::bail_usage;
use skein_core::config::SkeinConfig;
use skein_core::document::GraphDocument;
use skein_core::error::Result;
use skein_core::graph::Graph;

use super::dispatch::{trace_command, CommandContext};

/// A graph built for one invocation, with the config it was built under
pub struct LoadedGraph {
    pub graph: Graph,
    pub config: SkeinConfig,
}

/// Load the config (if any) and build the graph named by `--graph`
pub fn load(ctx: &CommandContext) -> Result<LoadedGraph> {
    let config = match &ctx.cli.config {
        Some(path) => SkeinConfig::load(path)?,
        None => SkeinConfig::default(),
    };
    trace_command!(ctx.start, "load_config");

    let Some(path) = &ctx.cli.graph else {
        bail_usage!("no graph document given (use --graph or SKEIN_GRAPH)");
    };

    let document = GraphDocument::from_path(path)?;
    let graph = document.build(config.graph_options())?;
    trace_command!(ctx.start, "load_graph");

    Ok(LoadedGraph { graph, config })
}
