//! Shortest-path commands

use serde_json::json;
use skein_core::error::Result;
use skein_core::graph::PathStrategy;

use super::dispatch::{trace_command, CommandContext};
use super::load::LoadedGraph;
use crate::cli::format::print_json;

const ARROW: &str = " -> ";

fn resolve_strategy(loaded: &LoadedGraph, strategy: Option<PathStrategy>) -> PathStrategy {
    strategy.unwrap_or(loaded.graph.options().path_strategy)
}

pub fn single(
    ctx: &CommandContext,
    loaded: &LoadedGraph,
    src: &str,
    dest: &str,
    strategy: Option<PathStrategy>,
) -> Result<()> {
    let strategy = resolve_strategy(loaded, strategy);
    let result = loaded.graph.dsp_with(src, dest, strategy)?;
    trace_command!(ctx.start, "shortest_path");

    crate::output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({
            "from": src,
            "to": dest,
            "distance": result.distance,
            "found": result.is_reachable(),
            "path": result.path,
        })),
        human => {
            println!("distance: {}", result.distance);
            if result.is_reachable() {
                println!("{}", result.path.join(ARROW));
            } else {
                println!("no path");
            }
        }
    )
}

pub fn all(
    ctx: &CommandContext,
    loaded: &LoadedGraph,
    src: &str,
    strategy: Option<PathStrategy>,
) -> Result<()> {
    let strategy = resolve_strategy(loaded, strategy);
    let paths = loaded.graph.dsp_all_with(src, strategy)?;
    trace_command!(ctx.start, "all_shortest_paths");

    crate::output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({
            "from": src,
            "paths": paths,
        })),
        human => {
            for (dest, path) in &paths {
                if path.is_empty() {
                    println!("{}: no path", dest);
                } else {
                    println!("{}: {}", dest, path.join(ARROW));
                }
            }
        }
    )
}
