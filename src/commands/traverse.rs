//! BFS and DFS traversal commands

use serde_json::json;
use skein_core::error::Result;

use super::dispatch::{trace_command, CommandContext};
use super::load::LoadedGraph;
use crate::cli::format::print_json;

pub fn bfs(ctx: &CommandContext, loaded: &LoadedGraph, start: &str) -> Result<()> {
    let order: Vec<&str> = loaded.graph.bfs(start)?.collect();
    trace_command!(ctx.start, "bfs");
    emit(ctx, start, &order)
}

pub fn dfs(ctx: &CommandContext, loaded: &LoadedGraph, start: &str) -> Result<()> {
    let order: Vec<&str> = loaded.graph.dfs(start)?.collect();
    trace_command!(ctx.start, "dfs");
    emit(ctx, start, &order)
}

fn emit(ctx: &CommandContext, start: &str, order: &[&str]) -> Result<()> {
    crate::output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({
            "start": start,
            "order": order,
        })),
        human => {
            for label in order {
                println!("{}", label);
            }
        }
    )
}
