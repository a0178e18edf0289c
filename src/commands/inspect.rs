//! Weight lookup, DOT rendering and graph statistics

use serde_json::json;
use skein_core::error::Result;
use skein_core::graph::validate_dot_name;

use super::dispatch::{trace_command, CommandContext};
use super::load::LoadedGraph;
use crate::cli::format::print_json;

pub fn weight(ctx: &CommandContext, loaded: &LoadedGraph, src: &str, dest: &str) -> Result<()> {
    let weight = loaded.graph.get_weight(src, dest)?;
    trace_command!(ctx.start, "get_weight");

    crate::output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({
            "src": src,
            "dest": dest,
            "weight": weight,
        })),
        human => {
            println!("{}", weight);
        }
    )
}

pub fn dot(ctx: &CommandContext, loaded: &LoadedGraph, name: Option<&str>) -> Result<()> {
    let name = match name {
        Some(name) => {
            validate_dot_name(name)?;
            name
        }
        None => &loaded.config.dot.name,
    };
    let rendered = loaded.graph.to_dot_named(name);
    trace_command!(ctx.start, "render_dot");

    crate::output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({ "dot": rendered })),
        human => {
            print!("{}", rendered);
        }
    )
}

pub fn stats(ctx: &CommandContext, loaded: &LoadedGraph) -> Result<()> {
    let vertices = loaded.graph.vertex_count();
    let edges = loaded.graph.edge_count();

    crate::output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({
            "vertices": vertices,
            "edges": edges,
        })),
        human => {
            println!("vertices: {}", vertices);
            println!("edges: {}", edges);
        }
    )
}
