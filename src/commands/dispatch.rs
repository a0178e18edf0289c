//! Command dispatch logic for skein

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{inspect, load, path, traverse};
use skein_core::error::Result;
use tracing::debug;

/// Trace command execution timing
macro_rules! trace_command {
    ($start:expr, $label:expr) => {
        ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
    };
}

pub(crate) use trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    let Some(command) = &cli.command else {
        return no_command();
    };

    let loaded = load::load(&ctx)?;
    debug!(
        vertices = loaded.graph.vertex_count(),
        edges = loaded.graph.edge_count(),
        "graph ready"
    );

    match command {
        Commands::Weight { src, dest } => inspect::weight(&ctx, &loaded, src, dest),
        Commands::Bfs { start } => traverse::bfs(&ctx, &loaded, start),
        Commands::Dfs { start } => traverse::dfs(&ctx, &loaded, start),
        Commands::Path {
            src,
            dest,
            strategy,
        } => path::single(&ctx, &loaded, src, dest, *strategy),
        Commands::Paths { src, strategy } => path::all(&ctx, &loaded, src, *strategy),
        Commands::Dot { name } => inspect::dot(&ctx, &loaded, name.as_deref()),
        Commands::Stats => inspect::stats(&ctx, &loaded),
    }
}

fn no_command() -> Result<()> {
    println!("skein {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Query and render weighted directed graphs.");
    println!();
    println!("Run `skein --help` for usage information.");
    Ok(())
}
