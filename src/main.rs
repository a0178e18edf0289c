//! Skein - weighted digraph CLI
//!
//! Loads a graph document and answers weight, traversal and shortest-path
//! queries, or renders the graph as DOT.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use skein_core::error::{ExitCode as SkeinExitCode, SkeinError};
use skein_core::logging::LogSettings;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if wants_json(env::args().skip(1)) => return report_json(&argument_error(err)),
        Err(err) => err.exit(),
    };

    if let Err(e) = log_settings(&cli).init() {
        if !cli.quiet {
            eprintln!("warning: logging disabled: {}", e);
        }
    }
    tracing::debug!(elapsed = ?start.elapsed(), command = ?cli.command, "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(SkeinExitCode::Success as u8),
        Err(e) if cli.format == OutputFormat::Json => report_json(&e),
        Err(e) => {
            if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn log_settings(cli: &Cli) -> LogSettings {
    LogSettings {
        verbose: cli.verbose,
        quiet: cli.quiet,
        level: cli.log_level.clone(),
        json: cli.log_json,
    }
}

/// JSON callers always get the envelope, even with `--quiet`
fn report_json(err: &SkeinError) -> ExitCode {
    eprintln!("{}", err.to_json());
    ExitCode::from(err.exit_code() as u8)
}

/// Classify a clap failure; help and version still print and exit normally
fn argument_error(err: clap::Error) -> SkeinError {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => SkeinError::UsageError(err.to_string()),
        _ => SkeinError::Other(err.to_string()),
    }
}

/// Whether the raw arguments ask for `--format json`.
///
/// Consulted only when clap rejects the command line, before `Cli::format`
/// exists.
fn wants_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
