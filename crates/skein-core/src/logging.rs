//! Tracing setup for the skein binary
//!
//! Logs always go to stderr so that query results on stdout stay pipeable.

use std::env;
use std::error::Error;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer, Registry};

/// Crates a bare level such as `debug` applies to
const SKEIN_TARGETS: [&str; 2] = ["skein", "skein_core"];

/// Environment variable holding a skein-specific filter
pub const SKEIN_LOG_ENV: &str = "SKEIN_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// ```rust,ignore
/// let start = Instant::now();
/// trace_time!(start, "build_graph", vertices = graph.vertex_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Logging options gathered from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub verbose: bool,
    pub quiet: bool,
    pub level: Option<String>,
    pub json: bool,
}

impl LogSettings {
    /// Pick the filter directive.
    ///
    /// First match wins: `--log-level`, `SKEIN_LOG`, `RUST_LOG`, then
    /// `--verbose` (debug) or `--quiet` (off), else `warn`. Bare levels
    /// are scoped to skein's own crates; `RUST_LOG` is used as given.
    pub fn directive(&self, skein_log: Option<&str>, rust_log: Option<&str>) -> String {
        if let Some(level) = present(self.level.as_deref()).or(present(skein_log)) {
            return scoped(level);
        }
        if let Some(directive) = present(rust_log) {
            return directive.to_string();
        }

        let level = if self.verbose {
            "debug"
        } else if self.quiet {
            "off"
        } else {
            "warn"
        };
        scoped(level)
    }

    /// Install the global subscriber, reading `SKEIN_LOG` and `RUST_LOG`
    pub fn init(&self) -> Result<(), Box<dyn Error>> {
        let directive = self.directive(
            env::var(SKEIN_LOG_ENV).ok().as_deref(),
            env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        );
        let filter = EnvFilter::try_new(&directive)?;

        let layer: Box<dyn Layer<Registry> + Send + Sync> = if self.json {
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                .boxed()
        } else {
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .boxed()
        };

        tracing_subscriber::registry()
            .with(layer.with_filter(filter))
            .try_init()?;
        Ok(())
    }
}

/// Treat unset and blank values alike
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Expand a bare level to one directive per skein crate
fn scoped(level: &str) -> String {
    if level.contains('=') {
        return level.to_string();
    }
    SKEIN_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}
