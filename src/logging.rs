// src/logging.rs

//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! The launcher has to stay transparent: the child owns stdout and stderr,
//! and a default run must not add a single line of its own. Diagnostics are
//! therefore opt-in:
//! 1. `TRULOCAL_LOG` environment variable (e.g. "debug", "info")
//! 2. default to `warn`
//!
//! Logs go to stderr so the child's stdout passes through untouched.

use anyhow::Result;
use tracing_subscriber::fmt;

/// Initialise the global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging() -> Result<()> {
    let level = std::env::var("TRULOCAL_LOG")
        .ok()
        .and_then(|s| parse_level_str(&s))
        .unwrap_or(tracing::Level::WARN);

    // Send logs to stderr; stdout belongs to the child.
    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
