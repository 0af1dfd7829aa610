//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it logs to a file. Headless commands log
//! to stderr and keep stdout for their output.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Sends logs to the configured log file with ANSI colors off.
pub fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    // Don't fail if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sends logs to stderr, defaulting to warnings only.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}
