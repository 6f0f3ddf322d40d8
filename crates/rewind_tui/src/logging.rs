//! Tracing subscriber setup.

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn filter(override_directive: Option<&str>, fallback: &str) -> EnvFilter {
    match override_directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
    }
}

/// Logs to the configured file so output does not interfere with the TUI.
pub fn init_file_logging(config: &TuiConfig, override_directive: Option<&str>) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(override_directive, config.log_filter()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr, keeping stdout clean for replay output.
pub fn init_stderr_logging(override_directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(override_directive, "warn"))
        .with_writer(std::io::stderr)
        .try_init();
}
