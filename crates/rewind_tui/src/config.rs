//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "rewind.toml";

/// Configuration for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File the TUI logs to while it owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Fallback `EnvFilter` directive when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// How long to wait for a key event per frame, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,

    /// Color of the winning line (any ratatui color name or `#rrggbb`).
    #[serde(default = "default_highlight_color")]
    highlight_color: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind_tui.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_highlight_color() -> String {
    "green".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            poll_interval_ms: default_poll_interval_ms(),
            highlight_color: default_highlight_color(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.highlight()?;
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Parsed winning-line color.
    pub fn highlight(&self) -> Result<Color, ConfigError> {
        Color::from_str(&self.highlight_color).map_err(|_| {
            ConfigError::new(format!("Unknown highlight color: {}", self.highlight_color))
        })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
