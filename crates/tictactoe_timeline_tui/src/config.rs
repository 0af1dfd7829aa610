//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_timeline.toml";

/// Settings for the terminal UI and logging.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// File the TUI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// How long the event loop waits for input before redrawing.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// Show 1-9 in empty cells.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_timeline.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            tick_rate_ms: default_tick_rate_ms(),
            show_coordinates: default_show_coordinates(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be greater than 0".to_string()));
        }

        debug!(?config, "Config loaded");
        Ok(config)
    }

    /// Resolves the config for this run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present and built-in defaults otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
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
