//! TOML configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::HistoryOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RewindConfig {
    /// Initial history display order for each new game.
    #[serde(default)]
    history_order: HistoryOrder,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Show (column, row) hints on empty squares.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind_tui.log")
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            history_order: HistoryOrder::default(),
            log_file: default_log_file(),
            show_coordinates: default_show_coordinates(),
        }
    }
}

impl RewindConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(order = %config.history_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, falling back to defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the initial history order.
    pub fn with_history_order(mut self, order: HistoryOrder) -> Self {
        self.history_order = order;
        self
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RewindConfig = toml::from_str("history_order = \"descending\"").expect("valid toml");
        assert_eq!(config.history_order(), &HistoryOrder::Descending);
        assert_eq!(config.log_file(), &PathBuf::from("rewind_tui.log"));
        assert!(*config.show_coordinates());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: RewindConfig = toml::from_str("").expect("valid toml");
        assert_eq!(config, RewindConfig::default());
    }

    #[test]
    fn test_unknown_order_is_rejected() {
        assert!(toml::from_str::<RewindConfig>("history_order = \"sideways\"").is_err());
    }

    #[test]
    fn test_error_carries_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
