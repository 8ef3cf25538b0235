//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use rewind_tictactoe::SortOrder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Config file read when no path is given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "rewind.toml";

/// Settings for a rewind session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// File that receives logs while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Initial move list order.
    #[serde(default)]
    sort_order: SortOrder,

    /// Whether a winning move raises the victory banner.
    #[serde(default = "default_show_banner")]
    show_banner: bool,

    /// How long to wait for input before redrawing, in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_banner() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            sort_order: SortOrder::default(),
            show_banner: default_show_banner(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(sort_order = ?config.sort_order, show_banner = config.show_banner, "Config loaded");
        Ok(config)
    }

    /// Loads `path`, or [`DEFAULT_CONFIG_PATH`] if it exists, or defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Input poll interval.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
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
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_partial_toml_overrides_fields() {
        let config = AppConfig::from_toml("sort_order = \"descending\"\nshow_banner = false\n")
            .expect("valid config");
        assert_eq!(*config.sort_order(), SortOrder::Descending);
        assert!(!config.show_banner());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_bad_sort_order_is_error() {
        let err = AppConfig::from_toml("sort_order = \"sideways\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_setter_overrides_sort_order() {
        let config = AppConfig::default().with_sort_order(SortOrder::Descending);
        assert_eq!(*config.sort_order(), SortOrder::Descending);
    }
}
