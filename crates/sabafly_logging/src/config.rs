//! Logger configuration.

use crate::{DEFAULT_LOG_NAME, Level};
use config::{Config, File};
use sabafly_error::{ConfigError, SabaflyError, SabaflyResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Where the logger writes and when it rotates.
///
/// # Example
///
/// ```toml
/// log_path = "logs"
/// log_name = "bot.log"
/// max_lines = 512
/// max_age_secs = 43200
/// levels = ["error", "warning", "info"]
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct LoggingConfig {
    /// Directory holding the live file and its archives
    #[serde(default = "default_log_path")]
    log_path: PathBuf,

    /// File name of the live log inside `log_path`
    #[serde(default = "default_log_name")]
    log_name: String,

    /// Rotate once the live file holds more than this many lines
    #[serde(default = "default_max_lines")]
    max_lines: usize,

    /// Rotate a non-empty live file older than this many seconds
    #[serde(default = "default_max_age_secs")]
    max_age_secs: Option<u64>,

    /// Levels accepted from `tracing`
    #[serde(default = "default_levels")]
    levels: Vec<Level>,
}

fn default_log_path() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_name() -> String {
    DEFAULT_LOG_NAME.to_string()
}

fn default_max_lines() -> usize {
    512
}

fn default_max_age_secs() -> Option<u64> {
    Some(12 * 60 * 60)
}

fn default_levels() -> Vec<Level> {
    Level::iter().collect()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            log_name: default_log_name(),
            max_lines: default_max_lines(),
            max_age_secs: default_max_age_secs(),
            levels: default_levels(),
        }
    }
}

impl LoggingConfig {
    /// Load configuration from a TOML, JSON or YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SabaflyResult<Self> {
        debug!("Loading logging configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                SabaflyError::from(ConfigError::new(format!(
                    "Failed to read logging configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SabaflyError::from(ConfigError::new(format!(
                    "Failed to parse logging configuration: {}",
                    e
                )))
            })
    }

    /// Full path of the live log file.
    pub fn file_path(&self) -> PathBuf {
        self.log_path.join(&self.log_name)
    }

    /// Age limit as a duration, if one is set.
    pub fn max_age(&self) -> Option<Duration> {
        self.max_age_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.file_path(), PathBuf::from("logs/latest.log"));
        assert_eq!(*config.max_lines(), 512);
        assert_eq!(config.max_age(), Some(Duration::from_secs(43_200)));
        assert_eq!(config.levels().len(), 7);
    }

    #[test]
    fn test_setters_chain() {
        let config = LoggingConfig::default()
            .with_log_name("bot.log".to_string())
            .with_max_age_secs(None)
            .with_levels(vec![Level::Error]);
        assert_eq!(config.log_name(), "bot.log");
        assert_eq!(config.max_age(), None);
        assert_eq!(config.levels(), &vec![Level::Error]);
    }
}
