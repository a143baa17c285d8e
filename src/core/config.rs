//! Logger configuration
//!
//! A `LoggerConfig` describes what [`Registry::get_logger`](crate::Registry::get_logger)
//! should build for a name. It deserialises from JSON so applications can keep
//! logging setup next to the rest of their settings.

use super::error::Result;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a logger delivers writes to its sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerMode {
    /// On the caller's thread
    #[default]
    Sync,
    /// On one dedicated worker thread, in submission order
    Async,
}

/// # Example
///
/// ```
/// use multisink_logger::{LogLevel, LoggerConfig, LoggerMode};
///
/// let config = LoggerConfig::from_json(r#"{"level": "DEBUG", "mode": "async"}"#).unwrap();
/// assert_eq!(config.level, LogLevel::Debug);
/// assert_eq!(config.mode, LoggerMode::Async);
/// assert!(config.console);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub console: bool,
    pub files: Vec<PathBuf>,
    pub header: bool,
    pub mode: LoggerMode,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            console: true,
            files: Vec::new(),
            header: true,
            mode: LoggerMode::Sync,
        }
    }
}

impl LoggerConfig {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: LoggerMode) -> Self {
        self.mode = mode;
        self
    }
}
