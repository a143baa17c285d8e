//! Error types for the logger system

use std::path::PathBuf;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unknown level name
    #[error("Invalid log level: '{name}'")]
    InvalidLevelName { name: String },

    /// File sink could not be opened for append
    #[error("Failed to open log file '{}': {source}", .path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Write attempted on a sink that was already closed
    #[error("Sink '{name}' is closed")]
    SinkClosed { name: String },

    /// Async worker is no longer receiving tasks
    #[error("Async logging worker is not running")]
    WorkerGone,

    /// Async worker did not drain in time
    #[error("Async logging worker did not drain within {timeout:?}")]
    ShutdownTimeout { timeout: Duration },

    /// Mutation attempted on the shared null logger
    #[error("Cannot {operation} on the null logger")]
    NullLoggerImmutable { operation: &'static str },

    /// Invalid configuration document
    #[error("Invalid logger configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an IO error with the operation that failed
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a sink open error for `path`
    pub fn sink_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    pub fn sink_closed(name: impl Into<String>) -> Self {
        LoggerError::SinkClosed { name: name.into() }
    }

    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevelName { name: name.into() }
    }
}
