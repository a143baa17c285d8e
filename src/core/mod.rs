//! Core logger types and traits

pub mod ansi;
pub mod async_logger;
pub mod call_site;
pub mod config;
pub mod error;
pub mod handlers;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod null_logger;
pub mod registry;
pub mod sink;
pub mod sync_logger;
pub mod timestamp;

pub use ansi::{filter_ansi, filter_ansi_bytes};
pub use async_logger::AsyncLogger;
pub use call_site::CallSite;
pub use config::{LoggerConfig, LoggerMode};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::{LineEnd, LogRecord, Message};
pub use logger::{Log, Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use null_logger::{NullLogger, NULL_LOGGER_NAME};
pub use registry::Registry;
pub use sink::{SharedSink, Sink};
pub use sync_logger::SyncLogger;
