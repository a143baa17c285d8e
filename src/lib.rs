//! # Multisink Logger
//!
//! A leveled, multi-sink logger for long-running programs such as training
//! scripts and batch jobs.
//!
//! ## Features
//!
//! - **Seven levels**: `NULL < FATAL < ERROR < WARN < BRIEF < INFO < DEBUG`
//! - **Multiple Sinks**: colourised console output and plain-text log files
//! - **Sync or Async**: write on the caller's thread, or on one ordered worker per logger
//! - **Registry**: name-keyed loggers where the first configuration wins
//!
//! ## Example
//!
//! ```
//! use multisink_logger::prelude::*;
//!
//! let registry = Registry::new();
//! let logger = registry
//!     .get_logger(Some("main"), &LoggerConfig::new(LogLevel::Debug).with_console(false))
//!     .unwrap();
//!
//! logger.info("starting").unwrap();
//! logger.debug(message!["batch", 12, "loss", 0.31]).unwrap();
//! logger.close().unwrap();
//! ```
//!
//! ## Call sites
//!
//! Every record header names where it was logged from. The handle methods
//! (`logger.info(..)`) know the file and line but not the function, so their
//! tag reads `(path:line)`. The macros ([`info!`], [`warn!`], ...) also capture
//! the enclosing function and produce `(path:line|function)`:
//!
//! ```
//! use multisink_logger::prelude::*;
//! use multisink_logger::info;
//!
//! let capture = MemorySink::plain();
//! let output = capture.handle();
//! let logger = Logger::builder().console(false).sink("capture", capture).build().unwrap();
//!
//! fn load(logger: &Logger) {
//!     info!(logger, "loaded {} rows", 3).unwrap();
//! }
//! load(&logger);
//! assert!(output.contents().contains("::load)>>>"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LineEnd, Log, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        LoggerMode, Message, Registry, Result, SharedSink, Sink, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::message;
    pub use crate::sinks::{ConsoleSink, FileSink, MemoryBuffer, MemorySink};
}

pub use core::{
    filter_ansi, filter_ansi_bytes, AsyncLogger, CallSite, LineEnd, Log, LogLevel, LogRecord,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerMode, Message,
    NullLogger, Registry, Result, SharedSink, Sink, SyncLogger, DEFAULT_SHUTDOWN_TIMEOUT,
    NULL_LOGGER_NAME,
};
pub use sinks::{ConsoleSink, FileSink, MemoryBuffer, MemorySink};
