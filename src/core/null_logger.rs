//! The shared no-op logger

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    log_record::LogRecord,
    logger::{Log, Logger},
    sink::SharedSink,
};
use once_cell::sync::Lazy;

/// Registry name that always resolves to the null logger
pub const NULL_LOGGER_NAME: &str = "null";

static NULL_LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new(NullLogger));

/// Handle to the process-wide null logger
pub fn null_logger() -> Logger {
    NULL_LOGGER.clone()
}

/// Logger that owns no sinks.
///
/// Only `warn`, `error` and `fatal` produce anything: a short line on stderr,
/// since there is nowhere else for them to go.
#[derive(Debug, Default)]
pub struct NullLogger;

impl NullLogger {
    fn label(level: LogLevel) -> Option<&'static str> {
        match level {
            LogLevel::Warn => Some("Warning"),
            LogLevel::Error => Some("Error"),
            LogLevel::Fatal => Some("Fatal"),
            _ => None,
        }
    }
}

impl Log for NullLogger {
    fn name(&self) -> &str {
        NULL_LOGGER_NAME
    }

    fn level(&self) -> LogLevel {
        LogLevel::Null
    }

    fn set_level(&self, _level: LogLevel) -> Result<()> {
        Err(LoggerError::NullLoggerImmutable {
            operation: "set_level",
        })
    }

    fn header(&self) -> bool {
        false
    }

    fn enabled(&self, level: LogLevel) -> bool {
        Self::label(level).is_some()
    }

    fn console(&self) -> bool {
        false
    }

    fn set_console(&self, _console: bool) -> Result<()> {
        Err(LoggerError::NullLoggerImmutable {
            operation: "set_console",
        })
    }

    fn add_handler(&self, _name: &str, _sink: SharedSink) -> Result<()> {
        Err(LoggerError::NullLoggerImmutable {
            operation: "add_handler",
        })
    }

    fn remove_handler(&self, _name: &str) -> Option<SharedSink> {
        None
    }

    fn handler_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn emit(&self, record: LogRecord) -> Result<()> {
        if let Some(label) = Self::label(record.level) {
            eprintln!("<<< {}: {}", label, record.message.joined());
        }
        Ok(())
    }

    fn display(&self, _text: String) -> Result<()> {
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn drain(&self) -> Result<()> {
        Ok(())
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn is_null(&self) -> bool {
        true
    }
}
