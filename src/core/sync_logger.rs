//! Synchronous logger: every call writes on the caller's thread

use super::{
    error::Result,
    handlers::Handlers,
    log_level::LogLevel,
    log_record::LogRecord,
    logger::{toggle_console, Log},
    metrics::LoggerMetrics,
    sink::SharedSink,
};
use crate::sinks::CONSOLE_SINK_NAME;
use parking_lot::RwLock;

pub struct SyncLogger {
    name: String,
    level: RwLock<LogLevel>,
    header: bool,
    handlers: Handlers,
    metrics: LoggerMetrics,
}

impl SyncLogger {
    pub fn new(
        name: impl Into<String>,
        level: LogLevel,
        header: bool,
        sinks: Vec<(String, SharedSink)>,
    ) -> Self {
        let handlers = Handlers::new();
        for (name, sink) in sinks {
            handlers.insert(name, sink);
        }
        Self {
            name: name.into(),
            level: RwLock::new(level),
            header,
            handlers,
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Log for SyncLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> LogLevel {
        *self.level.read()
    }

    fn set_level(&self, level: LogLevel) -> Result<()> {
        *self.level.write() = level;
        Ok(())
    }

    fn header(&self) -> bool {
        self.header
    }

    fn console(&self) -> bool {
        self.handlers.contains(CONSOLE_SINK_NAME)
    }

    fn set_console(&self, console: bool) -> Result<()> {
        toggle_console(self, console)
    }

    fn add_handler(&self, name: &str, sink: SharedSink) -> Result<()> {
        self.handlers.insert(name, sink);
        Ok(())
    }

    fn remove_handler(&self, name: &str) -> Option<SharedSink> {
        self.handlers.remove(name)
    }

    fn handler_names(&self) -> Vec<String> {
        self.handlers.names()
    }

    fn emit(&self, record: LogRecord) -> Result<()> {
        self.handlers.write_record(&record, self.header, &self.metrics)
    }

    fn display(&self, text: String) -> Result<()> {
        self.handlers.write_text(&text, &self.metrics)
    }

    fn flush(&self) -> Result<()> {
        self.handlers.flush()
    }

    /// Writes are already complete when the call returns
    fn drain(&self) -> Result<()> {
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.handlers.close_all()
    }

    fn is_closed(&self) -> bool {
        self.handlers.is_closed()
    }

    fn metrics(&self) -> Option<&LoggerMetrics> {
        Some(&self.metrics)
    }
}

impl Drop for SyncLogger {
    fn drop(&mut self) {
        if let Err(e) = self.handlers.close_all() {
            eprintln!("[LOGGER ERROR] Failed to close logger '{}': {}", self.name, e);
        }
    }
}
