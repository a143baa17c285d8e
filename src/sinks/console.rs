//! Console sink implementation

use crate::core::sink::{shared, SharedSink};
use crate::core::{LoggerError, Result, Sink};
use once_cell::sync::Lazy;
use std::io::{self, Stdout, Write};

pub const CONSOLE_SINK_NAME: &str = "STDOUT";

static SHARED_CONSOLE: Lazy<SharedSink> = Lazy::new(|| shared(ConsoleSink::new()));

/// Standard output, colours preserved.
///
/// Loggers normally reuse the process-wide instance from [`ConsoleSink::shared`]
/// instead of holding their own handle.
pub struct ConsoleSink {
    stdout: Stdout,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// The console sink shared by every logger in the process
    pub fn shared() -> SharedSink {
        SharedSink::clone(&SHARED_CONSOLE)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, text: &str) -> Result<()> {
        self.stdout
            .lock()
            .write_all(text.as_bytes())
            .map_err(|e| LoggerError::io("writing to stdout", e))
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout
            .flush()
            .map_err(|e| LoggerError::io("flushing stdout", e))
    }

    /// Stdout belongs to the process, so closing only flushes it
    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn strips_ansi(&self) -> bool {
        false
    }

    fn name(&self) -> String {
        CONSOLE_SINK_NAME.to_string()
    }
}
