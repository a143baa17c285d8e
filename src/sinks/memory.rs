//! In-memory sink, mostly for capturing output in tests

use crate::core::ansi::sanitize_for_file;
use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Read handle onto a [`MemorySink`]'s buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    inner: Arc<Mutex<String>>,
}

impl MemoryBuffer {
    pub fn contents(&self) -> String {
        self.inner.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

pub struct MemorySink {
    name: String,
    buffer: MemoryBuffer,
    plain: bool,
    closed: bool,
}

impl MemorySink {
    /// Sink that keeps text exactly as written, colours included
    pub fn new() -> Self {
        Self {
            name: "memory".to_string(),
            buffer: MemoryBuffer::default(),
            plain: false,
            closed: false,
        }
    }

    /// Sink that stores the same plain text a file sink would
    pub fn plain() -> Self {
        Self {
            plain: true,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn handle(&self) -> MemoryBuffer {
        self.buffer.clone()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, text: &str) -> Result<()> {
        if self.closed {
            return Err(LoggerError::sink_closed(&self.name));
        }
        let mut buffer = self.buffer.inner.lock();
        if self.plain {
            buffer.push_str(&sanitize_for_file(text));
        } else {
            buffer.push_str(text);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn strips_ansi(&self) -> bool {
        self.plain
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
