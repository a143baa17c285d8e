//! Named sink collection owned by a logger

use super::error::Result;
use super::log_record::LogRecord;
use super::metrics::LoggerMetrics;
use super::sink::SharedSink;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Default)]
struct State {
    sinks: Vec<(String, SharedSink)>,
    closed: bool,
}

/// Every sink a logger writes to, keyed by name.
///
/// Writers hold the read lock for the whole delivery and `close_all` takes the
/// write lock, so a message is either fully delivered or dropped, never cut
/// short by a concurrent close.
#[derive(Default)]
pub struct Handlers {
    state: RwLock<State>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `sink` under `name`, replacing any sink already registered there.
    ///
    /// Ignored once closed.
    pub fn insert(&self, name: impl Into<String>, sink: SharedSink) {
        let name = name.into();
        let mut state = self.state.write();
        if state.closed {
            return;
        }
        match state.sinks.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = sink,
            None => state.sinks.push((name, sink)),
        }
    }

    pub fn remove(&self, name: &str) -> Option<SharedSink> {
        let mut state = self.state.write();
        let idx = state.sinks.iter().position(|(n, _)| n == name)?;
        Some(state.sinks.remove(idx).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.state.read().sinks.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.state.read().sinks.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.state.read().sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_closed(&self) -> bool {
        self.state.read().closed
    }

    /// Deliver `record` (with its header when `header` is set) to every sink
    pub fn write_record(
        &self,
        record: &LogRecord,
        header: bool,
        metrics: &LoggerMetrics,
    ) -> Result<()> {
        let mut text = if header { record.header() } else { String::new() };
        text.push_str(&record.body());
        self.write_text(&text, metrics)
    }

    /// Deliver `text` to every sink.
    ///
    /// Every sink is attempted; the first failure is returned. A closed set
    /// drops the text.
    pub fn write_text(&self, text: &str, metrics: &LoggerMetrics) -> Result<()> {
        let state = self.state.read();
        if state.closed {
            metrics.record_dropped_after_close();
            return Ok(());
        }

        let mut first_error = None;
        for (_, sink) in state.sinks.iter() {
            if let Err(e) = sink.lock().write(text) {
                first_error = first_error.or(Some(e));
            }
        }

        match first_error {
            Some(e) => {
                metrics.record_failure();
                Err(e)
            }
            None => {
                metrics.record_written();
                Ok(())
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        let state = self.state.read();
        let mut first_error = None;
        for (_, sink) in state.sinks.iter() {
            if let Err(e) = sink.lock().flush() {
                first_error = first_error.or(Some(e));
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Release every sink. Later calls are no-ops.
    ///
    /// A sink is closed only when this set holds the last reference to it;
    /// sinks still held elsewhere (the shared console, a file handed to
    /// several loggers) are flushed and left open for their other owners.
    pub fn close_all(&self) -> Result<()> {
        let sinks = {
            let mut state = self.state.write();
            if state.closed {
                return Ok(());
            }
            state.closed = true;
            std::mem::take(&mut state.sinks)
        };

        let mut first_error = None;
        for (_, sink) in sinks {
            let result = if Arc::strong_count(&sink) == 1 {
                sink.lock().close()
            } else {
                sink.lock().flush()
            };
            if let Err(e) = result {
                first_error = first_error.or(Some(e));
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
