//! Sink trait for log output destinations

use super::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// An owned output destination.
///
/// Writes are append-only. `close` releases the underlying resource once;
/// later calls are no-ops.
pub trait Sink: Send {
    fn write(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn close(&mut self) -> Result<()>;
    fn is_closed(&self) -> bool;
    /// Whether the sink removes escape sequences from what it stores
    fn strips_ansi(&self) -> bool;
    fn name(&self) -> String;
}

/// A sink shared between loggers; the mutex serialises physical writes
pub type SharedSink = Arc<Mutex<dyn Sink>>;

/// Wrap `sink` for use by one or more loggers
pub fn shared<S: Sink + 'static>(sink: S) -> SharedSink {
    Arc::new(Mutex::new(sink))
}
