//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::{ConsoleSink, CONSOLE_SINK_NAME};
pub use file::FileSink;
pub use memory::{MemoryBuffer, MemorySink};

pub use crate::core::{SharedSink, Sink};
