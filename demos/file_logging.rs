//! File logging example
//!
//! Demonstrates logging to both console and file sinks through a registry.
//! The console keeps its colours; the file gets plain text.
//!
//! Run with: cargo run --example file_logging

use multisink_logger::prelude::*;

#[derive(Debug)]
struct PluginError(String);

impl std::fmt::Display for PluginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "plugin '{}' failed to load", self.0)
    }
}

impl std::error::Error for PluginError {}

fn load_plugin(logger: &Logger, name: &str) -> std::result::Result<(), PluginError> {
    Err(logger.exception(PluginError(name.to_string())))
}

fn main() -> Result<()> {
    println!("=== Multisink Logger - File Logging Example ===\n");

    let registry = Registry::new();
    let config = LoggerConfig::new(LogLevel::Debug).with_file("application.log");
    let logger = registry.get_logger(Some("app"), &config)?;

    println!("1. Logging to both console and file:");
    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.warn("\x1b[1mUsing default settings\x1b[0m for some options")?;
    if load_plugin(&logger, "metrics").is_err() {
        logger.info("Continuing without optional plugin")?;
    }

    println!("\n2. Asking for the same logger with another level:");
    let same = registry.get_logger(Some("app"), &LoggerConfig::new(LogLevel::Info))?;
    assert!(Logger::ptr_eq(&logger, &same));

    println!("\n3. Performing some operations:");
    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i))?;
        if i == 3 {
            logger.warn("Item 3 took longer than expected")?;
        }
    }

    registry.close_all()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
