//! Basic logger usage example
//!
//! Demonstrates synchronous console logging at every level, threshold changes
//! and header-less progress output.
//!
//! Run with: cargo run --example basic_usage

use multisink_logger::prelude::*;
use multisink_logger::{brief, info};
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Multisink Logger - Basic Usage Example ===\n");

    let logger = Logger::builder().name("basic").level(LogLevel::Debug).build()?;

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.brief("This is a brief message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.fatal("This is a fatal message")?;

    println!("\n2. Logging with a stricter threshold:");
    logger.set_level(LogLevel::Brief)?;
    println!("   Level set to BRIEF - debug and info won't show:");
    logger.debug("Debug message (hidden)")?;
    logger.info("Info message (hidden)")?;
    brief!(logger, "Brief message (visible), epoch {}", 1)?;
    logger.log(LogLevel::Info, "log() ignores the threshold")?;

    println!("\n3. Several values in one record:");
    logger.brief(message!["loss", 0.314, "accuracy", 0.92])?;

    println!("\n4. Progress without headers:");
    for pct in (0..=100).step_by(25) {
        logger.disp(format!("progress {:>3}%", pct), LineEnd::CarriageReturn)?;
        thread::sleep(Duration::from_millis(50));
    }
    logger.disp("", LineEnd::Newline)?;

    println!("\n5. The null logger:");
    let quiet = Logger::null();
    info!(quiet, "never printed")?;
    quiet.warn("null logger still reports warnings on stderr")?;

    logger.close()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
