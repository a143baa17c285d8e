//! Async logging example
//!
//! Demonstrates a worker-backed logger shared by several threads, with an
//! explicit drain and a bounded shutdown.
//!
//! Run with: cargo run --example async_logging

use multisink_logger::prelude::*;
use multisink_logger::AsyncLogger;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Multisink Logger - Async Logging Example ===\n");

    let logger = Logger::builder()
        .name("async")
        .file("async_test.log")
        .async_mode()
        .build()?;

    println!("1. Ordered async logging:");
    for i in 0..100 {
        logger.info(format!("Message #{}", i))?;
    }
    logger.drain()?;
    println!("   Logged 100 messages asynchronously");

    println!("\n2. Multi-threaded logging:");
    let handles: Vec<_> = (0..5)
        .map(|thread_id| {
            let logger = logger.clone();
            thread::spawn(move || -> Result<()> {
                for i in 0..20 {
                    logger.info(format!("Thread {} - Message {}", thread_id, i))?;
                    thread::sleep(Duration::from_millis(10));
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        if let Ok(Err(e)) = handle.join() {
            eprintln!("worker failed: {}", e);
        }
    }
    println!("   5 threads logged 20 messages each");

    if let Some(metrics) = logger.metrics() {
        println!(
            "   queued={} written={} failures={}",
            metrics.queued(),
            metrics.total_written(),
            metrics.write_failures()
        );
    }
    logger.close()?;

    println!("\n3. Bounded shutdown:");
    let worker = AsyncLogger::spawn("bounded", LogLevel::Info, true, Vec::new())?;
    worker.close_timeout(Duration::from_secs(1))?;
    println!("   Worker drained within {:?}", Duration::from_secs(1));

    println!("\n=== Example completed successfully! ===");
    println!("Check 'async_test.log' for file output");

    Ok(())
}
