//! Stress tests for ordering and concurrent logging
//!
//! These tests verify:
//! - An async logger writes messages in submission order
//! - Concurrent callers never interleave within one record
//! - Loggers sharing a sink each deliver every record intact
//! - Drop drains an async logger that was never closed
//! - Closing from several threads at once still writes the whole backlog

use multisink_logger::core::sink::shared;
use multisink_logger::prelude::*;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

#[test]
fn test_async_preserves_submission_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("ordered.log");

    let logger = Logger::builder()
        .console(false)
        .file(&log_file)
        .async_mode()
        .build()
        .expect("Failed to build logger");

    for i in 0..100 {
        logger.info(i).unwrap();
    }
    logger.close().unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let values: Vec<u32> = content
        .lines()
        .filter_map(|line| line.parse().ok())
        .collect();
    assert_eq!(values, (0..100).collect::<Vec<u32>>());
}

#[test]
fn test_concurrent_writers_keep_records_whole() {
    let sink = MemorySink::plain();
    let buffer = sink.handle();
    let logger = Logger::builder()
        .header(false)
        .console(false)
        .sink("memory", sink)
        .async_mode()
        .build()
        .expect("Failed to build logger");

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    logger
                        .info(message![format!("t{}-{}-a", t, i), format!("t{}-{}-b", t, i)])
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Writer thread panicked");
    }
    logger.drain().unwrap();

    let content = buffer.contents();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 8 * 200 * 2);
    for pair in lines.chunks(2) {
        let first = pair[0].strip_suffix("-a").expect("record split apart");
        assert_eq!(pair[1], format!("{}-b", first));
    }

    // Per-thread order survives the shared queue
    for t in 0..8 {
        let prefix = format!("t{}-", t);
        let seen: Vec<u32> = lines
            .iter()
            .filter_map(|l| l.strip_prefix(&prefix)?.strip_suffix("-a")?.parse().ok())
            .collect();
        assert_eq!(seen, (0..200).collect::<Vec<u32>>());
    }
    logger.close().unwrap();
}

#[test]
fn test_loggers_sharing_a_sink() {
    let memory = MemorySink::plain();
    let buffer = memory.handle();
    let sink: SharedSink = shared(memory);

    let loggers: Vec<Logger> = (0..4)
        .map(|n| {
            Logger::builder()
                .name(format!("worker-{}", n))
                .header(false)
                .console(false)
                .shared_sink("shared", sink.clone())
                .mode(if n % 2 == 0 { LoggerMode::Sync } else { LoggerMode::Async })
                .build()
                .expect("Failed to build logger")
        })
        .collect();
    drop(sink);

    thread::scope(|scope| {
        for (n, logger) in loggers.iter().enumerate() {
            scope.spawn(move || {
                for i in 0..100 {
                    logger.info(format!("{}:{}", n, i)).unwrap();
                }
            });
        }
    });
    for logger in &loggers {
        logger.close().unwrap();
    }

    let content = buffer.contents();
    assert_eq!(content.lines().count(), 400);
    for n in 0..4 {
        let prefix = format!("{}:", n);
        let seen: Vec<u32> = content
            .lines()
            .filter_map(|l| l.strip_prefix(&prefix)?.parse().ok())
            .collect();
        assert_eq!(seen, (0..100).collect::<Vec<u32>>());
    }
}

#[test]
fn test_drop_drains_async_logger() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("dropped.log");

    {
        let logger = Logger::builder()
            .console(false)
            .file(&log_file)
            .async_mode()
            .build()
            .expect("Failed to build logger");
        for i in 0..500 {
            logger.info(format!("message {}", i)).unwrap();
        }
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.contains("message 499"));
    assert!(content.contains("Log file closed at"));
}

#[test]
fn test_registry_under_contention() {
    let registry = Arc::new(Registry::new());
    let config = LoggerConfig::new(LogLevel::Info).with_console(false);

    let loggers: Vec<Logger> = thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let config = config.clone();
                scope.spawn(move || registry.get_logger(Some("contended"), &config).unwrap())
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("Registry thread panicked"))
            .collect()
    });

    for logger in &loggers {
        assert!(Logger::ptr_eq(logger, &loggers[0]));
    }
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_concurrent_close_keeps_backlog() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("closing.log");

    let logger = Logger::builder()
        .header(false)
        .console(false)
        .file(&log_file)
        .async_mode()
        .build()
        .expect("Failed to build logger");
    for i in 0..2000 {
        logger.info(i).unwrap();
    }

    let closers: Vec<_> = (0..2)
        .map(|_| {
            let logger = logger.clone();
            thread::spawn(move || logger.close())
        })
        .collect();
    for closer in closers {
        closer
            .join()
            .expect("Closer thread panicked")
            .expect("Failed to close logger");
    }

    assert_eq!(logger.metrics().unwrap().dropped_after_close(), 0);
    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let values: Vec<u32> = content
        .lines()
        .filter_map(|line| line.parse().ok())
        .collect();
    assert_eq!(values, (0..2000).collect::<Vec<u32>>());
    assert_eq!(content.matches("Log file closed at").count(), 1);
}

#[test]
fn test_registry_close_all_races_caller_close() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("registry-close.log");
    let registry = Registry::new();
    let config = LoggerConfig::new(LogLevel::Info)
        .with_console(false)
        .with_header(false)
        .with_file(&log_file)
        .with_mode(LoggerMode::Async);

    let logger = registry.get_logger(Some("racing"), &config).unwrap();
    for i in 0..1000 {
        logger.info(i).unwrap();
    }

    thread::scope(|scope| {
        let caller = scope.spawn(|| logger.close());
        registry.close_all().expect("Failed to close registry");
        caller
            .join()
            .expect("Closer thread panicked")
            .expect("Failed to close logger");
    });

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let count = content.lines().filter(|line| line.parse::<u32>().is_ok()).count();
    assert_eq!(count, 1000);
}
