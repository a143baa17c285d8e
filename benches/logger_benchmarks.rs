//! Criterion benchmarks for multisink_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use multisink_logger::prelude::*;
use multisink_logger::{filter_ansi, CallSite, LogRecord};

fn memory_logger(level: LogLevel, mode: LoggerMode) -> Logger {
    Logger::builder()
        .level(level)
        .console(false)
        .sink("memory", MemorySink::plain())
        .mode(mode)
        .build()
        .expect("Failed to build logger")
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new_sync", |b| {
        b.iter(|| {
            let logger = memory_logger(LogLevel::Info, LoggerMode::Sync);
            black_box(logger)
        });
    });

    group.bench_function("new_async", |b| {
        b.iter(|| {
            let logger = memory_logger(LogLevel::Info, LoggerMode::Async);
            black_box(logger)
        });
    });

    group.bench_function("registry_hit", |b| {
        let registry = Registry::new();
        let config = LoggerConfig::new(LogLevel::Info).with_console(false);
        registry.get_logger(Some("bench"), &config).unwrap();
        b.iter(|| {
            let logger = registry.get_logger(black_box(Some("bench")), &config).unwrap();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_sync_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logging");
    group.throughput(Throughput::Elements(1));

    let logger = memory_logger(LogLevel::Debug, LoggerMode::Sync);

    group.bench_function("debug", |b| {
        b.iter(|| logger.debug(black_box("Debug message")));
    });

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("multi_value", |b| {
        b.iter(|| logger.info(message![black_box("epoch"), black_box(3), black_box(0.25)]));
    });

    group.bench_function("disp", |b| {
        b.iter(|| logger.disp(black_box("42%"), LineEnd::CarriageReturn));
    });

    group.finish();
}

fn bench_async_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("async_logging");
    group.throughput(Throughput::Elements(1));

    let logger = memory_logger(LogLevel::Debug, LoggerMode::Async);

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("error", |b| {
        b.iter(|| logger.error(black_box("Error message")));
    });

    group.finish();
    let _ = logger.close();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = memory_logger(LogLevel::Info, LoggerMode::Async);

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = logger.clone();
                    std::thread::spawn(move || {
                        let _ = logger.info(black_box("Concurrent message"));
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
    let _ = logger.close();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let record = LogRecord::new(
        LogLevel::Info,
        Message::from("Test message"),
        CallSite::new("src/train/loop.rs", 42, Some("train::run")),
    );

    group.bench_function("header", |b| {
        b.iter(|| black_box(record.header()));
    });

    group.bench_function("filter_ansi_colored", |b| {
        let text = format!("{}{}", record.header(), record.body());
        b.iter(|| black_box(filter_ansi(black_box(&text)).into_owned()));
    });

    group.bench_function("filter_ansi_plain", |b| {
        b.iter(|| black_box(filter_ansi(black_box("no escapes in this line at all")).len()));
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = memory_logger(LogLevel::Warn, LoggerMode::Sync);

    group.bench_function("below_threshold", |b| {
        b.iter(|| logger.debug(black_box("This should be filtered")));
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| logger.error(black_box("This should be logged")));
    });

    group.bench_function("null_logger", |b| {
        let null = Logger::null();
        b.iter(|| null.info(black_box("Dropped")));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_sync_logging,
    bench_async_logging,
    bench_concurrent_logging,
    bench_formatting,
    bench_level_filtering
);

criterion_main!(benches);
