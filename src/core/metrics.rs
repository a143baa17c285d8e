//! Logger metrics
//!
//! Counters for watching a logger's health from the outside: how much it
//! wrote, how many writes failed, and how much arrived after it was closed.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use multisink_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_failure();
///
/// assert_eq!(metrics.total_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records and displays delivered to every sink
    total_written: AtomicU64,

    /// Deliveries where at least one sink returned an error
    write_failures: AtomicU64,

    /// Calls ignored because the logger was already closed
    dropped_after_close: AtomicU64,

    /// Tasks handed to an async worker
    queued: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            dropped_after_close: AtomicU64::new(0),
            queued: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_written(&self) -> u64 {
        self.total_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_after_close(&self) -> u64 {
        self.dropped_after_close.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn queued(&self) -> u64 {
        self.queued.load(Ordering::Relaxed)
    }

    /// Returns the previous value
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.total_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped_after_close(&self) -> u64 {
        self.dropped_after_close.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_queued(&self) -> u64 {
        self.queued.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of deliveries that failed, as a percentage (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.total_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            total_written: AtomicU64::new(self.total_written()),
            write_failures: AtomicU64::new(self.write_failures()),
            dropped_after_close: AtomicU64::new(self.dropped_after_close()),
            queued: AtomicU64::new(self.queued()),
        }
    }
}
