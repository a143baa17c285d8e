//! Asynchronous logger backed by one dedicated worker thread
//!
//! Records are captured on the caller's thread (call site, timestamp and the
//! stringified message) and queued on an unbounded FIFO channel. A single
//! worker drains the channel, so one logger's output always appears in
//! submission order.

use super::{
    error::{LoggerError, Result},
    handlers::Handlers,
    log_level::LogLevel,
    log_record::LogRecord,
    logger::{toggle_console, Log, DEFAULT_SHUTDOWN_TIMEOUT},
    metrics::LoggerMetrics,
    sink::SharedSink,
};
use crate::sinks::CONSOLE_SINK_NAME;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

enum Task {
    Record(LogRecord),
    Display(String),
    /// Acknowledged once every earlier task has run
    Barrier(Sender<()>),
}

/// State the worker shares with the handle
struct Shared {
    header: bool,
    handlers: Handlers,
    metrics: LoggerMetrics,
    /// First write failure seen by the worker, reported by the next flush/drain/close
    error: Mutex<Option<LoggerError>>,
}

impl Shared {
    fn stash(&self, err: LoggerError) {
        let mut slot = self.error.lock();
        if slot.is_none() {
            *slot = Some(err);
        }
    }

    fn take_error(&self) -> Option<LoggerError> {
        self.error.lock().take()
    }

    fn run(&self, task: Task) {
        let result = match task {
            Task::Record(record) => self.handlers.write_record(&record, self.header, &self.metrics),
            Task::Display(text) => self.handlers.write_text(&text, &self.metrics),
            Task::Barrier(ack) => {
                let _ = ack.send(());
                Ok(())
            }
        };
        if let Err(e) = result {
            self.stash(e);
        }
    }
}

pub struct AsyncLogger {
    name: String,
    level: RwLock<LogLevel>,
    shared: Arc<Shared>,
    sender: RwLock<Option<Sender<Task>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
    /// Held for a whole shutdown so a concurrent closer waits for the drain
    closing: Mutex<()>,
}

impl AsyncLogger {
    /// Start the worker thread. Fails only if the thread cannot be spawned.
    pub fn spawn(
        name: impl Into<String>,
        level: LogLevel,
        header: bool,
        sinks: Vec<(String, SharedSink)>,
    ) -> Result<Self> {
        let name = name.into();
        let handlers = Handlers::new();
        for (sink_name, sink) in sinks {
            handlers.insert(sink_name, sink);
        }
        let shared = Arc::new(Shared {
            header,
            handlers,
            metrics: LoggerMetrics::new(),
            error: Mutex::new(None),
        });

        let (sender, receiver) = unbounded();
        let worker_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name(format!("logger-{}", name))
            .spawn(move || Self::work(&worker_shared, receiver))
            .map_err(|e| LoggerError::io("spawning logging worker", e))?;

        Ok(Self {
            name,
            level: RwLock::new(level),
            shared,
            sender: RwLock::new(Some(sender)),
            worker: Mutex::new(Some(handle)),
            closing: Mutex::new(()),
        })
    }

    /// Worker loop: run tasks in order until every sender is gone.
    ///
    /// Each task is isolated so a panicking sink cannot take the worker, and
    /// with it every later message, down.
    fn work(shared: &Shared, receiver: Receiver<Task>) {
        for task in receiver.iter() {
            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| shared.run(task)));
            if let Err(panic_info) = outcome {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                shared.metrics.record_failure();
                eprintln!(
                    "[LOGGER CRITICAL] Sink panicked on the logging worker: {}. \
                     Later messages are still delivered.",
                    panic_msg
                );
            }
        }
    }

    fn submit(&self, task: Task) -> Result<()> {
        let sender = self.sender.read();
        match sender.as_ref() {
            Some(sender) => {
                sender.send(task).map_err(|_| LoggerError::WorkerGone)?;
                self.shared.metrics.record_queued();
                Ok(())
            }
            None => {
                self.shared.metrics.record_dropped_after_close();
                Ok(())
            }
        }
    }

    fn worker_result(&self) -> Result<()> {
        match self.shared.take_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Close, waiting at most `timeout` for queued messages to drain.
    ///
    /// On timeout the worker keeps draining in the background and the sinks
    /// stay open; a later `close()` waits for it to finish.
    pub fn close_timeout(&self, timeout: Duration) -> Result<()> {
        self.shutdown(Some(timeout))
    }

    fn shutdown(&self, timeout: Option<Duration>) -> Result<()> {
        let start = Instant::now();
        let _closing = match timeout {
            None => self.closing.lock(),
            Some(timeout) => self
                .closing
                .try_lock_for(timeout)
                .ok_or(LoggerError::ShutdownTimeout { timeout })?,
        };

        // Close the channel so the worker exits after draining
        drop(self.sender.write().take());

        let handle = self.worker.lock().take();
        if let Some(handle) = handle {
            match timeout {
                None => {
                    if let Err(e) = handle.join() {
                        eprintln!("[LOGGER ERROR] Logging worker panicked during shutdown: {:?}", e);
                    }
                }
                Some(timeout) => {
                    while !handle.is_finished() {
                        if start.elapsed() >= timeout {
                            *self.worker.lock() = Some(handle);
                            return Err(LoggerError::ShutdownTimeout { timeout });
                        }
                        thread::sleep(Duration::from_millis(1));
                    }
                    if let Err(e) = handle.join() {
                        eprintln!("[LOGGER ERROR] Logging worker panicked during shutdown: {:?}", e);
                    }
                }
            }
        }

        let closed = self.shared.handlers.close_all();
        self.worker_result().and(closed)
    }
}

impl Log for AsyncLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> LogLevel {
        *self.level.read()
    }

    fn set_level(&self, level: LogLevel) -> Result<()> {
        *self.level.write() = level;
        Ok(())
    }

    fn header(&self) -> bool {
        self.shared.header
    }

    fn console(&self) -> bool {
        self.shared.handlers.contains(CONSOLE_SINK_NAME)
    }

    fn set_console(&self, console: bool) -> Result<()> {
        toggle_console(self, console)
    }

    fn add_handler(&self, name: &str, sink: SharedSink) -> Result<()> {
        self.shared.handlers.insert(name, sink);
        Ok(())
    }

    fn remove_handler(&self, name: &str) -> Option<SharedSink> {
        self.shared.handlers.remove(name)
    }

    fn handler_names(&self) -> Vec<String> {
        self.shared.handlers.names()
    }

    fn emit(&self, record: LogRecord) -> Result<()> {
        self.submit(Task::Record(record))
    }

    fn display(&self, text: String) -> Result<()> {
        self.submit(Task::Display(text))
    }

    /// Flushes the sinks without waiting for queued writes; see [`Log::drain`]
    fn flush(&self) -> Result<()> {
        self.shared.handlers.flush()?;
        self.worker_result()
    }

    fn drain(&self) -> Result<()> {
        let (ack, done) = bounded(1);
        {
            let sender = self.sender.read();
            let Some(sender) = sender.as_ref() else {
                return self.worker_result();
            };
            sender
                .send(Task::Barrier(ack))
                .map_err(|_| LoggerError::WorkerGone)?;
        }
        done.recv().map_err(|_| LoggerError::WorkerGone)?;
        self.worker_result()
    }

    fn close(&self) -> Result<()> {
        self.shutdown(None)
    }

    fn is_closed(&self) -> bool {
        self.sender.read().is_none()
    }

    fn metrics(&self) -> Option<&LoggerMetrics> {
        Some(&self.shared.metrics)
    }
}

impl Drop for AsyncLogger {
    fn drop(&mut self) {
        match self.shutdown(Some(DEFAULT_SHUTDOWN_TIMEOUT)) {
            Ok(()) => {}
            Err(LoggerError::ShutdownTimeout { timeout }) => eprintln!(
                "[LOGGER WARNING] Logging worker for '{}' did not finish within {:?}. \
                 Some logs may be lost.",
                self.name, timeout
            ),
            Err(e) => eprintln!("[LOGGER ERROR] Failed to close logger '{}': {}", self.name, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::shared;
    use crate::core::{CallSite, Message, Sink};
    use crate::sinks::MemorySink;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn record(text: String) -> LogRecord {
        LogRecord::new(LogLevel::Info, Message::from(text), CallSite::new("t.rs", 1, None))
    }

    /// Sink that blocks every write until released
    struct GateSink {
        open: Arc<AtomicBool>,
        inner: MemorySink,
    }

    impl Sink for GateSink {
        fn write(&mut self, text: &str) -> Result<()> {
            while !self.open.load(Ordering::Acquire) {
                thread::sleep(Duration::from_millis(1));
            }
            self.inner.write(text)
        }
        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
        fn close(&mut self) -> Result<()> {
            self.inner.close()
        }
        fn is_closed(&self) -> bool {
            self.inner.is_closed()
        }
        fn strips_ansi(&self) -> bool {
            false
        }
        fn name(&self) -> String {
            "gate".to_string()
        }
    }

    #[test]
    fn test_drain_waits_for_queue() {
        let sink = MemorySink::new();
        let buffer = sink.handle();
        let logger = AsyncLogger::spawn("drain", LogLevel::Info, false, vec![("m".into(), shared(sink))]).unwrap();

        for i in 0..20 {
            logger.emit(record(i.to_string())).unwrap();
        }
        logger.drain().unwrap();

        let expected: String = (0..20).map(|i| format!("{}\n", i)).collect();
        assert_eq!(buffer.contents(), expected);
        assert_eq!(logger.metrics().unwrap().queued(), 20);
        logger.close().unwrap();
    }

    #[test]
    fn test_close_timeout_then_close() {
        let open = Arc::new(AtomicBool::new(false));
        let inner = MemorySink::new();
        let buffer = inner.handle();
        let gate = GateSink {
            open: Arc::clone(&open),
            inner,
        };
        let logger = AsyncLogger::spawn("gate", LogLevel::Info, false, vec![("g".into(), shared(gate))]).unwrap();

        logger.display("held\n".to_string()).unwrap();
        let result = logger.close_timeout(Duration::from_millis(20));
        assert!(matches!(result, Err(LoggerError::ShutdownTimeout { .. })));
        assert!(logger.is_closed());

        open.store(true, Ordering::Release);
        logger.close().unwrap();
        assert_eq!(buffer.contents(), "held\n");
    }

    #[test]
    fn test_submit_after_close_is_dropped() {
        let sink = MemorySink::new();
        let buffer = sink.handle();
        let logger = AsyncLogger::spawn("closed", LogLevel::Info, false, vec![("m".into(), shared(sink))]).unwrap();

        logger.close().unwrap();
        logger.close().unwrap();
        logger.display("late\n".to_string()).unwrap();
        logger.drain().unwrap();
        assert!(buffer.is_empty());
        assert_eq!(logger.metrics().unwrap().dropped_after_close(), 1);
    }

    #[test]
    fn test_concurrent_close_waits_for_drain() {
        let open = Arc::new(AtomicBool::new(false));
        let inner = MemorySink::new();
        let buffer = inner.handle();
        let gate = GateSink {
            open: Arc::clone(&open),
            inner,
        };
        let logger = Arc::new(
            AsyncLogger::spawn("racing", LogLevel::Info, false, vec![("g".into(), shared(gate))]).unwrap(),
        );
        for i in 0..5 {
            logger.emit(record(i.to_string())).unwrap();
        }

        let closers: Vec<_> = (0..2)
            .map(|n| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(50 * n));
                    logger.close()
                })
            })
            .collect();
        thread::sleep(Duration::from_millis(100));
        open.store(true, Ordering::Release);

        for closer in closers {
            closer.join().unwrap().unwrap();
        }
        assert_eq!(buffer.contents(), "0\n1\n2\n3\n4\n");
        assert_eq!(logger.metrics().unwrap().dropped_after_close(), 0);
    }

    #[test]
    fn test_worker_error_surfaces_on_close() {
        let mut sink = MemorySink::new();
        sink.close().unwrap();
        let logger = AsyncLogger::spawn("failing", LogLevel::Info, false, vec![("m".into(), shared(sink))]).unwrap();

        logger.display("lost\n".to_string()).unwrap();
        assert!(matches!(logger.close(), Err(LoggerError::SinkClosed { .. })));
        assert_eq!(logger.metrics().unwrap().write_failures(), 1);
    }
}
