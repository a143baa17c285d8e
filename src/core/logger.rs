//! Logger interface, handle and builder

use super::{
    async_logger::AsyncLogger,
    call_site::CallSite,
    config::{LoggerConfig, LoggerMode},
    error::Result,
    log_level::LogLevel,
    log_record::{LineEnd, LogRecord, Message},
    metrics::LoggerMetrics,
    null_logger,
    sink::{shared, SharedSink, Sink},
    sync_logger::SyncLogger,
};
use crate::sinks::{ConsoleSink, FileSink, CONSOLE_SINK_NAME};
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Default drain timeout used when an async logger is dropped without `close()`
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Behaviour shared by every logger variant.
///
/// Object-safe so callers can hold any variant behind a [`Logger`] handle.
/// Level gating and call-site capture happen in the handle; implementations
/// receive finished records.
pub trait Log: Send + Sync {
    fn name(&self) -> &str;
    fn level(&self) -> LogLevel;
    fn set_level(&self, level: LogLevel) -> Result<()>;
    fn header(&self) -> bool;

    /// Whether a leveled call at `level` produces output
    fn enabled(&self, level: LogLevel) -> bool {
        self.level().allows(level)
    }

    fn console(&self) -> bool;
    fn set_console(&self, console: bool) -> Result<()>;
    fn add_handler(&self, name: &str, sink: SharedSink) -> Result<()>;
    fn remove_handler(&self, name: &str) -> Option<SharedSink>;
    fn handler_names(&self) -> Vec<String>;

    /// Write `record` to every sink, header first when enabled
    fn emit(&self, record: LogRecord) -> Result<()>;
    /// Write `text` to every sink as is
    fn display(&self, text: String) -> Result<()>;

    fn flush(&self) -> Result<()>;
    /// Block until every earlier write has reached the sinks
    fn drain(&self) -> Result<()>;
    /// Release all sinks. Idempotent; later writes are dropped.
    fn close(&self) -> Result<()>;
    fn is_closed(&self) -> bool;

    fn is_null(&self) -> bool {
        false
    }

    fn metrics(&self) -> Option<&LoggerMetrics> {
        None
    }
}

/// Cloneable handle to a logger of any variant.
///
/// Every clone refers to the same logger; use [`Logger::ptr_eq`] to compare
/// identity.
///
/// The leveled methods record file and line only. Use the crate macros
/// ([`info!`](crate::info) and friends) to also name the calling function.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<dyn Log>,
}

impl Logger {
    pub fn new<L: Log + 'static>(log: L) -> Self {
        Self {
            inner: Arc::new(log),
        }
    }

    pub fn from_arc(inner: Arc<dyn Log>) -> Self {
        Self { inner }
    }

    /// The shared no-op logger
    pub fn null() -> Self {
        null_logger::null_logger()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use multisink_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(LogLevel::Debug)
    ///     .console(false)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.level(), LogLevel::Debug);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Whether both handles refer to the same logger
    pub fn ptr_eq(a: &Logger, b: &Logger) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&a.inner) as *const (),
            Arc::as_ptr(&b.inner) as *const (),
        )
    }

    pub fn as_log(&self) -> &dyn Log {
        self.inner.as_ref()
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn level(&self) -> LogLevel {
        self.inner.level()
    }

    pub fn set_level(&self, level: LogLevel) -> Result<()> {
        self.inner.set_level(level)
    }

    pub fn header(&self) -> bool {
        self.inner.header()
    }

    pub fn console(&self) -> bool {
        self.inner.console()
    }

    pub fn set_console(&self, console: bool) -> Result<()> {
        self.inner.set_console(console)
    }

    pub fn is_null(&self) -> bool {
        self.inner.is_null()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    pub fn metrics(&self) -> Option<&LoggerMetrics> {
        self.inner.metrics()
    }

    pub fn add_handler(&self, name: &str, sink: SharedSink) -> Result<()> {
        self.inner.add_handler(name, sink)
    }

    /// Add an owned sink, registered under its own name
    pub fn add_sink<S: Sink + 'static>(&self, sink: S) -> Result<()> {
        let name = sink.name();
        self.inner.add_handler(&name, shared(sink))
    }

    /// Open `path` as a file sink and add it under the path's name
    pub fn add_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let sink = FileSink::open(path, self.level())?;
        self.add_sink(sink)
    }

    pub fn remove_handler(&self, name: &str) -> Option<SharedSink> {
        self.inner.remove_handler(name)
    }

    pub fn handler_names(&self) -> Vec<String> {
        self.inner.handler_names()
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.flush()
    }

    pub fn drain(&self) -> Result<()> {
        self.inner.drain()
    }

    pub fn close(&self) -> Result<()> {
        self.inner.close()
    }

    /// Write `message` at `level` regardless of the threshold
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<Message>) -> Result<()> {
        self.log_at(level, CallSite::caller(), message.into())
    }

    pub fn log_at(&self, level: LogLevel, site: CallSite, message: Message) -> Result<()> {
        if self.inner.is_null() || message.is_empty() {
            return Ok(());
        }
        self.inner.emit(LogRecord::new(level, message, site))
    }

    /// Write `message` at `level` if the threshold allows it
    pub fn log_if(&self, level: LogLevel, site: CallSite, message: Message) -> Result<()> {
        if message.is_empty() || !self.inner.enabled(level) {
            return Ok(());
        }
        self.inner.emit(LogRecord::new(level, message, site))
    }

    /// Write `message` followed by `end`, without a header
    pub fn disp(&self, message: impl Into<Message>, end: LineEnd) -> Result<()> {
        if self.inner.is_null() {
            return Ok(());
        }
        let mut text = message.into().joined();
        text.push_str(end.as_str());
        self.inner.display(text)
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<Message>) -> Result<()> {
        self.log_if(LogLevel::Debug, CallSite::caller(), message.into())
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<Message>) -> Result<()> {
        self.log_if(LogLevel::Info, CallSite::caller(), message.into())
    }

    #[track_caller]
    pub fn brief(&self, message: impl Into<Message>) -> Result<()> {
        self.log_if(LogLevel::Brief, CallSite::caller(), message.into())
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<Message>) -> Result<()> {
        self.log_if(LogLevel::Warn, CallSite::caller(), message.into())
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<Message>) -> Result<()> {
        self.log_if(LogLevel::Error, CallSite::caller(), message.into())
    }

    #[track_caller]
    pub fn fatal(&self, message: impl Into<Message>) -> Result<()> {
        self.log_if(LogLevel::Fatal, CallSite::caller(), message.into())
    }

    /// Log `err` with its cause chain and a backtrace, then hand it back.
    ///
    /// Gated like `error`. Lets a call site log and propagate in one step:
    ///
    /// ```
    /// use multisink_logger::Logger;
    ///
    /// fn parse(logger: &Logger, s: &str) -> Result<u32, std::num::ParseIntError> {
    ///     s.parse::<u32>().map_err(|e| logger.exception(e))
    /// }
    ///
    /// assert!(parse(&Logger::null(), "x").is_err());
    /// ```
    #[track_caller]
    pub fn exception<E: Error>(&self, err: E) -> E {
        let site = CallSite::caller();
        if self.inner.is_null() || !self.inner.enabled(LogLevel::Error) {
            return err;
        }

        let mut message = Message::from(&err);
        let mut source = err.source();
        while let Some(cause) = source {
            message.push(format!("Caused by: {}", cause));
            source = cause.source();
        }
        message.push(format!("Stack backtrace:\n{}", Backtrace::force_capture()));

        if let Err(e) = self.inner.emit(LogRecord::new(LogLevel::Error, message, site)) {
            eprintln!("[LOGGER ERROR] Failed to log exception: {}", e);
        }
        err
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &self.level())
            .field("header", &self.header())
            .field("handlers", &self.handler_names())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Construction is all-or-nothing: every file is opened before any banner is
/// written. On a failure no logger is returned, files the build created are
/// removed again, and files that already existed are left as they were.
///
/// # Example
/// ```
/// use multisink_logger::prelude::*;
///
/// let capture = MemorySink::new();
/// let output = capture.handle();
/// let logger = Logger::builder()
///     .name("train")
///     .level(LogLevel::Brief)
///     .console(false)
///     .sink("capture", capture)
///     .async_mode()
///     .build()
///     .unwrap();
///
/// logger.brief("epoch 1").unwrap();
/// logger.close().unwrap();
/// assert!(output.contents().contains("epoch 1"));
/// ```
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    header: bool,
    console: bool,
    files: Vec<PathBuf>,
    sinks: Vec<(String, SharedSink)>,
    mode: LoggerMode,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::from_config("main", &LoggerConfig::default())
    }

    pub fn from_config(name: impl Into<String>, config: &LoggerConfig) -> Self {
        Self {
            name: name.into(),
            level: config.level,
            header: config.header,
            console: config.console,
            files: config.files.clone(),
            sinks: Vec::new(),
            mode: config.mode,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Prepend a timestamp/level/location header to each record
    #[must_use = "builder methods return a new value"]
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Attach the shared console sink
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, name: impl Into<String>, sink: S) -> Self {
        self.sinks.push((name.into(), shared(sink)));
        self
    }

    /// Attach a sink that other loggers may also hold
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, name: impl Into<String>, sink: SharedSink) -> Self {
        self.sinks.push((name.into(), sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn mode(mut self, mode: LoggerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Deliver writes on a dedicated worker thread
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(self) -> Self {
        self.mode(LoggerMode::Async)
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let mut files = Vec::with_capacity(self.files.len());
        for path in &self.files {
            match FileSink::create(path) {
                Ok(sink) => files.push(sink),
                Err(e) => {
                    files.into_iter().for_each(FileSink::discard);
                    return Err(e);
                }
            }
        }

        let mut handlers: Vec<(String, SharedSink)> = Vec::new();
        if self.console {
            handlers.push((CONSOLE_SINK_NAME.to_string(), ConsoleSink::shared()));
        }
        for mut sink in files {
            sink.start(self.level)?;
            handlers.push((sink.name(), shared(sink)));
        }
        handlers.extend(self.sinks);

        let logger = match self.mode {
            LoggerMode::Sync => Logger::new(SyncLogger::new(
                self.name,
                self.level,
                self.header,
                handlers,
            )),
            LoggerMode::Async => Logger::new(AsyncLogger::spawn(
                self.name,
                self.level,
                self.header,
                handlers,
            )?),
        };
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared implementation of the console toggle
pub(crate) fn toggle_console(log: &dyn Log, console: bool) -> Result<()> {
    if log.console() == console {
        return Ok(());
    }
    if console {
        log.add_handler(CONSOLE_SINK_NAME, ConsoleSink::shared())
    } else {
        log.remove_handler(CONSOLE_SINK_NAME);
        Ok(())
    }
}
