//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!`, and unlike the
//! [`Logger`](crate::Logger) methods they also record the calling function
//! in the header's location tag. Each returns the logger's `Result`.
//!
//! # Examples
//!
//! ```
//! use multisink_logger::prelude::*;
//! use multisink_logger::info;
//!
//! let logger = Logger::builder().console(false).build().unwrap();
//!
//! // Basic logging
//! info!(logger, "Training started").unwrap();
//!
//! // With format arguments
//! let epoch = 3;
//! info!(logger, "Epoch {} finished", epoch).unwrap();
//! ```

/// Log a message at a level, bypassing the logger's threshold.
///
/// # Examples
///
/// ```
/// # use multisink_logger::prelude::*;
/// # let logger = Logger::builder().console(false).build().unwrap();
/// use multisink_logger::log;
/// log!(logger, LogLevel::Debug, "Shown even at INFO").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at(
            $level,
            $crate::call_site!(),
            $crate::core::Message::from(format!($($arg)+)),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_if {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_if(
            $level,
            $crate::call_site!(),
            $crate::core::Message::from(format!($($arg)+)),
        )
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use multisink_logger::prelude::*;
/// # let logger = Logger::builder().level(LogLevel::Debug).console(false).build().unwrap();
/// use multisink_logger::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_if!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_if!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a brief-level message: progress summaries that sit between
/// warnings and routine info.
#[macro_export]
macro_rules! brief {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_if!($logger, $crate::LogLevel::Brief, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use multisink_logger::prelude::*;
/// # let logger = Logger::builder().console(false).build().unwrap();
/// use multisink_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_if!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_if!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_if!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Write formatted text without a header, ending with a newline.
///
/// # Examples
///
/// ```
/// # use multisink_logger::prelude::*;
/// # let logger = Logger::builder().console(false).build().unwrap();
/// use multisink_logger::disp;
/// disp!(logger, "loss = {:.3}", 0.25).unwrap();
/// ```
#[macro_export]
macro_rules! disp {
    ($logger:expr, $($arg:tt)+) => {
        $logger.disp(format!($($arg)+), $crate::LineEnd::Newline)
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn capture(level: LogLevel) -> (Logger, MemoryBuffer) {
        let sink = MemorySink::plain();
        let buffer = sink.handle();
        let logger = Logger::builder()
            .level(level)
            .console(false)
            .sink("memory", sink)
            .build()
            .unwrap();
        (logger, buffer)
    }

    #[test]
    fn test_macros_format_and_gate() {
        let (logger, buffer) = capture(LogLevel::Warn);
        crate::warn!(logger, "value {}", 42).unwrap();
        crate::info!(logger, "hidden {}", 1).unwrap();
        crate::log!(logger, LogLevel::Debug, "forced").unwrap();

        let contents = buffer.contents();
        assert!(contents.contains("value 42"));
        assert!(!contents.contains("hidden"));
        assert!(contents.contains("forced"));
    }

    #[test]
    fn test_macros_record_function() {
        let (logger, buffer) = capture(LogLevel::Debug);
        crate::debug!(logger, "inside").unwrap();
        assert!(buffer
            .contents()
            .contains("|multisink_logger::macros::tests::test_macros_record_function)>>>"));
    }

    #[test]
    fn test_every_level_macro() {
        let (logger, buffer) = capture(LogLevel::Debug);
        crate::fatal!(logger, "f").unwrap();
        crate::error!(logger, "e").unwrap();
        crate::warn!(logger, "w").unwrap();
        crate::brief!(logger, "b").unwrap();
        crate::info!(logger, "i").unwrap();
        crate::debug!(logger, "d").unwrap();
        let contents = buffer.contents();
        for tag in ["FATAL", "ERROR", "WARN", "BRIEF", "INFO", "DEBUG"] {
            assert!(contents.contains(&format!("|{}]", tag)), "missing {}", tag);
        }
    }

    #[test]
    fn test_disp_macro() {
        let (logger, buffer) = capture(LogLevel::Info);
        crate::disp!(logger, "{}/{}", 1, 2).unwrap();
        assert_eq!(buffer.contents(), "1/2\n");
    }
}
