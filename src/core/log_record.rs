//! Log record and message body

use super::call_site::CallSite;
use super::log_level::LogLevel;
use super::timestamp;
use chrono::{DateTime, Local};
use std::fmt;

/// Message body: one stringified value per line.
///
/// Any `Display` value converts into a single-line message; use
/// [`message!`](crate::message) to combine several values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    lines: Vec<String>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[&dyn fmt::Display]) -> Self {
        Self {
            lines: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn push(&mut self, value: impl fmt::Display) {
        self.lines.push(value.to_string());
    }

    #[must_use]
    pub fn with(mut self, value: impl fmt::Display) -> Self {
        self.push(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Values joined with `\n`
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

impl<T: fmt::Display> From<T> for Message {
    fn from(value: T) -> Self {
        Self {
            lines: vec![value.to_string()],
        }
    }
}

/// Build a [`Message`] from several displayable values, one per line.
///
/// ```
/// use multisink_logger::message;
///
/// let msg = message!["epoch", 3, 0.25];
/// assert_eq!(msg.joined(), "epoch\n3\n0.25");
/// ```
#[macro_export]
macro_rules! message {
    ($($value:expr),* $(,)?) => {{
        let mut msg = $crate::core::Message::new();
        $( msg.push(&$value); )*
        msg
    }};
}

/// Line terminator for [`disp`](crate::Logger::disp)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnd {
    #[default]
    Newline,
    /// Return to line start so the next write overwrites this one
    CarriageReturn,
    None,
}

impl LineEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnd::Newline => "\n",
            LineEnd::CarriageReturn => "\r",
            LineEnd::None => "",
        }
    }
}

/// A leveled message captured at its call site
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: Message,
    pub timestamp: DateTime<Local>,
    pub site: CallSite,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: Message, site: CallSite) -> Self {
        Self {
            level,
            message,
            timestamp: timestamp::now(),
            site,
        }
    }

    /// `\n[HH:MM:SS|LEVEL](path:line|function)>>>\n` with a coloured level tag
    pub fn header(&self) -> String {
        format!(
            "\n[{}|{}]{}>>>\n",
            timestamp::clock(&self.timestamp),
            self.level.colorized(),
            self.site
        )
    }

    /// Joined message followed by a newline
    pub fn body(&self) -> String {
        let mut body = self.message.joined();
        body.push('\n');
        body
    }
}
