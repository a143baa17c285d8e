//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const RESET: &str = "\x1b[0m";

/// Verbosity scale, from `Null` (off) to `Debug` (everything).
///
/// A logger whose threshold is `T` emits a message requested at level `L`
/// iff `T >= L`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum LogLevel {
    #[serde(rename = "NULL")]
    Null = 0,
    #[serde(rename = "FATAL")]
    Fatal = 1,
    #[serde(rename = "ERROR")]
    Error = 2,
    #[serde(rename = "WARN")]
    Warn = 3,
    #[serde(rename = "BRIEF")]
    Brief = 4,
    #[default]
    #[serde(rename = "INFO")]
    Info = 5,
    #[serde(rename = "DEBUG")]
    Debug = 6,
}

impl LogLevel {
    /// Every level, least to most verbose
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Null,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Brief,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Null => "NULL",
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Brief => "BRIEF",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Console colour for this level, `None` for `Null`
    pub fn color(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            LogLevel::Null => None,
            LogLevel::Fatal | LogLevel::Error => Some(BrightRed),
            LogLevel::Warn => Some(BrightYellow),
            LogLevel::Brief => Some(BrightCyan),
            LogLevel::Info => Some(BrightGreen),
            LogLevel::Debug => Some(BrightBlue),
        }
    }

    /// Escape sequence that switches the terminal to this level's colour.
    ///
    /// Rendered straight from the colour code so the output does not depend on
    /// whether stdout is a terminal.
    pub fn color_prefix(&self) -> String {
        match self.color() {
            Some(color) => format!("\x1b[{}m", color.to_fg_str()),
            None => String::new(),
        }
    }

    pub fn color_suffix(&self) -> &'static str {
        match self {
            LogLevel::Null => "",
            _ => RESET,
        }
    }

    /// Level name wrapped in its colour sequences
    pub fn colorized(&self) -> String {
        format!("{}{}{}", self.color_prefix(), self.as_str(), self.color_suffix())
    }

    /// Whether a logger at threshold `self` emits messages at `level`
    #[inline]
    pub fn allows(&self, level: LogLevel) -> bool {
        *self >= level
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NULL" => Ok(LogLevel::Null),
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" => Ok(LogLevel::Warn),
            "BRIEF" => Ok(LogLevel::Brief),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
