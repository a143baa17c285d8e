//! Name-keyed table of loggers
//!
//! The first caller to ask for real logging under a name decides that
//! logger's configuration. Later callers asking for a different level get the
//! existing logger back, together with a warning written through it.

use super::{
    config::LoggerConfig,
    error::Result,
    log_level::LogLevel,
    logger::{Logger, LoggerBuilder},
    null_logger::{null_logger, NULL_LOGGER_NAME},
};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// # Example
///
/// ```
/// use multisink_logger::prelude::*;
///
/// let registry = Registry::new();
/// let config = LoggerConfig::new(LogLevel::Warn).with_console(false);
///
/// let first = registry.get_logger(Some("train"), &config).unwrap();
/// let second = registry.get_logger(Some("train"), &config).unwrap();
/// assert!(Logger::ptr_eq(&first, &second));
///
/// assert!(registry.get_logger(None, &config).unwrap().is_null());
/// ```
#[derive(Default)]
pub struct Registry {
    loggers: Mutex<HashMap<String, Logger>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry for applications that do not pass one around
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Resolve `name` to a logger, building it from `config` on first use.
    ///
    /// `None`, [`NULL_LOGGER_NAME`] or a `Null` level give the shared null
    /// logger. A registered null logger is replaced by a real one; any other
    /// registered logger is returned as is, even if `config` differs.
    #[track_caller]
    pub fn get_logger(&self, name: Option<&str>, config: &LoggerConfig) -> Result<Logger> {
        let name = match name {
            Some(name) if name != NULL_LOGGER_NAME && config.level != LogLevel::Null => name,
            _ => return Ok(null_logger()),
        };

        let mut loggers = self.loggers.lock();
        if let Some(existing) = loggers.get(name) {
            if existing.level() == config.level {
                return Ok(existing.clone());
            }
            if !existing.is_null() {
                let existing = existing.clone();
                drop(loggers);
                let warned = existing.warn(format!(
                    "Logger '{}' already exists with level {}. Requested level {} is ignored.",
                    name,
                    existing.level(),
                    config.level
                ));
                if let Err(e) = warned {
                    eprintln!("[LOGGER ERROR] Failed to warn about logger '{}': {}", name, e);
                }
                return Ok(existing);
            }
        }

        let logger = LoggerBuilder::from_config(name, config).build()?;
        loggers.insert(name.to_string(), logger.clone());
        Ok(logger)
    }

    /// Register `logger` under `name`, replacing whatever was there
    pub fn insert(&self, name: impl Into<String>, logger: Logger) -> Option<Logger> {
        self.loggers.lock().insert(name.into(), logger)
    }

    pub fn get(&self, name: &str) -> Option<Logger> {
        self.loggers.lock().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Close every registered logger, returning the first failure.
    ///
    /// Entries stay registered; their loggers drop later writes.
    pub fn close_all(&self) -> Result<()> {
        let loggers: Vec<Logger> = self.loggers.lock().values().cloned().collect();
        let mut first_error = None;
        for logger in loggers {
            if let Err(e) = logger.close() {
                first_error = first_error.or(Some(e));
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
