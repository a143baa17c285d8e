//! File sink implementation

use crate::core::ansi::sanitize_for_file;
use crate::core::timestamp::clock_now;
use crate::core::{LogLevel, LoggerError, Result, Sink};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only plain-text log file.
///
/// Writes a creation banner when started and a closing banner when closed.
/// Colour codes and `\r` never reach the file.
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    /// The file did not exist before `create`
    created: bool,
}

impl FileSink {
    /// Open `path` for append and write the creation banner
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use multisink_logger::sinks::FileSink;
    /// use multisink_logger::LogLevel;
    ///
    /// let sink = FileSink::open("/var/log/app.log", LogLevel::Info).unwrap();
    /// ```
    pub fn open(path: impl Into<PathBuf>, level: LogLevel) -> Result<Self> {
        let mut sink = Self::create(path)?;
        sink.start(level)?;
        Ok(sink)
    }

    /// Open `path` for append without writing anything yet.
    ///
    /// Used when several files must all open before any of them is touched.
    pub(crate) fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let created = !path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink_open(&path, e))?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            created,
        })
    }

    /// Write the creation banner and make it durable
    pub(crate) fn start(&mut self, level: LogLevel) -> Result<()> {
        let banner = format!(
            "Log file: {}\nLog file created at {}\nLog level: {}\n",
            self.path.display(),
            clock_now(),
            level
        );
        self.write_raw(&banner)?;
        self.flush()
    }

    /// Drop the handle without a closing banner, removing the file if
    /// `create` made it
    pub(crate) fn discard(mut self) {
        self.writer = None;
        if self.created {
            if let Err(e) = fs::remove_file(&self.path) {
                eprintln!("[LOGGER ERROR] Failed to remove '{}': {}", self.path.display(), e);
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_raw(&mut self, text: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink_closed(self.path.display().to_string()))?;
        writer
            .write_all(text.as_bytes())
            .map_err(|e| LoggerError::io("writing log file", e))
    }
}

impl Sink for FileSink {
    fn write(&mut self, text: &str) -> Result<()> {
        self.write_raw(&sanitize_for_file(text))
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer
                .flush()
                .map_err(|e| LoggerError::io("flushing log file", e))?;
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| LoggerError::io("syncing log file", e))?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.writer.is_none() {
            return Ok(());
        }
        let banner = format!("\nLog file closed at {}\n", clock_now());
        let result = self.write_raw(&banner).and_then(|()| self.flush());
        self.writer = None;
        result
    }

    fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    fn strips_ansi(&self) -> bool {
        true
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] Failed to close '{}': {}", self.path.display(), e);
        }
    }
}
