//! Append-only file logger
//!
//! Each call appends one record: a newline, the level tag, a space, and the
//! JSON encoding of the full argument list (nulls included). Writes go
//! straight to the file with no buffering in between.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::Value;

use crate::error::{LoggerError, LoggerResult};
use crate::level::Level;
use crate::traits::Logger;

/// Handle state of a `FileLogger`
#[derive(Debug, Default)]
enum FileState {
    #[default]
    Closed,
    Open { file: File, path: PathBuf },
}

/// A logger that appends level-tagged JSON records to a file
///
/// Starts with no file open. While closed, every call succeeds and writes
/// nothing.
///
/// # Example
///
/// ```no_run
/// use logfan_core::{FileLogger, Logger};
/// use serde_json::json;
///
/// let logger = FileLogger::new();
/// logger.open("/tmp/t.log")?;
/// logger.error(&[json!("boom"), json!({"code": 5})])?;
/// logger.close();
/// # Ok::<(), logfan_core::LoggerError>(())
/// ```
#[derive(Debug, Default)]
pub struct FileLogger {
    state: Mutex<FileState>,
}

impl FileLogger {
    /// Create a logger with no file open
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FileState::Closed),
        }
    }

    /// Create a logger and open `path` right away
    pub fn open_at(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let logger = Self::new();
        logger.open(path)?;
        Ok(logger)
    }

    /// Open `path` for appending, creating it if needed
    ///
    /// Any file already open is closed first, so on failure the logger is
    /// left closed.
    pub fn open(&self, path: impl AsRef<Path>) -> LoggerResult<()> {
        let path = path.as_ref();
        let mut state = self.state.lock();
        Self::release(&mut state);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::open(path, e))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), "log file opened");

        *state = FileState::Open {
            file,
            path: path.to_path_buf(),
        };
        Ok(())
    }

    /// Close the current file, if any
    pub fn close(&self) {
        let mut state = self.state.lock();
        Self::release(&mut state);
    }

    /// Whether a file is currently open
    pub fn is_open(&self) -> bool {
        matches!(*self.state.lock(), FileState::Open { .. })
    }

    /// Path of the currently open file
    pub fn path(&self) -> Option<PathBuf> {
        match &*self.state.lock() {
            FileState::Open { path, .. } => Some(path.clone()),
            FileState::Closed => None,
        }
    }

    /// Append one record at `level`; a no-op while closed
    pub fn write(&self, level: Level, args: &[Value]) -> LoggerResult<()> {
        let mut state = self.state.lock();
        if let FileState::Open { file, .. } = &mut *state {
            let record = format!("\n{} {}", level, serde_json::to_string(args)?);
            file.write_all(record.as_bytes())?;
        }
        Ok(())
    }

    // Dropping the handle closes the descriptor
    fn release(state: &mut FileState) {
        if let FileState::Open { path: _path, .. } = std::mem::take(state) {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %_path.display(), "log file closed");
        }
    }
}

impl Logger for FileLogger {
    fn warn(&self, args: &[Value]) -> LoggerResult<()> {
        self.write(Level::Warn, args)
    }

    fn error(&self, args: &[Value]) -> LoggerResult<()> {
        self.write(Level::Error, args)
    }

    fn info(&self, args: &[Value]) -> LoggerResult<()> {
        self.write(Level::Info, args)
    }

    fn log(&self, args: &[Value]) -> LoggerResult<()> {
        self.write(Level::Log, args)
    }

    fn debug(&self, args: &[Value]) -> LoggerResult<()> {
        self.write(Level::Debug, args)
    }
}
