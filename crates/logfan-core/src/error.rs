//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can surface from a logging call
#[derive(Error, Debug)]
pub enum LoggerError {
    /// The log file could not be opened
    #[error("Failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Console or file write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Arguments could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid logger configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LoggerError {
    /// Create an open error for `path`
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;
