//! Log levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

/// The five operations of the logging contract
///
/// No ordering is implied: the façade never filters by level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Warn,
    Error,
    Info,
    Log,
    Debug,
}

impl Level {
    /// Every level, in contract order
    pub const ALL: [Level; 5] = [
        Level::Warn,
        Level::Error,
        Level::Info,
        Level::Log,
        Level::Debug,
    ];

    /// Tag written in front of each file record
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Info => "INFO",
            Level::Log => "LOG",
            Level::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "info" => Ok(Level::Info),
            "log" => Ok(Level::Log),
            "debug" => Ok(Level::Debug),
            other => Err(LoggerError::config(format!("Unknown log level: {}", other))),
        }
    }
}
