//! YAML logging configuration

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::composite::CompositeLogger;
use crate::console::ConsoleLogger;
use crate::error::{LoggerError, LoggerResult};
use crate::file_logger::FileLogger;
use crate::noop::NullLogger;

/// Console sink settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Prefix put in front of every line, used verbatim
    pub prefix: String,
}

/// File sink settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    /// File to append to; created if missing
    pub path: PathBuf,
}

/// Configuration file structure
///
/// ```yaml
/// console:
///   prefix: "[APP]"
/// file:
///   path: /var/log/app.log
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub console: Option<ConsoleConfig>,

    #[serde(default)]
    pub file: Option<FileConfig>,

    /// Append a `NullLogger`
    #[serde(default)]
    pub discard: bool,
}

impl LoggingConfig {
    /// Parse a YAML document; an empty document is an empty configuration
    pub fn from_yaml_str(content: &str) -> LoggerResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| LoggerError::config(format!("Failed to parse YAML: {}", e)))
    }

    /// Load from a YAML file; a missing file is an empty configuration
    pub fn load(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Serialize back to YAML
    pub fn to_yaml_string(&self) -> LoggerResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LoggerError::config(format!("Failed to serialize YAML: {}", e)))
    }

    /// Build the configured sinks into a composite
    ///
    /// Order is console, then file, then the null sink. Fails if the file
    /// cannot be opened.
    pub fn build(&self) -> LoggerResult<CompositeLogger> {
        let mut logger = CompositeLogger::new();

        if let Some(console) = &self.console {
            logger.add_logger(Arc::new(ConsoleLogger::new(console.prefix.clone())));
        }

        if let Some(file) = &self.file {
            logger.add_logger(Arc::new(FileLogger::open_at(&file.path)?));
        }

        if self.discard {
            logger.add_logger(Arc::new(NullLogger::new()));
        }

        Ok(logger)
    }
}
