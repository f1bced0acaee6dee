//! Fan-out logger

use std::sync::Arc;

use serde_json::Value;

use crate::error::LoggerResult;
use crate::level::Level;
use crate::traits::{Logger, SharedLogger};

/// A logger that forwards every call to a list of child loggers
///
/// Children are called in the order they were added, one after the other,
/// with the same arguments. If a child fails, the error is returned at once
/// and the children after it do not see that call.
///
/// Composites are loggers too, so they nest.
///
/// # Example
///
/// ```
/// use logfan_core::{CompositeLogger, ConsoleLogger, Logger, NullLogger};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let mut logger = CompositeLogger::new();
/// logger.add_logger(Arc::new(ConsoleLogger::new("[APP]")));
/// logger.add_logger(Arc::new(NullLogger::new()));
///
/// logger.info(&[json!("ready")]).unwrap();
/// ```
#[derive(Default, Clone)]
pub struct CompositeLogger {
    loggers: Vec<SharedLogger>,
}

impl CompositeLogger {
    /// Create an empty composite
    pub fn new() -> Self {
        Self {
            loggers: Vec::new(),
        }
    }

    /// Append a child; duplicates are allowed
    pub fn add_logger(&mut self, logger: SharedLogger) {
        self.loggers.push(logger);
    }

    /// Builder form of `add_logger`
    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.loggers.push(Arc::new(logger));
        self
    }

    /// The children, in dispatch order
    pub fn loggers(&self) -> &[SharedLogger] {
        &self.loggers
    }

    /// Number of children, duplicates included
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    /// Whether no child has been added yet
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    fn fan_out(&self, level: Level, args: &[Value]) -> LoggerResult<()> {
        for logger in &self.loggers {
            logger.log_at(level, args)?;
        }
        Ok(())
    }
}

impl Logger for CompositeLogger {
    fn warn(&self, args: &[Value]) -> LoggerResult<()> {
        self.fan_out(Level::Warn, args)
    }

    fn error(&self, args: &[Value]) -> LoggerResult<()> {
        self.fan_out(Level::Error, args)
    }

    fn info(&self, args: &[Value]) -> LoggerResult<()> {
        self.fan_out(Level::Info, args)
    }

    fn log(&self, args: &[Value]) -> LoggerResult<()> {
        self.fan_out(Level::Log, args)
    }

    fn debug(&self, args: &[Value]) -> LoggerResult<()> {
        self.fan_out(Level::Debug, args)
    }
}

// Implement Debug manually since Arc<dyn Logger> doesn't implement Debug
impl std::fmt::Debug for CompositeLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeLogger")
            .field("loggers", &format!("[{} loggers]", self.loggers.len()))
            .finish()
    }
}
