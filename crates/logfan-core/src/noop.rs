//! Null logger implementation

use serde_json::Value;

use crate::error::LoggerResult;
use crate::traits::Logger;

/// A logger that discards everything
///
/// Useful for testing or when logging is not wanted. Any two instances are
/// interchangeable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullLogger;

impl NullLogger {
    /// Create a new null logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NullLogger {
    fn warn(&self, _args: &[Value]) -> LoggerResult<()> {
        Ok(())
    }

    fn error(&self, _args: &[Value]) -> LoggerResult<()> {
        Ok(())
    }

    fn info(&self, _args: &[Value]) -> LoggerResult<()> {
        Ok(())
    }

    fn log(&self, _args: &[Value]) -> LoggerResult<()> {
        Ok(())
    }

    fn debug(&self, _args: &[Value]) -> LoggerResult<()> {
        Ok(())
    }
}
