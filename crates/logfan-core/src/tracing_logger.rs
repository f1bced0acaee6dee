//! Bridge into `tracing`
//!
//! Forwards calls to the `tracing` macros so the façade can feed an
//! application's existing subscriber.

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::LoggerResult;
use crate::traits::Logger;

/// A logger that emits `tracing` events
///
/// The argument list is attached as a JSON `args` field. `log` has no
/// `tracing` counterpart and is emitted at info with `kind = "log"`.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    name: Option<String>,
}

impl TracingLogger {
    /// Create a logger with no name field
    pub fn new() -> Self {
        Self { name: None }
    }

    /// Create a logger that tags every event with `name`
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

fn encode(args: &[Value]) -> LoggerResult<String> {
    Ok(serde_json::to_string(args)?)
}

impl Logger for TracingLogger {
    fn warn(&self, args: &[Value]) -> LoggerResult<()> {
        let args = encode(args)?;
        warn!(logger = %self.name(), args = %args);
        Ok(())
    }

    fn error(&self, args: &[Value]) -> LoggerResult<()> {
        let args = encode(args)?;
        error!(logger = %self.name(), args = %args);
        Ok(())
    }

    fn info(&self, args: &[Value]) -> LoggerResult<()> {
        let args = encode(args)?;
        info!(logger = %self.name(), args = %args);
        Ok(())
    }

    fn log(&self, args: &[Value]) -> LoggerResult<()> {
        let args = encode(args)?;
        info!(logger = %self.name(), kind = "log", args = %args);
        Ok(())
    }

    fn debug(&self, args: &[Value]) -> LoggerResult<()> {
        let args = encode(args)?;
        debug!(logger = %self.name(), args = %args);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::capture::EventCapture;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_keeps_nulls() {
        let encoded = encode(&[Value::Null, json!("x"), json!({"a": 1})]).unwrap();
        assert_eq!(encoded, "[null,\"x\",{\"a\":1}]");
    }

    #[test]
    fn test_operations_map_to_levels_and_fields() {
        let capture = EventCapture::default();
        let logger = TracingLogger::with_name("worker");

        capture.run(|| {
            logger.warn(&[json!("w")]).unwrap();
            logger.error(&[json!("e"), json!({"code": 5})]).unwrap();
            logger.info(&[json!("i")]).unwrap();
            logger.log(&[json!("l"), Value::Null]).unwrap();
            logger.debug(&[]).unwrap();
        });

        let events = capture.events();
        let levels: Vec<tracing::Level> = events.iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            vec![
                tracing::Level::WARN,
                tracing::Level::ERROR,
                tracing::Level::INFO,
                tracing::Level::INFO,
                tracing::Level::DEBUG,
            ]
        );

        let args: Vec<&str> = events.iter().map(|e| e.fields["args"].as_str()).collect();
        assert_eq!(
            args,
            vec!["[\"w\"]", "[\"e\",{\"code\":5}]", "[\"i\"]", "[\"l\",null]", "[]"]
        );

        assert!(events.iter().all(|e| e.fields["logger"] == "worker"));
        assert_eq!(events[3].fields.get("kind").map(String::as_str), Some("log"));
        let with_kind = events.iter().filter(|e| e.fields.contains_key("kind")).count();
        assert_eq!(with_kind, 1);
    }

    #[test]
    fn test_tracing_logger_logs() {
        // No subscriber installed: only checks nothing fails
        let logger = TracingLogger::with_name("worker");
        assert_eq!(logger.name(), "worker");
        logger.warn(&[json!("w")]).unwrap();
        logger.error(&[json!("e")]).unwrap();
        logger.info(&[json!("i")]).unwrap();
        logger.log(&[json!("l")]).unwrap();
        logger.debug(&[json!("d")]).unwrap();
        assert_eq!(TracingLogger::new().name(), "");
    }
}
