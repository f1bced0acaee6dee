//! Console logger implementation

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use serde_json::Value;

use crate::error::LoggerResult;
use crate::level::Level;
use crate::traits::Logger;

/// Destination for rendered console lines
pub trait Console: Send + Sync {
    /// Write one line to the stream that belongs to `level`
    fn write_line(&self, level: Level, line: &str) -> io::Result<()>;
}

/// The process console
///
/// Warnings and errors go to stderr; info, log and debug go to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&self, level: Level, line: &str) -> io::Result<()> {
        match level {
            Level::Warn | Level::Error => writeln!(io::stderr().lock(), "{}", line),
            Level::Info | Level::Log | Level::Debug => writeln!(io::stdout().lock(), "{}", line),
        }
    }
}

/// Output of the console formatting rule for one call
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted {
    /// A lone text argument: `"<prefix> <text>"`
    Text(String),
    /// Text followed by exactly one more argument, passed through unchanged
    TextWithValue(String, Value),
    /// Text followed by the remaining arguments as one list
    TextWithList(String, Vec<Value>),
    /// Leading argument was not text: the bare prefix and every argument
    Bare(String, Vec<Value>),
}

impl Formatted {
    /// The leading text item
    pub fn head(&self) -> &str {
        match self {
            Formatted::Text(head)
            | Formatted::TextWithValue(head, _)
            | Formatted::TextWithList(head, _)
            | Formatted::Bare(head, _) => head,
        }
    }

    /// Render into a single console line
    pub fn render(&self) -> String {
        match self {
            Formatted::Text(head) => head.clone(),
            Formatted::TextWithValue(head, value) => format!("{} {}", head, render_value(value)),
            Formatted::TextWithList(head, values) | Formatted::Bare(head, values) => {
                format!("{} {}", head, Value::Array(values.clone()))
            }
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// A logger that writes prefixed lines to the console
#[derive(Clone)]
pub struct ConsoleLogger {
    prefix: String,
    console: Arc<dyn Console>,
}

impl ConsoleLogger {
    /// Create a console logger writing to the process console
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_console(prefix, Arc::new(StdConsole))
    }

    /// Create a console logger with a custom output target
    pub fn with_console(prefix: impl Into<String>, console: Arc<dyn Console>) -> Self {
        Self {
            prefix: prefix.into(),
            console,
        }
    }

    /// The prefix, as given at construction
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Apply the formatting rule to `args`
    ///
    /// Null arguments are dropped first. If what remains starts with text, the
    /// text is joined to the prefix; otherwise the prefix stands alone and the
    /// whole filtered list follows it.
    pub fn format(&self, args: &[Value]) -> Formatted {
        let args: Vec<&Value> = args.iter().filter(|a| !a.is_null()).collect();

        match args.split_first() {
            Some((Value::String(text), rest)) => {
                let head = format!("{} {}", self.prefix, text);
                match rest {
                    [] => Formatted::Text(head),
                    [only] => Formatted::TextWithValue(head, (*only).clone()),
                    _ => Formatted::TextWithList(head, rest.iter().map(|v| (*v).clone()).collect()),
                }
            }
            _ => Formatted::Bare(self.prefix.clone(), args.iter().map(|v| (*v).clone()).collect()),
        }
    }

    fn emit(&self, level: Level, args: &[Value]) -> LoggerResult<()> {
        let line = self.format(args).render();
        self.console.write_line(level, &line)?;
        Ok(())
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl Logger for ConsoleLogger {
    fn warn(&self, args: &[Value]) -> LoggerResult<()> {
        self.emit(Level::Warn, args)
    }

    fn error(&self, args: &[Value]) -> LoggerResult<()> {
        self.emit(Level::Error, args)
    }

    fn info(&self, args: &[Value]) -> LoggerResult<()> {
        self.emit(Level::Info, args)
    }

    fn log(&self, args: &[Value]) -> LoggerResult<()> {
        self.emit(Level::Log, args)
    }

    fn debug(&self, args: &[Value]) -> LoggerResult<()> {
        self.emit(Level::Debug, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use serde_json::json;

    #[derive(Default)]
    struct CapturedConsole {
        lines: Mutex<Vec<(Level, String)>>,
    }

    impl Console for CapturedConsole {
        fn write_line(&self, level: Level, line: &str) -> io::Result<()> {
            self.lines.lock().push((level, line.to_string()));
            Ok(())
        }
    }

    struct BrokenConsole;

    impl Console for BrokenConsole {
        fn write_line(&self, _level: Level, _line: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }
    }

    fn app() -> ConsoleLogger {
        ConsoleLogger::new("[APP]")
    }

    #[test]
    fn test_console_logger_creation() {
        let logger = ConsoleLogger::new("[MyApp]");
        assert_eq!(logger.prefix(), "[MyApp]");

        let verbatim = ConsoleLogger::new("  spaced  ");
        assert_eq!(verbatim.prefix(), "  spaced  ");
    }

    #[test]
    fn test_format_single_text() {
        assert_eq!(
            app().format(&[json!("started")]),
            Formatted::Text("[APP] started".to_string())
        );
    }

    #[test]
    fn test_format_text_and_value() {
        let formatted = app().format(&[json!("disk low"), json!(42)]);
        assert_eq!(
            formatted,
            Formatted::TextWithValue("[APP] disk low".to_string(), json!(42))
        );
        assert_eq!(formatted.render(), "[APP] disk low 42");
    }

    #[test]
    fn test_format_second_value_not_stringified() {
        let formatted = app().format(&[json!("user"), json!({"id": 7})]);
        assert_eq!(
            formatted,
            Formatted::TextWithValue("[APP] user".to_string(), json!({"id": 7}))
        );
    }

    #[test]
    fn test_format_text_and_many_values() {
        let formatted = app().format(&[json!("batch"), json!(1), json!([2, 3]), json!("four")]);
        assert_eq!(
            formatted,
            Formatted::TextWithList(
                "[APP] batch".to_string(),
                vec![json!(1), json!([2, 3]), json!("four")]
            )
        );
        assert_eq!(formatted.render(), "[APP] batch [1,[2,3],\"four\"]");
    }

    #[test]
    fn test_format_drops_nulls_before_deciding() {
        assert_eq!(
            app().format(&[Value::Null, json!("started")]),
            Formatted::Text("[APP] started".to_string())
        );
        assert_eq!(
            app().format(&[json!("a"), Value::Null, json!(1)]),
            Formatted::TextWithValue("[APP] a".to_string(), json!(1))
        );
    }

    #[test]
    fn test_format_non_text_leading() {
        let formatted = app().format(&[Value::Null, json!(5), json!("x")]);
        assert_eq!(
            formatted,
            Formatted::Bare("[APP]".to_string(), vec![json!(5), json!("x")])
        );
        assert_eq!(formatted.render(), "[APP] [5,\"x\"]");
    }

    #[test]
    fn test_format_no_arguments() {
        assert_eq!(app().format(&[]), Formatted::Bare("[APP]".to_string(), vec![]));
        assert_eq!(
            app().format(&[Value::Null, Value::Null]),
            Formatted::Bare("[APP]".to_string(), vec![])
        );
    }

    #[test]
    fn test_operations_route_to_streams() {
        let console = Arc::new(CapturedConsole::default());
        let logger = ConsoleLogger::with_console("[APP]", console.clone());

        logger.warn(&[json!("disk low"), json!(42)]).unwrap();
        logger.error(&[json!("boom")]).unwrap();
        logger.info(&[json!("ready")]).unwrap();
        logger.log(&[Value::Null, json!("started")]).unwrap();
        logger.debug(&[json!({"k": true})]).unwrap();

        let lines = console.lines.lock();
        assert_eq!(
            *lines,
            vec![
                (Level::Warn, "[APP] disk low 42".to_string()),
                (Level::Error, "[APP] boom".to_string()),
                (Level::Info, "[APP] ready".to_string()),
                (Level::Log, "[APP] started".to_string()),
                (Level::Debug, "[APP] [{\"k\":true}]".to_string()),
            ]
        );
    }

    #[test]
    fn test_console_failure_propagates() {
        let logger = ConsoleLogger::with_console("[APP]", Arc::new(BrokenConsole));
        let err = logger.info(&[json!("lost")]).unwrap_err();
        assert!(matches!(err, crate::LoggerError::Io(_)));
    }

    #[test]
    fn test_console_logger_logs() {
        // Real streams: only checks nothing fails
        let logger = app();
        logger.debug(&[json!("debug message")]).unwrap();
        logger.info(&[json!("info message")]).unwrap();
        logger.log(&[json!("log message")]).unwrap();
        logger.warn(&[json!("warn message")]).unwrap();
        logger.error(&[json!("error message")]).unwrap();
    }
}
