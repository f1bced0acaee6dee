//! Logger trait definition

use std::sync::Arc;

use serde_json::Value;

use crate::error::LoggerResult;
use crate::level::Level;

/// The logging contract
///
/// Every operation takes an ordered list of arguments: text
/// (`Value::String`), structured data, or absent values (`Value::Null`).
/// Implementations:
/// - `ConsoleLogger`: Prefixed lines on the console streams
/// - `FileLogger`: Level-tagged JSON records appended to a file
/// - `CompositeLogger`: Fans every call out to its children
/// - `NullLogger`: Discards everything
///
/// A returned error is the failure of the underlying sink, handed back to the
/// caller unchanged.
pub trait Logger: Send + Sync {
    /// Log at warning level
    fn warn(&self, args: &[Value]) -> LoggerResult<()>;

    /// Log at error level
    fn error(&self, args: &[Value]) -> LoggerResult<()>;

    /// Log at info level
    fn info(&self, args: &[Value]) -> LoggerResult<()>;

    /// Plain log output
    fn log(&self, args: &[Value]) -> LoggerResult<()>;

    /// Log at debug level
    fn debug(&self, args: &[Value]) -> LoggerResult<()>;

    /// Dispatch to the operation named by `level`
    fn log_at(&self, level: Level, args: &[Value]) -> LoggerResult<()> {
        match level {
            Level::Warn => self.warn(args),
            Level::Error => self.error(args),
            Level::Info => self.info(args),
            Level::Log => self.log(args),
            Level::Debug => self.debug(args),
        }
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn warn(&self, args: &[Value]) -> LoggerResult<()> {
        (**self).warn(args)
    }

    fn error(&self, args: &[Value]) -> LoggerResult<()> {
        (**self).error(args)
    }

    fn info(&self, args: &[Value]) -> LoggerResult<()> {
        (**self).info(args)
    }

    fn log(&self, args: &[Value]) -> LoggerResult<()> {
        (**self).log(args)
    }

    fn debug(&self, args: &[Value]) -> LoggerResult<()> {
        (**self).debug(args)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn warn(&self, args: &[Value]) -> LoggerResult<()> {
        (**self).warn(args)
    }

    fn error(&self, args: &[Value]) -> LoggerResult<()> {
        (**self).error(args)
    }

    fn info(&self, args: &[Value]) -> LoggerResult<()> {
        (**self).info(args)
    }

    fn log(&self, args: &[Value]) -> LoggerResult<()> {
        (**self).log(args)
    }

    fn debug(&self, args: &[Value]) -> LoggerResult<()> {
        (**self).debug(args)
    }
}

/// Extension trait for logging a single formatted message
pub trait LoggerExt: Logger {
    /// Log a warning message with format arguments
    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) -> LoggerResult<()> {
        self.warn(&[Value::String(args.to_string())])
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: std::fmt::Arguments<'_>) -> LoggerResult<()> {
        self.error(&[Value::String(args.to_string())])
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: std::fmt::Arguments<'_>) -> LoggerResult<()> {
        self.info(&[Value::String(args.to_string())])
    }

    /// Plain log output with format arguments
    fn log_fmt(&self, args: std::fmt::Arguments<'_>) -> LoggerResult<()> {
        self.log(&[Value::String(args.to_string())])
    }

    /// Log a debug message with format arguments
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) -> LoggerResult<()> {
        self.debug(&[Value::String(args.to_string())])
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Turn a JSON array into an argument list
///
/// Anything other than an array becomes a single argument.
pub fn into_args(value: Value) -> Vec<Value> {
    match value {
        Value::Array(values) => values,
        other => vec![other],
    }
}

/// Build an argument list from JSON literals
///
/// ```
/// let args = logfan_core::args!("boom", {"code": 5}, null);
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:tt)+) => {
        $crate::into_args($crate::__private::serde_json::json!([$($arg)+]))
    };
}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_warn {
    ($logger:expr $(, $($arg:tt)*)?) => {
        {
            use $crate::Logger as _;
            $logger.warn(&$crate::args!($($($arg)*)?))
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $($arg:tt)*)?) => {
        {
            use $crate::Logger as _;
            $logger.error(&$crate::args!($($($arg)*)?))
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $($arg:tt)*)?) => {
        {
            use $crate::Logger as _;
            $logger.info(&$crate::args!($($($arg)*)?))
        }
    };
}

#[macro_export]
macro_rules! log_log {
    ($logger:expr $(, $($arg:tt)*)?) => {
        {
            use $crate::Logger as _;
            $logger.log(&$crate::args!($($($arg)*)?))
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $($arg:tt)*)?) => {
        {
            use $crate::Logger as _;
            $logger.debug(&$crate::args!($($($arg)*)?))
        }
    };
}
