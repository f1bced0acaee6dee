//! logfan core
//!
//! A small logging façade: one `Logger` contract with five operations
//! (`warn`, `error`, `info`, `log`, `debug`) and interchangeable sinks.
//!
//! - `ConsoleLogger`: prefixed lines on stdout/stderr
//! - `FileLogger`: level-tagged JSON records appended to a file
//! - `CompositeLogger`: forwards each call to its children, in order
//! - `NullLogger`: discards everything
//! - `TracingLogger` (feature `tracing`): forwards into `tracing`
//!
//! ```rust
//! use logfan_core::{log_warn, CompositeLogger, ConsoleLogger, NullLogger};
//! use std::sync::Arc;
//!
//! let mut logger = CompositeLogger::new();
//! logger.add_logger(Arc::new(ConsoleLogger::new("[APP]")));
//! logger.add_logger(Arc::new(NullLogger::new()));
//!
//! log_warn!(logger, "disk low", 42).unwrap();
//! ```

mod composite;
mod console;
mod error;
mod file_logger;
mod level;
mod noop;
mod traits;
#[cfg(feature = "tracing")]
mod tracing_logger;

pub mod config;

pub use serde_json::Value;

pub use composite::CompositeLogger;
pub use console::{Console, ConsoleLogger, Formatted, StdConsole};
pub use error::{LoggerError, LoggerResult};
pub use file_logger::FileLogger;
pub use level::Level;
pub use noop::NullLogger;
pub use traits::{into_args, BoxedLogger, Logger, LoggerExt, SharedLogger};
#[cfg(feature = "tracing")]
pub use tracing_logger::TracingLogger;

pub use config::{ConsoleConfig, FileConfig, LoggingConfig};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
