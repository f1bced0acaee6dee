//! Declarative logger configuration
//!
//! Describes which sinks to build, loaded from YAML:
//! - `console`: a `ConsoleLogger` with the given prefix
//! - `file`: a `FileLogger` opened on the given path
//! - `discard`: a trailing `NullLogger`

mod file;

pub use file::{ConsoleConfig, FileConfig, LoggingConfig};
