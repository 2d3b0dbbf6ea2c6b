//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// A sink that consumes log records.
///
/// Appender instances are shared between loggers in a hierarchy, so
/// `append` takes a shared reference; implementations that buffer use
/// interior mutability and must tolerate concurrent callers.
pub trait Appender: Send + Sync {
    fn append(&self, record: &LogRecord) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
