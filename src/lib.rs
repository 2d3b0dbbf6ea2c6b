//! # Context Logger System
//!
//! A hierarchical, context-aware Rust logging core: loggers are named by
//! dot-delimited contexts, filter by an ordered level set, and fan records
//! out to multiple shared appenders.
//!
//! ## Features
//!
//! - **Leveled Filtering**: Ordered severity set with `Off`/`All` sentinels
//! - **Hierarchical Contexts**: Child loggers resolved through a factory
//! - **Multiple Appenders**: Console, file, JSON, and custom appenders
//! - **Deterministic Records**: Injected clock and process identity

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::FileAppender;
    pub use crate::appenders::{JsonAppender, MemoryAppender};
    pub use crate::core::{
        Appender, BaseLogger, Clock, ErrorPayload, FanoutPolicy, LogLevel, LogPayload, LogRecord,
        Logger, LoggerError, LoggerExt, LoggerFactory, LoggerRegistry, LoggerRegistryBuilder,
        Meta, OutputFormat, ProcessIdSource, Result, TimestampFormat,
    };
}

#[cfg(feature = "console")]
pub use appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use appenders::FileAppender;
pub use appenders::{JsonAppender, MemoryAppender};
pub use core::{
    child_context, logger_context, parent_context, Appender, BaseLogger, Clock, CurrentProcess,
    ErrorPayload, FanoutPolicy, FixedClock, FixedProcessId, LogLevel, LogPayload, LogRecord,
    Logger, LoggerError, LoggerExt, LoggerFactory, LoggerRegistry, LoggerRegistryBuilder, Meta,
    OutputFormat, ProcessIdSource, Result, SystemClock, TimestampFormat, ROOT_CONTEXT_NAME,
};
