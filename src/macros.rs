//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to
//! the underlying severity call and evaluates to its `Result`, so callers
//! may `?` it or ignore it.
//!
//! # Examples
//!
//! ```
//! use context_logger_system::prelude::*;
//! use context_logger_system::info;
//!
//! let registry = LoggerRegistry::builder().build();
//! let logger = registry.logger(&["server"]);
//!
//! // Basic logging
//! let _ = info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! let _ = info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use context_logger_system::prelude::*;
/// # let registry = LoggerRegistry::builder().build();
/// # let logger = registry.root();
/// use context_logger_system::log;
/// let _ = log!(logger, LogLevel::Info, "Simple message");
/// let _ = log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::core::Logger as _;
        $logger.emit(
            $level,
            $crate::core::LogPayload::Message(format!($($arg)+)),
            None,
        )
    }};
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use context_logger_system::prelude::*;
/// # let registry = LoggerRegistry::builder().build();
/// # let logger = registry.root();
/// use context_logger_system::info;
/// let _ = info!(logger, "Application started");
/// let _ = info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Fatal, $($arg)+)
    };
}
