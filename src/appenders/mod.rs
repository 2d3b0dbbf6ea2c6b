//! Appender implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod json;
pub mod memory;

#[cfg(feature = "console")]
pub use console::ConsoleAppender;
#[cfg(feature = "file")]
pub use file::FileAppender;
pub use json::JsonAppender;
pub use memory::MemoryAppender;

// Re-export the trait alongside its implementations
pub use crate::core::Appender;
