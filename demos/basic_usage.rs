//! Basic logger usage example
//!
//! Demonstrates registry-driven loggers with a console appender and
//! per-context levels.
//!
//! Run with: cargo run --example basic_usage

use context_logger_system::prelude::*;

fn main() -> Result<()> {
    println!("=== Context Logger System - Basic Usage Example ===\n");

    // Build a registry: root at INFO, the http subsystem at TRACE
    let registry = LoggerRegistry::builder()
        .root_level(LogLevel::Info)
        .level("server.http", LogLevel::Trace)
        .appender(ConsoleAppender::new())
        .build();

    println!("1. Logging at different levels:");
    let logger = registry.logger(&["server"]);
    logger.trace("This trace message is hidden")?;
    logger.debug("This debug message is hidden")?;
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;

    println!("\n2. The http child context is more verbose:");
    let http = logger.child(&["http"]);
    http.trace("Connection accepted")?;
    http.debug("Parsed request line")?;

    println!("\n3. Structured meta fields:");
    http.info_with_meta(
        "Request completed",
        Meta::new()
            .with_field("status", 200)
            .with_field("latency_ms", 17),
    )?;

    println!("\n4. Logging an error value:");
    let io_error = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer went away");
    http.error(ErrorPayload::from_error(&io_error))?;

    registry.flush()?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
