//! File logging example
//!
//! Demonstrates text and JSONL file appenders sharing one registry.
//!
//! Run with: cargo run --example file_logging

use context_logger_system::prelude::*;

fn main() -> Result<()> {
    println!("=== Context Logger System - File Logging Example ===\n");

    let text_path = "app.log";
    let json_path = "app.jsonl";

    let registry = LoggerRegistry::builder()
        .root_level(LogLevel::Debug)
        .appender(FileAppender::new(text_path)?)
        .appender(JsonAppender::new(json_path)?)
        .build();

    let logger = registry.logger(&["indexer"]);
    logger.info("Indexing started")?;
    for batch in 0..3 {
        logger.debug_with_meta(
            "Batch flushed",
            Meta::new().with_field("batch", batch).with_field("docs", 128),
        )?;
    }
    logger.info("Indexing finished")?;

    registry.flush()?;

    println!("Wrote text records to {} and JSONL records to {}", text_path, json_path);
    Ok(())
}
