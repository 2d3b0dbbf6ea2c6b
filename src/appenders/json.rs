//! JSON appender for structured logging

use crate::core::{Appender, LogRecord, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON file appender for structured logging
///
/// Writes each log record as a single-line JSON object (JSONL format)
/// Compatible with log aggregation tools like ELK, Loki, etc.
pub struct JsonAppender {
    writer: Mutex<BufWriter<File>>,
    pretty: bool,
}

impl JsonAppender {
    /// Create a new JSON appender
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            pretty: false,
        })
    }

    /// Create a new JSON appender with pretty printing
    pub fn new_pretty<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            pretty: true,
        })
    }
}

impl Appender for JsonAppender {
    fn name(&self) -> &str {
        "json"
    }

    fn append(&self, record: &LogRecord) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl Drop for JsonAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
