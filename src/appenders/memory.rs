//! In-memory appender
//!
//! Captures records into a buffer instead of writing them anywhere. The
//! crate's own tests use it to assert on exact record values; embedders
//! can use it to capture logs for inspection.

use crate::core::{Appender, LogRecord, Result};
use parking_lot::Mutex;

#[derive(Default)]
pub struct MemoryAppender {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryAppender {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Drain the buffer, returning its contents.
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use chrono::TimeZone;

    fn record(message: &str) -> LogRecord {
        LogRecord::new(
            "ctx",
            LogLevel::Info,
            message.into(),
            None,
            chrono::Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap(),
            1,
        )
    }

    #[test]
    fn test_append_and_snapshot() {
        let appender = MemoryAppender::new();
        appender.append(&record("one")).unwrap();
        appender.append(&record("two")).unwrap();

        let records = appender.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "one");
        assert_eq!(records[1].message, "two");
    }

    #[test]
    fn test_take_drains_buffer() {
        let appender = MemoryAppender::new();
        appender.append(&record("one")).unwrap();

        assert_eq!(appender.take().len(), 1);
        assert!(appender.is_empty());
    }
}
