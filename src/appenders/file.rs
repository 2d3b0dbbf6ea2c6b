//! File appender implementation

use crate::core::{Appender, LogRecord, OutputFormat, Result, TimestampFormat};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct FileAppender {
    writer: Mutex<BufWriter<File>>,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        })
    }

    /// Set the output format for this appender
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use context_logger_system::appenders::FileAppender;
    /// use context_logger_system::TimestampFormat;
    ///
    /// let appender = FileAppender::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }
}

impl Appender for FileAppender {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let mut output = self.output_format.format(record, &self.timestamp_format);
        output.push('\n');

        let mut writer = self.writer.lock();
        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data reaches disk
        let _ = self.flush();
    }
}
