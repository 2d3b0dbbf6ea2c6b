//! Console appender implementation

use crate::core::output_format::escape_line;
use crate::core::{Appender, LogLevel, LogRecord, OutputFormat, Result, TimestampFormat};
use colored::Colorize;

pub struct ConsoleAppender {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    /// Set the output format for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use context_logger_system::appenders::ConsoleAppender;
    /// use context_logger_system::OutputFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the timestamp format for this appender
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

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let output = match self.output_format {
            OutputFormat::Text => self.format_text(record),
            OutputFormat::Json | OutputFormat::Logfmt => {
                self.output_format.format(record, &self.timestamp_format)
            }
        };

        // Route Error and Fatal levels to stderr, others to stdout
        match record.level {
            LogLevel::Error | LogLevel::Fatal => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

impl ConsoleAppender {
    /// Format as text with optional colors
    fn format_text(&self, record: &LogRecord) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", record.level.to_str())
                .color(record.level.color_code())
                .to_string()
        } else {
            format!("{:5}", record.level.to_str())
        };

        let timestamp_str = self.timestamp_format.format(&record.timestamp);

        let mut base = format!(
            "[{}] [{}] [{}] {}",
            timestamp_str,
            level_str,
            record.context,
            escape_line(&record.message)
        );

        if let Some(ref error) = record.error {
            if !error.chain.is_empty() {
                base.push_str(&format!(
                    " (caused by: {})",
                    escape_line(&error.chain.join(": "))
                ));
            }
        }

        // Append meta fields if present
        if let Some(ref meta) = record.meta {
            if !meta.is_empty() {
                base.push(' ');
                base.push_str(&escape_line(&meta.format_fields()));
            }
        }

        base
    }
}
