//! Output format configuration for log records
//!
//! Provides different layouts for log records:
//! - Text: Human-readable format (default)
//! - Json: Machine-readable JSON format
//! - Logfmt: Key-value format compatible with log aggregation tools

use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;
use serde_json::Value;

/// Output format for log records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] [server.http] Request processed`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","level":"info","context":"server.http","message":"Request processed","pid":4321}`
    Json,

    /// Logfmt format (key=value pairs)
    ///
    /// Example: `timestamp=2025-01-08T10:30:45.123Z level=info context=server.http message="Request processed"`
    Logfmt,
}

/// Escape control characters so a record renders as a single line.
///
/// Text-shaped layouts apply this to prevent crafted messages from
/// injecting fake records; the record itself keeps the caller's text
/// verbatim.
pub(crate) fn escape_line(value: &str) -> String {
    value
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

impl OutputFormat {
    /// Format a log record according to this output format
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => self.format_text(record, timestamp_format),
            OutputFormat::Json => self.format_json(record, timestamp_format),
            OutputFormat::Logfmt => self.format_logfmt(record, timestamp_format),
        }
    }

    /// Format as human-readable text
    fn format_text(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let timestamp_str = timestamp_format.format(&record.timestamp);

        let mut base = format!(
            "[{}] [{:5}] [{}] {}",
            timestamp_str,
            record.level.to_str(),
            record.context,
            escape_line(&record.message)
        );

        if let Some(ref error) = record.error {
            if !error.chain.is_empty() {
                base.push_str(&format!(" (caused by: {})", escape_line(&error.chain.join(": "))));
            }
        }

        if let Some(ref meta) = record.meta {
            if !meta.is_empty() {
                base.push(' ');
                base.push_str(&escape_line(&meta.format_fields()));
            }
        }

        base
    }

    /// Format as JSON
    fn format_json(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "timestamp".to_string(),
            self.format_timestamp_json(record, timestamp_format),
        );
        json_obj.insert(
            "level".to_string(),
            Value::String(record.level.id().to_string()),
        );
        json_obj.insert("context".to_string(), Value::String(record.context.clone()));
        json_obj.insert("message".to_string(), Value::String(record.message.clone()));
        json_obj.insert("pid".to_string(), Value::Number(record.pid.into()));

        if let Some(ref error) = record.error {
            json_obj.insert(
                "error".to_string(),
                serde_json::to_value(error).unwrap_or(Value::Null),
            );
        }

        // "meta absent" and "meta empty" stay distinguishable
        if let Some(ref meta) = record.meta {
            json_obj.insert(
                "meta".to_string(),
                serde_json::to_value(meta).unwrap_or(Value::Null),
            );
        }

        serde_json::to_string(&Value::Object(json_obj)).unwrap_or_default()
    }

    /// Format timestamp for JSON output
    fn format_timestamp_json(
        &self,
        record: &LogRecord,
        timestamp_format: &TimestampFormat,
    ) -> Value {
        match timestamp_format {
            TimestampFormat::Unix => Value::Number(record.timestamp.timestamp().into()),
            TimestampFormat::UnixMillis => {
                Value::Number(record.timestamp.timestamp_millis().into())
            }
            _ => Value::String(timestamp_format.format(&record.timestamp)),
        }
    }

    /// Format as logfmt (key=value pairs)
    fn format_logfmt(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let mut parts = Vec::new();

        parts.push(format!(
            "timestamp={}",
            self.escape_logfmt_value(&timestamp_format.format(&record.timestamp))
        ));
        parts.push(format!("level={}", record.level.id()));
        parts.push(format!(
            "context={}",
            self.escape_logfmt_value(&record.context)
        ));
        parts.push(format!("pid={}", record.pid));

        // Message is always quoted for safety
        parts.push(format!(
            "message={}",
            self.quote_logfmt_value(&escape_line(&record.message))
        ));

        if let Some(ref error) = record.error {
            parts.push(format!(
                "error={}",
                self.quote_logfmt_value(&escape_line(&error.to_string()))
            ));
        }

        if let Some(ref meta) = record.meta {
            for (key, value) in meta.fields() {
                let formatted_value = match value {
                    Value::String(s) => self.quote_logfmt_value(&escape_line(s)),
                    other => other.to_string(),
                };
                parts.push(format!("{}={}", self.escape_logfmt_key(key), formatted_value));
            }
        }

        parts.join(" ")
    }

    /// Escape a logfmt key (remove spaces and special chars)
    fn escape_logfmt_key(&self, key: &str) -> String {
        key.chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
            .collect()
    }

    /// Escape a logfmt value (quote if it contains spaces)
    fn escape_logfmt_value(&self, value: &str) -> String {
        if value.contains(' ') || value.contains('"') || value.contains('=') {
            self.quote_logfmt_value(value)
        } else {
            value.to_string()
        }
    }

    /// Quote a logfmt value
    fn quote_logfmt_value(&self, value: &str) -> String {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}
