//! Log record structure
//!
//! A `LogRecord` is the immutable value handed to every appender: the
//! originating context, the severity, the message text, an optional
//! structured error payload, optional caller-supplied meta fields, the
//! creation timestamp and the emitting process id.

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Structured payload describing a logged error.
///
/// Carries the error's display message plus the messages of its `source()`
/// chain, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chain: Vec<String>,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            chain: Vec::new(),
        }
    }

    /// Build a payload from any error, walking its source chain.
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        let mut chain = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }

        Self {
            message: error.to_string(),
            chain,
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for cause in &self.chain {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

/// What a severity method was called with: a plain message or an error.
///
/// A `Failure` produces a record whose `message` is the error's message
/// text and whose `error` field is populated; a `Message` leaves `error`
/// unset.
#[derive(Debug, Clone, PartialEq)]
pub enum LogPayload {
    Message(String),
    Failure(ErrorPayload),
}

impl From<String> for LogPayload {
    fn from(message: String) -> Self {
        LogPayload::Message(message)
    }
}

impl From<&str> for LogPayload {
    fn from(message: &str) -> Self {
        LogPayload::Message(message.to_string())
    }
}

impl From<ErrorPayload> for LogPayload {
    fn from(error: ErrorPayload) -> Self {
        LogPayload::Failure(error)
    }
}

/// Caller-supplied structured fields attached to a record.
///
/// The field schema is unconstrained; values are arbitrary JSON. An absent
/// meta (`None` on the record) is distinct from an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meta {
    fields: BTreeMap<String, Value>,
}

impl Meta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style.
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field in place.
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Format fields as key=value pairs
    pub fn format_fields(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{}={}", k, s),
                other => format!("{}={}", k, other),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub context: String,
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    pub timestamp: DateTime<Utc>,
    pub pid: u32,
}

impl LogRecord {
    /// Build a record from a severity-method invocation.
    pub fn new(
        context: impl Into<String>,
        level: LogLevel,
        payload: LogPayload,
        meta: Option<Meta>,
        timestamp: DateTime<Utc>,
        pid: u32,
    ) -> Self {
        let (message, error) = match payload {
            LogPayload::Message(message) => (message, None),
            LogPayload::Failure(error) => (error.message.clone(), Some(error)),
        };

        Self {
            context: context.into(),
            level,
            message,
            error,
            meta,
            timestamp,
            pid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2012, 2, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_message_payload_leaves_error_unset() {
        let record = LogRecord::new(
            "server.http",
            LogLevel::Info,
            "request handled".into(),
            None,
            timestamp(),
            42,
        );

        assert_eq!(record.message, "request handled");
        assert_eq!(record.error, None);
        assert_eq!(record.meta, None);
    }

    #[test]
    fn test_failure_payload_sets_message_from_error() {
        let payload = ErrorPayload::new("connection refused");
        let record = LogRecord::new(
            "server.http",
            LogLevel::Error,
            payload.clone().into(),
            None,
            timestamp(),
            42,
        );

        assert_eq!(record.message, "connection refused");
        assert_eq!(record.error, Some(payload));
    }

    #[test]
    fn test_error_payload_collects_source_chain() {
        #[derive(Debug)]
        struct Outer(std::io::Error);

        impl fmt::Display for Outer {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "request failed")
            }
        }

        impl std::error::Error for Outer {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let outer = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        let payload = ErrorPayload::from_error(&outer);

        assert_eq!(payload.message, "request failed");
        assert_eq!(payload.chain, vec!["connection refused".to_string()]);
        assert_eq!(payload.to_string(), "request failed: connection refused");
    }

    #[test]
    fn test_absent_meta_is_not_serialized() {
        let record = LogRecord::new("ctx", LogLevel::Info, "m".into(), None, timestamp(), 1);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("meta").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_empty_meta_is_serialized_as_empty_object() {
        let record = LogRecord::new(
            "ctx",
            LogLevel::Info,
            "m".into(),
            Some(Meta::new()),
            timestamp(),
            1,
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["meta"], serde_json::json!({}));
    }

    #[test]
    fn test_meta_fields_attach_verbatim() {
        let meta = Meta::new().with_field("x", true).with_field("latency_ms", 42);
        let record = LogRecord::new(
            "ctx",
            LogLevel::Debug,
            "m".into(),
            Some(meta.clone()),
            timestamp(),
            1,
        );

        assert_eq!(record.meta, Some(meta));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["meta"]["x"], serde_json::json!(true));
        assert_eq!(json["meta"]["latency_ms"], serde_json::json!(42));
    }

    #[test]
    fn test_meta_format_fields() {
        let meta = Meta::new().with_field("action", "login").with_field("count", 5);
        let formatted = meta.format_fields();
        assert!(formatted.contains("action=login"));
        assert!(formatted.contains("count=5"));
    }
}
