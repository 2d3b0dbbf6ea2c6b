//! Log level definitions
//!
//! Levels form a single totally-ordered set. Rank grows with severity, so a
//! logger configured at level `A` emits a record tagged `B` iff
//! `A.supports(B)`, i.e. `rank(A) <= rank(B)`. The two sentinels sit at the
//! extremes: `All` (minimal rank) supports everything, `Off` (maximal rank)
//! supports nothing. Only `Trace..=Fatal` are valid record levels.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    All = 0,
    Trace = 1,
    Debug = 2,
    #[default]
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
    Off = 7,
}

/// Every level, most verbose first.
pub const ORDERED_LEVELS: [LogLevel; 8] = [
    LogLevel::All,
    LogLevel::Trace,
    LogLevel::Debug,
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Error,
    LogLevel::Fatal,
    LogLevel::Off,
];

/// The levels a record may actually carry.
pub const SEVERITY_LEVELS: [LogLevel; 6] = [
    LogLevel::Trace,
    LogLevel::Debug,
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Error,
    LogLevel::Fatal,
];

impl LogLevel {
    /// Whether a logger configured at `self` should emit a record tagged
    /// at `candidate`.
    #[must_use]
    pub fn supports(&self, candidate: LogLevel) -> bool {
        (*self as u8) <= (candidate as u8)
    }

    /// Whether this level may be carried by a record. The sentinels
    /// `Off` and `All` only configure loggers.
    #[must_use]
    pub fn is_severity(&self) -> bool {
        !matches!(self, LogLevel::Off | LogLevel::All)
    }

    /// Lowercase identifier, as used in configuration and serialized output.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            LogLevel::All => "all",
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
            LogLevel::Off => "off",
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::All => "ALL",
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Off => "OFF",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::All | LogLevel::Off => White,
            LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(LogLevel::All),
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            "off" => Ok(LogLevel::Off),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_supports_everything() {
        for level in ORDERED_LEVELS {
            assert!(LogLevel::All.supports(level));
        }
    }

    #[test]
    fn test_off_supports_no_severity() {
        for level in SEVERITY_LEVELS {
            assert!(!LogLevel::Off.supports(level));
        }
    }

    #[test]
    fn test_supports_is_rank_comparison() {
        assert!(LogLevel::Warn.supports(LogLevel::Warn));
        assert!(LogLevel::Warn.supports(LogLevel::Error));
        assert!(LogLevel::Warn.supports(LogLevel::Fatal));
        assert!(!LogLevel::Warn.supports(LogLevel::Info));
        assert!(!LogLevel::Warn.supports(LogLevel::Trace));
    }

    #[test]
    fn test_total_order() {
        for window in ORDERED_LEVELS.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_is_severity() {
        for level in SEVERITY_LEVELS {
            assert!(level.is_severity());
        }
        assert!(!LogLevel::Off.is_severity());
        assert!(!LogLevel::All.is_severity());
    }

    #[test]
    fn test_parse_known_ids() {
        for level in ORDERED_LEVELS {
            assert_eq!(level.id().parse::<LogLevel>().unwrap(), level);
        }
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("Error".parse::<LogLevel>().unwrap(), LogLevel::Error);
    }

    #[test]
    fn test_parse_unknown_id_is_an_error() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid log level: 'verbose'");
    }

    #[test]
    fn test_display_uppercase() {
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
        assert_eq!(LogLevel::Fatal.to_string(), "FATAL");
    }

    #[test]
    fn test_serde_lowercase_ids() {
        let json = serde_json::to_string(&LogLevel::Debug).unwrap();
        assert_eq!(json, "\"debug\"");

        let level: LogLevel = serde_json::from_str("\"fatal\"").unwrap();
        assert_eq!(level, LogLevel::Fatal);
    }
}
