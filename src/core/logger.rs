//! Main logger implementation
//!
//! `BaseLogger` binds a context name to a configured level and a shared
//! set of appenders. A severity call checks level enablement, constructs a
//! record and hands it to every appender in registration order. Level and
//! appenders are fixed for the logger's lifetime; reconfiguration happens
//! by building a new logger and letting the factory substitute it.

use super::{
    appender::Appender,
    clock::{Clock, SystemClock},
    error::{LoggerError, Result},
    log_level::LogLevel,
    log_record::{LogPayload, LogRecord, Meta},
    process::{CurrentProcess, ProcessIdSource},
};
use std::sync::Arc;

/// Resolves a context name to a logger instance.
///
/// `BaseLogger::child` passes its own context plus the requested segments,
/// unmodified and in order. The factory may return any logger-shaped
/// value, including test doubles.
pub trait LoggerFactory: Send + Sync {
    fn get(&self, context: &str, parts: &[&str]) -> Arc<dyn Logger>;
}

/// The logger capability.
///
/// Object-safe so factories stay polymorphic over implementations. The
/// ergonomic severity methods live on [`LoggerExt`].
pub trait Logger: Send + Sync {
    /// Emit a record at `level` if the configured level supports it.
    ///
    /// A disabled level constructs nothing and touches no appender. Only
    /// severity levels (`Trace..=Fatal`) are accepted.
    fn emit(&self, level: LogLevel, payload: LogPayload, meta: Option<Meta>) -> Result<()>;

    /// Forward a fully-formed record to every appender, as-is.
    ///
    /// No level filtering, no field derivation. Escape hatch for records
    /// built elsewhere.
    fn log(&self, record: &LogRecord) -> Result<()>;

    /// Resolve a child logger with an extended context name.
    fn child(&self, parts: &[&str]) -> Arc<dyn Logger>;

    /// Whether a record tagged with the level named `level_id` would be
    /// emitted. Unknown identifiers are a configuration error.
    fn is_level_enabled(&self, level_id: &str) -> Result<bool>;
}

/// Format-free severity helpers over any [`Logger`].
pub trait LoggerExt: Logger {
    fn trace(&self, payload: impl Into<LogPayload>) -> Result<()> {
        self.emit(LogLevel::Trace, payload.into(), None)
    }

    fn trace_with_meta(&self, payload: impl Into<LogPayload>, meta: Meta) -> Result<()> {
        self.emit(LogLevel::Trace, payload.into(), Some(meta))
    }

    fn debug(&self, payload: impl Into<LogPayload>) -> Result<()> {
        self.emit(LogLevel::Debug, payload.into(), None)
    }

    fn debug_with_meta(&self, payload: impl Into<LogPayload>, meta: Meta) -> Result<()> {
        self.emit(LogLevel::Debug, payload.into(), Some(meta))
    }

    fn info(&self, payload: impl Into<LogPayload>) -> Result<()> {
        self.emit(LogLevel::Info, payload.into(), None)
    }

    fn info_with_meta(&self, payload: impl Into<LogPayload>, meta: Meta) -> Result<()> {
        self.emit(LogLevel::Info, payload.into(), Some(meta))
    }

    fn warn(&self, payload: impl Into<LogPayload>) -> Result<()> {
        self.emit(LogLevel::Warn, payload.into(), None)
    }

    fn warn_with_meta(&self, payload: impl Into<LogPayload>, meta: Meta) -> Result<()> {
        self.emit(LogLevel::Warn, payload.into(), Some(meta))
    }

    fn error(&self, payload: impl Into<LogPayload>) -> Result<()> {
        self.emit(LogLevel::Error, payload.into(), None)
    }

    fn error_with_meta(&self, payload: impl Into<LogPayload>, meta: Meta) -> Result<()> {
        self.emit(LogLevel::Error, payload.into(), Some(meta))
    }

    fn fatal(&self, payload: impl Into<LogPayload>) -> Result<()> {
        self.emit(LogLevel::Fatal, payload.into(), None)
    }

    fn fatal_with_meta(&self, payload: impl Into<LogPayload>, meta: Meta) -> Result<()> {
        self.emit(LogLevel::Fatal, payload.into(), Some(meta))
    }
}

impl<L: Logger + ?Sized> LoggerExt for L {}

/// How appender failures behave during fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FanoutPolicy {
    /// First failure aborts the remaining fan-out and surfaces to the
    /// caller.
    #[default]
    Propagate,
    /// Every appender is attempted; the first failure is returned after
    /// the sweep completes.
    Isolate,
}

pub struct BaseLogger {
    context: String,
    level: LogLevel,
    appenders: Vec<Arc<dyn Appender>>,
    factory: Arc<dyn LoggerFactory>,
    fanout: FanoutPolicy,
    clock: Arc<dyn Clock>,
    pid_source: Arc<dyn ProcessIdSource>,
}

impl BaseLogger {
    pub fn new(
        context: impl Into<String>,
        level: LogLevel,
        appenders: Vec<Arc<dyn Appender>>,
        factory: Arc<dyn LoggerFactory>,
    ) -> Self {
        Self {
            context: context.into(),
            level,
            appenders,
            factory,
            fanout: FanoutPolicy::default(),
            clock: Arc::new(SystemClock),
            pid_source: Arc::new(CurrentProcess),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_fanout_policy(mut self, fanout: FanoutPolicy) -> Self {
        self.fanout = fanout;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_pid_source(mut self, pid_source: Arc<dyn ProcessIdSource>) -> Self {
        self.pid_source = pid_source;
        self
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    fn fan_out(&self, record: &LogRecord) -> Result<()> {
        match self.fanout {
            FanoutPolicy::Propagate => {
                for appender in &self.appenders {
                    appender.append(record)?;
                }
                Ok(())
            }
            FanoutPolicy::Isolate => {
                let mut first_failure = None;
                for appender in &self.appenders {
                    if let Err(err) = appender.append(record) {
                        first_failure.get_or_insert(err);
                    }
                }
                match first_failure {
                    Some(err) => Err(err),
                    None => Ok(()),
                }
            }
        }
    }
}

impl Logger for BaseLogger {
    fn emit(&self, level: LogLevel, payload: LogPayload, meta: Option<Meta>) -> Result<()> {
        if !level.is_severity() {
            return Err(LoggerError::InvalidRecordLevel(level.id().to_string()));
        }

        if !self.level.supports(level) {
            return Ok(());
        }

        let record = LogRecord::new(
            self.context.clone(),
            level,
            payload,
            meta,
            self.clock.now(),
            self.pid_source.pid(),
        );
        self.fan_out(&record)
    }

    fn log(&self, record: &LogRecord) -> Result<()> {
        self.fan_out(record)
    }

    fn child(&self, parts: &[&str]) -> Arc<dyn Logger> {
        self.factory.get(&self.context, parts)
    }

    fn is_level_enabled(&self, level_id: &str) -> Result<bool> {
        let level = level_id.parse::<LogLevel>()?;
        Ok(self.level.supports(level))
    }
}
