//! Logger registry: a concrete factory over a logger hierarchy
//!
//! The registry owns the root level, the shared appender list and the
//! per-context level overrides. Resolving a context builds a `BaseLogger`
//! whose level comes from the nearest configured ancestor; resolved
//! loggers are cached so repeat lookups return the same instance.

use super::{
    appender::Appender,
    clock::{Clock, SystemClock},
    context::{child_context, logger_context, parent_context, ROOT_CONTEXT_NAME},
    log_level::LogLevel,
    logger::{BaseLogger, FanoutPolicy, Logger, LoggerFactory},
    process::{CurrentProcess, ProcessIdSource},
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

struct RegistryInner {
    root_level: LogLevel,
    levels: HashMap<String, LogLevel>,
    appenders: Vec<Arc<dyn Appender>>,
    fanout: FanoutPolicy,
    clock: Arc<dyn Clock>,
    pid_source: Arc<dyn ProcessIdSource>,
    cache: RwLock<HashMap<String, Arc<dyn Logger>>>,
}

impl RegistryInner {
    fn effective_level(&self, context: &str) -> LogLevel {
        let mut current = context;
        loop {
            if let Some(level) = self.levels.get(current) {
                return *level;
            }
            if current == ROOT_CONTEXT_NAME {
                return self.root_level;
            }
            current = parent_context(current);
        }
    }
}

#[derive(Clone)]
pub struct LoggerRegistry {
    inner: Arc<RegistryInner>,
}

impl LoggerRegistry {
    #[must_use]
    pub fn builder() -> LoggerRegistryBuilder {
        LoggerRegistryBuilder::new()
    }

    /// Logger for the root context.
    pub fn root(&self) -> Arc<dyn Logger> {
        self.resolve(ROOT_CONTEXT_NAME.to_string())
    }

    /// Logger for the context named by `parts`.
    pub fn logger(&self, parts: &[&str]) -> Arc<dyn Logger> {
        self.resolve(logger_context(parts))
    }

    /// Flush every registered appender.
    pub fn flush(&self) -> super::error::Result<()> {
        for appender in &self.inner.appenders {
            appender.flush()?;
        }
        Ok(())
    }

    fn resolve(&self, context: String) -> Arc<dyn Logger> {
        if let Some(logger) = self.inner.cache.read().get(&context) {
            return Arc::clone(logger);
        }

        let mut cache = self.inner.cache.write();
        if let Some(logger) = cache.get(&context) {
            return Arc::clone(logger);
        }

        let level = self.inner.effective_level(&context);
        let logger: Arc<dyn Logger> = Arc::new(
            BaseLogger::new(
                context.clone(),
                level,
                self.inner.appenders.clone(),
                Arc::new(self.clone()),
            )
            .with_fanout_policy(self.inner.fanout)
            .with_clock(Arc::clone(&self.inner.clock))
            .with_pid_source(Arc::clone(&self.inner.pid_source)),
        );
        cache.insert(context, Arc::clone(&logger));
        logger
    }
}

impl LoggerFactory for LoggerRegistry {
    fn get(&self, context: &str, parts: &[&str]) -> Arc<dyn Logger> {
        self.resolve(child_context(context, parts))
    }
}

/// Builder for constructing a LoggerRegistry with a fluent API
///
/// # Example
/// ```
/// use context_logger_system::prelude::*;
///
/// let registry = LoggerRegistry::builder()
///     .root_level(LogLevel::Info)
///     .level("server.http", LogLevel::Debug)
///     .build();
///
/// let logger = registry.logger(&["server", "http"]);
/// assert!(logger.is_level_enabled("debug").unwrap());
/// ```
pub struct LoggerRegistryBuilder {
    root_level: LogLevel,
    levels: HashMap<String, LogLevel>,
    appenders: Vec<Arc<dyn Appender>>,
    fanout: FanoutPolicy,
    clock: Arc<dyn Clock>,
    pid_source: Arc<dyn ProcessIdSource>,
}

impl LoggerRegistryBuilder {
    pub fn new() -> Self {
        Self {
            root_level: LogLevel::Info,
            levels: HashMap::new(),
            appenders: Vec::new(),
            fanout: FanoutPolicy::default(),
            clock: Arc::new(SystemClock),
            pid_source: Arc::new(CurrentProcess),
        }
    }

    /// Set the level inherited by contexts without an override
    #[must_use = "builder methods return a new value"]
    pub fn root_level(mut self, level: LogLevel) -> Self {
        self.root_level = level;
        self
    }

    /// Override the level for a context and its descendants
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, context: impl Into<String>, level: LogLevel) -> Self {
        self.levels.insert(context.into(), level);
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Arc::new(appender));
        self
    }

    /// Add an already-shared appender
    #[must_use = "builder methods return a new value"]
    pub fn shared_appender(mut self, appender: Arc<dyn Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Set how appender failures behave during fan-out
    #[must_use = "builder methods return a new value"]
    pub fn fanout_policy(mut self, fanout: FanoutPolicy) -> Self {
        self.fanout = fanout;
        self
    }

    /// Substitute the clock used for record timestamps
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Substitute the process id source stamped on records
    #[must_use = "builder methods return a new value"]
    pub fn pid_source(mut self, pid_source: Arc<dyn ProcessIdSource>) -> Self {
        self.pid_source = pid_source;
        self
    }

    /// Build the LoggerRegistry
    pub fn build(self) -> LoggerRegistry {
        LoggerRegistry {
            inner: Arc::new(RegistryInner {
                root_level: self.root_level,
                levels: self.levels,
                appenders: self.appenders,
                fanout: self.fanout,
                clock: self.clock,
                pid_source: self.pid_source,
                cache: RwLock::new(HashMap::new()),
            }),
        }
    }
}

impl Default for LoggerRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
