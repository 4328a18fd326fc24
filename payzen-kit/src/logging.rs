//! Observational logging.
//!
//! The toolbox reports its progress to a [`LogSink`] through a [`Logger`]. Logging never changes
//! the outcome of a call: errors are always returned, whether they are logged or not.
//!
//! Any `Fn(LogLevel, &str, Option<&AnyJson>)` closure is a sink:
//!
//! ```
//! use payzen_kit::logging::{LogLevel, LogThreshold, Logger};
//! use payzen_kit::types::AnyJson;
//!
//! let logger = Logger::new(LogThreshold::Notice, |level: LogLevel, message: &str, data: Option<&AnyJson>| {
//!     println!("[{level}] {message} {}", data.map(|d| d.to_string()).unwrap_or_default());
//! });
//!
//! logger.notice("createPayment requested", None);
//! ```

use std::{fmt::Display, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::types::AnyJson;

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warning,
    Notice,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => f.write_str("ERROR"),
            LogLevel::Warning => f.write_str("WARNING"),
            LogLevel::Notice => f.write_str("NOTICE"),
        }
    }
}

/// The widest level forwarded to the sink. Defaults to [`LogThreshold::Off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogThreshold {
    #[default]
    Off,
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warning,
    /// Everything.
    Notice,
}

impl LogThreshold {
    pub fn allows(&self, level: LogLevel) -> bool {
        let widest = match self {
            LogThreshold::Off => return false,
            LogThreshold::Error => LogLevel::Error,
            LogThreshold::Warning => LogLevel::Warning,
            LogThreshold::Notice => LogLevel::Notice,
        };
        level <= widest
    }
}

/// Receives log entries.
pub trait LogSink {
    fn log(&self, level: LogLevel, message: &str, data: Option<&AnyJson>);
}

impl<F> LogSink for F
where
    F: Fn(LogLevel, &str, Option<&AnyJson>),
{
    fn log(&self, level: LogLevel, message: &str, data: Option<&AnyJson>) {
        self(level, message, data)
    }
}

/// Discards every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn log(&self, _level: LogLevel, _message: &str, _data: Option<&AnyJson>) {}
}

/// Forwards entries to `tracing`, under the `payzen` target.
///
/// `NOTICE` maps to `INFO`, `WARNING` to `WARN`, `ERROR` to `ERROR`.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl LogSink for TracingSink {
    fn log(&self, level: LogLevel, message: &str, data: Option<&AnyJson>) {
        let data = data.map(|d| d.to_string()).unwrap_or_default();
        match level {
            LogLevel::Notice => tracing::info!(target: "payzen", data = %data, "{message}"),
            LogLevel::Warning => tracing::warn!(target: "payzen", data = %data, "{message}"),
            LogLevel::Error => tracing::error!(target: "payzen", data = %data, "{message}"),
        }
    }
}

/// A sink filtered by a threshold.
#[derive(Clone)]
pub struct Logger {
    threshold: LogThreshold,
    sink: Arc<dyn LogSink + Send + Sync>,
}

impl Logger {
    pub fn new(threshold: LogThreshold, sink: impl LogSink + Send + Sync + 'static) -> Self {
        Logger {
            threshold,
            sink: Arc::new(sink),
        }
    }

    /// A logger that forwards to `tracing`.
    #[cfg(feature = "tracing")]
    pub fn tracing(threshold: LogThreshold) -> Self {
        Logger::new(threshold, TracingSink)
    }

    pub fn threshold(&self) -> LogThreshold {
        self.threshold
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.threshold.allows(level)
    }

    pub fn log(&self, level: LogLevel, message: &str, data: Option<AnyJson>) {
        if self.enabled(level) {
            self.sink.log(level, message, data.as_ref());
        }
    }

    pub fn notice(&self, message: &str, data: Option<AnyJson>) {
        self.log(LogLevel::Notice, message, data)
    }

    pub fn warning(&self, message: &str, data: Option<AnyJson>) {
        self.log(LogLevel::Warning, message, data)
    }

    pub fn error(&self, message: &str, data: Option<AnyJson>) {
        self.log(LogLevel::Error, message, data)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(LogThreshold::Off, NoopSink)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
