//! Diagnostic logging to stderr.
//!
//! Stdout is reserved for the single output document, so every log line
//! goes to stderr. Logging is disabled unless the caller asks for it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Configuration for stderr logging.
///
/// # Example
///
/// ```rust
/// use http_call::logging::{LogLevel, LoggingConfig};
///
/// let config = LoggingConfig::new()
///     .with_level(LogLevel::Debug)
///     .with_directives("http_call=trace,reqwest=info");
/// assert!(config.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled.
    pub enabled: bool,
    /// Level filter used when no directives are given.
    pub level: LogLevel,
    /// `EnvFilter` directives, taking precedence over `level`.
    pub directives: Option<String>,
}

impl LoggingConfig {
    /// Creates an enabled logging configuration at the default level.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Creates a disabled logging configuration.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Sets the level filter and enables logging.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self.enabled = true;
        self
    }

    /// Sets filter directives and enables logging.
    #[must_use]
    pub fn with_directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self.enabled = true;
        self
    }

    fn filter(&self) -> Result<EnvFilter, LoggingError> {
        match self.directives {
            Some(ref directives) => EnvFilter::try_new(directives)
                .map_err(|e| LoggingError::invalid_directives(directives, e.to_string())),
            None => Ok(EnvFilter::default().add_directive(self.level.to_filter().into())),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: LogLevel::default(),
            directives: None,
        }
    }
}

/// Log level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace level - most verbose.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warn level - default.
    #[default]
    Warn,
    /// Error level - least verbose.
    Error,
}

impl LogLevel {
    /// Converts to tracing_subscriber LevelFilter.
    #[must_use]
    pub fn to_filter(self) -> tracing_subscriber::filter::LevelFilter {
        match self {
            Self::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
            Self::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            Self::Info => tracing_subscriber::filter::LevelFilter::INFO,
            Self::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            Self::Error => tracing_subscriber::filter::LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(LoggingError::unknown_level(s)),
        }
    }
}

/// Errors that can occur during logging initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingError {
    /// The specific error that occurred.
    pub kind: LoggingErrorKind,
}

/// Specific logging error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingErrorKind {
    /// The level name is not recognized.
    UnknownLevel {
        /// The rejected level name.
        level: String,
    },
    /// Filter directives could not be parsed.
    InvalidDirectives {
        /// The rejected directives.
        directives: String,
        /// The reason for failure.
        reason: String,
    },
    /// Subscriber initialization failed.
    SubscriberInitFailed {
        /// The reason for failure.
        reason: String,
    },
}

impl LoggingError {
    /// Creates a new LoggingError with the given kind.
    #[must_use]
    pub fn new(kind: LoggingErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an error for an unrecognized level name.
    #[must_use]
    pub fn unknown_level(level: impl Into<String>) -> Self {
        Self::new(LoggingErrorKind::UnknownLevel {
            level: level.into(),
        })
    }

    /// Creates an error for unparsable filter directives.
    #[must_use]
    pub fn invalid_directives(directives: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(LoggingErrorKind::InvalidDirectives {
            directives: directives.into(),
            reason: reason.into(),
        })
    }

    /// Creates an error for subscriber initialization failure.
    #[must_use]
    pub fn subscriber_init_failed(reason: impl Into<String>) -> Self {
        Self::new(LoggingErrorKind::SubscriberInitFailed {
            reason: reason.into(),
        })
    }
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LoggingErrorKind::UnknownLevel { level } => {
                write!(
                    f,
                    "unknown log level '{}'; use trace, debug, info, warn, or error",
                    level
                )
            }
            LoggingErrorKind::InvalidDirectives { directives, reason } => {
                write!(f, "invalid log filter '{}': {}", directives, reason)
            }
            LoggingErrorKind::SubscriberInitFailed { reason } => {
                write!(
                    f,
                    "failed to initialize tracing subscriber: {}; \
                     a subscriber may already be set",
                    reason
                )
            }
        }
    }
}

impl std::error::Error for LoggingError {}

/// Installs the global stderr subscriber.
///
/// Returns `Ok(false)` without touching the global subscriber when
/// logging is disabled.
///
/// # Errors
///
/// Returns an error if the directives are invalid or a subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, LoggingError> {
    if !config.enabled {
        return Ok(false);
    }

    let filter = config.filter()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .map_err(|e| LoggingError::subscriber_init_failed(e.to_string()))?;

    Ok(true)
}
