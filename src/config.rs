//! Executor configuration.
//!
//! Holds the defaults applied when the input document leaves a parameter
//! out. Nothing here is read from disk; the CLI builds it from flags.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: i64 = 30;

/// Default `Content-Type` for requests that carry a body.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for the request executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Timeout used when no `timeout` parameter is given. Zero or negative
    /// disables the deadline.
    pub default_timeout_secs: i64,
    /// Content type used when no `contenttype` parameter is given.
    pub default_content_type: String,
    /// User agent sent unless a custom header replaces it.
    pub user_agent: String,
}

impl ExecutorConfig {
    /// Creates a new executor configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default timeout in seconds.
    #[must_use]
    pub fn with_default_timeout(mut self, secs: i64) -> Self {
        self.default_timeout_secs = secs;
        self
    }

    /// Sets the default content type.
    #[must_use]
    pub fn with_default_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.default_content_type = content_type.into();
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            default_timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_content_type: DEFAULT_CONTENT_TYPE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
