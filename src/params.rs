//! Resolution of named parameters into a request description.

use crate::config::ExecutorConfig;
use crate::error::CallError;
use crate::input::Param;
use std::time::Duration;

/// Longest deadline handed to the HTTP client; larger timeouts are clamped.
pub const MAX_TIMEOUT_SECS: u64 = u32::MAX as u64;

/// The request described by the input parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    /// Target URL, trimmed
    pub url: String,
    /// Uppercased HTTP method
    pub method: String,
    /// Raw custom header list, `key:value` pairs separated by commas
    pub headers: String,
    /// Request body, sent only for methods other than GET and DELETE
    pub body: String,
    /// Timeout in seconds; zero or negative means no deadline
    pub timeout_secs: i64,
    /// Content type for POST, PUT and PATCH
    pub content_type: String,
}

impl RequestParams {
    /// Resolves parameters in input order, later entries overwriting earlier ones.
    ///
    /// Unknown names are ignored. A `timeout` that does not start with an
    /// integer leaves the current value in place.
    ///
    /// # Errors
    ///
    /// Returns a validation error if no non-empty `url` is given.
    pub fn resolve(params: &[Param], config: &ExecutorConfig) -> Result<Self, CallError> {
        let mut url = String::new();
        let mut method = String::new();
        let mut headers = String::new();
        let mut body = String::new();
        let mut timeout_secs = config.default_timeout_secs;
        let mut content_type = config.default_content_type.clone();

        for param in params {
            let value = param.comp_value.as_str();
            match param.input_name.as_str() {
                "url" => url = value.trim().to_string(),
                "method" => method = value.trim().to_uppercase(),
                "headers" => headers = value.trim().to_string(),
                "body" => body = value.trim().to_string(),
                "timeout" => {
                    if let Some(secs) = scan_timeout(value) {
                        timeout_secs = secs;
                    }
                }
                "contenttype" => {
                    let value = value.trim();
                    if !value.is_empty() {
                        content_type = value.to_string();
                    }
                }
                _ => {}
            }
        }

        if url.is_empty() {
            return Err(CallError::missing_url());
        }
        if method.is_empty() {
            method = "GET".to_string();
        }

        Ok(Self {
            url,
            method,
            headers,
            body,
            timeout_secs,
            content_type,
        })
    }

    /// Returns true if the method never carries a body.
    #[must_use]
    pub fn is_bodyless(&self) -> bool {
        matches!(self.method.as_str(), "GET" | "DELETE")
    }

    /// Returns true if the method gets a default `Content-Type` header.
    #[must_use]
    pub fn sends_content_type(&self) -> bool {
        matches!(self.method.as_str(), "POST" | "PUT" | "PATCH")
    }

    /// The request deadline, or `None` when the timeout is not positive.
    ///
    /// Deadlines beyond [`MAX_TIMEOUT_SECS`] are clamped so the client can
    /// always add them to the current instant.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        u64::try_from(self.timeout_secs)
            .ok()
            .filter(|secs| *secs > 0)
            .map(|secs| Duration::from_secs(secs.min(MAX_TIMEOUT_SECS)))
    }
}

/// Scans a leading decimal integer, `%d` style.
///
/// Leading whitespace and one sign are accepted, and scanning stops at the
/// first non-digit, so `" 15s"` yields 15. Returns `None` when there are no
/// digits or the value does not fit in an `i64`.
#[must_use]
pub fn scan_timeout(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
