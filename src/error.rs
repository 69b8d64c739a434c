//! Error types for a single HTTP call.
//!
//! Every failure is terminal: the executor stops at the first error and
//! reports it in-band through the `error` field of the output document.
//! Each error implements Display, Debug, Clone, PartialEq, Eq, and
//! std::error::Error.
//!
//! No external error crates (anyhow, thiserror, eyre) are used.

use std::error::Error as StdError;
use std::fmt;

/// An error that ended an HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallError {
    /// The specific error that occurred
    pub kind: CallErrorKind,
}

/// Specific call error types, one per pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallErrorKind {
    /// The input document could not be read or is not valid JSON
    Decode {
        /// Details from the reader or JSON decoder
        details: String,
    },
    /// A required parameter is missing
    Validation {
        /// Description of what was missing
        reason: String,
    },
    /// The outbound request could not be built (URL, method, header)
    RequestBuild {
        /// Why the request could not be built
        details: String,
    },
    /// Connection, DNS, TLS, or timeout failure while exchanging the request
    Transport {
        /// Details of the transport failure
        details: String,
    },
    /// The response body stream failed part way through
    ResponseRead {
        /// Details of the read failure
        details: String,
    },
}

impl CallError {
    /// Creates a new CallError with the given kind.
    #[must_use]
    pub fn new(kind: CallErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(details: impl Into<String>) -> Self {
        Self::new(CallErrorKind::Decode {
            details: details.into(),
        })
    }

    /// Creates the error reported when no usable `url` parameter was given.
    #[must_use]
    pub fn missing_url() -> Self {
        Self::validation("url parameter is required")
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::new(CallErrorKind::Validation {
            reason: reason.into(),
        })
    }

    /// Creates a request build error.
    #[must_use]
    pub fn request_build(details: impl Into<String>) -> Self {
        Self::new(CallErrorKind::RequestBuild {
            details: details.into(),
        })
    }

    /// Creates a transport error.
    #[must_use]
    pub fn transport(details: impl Into<String>) -> Self {
        Self::new(CallErrorKind::Transport {
            details: details.into(),
        })
    }

    /// Creates a response read error.
    #[must_use]
    pub fn response_read(details: impl Into<String>) -> Self {
        Self::new(CallErrorKind::ResponseRead {
            details: details.into(),
        })
    }

    /// Returns true if the input document could not be decoded.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self.kind, CallErrorKind::Decode { .. })
    }

    /// Returns true if a required parameter was missing.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, CallErrorKind::Validation { .. })
    }

    /// Returns true if the request could not be built.
    #[must_use]
    pub fn is_request_build(&self) -> bool {
        matches!(self.kind, CallErrorKind::RequestBuild { .. })
    }

    /// Returns true if the exchange failed on the wire.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, CallErrorKind::Transport { .. })
    }

    /// Returns true if the response body could not be read.
    #[must_use]
    pub fn is_response_read(&self) -> bool {
        matches!(self.kind, CallErrorKind::ResponseRead { .. })
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CallErrorKind::Decode { details } => {
                write!(f, "failed to decode input: {}", details)
            }
            CallErrorKind::Validation { reason } => write!(f, "{}", reason),
            CallErrorKind::RequestBuild { details } => {
                write!(f, "failed to create request: {}", details)
            }
            CallErrorKind::Transport { details } => write!(f, "request failed: {}", details),
            CallErrorKind::ResponseRead { details } => {
                write!(f, "failed to read response: {}", details)
            }
        }
    }
}

impl std::error::Error for CallError {}

/// Renders an error together with its chain of sources.
///
/// `reqwest` keeps the interesting part (timed out, dns error, connection
/// refused) in the source chain rather than the top-level message.
pub(crate) fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn decode_error_display() {
        let error = CallError::decode("EOF while parsing a value at line 1 column 0");
        assert_eq!(
            error.to_string(),
            "failed to decode input: EOF while parsing a value at line 1 column 0"
        );
        assert!(error.is_decode());
    }

    #[test]
    fn missing_url_display_is_exact() {
        let error = CallError::missing_url();
        assert_eq!(error.to_string(), "url parameter is required");
        assert!(error.is_validation());
    }

    #[test]
    fn request_build_error_display() {
        let error = CallError::request_build("relative URL without a base");
        assert_eq!(
            error.to_string(),
            "failed to create request: relative URL without a base"
        );
        assert!(error.is_request_build());
    }

    #[test]
    fn transport_error_display() {
        let error = CallError::transport("operation timed out");
        assert_eq!(error.to_string(), "request failed: operation timed out");
        assert!(error.is_transport());
        assert!(!error.is_response_read());
    }

    #[test]
    fn response_read_error_display() {
        let error = CallError::response_read("connection reset");
        assert_eq!(
            error.to_string(),
            "failed to read response: connection reset"
        );
        assert!(error.is_response_read());
    }

    #[test]
    fn errors_are_clone_and_eq() {
        let error1 = CallError::transport("boom");
        let error2 = error1.clone();
        assert_eq!(error1, error2);
        assert_ne!(error1, CallError::response_read("boom"));
    }

    #[derive(Debug)]
    struct Outer(io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn error_chain_appends_sources() {
        let error = Outer(io::Error::new(io::ErrorKind::TimedOut, "operation timed out"));
        assert_eq!(
            error_chain(&error),
            "error sending request: operation timed out"
        );
    }

    #[test]
    fn error_chain_skips_repeated_text() {
        let error = io::Error::new(io::ErrorKind::Other, "plain failure");
        assert_eq!(error_chain(&error), "plain failure");
    }
}
