//! The output document written to stdout.

use crate::error::CallError;
use crate::response::CallResult;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Output document. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// The response, on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<CallResult>,
    /// A human-readable failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Output {
    /// Creates a successful output.
    #[must_use]
    pub fn success(result: CallResult) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    /// Creates a failed output.
    #[must_use]
    pub fn failure(error: &CallError) -> Self {
        Self {
            result: None,
            error: Some(error.to_string()),
        }
    }

    /// Returns true if this output carries an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Writes the document followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, mut writer: W, pretty: bool) -> io::Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl From<Result<CallResult, CallError>> for Output {
    fn from(outcome: Result<CallResult, CallError>) -> Self {
        match outcome {
            Ok(result) => Self::success(result),
            Err(error) => Self::failure(&error),
        }
    }
}
