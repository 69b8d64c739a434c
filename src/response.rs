//! Response capture and body classification.

use crate::error::{error_chain, CallError};
use crate::headers::canonical_header_key;
use reqwest::blocking::Response;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The successful result of a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallResult {
    /// Numeric HTTP status
    pub status_code: u16,
    /// Status line text, e.g. `"200 OK"`
    pub status: String,
    /// Response headers by canonical name, values in arrival order
    pub headers: BTreeMap<String, Vec<String>>,
    /// Parsed JSON when the body is valid JSON, the raw text otherwise
    pub body: ResponseBody,
}

/// A response body: parsed JSON or plain text.
///
/// Serialized transparently, so a JSON body appears as the value itself
/// and a text body as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// The body parsed as JSON
    Json(Value),
    /// The body as text, invalid UTF-8 replaced
    Text(String),
}

impl ResponseBody {
    /// Classifies raw body bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    /// Returns true if the body parsed as JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

impl CallResult {
    /// Reads a response to completion.
    ///
    /// # Errors
    ///
    /// Returns a response read error if the body stream fails or the
    /// deadline passes while reading it.
    pub fn read(response: Response) -> Result<Self, CallError> {
        let status = response.status();
        let headers = capture_headers(response.headers());
        let bytes = response
            .bytes()
            .map_err(|e| CallError::response_read(error_chain(&e)))?;

        Ok(Self {
            status_code: status.as_u16(),
            status: status_line(status),
            headers,
            body: ResponseBody::from_bytes(&bytes),
        })
    }
}

/// Formats a status as `"<code> <reason>"`.
#[must_use]
pub fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

/// Groups headers by canonical name, keeping every value in order.
#[must_use]
pub fn capture_headers(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    let mut captured: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers {
        captured
            .entry(canonical_header_key(name.as_str()))
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    captured
}
