//! Outbound request construction.

use crate::error::CallError;
use crate::headers::parse_custom_headers;
use crate::params::RequestParams;
use reqwest::blocking::{Client, Request};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

/// Builds the request described by `params` on `client`.
///
/// GET and DELETE never carry a body. Every other method sends `body`,
/// even when it is empty.
///
/// # Errors
///
/// Returns a request build error for an unparsable URL, a scheme other
/// than http or https, an invalid method token, or an invalid header.
pub fn build_request(client: &Client, params: &RequestParams) -> Result<Request, CallError> {
    let method = parse_method(&params.method)?;
    let url = validate_url(&params.url)?;
    let headers = request_headers(params)?;

    let mut builder = client.request(method, url).headers(headers);
    if !params.is_bodyless() {
        builder = builder.body(params.body.clone());
    }

    builder
        .build()
        .map_err(|e| CallError::request_build(e.to_string()))
}

/// Parses an HTTP method token.
///
/// # Errors
///
/// Returns a request build error if the method is not a valid token.
pub fn parse_method(method: &str) -> Result<Method, CallError> {
    Method::from_bytes(method.as_bytes())
        .map_err(|e| CallError::request_build(format!("invalid method {:?}: {}", method, e)))
}

/// Parses the target URL and checks its scheme.
///
/// # Errors
///
/// Returns a request build error for a malformed URL or a scheme other
/// than http or https.
pub fn validate_url(raw: &str) -> Result<Url, CallError> {
    let url = Url::parse(raw)
        .map_err(|e| CallError::request_build(format!("parse {:?}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(CallError::request_build(format!(
            "unsupported protocol scheme {:?}",
            scheme
        ))),
    }
}

/// Computes the request headers.
///
/// `Content-Type` is set for POST, PUT and PATCH first; custom headers
/// are applied afterwards and replace any header of the same name.
///
/// # Errors
///
/// Returns a request build error for an invalid header name or value.
pub fn request_headers(params: &RequestParams) -> Result<HeaderMap, CallError> {
    let mut headers = HeaderMap::new();

    if params.sends_content_type() {
        headers.insert(CONTENT_TYPE, header_value(&params.content_type)?);
    }

    for (key, value) in parse_custom_headers(&params.headers) {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            CallError::request_build(format!("invalid header name {:?}: {}", key, e))
        })?;
        headers.insert(name, header_value(&value)?);
    }

    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, CallError> {
    HeaderValue::from_str(value).map_err(|e| {
        CallError::request_build(format!("invalid header value {:?}: {}", value, e))
    })
}
