//! The request executor.
//!
//! Runs one call end to end: decode the input document, resolve the
//! parameters, build and send the request, then read the response.
//! Every stage either hands its value to the next or stops the call with
//! a [`CallError`].

use crate::config::ExecutorConfig;
use crate::error::{error_chain, CallError};
use crate::input::{decode_input, Input};
use crate::output::Output;
use crate::params::RequestParams;
use crate::request::build_request;
use crate::response::CallResult;
use reqwest::blocking::Client;

/// Executes a single HTTP call described by an input document.
///
/// The executor is synchronous and blocking. Each call builds its own
/// client so the resolved timeout covers connect, send, and body read.
#[derive(Debug, Clone, Default)]
pub struct RequestExecutor {
    config: ExecutorConfig,
}

impl RequestExecutor {
    /// Creates an executor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an executor with the given configuration.
    #[must_use]
    pub fn with_config(config: ExecutorConfig) -> Self {
        Self { config }
    }

    /// Returns the executor configuration.
    #[must_use]
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Runs a call from raw input bytes and always produces an output document.
    #[must_use]
    pub fn execute(&self, input: &[u8]) -> Output {
        let outcome = decode_input(input).and_then(|input| self.call(&input));
        if let Err(ref e) = outcome {
            tracing::warn!(error = %e, "HTTP call failed");
        }
        Output::from(outcome)
    }

    /// Runs a call from a decoded input document.
    ///
    /// # Errors
    ///
    /// Returns the error of the first stage that failed.
    pub fn call(&self, input: &Input) -> Result<CallResult, CallError> {
        let params = RequestParams::resolve(&input.params, &self.config)?;
        self.send(&params)
    }

    /// Sends the request described by resolved parameters.
    ///
    /// # Errors
    ///
    /// Returns a request build, transport, or response read error.
    pub fn send(&self, params: &RequestParams) -> Result<CallResult, CallError> {
        tracing::debug!(
            method = %params.method,
            url = %params.url,
            timeout_secs = params.timeout_secs,
            "Sending HTTP request"
        );

        let client = Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .timeout(params.timeout())
            .build()
            .map_err(|e| CallError::request_build(error_chain(&e)))?;

        let request = build_request(&client, params)?;

        let response = client.execute(request).map_err(|e| {
            if e.is_builder() {
                CallError::request_build(error_chain(&e))
            } else {
                CallError::transport(error_chain(&e))
            }
        })?;

        let result = CallResult::read(response)?;

        tracing::info!(
            method = %params.method,
            url = %params.url,
            status = result.status_code,
            json_body = result.body.is_json(),
            "HTTP request completed"
        );

        Ok(result)
    }
}
