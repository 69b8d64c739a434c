//! # http-call: one-shot HTTP request adapter
//!
//! Reads a JSON parameter document, issues exactly one HTTP request built
//! from it, and reports the outcome as a JSON document. Intended to be
//! invoked by a workflow or automation engine that passes call parameters
//! on stdin and reads a structured reply from stdout.
//!
//! ## Pipeline
//!
//! - **Input**: `{"params": [{"inputname": "url", "compvalue": "..."}]}`
//! - **Params**: named values resolved into a [`RequestParams`]
//! - **Request**: method, headers, and body assembled on a blocking client
//! - **Response**: status, headers, and a JSON-or-text body
//! - **Output**: `{"result": {...}}` or `{"error": "..."}`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use http_call::prelude::*;
//!
//! let input = br#"{"params":[{"inputname":"url","compvalue":"https://example.com"}]}"#;
//! let output = RequestExecutor::new().execute(input);
//! output.write_to(std::io::stdout(), false).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod headers;
pub mod input;
pub mod logging;
pub mod output;
pub mod params;
pub mod request;
pub mod response;

pub use config::ExecutorConfig;
pub use error::{CallError, CallErrorKind};
pub use executor::RequestExecutor;
pub use input::{decode_input, Input, Param};
pub use output::Output;
pub use params::RequestParams;
pub use response::{CallResult, ResponseBody};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::ExecutorConfig;
    pub use crate::error::{CallError, CallErrorKind};
    pub use crate::executor::RequestExecutor;
    pub use crate::input::{Input, Param};
    pub use crate::logging::{init_logging, LogLevel, LoggingConfig};
    pub use crate::output::Output;
    pub use crate::response::{CallResult, ResponseBody};
}
