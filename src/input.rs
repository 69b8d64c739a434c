//! Input document decoding.
//!
//! The orchestrator hands over call parameters as
//! `{"params": [{"inputname": "...", "compvalue": "..."}, ...]}`.

use crate::error::CallError;
use serde::{Deserialize, Deserializer, Serialize};

/// The decoded input document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    /// Named parameters, in the order the orchestrator sent them
    #[serde(default, deserialize_with = "params_or_empty")]
    pub params: Vec<Param>,
}

/// One named parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name, matched case-sensitively
    #[serde(default, rename = "inputname", deserialize_with = "null_as_default")]
    pub input_name: String,
    /// Parameter value, always a string
    #[serde(default, rename = "compvalue", deserialize_with = "null_as_default")]
    pub comp_value: String,
}

/// Reads `null` as the type's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a `null` list, or `null` entries within it, as empty.
fn params_or_empty<'de, D>(deserializer: D) -> Result<Vec<Param>, D::Error>
where
    D: Deserializer<'de>,
{
    let params: Option<Vec<Option<Param>>> = Option::deserialize(deserializer)?;
    Ok(params
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

impl Input {
    /// Creates an input document from `(name, value)` pairs.
    #[must_use]
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            params: pairs
                .into_iter()
                .map(|(name, value)| Param::new(name, value))
                .collect(),
        }
    }
}

impl Param {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(input_name: impl Into<String>, comp_value: impl Into<String>) -> Self {
        Self {
            input_name: input_name.into(),
            comp_value: comp_value.into(),
        }
    }
}

/// Decodes the first JSON document in `bytes`.
///
/// Anything after the first complete document is ignored. Empty or
/// whitespace-only input is an error; a bare `null` document is an
/// empty one.
///
/// # Errors
///
/// Returns a decode error if the bytes do not start with a valid input
/// document.
pub fn decode_input(bytes: &[u8]) -> Result<Input, CallError> {
    let mut documents =
        serde_json::Deserializer::from_slice(bytes).into_iter::<Option<Input>>();
    match documents.next() {
        Some(Ok(input)) => Ok(input.unwrap_or_default()),
        Some(Err(e)) => Err(CallError::decode(e.to_string())),
        None => Err(CallError::decode("EOF")),
    }
}
