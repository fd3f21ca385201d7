//! Error types for host configuration loading
//!
//! Only structurally unusable input is an error. Missing or malformed optional
//! fields are repaired during normalization instead.

use thiserror::Error;

/// Errors that can occur while reading the host configuration object
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration is valid JSON but not an object
    #[error("Configuration must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
