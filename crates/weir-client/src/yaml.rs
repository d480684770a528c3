//! The YAML/JSON bridge.
//!
//! Users edit object specs as YAML; the transport API expects JSON. The
//! conversion happens here and only here, with no schema validation —
//! malformed-but-parseable specs are submitted as-is and rejected (or not)
//! by the server.

use serde::Serialize;
use weir_proto::Object;

use crate::error::ClientResult;

/// Convert YAML text to a JSON string for submission.
///
/// # Errors
///
/// Returns a parse error if the YAML is syntactically invalid.
pub fn yaml_to_json(text: &str) -> ClientResult<String> {
    let value: serde_json::Value = serde_yaml::from_str(text)?;
    Ok(serde_json::to_string(&value)?)
}

/// Parse YAML text as a managed object (name/kind plus residual fields).
///
/// # Errors
///
/// Returns a parse error if the YAML is invalid or lacks a `name`.
pub fn object_from_yaml(text: &str) -> ClientResult<Object> {
    Ok(serde_yaml::from_str(text)?)
}

/// Render a fetched value as YAML for display.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as YAML.
pub fn to_yaml<T: Serialize>(value: &T) -> ClientResult<String> {
    Ok(serde_yaml::to_string(value)?)
}
