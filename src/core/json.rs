//! Compact JSON serialization and object parsing for header and claims.
//!
//! `serde_json` is built with `preserve_order`, so [`Map`] iterates in
//! insertion order and [`serialize`] reproduces that order byte-for-byte.
//! Two signers that insert the same keys in the same order therefore
//! produce identical signing input.

use serde_json::{Map, Value};
use thiserror::Error;

/// A JSON object: the shape of a JWT header or claim set.
pub type JsonObject = Map<String, Value>;

/// Why a byte sequence could not be turned into a [`JsonObject`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// The input is not well-formed JSON.
    #[error("{0}")]
    Syntax(String),
    /// The input is valid JSON whose top level is not an object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Serialize an object as compact JSON (no insignificant whitespace).
///
/// # Errors
///
/// Propagates `serde_json` failures; a `Map<String, Value>` cannot
/// normally fail to serialize.
pub fn serialize(object: &JsonObject) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(object)
}

/// Parse bytes as JSON, requiring an object at the top level.
///
/// # Errors
///
/// Returns [`JsonError::Syntax`] with the parser's message for malformed
/// input, or [`JsonError::NotAnObject`] for arrays and scalars.
pub fn parse(bytes: &[u8]) -> Result<JsonObject, JsonError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| JsonError::Syntax(e.to_string()))?;
    into_object(value)
}

/// Parse JSON text, requiring an object at the top level.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_str(text: &str) -> Result<JsonObject, JsonError> {
    parse(text.as_bytes())
}

fn into_object(value: Value) -> Result<JsonObject, JsonError> {
    match value {
        Value::Object(object) => Ok(object),
        Value::Array(_) => Err(JsonError::NotAnObject("an array")),
        Value::String(_) => Err(JsonError::NotAnObject("a string")),
        Value::Number(_) => Err(JsonError::NotAnObject("a number")),
        Value::Bool(_) => Err(JsonError::NotAnObject("a boolean")),
        Value::Null => Err(JsonError::NotAnObject("null")),
    }
}
