//! JWT decoding logic.
//!
//! Handles splitting a raw JWT string into its three parts (header,
//! payload, signature), base64url-decoding the first two, and parsing
//! them as JSON objects. The signature is never verified here.

use std::fmt;

use serde::Serialize;

use crate::core::base64url;
use crate::core::json::{self, JsonObject};
use crate::error::JwtCraftError;

/// The decoded parts of a structurally valid JWT.
///
/// Implements a custom `Debug` that redacts `payload` and `signature`
/// to prevent accidental leakage of sensitive claim data.
#[derive(Clone)]
pub struct DecodedToken {
    /// The parsed JWT header (typically contains `alg` and `typ`).
    pub header: JsonObject,
    /// The parsed JWT payload (claims).
    pub payload: JsonObject,
    /// The raw base64url-encoded signature segment.
    pub signature: String,
}

/// Custom `Debug` that redacts payload and signature to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedToken")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

/// Outcome of [`decode`]: either the decoded parts, or empty parts with
/// `is_valid == false` and the failure message.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedResult {
    /// Parsed header, empty when invalid.
    pub header: JsonObject,
    /// Parsed payload, empty when invalid.
    pub payload: JsonObject,
    /// Raw signature segment, empty when invalid.
    pub signature: String,
    /// Whether the token is structurally valid.
    pub is_valid: bool,
    /// Failure message for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<DecodedToken, JwtCraftError>> for DecodedResult {
    fn from(result: Result<DecodedToken, JwtCraftError>) -> Self {
        match result {
            Ok(decoded) => DecodedResult {
                header: decoded.header,
                payload: decoded.payload,
                signature: decoded.signature,
                is_valid: true,
                error: None,
            },
            Err(e) => DecodedResult {
                error: Some(e.to_string()),
                ..DecodedResult::default()
            },
        }
    }
}

/// Split a token into its three segments.
///
/// # Errors
///
/// Returns [`JwtCraftError::MalformedToken`] unless there are exactly three.
pub fn split_token(token: &str) -> Result<[&str; 3], JwtCraftError> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None) => Ok([header, payload, signature]),
        _ => Err(JwtCraftError::MalformedToken),
    }
}

/// Decode a raw JWT string into its constituent parts.
///
/// Splits the token on `.` separators, base64url-decodes the header
/// and payload segments, and parses them as JSON objects. The signature
/// is returned as its raw base64url-encoded string.
///
/// # Errors
///
/// Returns an error if the token doesn't have exactly three parts,
/// if base64url decoding fails, or if JSON parsing fails.
pub fn decode_token(token: &str) -> Result<DecodedToken, JwtCraftError> {
    let [header_b64, payload_b64, signature] = split_token(token)?;
    tracing::trace!(
        header_len = header_b64.len(),
        payload_len = payload_b64.len(),
        signature_len = signature.len(),
        "split token"
    );

    let header = decode_segment(header_b64, "header")?;
    let payload = decode_segment(payload_b64, "payload")?;

    Ok(DecodedToken {
        header,
        payload,
        signature: signature.to_string(),
    })
}

/// Decode a token into a [`DecodedResult`], never failing.
pub fn decode(token: &str) -> DecodedResult {
    decode_token(token).into()
}

/// Base64url-decode a segment and parse it as a JSON object.
pub(crate) fn decode_segment(encoded: &str, segment_name: &str) -> Result<JsonObject, JwtCraftError> {
    let bytes = base64url::decode(encoded).map_err(|e| JwtCraftError::DecodeError {
        segment: segment_name.to_string(),
        reason: e.to_string(),
    })?;

    json::parse(&bytes).map_err(|e| JwtCraftError::ParseError {
        segment: segment_name.to_string(),
        reason: e.to_string(),
    })
}
