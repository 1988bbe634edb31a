//! JWT generation: header construction, optional expiry, and HMAC signing.

use serde_json::Value;

use crate::core::base64url;
use crate::core::duration::parse_duration;
use crate::core::json::{self, JsonObject};
use crate::core::signature::{self, Algorithm};
use crate::core::time::now_millis;
use crate::error::JwtCraftError;

/// Options accepted by [`generate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignOptions {
    /// `alg` identifier; `HS256` when absent.
    pub algorithm: Option<String>,
    /// Lifetime expression such as `"1h"`; sets `exp` when present.
    pub expires_in: Option<String>,
}

impl SignOptions {
    /// Set the algorithm identifier.
    pub fn algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    /// Set the lifetime expression.
    pub fn expires_in(mut self, expires_in: impl Into<String>) -> Self {
        self.expires_in = Some(expires_in.into());
        self
    }
}

/// Sign `payload` with `secret` and return the compact token.
///
/// The caller's map is not modified; `exp` is written to a copy.
///
/// # Errors
///
/// Returns [`JwtCraftError::InvalidDuration`] for a bad `expires_in` and
/// [`JwtCraftError::UnsupportedAlgorithm`] for an algorithm outside
/// HS256/HS384/HS512.
pub fn generate(
    payload: &JsonObject,
    secret: &str,
    options: &SignOptions,
) -> Result<String, JwtCraftError> {
    generate_at(payload, secret, options, now_millis())
}

/// [`generate`] against an explicit clock reading in milliseconds.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_at(
    payload: &JsonObject,
    secret: &str,
    options: &SignOptions,
    now_ms: i64,
) -> Result<String, JwtCraftError> {
    let mut claims = payload.clone();

    if let Some(expires_in) = options.expires_in.as_deref() {
        let offset_ms = parse_duration(expires_in)?;
        let exp = now_ms
            .checked_add(offset_ms)
            .ok_or_else(|| JwtCraftError::InvalidDuration {
                expression: expires_in.to_string(),
            })?
            .div_euclid(1000);
        tracing::debug!(exp, "setting expiry claim");
        claims.insert("exp".to_string(), Value::from(exp));
    }

    let algorithm = match options.algorithm.as_deref() {
        Some(name) => name.parse::<Algorithm>()?,
        None => Algorithm::default(),
    };
    tracing::debug!(%algorithm, claims = claims.len(), "signing token");

    let signing_input = format!(
        "{}.{}",
        encode_object(&header_for(algorithm))?,
        encode_object(&claims)?
    );
    let mac = signature::sign(algorithm, secret.as_bytes(), signing_input.as_bytes())?;

    Ok(format!("{signing_input}.{}", base64url::encode(mac)))
}

/// The protected header for `algorithm`; `typ` is always `"JWT"`.
pub fn header_for(algorithm: Algorithm) -> JsonObject {
    let mut header = JsonObject::new();
    header.insert("alg".to_string(), Value::from(algorithm.as_str()));
    header.insert("typ".to_string(), Value::from("JWT"));
    header
}

fn encode_object(object: &JsonObject) -> Result<String, JwtCraftError> {
    let bytes = json::serialize(object).map_err(|e| JwtCraftError::InvalidPayloadJson {
        reason: e.to_string(),
    })?;
    Ok(base64url::encode(bytes))
}
