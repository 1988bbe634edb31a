//! Claim-set construction from typed `KEY[:TYPE]=VALUE` entries or a raw
//! JSON document.

use std::fmt;
use std::str::FromStr;

use serde_json::{Number, Value};

use crate::core::json::{self, JsonObject};
use crate::error::JwtCraftError;

/// How the text value of a [`Claim`] becomes a JSON value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClaimType {
    /// Kept verbatim as a JSON string.
    #[default]
    String,
    /// A JSON number; empty text is `0`.
    Number,
    /// `true` when the text equals "true" ignoring case, else `false`.
    Boolean,
    /// Arbitrary JSON (object, array, or scalar).
    Object,
}

impl ClaimType {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" | "str" => Some(ClaimType::String),
            "number" | "num" => Some(ClaimType::Number),
            "boolean" | "bool" => Some(ClaimType::Boolean),
            "object" | "json" => Some(ClaimType::Object),
            _ => None,
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClaimType::String => "string",
            ClaimType::Number => "number",
            ClaimType::Boolean => "boolean",
            ClaimType::Object => "object",
        })
    }
}

/// A single custom claim as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// Claim name.
    pub key: String,
    /// Unconverted value text.
    pub value: String,
    /// Target JSON type.
    pub kind: ClaimType,
}

impl Claim {
    /// Convert the value text to JSON according to [`Claim::kind`].
    ///
    /// # Errors
    ///
    /// Returns [`JwtCraftError::InvalidClaim`] when a `number` is not
    /// numeric or an `object` is not valid JSON.
    pub fn to_value(&self) -> Result<Value, JwtCraftError> {
        match self.kind {
            ClaimType::String => Ok(Value::String(self.value.clone())),
            ClaimType::Boolean => Ok(Value::Bool(self.value.eq_ignore_ascii_case("true"))),
            ClaimType::Number => parse_number(&self.value).ok_or_else(|| JwtCraftError::InvalidClaim {
                key: self.key.clone(),
                reason: "Invalid number".to_string(),
            }),
            ClaimType::Object => {
                serde_json::from_str(&self.value).map_err(|_| JwtCraftError::InvalidClaim {
                    key: self.key.clone(),
                    reason: "Invalid JSON".to_string(),
                })
            }
        }
    }
}

impl FromStr for Claim {
    type Err = JwtCraftError;

    /// Parse `KEY=VALUE` or `KEY:TYPE=VALUE`. A `:suffix` that is not a
    /// type name stays part of the key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lhs, value)) = s.split_once('=') else {
            return Err(JwtCraftError::InvalidClaim {
                key: s.to_string(),
                reason: "Expected KEY[:TYPE]=VALUE".to_string(),
            });
        };

        let (key, kind) = match lhs.rsplit_once(':') {
            Some((key, name)) => match ClaimType::from_name(name) {
                Some(kind) => (key, kind),
                None => (lhs, ClaimType::String),
            },
            None => (lhs, ClaimType::String),
        };

        Ok(Claim {
            key: key.to_string(),
            value: value.to_string(),
            kind,
        })
    }
}

/// Parse a raw custom payload document.
///
/// # Errors
///
/// Returns [`JwtCraftError::InvalidPayloadJson`] with the parser message
/// when the text is malformed or not a JSON object.
pub fn parse_custom_payload(text: &str) -> Result<JsonObject, JwtCraftError> {
    json::parse_str(text).map_err(|e| JwtCraftError::InvalidPayloadJson {
        reason: e.to_string(),
    })
}

/// Build the claim set to sign.
///
/// A non-blank `custom_json` takes precedence over `claims`. Otherwise
/// each claim with a non-blank key is converted and inserted in order;
/// repeated keys keep their first position and take the last value.
///
/// # Errors
///
/// Propagates [`parse_custom_payload`] and [`Claim::to_value`] failures.
pub fn build_payload(
    custom_json: Option<&str>,
    claims: &[Claim],
) -> Result<JsonObject, JwtCraftError> {
    if let Some(text) = custom_json.filter(|text| !text.trim().is_empty()) {
        return parse_custom_payload(text);
    }

    let mut payload = JsonObject::new();
    for claim in claims.iter().filter(|claim| !claim.key.trim().is_empty()) {
        payload.insert(claim.key.clone(), claim.to_value()?);
    }
    Ok(payload)
}

fn parse_number(text: &str) -> Option<Value> {
    let text = text.trim();
    if text.is_empty() {
        return Some(Value::from(0));
    }
    if let Ok(int) = text.parse::<i64>() {
        return Some(Value::from(int));
    }

    let float = text.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        Some(Value::from(float as i64))
    } else {
        Number::from_f64(float).map(Value::Number)
    }
}
