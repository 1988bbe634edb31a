//! JWT signature verification logic.
//!
//! Recomputes the HMAC over `header.payload` with the algorithm named in
//! the token header and compares it to the signature segment in constant
//! time. Expiry and not-before claims are not consulted: a verified
//! token may still be expired.

use serde::Serialize;
use serde_json::Value;

use crate::core::base64url;
use crate::core::decoder::{decode_segment, split_token};
use crate::core::signature::{self, Algorithm};
use crate::error::JwtCraftError;

/// The result of a signature verification attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    /// Whether the signature matches.
    pub verified: bool,
    /// Failure reason when `verified` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<(), JwtCraftError>> for VerificationResult {
    fn from(result: Result<(), JwtCraftError>) -> Self {
        match result {
            Ok(()) => VerificationResult {
                verified: true,
                error: None,
            },
            Err(e) => VerificationResult {
                verified: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Verify `token` against `secret`, reporting the outcome as a value.
pub fn verify(token: &str, secret: &str) -> VerificationResult {
    let result = verify_signature(token, secret);
    match &result {
        Ok(()) => tracing::debug!("signature verified"),
        Err(e) => tracing::debug!(reason = %e, "signature not verified"),
    }
    result.into()
}

/// Verify `token` against `secret`.
///
/// # Errors
///
/// Returns [`JwtCraftError::MissingCredentials`] for an empty token or
/// secret, structural errors from decoding, an unsupported or missing
/// `alg`, or [`JwtCraftError::SignatureMismatch`].
pub fn verify_signature(token: &str, secret: &str) -> Result<(), JwtCraftError> {
    if token.is_empty() || secret.is_empty() {
        return Err(JwtCraftError::MissingCredentials);
    }

    let [header_b64, payload_b64, signature_b64] = split_token(token)?;
    let header = decode_segment(header_b64, "header")?;
    decode_segment(payload_b64, "payload")?;

    let algorithm = header_algorithm(header.get("alg"))?;
    tracing::debug!(%algorithm, "verifying signature");

    let provided =
        base64url::decode_unpadded(signature_b64).map_err(|e| JwtCraftError::DecodeError {
            segment: "signature".to_string(),
            reason: e.to_string(),
        })?;

    let signing_input = format!("{header_b64}.{payload_b64}");
    let expected = signature::sign(algorithm, secret.as_bytes(), signing_input.as_bytes())?;

    if signature::verify_equal(&expected, &provided) {
        Ok(())
    } else {
        Err(JwtCraftError::SignatureMismatch)
    }
}

fn header_algorithm(alg: Option<&Value>) -> Result<Algorithm, JwtCraftError> {
    match alg {
        Some(Value::String(name)) => name.parse(),
        Some(other) => Err(JwtCraftError::UnsupportedAlgorithm {
            algorithm: other.to_string(),
        }),
        None => Err(JwtCraftError::UnsupportedAlgorithm {
            algorithm: "(missing)".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::json::JsonObject;
    use crate::core::signer::{SignOptions, generate};
    use proptest::prelude::*;
    use serde_json::json;

    fn sample_payload() -> JsonObject {
        let Value::Object(object) = json!({"sub": "1234567890", "name": "John Doe", "admin": true})
        else {
            unreachable!()
        };
        object
    }

    fn token_with(algorithm: &str, secret: &str) -> String {
        let options = SignOptions::default().algorithm(algorithm);
        generate(&sample_payload(), secret, &options).unwrap()
    }

    #[test]
    fn test_verify_generated_token_for_each_algorithm() {
        for algorithm in ["HS256", "HS384", "HS512"] {
            let result = verify(&token_with(algorithm, "my-secret"), "my-secret");
            assert_eq!(
                result,
                VerificationResult {
                    verified: true,
                    error: None
                }
            );
        }
    }

    #[test]
    fn test_verify_jwt_io_example() {
        let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
                     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";
        assert!(verify(token, "your-256-bit-secret").verified);
    }

    #[test]
    fn test_wrong_secret_fails_with_mismatch() {
        let result = verify(&token_with("HS256", "my-secret"), "other-secret");
        assert!(!result.verified);
        assert_eq!(result.error.as_deref(), Some("signature verification failed"));
    }

    #[test]
    fn test_empty_token_or_secret_is_rejected() {
        let expected = Some("Token and secret key are required");
        assert_eq!(verify("", "secret").error.as_deref(), expected);
        assert_eq!(verify(&token_with("HS256", "s"), "").error.as_deref(), expected);
    }

    #[test]
    fn test_wrong_segment_count_is_rejected() {
        let result = verify("a.b", "secret");
        assert!(!result.verified);
        assert_eq!(result.error.as_deref(), Some("Invalid token format"));
    }

    #[test]
    fn test_tampered_payload_fails() {
        let token = token_with("HS256", "my-secret");
        let [header, _, sig] = split_token(&token).unwrap();
        let forged_payload = base64url::encode(br#"{"sub":"1234567890","name":"John Doe","admin":false}"#);
        let forged = format!("{header}.{forged_payload}.{sig}");
        assert!(matches!(
            verify_signature(&forged, "my-secret"),
            Err(JwtCraftError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_changing_any_payload_character_fails() {
        let token = token_with("HS256", "my-secret");
        let [header, payload, sig] = split_token(&token).unwrap();
        for index in 0..payload.len() {
            let mut chars: Vec<char> = payload.chars().collect();
            chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
            let tampered: String = chars.into_iter().collect();
            let forged = format!("{header}.{tampered}.{sig}");
            assert!(!verify(&forged, "my-secret").verified, "index {index}");
        }
    }

    #[test]
    fn test_tampered_header_algorithm_fails() {
        let token = token_with("HS256", "my-secret");
        let [_, payload, sig] = split_token(&token).unwrap();
        let header = base64url::encode(br#"{"alg":"HS512","typ":"JWT"}"#);
        let forged = format!("{header}.{payload}.{sig}");
        assert!(!verify(&forged, "my-secret").verified);
    }

    #[test]
    fn test_padded_signature_is_rejected() {
        let token = token_with("HS256", "my-secret");
        assert!(verify(&token, "my-secret").verified);

        let padded = format!("{token}=");
        let result = verify_signature(&padded, "my-secret");
        assert!(matches!(
            result,
            Err(JwtCraftError::DecodeError { segment, .. }) if segment == "signature"
        ));
    }

    #[test]
    fn test_truncated_signature_fails() {
        let token = token_with("HS256", "my-secret");
        let truncated = &token[..token.len() - 4];
        assert!(!verify(truncated, "my-secret").verified);
    }

    #[test]
    fn test_unsupported_algorithm_is_reported() {
        // {"alg":"none"} . {} . (empty)
        let result = verify("eyJhbGciOiJub25lIn0.e30.", "secret");
        assert!(!result.verified);
        assert_eq!(result.error.as_deref(), Some("unsupported algorithm: none"));
    }

    #[test]
    fn test_missing_algorithm_is_reported() {
        // {"typ":"JWT"} . {}
        let result = verify("eyJ0eXAiOiJKV1QifQ.e30.sig", "secret");
        assert!(!result.verified);
        assert!(result.error.unwrap().contains("(missing)"));
    }

    #[test]
    fn test_invalid_payload_is_reported() {
        let result = verify("eyJhbGciOiJIUzI1NiJ9.bm90IGpzb24.sig", "secret");
        assert!(!result.verified);
        assert!(result.error.unwrap().contains("payload"));
    }

    #[test]
    fn test_non_base64_signature_is_reported() {
        let token = token_with("HS256", "my-secret");
        let [header, payload, _] = split_token(&token).unwrap();
        let result = verify(&format!("{header}.{payload}.!!!"), "my-secret");
        assert!(!result.verified);
        assert!(result.error.unwrap().contains("signature"));
    }

    #[test]
    fn test_expired_token_still_verifies() {
        let mut payload = sample_payload();
        payload.insert("exp".to_string(), json!(1));
        let token = generate(&payload, "s", &SignOptions::default()).unwrap();
        assert!(verify(&token, "s").verified);
    }

    #[test]
    fn test_verification_result_serializes() {
        let value = serde_json::to_value(verify("a.b", "s")).unwrap();
        assert_eq!(value, json!({"verified": false, "error": "Invalid token format"}));
    }

    fn claim_map() -> impl Strategy<Value = JsonObject> {
        prop::collection::vec(
            (
                "[a-z]{1,8}",
                prop_oneof![
                    any::<i64>().prop_map(Value::from),
                    any::<bool>().prop_map(Value::from),
                    ".{0,16}".prop_map(Value::from),
                ],
            ),
            0..6,
        )
        .prop_map(|entries| entries.into_iter().collect())
    }

    fn algorithm_name() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("HS256"), Just("HS384"), Just("HS512")]
    }

    proptest! {
        #[test]
        fn prop_generated_tokens_verify(
            payload in claim_map(),
            secret in "[a-zA-Z0-9_-]{1,32}",
            algorithm in algorithm_name(),
        ) {
            let options = SignOptions::default().algorithm(algorithm);
            let token = generate(&payload, &secret, &options).unwrap();
            prop_assert!(verify(&token, &secret).verified);
        }

        #[test]
        fn prop_other_secret_never_verifies(
            payload in claim_map(),
            secret in "[a-zA-Z0-9_-]{1,32}",
            other in "[a-zA-Z0-9_-]{1,32}",
        ) {
            prop_assume!(secret != other);
            let token = generate(&payload, &secret, &SignOptions::default()).unwrap();
            prop_assert!(!verify(&token, &other).verified);
        }

        #[test]
        fn prop_payload_round_trips(payload in claim_map(), secret in "[a-zA-Z0-9_-]{1,32}") {
            let token = generate(&payload, &secret, &SignOptions::default()).unwrap();
            let decoded = crate::core::decoder::decode(&token);
            prop_assert!(decoded.is_valid);
            prop_assert_eq!(decoded.payload, payload);
        }
    }
}
