//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built JWT tokens with known claims for use across the
//! integration test binaries.
#![allow(dead_code)]

use std::collections::HashSet;

/// A valid HS256-signed JWT for testing.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"John Doe","iat":1516239022}`
/// Secret: [`VALID_HS256_SECRET`]
pub const VALID_HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// Secret that [`VALID_HS256_TOKEN`] was signed with.
pub const VALID_HS256_SECRET: &str = "your-256-bit-secret";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-valid-jwt";

/// An empty string for edge case testing.
pub const EMPTY_TOKEN: &str = "";

/// HMAC secret used to sign test tokens for verify tests.
pub const HMAC_TEST_SECRET: &str = "verify-test-secret-key";

/// Create a token signed with `algorithm` by an independent JWT library.
pub fn create_token(
    algorithm: jsonwebtoken::Algorithm,
    secret: &str,
    claims: &serde_json::Value,
) -> String {
    use jsonwebtoken::{EncodingKey, Header, encode};
    let header = Header::new(algorithm);
    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&header, claims, &key).unwrap()
}

/// Create an HS256-signed token with the given claims.
pub fn create_hs256_token(secret: &str, claims: &serde_json::Value) -> String {
    create_token(jsonwebtoken::Algorithm::HS256, secret, claims)
}

/// Verify and decode `token` with an independent JWT library.
///
/// Registered claims are not required and `exp` is not enforced, so only
/// the signature is checked.
pub fn independent_decode(
    algorithm: jsonwebtoken::Algorithm,
    secret: &str,
    token: &str,
) -> jsonwebtoken::errors::Result<serde_json::Value> {
    use jsonwebtoken::{DecodingKey, Validation, decode};
    let mut validation = Validation::new(algorithm);
    validation.required_spec_claims = HashSet::new();
    validation.validate_exp = false;
    let key = DecodingKey::from_secret(secret.as_bytes());
    decode::<serde_json::Value>(token, &key, &validation).map(|data| data.claims)
}

/// Standard test claims used across verify tests.
pub fn standard_claims() -> serde_json::Value {
    serde_json::json!({
        "sub": "1234567890",
        "name": "Test User",
        "iat": 1516239022
    })
}
