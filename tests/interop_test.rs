//! Interoperability tests against an independent JWT implementation.
//!
//! Tokens signed by `jsonwebtoken` must verify here, and tokens generated
//! here must verify there, for every supported HMAC algorithm.

mod common;

use jsonwebtoken::Algorithm as ExternalAlgorithm;
use serde_json::{Value, json};

use jwtcraft::core::decoder::decode;
use jwtcraft::core::json::JsonObject;
use jwtcraft::core::signer::{SignOptions, generate};
use jwtcraft::core::verifier::verify;

const ALGORITHMS: [(&str, ExternalAlgorithm); 3] = [
    ("HS256", ExternalAlgorithm::HS256),
    ("HS384", ExternalAlgorithm::HS384),
    ("HS512", ExternalAlgorithm::HS512),
];

fn claims() -> JsonObject {
    let Value::Object(object) = json!({
        "sub": "1234567890",
        "name": "Test User",
        "admin": true,
        "roles": ["reader", "writer"],
        "iat": 1516239022
    }) else {
        unreachable!()
    };
    object
}

#[test]
fn test_external_tokens_verify() {
    for (_, algorithm) in ALGORITHMS {
        let token = common::create_token(
            algorithm,
            common::HMAC_TEST_SECRET,
            &common::standard_claims(),
        );
        let result = verify(&token, common::HMAC_TEST_SECRET);
        assert!(result.verified, "{algorithm:?}: {:?}", result.error);
    }
}

#[test]
fn test_external_tokens_reject_wrong_secret() {
    for (_, algorithm) in ALGORITHMS {
        let token = common::create_token(
            algorithm,
            common::HMAC_TEST_SECRET,
            &common::standard_claims(),
        );
        let result = verify(&token, "not-the-secret");
        assert!(!result.verified);
        assert_eq!(result.error.as_deref(), Some("signature verification failed"));
    }
}

#[test]
fn test_generated_tokens_verify_externally() {
    for (name, algorithm) in ALGORITHMS {
        let options = SignOptions::default().algorithm(name);
        let token = generate(&claims(), common::HMAC_TEST_SECRET, &options).unwrap();

        let decoded = common::independent_decode(algorithm, common::HMAC_TEST_SECRET, &token)
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(decoded, Value::Object(claims()));
    }
}

#[test]
fn test_generated_tokens_fail_externally_with_wrong_secret() {
    let token = generate(&claims(), common::HMAC_TEST_SECRET, &SignOptions::default()).unwrap();
    assert!(common::independent_decode(ExternalAlgorithm::HS256, "other", &token).is_err());
}

#[test]
fn test_generated_expiry_is_accepted_externally() {
    let options = SignOptions::default().expires_in("1h");
    let token = generate(&claims(), common::HMAC_TEST_SECRET, &options).unwrap();

    let decoded =
        common::independent_decode(ExternalAlgorithm::HS256, common::HMAC_TEST_SECRET, &token)
            .unwrap();
    let exp = decoded["exp"].as_i64().unwrap();
    assert!(exp > chrono::Utc::now().timestamp());
}

#[test]
fn test_external_header_decodes() {
    let token = common::create_hs256_token(common::HMAC_TEST_SECRET, &common::standard_claims());
    let result = decode(&token);
    assert!(result.is_valid);
    assert_eq!(result.header.get("alg"), Some(&json!("HS256")));
    assert_eq!(result.header.get("typ"), Some(&json!("JWT")));
    assert_eq!(result.payload.get("name"), Some(&json!("Test User")));
}
