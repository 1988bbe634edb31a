//! jwtcraft: decode, generate, and verify HMAC-signed JSON Web Tokens.
//!
//! The library half of the crate holds the token engine. The `jwtcraft`
//! binary layers argument parsing and terminal rendering on top of it.
//!
//! ```
//! use jwtcraft::core::json::JsonObject;
//! use jwtcraft::core::signer::{SignOptions, generate};
//! use jwtcraft::core::verifier::verify;
//!
//! let mut claims = JsonObject::new();
//! claims.insert("sub".into(), "1234567890".into());
//! let token = generate(&claims, "secret", &SignOptions::default()).unwrap();
//! assert!(verify(&token, "secret").verified);
//! ```

#![forbid(unsafe_code)]

pub mod core;
pub mod error;
