//! Core business logic for JWT operations.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are pure, hold no shared state, and are
//! testable without the CLI layer.

pub mod base64url;
pub mod claims;
pub mod decoder;
pub mod duration;
pub mod json;
pub mod signature;
pub mod signer;
pub mod time;
pub mod verifier;
