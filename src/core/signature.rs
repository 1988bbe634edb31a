//! HMAC signing primitives for the HS256/HS384/HS512 family.
//!
//! The secret is used as raw key bytes with no derivation step. Digest
//! comparison goes through `subtle` so the time taken does not depend
//! on where two equal-length signatures first differ.

use std::fmt;
use std::str::FromStr;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

use crate::error::JwtCraftError;

/// A supported JWS signing algorithm. The set is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC using SHA-256.
    #[default]
    HS256,
    /// HMAC using SHA-384.
    HS384,
    /// HMAC using SHA-512.
    HS512,
}

impl Algorithm {
    /// The `alg` header value for this algorithm.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = JwtCraftError;

    /// Identifiers are case-sensitive, as in the JWS registry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            other => Err(JwtCraftError::UnsupportedAlgorithm {
                algorithm: other.to_string(),
            }),
        }
    }
}

/// Compute the HMAC of `message` under `key` with the given algorithm.
///
/// # Errors
///
/// Returns [`JwtCraftError::InvalidKey`] if the MAC rejects the key.
/// HMAC takes keys of any length, so this does not happen for the
/// supported algorithms.
pub fn sign(
    algorithm: Algorithm,
    key: &[u8],
    message: &[u8],
) -> Result<Vec<u8>, JwtCraftError> {
    match algorithm {
        Algorithm::HS256 => mac::<Hmac<Sha256>>(key, message),
        Algorithm::HS384 => mac::<Hmac<Sha384>>(key, message),
        Algorithm::HS512 => mac::<Hmac<Sha512>>(key, message),
    }
}

/// Compare two byte strings without an early exit on the first difference.
///
/// Slices of different length compare unequal.
pub fn verify_equal(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

fn mac<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Result<Vec<u8>, JwtCraftError> {
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|e| JwtCraftError::InvalidKey {
        reason: e.to_string(),
    })?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
