//! Base64url encoding and decoding (RFC 4648 §5) for JWT segments.
//!
//! Encoding never emits `=` padding. Decoding accepts input with or
//! without padding but rejects characters outside the URL-safe alphabet
//! and lengths that no amount of padding could repair.

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine, alphabet};

/// URL-safe engine that writes no padding and tolerates it on input.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// URL-safe engine that rejects any `=` padding on input.
const URL_SAFE_STRICT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// Encode bytes as unpadded base64url.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_LENIENT.encode(bytes)
}

/// Decode a base64url string into raw bytes.
///
/// # Errors
///
/// Returns the underlying [`DecodeError`] for characters outside the
/// base64url alphabet or an impossible length (`len % 4 == 1`).
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_LENIENT.decode(input)
}

/// Decode base64url that must carry no padding.
///
/// Used for the signature segment, so each MAC has exactly one accepted
/// encoding.
///
/// # Errors
///
/// Same as [`decode`], and also for any trailing `=`.
pub fn decode_unpadded(input: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_STRICT.decode(input)
}
