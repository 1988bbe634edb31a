//! Domain error types for jwtcraft.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary,
//! or folded into the `error` field of a decode/verify result.

use thiserror::Error;

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtCraftError {
    /// The provided token does not have exactly three period-separated parts.
    #[error("Invalid token format")]
    MalformedToken,

    /// Failed to decode a base64url-encoded token segment.
    #[error("failed to decode {segment}: invalid base64url encoding ({reason})")]
    DecodeError {
        /// Which segment failed to decode (e.g., "header", "payload").
        segment: String,
        /// The underlying decoder message.
        reason: String,
    },

    /// Decoded segment content is not a JSON object.
    #[error("failed to parse {segment} as JSON: {reason}")]
    ParseError {
        /// Which segment failed to parse (e.g., "header", "payload").
        segment: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// The algorithm is outside the supported HMAC family.
    #[error("unsupported algorithm: {algorithm}")]
    UnsupportedAlgorithm {
        /// The algorithm identifier that was encountered.
        algorithm: String,
    },

    /// A caller-supplied custom JSON payload could not be used as a claim set.
    #[error("Invalid JSON in custom payload: {reason}")]
    InvalidPayloadJson {
        /// Description of the parsing failure.
        reason: String,
    },

    /// A typed custom claim could not be converted to its declared type.
    #[error("{reason} for claim: {key}")]
    InvalidClaim {
        /// The claim name.
        key: String,
        /// Description of the conversion failure.
        reason: String,
    },

    /// Verification was requested without a token or without a secret.
    #[error("Token and secret key are required")]
    MissingCredentials,

    /// The recomputed signature does not match the token's signature.
    #[error("signature verification failed")]
    SignatureMismatch,

    /// The HMAC key could not be initialized.
    #[error("invalid signing key: {reason}")]
    InvalidKey {
        /// Why the key was rejected.
        reason: String,
    },

    /// An `expiresIn` expression is neither `<n><unit>` nor a bare integer.
    #[error("invalid duration '{expression}': expected '<number>[s|m|h|d|w]' or a number of seconds")]
    InvalidDuration {
        /// The expression that failed to parse.
        expression: String,
    },

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The specified environment variable name cannot be looked up.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name.
        name: String,
    },

    /// Reading the token from stdin failed.
    #[error("failed to read token from stdin: {reason}")]
    StdinRead {
        /// Description of the I/O failure.
        reason: String,
    },
}
