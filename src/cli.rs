//! CLI argument definitions for jwtcraft.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! `DecodeArgs`, `EncodeArgs`, and `VerifyArgs` implement custom `Debug`
//! to redact sensitive fields (tokens, secrets, and claim values) and
//! prevent accidental leakage through debug formatting, error chains,
//! or logging.

use std::fmt;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use zeroize::Zeroizing;

use jwtcraft::core::claims::Claim;

/// An offline-first CLI for decoding, generating, and verifying
/// HMAC-signed JSON Web Tokens (JWTs).
#[derive(Debug, Parser)]
#[command(name = "jwtcraft")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (-v, -vv, -vvv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl Cli {
    /// Log level implied by `--quiet` and the `-v` count.
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode and inspect a JWT without verifying its signature.
    Decode(DecodeArgs),
    /// Generate a new HMAC-signed JWT.
    Encode(EncodeArgs),
    /// Verify a JWT's HMAC signature using a shared secret.
    Verify(VerifyArgs),
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The JWT token to decode. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts the token field to prevent accidental leakage.
impl fmt::Debug for DecodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `encode` subcommand.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// HMAC shared secret used to sign the token.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME", conflicts_with = "secret")]
    pub secret_env: Option<String>,

    /// Signing algorithm: HS256, HS384, or HS512.
    #[arg(long, value_name = "ALG", default_value = "HS256")]
    pub alg: String,

    /// Lifetime of the token, e.g. "30m", "1h", "2d", "1w".
    ///
    /// A bare number is a count of seconds. Sets the `exp` claim,
    /// replacing any `exp` given as a claim.
    #[arg(long = "exp", value_name = "DURATION")]
    pub expires_in: Option<String>,

    /// Add a claim as KEY=VALUE or KEY:TYPE=VALUE.
    ///
    /// TYPE is one of string (default), number, bool, or json.
    /// May be repeated; claims are written in the order given.
    #[arg(long = "claim", value_name = "KEY[:TYPE]=VALUE", value_parser = parse_claim)]
    pub claims: Vec<Claim>,

    /// Use this JSON object as the whole payload instead of --claim.
    #[arg(long, value_name = "JSON")]
    pub payload: Option<String>,

    /// Output the token with its header and payload as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts the secret and claim values.
impl fmt::Debug for EncodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeArgs")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("alg", &self.alg)
            .field("expires_in", &self.expires_in)
            .field(
                "claims",
                &self.claims.iter().map(|c| c.key.as_str()).collect::<Vec<_>>(),
            )
            .field("payload", &self.payload.as_ref().map(|_| "[REDACTED]"))
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `verify` subcommand.
#[derive(clap::Args)]
pub struct VerifyArgs {
    /// The JWT token to verify. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// HMAC shared secret for signature validation.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env or piping via stdin instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME", conflicts_with = "secret")]
    pub secret_env: Option<String>,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}

fn parse_claim(s: &str) -> Result<Claim, String> {
    s.parse().map_err(|e: jwtcraft::error::JwtCraftError| e.to_string())
}

/// Custom `Debug` that redacts token and secret fields to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for VerifyArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("json", &self.json)
            .finish()
    }
}
