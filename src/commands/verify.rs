//! Handler for the `verify` subcommand.
//!
//! Verifies a JWT's HMAC signature using a shared secret. The decoded
//! header, payload, and temporal status are shown alongside the result;
//! an expired token with a good signature still verifies.

use anyhow::Result;
use colored::Colorize;

use jwtcraft::core::decoder::decode;
use jwtcraft::core::verifier::verify;

use crate::cli::VerifyArgs;
use crate::commands::decode::print_decoded;
use crate::commands::input::{resolve_secret, resolve_token};
use crate::display::json_printer::print_json;

/// Execute the `verify` subcommand with the given arguments.
///
/// Returns whether the signature verified.
pub fn execute(args: &VerifyArgs) -> Result<bool> {
    let token = resolve_token(args.token.as_deref(), args.token_env.as_deref())?;
    let secret = resolve_secret(args.secret.as_ref(), args.secret_env.as_deref())?;
    let secret = secret.as_ref().map_or("", |s| s.as_str());

    let result = verify(&token, secret);
    tracing::info!(verified = result.verified, "verification finished");

    if args.json {
        print_json(&serde_json::to_value(&result)?, false);
        return Ok(result.verified);
    }

    match &result.error {
        None => println!("Signature: {}", "VERIFIED".green().bold()),
        Some(reason) => println!("Signature: {} ({reason})", "INVALID".red().bold()),
    }

    let decoded = decode(&token);
    if decoded.is_valid {
        println!();
        print_decoded(&decoded);
    }

    Ok(result.verified)
}
