//! Handler for the `encode` subcommand.
//!
//! Builds a claim set from `--claim` entries or a raw `--payload`
//! document and signs it with an HMAC secret.

use anyhow::{Context, Result, bail};
use serde_json::json;

use jwtcraft::core::claims::build_payload;
use jwtcraft::core::decoder::decode_token;
use jwtcraft::core::signer::{SignOptions, generate};

use crate::cli::EncodeArgs;
use crate::commands::input::resolve_secret;
use crate::display::json_printer::print_json;

/// Execute the `encode` subcommand with the given arguments.
pub fn execute(args: &EncodeArgs) -> Result<()> {
    let Some(secret) = resolve_secret(args.secret.as_ref(), args.secret_env.as_deref())? else {
        bail!("Secret key is required: pass --secret or --secret-env");
    };
    if secret.is_empty() {
        bail!("Secret key is required: pass --secret or --secret-env");
    }

    let payload = build_payload(args.payload.as_deref(), &args.claims)?;
    let options = SignOptions {
        algorithm: Some(args.alg.clone()),
        expires_in: args.expires_in.clone(),
    };

    let token = generate(&payload, &secret, &options).context("Failed to generate token")?;
    tracing::info!(algorithm = %args.alg, "generated token");

    if args.json {
        let decoded = decode_token(&token)?;
        print_json(
            &json!({
                "token": token,
                "header": decoded.header,
                "payload": decoded.payload,
            }),
            false,
        );
    } else {
        println!("{token}");
    }
    Ok(())
}
