//! Handler for the `decode` subcommand.
//!
//! Decodes and pretty-prints a JWT's header and payload without
//! verifying its signature. Supports reading the token from a CLI
//! argument, environment variable, or stdin.

use anyhow::{Result, anyhow};
use colored::Colorize;
use serde_json::{Value, json};

use jwtcraft::core::decoder::{DecodedResult, decode};

use crate::cli::DecodeArgs;
use crate::commands::input::resolve_token;
use crate::display::json_printer::print_json;
use crate::display::token_status::display_token_status;

/// Execute the `decode` subcommand with the given arguments.
pub fn execute(args: &DecodeArgs) -> Result<()> {
    let token = resolve_token(args.token.as_deref(), args.token_env.as_deref())?;
    let result = decode(&token);

    if !result.is_valid {
        let message = result.error.unwrap_or_else(|| "Invalid token format".to_string());
        return Err(anyhow!(message));
    }
    tracing::info!("decoded token structure");

    if args.json {
        print_json(
            &json!({
                "header": result.header,
                "payload": result.payload,
                "signature": result.signature,
            }),
            false,
        );
    } else {
        print_decoded(&result);
    }
    Ok(())
}

/// Print the human-readable sections for a structurally valid token.
pub fn print_decoded(result: &DecodedResult) {
    section("Header");
    print_json(&Value::Object(result.header.clone()), true);
    println!();

    section("Payload");
    print_json(&Value::Object(result.payload.clone()), true);
    println!();

    section("Signature");
    println!("{}", result.signature.dimmed());
    println!();

    section("Token Status");
    display_token_status(&result.payload);
}

fn section(title: &str) {
    println!("{}", format!("--- {title} ---").bold());
}
