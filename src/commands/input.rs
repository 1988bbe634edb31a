//! Token and secret resolution shared by the subcommands.
//!
//! A token comes from the positional argument, else a named environment
//! variable, else stdin when stdin is not a terminal. Secrets come from
//! `--secret` or a named environment variable.

use std::io::{IsTerminal, Read};

use zeroize::Zeroizing;

use jwtcraft::error::JwtCraftError;

/// Resolve the token to operate on.
///
/// Surrounding whitespace is trimmed from every source. An empty result
/// counts as no token.
///
/// # Errors
///
/// Returns [`JwtCraftError::NoTokenProvided`] when no source yields a
/// token, or an environment-variable / stdin error.
pub fn resolve_token(
    token: Option<&str>,
    token_env: Option<&str>,
) -> Result<Zeroizing<String>, JwtCraftError> {
    let raw = match (token, token_env) {
        (Some(token), _) => Zeroizing::new(token.to_string()),
        (None, Some(name)) => read_env(name)?,
        (None, None) => read_stdin()?,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(JwtCraftError::NoTokenProvided);
    }
    Ok(Zeroizing::new(trimmed.to_string()))
}

/// Resolve the HMAC secret, if one was supplied.
///
/// # Errors
///
/// Returns an error when `secret_env` names an invalid or unset variable.
pub fn resolve_secret(
    secret: Option<&Zeroizing<String>>,
    secret_env: Option<&str>,
) -> Result<Option<Zeroizing<String>>, JwtCraftError> {
    match (secret, secret_env) {
        (Some(secret), _) => Ok(Some(secret.clone())),
        (None, Some(name)) => read_env(name).map(Some),
        (None, None) => Ok(None),
    }
}

/// Read an environment variable after validating its name.
fn read_env(name: &str) -> Result<Zeroizing<String>, JwtCraftError> {
    validate_env_var_name(name)?;
    std::env::var(name)
        .map(Zeroizing::new)
        .map_err(|_| JwtCraftError::EnvVarNotFound {
            name: name.to_string(),
        })
}

/// Names that are empty or contain `=` or NUL can never be set.
fn validate_env_var_name(name: &str) -> Result<(), JwtCraftError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(JwtCraftError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn read_stdin() -> Result<Zeroizing<String>, JwtCraftError> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(JwtCraftError::NoTokenProvided);
    }

    let mut buffer = Zeroizing::new(String::new());
    stdin
        .read_to_string(&mut buffer)
        .map_err(|e| JwtCraftError::StdinRead {
            reason: e.to_string(),
        })?;
    Ok(buffer)
}
