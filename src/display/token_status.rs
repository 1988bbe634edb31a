//! Token status display for temporal claims.
//!
//! Renders human-readable status information for JWT temporal claims
//! (`exp`, `iat`, `nbf`) including expiry status with color coding.

use colored::Colorize;

use jwtcraft::core::json::JsonObject;
use jwtcraft::core::time::{claim_seconds, format_timestamp, is_expired_at, now_millis};

/// Display the temporal status of a JWT's claims.
///
/// Examines `exp`, `iat`, and `nbf` claims in the payload and prints
/// human-readable status information:
/// - Expired tokens: red "EXPIRED (X ago)"
/// - Valid tokens: green "VALID (expires in X)"
/// - Not-yet-valid tokens: yellow "NOT YET VALID (valid in X)"
pub fn display_token_status(payload: &JsonObject) {
    for line in token_status_lines(payload, now_millis()) {
        println!("{line}");
    }
}

/// Build the status lines for `payload` as of `now_ms`.
pub fn token_status_lines(payload: &JsonObject, now_ms: i64) -> Vec<String> {
    let now_secs = now_ms.div_euclid(1000);
    let mut lines = Vec::new();

    if let Some(iat) = claim_seconds(payload.get("iat")) {
        lines.push(format!("Issued at:  {}", format_timestamp(Some(iat))));
    }

    if let Some(nbf) = claim_seconds(payload.get("nbf")) {
        let status = if is_expired_at(Some(nbf), now_ms) {
            "ACTIVE".green().to_string()
        } else {
            let wait = format_span((nbf as i64).saturating_sub(now_secs));
            format!("NOT YET VALID (valid in {wait})").yellow().to_string()
        };
        lines.push(format!(
            "Not before: {} {status}",
            format_timestamp(Some(nbf))
        ));
    }

    match claim_seconds(payload.get("exp")) {
        Some(exp) => {
            let status = if is_expired_at(Some(exp), now_ms) {
                let ago = format_span(now_secs.saturating_sub(exp as i64));
                format!("EXPIRED ({ago} ago)").red().to_string()
            } else {
                let left = format_span((exp as i64).saturating_sub(now_secs));
                format!("VALID (expires in {left})").green().to_string()
            };
            lines.push(format!(
                "Expires:    {} {status}",
                format_timestamp(Some(exp))
            ));
        }
        None => lines.push("Expires:    never (no exp claim)".to_string()),
    }

    lines
}

/// Format a span of seconds as its two most significant units.
fn format_span(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let units = [
        ("d", seconds / 86_400),
        ("h", seconds % 86_400 / 3_600),
        ("m", seconds % 3_600 / 60),
        ("s", seconds % 60),
    ];

    let parts: Vec<String> = units
        .iter()
        .skip_while(|(_, n)| *n == 0)
        .take(2)
        .filter(|(_, n)| *n > 0)
        .map(|(unit, n)| format!("{n}{unit}"))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}
