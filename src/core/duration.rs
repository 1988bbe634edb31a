//! Short human duration strings (`"30s"`, `"1h"`, `"2d"`) for `exp` claims.
//!
//! Grammar: one or more ASCII digits followed by a single unit letter
//! from `s`, `m`, `h`, `d`, `w`. Anything else falls back to a bare
//! leading integer interpreted as **seconds**, so `"90"` is ninety
//! seconds and `"15min"` is fifteen seconds. Inputs with no leading
//! integer at all are rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::JwtCraftError;

static DURATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)([smhdw])$").expect("Invalid duration regex pattern"));

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

/// Parse a duration expression into milliseconds.
///
/// # Errors
///
/// Returns [`JwtCraftError::InvalidDuration`] when neither the unit
/// grammar nor the bare-integer fallback yields a number, or when the
/// result does not fit in an `i64`.
pub fn parse_duration(expression: &str) -> Result<i64, JwtCraftError> {
    let invalid = || JwtCraftError::InvalidDuration {
        expression: expression.to_string(),
    };

    let (value, factor) = match DURATION_REGEX.captures(expression) {
        Some(caps) => {
            let value: i64 = caps[1].parse().map_err(|_| invalid())?;
            let factor = match &caps[2] {
                "s" => MS_PER_SECOND,
                "m" => MS_PER_MINUTE,
                "h" => MS_PER_HOUR,
                "d" => MS_PER_DAY,
                "w" => MS_PER_WEEK,
                _ => MS_PER_SECOND,
            };
            (value, factor)
        }
        None => {
            let value = leading_integer(expression).ok_or_else(invalid)?;
            tracing::debug!(expression, "duration has no unit, treating as seconds");
            (value, MS_PER_SECOND)
        }
    };

    value.checked_mul(factor).ok_or_else(invalid)
}

/// Read an optionally signed integer prefix, skipping leading whitespace.
///
/// Trailing characters after the digits are ignored.
fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
