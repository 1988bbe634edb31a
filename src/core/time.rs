//! Time-claim helpers for `exp`, `iat`, and `nbf`.
//!
//! Claims are seconds since the Unix epoch; the clock is read in
//! milliseconds. A claim value of `0` is treated the same as an absent
//! claim, as is a non-numeric value.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde_json::Value;

/// Format used for absolute timestamps in human output.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Read a numeric time claim, treating `0` and non-numbers as absent.
pub fn claim_seconds(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|secs| *secs != 0.0)
}

/// Whether `exp` lies in the past relative to the system clock.
pub fn is_expired(exp: Option<f64>) -> bool {
    is_expired_at(exp, now_millis())
}

/// Whether `exp` lies at or before `now_ms`.
///
/// A token whose `exp * 1000` equals `now_ms` is already expired.
pub fn is_expired_at(exp: Option<f64>, now_ms: i64) -> bool {
    match exp {
        Some(exp) if exp != 0.0 && !exp.is_nan() => now_ms as f64 >= exp * 1000.0,
        _ => false,
    }
}

/// Render a claim timestamp as an absolute local date-time, or `"N/A"`.
pub fn format_timestamp(ts: Option<f64>) -> String {
    format_timestamp_in(ts, &Local)
}

/// Render a claim timestamp in the given time zone, or `"N/A"`.
pub fn format_timestamp_in<Tz>(ts: Option<f64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let secs = match ts {
        Some(secs) if secs != 0.0 && !secs.is_nan() => secs,
        _ => return "N/A".to_string(),
    };

    match DateTime::from_timestamp_millis((secs * 1000.0).floor() as i64) {
        Some(utc) => utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
        None => "Invalid Date".to_string(),
    }
}
