// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp normalization for `pb` output.
//!
//! `pb` prints RFC 3339 timestamps, sometimes with fractional seconds and
//! sometimes without, and uses an empty string for "not set". All functions
//! here are stateless.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{Error, Result};

/// Parses a timestamp printed by `pb`.
///
/// RFC 3339 with or without fractional seconds is accepted first. A value
/// with no offset at all (`2025-01-20T10:30:00`) is read as UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::Parse(format!("cannot parse date: '{s}'")))
}

/// Parses an optional timestamp field.
///
/// Both a missing field and an empty string mean "not set".
pub fn parse_optional_timestamp(s: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    match s {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_timestamp(s).map(Some),
    }
}

/// Formats a timestamp at full precision (`2025-01-20T10:30:00.123Z`).
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Formats a timestamp for `pb` flags such as `--since`, without fractional
/// seconds.
pub fn format_cli_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Formats a timestamp for display (e.g. "Jan 20, 2025 10:30 AM").
pub fn format_display(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Formats a timestamp relative to `now` (e.g. "2 hours ago").
pub fn format_relative(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(*dt).num_seconds();
    if secs < 0 {
        return format_display(dt);
    }
    match secs {
        0..=59 => "just now".to_string(),
        60..=3_599 => plural(secs / 60, "minute"),
        3_600..=86_399 => plural(secs / 3_600, "hour"),
        86_400..=172_799 => "yesterday".to_string(),
        172_800..=2_591_999 => plural(secs / 86_400, "day"),
        _ => format_display(dt),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
