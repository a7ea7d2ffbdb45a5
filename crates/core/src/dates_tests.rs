// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{Duration, TimeZone, Timelike};
use yare::parameterized;

#[parameterized(
    whole_seconds = { "2025-01-20T10:30:00Z" },
    fractional = { "2025-01-20T10:30:00.250Z" },
    nanos = { "2025-01-20T10:30:00.123456789Z" },
    offset = { "2025-01-20T11:30:00+01:00" },
    no_offset = { "2025-01-20T10:30:00" },
)]
fn parse_timestamp_accepts(input: &str) {
    let dt = parse_timestamp(input).unwrap();
    assert_eq!(dt.date_naive().to_string(), "2025-01-20");
    assert_eq!(dt.hour(), 10);
    assert_eq!(dt.minute(), 30);
}

#[parameterized(
    empty = { "" },
    garbage = { "not-a-date" },
    date_only = { "2025-01-20" },
    bad_month = { "2025-13-20T10:30:00Z" },
)]
fn parse_timestamp_rejects(input: &str) {
    let err = parse_timestamp(input).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn optional_empty_is_absent() {
    assert_eq!(parse_optional_timestamp(Some("")).unwrap(), None);
    assert_eq!(parse_optional_timestamp(Some("   ")).unwrap(), None);
    assert_eq!(parse_optional_timestamp(None).unwrap(), None);
}

#[test]
fn optional_populated_is_parsed() {
    let expected = Utc.with_ymd_and_hms(2025, 1, 18, 16, 0, 0).unwrap();
    assert_eq!(
        parse_optional_timestamp(Some("2025-01-18T16:00:00Z")).unwrap(),
        Some(expected)
    );
}

#[test]
fn optional_malformed_fails() {
    assert!(parse_optional_timestamp(Some("yesterday")).is_err());
}

#[test]
fn full_precision_round_trip() {
    let original = Utc.with_ymd_and_hms(2025, 1, 20, 10, 30, 15).unwrap()
        + Duration::milliseconds(789);
    let text = format_timestamp(&original);
    assert!(text.contains(".789"));
    let reparsed = parse_timestamp(&text).unwrap();
    assert_eq!(reparsed.timestamp(), original.timestamp());
    assert_eq!(reparsed, original);
}

#[test]
fn cli_timestamp_has_no_fraction() {
    let dt = Utc.with_ymd_and_hms(2025, 1, 20, 10, 30, 0).unwrap() + Duration::milliseconds(5);
    assert_eq!(format_cli_timestamp(&dt), "2025-01-20T10:30:00Z");
}

#[test]
fn display_format() {
    let dt = Utc.with_ymd_and_hms(2025, 1, 20, 10, 30, 0).unwrap();
    assert_eq!(format_display(&dt), "Jan 20, 2025 10:30 AM");
}

#[parameterized(
    just_now = { 30, "just now" },
    one_minute = { 60, "1 minute ago" },
    minutes = { 600, "10 minutes ago" },
    hours = { 7_200, "2 hours ago" },
    yesterday = { 90_000, "yesterday" },
    days = { 259_200, "3 days ago" },
)]
fn relative_format(seconds_ago: i64, expected: &str) {
    let now = Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap();
    let then = now - Duration::seconds(seconds_ago);
    assert_eq!(format_relative(&then, &now), expected);
}

#[test]
fn relative_format_falls_back_to_date() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let then = Utc.with_ymd_and_hms(2025, 1, 20, 10, 30, 0).unwrap();
    assert_eq!(format_relative(&then, &now), "Jan 20, 2025 10:30 AM");
}
