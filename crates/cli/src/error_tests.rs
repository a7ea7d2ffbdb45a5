// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_core_error_is_transparent() {
    let err: Error = pv_core::Error::NotFound("pv-abc".to_string()).into();
    assert_eq!(err.to_string(), "issue not found: pv-abc");
}

#[test]
fn test_core_timeout_display() {
    let err: Error = pv_core::Error::Timeout {
        timeout: std::time::Duration::from_secs(30),
    }
    .into();
    assert_eq!(err.to_string(), "command timed out after 30s");
}

#[test]
fn test_invalid_value_display() {
    let err = Error::InvalidValue {
        field: "priority",
        value: "P9".to_string(),
        hint: "use P0-P4",
    };
    let msg = err.to_string();
    assert!(msg.contains("invalid priority: 'P9'"));
    assert!(msg.contains("hint: use P0-P4"));
}

#[test]
fn test_config_not_found_display() {
    let err = Error::ConfigNotFound("/nope/config.toml".to_string());
    assert!(err.to_string().contains("/nope/config.toml"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().contains("gone"));
}
