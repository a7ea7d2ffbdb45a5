// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::PEBBLEVISION_CONFIG, "PEBBLEVISION_CONFIG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
    assert_eq!(vars::RUST_LOG, "RUST_LOG");
}

// Each variable is touched by exactly one test to keep parallel runs stable.

#[test]
fn test_config_path() {
    std::env::remove_var("PEBBLEVISION_CONFIG");
    assert!(config_path().is_none());

    std::env::set_var("PEBBLEVISION_CONFIG", "");
    assert!(config_path().is_none());

    std::env::set_var("PEBBLEVISION_CONFIG", "/tmp/pv.toml");
    assert_eq!(config_path(), Some(PathBuf::from("/tmp/pv.toml")));
    std::env::remove_var("PEBBLEVISION_CONFIG");
}

#[test]
fn test_force_color() {
    std::env::set_var("COLOR", "1");
    assert!(force_color());
    std::env::set_var("COLOR", "0");
    assert!(!force_color());
    std::env::remove_var("COLOR");
    assert!(!force_color());
}
