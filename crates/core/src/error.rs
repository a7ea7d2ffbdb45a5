// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pv-core operations.

use std::time::Duration;
use thiserror::Error;

/// All possible errors that can occur while driving `pb`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("pb binary not found at '{path}'\n  hint: install pebbles or set pb_path in the config file")]
    ExecutableNotFound { path: String },

    #[error("command timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("command failed (exit {exit_code}): {}", stderr.trim())]
    CommandFailed { exit_code: i32, stderr: String },

    #[error("failed to parse output: {0}")]
    Parse(String),

    #[error("issue not found: {0}")]
    NotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

/// A specialized Result type for pv-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
