// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the pebview front-end.
///
/// Errors from the core layer pass through unchanged; the rest carry
/// front-end context such as bad flag values.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] pv_core::Error),

    #[error("invalid {field}: '{value}'\n  hint: {hint}")]
    InvalidValue {
        field: &'static str,
        value: String,
        hint: &'static str,
    },

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for pebview operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
