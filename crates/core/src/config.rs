// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! Stored as TOML, by default in `<config dir>/pebblevision/config.toml`:
//!
//! ```toml
//! pb_path = "pb"
//! timeout_secs = 30
//! extra_paths = ["/opt/pebbles/bin"]
//!
//! [env]
//! PB_ACTOR = "sam"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::process::{RunnerConfig, DEFAULT_TIMEOUT, MAX_TIMEOUT};

const APP_DIR_NAME: &str = "pebblevision";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings for talking to `pb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Path or bare name of the `pb` executable.
    #[serde(default = "default_pb_path")]
    pub pb_path: String,
    /// Per-command deadline in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Directories searched before the built-in locations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_paths: Vec<PathBuf>,
    /// Extra environment for every `pb` invocation.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

fn default_pb_path() -> String {
    "pb".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            pb_path: default_pb_path(),
            timeout_secs: default_timeout_secs(),
            extra_paths: Vec::new(),
            env: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Loads a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Loads a config file, or returns defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses TOML config text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if config.pb_path.trim().is_empty() {
            return Err(Error::Config("pb_path must not be empty".to_string()));
        }
        if config.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be positive".to_string()));
        }
        if config.timeout_secs > MAX_TIMEOUT.as_secs() {
            return Err(Error::Config(format!(
                "timeout_secs must be at most {}",
                MAX_TIMEOUT.as_secs()
            )));
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Gateway settings derived from this config.
    pub fn runner_config(&self) -> RunnerConfig {
        RunnerConfig {
            timeout: self.timeout(),
            extra_paths: self.extra_paths.clone(),
        }
    }
}

/// Default config location: `<config dir>/pebblevision/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
