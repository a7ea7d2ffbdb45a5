// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod create;
pub mod dep;
pub mod git;
pub mod lifecycle;
pub mod list;
pub mod log;
pub mod project;
pub mod show;
pub mod tree;
pub mod version;

use std::path::{Path, PathBuf};

use pv_core::{Client, ClientConfig};
use serde::Serialize;
use tracing::debug;

use crate::cli::Cli;
use crate::env;
use crate::error::{Error, Result};

/// Everything a command needs: a configured client and the project directory.
#[derive(Debug, Clone)]
pub struct Context {
    pub client: Client,
    pub dir: PathBuf,
}

impl Context {
    /// Builds the context from global flags, the config file and the
    /// environment. Flags win over the config file.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = load_config(cli.config.as_deref())?;
        if let Some(pb) = &cli.pb {
            config.pb_path = pb.clone();
        }
        if let Some(secs) = cli.timeout {
            config.timeout_secs = secs;
        }

        let dir = match &cli.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        if !dir.is_dir() {
            return Err(Error::InvalidValue {
                field: "directory",
                value: dir.display().to_string(),
                hint: "pass an existing project directory with -C",
            });
        }

        debug!(
            pb = %config.pb_path,
            timeout_secs = config.timeout_secs,
            dir = %dir.display(),
            "context ready"
        );
        Ok(Context {
            client: Client::new(config),
            dir,
        })
    }
}

/// An explicit `--config` must exist; the default locations may be absent.
fn load_config(explicit: Option<&Path>) -> Result<ClientConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        return Ok(ClientConfig::load(path)?);
    }
    match env::config_path().or_else(pv_core::config::default_config_path) {
        Some(path) => Ok(ClientConfig::load_or_default(&path)?),
        None => Ok(ClientConfig::default()),
    }
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
