// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn setup_logging(verbose: bool) {
    let filter = if env::rust_log_set() {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
    } else {
        EnvFilter::new(default_directive(verbose))
    };

    let ansi = !env::no_color() && std::io::stderr().is_terminal();
    // A subscriber may already be installed when embedded; keep the first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}
