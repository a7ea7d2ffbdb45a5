// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use pv_core::{Priority, Status};

const MAX_TIMEOUT_SECS: u64 = pv_core::process::MAX_TIMEOUT.as_secs();

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a status name (`open`, `in_progress`, `closed`).
pub fn parse_status(s: &str) -> Result<Status, String> {
    s.parse::<Status>().map_err(|e| e.to_string())
}

/// Parse a priority as a label (`P1`, `p1`) or a bare ordinal (`1`).
pub fn parse_priority(s: &str) -> Result<Priority, String> {
    Priority::from_label(s)
        .or_else(|| s.parse::<u8>().ok().and_then(Priority::from_ordinal))
        .ok_or_else(|| format!("invalid priority '{s}' (expected P0-P4)"))
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    pv_core::dates::parse_timestamp(s).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "pebview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and drive a pebbles (pb) issue tracker from the terminal")]
pub struct Cli {
    /// Project directory to run pb in
    #[arg(short = 'C', long = "dir", global = true, value_name = "path")]
    pub dir: Option<PathBuf>,

    /// Path or name of the pb executable (overrides the config file)
    #[arg(long = "pb", global = true, value_name = "path")]
    pub pb: Option<String>,

    /// Per-command timeout in seconds, at most one day (overrides the config file)
    #[arg(
        long,
        global = true,
        value_name = "secs",
        value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECS)
    )]
    pub timeout: Option<u64>,

    /// Config file (default: $PEBBLEVISION_CONFIG or the user config dir)
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Filters shared by `list`.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Filter by status (comma-separated or repeated)
    #[arg(long, short, value_delimiter = ',', value_parser = parse_status)]
    pub status: Vec<Status>,

    /// Filter by type
    #[arg(long = "type", short = 't')]
    pub issue_type: Option<String>,

    /// Filter by priority (P0-P4)
    #[arg(long, short, value_parser = parse_priority)]
    pub priority: Option<Priority>,

    /// Only issues not updated recently
    #[arg(long)]
    pub stale: bool,

    /// Staleness threshold in days
    #[arg(long, value_name = "days")]
    pub stale_days: Option<u32>,

    /// Include closed issues
    #[arg(long, short)]
    pub all: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize pebbles in the project directory
    Init {
        /// Issue id prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Import issues from a beads project
    Import {
        /// Beads project to import from
        #[arg(long)]
        from: PathBuf,

        /// Keep a backup of the existing data
        #[arg(long)]
        backup: bool,
    },

    /// List issues
    List {
        #[command(flatten)]
        filter: ListArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List issues with no open blockers
    Ready {
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show issue details
    Show {
        id: String,

        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show the dependency tree of an issue
    Tree {
        id: String,

        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show the event log
    Log {
        /// Maximum number of events
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Only events at or after this time (RFC 3339 or YYYY-MM-DD)
        #[arg(long, value_parser = parse_time)]
        since: Option<DateTime<Utc>>,

        /// Only events before this time (RFC 3339 or YYYY-MM-DD)
        #[arg(long, value_parser = parse_time)]
        until: Option<DateTime<Utc>>,

        /// Include git-derived events
        #[arg(long)]
        git: bool,

        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Create a new issue
    Create {
        #[arg(value_parser = non_empty_string)]
        title: String,

        #[arg(long = "type", short = 't')]
        issue_type: Option<String>,

        #[arg(long, short, value_parser = parse_priority)]
        priority: Option<Priority>,

        #[arg(long, short)]
        description: Option<String>,
    },

    /// Update fields of an issue
    Update {
        id: String,

        #[arg(long, short, value_parser = parse_status)]
        status: Option<Status>,

        #[arg(long, value_parser = non_empty_string)]
        title: Option<String>,

        #[arg(long = "type", short = 't')]
        issue_type: Option<String>,

        #[arg(long, short, value_parser = parse_priority)]
        priority: Option<Priority>,

        #[arg(long, short)]
        description: Option<String>,

        /// Parent issue id
        #[arg(long)]
        parent: Option<String>,
    },

    /// Close an issue
    Close { id: String },

    /// Reopen a closed issue
    Reopen { id: String },

    /// Add a comment to an issue
    Comment {
        id: String,

        #[arg(value_parser = non_empty_string)]
        body: String,
    },

    /// Manage dependencies between issues
    Dep {
        #[command(subcommand)]
        command: DepCommand,
    },

    /// Rename a single issue id
    Rename { old_id: String, new_id: String },

    /// Move issues to a new id prefix
    RenamePrefix {
        prefix: String,

        /// Rename every issue, not only open ones
        #[arg(long)]
        full: bool,
    },

    /// Show commits, branches and worker info for an issue
    Git {
        id: String,

        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show pebview and pb versions
    Version,
}

#[derive(Subcommand, Debug)]
pub enum DepCommand {
    /// Make FROM depend on TO
    Add {
        from: String,
        to: String,

        /// Dependency type
        #[arg(long = "type", short = 't')]
        dep_type: Option<String>,
    },

    /// Remove a dependency
    #[command(alias = "remove")]
    Rm {
        from: String,
        to: String,

        #[arg(long = "type", short = 't')]
        dep_type: Option<String>,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
