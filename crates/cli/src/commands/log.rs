// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use pv_core::LogQuery;

use crate::cli::OutputFormat;
use crate::display::format_event;
use crate::error::{Error, Result};

use super::{print_json, Context};

/// Builds the log query, rejecting an inverted window.
pub fn build_query(
    limit: Option<usize>,
    since: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
    git: bool,
) -> Result<LogQuery> {
    if let (Some(since), Some(until)) = (since, until) {
        if since >= until {
            return Err(Error::InvalidValue {
                field: "time window",
                value: format!("{} .. {}", since.to_rfc3339(), until.to_rfc3339()),
                hint: "--since must be earlier than --until",
            });
        }
    }
    Ok(LogQuery {
        limit,
        since,
        until,
        include_git: git,
    })
}

pub async fn run(ctx: &Context, query: &LogQuery, format: OutputFormat) -> Result<()> {
    let events = ctx.client.event_log(&ctx.dir, query).await?;
    match format {
        OutputFormat::Json => print_json(&events),
        OutputFormat::Text => {
            for event in &events {
                println!("{}", format_event(event));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
