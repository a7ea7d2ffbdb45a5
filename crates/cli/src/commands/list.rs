// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pv_core::{Issue, ListQuery};

use crate::cli::{ListArgs, OutputFormat};
use crate::colors;
use crate::display::format_issue_line;
use crate::error::Result;

use super::{print_json, Context};

impl From<&ListArgs> for ListQuery {
    fn from(args: &ListArgs) -> Self {
        let mut statuses = Vec::new();
        for status in &args.status {
            if !statuses.contains(status) {
                statuses.push(*status);
            }
        }
        ListQuery {
            statuses,
            issue_type: args.issue_type.clone(),
            priority: args.priority,
            stale: args.stale,
            stale_days: args.stale_days,
            all: args.all,
        }
    }
}

pub async fn run(ctx: &Context, filter: &ListArgs, format: OutputFormat) -> Result<()> {
    let issues = ctx
        .client
        .list_issues(&ctx.dir, &ListQuery::from(filter))
        .await?;
    print_issues(&issues, format)
}

pub async fn run_ready(ctx: &Context, format: OutputFormat) -> Result<()> {
    let issues = ctx.client.ready_issues(&ctx.dir).await?;
    print_issues(&issues, format)
}

fn print_issues(issues: &[Issue], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&issues),
        OutputFormat::Text => {
            for issue in issues {
                println!(
                    "{}",
                    colors::issue_line(&format_issue_line(issue), issue.status)
                );
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
