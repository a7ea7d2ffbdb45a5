// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pv_core::{IssueUpdate, NewIssue, Priority};

use crate::error::{Error, Result};

use super::Context;

const UPDATE_FIELDS_HINT: &str =
    "pass at least one of --status, --title, --type, --priority, --description, --parent";

/// Creates an issue and prints its id.
pub async fn run(
    ctx: &Context,
    title: &str,
    issue_type: Option<&str>,
    priority: Option<Priority>,
    description: Option<&str>,
) -> Result<()> {
    let mut request = NewIssue::new(title.trim());
    if let Some(issue_type) = issue_type {
        request = request.with_type(issue_type);
    }
    if let Some(priority) = priority {
        request = request.with_priority(priority);
    }
    if let Some(description) = description {
        request = request.with_description(description);
    }

    let id = ctx.client.create_issue(&ctx.dir, &request).await?;
    println!("{id}");
    Ok(())
}

pub async fn run_update(ctx: &Context, id: &str, update: &IssueUpdate) -> Result<()> {
    if update.is_empty() {
        return Err(Error::InvalidValue {
            field: "update",
            value: id.to_string(),
            hint: UPDATE_FIELDS_HINT,
        });
    }
    ctx.client.update_issue(&ctx.dir, id, update).await?;
    println!("Updated {id}");
    Ok(())
}
