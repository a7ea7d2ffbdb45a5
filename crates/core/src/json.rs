// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoders for the JSON output of `pb`.
//!
//! Three shapes are handled, each through its own raw schema:
//! - `pb list --json` / `pb ready --json`: a JSON array of issue records
//! - `pb show --json`: a single issue object with hierarchy and comments
//! - `pb log --json`: JSON Lines, one event object per line
//!
//! The raw structs mirror what `pb` prints (string priorities, empty-string
//! timestamps) and are converted into domain values with the shared
//! normalizers in [`crate::dates`] and [`Priority`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

use crate::dates::{parse_optional_timestamp, parse_timestamp};
use crate::error::{Error, Result};
use crate::event::Event;
use crate::issue::{Issue, IssueComment, Priority, Status, DEFAULT_ISSUE_TYPE};

/// An issue record as printed by `pb list --json`.
#[derive(Debug, Deserialize)]
struct RawIssue {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "type")]
    issue_type: Option<String>,
    status: String,
    priority: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default)]
    closed_at: Option<String>,
    #[serde(default)]
    deps: Option<Vec<String>>,
}

impl RawIssue {
    fn into_issue(self) -> Result<Issue> {
        Ok(Issue {
            created_at: parse_optional_timestamp(self.created_at.as_deref())?,
            updated_at: parse_optional_timestamp(self.updated_at.as_deref())?,
            closed_at: parse_optional_timestamp(self.closed_at.as_deref())?,
            status: self.status.parse().unwrap_or(Status::Open),
            priority: Priority::from_label(&self.priority).unwrap_or_default(),
            issue_type: self
                .issue_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_ISSUE_TYPE.to_string()),
            description: self.description.unwrap_or_default(),
            deps: self.deps.unwrap_or_default(),
            id: self.id,
            title: self.title,
            parents: None,
            children: None,
            siblings: None,
            comments: None,
        })
    }
}

/// An issue object as printed by `pb show --json`.
#[derive(Debug, Deserialize)]
struct RawIssueDetail {
    #[serde(flatten)]
    base: RawIssue,
    #[serde(default)]
    parents: Option<Vec<String>>,
    #[serde(default)]
    siblings: Option<Vec<String>>,
    #[serde(default)]
    children: Option<Vec<String>>,
    #[serde(default)]
    comments: Option<Vec<RawComment>>,
}

#[derive(Debug, Deserialize)]
struct RawComment {
    body: String,
    timestamp: String,
}

impl RawComment {
    fn into_comment(self) -> Result<IssueComment> {
        Ok(IssueComment {
            timestamp: parse_timestamp(&self.timestamp)?,
            body: self.body,
        })
    }
}

/// An event line as printed by `pb log --json`.
#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(default)]
    line: Option<u64>,
    timestamp: String,
    #[serde(rename = "type")]
    event_type: String,
    #[serde(default)]
    label: Option<String>,
    issue_id: String,
    #[serde(default)]
    issue_title: Option<String>,
    #[serde(default)]
    actor: Option<String>,
    #[serde(default)]
    actor_date: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    payload: Option<HashMap<String, serde_json::Value>>,
}

impl RawEvent {
    fn into_event(self) -> Result<Event> {
        let payload = self
            .payload
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();

        Ok(Event {
            line: self.line,
            timestamp: parse_timestamp(&self.timestamp)?,
            event_type: self.event_type,
            label: self.label,
            issue_id: self.issue_id,
            issue_title: self.issue_title,
            actor: self.actor,
            actor_date: self.actor_date,
            details: self.details,
            payload,
        })
    }
}

/// Parses `pb list --json` output.
pub fn parse_issue_list(json: &str) -> Result<Vec<Issue>> {
    let raw: Vec<RawIssue> =
        serde_json::from_str(json).map_err(|e| Error::Parse(format!("issue list: {e}")))?;
    raw.into_iter().map(RawIssue::into_issue).collect()
}

/// Parses `pb ready --json` output. Same shape as the issue list.
pub fn parse_ready_list(json: &str) -> Result<Vec<Issue>> {
    parse_issue_list(json)
}

/// Parses `pb show --json` output.
///
/// `parents`, `children` and `siblings` stay `None` when `pb` omits them and
/// `Some(vec![])` when it prints an empty list.
pub fn parse_issue_detail(json: &str) -> Result<Issue> {
    let raw: RawIssueDetail =
        serde_json::from_str(json).map_err(|e| Error::Parse(format!("issue detail: {e}")))?;

    let comments = raw
        .comments
        .map(|comments| {
            comments
                .into_iter()
                .map(RawComment::into_comment)
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    let mut issue = raw.base.into_issue()?;
    issue.parents = raw.parents;
    issue.siblings = raw.siblings;
    issue.children = raw.children;
    issue.comments = comments;
    Ok(issue)
}

/// Parses `pb log --json` output.
///
/// The input is JSON Lines, not an array. Blank lines are skipped. A single
/// malformed line fails the whole call.
pub fn parse_event_log(json_lines: &str) -> Result<Vec<Event>> {
    parse_lines::<RawEvent>(json_lines)?
        .into_iter()
        .map(RawEvent::into_event)
        .collect()
}

/// Decodes every non-blank line as one record.
fn parse_lines<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: T = serde_json::from_str(line)
            .map_err(|e| Error::Parse(format!("event log line {}: {e}", idx + 1)))?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
