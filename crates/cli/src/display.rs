// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use pv_core::dates::{format_display, format_relative};
use pv_core::{DepNode, Event, GitCommit, Issue, Status, WorkerInfo};

/// Maximum line width for wrapped text content (excluding indent).
const WRAP_WIDTH: usize = 96;

const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Glyph `pb` uses for a status in list and tree output.
pub fn status_glyph(status: Status) -> char {
    match status {
        Status::Open => '○',
        Status::InProgress => '◐',
        Status::Closed => '●',
    }
}

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Format a single issue line for list output.
///
/// ```text
/// ○ pv-a1b [P1] [bug] - Fix login bug
/// ```
pub fn format_issue_line(issue: &Issue) -> String {
    let mut line = format!(
        "{} {} [{}] [{}]",
        status_glyph(issue.status),
        issue.id,
        issue.priority,
        issue.issue_type
    );
    if !issue.title.is_empty() {
        line.push_str(" - ");
        line.push_str(&issue.title);
    }
    line
}

fn push_id_section(output: &mut Vec<String>, heading: &str, ids: &[String]) {
    if ids.is_empty() {
        return;
    }
    output.push(String::new());
    output.push(format!("{heading}:"));
    for id in ids {
        output.push(format!("  - {id}"));
    }
}

/// Absolute time followed by how long ago it was.
fn format_when(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let absolute = format_display(dt);
    let relative = format_relative(dt, now);
    if relative == absolute {
        absolute
    } else {
        format!("{absolute} ({relative})")
    }
}

/// Format issue details for the show command. Dates are also shown relative
/// to `now`.
pub fn format_issue_details(issue: &Issue, now: &DateTime<Utc>) -> String {
    let mut output = Vec::new();

    output.push(format!("[{}] {}", issue.issue_type, issue.id));
    output.push(format!("Title: {}", issue.title));
    output.push(format!("Status: {}", issue.status.display_name()));
    output.push(format!("Priority: {}", issue.priority));
    if let Some(created) = &issue.created_at {
        output.push(format!("Created: {}", format_when(created, now)));
    }
    if let Some(updated) = &issue.updated_at {
        output.push(format!("Updated: {}", format_when(updated, now)));
    }
    if let Some(closed) = &issue.closed_at {
        output.push(format!("Closed: {}", format_when(closed, now)));
    }

    if !issue.description.trim().is_empty() {
        output.push(String::new());
        output.push("Description:".to_string());
        for line in wrap_text(issue.description.trim(), WRAP_WIDTH).lines() {
            output.push(format!("  {line}"));
        }
    }

    push_id_section(&mut output, "Blocked by", &issue.deps);
    for (title, ids) in [
        ("Parents", &issue.parents),
        ("Children", &issue.children),
        ("Siblings", &issue.siblings),
    ] {
        push_id_section(&mut output, title, ids.as_deref().unwrap_or_default());
    }

    if let Some(comments) = issue.comments.as_ref().filter(|c| !c.is_empty()) {
        output.push(String::new());
        output.push("Comments:".to_string());
        for (i, comment) in comments.iter().enumerate() {
            if i > 0 {
                output.push(String::new());
            }
            output.push(format!("  {}", format_display(&comment.timestamp)));
            for line in wrap_text(&comment.body, WRAP_WIDTH).lines() {
                output.push(format!("    {line}"));
            }
        }
    }

    output.join("\n")
}

/// Redraw a dependency tree with box-drawing glyphs.
///
/// ```text
/// pv-g7h
/// ├── ○ pv-a1b [P1] [bug] - Fix login bug
/// │   └── ○ pv-xyz [P2] [task] - Set up OAuth provider
/// └── ◐ pv-c3d [P2] [feature] - Add dark mode
/// ```
pub fn format_tree(root: &DepNode) -> Vec<String> {
    let mut lines = vec![format_tree_root(&root.issue)];
    push_tree_children(&mut lines, &root.dependencies, "");
    lines
}

/// The root is often a bare id; only decorate it when a title is known.
fn format_tree_root(issue: &Issue) -> String {
    if issue.title.is_empty() {
        issue.id.clone()
    } else {
        format_issue_line(issue)
    }
}

fn push_tree_children(lines: &mut Vec<String>, children: &[DepNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        let branch = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{branch}{}", format_issue_line(&child.issue)));

        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        push_tree_children(lines, &child.dependencies, &child_prefix);
    }
}

/// Format a single event for log output.
///
/// ```text
/// 2025-01-20 10:30  Status        pv-a1b  open -> in_progress (sam)
/// ```
pub fn format_event(event: &Event) -> String {
    let timestamp = event.timestamp.format(EVENT_TIME_FORMAT);
    let mut line = format!(
        "{}  {:<12}  {}",
        timestamp,
        event.display_label(),
        event.issue_id
    );

    let summary = event
        .details
        .as_deref()
        .filter(|d| !d.is_empty())
        .or(event.issue_title.as_deref().filter(|t| !t.is_empty()));
    if let Some(summary) = summary {
        line.push_str("  ");
        line.push_str(summary);
    }
    if let Some(actor) = event.actor.as_deref().filter(|a| !a.is_empty()) {
        line.push_str(&format!(" ({actor})"));
    }
    line
}

/// Format a commit that mentions an issue.
pub fn format_commit(commit: &GitCommit) -> String {
    let mut line = format!("{} {}", commit.short_sha, commit.message);
    match &commit.date {
        Some(date) => line.push_str(&format!(" ({}, {})", commit.author, date.format("%Y-%m-%d"))),
        None => line.push_str(&format!(" ({})", commit.author)),
    }
    line
}

/// Format worker branch details.
pub fn format_worker(worker: &WorkerInfo) -> Vec<String> {
    let mut header = format!("Worker: {}", worker.branch);
    if worker.is_worktree {
        header.push_str(" (worktree)");
    }
    let mut lines = vec![header];
    if let Some(last) = &worker.last_commit {
        let date = last
            .date
            .as_ref()
            .map(|d| format!(", {}", format_display(d)))
            .unwrap_or_default();
        lines.push(format!(
            "  Last commit: {} {} ({}{})",
            last.short_sha, last.message, last.author, date
        ));
    }
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
