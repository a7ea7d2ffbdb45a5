// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoders for the plain-text output of `pb`.
//!
//! Commands without `--json` support print human-oriented text: `create`
//! prints the new id, `version` prints a banner, and list/tree lines use
//! status glyphs and bracketed tokens:
//!
//! ```text
//! ○ pb-abc [● P2] [task] [2025-01-20] - Fix the thing
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::issue::{Issue, Priority, Status};

/// Name `pb version` prints before the version number.
pub const TOOL_NAME: &str = "pebbles";

const CREATED_PREFIX: &str = "created ";

// Pre-compiled patterns for bracketed tokens in issue lines.
static PRIORITY_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\[●?\s*P(\d)\]") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\[(\w+)\]") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\[\d{4}-\d{2}-\d{2}\]") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Trailing status words and the status each one forces.
const STATUS_WORDS: [(&str, Status); 3] = [
    ("[OPEN]", Status::Open),
    ("[IN_PROGRESS]", Status::InProgress),
    ("[CLOSED]", Status::Closed),
];

/// Extracts the new issue id from `pb create` output.
///
/// Accepts either a bare id (`pv-x9z`) or `Created pv-x9z`.
pub fn parse_create_output(text: &str) -> String {
    let trimmed = text.trim();
    match strip_prefix_ignore_case(trimmed, CREATED_PREFIX) {
        Some(rest) => rest.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Extracts the version from `pb version` output (`pebbles v0.8.0` → `v0.8.0`).
pub fn parse_version(text: &str) -> String {
    let trimmed = text.trim();
    let banner = format!("{TOOL_NAME} ");
    match strip_prefix_ignore_case(trimmed, &banner) {
        Some(rest) => rest.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Parses one issue line from list or tree output.
///
/// Format: `<glyph> <id> [<priority>] [<type>] [<date>] - <title> [<STATUS>]`.
/// Every part after the id is optional. Returns `None` for blank input.
pub fn parse_issue_line(line: &str) -> Option<Issue> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (mut status, rest) = split_status_glyph(trimmed);

    let (id, rest) = match rest.split_once(char::is_whitespace) {
        Some((id, rest)) => (id, rest.trim()),
        None => (rest, ""),
    };
    if id.is_empty() {
        return None;
    }

    let mut remaining = rest.to_string();

    // The trailing word wins over the glyph, and must go before the type
    // pattern sees it.
    for (word, word_status) in STATUS_WORDS {
        if let Some(stripped) = remaining.strip_suffix(word) {
            status = word_status;
            remaining = stripped.trim_end().to_string();
            break;
        }
    }

    let mut priority = Priority::default();
    if let Some(caps) = PRIORITY_RE.captures(&remaining) {
        if let Some(p) = caps
            .get(1)
            .and_then(|m| m.as_str().parse::<u8>().ok())
            .and_then(Priority::from_ordinal)
        {
            priority = p;
        }
        remaining = remove_match(&remaining, &PRIORITY_RE);
    }

    let mut issue_type = crate::issue::DEFAULT_ISSUE_TYPE.to_string();
    if let Some(caps) = TYPE_RE.captures(&remaining) {
        if let Some(m) = caps.get(1) {
            issue_type = m.as_str().to_string();
        }
        remaining = remove_match(&remaining, &TYPE_RE);
    }

    // Dates are decorative in list/tree output.
    if DATE_RE.is_match(&remaining) {
        remaining = remove_match(&remaining, &DATE_RE);
    }

    let title = remaining
        .strip_prefix("- ")
        .or_else(|| remaining.strip_prefix('-'))
        .unwrap_or(&remaining)
        .trim();

    Some(
        Issue::new(id, title)
            .with_status(status)
            .with_priority(priority)
            .with_type(issue_type),
    )
}

/// Splits a leading status glyph off a line. No glyph means open.
fn split_status_glyph(line: &str) -> (Status, &str) {
    let mut chars = line.chars();
    let status = match chars.next() {
        Some('○') => Status::Open,
        Some('◑') | Some('◐') => Status::InProgress,
        Some('●') => Status::Closed,
        _ => return (Status::Open, line),
    };
    (status, chars.as_str().trim_start())
}

/// Removes the first match of `re` and trims the result.
fn remove_match(text: &str, re: &Regex) -> String {
    re.replacen(text, 1, "").trim().to_string()
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
