// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for pebbles issues.
//!
//! This module contains the domain values decoded from `pb` output: Issue,
//! Status, Priority, IssueComment, and the DepNode dependency tree.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Issue type used when `pb` omits one.
pub const DEFAULT_ISSUE_TYPE: &str = "task";

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not yet started.
    #[default]
    Open,
    /// Currently being worked on.
    InProgress,
    /// Finished or abandoned.
    Closed,
}

impl Status {
    /// Returns the string representation used on the `pb` command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Closed => "closed",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Closed => "Closed",
        }
    }

    /// Position when sorting issues by status.
    pub fn sort_order(&self) -> u8 {
        match self {
            Status::Open => 0,
            Status::InProgress => 1,
            Status::Closed => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in_progress" => Ok(Status::InProgress),
            "closed" => Ok(Status::Closed),
            _ => Err(Error::Parse(format!("invalid status: '{s}'"))),
        }
    }
}

/// Severity level, P0 (critical) through P4 (trivial).
///
/// `pb` prints priorities as labels (`"P0"`..`"P4"`); the ordering follows
/// the ordinal, so `P0 < P4`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
    #[serde(rename = "P0")]
    P0 = 0,
    #[serde(rename = "P1")]
    P1 = 1,
    #[serde(rename = "P2")]
    #[default]
    P2 = 2,
    #[serde(rename = "P3")]
    P3 = 3,
    #[serde(rename = "P4")]
    P4 = 4,
}

impl Priority {
    /// All priorities from most to least severe.
    pub const ALL: [Priority; 5] = [
        Priority::P0,
        Priority::P1,
        Priority::P2,
        Priority::P3,
        Priority::P4,
    ];

    /// Resolves an ordinal in `0..=4`.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Resolves a label such as `"P1"` or `"p1"`.
    ///
    /// Returns `None` for anything else; callers pick the default.
    pub fn from_label(label: &str) -> Option<Self> {
        let rest = label.strip_prefix(['P', 'p'])?;
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(digit), None) => {
                let ordinal = digit.to_digit(10)?;
                Self::from_ordinal(u8::try_from(ordinal).ok()?)
            }
            _ => None,
        }
    }

    /// Ordinal value, 0 being most severe.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Canonical label (`"P0"`..`"P4"`).
    pub fn label(&self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
            Priority::P4 => "P4",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Priority::from_label(s)
            .ok_or_else(|| Error::Parse(format!("invalid priority: '{s}' (expected P0-P4)")))
    }
}

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IssueComment {
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

impl IssueComment {
    /// Derived identity: comments carry no id of their own.
    pub fn id(&self) -> String {
        let mut hasher = DefaultHasher::new();
        self.body.hash(&mut hasher);
        format!("{:016x}-{}", hasher.finish(), self.timestamp.timestamp())
    }
}

/// The primary entity representing a tracked work item.
///
/// Built by a decoder from a single `pb` call and never mutated afterwards;
/// the next fetch produces a fresh value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    /// Unique identifier within a project (e.g. `pv-a1b`).
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-form type tag (`task`, `bug`, `epic`, ...).
    #[serde(rename = "type")]
    pub issue_type: String,
    pub status: Status,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Only populated by `pb show`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub siblings: Option<Vec<String>>,
    /// Issues blocking this one. Possibly empty, never absent.
    pub deps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<IssueComment>>,
}

impl Issue {
    /// Creates an issue with only an id and title; everything else defaulted.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Issue {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            issue_type: DEFAULT_ISSUE_TYPE.to_string(),
            status: Status::Open,
            priority: Priority::P2,
            created_at: None,
            updated_at: None,
            closed_at: None,
            parents: None,
            children: None,
            siblings: None,
            deps: Vec::new(),
            comments: None,
        }
    }

    /// Sets the status (builder pattern).
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority (builder pattern).
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the type tag (builder pattern).
    pub fn with_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = issue_type.into();
        self
    }
}

/// A node in a dependency tree as printed by `pb dep tree`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepNode {
    pub issue: Issue,
    pub dependencies: Vec<DepNode>,
}

impl DepNode {
    /// Creates a leaf node.
    pub fn leaf(issue: Issue) -> Self {
        DepNode {
            issue,
            dependencies: Vec::new(),
        }
    }

    /// Id of the issue at this node.
    pub fn id(&self) -> &str {
        &self.issue.id
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .dependencies
            .iter()
            .map(DepNode::node_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
