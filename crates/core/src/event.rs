// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event log entries from `pb log --json`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Event types `pb` is known to emit.
///
/// [`Event::event_type`] stays a free-form string so that new event types
/// decode without error; [`Event::kind`] maps the known ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Issue was created.
    Create,
    /// Issue title changed.
    TitleUpdated,
    /// Issue status changed.
    StatusUpdate,
    /// Any other field changed.
    Update,
    /// Issue was closed.
    Close,
    /// A comment was added.
    Comment,
    /// Issue id was renamed.
    Rename,
    /// A dependency was added.
    DepAdd,
    /// A dependency was removed.
    DepRm,
}

impl EventKind {
    /// Returns the tag used in the event log.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Create => "create",
            EventKind::TitleUpdated => "title_updated",
            EventKind::StatusUpdate => "status_update",
            EventKind::Update => "update",
            EventKind::Close => "close",
            EventKind::Comment => "comment",
            EventKind::Rename => "rename",
            EventKind::DepAdd => "dep_add",
            EventKind::DepRm => "dep_rm",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "create" => Ok(EventKind::Create),
            "title_updated" => Ok(EventKind::TitleUpdated),
            "status_update" => Ok(EventKind::StatusUpdate),
            "update" => Ok(EventKind::Update),
            "close" => Ok(EventKind::Close),
            "comment" => Ok(EventKind::Comment),
            "rename" => Ok(EventKind::Rename),
            "dep_add" => Ok(EventKind::DepAdd),
            "dep_rm" => Ok(EventKind::DepRm),
            _ => Err(Error::Parse(format!("unknown event type: '{s}'"))),
        }
    }
}

/// A single append-only entry from the event log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Line number in the underlying log file, when `pb` reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    pub timestamp: DateTime<Utc>,
    /// Raw event type tag.
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub issue_id: String,
    /// Issue title at the time of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_date: Option<String>,
    /// Human-readable summary of the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub payload: HashMap<String, String>,
}

impl Event {
    /// Known kind of this event, if any.
    pub fn kind(&self) -> Option<EventKind> {
        self.event_type.parse().ok()
    }

    /// The label if `pb` supplied one, otherwise the raw type tag.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.event_type)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
