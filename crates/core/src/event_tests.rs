// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

fn make_event(event_type: &str, label: Option<&str>) -> Event {
    Event {
        line: Some(1),
        timestamp: Utc.with_ymd_and_hms(2025, 1, 20, 10, 30, 0).unwrap(),
        event_type: event_type.to_string(),
        label: label.map(str::to_string),
        issue_id: "pv-a1b".to_string(),
        issue_title: None,
        actor: None,
        actor_date: None,
        details: None,
        payload: HashMap::new(),
    }
}

#[parameterized(
    create = { "create", EventKind::Create },
    title_updated = { "title_updated", EventKind::TitleUpdated },
    status_update = { "status_update", EventKind::StatusUpdate },
    update = { "update", EventKind::Update },
    close = { "close", EventKind::Close },
    comment = { "comment", EventKind::Comment },
    rename = { "rename", EventKind::Rename },
    dep_add = { "dep_add", EventKind::DepAdd },
    dep_rm = { "dep_rm", EventKind::DepRm },
)]
fn event_kind_round_trip(tag: &str, expected: EventKind) {
    let kind: EventKind = tag.parse().unwrap();
    assert_eq!(kind, expected);
    assert_eq!(kind.as_str(), tag);
}

#[test]
fn unknown_event_type_has_no_kind() {
    let event = make_event("archived", None);
    assert_eq!(event.kind(), None);
    assert_eq!(event.display_label(), "archived");
}

#[test]
fn display_label_prefers_label() {
    let event = make_event("status_update", Some("Status changed"));
    assert_eq!(event.kind(), Some(EventKind::StatusUpdate));
    assert_eq!(event.display_label(), "Status changed");
}

