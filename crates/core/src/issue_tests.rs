// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

// Status parsing tests
#[parameterized(
    open = { "open", Status::Open },
    in_progress = { "in_progress", Status::InProgress },
    closed = { "closed", Status::Closed },
    closed_upper = { "CLOSED", Status::Closed },
)]
fn status_from_str_valid(input: &str, expected: Status) {
    assert_eq!(input.parse::<Status>().unwrap(), expected);
}

#[parameterized(
    invalid = { "invalid" },
    empty = { "" },
    todo = { "todo" },
)]
fn status_from_str_invalid(input: &str) {
    assert!(input.parse::<Status>().is_err());
}

#[test]
fn status_sort_order_follows_lifecycle() {
    assert!(Status::Open.sort_order() < Status::InProgress.sort_order());
    assert!(Status::InProgress.sort_order() < Status::Closed.sort_order());
}

// Priority label tests
#[parameterized(
    p0 = { "P0", Priority::P0 },
    p1 = { "P1", Priority::P1 },
    p2 = { "P2", Priority::P2 },
    p3 = { "P3", Priority::P3 },
    p4 = { "P4", Priority::P4 },
    p0_lower = { "p0", Priority::P0 },
    p4_lower = { "p4", Priority::P4 },
)]
fn priority_label_round_trips(input: &str, expected: Priority) {
    let priority = Priority::from_label(input).unwrap();
    assert_eq!(priority, expected);
    assert_eq!(Priority::from_ordinal(priority.ordinal()), Some(priority));
    assert_eq!(priority.label(), input.to_uppercase());
}

#[parameterized(
    empty = { "" },
    missing_prefix = { "2" },
    out_of_range = { "P5" },
    two_digits = { "P10" },
    non_numeric = { "Px" },
    wrong_prefix = { "Q1" },
    bare_p = { "P" },
    trailing_space = { "P1 " },
)]
fn priority_label_no_match(input: &str) {
    assert_eq!(Priority::from_label(input), None);
}

#[test]
fn priority_defaults_to_p2() {
    assert_eq!(Priority::default(), Priority::P2);
}

#[test]
fn priority_total_order() {
    assert!(Priority::P0 < Priority::P1);
    assert!(Priority::P3 < Priority::P4);
    let mut all = vec![Priority::P4, Priority::P0, Priority::P2];
    all.sort();
    assert_eq!(all, vec![Priority::P0, Priority::P2, Priority::P4]);
}

#[test]
fn priority_from_str_error_mentions_input() {
    let err = "urgent".parse::<Priority>().unwrap_err();
    assert!(err.to_string().contains("urgent"));
}

#[test]
fn priority_serializes_as_label() {
    assert_eq!(serde_json::to_string(&Priority::P1).unwrap(), "\"P1\"");
}

#[test]
fn issue_new_uses_defaults() {
    let issue = Issue::new("pv-1", "Title");
    assert_eq!(issue.issue_type, "task");
    assert_eq!(issue.status, Status::Open);
    assert_eq!(issue.priority, Priority::P2);
    assert!(issue.deps.is_empty());
    assert!(issue.parents.is_none());
    assert!(issue.comments.is_none());
}

#[test]
fn issue_serializes_type_key() {
    let issue = Issue::new("pv-1", "Title").with_type("bug");
    let json = serde_json::to_value(&issue).unwrap();
    assert_eq!(json["type"], "bug");
    assert_eq!(json["status"], "open");
    assert_eq!(json["priority"], "P2");
    assert!(json.get("closed_at").is_none());
}

#[test]
fn comment_id_is_derived_from_body_and_timestamp() {
    let ts = Utc.with_ymd_and_hms(2025, 1, 20, 11, 0, 0).unwrap();
    let a = IssueComment {
        body: "hello".into(),
        timestamp: ts,
    };
    let b = a.clone();
    let c = IssueComment {
        body: "other".into(),
        timestamp: ts,
    };
    assert_eq!(a.id(), b.id());
    assert_ne!(a.id(), c.id());
    assert!(a.id().ends_with(&ts.timestamp().to_string()));
}

#[test]
fn dep_node_count() {
    let tree = DepNode {
        issue: Issue::new("root", ""),
        dependencies: vec![
            DepNode {
                issue: Issue::new("a", "A"),
                dependencies: vec![DepNode::leaf(Issue::new("a1", "A1"))],
            },
            DepNode::leaf(Issue::new("b", "B")),
        ],
    };
    assert_eq!(tree.node_count(), 4);
}
