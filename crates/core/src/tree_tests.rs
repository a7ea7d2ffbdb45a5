// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::{Priority, Status};
use yare::parameterized;

const SAMPLE_TREE: &str = "\
pv-g7h
├── pv-a1b - Fix login bug [OPEN]
│   └── pv-xyz - Set up OAuth provider [OPEN]
└── pv-c3d - Add dark mode [IN_PROGRESS]
";

fn entry(depth: usize, id: &str) -> TreeEntry {
    TreeEntry {
        depth,
        issue: Issue::new(id, ""),
    }
}

fn child_ids(node: &DepNode) -> Vec<&str> {
    node.dependencies.iter().map(DepNode::id).collect()
}

#[test]
fn parse_sample_tree() {
    let root = parse_dep_tree(SAMPLE_TREE).unwrap();
    assert_eq!(root.id(), "pv-g7h");
    assert_eq!(child_ids(&root), vec!["pv-a1b", "pv-c3d"]);

    let first = &root.dependencies[0];
    assert_eq!(first.issue.title, "Fix login bug");
    assert_eq!(child_ids(first), vec!["pv-xyz"]);
    assert!(first.dependencies[0].dependencies.is_empty());

    let second = &root.dependencies[1];
    assert_eq!(second.issue.status, Status::InProgress);
    assert_eq!(second.issue.title, "Add dark mode");
    assert!(second.dependencies.is_empty());
}

#[test]
fn parse_bare_root_defaults() {
    let root = parse_dep_tree(SAMPLE_TREE).unwrap();
    assert_eq!(root.issue.title, "");
    assert_eq!(root.issue.issue_type, "task");
    assert_eq!(root.issue.status, Status::Open);
    assert_eq!(root.issue.priority, Priority::P2);
}

#[test]
fn parse_single_bare_line() {
    let root = parse_dep_tree("pv-abc").unwrap();
    assert_eq!(root.id(), "pv-abc");
    assert!(root.dependencies.is_empty());

    let root = parse_dep_tree("pv-abc\n").unwrap();
    assert_eq!(root.node_count(), 1);
}

#[parameterized(
    empty = { "" },
    newlines = { "\n\n" },
    spaces = { "   \n  " },
)]
fn parse_empty_is_absent(text: &str) {
    assert!(parse_dep_tree(text).is_none());
}

#[test]
fn parse_decorated_lines() {
    let text = "\
○ pv-root [● P1] [epic] - Launch
├── ◐ pv-a [● P0] [bug] [2025-01-20] - Crash on start
└── ● pv-b [● P3] [chore] - Cleanup
";
    let root = parse_dep_tree(text).unwrap();
    assert_eq!(root.issue.issue_type, "epic");
    assert_eq!(root.issue.priority, Priority::P1);

    let a = &root.dependencies[0];
    assert_eq!(a.issue.status, Status::InProgress);
    assert_eq!(a.issue.priority, Priority::P0);
    assert_eq!(a.issue.title, "Crash on start");

    let b = &root.dependencies[1];
    assert_eq!(b.issue.status, Status::Closed);
    assert_eq!(b.issue.issue_type, "chore");
}

#[test]
fn parse_deep_nesting_with_space_indent() {
    let text = "\
pv-1
└── pv-2 - two
    └── pv-3 - three
        └── pv-4 - four
├── pv-5 - five
";
    let root = parse_dep_tree(text).unwrap();
    assert_eq!(child_ids(&root), vec!["pv-2", "pv-5"]);
    let two = &root.dependencies[0];
    assert_eq!(child_ids(two), vec!["pv-3"]);
    assert_eq!(child_ids(&two.dependencies[0]), vec!["pv-4"]);
}

#[parameterized(
    root = { "pv-g7h", 0 },
    first_level_tee = { "├── pv-a1b - Fix", 1 },
    first_level_corner = { "└── pv-c3d - Add", 1 },
    second_level_bar = { "│   └── pv-xyz - Set up", 2 },
    second_level_space = { "    ├── pv-xyz - Set up", 2 },
    third_level = { "│   │   └── pv-q - Deep", 3 },
    glyph_status_line = { "○ pv-abc - Title", 0 },
)]
fn depth_of_line(line: &str, expected: usize) {
    assert_eq!(measure_depth(line), expected);
}

#[test]
fn clean_line_strips_glyphs() {
    assert_eq!(
        clean_tree_line("│   └── pv-xyz - Set up OAuth provider [OPEN]"),
        "pv-xyz - Set up OAuth provider [OPEN]"
    );
    assert_eq!(clean_tree_line("┌─┬─┐ pv-1 ┘"), "pv-1");
}

#[test]
fn tokenize_sample_tree() {
    let entries = tokenize_tree(SAMPLE_TREE);
    let depths: Vec<usize> = entries.iter().map(|e| e.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 1]);
    assert_eq!(entries[2].issue.id, "pv-xyz");
}

// Reconstruction over pre-tokenized entries

#[test]
fn build_from_entries() {
    let entries = vec![
        entry(0, "r"),
        entry(1, "a"),
        entry(2, "a1"),
        entry(2, "a2"),
        entry(1, "b"),
        entry(2, "b1"),
    ];
    let root = build_tree(&entries).unwrap();
    assert_eq!(child_ids(&root), vec!["a", "b"]);
    assert_eq!(child_ids(&root.dependencies[0]), vec!["a1", "a2"]);
    assert_eq!(child_ids(&root.dependencies[1]), vec!["b1"]);
    assert_eq!(root.node_count(), 6);
}

#[test]
fn build_returns_boundary_index() {
    let entries = vec![entry(1, "a"), entry(2, "a1"), entry(1, "b")];
    let mut ancestors = Vec::new();
    let (node, next) = build_node(&entries, 0, Some(0), &mut ancestors);
    assert_eq!(node.unwrap().node_count(), 2);
    assert_eq!(next, 2);
    assert!(ancestors.is_empty());
}

#[test]
fn build_rejects_entry_at_floor() {
    let entries = vec![entry(1, "a")];
    let mut ancestors = Vec::new();
    let (node, next) = build_node(&entries, 0, Some(1), &mut ancestors);
    assert!(node.is_none());
    assert_eq!(next, 0);
}

#[test]
fn build_ignores_entries_after_root_subtree() {
    let entries = vec![entry(0, "r"), entry(1, "a"), entry(0, "other")];
    let root = build_tree(&entries).unwrap();
    assert_eq!(root.node_count(), 2);
}

#[test]
fn build_empty_is_absent() {
    assert!(build_tree(&[]).is_none());
}

#[test]
fn build_truncates_cycles() {
    let entries = vec![
        entry(0, "a"),
        entry(1, "b"),
        entry(2, "a"),
        entry(3, "b"),
        entry(1, "c"),
    ];
    let root = build_tree(&entries).unwrap();
    assert_eq!(child_ids(&root), vec!["b", "c"]);
    let b = &root.dependencies[0];
    assert_eq!(child_ids(b), vec!["a"]);
    assert!(b.dependencies[0].dependencies.is_empty());
}

#[test]
fn build_bounds_depth() {
    let entries: Vec<TreeEntry> = (0..MAX_TREE_DEPTH + 10)
        .map(|depth| entry(depth, &format!("pv-{depth}")))
        .collect();
    let root = build_tree(&entries).unwrap();

    let mut levels = 1;
    let mut node = &root;
    while let Some(child) = node.dependencies.first() {
        levels += 1;
        node = child;
    }
    assert_eq!(levels, MAX_TREE_DEPTH + 1);
}
