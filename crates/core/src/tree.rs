// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoder for `pb dep tree` diagrams.
//!
//! `pb` draws dependency trees with box-drawing glyphs and no other
//! structure:
//!
//! ```text
//! pv-g7h
//! ├── pv-a1b - Fix login bug [OPEN]
//! │   └── pv-xyz - Set up OAuth provider [OPEN]
//! └── pv-c3d - Add dark mode [IN_PROGRESS]
//! ```
//!
//! Decoding happens in two passes. [`tokenize_tree`] turns each line into a
//! flat [`TreeEntry`] (depth + issue), and [`build_tree`] rebuilds the
//! hierarchy from that sequence by index-passing recursive descent.

use crate::issue::{DepNode, Issue};
use crate::text::parse_issue_line;

/// Nesting limit for rebuilt trees. Entries nested deeper are dropped.
pub const MAX_TREE_DEPTH: usize = 64;

/// Width of one indentation group (`│   ` or four spaces).
const INDENT_WIDTH: usize = 4;

const TREE_GLYPHS: [char; 9] = ['├', '└', '─', '│', '┬', '┤', '┌', '┐', '┘'];

/// One line of a tree diagram after tokenizing.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry {
    /// 0 for the root line, 1 for its direct children, and so on.
    pub depth: usize,
    pub issue: Issue,
}

/// Parses `pb dep tree` output. Returns `None` for empty output.
pub fn parse_dep_tree(text: &str) -> Option<DepNode> {
    build_tree(&tokenize_tree(text))
}

/// Tokenizes every non-blank line of a tree diagram.
pub fn tokenize_tree(text: &str) -> Vec<TreeEntry> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let depth = measure_depth(line);
            let cleaned = clean_tree_line(line);
            let issue = parse_issue_line(&cleaned).or_else(|| {
                // The root line may be a bare id.
                (!cleaned.is_empty()).then(|| Issue::new(cleaned.as_str(), ""))
            })?;
            Some(TreeEntry { depth, issue })
        })
        .collect()
}

/// Computes the nesting depth of one diagram line.
///
/// Leading `│` and spaces are indentation; a `├` or `└` ends the scan. The
/// depth is one more than the number of indentation groups before the
/// branch glyph. A line without a branch glyph is a root (depth 0).
pub fn measure_depth(line: &str) -> usize {
    let mut prefix_len = 0;
    for ch in line.chars() {
        match ch {
            '├' | '└' => return prefix_len / INDENT_WIDTH + 1,
            '│' | ' ' => prefix_len += 1,
            _ => break,
        }
    }
    0
}

/// Removes all box-drawing glyphs from a line and trims it.
pub fn clean_tree_line(line: &str) -> String {
    line.chars()
        .filter(|ch| !TREE_GLYPHS.contains(ch))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Rebuilds a tree from tokenized entries, rooted at the first entry.
///
/// Entries after the root's subtree are ignored. A node whose id already
/// appears among its ancestors, or that sits [`MAX_TREE_DEPTH`] levels
/// down, is kept as a leaf and the entries nested under it are skipped.
pub fn build_tree(entries: &[TreeEntry]) -> Option<DepNode> {
    let mut ancestors = Vec::new();
    build_node(entries, 0, None, &mut ancestors).0
}

/// Builds the node at `index` if its depth exceeds `floor`.
///
/// Returns the node (if accepted) and the index of the first entry not
/// consumed; that entry belongs to a sibling or an ancestor.
fn build_node<'a>(
    entries: &'a [TreeEntry],
    index: usize,
    floor: Option<usize>,
    ancestors: &mut Vec<&'a str>,
) -> (Option<DepNode>, usize) {
    let Some(entry) = entries.get(index) else {
        return (None, index);
    };
    if floor.is_some_and(|floor| entry.depth <= floor) {
        return (None, index);
    }

    let mut next = index + 1;
    let is_cycle = ancestors.contains(&entry.issue.id.as_str());
    if is_cycle || ancestors.len() >= MAX_TREE_DEPTH {
        tracing::warn!(
            id = %entry.issue.id,
            cycle = is_cycle,
            "truncating dependency tree"
        );
        while entries.get(next).is_some_and(|e| e.depth > entry.depth) {
            next += 1;
        }
        return (Some(DepNode::leaf(entry.issue.clone())), next);
    }

    ancestors.push(&entry.issue.id);
    let mut children = Vec::new();
    while entries.get(next).is_some_and(|e| e.depth > entry.depth) {
        let (child, after) = build_node(entries, next, Some(entry.depth), ancestors);
        if let Some(child) = child {
            children.push(child);
        }
        next = after;
    }
    ancestors.pop();

    (
        Some(DepNode {
            issue: entry.issue.clone(),
            dependencies: children,
        }),
        next,
    )
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
