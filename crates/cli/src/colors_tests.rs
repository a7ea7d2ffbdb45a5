// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

/// Expected escape sequence for a color code
fn expected_fg(code: u8) -> String {
    format!("\x1b[38;5;{}m", code)
}

#[test]
fn header_wraps_text() {
    let out = header("Comments:");
    assert!(out.starts_with(&expected_fg(codes::HEADER)));
    assert!(out.ends_with(codes::RESET));
    assert!(out.contains("Comments:"));
}

#[test]
fn context_wraps_text() {
    assert_eq!(
        context("2025-01-20"),
        format!("{}2025-01-20{}", expected_fg(codes::CONTEXT), codes::RESET)
    );
}

#[parameterized(
    open = { Status::Open, codes::OPEN },
    in_progress = { Status::InProgress, codes::IN_PROGRESS },
    closed = { Status::Closed, codes::CLOSED },
)]
fn status_colors(s: Status, code: u8) {
    assert_eq!(status_code(s), code);
    assert!(status("x", s).starts_with(&expected_fg(code)));
}

#[parameterized(
    p0 = { Priority::P0, true },
    p1 = { Priority::P1, true },
    p2 = { Priority::P2, false },
    p4 = { Priority::P4, false },
)]
fn priority_colors(p: Priority, urgent: bool) {
    let out = priority(p.label(), p);
    assert_eq!(out.contains('\x1b'), urgent);
    assert!(out.contains(p.label()));
}
