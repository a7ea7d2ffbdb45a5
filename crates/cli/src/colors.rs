// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for issue output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use pv_core::{Priority, Status};

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Dates, ids and other context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Open issues: light grey
    pub const OPEN: u8 = 250;
    /// In-progress issues: amber
    pub const IN_PROGRESS: u8 = 214;
    /// Closed issues: dim grey
    pub const CLOSED: u8 = 240;
    /// P0 and P1: red
    pub const URGENT: u8 = 167;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, codes::RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply context color (dates, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Color code for a status.
pub fn status_code(status: Status) -> u8 {
    match status {
        Status::Open => codes::OPEN,
        Status::InProgress => codes::IN_PROGRESS,
        Status::Closed => codes::CLOSED,
    }
}

/// Apply the status color to text.
pub fn status(text: &str, status: Status) -> String {
    paint(status_code(status), text)
}

/// Apply the urgent color to P0/P1 labels; others are left plain.
pub fn priority(text: &str, priority: Priority) -> String {
    if priority <= Priority::P1 {
        paint(codes::URGENT, text)
    } else {
        text.to_string()
    }
}

/// Colors a whole issue line by status when colors are enabled.
pub fn issue_line(line: &str, issue_status: Status) -> String {
    if should_colorize() {
        status(line, issue_status)
    } else {
        line.to_string()
    }
}

/// Colors a section header when colors are enabled.
pub fn section(text: &str) -> String {
    if should_colorize() {
        header(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
