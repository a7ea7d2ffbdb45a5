// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A fake `pb` that records its arguments and prints canned output.
///
/// The script lives next to a `project/` directory that commands run in.
pub struct FakePb {
    root: TempDir,
}

impl FakePb {
    pub fn new(stdout: &str) -> Self {
        Self::with_result(stdout, "", 0)
    }

    pub fn failing(stderr: &str, exit_code: i32) -> Self {
        Self::with_result("", stderr, exit_code)
    }

    pub fn with_result(stdout: &str, stderr: &str, exit_code: i32) -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("project")).unwrap();
        fs::write(root.path().join("stdout.txt"), stdout).unwrap();
        fs::write(root.path().join("stderr.txt"), stderr).unwrap();

        let script = root.path().join("pb");
        fs::write(
            &script,
            format!(
                r#"#!/bin/sh
d="$(dirname "$0")"
for arg in "$@"; do printf '%s\n' "$arg" >> "$d/args.txt"; done
cat "$d/stdout.txt"
cat "$d/stderr.txt" >&2
exit {exit_code}
"#
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        FakePb { root }
    }

    pub fn script(&self) -> PathBuf {
        self.root.path().join("pb")
    }

    pub fn project(&self) -> PathBuf {
        self.root.path().join("project")
    }

    /// Arguments from every invocation, one per line, in order.
    pub fn args(&self) -> Vec<String> {
        fs::read_to_string(self.root.path().join("args.txt"))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    /// `pebview` pointed at this fake and its project directory.
    pub fn pebview(&self) -> Command {
        let mut cmd = pebview_isolated(self.root.path());
        cmd.arg("--pb")
            .arg(self.script())
            .arg("-C")
            .arg(self.project());
        cmd
    }
}

/// `pebview` with a config path that does not exist and colors off.
pub fn pebview_isolated(scratch: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("pebview");
    cmd.env("PEBBLEVISION_CONFIG", scratch.join("no-config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

pub const LIST_JSON: &str = r#"[
  {"id": "pv-a1b", "title": "Fix login bug", "type": "bug", "status": "open", "priority": "P1",
   "created_at": "2025-01-20T10:30:00Z", "deps": ["pv-xyz"]},
  {"id": "pv-c3d", "title": "Add dark mode", "type": "feature", "status": "in_progress", "priority": "P2",
   "created_at": "2025-01-21T09:00:00Z", "deps": []}
]"#;

pub const SHOW_JSON: &str = r#"{
  "id": "pv-a1b",
  "title": "Fix login bug",
  "description": "Users can't log in with SSO.",
  "type": "bug",
  "status": "open",
  "priority": "P1",
  "created_at": "2025-01-20T10:30:00Z",
  "updated_at": "2025-01-20T12:00:00Z",
  "closed_at": "",
  "deps": ["pv-xyz"],
  "parents": ["pv-g7h"],
  "siblings": [],
  "children": [],
  "comments": [{"body": "Confirmed.", "timestamp": "2025-01-20T11:00:00Z"}]
}"#;

pub const TREE_TEXT: &str = "pv-g7h\n├── pv-a1b - Fix login bug [OPEN]\n│   └── pv-xyz - Set up OAuth provider [OPEN]\n└── pv-c3d - Add dark mode [IN_PROGRESS]\n";

pub const LOG_NDJSON: &str = concat!(
    r#"{"line":1,"timestamp":"2025-01-20T10:30:00Z","type":"create","label":"Created","issue_id":"pv-a1b","issue_title":"Fix login bug","actor":"sam"}"#,
    "\n",
    r#"{"line":2,"timestamp":"2025-01-20T11:00:00Z","type":"status_update","label":"Status","issue_id":"pv-a1b","details":"open -> in_progress"}"#,
    "\n",
);
