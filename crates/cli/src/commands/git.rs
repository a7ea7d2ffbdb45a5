// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pv_core::git::{discover_worker, find_branches, find_commits, has_remote};
use pv_core::{GitCommit, WorkerInfo};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::{format_commit, format_worker};
use crate::error::Result;

use super::{print_json, Context};

/// Git activity related to one issue.
#[derive(Debug, Serialize)]
pub struct GitReport {
    pub issue_id: String,
    pub commits: Vec<GitCommit>,
    pub branches: Vec<String>,
    pub worker: Option<WorkerInfo>,
    pub has_remote: bool,
}

impl GitReport {
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty() && self.branches.is_empty() && self.worker.is_none()
    }

    /// Text lines for the report, one section per kind of activity.
    pub fn to_lines(&self) -> Vec<String> {
        if self.is_empty() {
            return vec![format!("No git activity for {}", self.issue_id)];
        }

        let mut lines = Vec::new();
        if !self.commits.is_empty() {
            lines.push(colors::section("Commits:"));
            for commit in &self.commits {
                lines.push(format!("  {}", format_commit(commit)));
            }
        }
        if !self.branches.is_empty() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(colors::section("Branches:"));
            lines.extend(self.branches.iter().map(|b| format!("  {b}")));
        }
        if let Some(worker) = &self.worker {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.extend(format_worker(worker));
        }
        if !self.has_remote {
            lines.push(String::new());
            let note = "(no remote configured)";
            lines.push(if colors::should_colorize() {
                colors::context(note)
            } else {
                note.to_string()
            });
        }
        lines
    }
}

pub async fn run(ctx: &Context, id: &str, format: OutputFormat) -> Result<()> {
    let runner = ctx.client.runner();
    let (commits, branches, worker, has_remote) = tokio::join!(
        find_commits(runner, &ctx.dir, id),
        find_branches(runner, &ctx.dir, id),
        discover_worker(runner, &ctx.dir, id),
        has_remote(runner, &ctx.dir),
    );
    let report = GitReport {
        issue_id: id.to_string(),
        commits,
        branches,
        worker,
        has_remote,
    };

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            for line in report.to_lines() {
                println!("{line}");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
