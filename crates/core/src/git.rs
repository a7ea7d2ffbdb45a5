// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git context for an issue: commits that mention it, branches named after
//! it, and worker worktrees.
//!
//! Git is optional. Any failure (no repository, git missing, non-zero exit)
//! reads as "nothing found" and is only logged at debug level.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::dates::parse_timestamp;
use crate::process::ProcessRunner;

const GIT: &str = "git";
const COMMIT_FORMAT: &str = "--format=%H|%h|%s|%an|%aI";
const LAST_COMMIT_FORMAT: &str = "--format=%h|%s|%an|%aI";

/// A commit whose message mentions an issue id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitCommit {
    pub sha: String,
    pub short_sha: String,
    pub message: String,
    pub author: String,
    /// `None` when git printed a date that could not be read.
    pub date: Option<DateTime<Utc>>,
}

/// Most recent commit on a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastCommit {
    pub short_sha: String,
    pub message: String,
    pub author: String,
    pub date: Option<DateTime<Utc>>,
}

/// A worker branch associated with an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerInfo {
    pub branch: String,
    /// Whether `git worktree list` mentions the issue.
    pub is_worktree: bool,
    pub last_commit: Option<LastCommit>,
}

/// Parses `git log --format=%H|%h|%s|%an|%aI` output.
///
/// The subject may itself contain `|`; hashes are taken from the front and
/// author and date from the back. Lines with fewer than five fields are
/// skipped.
pub fn parse_commits(output: &str) -> Vec<GitCommit> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut front = line.splitn(3, '|');
            let sha = front.next()?;
            let short_sha = front.next()?;
            let (message, author, date) = split_tail(front.next()?)?;
            Some(GitCommit {
                sha: sha.to_string(),
                short_sha: short_sha.to_string(),
                message,
                author,
                date,
            })
        })
        .collect()
}

/// Parses `git log -1 --format=%h|%s|%an|%aI` output.
pub fn parse_last_commit(output: &str) -> Option<LastCommit> {
    let line = output.trim();
    let (short_sha, rest) = line.split_once('|')?;
    let (message, author, date) = split_tail(rest)?;
    Some(LastCommit {
        short_sha: short_sha.to_string(),
        message,
        author,
        date,
    })
}

/// Splits `message|author|date`, where only the message may contain `|`.
fn split_tail(rest: &str) -> Option<(String, String, Option<DateTime<Utc>>)> {
    let mut back = rest.rsplitn(3, '|');
    let date = back.next()?;
    let author = back.next()?;
    let message = back.next()?;
    Some((
        message.to_string(),
        author.to_string(),
        parse_timestamp(date).ok(),
    ))
}

/// Parses `git branch --all --list` output into branch names.
pub fn parse_branches(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix("* ").unwrap_or(line).trim().to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Runs git and returns stdout, or `None` on any failure.
async fn run_git(runner: &ProcessRunner, dir: &Path, args: &[&str]) -> Option<String> {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    match runner.run(GIT, &args, dir, &HashMap::new()).await {
        Ok(output) if output.success() => Some(output.stdout),
        Ok(output) => {
            debug!(?args, code = output.exit_code, "git failed");
            None
        }
        Err(e) => {
            debug!(?args, error = %e, "git unavailable");
            None
        }
    }
}

/// Commits on any branch whose message mentions `issue_id`.
pub async fn find_commits(runner: &ProcessRunner, dir: &Path, issue_id: &str) -> Vec<GitCommit> {
    let grep = format!("--grep={issue_id}");
    run_git(runner, dir, &["log", "--all", &grep, COMMIT_FORMAT])
        .await
        .map(|out| parse_commits(&out))
        .unwrap_or_default()
}

/// Local and remote branches whose name contains `issue_id`.
pub async fn find_branches(runner: &ProcessRunner, dir: &Path, issue_id: &str) -> Vec<String> {
    let pattern = format!("*{issue_id}*");
    run_git(runner, dir, &["branch", "--all", "--list", &pattern])
        .await
        .map(|out| parse_branches(&out))
        .unwrap_or_default()
}

/// Whether the repository has at least one remote.
pub async fn has_remote(runner: &ProcessRunner, dir: &Path) -> bool {
    run_git(runner, dir, &["remote"])
        .await
        .is_some_and(|out| !out.trim().is_empty())
}

/// Finds the worker branch for `issue_id`, if any.
///
/// Uses the first branch whose name contains the id, and reports whether a
/// worktree mentions the id along with the branch's latest commit.
pub async fn discover_worker(
    runner: &ProcessRunner,
    dir: &Path,
    issue_id: &str,
) -> Option<WorkerInfo> {
    let branch = find_branches(runner, dir, issue_id)
        .await
        .into_iter()
        .next()?;

    let is_worktree = run_git(runner, dir, &["worktree", "list"])
        .await
        .is_some_and(|out| out.contains(issue_id));

    let last_commit = run_git(runner, dir, &["log", "-1", LAST_COMMIT_FORMAT, &branch])
        .await
        .and_then(|out| parse_last_commit(&out));

    Some(WorkerInfo {
        branch,
        is_worktree,
        last_commit,
    })
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
