// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed async API over the `pb` command line.
//!
//! Each operation builds an argument vector, runs `pb` through the process
//! gateway, classifies a failed exit, and routes stdout to the matching
//! decoder. Argument building is pure and lives on the request types
//! ([`NewIssue`], [`ListQuery`], [`IssueUpdate`], [`LogQuery`]).

use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::debug;

use crate::config::ClientConfig;
use crate::dates::format_cli_timestamp;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::issue::{DepNode, Issue, Priority, Status};
use crate::json::{parse_event_log, parse_issue_detail, parse_issue_list, parse_ready_list};
use crate::process::{ProcessOutput, ProcessRunner};
use crate::text::{parse_create_output, parse_version};
use crate::tree::parse_dep_tree;

/// Fields for `pb create`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub issue_type: Option<String>,
    pub priority: Option<Priority>,
    pub description: Option<String>,
}

impl NewIssue {
    pub fn new(title: impl Into<String>) -> Self {
        NewIssue {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = Some(issue_type.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "create".to_string(),
            "--title".to_string(),
            self.title.clone(),
        ];
        push_opt(&mut args, "--type", self.issue_type.as_deref());
        push_opt(&mut args, "--priority", self.priority.map(|p| p.label()));
        push_opt(&mut args, "--description", self.description.as_deref());
        args
    }
}

/// Filters for `pb list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Empty means the tool's default status filter.
    pub statuses: Vec<Status>,
    pub issue_type: Option<String>,
    pub priority: Option<Priority>,
    pub stale: bool,
    pub stale_days: Option<u32>,
    pub all: bool,
}

impl ListQuery {
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["list".to_string(), "--json".to_string()];
        if !self.statuses.is_empty() {
            let mut names: Vec<&str> = Vec::new();
            for status in &self.statuses {
                if !names.contains(&status.as_str()) {
                    names.push(status.as_str());
                }
            }
            args.push("--status".to_string());
            args.push(names.join(","));
        }
        push_opt(&mut args, "--type", self.issue_type.as_deref());
        push_opt(&mut args, "--priority", self.priority.map(|p| p.label()));
        if self.stale {
            args.push("--stale".to_string());
        }
        if let Some(days) = self.stale_days {
            args.push("--stale-days".to_string());
            args.push(days.to_string());
        }
        if self.all {
            args.push("--all".to_string());
        }
        args
    }
}

/// Changes for `pb update`. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueUpdate {
    pub status: Option<Status>,
    pub title: Option<String>,
    pub issue_type: Option<String>,
    pub priority: Option<Priority>,
    pub description: Option<String>,
    pub parent: Option<String>,
}

impl IssueUpdate {
    pub fn is_empty(&self) -> bool {
        *self == IssueUpdate::default()
    }

    pub fn to_args(&self, id: &str) -> Vec<String> {
        let mut args = vec!["update".to_string(), id.to_string()];
        push_opt(&mut args, "--status", self.status.map(|s| s.as_str()));
        push_opt(&mut args, "--title", self.title.as_deref());
        push_opt(&mut args, "--type", self.issue_type.as_deref());
        push_opt(&mut args, "--priority", self.priority.map(|p| p.label()));
        push_opt(&mut args, "--description", self.description.as_deref());
        push_opt(&mut args, "--parent", self.parent.as_deref());
        args
    }
}

/// Window and options for `pb log`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub limit: Option<usize>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
    /// Include git-derived events (`--no-git` is passed otherwise).
    pub include_git: bool,
}

impl LogQuery {
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            "--json".to_string(),
            "--no-pager".to_string(),
        ];
        if !self.include_git {
            args.push("--no-git".to_string());
        }
        if let Some(limit) = self.limit {
            args.push("--limit".to_string());
            args.push(limit.to_string());
        }
        if let Some(since) = &self.since {
            args.push("--since".to_string());
            args.push(format_cli_timestamp(since));
        }
        if let Some(until) = &self.until {
            args.push("--until".to_string());
            args.push(format_cli_timestamp(until));
        }
        args
    }
}

/// Which issues `pb rename-prefix` touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenamePrefixScope {
    /// Only open issues.
    Open,
    /// Every issue.
    Full,
}

impl RenamePrefixScope {
    pub fn flag(&self) -> &'static str {
        match self {
            RenamePrefixScope::Open => "--open",
            RenamePrefixScope::Full => "--full",
        }
    }
}

fn push_opt(args: &mut Vec<String>, flag: &str, value: Option<&str>) {
    if let Some(value) = value {
        args.push(flag.to_string());
        args.push(value.to_string());
    }
}

/// Converts a non-zero exit into [`Error::CommandFailed`].
pub fn check_output(output: ProcessOutput) -> Result<ProcessOutput> {
    if output.success() {
        Ok(output)
    } else {
        Err(Error::CommandFailed {
            exit_code: output.exit_code,
            stderr: output.stderr,
        })
    }
}

/// Like [`check_output`], but reports a "not found" diagnostic as
/// [`Error::NotFound`] for `id`.
pub fn check_issue_output(output: ProcessOutput, id: &str) -> Result<ProcessOutput> {
    if !output.success() && output.stderr.to_ascii_lowercase().contains("not found") {
        return Err(Error::NotFound(id.to_string()));
    }
    check_output(output)
}

/// Client for one `pb` installation.
#[derive(Debug, Clone, Default)]
pub struct Client {
    config: ClientConfig,
    runner: ProcessRunner,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        let runner = ProcessRunner::with_config(config.runner_config());
        Client { config, runner }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn runner(&self) -> &ProcessRunner {
        &self.runner
    }

    async fn pb(&self, dir: &Path, args: Vec<String>) -> Result<ProcessOutput> {
        self.runner
            .run(&self.config.pb_path, &args, dir, &self.config.env)
            .await
    }

    /// Runs a command and returns stdout if it succeeded.
    async fn pb_checked(&self, dir: &Path, args: Vec<String>) -> Result<String> {
        Ok(check_output(self.pb(dir, args).await?)?.stdout)
    }

    /// Runs a command that targets a single issue.
    async fn pb_issue(&self, dir: &Path, id: &str, args: Vec<String>) -> Result<String> {
        Ok(check_issue_output(self.pb(dir, args).await?, id)?.stdout)
    }

    // Project setup

    pub async fn init_project(&self, dir: &Path, prefix: Option<&str>) -> Result<()> {
        let mut args = vec!["init".to_string()];
        push_opt(&mut args, "--prefix", prefix);
        self.pb_checked(dir, args).await?;
        Ok(())
    }

    pub async fn import_beads(&self, dir: &Path, from: &Path, backup: bool) -> Result<()> {
        let mut args = vec![
            "import".to_string(),
            "beads".to_string(),
            "--from".to_string(),
            from.display().to_string(),
        ];
        if backup {
            args.push("--backup".to_string());
        }
        self.pb_checked(dir, args).await?;
        Ok(())
    }

    // Issues

    /// Creates an issue and returns its new id.
    pub async fn create_issue(&self, dir: &Path, issue: &NewIssue) -> Result<String> {
        let stdout = self.pb_checked(dir, issue.to_args()).await?;
        let id = parse_create_output(&stdout);
        if id.is_empty() {
            return Err(Error::Parse("create printed no issue id".to_string()));
        }
        Ok(id)
    }

    pub async fn list_issues(&self, dir: &Path, query: &ListQuery) -> Result<Vec<Issue>> {
        let stdout = self.pb_checked(dir, query.to_args()).await?;
        parse_issue_list(&stdout)
    }

    /// Fetches one issue with hierarchy and comments.
    pub async fn show_issue(&self, dir: &Path, id: &str) -> Result<Issue> {
        let args = vec!["show".to_string(), "--json".to_string(), id.to_string()];
        let stdout = self.pb_issue(dir, id, args).await?;
        parse_issue_detail(&stdout)
    }

    pub async fn update_issue(&self, dir: &Path, id: &str, update: &IssueUpdate) -> Result<()> {
        self.pb_issue(dir, id, update.to_args(id)).await?;
        Ok(())
    }

    pub async fn close_issue(&self, dir: &Path, id: &str) -> Result<()> {
        self.pb_issue(dir, id, vec!["close".to_string(), id.to_string()])
            .await?;
        Ok(())
    }

    pub async fn reopen_issue(&self, dir: &Path, id: &str) -> Result<()> {
        self.pb_issue(dir, id, vec!["reopen".to_string(), id.to_string()])
            .await?;
        Ok(())
    }

    pub async fn add_comment(&self, dir: &Path, id: &str, body: &str) -> Result<()> {
        let args = vec![
            "comment".to_string(),
            id.to_string(),
            "--body".to_string(),
            body.to_string(),
        ];
        self.pb_issue(dir, id, args).await?;
        Ok(())
    }

    // Dependencies

    /// Makes `from` depend on `to`.
    pub async fn add_dependency(
        &self,
        dir: &Path,
        from: &str,
        to: &str,
        dep_type: Option<&str>,
    ) -> Result<()> {
        self.pb_checked(dir, dep_args("add", from, to, dep_type))
            .await?;
        Ok(())
    }

    pub async fn remove_dependency(
        &self,
        dir: &Path,
        from: &str,
        to: &str,
        dep_type: Option<&str>,
    ) -> Result<()> {
        self.pb_checked(dir, dep_args("rm", from, to, dep_type))
            .await?;
        Ok(())
    }

    /// Fetches and decodes the dependency tree rooted at `id`.
    pub async fn dependency_tree(&self, dir: &Path, id: &str) -> Result<DepNode> {
        let args = vec!["dep".to_string(), "tree".to_string(), id.to_string()];
        let stdout = self.pb_issue(dir, id, args).await?;
        let root = parse_dep_tree(&stdout)
            .ok_or_else(|| Error::Parse(format!("empty dependency tree for {id}")))?;
        debug!(id, nodes = root.node_count(), "decoded dependency tree");
        Ok(root)
    }

    // Queries

    /// Issues with no open blocking dependencies.
    pub async fn ready_issues(&self, dir: &Path) -> Result<Vec<Issue>> {
        let stdout = self
            .pb_checked(dir, vec!["ready".to_string(), "--json".to_string()])
            .await?;
        parse_ready_list(&stdout)
    }

    pub async fn event_log(&self, dir: &Path, query: &LogQuery) -> Result<Vec<Event>> {
        let stdout = self.pb_checked(dir, query.to_args()).await?;
        parse_event_log(&stdout)
    }

    // Ids

    pub async fn rename_issue(&self, dir: &Path, old_id: &str, new_id: &str) -> Result<()> {
        let args = vec!["rename".to_string(), old_id.to_string(), new_id.to_string()];
        self.pb_issue(dir, old_id, args).await?;
        Ok(())
    }

    pub async fn rename_prefix(
        &self,
        dir: &Path,
        prefix: &str,
        scope: RenamePrefixScope,
    ) -> Result<()> {
        let args = vec![
            "rename-prefix".to_string(),
            scope.flag().to_string(),
            prefix.to_string(),
        ];
        self.pb_checked(dir, args).await?;
        Ok(())
    }

    /// Version of the installed `pb`, run from the current directory.
    pub async fn version(&self) -> Result<String> {
        let cwd = std::env::current_dir()?;
        let stdout = self.pb_checked(&cwd, vec!["version".to_string()]).await?;
        Ok(parse_version(&stdout))
    }
}

fn dep_args(action: &str, from: &str, to: &str, dep_type: Option<&str>) -> Vec<String> {
    let mut args = vec![
        "dep".to_string(),
        action.to_string(),
        from.to_string(),
        to.to_string(),
    ];
    push_opt(&mut args, "--type", dep_type);
    args
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
