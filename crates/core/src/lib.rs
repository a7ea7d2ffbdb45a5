// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pv-core: output interpretation layer for the `pb` issue tracker
//!
//! This crate runs `pb` (and `git`) as external processes and turns their
//! JSON, NDJSON and box-drawn text output into typed domain values. It is
//! shared by the `pebview` front-end and any other caller.

pub mod client;
pub mod config;
pub mod dates;
pub mod error;
pub mod event;
pub mod git;
pub mod issue;
pub mod json;
pub mod process;
pub mod text;
pub mod tree;

pub use client::{Client, IssueUpdate, ListQuery, LogQuery, NewIssue, RenamePrefixScope};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use event::{Event, EventKind};
pub use git::{GitCommit, LastCommit, WorkerInfo};
pub use issue::{DepNode, Issue, IssueComment, Priority, Status};
pub use process::{ProcessOutput, ProcessRunner, RunnerConfig};
