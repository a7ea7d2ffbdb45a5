// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pvrs - the `pebview` front-end for the pebbles (`pb`) issue tracker.
//!
//! Every command shells out to `pb` through [`pv_core::Client`], decodes
//! the output into typed values and renders them as text or JSON.
//!
//! # Main Components
//!
//! - [`Cli`] - clap command definitions and global flags
//! - [`logging`] - tracing subscriber setup for `-v` and `RUST_LOG`
//! - [`colors`] - ANSI styling honoring `NO_COLOR` and `COLOR`
//! - [`Error`] - front-end errors wrapping [`pv_core::Error`]

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, DepCommand, ListArgs, OutputFormat};
pub use error::{Error, Result};

use commands::Context;
use pv_core::IssueUpdate;

/// Runs a parsed command line to completion.
pub async fn run(cli: Cli) -> Result<()> {
    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        Command::Init { prefix } => commands::project::init(&ctx, prefix.as_deref()).await,
        Command::Import { from, backup } => commands::project::import(&ctx, &from, backup).await,
        Command::List { filter, output } => commands::list::run(&ctx, &filter, output).await,
        Command::Ready { output } => commands::list::run_ready(&ctx, output).await,
        Command::Show { id, output } => commands::show::run(&ctx, &id, output).await,
        Command::Tree { id, output } => commands::tree::run(&ctx, &id, output).await,
        Command::Log {
            limit,
            since,
            until,
            git,
            output,
        } => {
            let query = commands::log::build_query(limit, since, until, git)?;
            commands::log::run(&ctx, &query, output).await
        }
        Command::Create {
            title,
            issue_type,
            priority,
            description,
        } => {
            commands::create::run(
                &ctx,
                &title,
                issue_type.as_deref(),
                priority,
                description.as_deref(),
            )
            .await
        }
        Command::Update {
            id,
            status,
            title,
            issue_type,
            priority,
            description,
            parent,
        } => {
            let update = IssueUpdate {
                status,
                title,
                issue_type,
                priority,
                description,
                parent,
            };
            commands::create::run_update(&ctx, &id, &update).await
        }
        Command::Close { id } => commands::lifecycle::close(&ctx, &id).await,
        Command::Reopen { id } => commands::lifecycle::reopen(&ctx, &id).await,
        Command::Comment { id, body } => commands::lifecycle::comment(&ctx, &id, &body).await,
        Command::Dep { command } => commands::dep::run(&ctx, &command).await,
        Command::Rename { old_id, new_id } => {
            commands::project::rename(&ctx, &old_id, &new_id).await
        }
        Command::RenamePrefix { prefix, full } => {
            commands::project::rename_prefix(&ctx, &prefix, full).await
        }
        Command::Git { id, output } => commands::git::run(&ctx, &id, output).await,
        Command::Version => commands::version::run(&ctx).await,
    }
}
