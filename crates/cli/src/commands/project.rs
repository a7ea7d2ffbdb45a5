// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project-wide operations: init, import and id renames.

use std::path::Path;

use pv_core::RenamePrefixScope;

use crate::error::{Error, Result};

use super::Context;

pub async fn init(ctx: &Context, prefix: Option<&str>) -> Result<()> {
    ctx.client.init_project(&ctx.dir, prefix).await?;
    println!("Initialized pebbles in {}", ctx.dir.display());
    Ok(())
}

pub async fn import(ctx: &Context, from: &Path, backup: bool) -> Result<()> {
    if !from.is_dir() {
        return Err(Error::InvalidValue {
            field: "import source",
            value: from.display().to_string(),
            hint: "--from must point at an existing beads project directory",
        });
    }
    ctx.client.import_beads(&ctx.dir, from, backup).await?;
    println!("Imported issues from {}", from.display());
    Ok(())
}

pub async fn rename(ctx: &Context, old_id: &str, new_id: &str) -> Result<()> {
    ctx.client.rename_issue(&ctx.dir, old_id, new_id).await?;
    println!("Renamed {old_id} to {new_id}");
    Ok(())
}

pub async fn rename_prefix(ctx: &Context, prefix: &str, full: bool) -> Result<()> {
    let scope = if full {
        RenamePrefixScope::Full
    } else {
        RenamePrefixScope::Open
    };
    ctx.client.rename_prefix(&ctx.dir, prefix, scope).await?;
    println!("Renamed issues to prefix {prefix}");
    Ok(())
}
