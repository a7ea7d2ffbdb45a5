// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::display::format_tree;
use crate::error::Result;

use super::{print_json, Context};

pub async fn run(ctx: &Context, id: &str, format: OutputFormat) -> Result<()> {
    let root = ctx.client.dependency_tree(&ctx.dir, id).await?;
    match format {
        OutputFormat::Json => print_json(&root),
        OutputFormat::Text => {
            for line in format_tree(&root) {
                println!("{line}");
            }
            Ok(())
        }
    }
}
