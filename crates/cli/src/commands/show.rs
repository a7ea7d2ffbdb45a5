// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;

use crate::cli::OutputFormat;
use crate::display::format_issue_details;
use crate::error::Result;

use super::{print_json, Context};

pub async fn run(ctx: &Context, id: &str, format: OutputFormat) -> Result<()> {
    let issue = ctx.client.show_issue(&ctx.dir, id).await?;
    match format {
        OutputFormat::Json => print_json(&issue),
        OutputFormat::Text => {
            println!("{}", format_issue_details(&issue, &Utc::now()));
            Ok(())
        }
    }
}
