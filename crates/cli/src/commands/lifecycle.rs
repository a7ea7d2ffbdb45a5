// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::Result;

use super::Context;

pub async fn close(ctx: &Context, id: &str) -> Result<()> {
    ctx.client.close_issue(&ctx.dir, id).await?;
    println!("Closed {id}");
    Ok(())
}

pub async fn reopen(ctx: &Context, id: &str) -> Result<()> {
    ctx.client.reopen_issue(&ctx.dir, id).await?;
    println!("Reopened {id}");
    Ok(())
}

pub async fn comment(ctx: &Context, id: &str, body: &str) -> Result<()> {
    ctx.client.add_comment(&ctx.dir, id, body).await?;
    println!("Commented on {id}");
    Ok(())
}
