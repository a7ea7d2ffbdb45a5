// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::Result;

use super::Context;

pub async fn run(ctx: &Context) -> Result<()> {
    println!("pebview {}", env!("CARGO_PKG_VERSION"));
    let pb_version = ctx.client.version().await?;
    println!("pb {pb_version}");
    Ok(())
}
