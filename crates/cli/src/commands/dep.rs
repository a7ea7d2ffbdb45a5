// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::DepCommand;
use crate::error::{Error, Result};

use super::Context;

pub async fn run(ctx: &Context, command: &DepCommand) -> Result<()> {
    match command {
        DepCommand::Add { from, to, dep_type } => {
            check_distinct(from, to)?;
            ctx.client
                .add_dependency(&ctx.dir, from, to, dep_type.as_deref())
                .await?;
            println!("{from} now depends on {to}");
        }
        DepCommand::Rm { from, to, dep_type } => {
            ctx.client
                .remove_dependency(&ctx.dir, from, to, dep_type.as_deref())
                .await?;
            println!("{from} no longer depends on {to}");
        }
    }
    Ok(())
}

/// An issue cannot depend on itself.
fn check_distinct(from: &str, to: &str) -> Result<()> {
    if from == to {
        return Err(Error::InvalidValue {
            field: "dependency",
            value: format!("{from} -> {to}"),
            hint: "an issue cannot depend on itself",
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "dep_tests.rs"]
mod tests;
