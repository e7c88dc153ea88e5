// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Args;
use gk_core::JobName;

use super::Context;
use crate::exit_error::ExitError;
use crate::output::format_or_json;

#[derive(Args)]
pub struct BuildNumberArgs {
    /// Job to look up
    pub job: String,
}

pub fn handle(args: BuildNumberArgs, ctx: &Context) -> Result<()> {
    let registry = ctx.open_registry()?;
    let job = JobName::from(args.job);
    let number = gk_engine::last_successful_build(&registry, &job);

    format_or_json(ctx.format, &number, || {
        if let Some(n) = number {
            println!("{n}");
        }
    })?;
    match number {
        Some(_) => Ok(()),
        None => Err(ExitError::new(1, format!("no successful build of {job}")).into()),
    }
}
