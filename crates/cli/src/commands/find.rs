// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gk find` - Pattern-based job discovery

use anyhow::{anyhow, Result};
use clap::Args;
use gk_engine::{GateError, JobMatcher, PatternPolicy};

use super::Context;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, join_names};

#[derive(Args)]
pub struct FindArgs {
    /// Full-match regex a job name must satisfy (repeatable)
    #[arg(short = 'i', long = "include")]
    pub includes: Vec<String>,

    /// Full-match regex that drops a job (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub excludes: Vec<String>,

    /// Use a finder defined in the runbooks directory
    #[arg(long, conflicts_with_all = ["includes", "excludes"])]
    pub gate: Option<String>,

    /// Only list jobs this user may read
    #[arg(long, env = "GK_USER")]
    pub user: Option<String>,

    /// Separator between job names (`\n` and `\t` are expanded)
    #[arg(short, long, default_value = "\\n")]
    pub delimiter: String,
}

fn policy(args: &FindArgs, ctx: &Context) -> Result<PatternPolicy> {
    let Some(gate) = &args.gate else {
        let includes = (!args.includes.is_empty()).then_some(args.includes.as_slice());
        return Ok(PatternPolicy::compile(includes, &args.excludes)?);
    };
    let runbook = gk_runbook::find_runbook_by_finder(&ctx.runbooks, gate)?
        .ok_or_else(|| anyhow!("finder '{gate}' not found in {}", ctx.runbooks.display()))?;
    let def = runbook
        .get_finder(gate)
        .ok_or_else(|| anyhow!("finder '{gate}' not found"))?;
    Ok(PatternPolicy::compile(def.includes(), &def.excludes)?)
}

pub fn handle(args: FindArgs, ctx: &Context) -> Result<()> {
    let policy = policy(&args, ctx)?;
    let registry = ctx.open_registry()?;
    let matcher = JobMatcher::new().with_cancellation(ctx.cancel.clone());

    let found = match matcher.discover(&policy, &registry, registry.viewer(args.user.as_deref())) {
        Ok(found) => found,
        Err(GateError::Cancelled) => return Err(ExitError::cancelled().into()),
    };

    format_or_json(ctx.format, &found, || {
        if !found.is_empty() {
            println!("{}", join_names(&found, &args.delimiter));
        }
    })
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
