// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gk check` - Dependency gate

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use gk_core::{JobName, ValidationRules};
use gk_engine::{DependencyValidator, GateError};

use super::Context;
use crate::exit_error::ExitError;
use crate::output::format_or_json;
use crate::sink::StatusFile;

#[derive(Args)]
pub struct CheckArgs {
    /// Jobs to check, in order
    pub deps: Vec<String>,

    /// Use a check defined in the runbooks directory
    #[arg(long, conflicts_with = "deps")]
    pub gate: Option<String>,

    /// Do not fail when a dependency does not exist
    #[arg(long)]
    pub allow_missing: bool,

    /// Do not abort while a dependency is building
    #[arg(long)]
    pub allow_building: bool,

    /// Do not abort while a dependency is queued
    #[arg(long)]
    pub allow_queued: bool,

    /// Do not abort when a dependency has never run
    #[arg(long)]
    pub allow_never_run: bool,

    /// Do not abort when a dependency's last run did not succeed
    #[arg(long)]
    pub allow_unsuccessful: bool,

    /// Write FAILURE or ABORTED here when the gate does not pass
    #[arg(long, env = "GK_STATUS_FILE")]
    pub status_file: Option<PathBuf>,
}

impl CheckArgs {
    /// Apply `--allow-*` flags on top of `base`. Flags only ever relax.
    pub fn rules(&self, base: ValidationRules) -> ValidationRules {
        ValidationRules {
            job_exists: base.job_exists && !self.allow_missing,
            is_building: base.is_building && !self.allow_building,
            in_queue: base.in_queue && !self.allow_queued,
            has_run: base.has_run && !self.allow_never_run,
            is_success: base.is_success && !self.allow_unsuccessful,
        }
    }
}

/// Dependencies and rules from `--gate` or the command line.
fn resolve(args: &CheckArgs, ctx: &Context) -> Result<(Vec<JobName>, ValidationRules)> {
    let Some(gate) = &args.gate else {
        let deps = args.deps.iter().map(JobName::from).collect();
        return Ok((deps, args.rules(ValidationRules::default())));
    };
    let runbook = gk_runbook::find_runbook_by_check(&ctx.runbooks, gate)?
        .ok_or_else(|| anyhow!("check '{gate}' not found in {}", ctx.runbooks.display()))?;
    let def = runbook
        .get_check(gate)
        .ok_or_else(|| anyhow!("check '{gate}' not found"))?;
    Ok((def.dependencies(), args.rules(def.rules())))
}

pub fn handle(args: CheckArgs, ctx: &Context) -> Result<()> {
    let (deps, rules) = resolve(&args, ctx)?;
    let registry = ctx.open_registry()?;
    let validator = DependencyValidator::new(&registry).with_cancellation(ctx.cancel.clone());

    let mut sink = StatusFile::new(args.status_file.clone());
    let verdict = match validator.validate(&deps, &rules, &mut sink) {
        Ok(verdict) => verdict,
        Err(GateError::Cancelled) => return Err(ExitError::cancelled().into()),
    };
    sink.finish()?;

    format_or_json(ctx.format, &verdict, || println!("{}", verdict.message))?;

    match ExitError::for_outcome(verdict.outcome) {
        Some(exit) => Err(exit.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
