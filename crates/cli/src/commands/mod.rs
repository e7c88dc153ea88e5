// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommands

pub mod build_number;
pub mod check;
pub mod find;
pub mod gates;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Subcommand;
use gk_engine::CancellationToken;
use gk_storage::RegistryStore;

use crate::output::OutputFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Check that upstream jobs are healthy before this job runs
    Check(check::CheckArgs),
    /// List jobs whose names match include/exclude patterns
    Find(find::FindArgs),
    /// Print the number of a job's last successful run
    BuildNumber(build_number::BuildNumberArgs),
    /// List checks and finders defined in the runbooks directory
    Gates,
}

/// Settings shared by every subcommand.
pub struct Context {
    pub registry: PathBuf,
    pub runbooks: PathBuf,
    pub format: OutputFormat,
    pub cancel: CancellationToken,
}

impl Context {
    pub fn open_registry(&self) -> Result<RegistryStore> {
        RegistryStore::open(&self.registry)
            .with_context(|| format!("loading registry {}", self.registry.display()))
    }
}

pub fn dispatch(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::Check(args) => check::handle(args, ctx),
        Commands::Find(args) => find::handle(args, ctx),
        Commands::BuildNumber(args) => build_number::handle(args, ctx),
        Commands::Gates => gates::handle(ctx),
    }
}
