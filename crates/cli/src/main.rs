// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gk - Dependency gates for job pipelines

mod commands;
mod exit_error;
mod output;
mod sink;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gk_engine::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

use commands::{Commands, Context};
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "gk", version, about = "Dependency gates for job pipelines")]
struct Cli {
    /// Registry document (`.json` or `.json.zst`)
    #[arg(long, global = true, env = "GK_REGISTRY", default_value = ".gk/registry.json")]
    registry: PathBuf,

    /// Directory holding check and finder definitions
    #[arg(long, global = true, env = "GK_RUNBOOK_DIR", default_value = ".gk/gates")]
    runbooks: PathBuf,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, global = true, default_value_t)]
    output: OutputFormat,

    /// Log progress to stderr (overridden by GK_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_env("GK_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, stopping");
            interrupt.cancel();
        }
    });

    let ctx = Context {
        registry: cli.registry,
        runbooks: cli.runbooks,
        format: cli.output,
        cancel,
    };
    let command = cli.command;
    let result = match tokio::task::spawn_blocking(move || commands::dispatch(command, &ctx)).await
    {
        Ok(result) => result,
        Err(e) => Err(anyhow::anyhow!("command task failed: {e}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(exit_status(&e)),
    }
}

/// Report `err` on stderr and pick the process exit status.
fn exit_status(err: &anyhow::Error) -> u8 {
    if let Some(exit) = err.downcast_ref::<ExitError>() {
        if !exit.message.is_empty() {
            eprintln!("Error: {}", exit.message);
        }
        return u8::try_from(exit.code).unwrap_or(1);
    }
    eprintln!("Error: {err:#}");
    1
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
