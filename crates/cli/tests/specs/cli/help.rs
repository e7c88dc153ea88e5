//! CLI help output specs

use crate::prelude::*;

#[test]
fn gk_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("check")
        .stdout_has("find")
        .stdout_has("build-number")
        .stdout_has("gates");
}

#[test]
fn gk_check_help_lists_allow_flags() {
    cli()
        .args(&["check", "--help"])
        .passes()
        .stdout_has("--allow-missing")
        .stdout_has("--allow-unsuccessful")
        .stdout_has("--status-file");
}

#[test]
fn gk_without_subcommand_is_a_usage_error() {
    cli().exits(2).stderr_has("Usage:");
}

#[test]
fn gk_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
