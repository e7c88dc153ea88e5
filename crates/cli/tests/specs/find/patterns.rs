//! `gk find` pattern selection

use crate::prelude::*;

#[test]
fn include_then_exclude() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["find", "-i", "test-.*", "-x", "test-y-.*"])
        .passes()
        .stdout_eq("test-x-a\ntest-x-b\n");
}

#[test]
fn patterns_match_whole_name() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["find", "-i", "test"])
        .passes()
        .stdout_eq("");
}

#[test]
fn results_keep_registry_order() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["find", "-i", "lint", "-i", "build", "--delimiter", ","])
        .passes()
        .stdout_eq("build,lint\n");
}

#[test]
fn missing_include_is_a_configuration_error() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["find", "-x", "test-.*"])
        .fails()
        .stderr_has("includes must be provided");
}

#[test]
fn invalid_pattern_is_reported() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["find", "-i", "test-("])
        .exits(1)
        .stderr_has("invalid pattern");
}

#[test]
fn unavailable_registry_finds_nothing() {
    Project::empty()
        .gk()
        .args(&["find", "-i", ".*"])
        .passes()
        .stdout_eq("");
}

#[test]
fn named_finder() {
    let project = Project::with_registry(pipeline());
    project.file(
        ".gk/gates/find.toml",
        "[find.tests]\nincludes = [\"test-.*\"]\nexcludes = [\"test-x-b\"]\n",
    );
    project
        .gk()
        .args(&["find", "--gate", "tests", "-o", "json"])
        .passes()
        .stdout_has("\"test-x-a\"")
        .stdout_has("\"test-y-a\"")
        .stdout_lacks("test-x-b");
}
