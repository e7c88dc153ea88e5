//! `gk check` verdicts and exit codes

use crate::prelude::*;

#[test]
fn healthy_dependencies_pass() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["check", "build", "lint"])
        .passes()
        .stdout_eq("All requested jobs look good!\n");
}

#[test]
fn no_dependencies_pass() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["check"])
        .passes()
        .stdout_has("All requested jobs look good!");
}

#[test]
fn missing_dependency_is_a_hard_failure() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["check", "build", "ghost"])
        .exits(2)
        .stdout_eq("Job: ghost, does not exist!\n");
}

#[test]
fn building_dependency_aborts() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["check", "deploy"])
        .exits(3)
        .stdout_eq("Job: deploy. is currently building!\n");
}

#[test]
fn queued_dependency_aborts() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["check", "docs"])
        .exits(3)
        .stdout_eq("Job: docs, is currently in queue!\n");
}

#[test]
fn never_run_dependency_aborts() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["check", "fresh"])
        .exits(3)
        .stdout_eq("Job: fresh, has never run!\n");
}

#[test]
fn unsuccessful_dependency_aborts() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["check", "flaky"])
        .exits(3)
        .stdout_eq("Job: flaky, is not in state SUCCESS!\n");
}

#[test]
fn first_failure_in_order_wins() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["check", "build", "deploy", "ghost"])
        .exits(3)
        .stdout_has("Job: deploy.")
        .stdout_lacks("ghost");
}

#[test]
fn allow_flags_relax_checks() {
    Project::with_registry(pipeline())
        .gk()
        .args(&[
            "check",
            "ghost",
            "flaky",
            "--allow-missing",
            "--allow-never-run",
            "--allow-unsuccessful",
        ])
        .passes()
        .stdout_has("All requested jobs look good!");
}

#[test]
fn allow_missing_still_aborts_on_never_run() {
    Project::with_registry(pipeline())
        .gk()
        .args(&["check", "ghost", "--allow-missing"])
        .exits(3)
        .stdout_eq("Job: ghost, has never run!\n");
}

#[test]
fn missing_registry_is_unavailable_not_failed() {
    Project::empty()
        .gk()
        .args(&["check", "build"])
        .passes()
        .stdout_has("Job registry unavailable")
        .stderr_has("registry");
}

#[test]
fn compressed_registry_is_read() {
    let project = Project::empty();
    let path = project.compressed("registry.json.zst", &pipeline());
    project
        .gk()
        .args(&["check", "fresh"])
        .env("GK_REGISTRY", &path)
        .exits(3)
        .stdout_has("has never run");
}

#[test]
fn json_output_reports_failing_job() {
    let run = Project::with_registry(pipeline())
        .gk()
        .args(&["check", "build", "docs", "-o", "json"])
        .exits(3);
    let verdict = run.json();
    assert_eq!(verdict["outcome"], "aborted");
    assert_eq!(verdict["failing"], "docs");
    assert_eq!(verdict["cause"], "queued");
    assert_eq!(verdict["checked"], 2);
}
