//! Checks defined in the runbooks directory

use crate::prelude::*;

fn project() -> Project {
    let project = Project::with_registry(pipeline());
    project.file(
        ".gk/gates/release.hcl",
        r#"# Release gates
#
# Guards the release pipeline.

check "release" {
  deps = ["build", "lint"]
}

check "tolerant" {
  deps       = ["ghost", "flaky"]
  job_exists = false
  hasRun     = false
  isSuccess  = false
}

find "tests" {
  includes = ["test-.*"]
  excludes = ["test-y-.*"]
}
"#,
    );
    project
}

#[test]
fn named_check_uses_its_dependencies() {
    project()
        .gk()
        .args(&["check", "--gate", "release"])
        .passes()
        .stdout_has("All requested jobs look good!");
}

#[test]
fn named_check_applies_its_rules() {
    project().gk().args(&["check", "--gate", "tolerant"]).passes();
}

#[test]
fn allow_flags_relax_named_check() {
    let project = project();
    project.file(
        ".gk/gates/strict.toml",
        "[check.strict]\ndeps = [\"deploy\"]\n",
    );
    project.gk().args(&["check", "--gate", "strict"]).exits(3);
    project
        .gk()
        .args(&["check", "--gate", "strict", "--allow-building"])
        .passes();
}

#[test]
fn unknown_check_is_an_error() {
    project()
        .gk()
        .args(&["check", "--gate", "nope"])
        .exits(1)
        .stderr_has("check 'nope' not found");
}

#[test]
fn gates_lists_checks_and_finders() {
    project()
        .gk()
        .args(&["gates"])
        .passes()
        .stdout_has("release")
        .stdout_has("tolerant")
        .stdout_has("tests")
        .stdout_has("Release gates");
}
