// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{parse_runbook, parse_runbook_with_format, Format, ParseError};
use gk_core::{JobName, ValidationRules};

#[test]
fn parse_hcl_check_defaults_to_all_rules() {
    let hcl = r#"
check "deploy" {
  deps = ["build", "test"]
}
"#;
    let runbook = parse_runbook_with_format(hcl, Format::Hcl).unwrap();
    let check = runbook.get_check("deploy").unwrap();
    assert_eq!(check.name, "deploy");
    assert_eq!(check.dependencies(), vec![JobName::new("build"), JobName::new("test")]);
    assert_eq!(check.rules(), ValidationRules::default());
}

#[test]
fn parse_toml_check_with_disabled_rules() {
    let toml = r#"
[check.nightly]
deps = ["lib"]
is_building = false
in_queue = false
"#;
    let runbook = parse_runbook(toml).unwrap();
    let rules = runbook.get_check("nightly").unwrap().rules();
    assert_eq!(
        rules,
        ValidationRules::default().is_building(false).in_queue(false)
    );
}

#[test]
fn parse_json_check_with_camel_case_flags() {
    let json = r#"{
  "check": {
    "legacy": {
      "deps": ["a"],
      "jobExists": false,
      "isBuilding": false,
      "inQueue": false,
      "hasRun": false,
      "isSuccess": false
    }
  }
}"#;
    let runbook = parse_runbook_with_format(json, Format::Json).unwrap();
    assert_eq!(runbook.get_check("legacy").unwrap().rules(), ValidationRules::none());
}

#[test]
fn check_without_deps_is_allowed() {
    let runbook = parse_runbook("[check.noop]\n").unwrap();
    assert!(runbook.get_check("noop").unwrap().deps.is_empty());
}

#[test]
fn checks_keep_declaration_order() {
    let toml = r#"
[check.zeta]
deps = ["z"]

[check.alpha]
deps = ["a"]
"#;
    let runbook = parse_runbook(toml).unwrap();
    let names: Vec<_> = runbook.check.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
}

#[test]
fn error_blank_dependency_name() {
    let toml = r#"
[check.deploy]
deps = ["build", " "]
"#;
    let err = parse_runbook(toml).unwrap_err();
    assert!(matches!(err, ParseError::InvalidFormat { .. }));
    assert!(err.to_string().contains("check.deploy.deps[1]"));
}

#[test]
fn error_flag_with_wrong_type() {
    let toml = r#"
[check.deploy]
deps = ["build"]
is_building = "no"
"#;
    assert!(matches!(parse_runbook(toml), Err(ParseError::Toml(_))));
}

#[test]
fn error_name_used_for_check_and_finder() {
    let hcl = r#"
check "shared" {
  deps = ["a"]
}

find "shared" {
  includes = [".*"]
}
"#;
    let err = parse_runbook_with_format(hcl, Format::Hcl).unwrap_err();
    assert!(matches!(err, ParseError::InvalidFormat { .. }));
}

#[test]
fn empty_document_is_empty_runbook() {
    assert!(parse_runbook("").unwrap().is_empty());
    assert!(parse_runbook_with_format("{}", Format::Json).unwrap().is_empty());
}
