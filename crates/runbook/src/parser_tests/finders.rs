// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{parse_runbook, parse_runbook_with_format, Format};

#[test]
fn parse_hcl_finder() {
    let hcl = r#"
find "upstream" {
  includes = ["^test-x-.*$"]
  excludes = ["^.*x-0$"]
}
"#;
    let runbook = parse_runbook_with_format(hcl, Format::Hcl).unwrap();
    let finder = runbook.get_finder("upstream").unwrap();
    assert_eq!(finder.name, "upstream");
    assert_eq!(finder.includes(), Some(&["^test-x-.*$".to_string()][..]));
    assert_eq!(finder.excludes, vec!["^.*x-0$".to_string()]);
}

#[test]
fn excludes_default_to_empty() {
    let runbook = parse_runbook("[find.all]\nincludes = [\".*\"]\n").unwrap();
    assert!(runbook.get_finder("all").unwrap().excludes.is_empty());
}

#[test]
fn missing_includes_parse_as_none() {
    let runbook = parse_runbook("[find.broken]\nexcludes = [\"x\"]\n").unwrap();
    assert_eq!(runbook.get_finder("broken").unwrap().includes(), None);
}

#[test]
fn empty_includes_are_kept_distinct_from_missing() {
    let runbook = parse_runbook("[find.nothing]\nincludes = []\n").unwrap();
    assert_eq!(runbook.get_finder("nothing").unwrap().includes(), Some(&[][..]));
}

#[test]
fn blank_patterns_survive_parsing() {
    let json = r#"{"find": {"f": {"includes": ["", "a"]}}}"#;
    let runbook = parse_runbook_with_format(json, Format::Json).unwrap();
    assert_eq!(runbook.get_finder("f").unwrap().includes().map(<[String]>::len), Some(2));
}
