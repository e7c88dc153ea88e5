// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gk-runbook: Gate definition files
//!
//! A runbook declares named dependency checks and job finders:
//!
//! ```hcl
//! check "deploy" {
//!   deps        = ["build", "test"]
//!   is_building = false
//! }
//!
//! find "upstream" {
//!   includes = ["^test-.*$"]
//!   excludes = ["^.*-0$"]
//! }
//! ```

mod check;
mod find;
mod finder;
mod parser;

pub use check::CheckDef;
pub use find::{
    collect_all_gates, extract_file_comment, find_runbook_by_check, find_runbook_by_finder,
    FileComment, FindError, GateKind, GateSummary,
};
pub use finder::FindDef;
pub use parser::{parse_runbook, parse_runbook_with_format, Format, ParseError, Runbook};
