// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gk-core: Data model and collaborator traits for the gatekeeper (gk) tool

pub mod macros;

pub mod job;
pub mod name;
pub mod registry;
pub mod rules;
pub mod verdict;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use job::{CompletedRun, JobSnapshot, RunOutcome};
#[cfg(any(test, feature = "test-support"))]
pub use job::JobSnapshotBuilder;
pub use name::JobName;
pub use registry::{AccessContext, AllowAll, JobRegistry, OutcomeSink, RegistryError};
pub use rules::ValidationRules;
pub use verdict::{FailureKind, GateOutcome, Verdict, SUCCESS_MESSAGE};
