// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation verdicts and their textual contract.
//!
//! Message strings are consumed verbatim by existing pipeline callers and
//! must not change.

use crate::JobName;
use serde::{Deserialize, Serialize};

/// Message reported when every dependency passes.
pub const SUCCESS_MESSAGE: &str = "All requested jobs look good!";

/// Classified result of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateOutcome {
    Pass,
    /// A dependency does not exist. Not retryable without a config change.
    HardFail,
    /// A dependency is in a transient state. Retryable later.
    Aborted,
    /// The registry could not be reached; nothing was checked.
    Unavailable,
}

impl GateOutcome {
    /// Whether this outcome must be written to the caller's result signal.
    pub fn is_signalled(&self) -> bool {
        matches!(self, GateOutcome::HardFail | GateOutcome::Aborted)
    }

    /// Build result severity the outcome maps to, for signalled outcomes.
    pub fn build_result(&self) -> Option<&'static str> {
        match self {
            GateOutcome::HardFail => Some("FAILURE"),
            GateOutcome::Aborted => Some("ABORTED"),
            GateOutcome::Pass | GateOutcome::Unavailable => None,
        }
    }
}

crate::simple_display! {
    GateOutcome {
        Pass => "pass",
        HardFail => "hard_fail",
        Aborted => "aborted",
        Unavailable => "unavailable",
    }
}

/// Which check a dependency failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Missing,
    Building,
    Queued,
    NeverRun,
    NotSuccessful,
}

impl FailureKind {
    pub fn outcome(&self) -> GateOutcome {
        match self {
            FailureKind::Missing => GateOutcome::HardFail,
            FailureKind::Building
            | FailureKind::Queued
            | FailureKind::NeverRun
            | FailureKind::NotSuccessful => GateOutcome::Aborted,
        }
    }

    /// Short reason, without the job name.
    pub fn reason(&self) -> &'static str {
        match self {
            FailureKind::Missing => "dependency does not exist",
            FailureKind::Building => "currently building",
            FailureKind::Queued => "currently in queue",
            FailureKind::NeverRun => "has never run",
            FailureKind::NotSuccessful => "is not in state SUCCESS",
        }
    }

    /// Caller-facing message for `job`.
    pub fn message(&self, job: &JobName) -> String {
        match self {
            FailureKind::Missing => format!("Job: {job}, does not exist!"),
            // The period after the name is part of the established contract.
            FailureKind::Building => format!("Job: {job}. is currently building!"),
            FailureKind::Queued => format!("Job: {job}, is currently in queue!"),
            FailureKind::NeverRun => format!("Job: {job}, has never run!"),
            FailureKind::NotSuccessful => format!("Job: {job}, is not in state SUCCESS!"),
        }
    }
}

crate::simple_display! {
    FailureKind {
        Missing => "dependency does not exist",
        Building => "currently building",
        Queued => "currently in queue",
        NeverRun => "has never run",
        NotSuccessful => "is not in state SUCCESS",
    }
}

/// Result of validating a dependency list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub outcome: GateOutcome,
    /// First dependency that failed a check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failing: Option<JobName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<FailureKind>,
    /// Number of dependencies fetched from the registry
    pub checked: usize,
    pub message: String,
}

impl Verdict {
    pub fn pass(checked: usize) -> Self {
        Self {
            outcome: GateOutcome::Pass,
            failing: None,
            cause: None,
            checked,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(job: JobName, cause: FailureKind, checked: usize) -> Self {
        Self {
            outcome: cause.outcome(),
            message: cause.message(&job),
            failing: Some(job),
            cause: Some(cause),
            checked,
        }
    }

    pub fn unavailable(checked: usize, detail: impl std::fmt::Display) -> Self {
        Self {
            outcome: GateOutcome::Unavailable,
            failing: None,
            cause: None,
            checked,
            message: format!("Job registry unavailable, dependency checks skipped: {detail}"),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.outcome == GateOutcome::Pass
    }

    pub fn reason(&self) -> Option<&'static str> {
        self.cause.as_ref().map(FailureKind::reason)
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
