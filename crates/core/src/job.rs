// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time view of a job as reported by the registry.

use serde::{Deserialize, Serialize};

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunOutcome {
    Success,
    Unstable,
    Failure,
    NotBuilt,
    Aborted,
    /// Any result the registry reports that we do not recognise
    #[serde(other)]
    Unknown,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success)
    }
}

crate::simple_display! {
    RunOutcome {
        Success => "SUCCESS",
        Unstable => "UNSTABLE",
        Failure => "FAILURE",
        NotBuilt => "NOT_BUILT",
        Aborted => "ABORTED",
        Unknown => "UNKNOWN",
    }
}

/// The most recent completed run of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedRun {
    pub number: u64,
    pub outcome: RunOutcome,
}

impl CompletedRun {
    pub fn new(number: u64, outcome: RunOutcome) -> Self {
        Self { number, outcome }
    }
}

/// Fresh read of one job. Never cached: every check asks the registry again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub exists: bool,
    pub building: bool,
    pub queued: bool,
    /// `None` when the job has never completed a run
    pub last_completed: Option<CompletedRun>,
    /// Number of the last run that finished with [`RunOutcome::Success`]
    pub last_successful: Option<u64>,
}

impl JobSnapshot {
    /// Snapshot for a name the registry does not know.
    pub fn missing() -> Self {
        Self {
            exists: false,
            building: false,
            queued: false,
            last_completed: None,
            last_successful: None,
        }
    }

    /// Outcome of the last completed run, if any.
    pub fn last_outcome(&self) -> Option<RunOutcome> {
        self.last_completed.map(|run| run.outcome)
    }
}

crate::builder! {
    pub struct JobSnapshotBuilder => JobSnapshot {
        set {
            exists: bool = true,
            building: bool = false,
            queued: bool = false,
        }
        option {
            last_completed: CompletedRun = Some(CompletedRun::new(1, RunOutcome::Success)),
            last_successful: u64 = Some(1),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl JobSnapshotBuilder {
    /// Job exists but has no completed run.
    pub fn never_run(mut self) -> Self {
        self.last_completed = None;
        self.last_successful = None;
        self
    }

    /// Last completed run ended with `outcome`.
    pub fn last_outcome(self, outcome: RunOutcome) -> Self {
        self.last_completed(CompletedRun::new(1, outcome))
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
