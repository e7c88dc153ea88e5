// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure type definitions for the registry document.

use chrono::{DateTime, Utc};
use gk_core::{CompletedRun, JobName, JobSnapshot, RunOutcome};
use serde::{Deserialize, Serialize};

/// Whole registry export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryDocument {
    /// Users that can read every job
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admins: Vec<String>,
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
}

/// One job in the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub name: JobName,
    #[serde(default)]
    pub building: bool,
    #[serde(default)]
    pub queued: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed: Option<RunRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_successful: Option<u64>,
    /// Users allowed to read the job; `None` means everyone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readers: Option<Vec<String>>,
}

impl JobRecord {
    pub fn new(name: impl Into<JobName>) -> Self {
        Self {
            name: name.into(),
            building: false,
            queued: false,
            last_completed: None,
            last_successful: None,
            readers: None,
        }
    }

    pub fn snapshot(&self) -> JobSnapshot {
        JobSnapshot {
            exists: true,
            building: self.building,
            queued: self.queued,
            last_completed: self
                .last_completed
                .as_ref()
                .map(|run| CompletedRun::new(run.number, run.outcome)),
            last_successful: self.last_successful,
        }
    }
}

/// A completed run as exported by the build system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub number: u64,
    pub outcome: RunOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}
