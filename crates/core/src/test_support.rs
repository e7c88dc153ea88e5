// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fakes for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{
    AccessContext, GateOutcome, JobName, JobRegistry, JobSnapshot, OutcomeSink, RegistryError,
};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core types.
pub mod strategies {
    use crate::{CompletedRun, JobSnapshot, RunOutcome, ValidationRules};
    use proptest::prelude::*;

    pub fn arb_run_outcome() -> impl Strategy<Value = RunOutcome> {
        prop_oneof![
            Just(RunOutcome::Success),
            Just(RunOutcome::Unstable),
            Just(RunOutcome::Failure),
            Just(RunOutcome::NotBuilt),
            Just(RunOutcome::Aborted),
            Just(RunOutcome::Unknown),
        ]
    }

    pub fn arb_snapshot() -> impl Strategy<Value = JobSnapshot> {
        (
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            proptest::option::of((1u64..500, arb_run_outcome())),
        )
            .prop_map(|(exists, building, queued, last)| JobSnapshot {
                exists,
                building,
                queued,
                last_completed: last.map(|(n, o)| CompletedRun::new(n, o)),
                last_successful: last.and_then(|(n, o)| o.is_success().then_some(n)),
            })
    }

    pub fn arb_rules() -> impl Strategy<Value = ValidationRules> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(job_exists, is_building, in_queue, has_run, is_success)| ValidationRules {
                job_exists,
                is_building,
                in_queue,
                has_run,
                is_success,
            },
        )
    }
}

// ── Fake registry ───────────────────────────────────────────────────────

#[derive(Default)]
struct FakeRegistryState {
    jobs: Vec<(JobName, JobSnapshot)>,
    snapshot_calls: Vec<JobName>,
    list_calls: usize,
    /// Registry goes offline after this many successful snapshot calls
    available_for: Option<usize>,
}

/// In-memory registry that records every call.
#[derive(Clone, Default)]
pub struct FakeRegistry {
    inner: Arc<Mutex<FakeRegistryState>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a job. Insertion order is the enumeration order.
    pub fn with_job(self, name: &str, snapshot: JobSnapshot) -> Self {
        self.insert(name, snapshot);
        self
    }

    pub fn insert(&self, name: &str, snapshot: JobSnapshot) {
        let mut state = self.inner.lock();
        let name = JobName::new(name);
        match state.jobs.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = snapshot,
            None => state.jobs.push((name, snapshot)),
        }
    }

    /// Every call fails with [`RegistryError::Unavailable`].
    pub fn offline(self) -> Self {
        self.inner.lock().available_for = Some(0);
        self
    }

    /// Serve `n` snapshot calls, then go offline.
    pub fn offline_after(self, n: usize) -> Self {
        self.inner.lock().available_for = Some(n);
        self
    }

    pub fn snapshot_calls(&self) -> Vec<JobName> {
        self.inner.lock().snapshot_calls.clone()
    }

    pub fn snapshot_call_count(&self) -> usize {
        self.inner.lock().snapshot_calls.len()
    }

    pub fn list_call_count(&self) -> usize {
        self.inner.lock().list_calls
    }

    fn check_online(state: &FakeRegistryState) -> Result<(), RegistryError> {
        match state.available_for {
            Some(n) if state.snapshot_calls.len() >= n => {
                Err(RegistryError::Unavailable("fake registry offline".to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl JobRegistry for FakeRegistry {
    fn snapshot(&self, name: &JobName) -> Result<JobSnapshot, RegistryError> {
        let mut state = self.inner.lock();
        Self::check_online(&state)?;
        state.snapshot_calls.push(name.clone());
        let snapshot = state
            .jobs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s.clone())
            .unwrap_or_else(JobSnapshot::missing);
        Ok(snapshot)
    }

    fn list_all(&self) -> Result<Vec<JobName>, RegistryError> {
        let mut state = self.inner.lock();
        Self::check_online(&state)?;
        state.list_calls += 1;
        Ok(state.jobs.iter().map(|(n, _)| n.clone()).collect())
    }
}

// ── Fake access context ─────────────────────────────────────────────────

/// Access context that hides a fixed set of jobs and counts queries.
#[derive(Clone, Default)]
pub struct FakeAccess {
    hidden: HashSet<JobName>,
    queries: Arc<Mutex<Vec<JobName>>>,
}

impl FakeAccess {
    pub fn hiding<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            hidden: names.into_iter().map(JobName::from).collect(),
            queries: Arc::default(),
        }
    }

    pub fn queries(&self) -> Vec<JobName> {
        self.queries.lock().clone()
    }
}

impl AccessContext for FakeAccess {
    fn can_read(&self, name: &JobName) -> bool {
        self.queries.lock().push(name.clone());
        !self.hidden.contains(name)
    }
}

// ── Recording sink ──────────────────────────────────────────────────────

/// Sink that records every outcome it is given.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub outcomes: Vec<GateOutcome>,
}

impl OutcomeSink for RecordingSink {
    fn set_outcome(&mut self, outcome: GateOutcome) {
        self.outcomes.push(outcome);
    }
}
