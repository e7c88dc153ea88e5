// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborators the gate reads from and reports to.
//!
//! The gate never constructs these itself; callers inject them so tests can
//! substitute fakes.

use crate::{GateOutcome, JobName, JobSnapshot};
use thiserror::Error;

/// Errors a registry may report.
///
/// A missing job is not an error: registries report it as
/// `JobSnapshot { exists: false, .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("job registry unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the jobs known to the build system.
pub trait JobRegistry {
    /// Fresh snapshot of a single job.
    fn snapshot(&self, name: &JobName) -> Result<JobSnapshot, RegistryError>;

    /// Every job name, in the registry's own enumeration order.
    fn list_all(&self) -> Result<Vec<JobName>, RegistryError>;
}

impl<T: JobRegistry + ?Sized> JobRegistry for &T {
    fn snapshot(&self, name: &JobName) -> Result<JobSnapshot, RegistryError> {
        (**self).snapshot(name)
    }

    fn list_all(&self) -> Result<Vec<JobName>, RegistryError> {
        (**self).list_all()
    }
}

/// Visibility check for the identity running the gate.
///
/// Implementations must not fail: any internal error means "cannot read".
pub trait AccessContext {
    fn can_read(&self, name: &JobName) -> bool;
}

impl<T: AccessContext + ?Sized> AccessContext for &T {
    fn can_read(&self, name: &JobName) -> bool {
        (**self).can_read(name)
    }
}

/// Access context that can read every job.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessContext for AllowAll {
    fn can_read(&self, _name: &JobName) -> bool {
        true
    }
}

/// Receiver for the build-result signal set on a failing validation.
///
/// Called at most once per validation run.
pub trait OutcomeSink {
    fn set_outcome(&mut self, outcome: GateOutcome);
}

impl<T: OutcomeSink + ?Sized> OutcomeSink for &mut T {
    fn set_outcome(&mut self, outcome: GateOutcome) {
        (**self).set_outcome(outcome)
    }
}

/// Sink that discards the signal, for callers that only want the verdict.
impl OutcomeSink for () {
    fn set_outcome(&mut self, _outcome: GateOutcome) {}
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
