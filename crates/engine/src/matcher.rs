// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job discovery by include/exclude patterns.

use crate::error::{check_cancelled, GateError};
use crate::PatternPolicy;
use gk_core::{AccessContext, JobName, JobRegistry, RegistryError};
use tokio_util::sync::CancellationToken;

/// Finds the jobs a [`PatternPolicy`] selects and the caller may read.
///
/// Unlike the validator this never stops early: a non-match or a hidden job
/// says nothing about the next one.
#[derive(Debug, Default)]
pub struct JobMatcher {
    cancel: Option<CancellationToken>,
}

impl JobMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop before the next job once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Filter `jobs`, preserving their order.
    ///
    /// Pattern matching runs first; visibility is only asked for jobs the
    /// policy selects. Hidden jobs are dropped silently.
    pub fn find_matches<'a>(
        &self,
        policy: &PatternPolicy,
        jobs: impl IntoIterator<Item = &'a JobName>,
        access: impl AccessContext,
    ) -> Result<Vec<JobName>, GateError> {
        let mut found = Vec::new();
        if policy.is_empty() {
            return Ok(found);
        }
        for job in jobs {
            check_cancelled(self.cancel.as_ref())?;
            if !policy.selects(job) {
                continue;
            }
            if !access.can_read(job) {
                tracing::debug!(job = %job, "skipping job hidden from caller");
                continue;
            }
            found.push(job.clone());
        }
        Ok(found)
    }

    /// Enumerate `registry` and filter it.
    ///
    /// An unavailable registry yields an empty list.
    pub fn discover(
        &self,
        policy: &PatternPolicy,
        registry: impl JobRegistry,
        access: impl AccessContext,
    ) -> Result<Vec<JobName>, GateError> {
        if policy.is_empty() {
            return Ok(Vec::new());
        }
        let jobs = match registry.list_all() {
            Ok(jobs) => jobs,
            Err(RegistryError::Unavailable(reason)) => {
                tracing::warn!(%reason, "job registry unavailable, no jobs discovered");
                return Ok(Vec::new());
            }
        };
        let found = self.find_matches(policy, &jobs, access)?;
        tracing::info!(scanned = jobs.len(), matched = found.len(), "job discovery finished");
        Ok(found)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
