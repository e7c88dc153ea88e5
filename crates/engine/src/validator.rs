// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency gate: checks upstream jobs before a build may proceed.

use crate::error::{check_cancelled, GateError};
use gk_core::{
    FailureKind, JobName, JobRegistry, JobSnapshot, OutcomeSink, RegistryError, ValidationRules,
    Verdict,
};
use tokio_util::sync::CancellationToken;

/// Validates a list of dependencies against a registry.
///
/// Dependencies are checked in the order given. The first failing check on
/// the first failing dependency ends the run; later dependencies are never
/// fetched.
pub struct DependencyValidator<R> {
    registry: R,
    cancel: Option<CancellationToken>,
}

impl<R: JobRegistry> DependencyValidator<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            cancel: None,
        }
    }

    /// Stop before the next dependency once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Evaluate `deps` and signal `sink` if the gate does not pass.
    ///
    /// The sink is written at most once, and only for hard failures and
    /// aborts.
    pub fn validate(
        &self,
        deps: &[JobName],
        rules: &ValidationRules,
        mut sink: impl OutcomeSink,
    ) -> Result<Verdict, GateError> {
        let verdict = self.evaluate(deps, rules)?;
        if verdict.outcome.is_signalled() {
            sink.set_outcome(verdict.outcome);
        }
        Ok(verdict)
    }

    /// Evaluate `deps` without signalling anything.
    pub fn evaluate(&self, deps: &[JobName], rules: &ValidationRules) -> Result<Verdict, GateError> {
        if deps.is_empty() || !rules.any_enabled() {
            return Ok(Verdict::pass(0));
        }

        let mut checked = 0;
        for dep in deps {
            check_cancelled(self.cancel.as_ref())?;
            tracing::info!(job = %dep, "Testing Job: {dep}");

            let snapshot = match self.registry.snapshot(dep) {
                Ok(snapshot) => snapshot,
                Err(RegistryError::Unavailable(reason)) => {
                    tracing::warn!(job = %dep, checked, %reason, "job registry unavailable");
                    return Ok(Verdict::unavailable(checked, reason));
                }
            };
            checked += 1;

            if let Some(kind) = first_failure(&snapshot, rules) {
                let verdict = Verdict::failed(dep.clone(), kind, checked);
                tracing::warn!(
                    job = %dep,
                    outcome = %verdict.outcome,
                    reason = kind.reason(),
                    "{}",
                    verdict.message
                );
                return Ok(verdict);
            }
        }

        let verdict = Verdict::pass(checked);
        tracing::info!(checked, "{}", verdict.message);
        Ok(verdict)
    }
}

/// First active check `snapshot` fails, in fixed check order.
fn first_failure(snapshot: &JobSnapshot, rules: &ValidationRules) -> Option<FailureKind> {
    if rules.job_exists && !snapshot.exists {
        return Some(FailureKind::Missing);
    }
    if rules.is_building && snapshot.building {
        return Some(FailureKind::Building);
    }
    if rules.in_queue && snapshot.queued {
        return Some(FailureKind::Queued);
    }
    let last = snapshot.last_outcome();
    if rules.has_run && last.is_none() {
        return Some(FailureKind::NeverRun);
    }
    if rules.is_success && !last.is_some_and(|o| o.is_success()) {
        return Some(FailureKind::NotSuccessful);
    }
    None
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
