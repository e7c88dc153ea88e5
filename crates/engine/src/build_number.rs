// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use gk_core::{JobName, JobRegistry};

/// Number of the last successful run of `name`.
///
/// `None` when the job is missing, has never succeeded, or the registry is
/// unavailable.
pub fn last_successful_build(registry: impl JobRegistry, name: &JobName) -> Option<u64> {
    match registry.snapshot(name) {
        Ok(snapshot) if snapshot.exists => snapshot.last_successful,
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(job = %name, error = %e, "cannot look up build number");
            None
        }
    }
}

#[cfg(test)]
#[path = "build_number_tests.rs"]
mod tests;
