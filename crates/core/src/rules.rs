// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Which dependency checks are active for a validation run.

use serde::{Deserialize, Serialize};

/// Toggles for each dependency check.
///
/// Checks always run in field order; a disabled check is skipped entirely.
/// The default enables everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Fail hard when a dependency does not exist
    pub job_exists: bool,
    /// Abort while a dependency is building
    pub is_building: bool,
    /// Abort while a dependency is waiting in the queue
    pub in_queue: bool,
    /// Abort when a dependency has never completed a run
    pub has_run: bool,
    /// Abort unless the last completed run succeeded
    pub is_success: bool,
}

impl ValidationRules {
    /// Every check disabled; validation passes for any registry content.
    pub fn none() -> Self {
        Self {
            job_exists: false,
            is_building: false,
            in_queue: false,
            has_run: false,
            is_success: false,
        }
    }

    /// True if at least one check is enabled.
    pub fn any_enabled(&self) -> bool {
        self.job_exists || self.is_building || self.in_queue || self.has_run || self.is_success
    }

    crate::setters! {
        set {
            job_exists: bool,
            is_building: bool,
            in_queue: bool,
            has_run: bool,
            is_success: bool,
        }
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            job_exists: true,
            is_building: true,
            in_queue: true,
            has_run: true,
            is_success: true,
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
