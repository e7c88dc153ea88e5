// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of exiting, so `main()` owns process
//! termination.

use gk_core::GateOutcome;
use std::fmt;

/// A dependency does not exist.
pub const EXIT_HARD_FAIL: i32 = 2;
/// A dependency is in a transient state; retry later.
pub const EXIT_ABORTED: i32 = 3;
/// Interrupted before finishing.
pub const EXIT_CANCELLED: i32 = 130;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Exit status for a gate outcome, or `None` when the process should
    /// exit successfully.
    pub fn for_outcome(outcome: GateOutcome) -> Option<Self> {
        match outcome {
            GateOutcome::HardFail => Some(Self::new(EXIT_HARD_FAIL, "")),
            GateOutcome::Aborted => Some(Self::new(EXIT_ABORTED, "")),
            GateOutcome::Pass | GateOutcome::Unavailable => None,
        }
    }

    pub fn cancelled() -> Self {
        Self::new(EXIT_CANCELLED, "cancelled")
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
