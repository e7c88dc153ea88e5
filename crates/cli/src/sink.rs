// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result signal written for downstream tooling.

use gk_core::{GateOutcome, OutcomeSink};
use std::path::PathBuf;

/// Writes the build result (`FAILURE` or `ABORTED`) to a status file.
///
/// Without a path nothing is written.
#[derive(Debug, Default)]
pub struct StatusFile {
    path: Option<PathBuf>,
    error: Option<std::io::Error>,
}

impl StatusFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            error: None,
        }
    }

    /// Surface a failed write, if any.
    pub fn finish(self) -> std::io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl OutcomeSink for StatusFile {
    fn set_outcome(&mut self, outcome: GateOutcome) {
        let (Some(path), Some(result)) = (&self.path, outcome.build_result()) else {
            return;
        };
        if let Err(e) = std::fs::write(path, format!("{result}\n")) {
            tracing::error!(path = %path.display(), error = %e, "cannot write status file");
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
