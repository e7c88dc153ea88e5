// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency check definition

use gk_core::{JobName, ValidationRules};
use serde::{Deserialize, Serialize};

fn enabled() -> bool {
    true
}

/// A named dependency check.
///
/// Every check flag defaults to on. Flags accept both snake_case and the
/// camelCase spelling used by older pipeline configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDef {
    /// Check name (injected from map key)
    #[serde(skip)]
    pub name: String,
    /// Jobs that must be healthy, checked in this order
    #[serde(default)]
    pub deps: Vec<String>,
    #[serde(default = "enabled", alias = "jobExists")]
    pub job_exists: bool,
    #[serde(default = "enabled", alias = "isBuilding")]
    pub is_building: bool,
    #[serde(default = "enabled", alias = "inQueue")]
    pub in_queue: bool,
    #[serde(default = "enabled", alias = "hasRun")]
    pub has_run: bool,
    #[serde(default = "enabled", alias = "isSuccess")]
    pub is_success: bool,
}

impl CheckDef {
    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            job_exists: self.job_exists,
            is_building: self.is_building,
            in_queue: self.in_queue,
            has_run: self.has_run,
            is_success: self.is_success,
        }
    }

    pub fn dependencies(&self) -> Vec<JobName> {
        self.deps.iter().map(JobName::from).collect()
    }
}
