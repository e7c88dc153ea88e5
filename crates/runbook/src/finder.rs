// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job finder definition

use serde::{Deserialize, Serialize};

/// A named job finder.
///
/// `includes` stays optional here so that a missing list reaches the
/// pattern compiler, which rejects it as a configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindDef {
    /// Finder name (injected from map key)
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub includes: Option<Vec<String>>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

impl FindDef {
    pub fn includes(&self) -> Option<&[String]> {
        self.includes.as_deref()
    }
}
