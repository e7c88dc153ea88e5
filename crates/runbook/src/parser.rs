// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runbook parsing for HCL, TOML, and JSON

use crate::{CheckDef, FindDef};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source format of a runbook file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Hcl,
    Toml,
    Json,
}

/// Errors from parsing a runbook
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {location}: {message}")]
    InvalidFormat { location: String, message: String },
}

/// Parsed contents of one runbook file.
///
/// Maps keep declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Runbook {
    #[serde(default)]
    pub check: IndexMap<String, CheckDef>,
    #[serde(default)]
    pub find: IndexMap<String, FindDef>,
}

impl Runbook {
    pub fn get_check(&self, name: &str) -> Option<&CheckDef> {
        self.check.get(name)
    }

    pub fn get_finder(&self, name: &str) -> Option<&FindDef> {
        self.find.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.check.is_empty() && self.find.is_empty()
    }
}

/// Parse a TOML runbook.
pub fn parse_runbook(content: &str) -> Result<Runbook, ParseError> {
    parse_runbook_with_format(content, Format::Toml)
}

/// Parse a runbook in the given format, inject names, and validate it.
pub fn parse_runbook_with_format(content: &str, format: Format) -> Result<Runbook, ParseError> {
    let mut runbook: Runbook = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };

    for (name, check) in runbook.check.iter_mut() {
        check.name = name.clone();
    }
    for (name, finder) in runbook.find.iter_mut() {
        finder.name = name.clone();
    }

    validate(&runbook)?;
    Ok(runbook)
}

fn validate(runbook: &Runbook) -> Result<(), ParseError> {
    for (name, check) in &runbook.check {
        if let Some(pos) = check.deps.iter().position(|d| d.trim().is_empty()) {
            return Err(ParseError::InvalidFormat {
                location: format!("check.{name}.deps[{pos}]"),
                message: "dependency name must not be empty".to_string(),
            });
        }
    }
    for name in runbook.find.keys() {
        if runbook.check.contains_key(name) {
            return Err(ParseError::InvalidFormat {
                location: format!("find.{name}"),
                message: format!("'{name}' is already defined as a check"),
            });
        }
    }
    Ok(())
}
