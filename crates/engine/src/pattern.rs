// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Include/exclude pattern policy for job discovery.

use gk_core::JobName;
use regex::Regex;
use thiserror::Error;

/// Errors from compiling a pattern policy
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("includes must be provided; use an empty list to match nothing")]
    MissingIncludes,
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
}

/// A compiled pattern that only matches whole job names.
#[derive(Debug, Clone)]
struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    fn compile(source: &str) -> Result<Self, PolicyError> {
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|e| {
            PolicyError::InvalidPattern {
                pattern: source.to_string(),
                source: Box::new(e),
            }
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Which job names discovery selects.
///
/// A name is selected when any include matches the whole name and no
/// exclude does. Blank pattern strings are dropped before compiling.
#[derive(Debug, Clone, Default)]
pub struct PatternPolicy {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
}

impl PatternPolicy {
    /// Compile include and exclude lists.
    ///
    /// `includes` is required: `None` is a caller error, while an empty list
    /// is a valid policy that selects nothing.
    pub fn compile(
        includes: Option<&[String]>,
        excludes: &[String],
    ) -> Result<Self, PolicyError> {
        let includes = includes.ok_or(PolicyError::MissingIncludes)?;
        Ok(Self {
            includes: compile_all(includes)?,
            excludes: compile_all(excludes)?,
        })
    }

    /// True when there are no include patterns, so nothing can match.
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
    }

    pub fn is_included(&self, name: &JobName) -> bool {
        self.includes.iter().any(|p| p.matches(name))
    }

    pub fn is_excluded(&self, name: &JobName) -> bool {
        self.excludes.iter().any(|p| p.matches(name))
    }

    /// Included and not excluded.
    pub fn selects(&self, name: &JobName) -> bool {
        self.is_included(name) && !self.is_excluded(name)
    }

    /// Include patterns as written by the caller.
    pub fn include_patterns(&self) -> Vec<&str> {
        self.includes.iter().map(|p| p.source.as_str()).collect()
    }

    /// Exclude patterns as written by the caller.
    pub fn exclude_patterns(&self) -> Vec<&str> {
        self.excludes.iter().map(|p| p.source.as_str()).collect()
    }
}

fn compile_all(sources: &[String]) -> Result<Vec<Pattern>, PolicyError> {
    sources
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| Pattern::compile(s))
        .collect()
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
