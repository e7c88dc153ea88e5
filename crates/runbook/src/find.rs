// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runbook file discovery

use crate::parser::Format;
use crate::{parse_runbook_with_format, Runbook};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Leading comment block extracted from a runbook file.
pub struct FileComment {
    /// Text up to the first blank comment line (short description).
    pub short: String,
    /// Remaining comment text after the blank line.
    pub long: String,
}

/// Extract the leading `#` comment block from a runbook file.
///
/// Returns `None` if the file does not start with a comment.
pub fn extract_file_comment(content: &str) -> Option<FileComment> {
    let mut lines = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            let text = trimmed
                .strip_prefix("# ")
                .unwrap_or(trimmed.strip_prefix('#').unwrap_or(""));
            lines.push(text.to_string());
        } else if trimmed.is_empty() && lines.is_empty() {
            continue;
        } else {
            break;
        }
    }

    if lines.is_empty() {
        return None;
    }

    let split_pos = lines.iter().position(|l| l.is_empty());
    let (short_lines, long_lines) = match split_pos {
        Some(pos) => (&lines[..pos], &lines[pos + 1..]),
        None => (lines.as_slice(), &[][..]),
    };

    Some(FileComment {
        short: short_lines.join("\n"),
        long: long_lines.join("\n"),
    })
}

/// Errors from runbook file scanning
#[derive(Debug, Error)]
pub enum FindError {
    #[error("'{0}' defined in multiple runbooks")]
    Duplicate(String),
    #[error("{name} not found; {count} runbook(s) skipped due to errors:\n{details}")]
    NotFoundSkipped {
        name: String,
        count: usize,
        details: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Which kind of definition a gate name refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    Check,
    Find,
}

gk_core::simple_display! {
    GateKind {
        Check => "check",
        Find => "find",
    }
}

/// One named gate for listings.
#[derive(Debug, Clone, Serialize)]
pub struct GateSummary {
    pub name: String,
    pub kind: GateKind,
    pub file: PathBuf,
    /// First line of the file's leading comment, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Scan `dir` recursively for the file defining check `name`.
pub fn find_runbook_by_check(dir: &Path, name: &str) -> Result<Option<Runbook>, FindError> {
    find_runbook(dir, name, |rb| rb.get_check(name).is_some())
}

/// Scan `dir` recursively for the file defining finder `name`.
pub fn find_runbook_by_finder(dir: &Path, name: &str) -> Result<Option<Runbook>, FindError> {
    find_runbook(dir, name, |rb| rb.get_finder(name).is_some())
}

/// Collect every check and finder under `dir`, sorted by name.
/// Skips runbooks that fail to parse (logs warnings).
pub fn collect_all_gates(dir: &Path) -> Result<Vec<GateSummary>, FindError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut gates = Vec::new();
    for (path, format) in collect_runbook_files(dir)? {
        let Some((content, runbook)) = load(&path, format).ok() else {
            continue;
        };
        let description = extract_file_comment(&content)
            .and_then(|c| c.short.lines().next().map(str::to_string))
            .filter(|d| !d.is_empty());
        let summary = |name: &String, kind| GateSummary {
            name: name.clone(),
            kind,
            file: path.clone(),
            description: description.clone(),
        };
        gates.extend(runbook.check.keys().map(|n| summary(n, GateKind::Check)));
        gates.extend(runbook.find.keys().map(|n| summary(n, GateKind::Find)));
    }
    gates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(gates)
}

fn find_runbook(
    dir: &Path,
    name: &str,
    matches: impl Fn(&Runbook) -> bool,
) -> Result<Option<Runbook>, FindError> {
    if !dir.exists() {
        return Ok(None);
    }
    let mut found: Option<Runbook> = None;
    let mut skipped: Vec<(PathBuf, String)> = Vec::new();
    for (path, format) in collect_runbook_files(dir)? {
        let runbook = match load(&path, format) {
            Ok((_, rb)) => rb,
            Err(e) => {
                skipped.push((path, e));
                continue;
            }
        };
        if matches(&runbook) {
            if found.is_some() {
                return Err(FindError::Duplicate(name.to_string()));
            }
            found = Some(runbook);
        }
    }
    if found.is_none() && !skipped.is_empty() {
        let details = skipped
            .iter()
            .map(|(p, e)| format!("  {}: {e}", p.display()))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(FindError::NotFoundSkipped {
            name: name.to_string(),
            count: skipped.len(),
            details,
        });
    }
    Ok(found)
}

/// Read and parse one file, logging why it was skipped on failure.
fn load(path: &Path, format: Format) -> Result<(String, Runbook), String> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "skipping unreadable runbook");
        e.to_string()
    })?;
    let runbook = parse_runbook_with_format(&content, format).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "skipping invalid runbook");
        e.to_string()
    })?;
    Ok((content, runbook))
}

/// Recursively collect all runbook files (`.hcl`, `.toml`, `.json`) under `dir`.
fn collect_runbook_files(dir: &Path) -> Result<Vec<(PathBuf, Format)>, std::io::Error> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current)?.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if let Some(format) = format_for_path(&path) {
                files.push((path, format));
            }
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

fn format_for_path(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Some(Format::Toml),
        Some("hcl") => Some(Format::Hcl),
        Some("json") => Some(Format::Json),
        _ => None,
    }
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
