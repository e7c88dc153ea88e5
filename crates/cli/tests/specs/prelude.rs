// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: a scratch project directory and fluent assertions on
//! `gk` runs.

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

const GK_ENV: &[&str] = &[
    "GK_REGISTRY",
    "GK_RUNBOOK_DIR",
    "GK_STATUS_FILE",
    "GK_USER",
    "GK_LOG",
];

/// `gk` run outside any project.
pub fn cli() -> CliBuilder {
    CliBuilder::new(None)
}

/// Temporary working directory with `.gk/` layout helpers.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Project whose registry holds `doc`.
    pub fn with_registry(doc: Value) -> Self {
        let project = Self::empty();
        project.file(".gk/registry.json", &doc.to_string());
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write `doc` zstd-compressed at `rel`.
    pub fn compressed(&self, rel: &str, doc: &Value) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let bytes = zstd::encode_all(doc.to_string().as_bytes(), 0).unwrap();
        std::fs::write(&path, bytes).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> Option<String> {
        std::fs::read_to_string(self.path().join(rel)).ok()
    }

    pub fn gk(&self) -> CliBuilder {
        CliBuilder::new(Some(self.path()))
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    fn new(dir: Option<&Path>) -> Self {
        let mut cmd = Command::cargo_bin("gk").unwrap();
        for var in GK_ENV {
            cmd.env_remove(var);
        }
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(!run.output.status.success(), "expected failure\n{}", run.describe());
        run
    }

    pub fn exits(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert_eq!(run.output.status.code(), Some(code), "{}", run.describe());
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout lacks {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout().contains(needle), "stdout has {needle:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr lacks {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.output.stdout).unwrap()
    }

    fn describe(&self) -> String {
        format!(
            "status: {:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            self.output.status.code(),
            self.stdout(),
            self.stderr()
        )
    }
}

/// Registry document used across the specs.
pub fn pipeline() -> Value {
    serde_json::json!({
        "admins": ["root"],
        "jobs": [
            { "name": "build", "last_completed": { "number": 12, "outcome": "SUCCESS" }, "last_successful": 12 },
            { "name": "lint", "last_completed": { "number": 4, "outcome": "SUCCESS" }, "last_successful": 4 },
            { "name": "deploy", "building": true, "last_completed": { "number": 7, "outcome": "SUCCESS" }, "last_successful": 7 },
            { "name": "docs", "queued": true, "last_completed": { "number": 2, "outcome": "SUCCESS" }, "last_successful": 2 },
            { "name": "fresh" },
            { "name": "flaky", "last_completed": { "number": 9, "outcome": "UNSTABLE" }, "last_successful": 8 },
            { "name": "test-x-a", "last_completed": { "number": 1, "outcome": "SUCCESS" }, "last_successful": 1 },
            { "name": "test-x-b", "last_completed": { "number": 1, "outcome": "SUCCESS" }, "last_successful": 1 },
            { "name": "test-y-a", "last_completed": { "number": 1, "outcome": "SUCCESS" }, "last_successful": 1 },
            { "name": "secret-x", "readers": ["alice"], "last_completed": { "number": 3, "outcome": "FAILURE" } }
        ]
    })
}
