// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry store loaded from a document on disk.

mod access;
mod types;

pub use access::{Viewer, ANYONE};
pub use types::{JobRecord, RegistryDocument, RunRecord};

use gk_core::{JobName, JobRegistry, JobSnapshot, RegistryError};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading or writing a registry document
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot access registry {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed registry {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("job '{0}' appears more than once in the registry")]
    DuplicateJob(String),
}

#[derive(Debug)]
struct RegistryState {
    admins: HashSet<String>,
    jobs: IndexMap<JobName, JobRecord>,
}

impl RegistryState {
    fn from_document(doc: RegistryDocument) -> Result<Self, StorageError> {
        let mut jobs = IndexMap::with_capacity(doc.jobs.len());
        for record in doc.jobs {
            if jobs.contains_key(&record.name) {
                return Err(StorageError::DuplicateJob(record.name.to_string()));
            }
            jobs.insert(record.name.clone(), record);
        }
        Ok(Self {
            admins: doc.admins.into_iter().collect(),
            jobs,
        })
    }
}

/// Job registry backed by a document on disk.
///
/// A store opened on a path that does not exist is *unavailable*: registry
/// calls fail with [`RegistryError::Unavailable`] and every job is hidden.
#[derive(Debug)]
pub struct RegistryStore {
    path: PathBuf,
    state: Option<RegistryState>,
}

impl RegistryStore {
    /// Load the document at `path`. Files ending in `.zst` are decompressed.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "registry not found, treating as unavailable");
            return Ok(Self {
                path: path.to_path_buf(),
                state: None,
            });
        }
        let io_err = |source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        };
        let raw = std::fs::read(path).map_err(io_err)?;
        let bytes = if is_compressed(path) {
            zstd::decode_all(raw.as_slice()).map_err(io_err)?
        } else {
            raw
        };
        let doc: RegistryDocument =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        let state = RegistryState::from_document(doc)?;
        tracing::debug!(path = %path.display(), jobs = state.jobs.len(), "registry loaded");
        Ok(Self {
            path: path.to_path_buf(),
            state: Some(state),
        })
    }

    /// Store built from an in-memory document.
    pub fn from_document(doc: RegistryDocument) -> Result<Self, StorageError> {
        Ok(Self {
            path: PathBuf::new(),
            state: Some(RegistryState::from_document(doc)?),
        })
    }

    pub fn is_available(&self) -> bool {
        self.state.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Access context for `user`; `None` is an anonymous caller.
    pub fn viewer<'a>(&'a self, user: Option<&'a str>) -> Viewer<'a> {
        Viewer::new(self, user)
    }

    fn state(&self) -> Result<&RegistryState, RegistryError> {
        self.state.as_ref().ok_or_else(|| {
            RegistryError::Unavailable(format!("no registry at {}", self.path.display()))
        })
    }
}

impl JobRegistry for RegistryStore {
    fn snapshot(&self, name: &JobName) -> Result<JobSnapshot, RegistryError> {
        let state = self.state()?;
        Ok(state
            .jobs
            .get(name)
            .map(JobRecord::snapshot)
            .unwrap_or_else(JobSnapshot::missing))
    }

    fn list_all(&self) -> Result<Vec<JobName>, RegistryError> {
        Ok(self.state()?.jobs.keys().cloned().collect())
    }
}

impl RegistryDocument {
    /// Write the document as JSON, compressing when `path` ends in `.zst`.
    pub fn write_to(&self, path: &Path) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        };
        let json = serde_json::to_vec_pretty(self).map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let bytes = if is_compressed(path) {
            zstd::encode_all(json.as_slice(), 3).map_err(io_err)?
        } else {
            json
        };
        std::fs::write(path, bytes).map_err(io_err)
    }
}

fn is_compressed(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "zst")
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
