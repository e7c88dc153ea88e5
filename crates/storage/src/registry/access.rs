// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::RegistryStore;
use gk_core::{AccessContext, JobName};

/// Reader entry that grants access to every user, including anonymous ones.
pub const ANYONE: &str = "*";

/// Job visibility for one user.
///
/// Admins read everything. Jobs without a reader list are public. Otherwise
/// the user, or [`ANYONE`], must be listed. An unavailable store hides
/// every job.
#[derive(Debug, Clone, Copy)]
pub struct Viewer<'a> {
    store: &'a RegistryStore,
    user: Option<&'a str>,
}

impl<'a> Viewer<'a> {
    pub(super) fn new(store: &'a RegistryStore, user: Option<&'a str>) -> Self {
        Self { store, user }
    }
}

impl AccessContext for Viewer<'_> {
    fn can_read(&self, name: &JobName) -> bool {
        let Some(state) = self.store.state.as_ref() else {
            return false;
        };
        if let Some(user) = self.user {
            if state.admins.contains(user) {
                return true;
            }
        }
        let Some(record) = state.jobs.get(name) else {
            return false;
        };
        match &record.readers {
            None => true,
            Some(readers) => readers
                .iter()
                .any(|r| r == ANYONE || Some(r.as_str()) == self.user),
        }
    }
}
