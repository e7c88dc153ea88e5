// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gk-storage: File-backed job registry
//!
//! The registry is a JSON document (optionally zstd-compressed) exported by
//! the build system. Job order in the document is the enumeration order.

mod registry;

pub use registry::{
    JobRecord, RegistryDocument, RegistryStore, RunRecord, StorageError, Viewer, ANYONE,
};
