// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gk-engine: Dependency gate and job discovery

mod build_number;
mod error;
mod matcher;
mod pattern;
mod validator;

pub use build_number::last_successful_build;
pub use error::GateError;
pub use matcher::JobMatcher;
pub use pattern::{PatternPolicy, PolicyError};
pub use validator::DependencyValidator;

pub use tokio_util::sync::CancellationToken;
