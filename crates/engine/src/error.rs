// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors that end a gate operation without a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("operation cancelled")]
    Cancelled,
}

pub(crate) fn check_cancelled(
    token: Option<&tokio_util::sync::CancellationToken>,
) -> Result<(), GateError> {
    match token {
        Some(token) if token.is_cancelled() => Err(GateError::Cancelled),
        _ => Ok(()),
    }
}
