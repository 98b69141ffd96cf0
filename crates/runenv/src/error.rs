// Copyright (c) Contributors to the runenv project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for runenv operations.

use miette::Diagnostic;
use thiserror::Error;

use crate::env::Env;

/// Convenience Result type with runenv Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during runenv operations.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The environment was never registered with the manager
    #[error("invalid runtime environment: {0}")]
    #[diagnostic(
        code(runenv::invalid_env),
        help("Register the environment with 'register' before making it current")
    )]
    InvalidEnv(Env),

    /// The manager is locked and rejects environment changes
    #[error("locked runtime environment")]
    #[diagnostic(
        code(runenv::locked),
        help("Locked managers never change environments again; replace the manager to start over")
    )]
    Locked,
}
