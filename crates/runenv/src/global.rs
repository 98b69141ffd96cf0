// Copyright (c) Contributors to the runenv project.
// SPDX-License-Identifier: Apache-2.0

//! The process-wide default manager and its free-function facade.
//!
//! Most programs need exactly one runtime environment for the whole
//! process. The functions here mirror the [`Manager`] API and operate
//! on a shared default instance, so callers can write
//! `runenv::set(Env::TESTING)` without threading a manager through
//! their code. The default instance can be swapped out wholesale with
//! [`set_default_manager`], for example to start over after a lock in
//! test harnesses.

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::env::Env;
use crate::error::Result;
use crate::manager::{Listener, Manager};

#[cfg(test)]
#[path = "./global_test.rs"]
mod global_test;

static DEFAULT_MANAGER: Lazy<RwLock<Arc<Manager>>> =
    Lazy::new(|| RwLock::new(Arc::new(Manager::new())));

/// The process-wide default manager.
pub fn default_manager() -> Arc<Manager> {
    DEFAULT_MANAGER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide default manager.
///
/// Handles already taken with [`default_manager`] keep pointing at the
/// manager they were taken from.
pub fn set_default_manager(manager: impl Into<Arc<Manager>>) {
    *DEFAULT_MANAGER
        .write()
        .unwrap_or_else(PoisonError::into_inner) = manager.into();
}

/// The current runtime environment of the default manager.
pub fn get() -> Env {
    default_manager().get()
}

/// Register an environment with the default manager.
pub fn register(env: impl Into<Env>) {
    default_manager().register(env);
}

/// Report whether the default manager has registered the environment.
pub fn is_registered(env: &Env) -> bool {
    default_manager().is_registered(env)
}

/// Permanently lock the default manager.
pub fn lock() {
    default_manager().lock();
}

/// Report whether the default manager has been locked.
pub fn is_locked() -> bool {
    default_manager().is_locked()
}

/// Change the current runtime environment of the default manager.
pub fn set(env: impl Into<Env>) -> Result<()> {
    default_manager().set(env)
}

/// Change the default manager's environment and lock in one step.
pub fn set_and_lock(env: impl Into<Env>) -> Result<()> {
    default_manager().set_and_lock(env)
}

/// Register a change listener with the default manager.
pub fn listen<F>(listener: F)
where
    F: Fn(&Env, &Env) + Send + Sync + 'static,
{
    default_manager().listen(listener);
}

/// Remove and return the default manager's most recent listener.
pub fn unlisten() -> Option<Listener> {
    default_manager().unlisten()
}

/// Remove and return all of the default manager's listeners.
pub fn unlisten_all() -> Vec<Listener> {
    default_manager().unlisten_all()
}

/// Report whether the default manager's current environment is `env`.
pub fn is(env: &Env) -> bool {
    get().is(env)
}

/// Report whether the default manager's current environment is one of
/// `envs`.
pub fn is_in(envs: &[Env]) -> bool {
    get().is_in(envs)
}
