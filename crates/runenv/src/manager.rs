// Copyright (c) Contributors to the runenv project.
// SPDX-License-Identifier: Apache-2.0

//! Concurrency-safe tracking of the current runtime environment.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::env::Env;
use crate::error::{Error, Result};

#[cfg(test)]
#[path = "./manager_test.rs"]
mod manager_test;

/// A change listener registered with [`Manager::listen`].
///
/// Listeners receive the new environment followed by the one it
/// replaced.
pub type Listener = Box<dyn Fn(&Env, &Env) + Send + Sync>;

/// Tracks the current runtime environment for one scope.
///
/// A manager created with [`Manager::new`] starts in
/// [`Env::DEVELOPMENT`] with the four built-in environments
/// registered. Other environments must be registered before they can
/// become current. Once [`Manager::lock`] has been called the current
/// environment can never change again for the life of the manager.
pub struct Manager {
    state: RwLock<State>,
    locked: AtomicBool,
}

struct State {
    current: Env,
    registered: Vec<Env>,
    listeners: Vec<Listener>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::empty()
    }
}

impl Manager {
    /// Create a manager with the built-in environments registered and
    /// [`Env::DEVELOPMENT`] current.
    pub fn new() -> Self {
        Self::with_current(
            Env::DEVELOPMENT,
            vec![
                Env::DEVELOPMENT,
                Env::TESTING,
                Env::PRERELEASE,
                Env::PRODUCTION,
            ],
        )
    }

    /// Create a manager with nothing registered and the empty
    /// environment current.
    ///
    /// Every environment must be registered before it can become
    /// current, the built-ins included.
    pub fn empty() -> Self {
        Self::with_current(Env::default(), Vec::new())
    }

    fn with_current(current: Env, registered: Vec<Env>) -> Self {
        Self {
            state: RwLock::new(State {
                current,
                registered,
                listeners: Vec::new(),
            }),
            locked: AtomicBool::new(false),
        }
    }

    /// The current runtime environment.
    pub fn get(&self) -> Env {
        self.read_state().current.clone()
    }

    /// Register an environment so that it can become current.
    ///
    /// Registering the same environment again has no effect.
    /// Registration stays open after [`Manager::lock`]; only the
    /// current environment is frozen.
    pub fn register(&self, env: impl Into<Env>) {
        let env = env.into();
        let mut state = self.write_state();
        if !env.is_in(&state.registered) {
            state.registered.push(env);
        }
    }

    /// Report whether the given environment has been registered.
    pub fn is_registered(&self, env: &Env) -> bool {
        env.is_in(&self.read_state().registered)
    }

    /// Permanently prevent any further environment changes.
    ///
    /// A change already holding its critical section completes before
    /// the lock lands. There is no unlock. Calling this again has no
    /// effect.
    pub fn lock(&self) {
        let _guard = self.write_state();
        if !self.locked.swap(true, Ordering::AcqRel) {
            tracing::debug!("runtime environment locked");
        }
    }

    /// Report whether the manager has been locked.
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    /// Change the current runtime environment.
    ///
    /// Listeners run before this returns, while the change still holds
    /// its critical section. Setting the environment that is already
    /// current does nothing and does not notify listeners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Locked`] if the manager has been locked, or
    /// [`Error::InvalidEnv`] if the environment was never registered.
    pub fn set(&self, env: impl Into<Env>) -> Result<()> {
        let mut state = self.write_state();
        self.apply(&mut state, env.into())
    }

    /// Change the current runtime environment and lock in one step.
    ///
    /// No other change can interleave between the change and the lock.
    /// The manager stays unlocked when the change is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Locked`] if the manager has been locked, or
    /// [`Error::InvalidEnv`] if the environment was never registered.
    pub fn set_and_lock(&self, env: impl Into<Env>) -> Result<()> {
        let mut state = self.write_state();
        self.apply(&mut state, env.into())?;
        self.locked.store(true, Ordering::Release);
        tracing::debug!("runtime environment locked");
        Ok(())
    }

    /// Register a listener for environment changes.
    ///
    /// Listeners are called in registration order with the new
    /// environment and the one it replaced, inside the change's
    /// critical section. A listener that calls back into the same
    /// manager will deadlock.
    pub fn listen<F>(&self, listener: F)
    where
        F: Fn(&Env, &Env) + Send + Sync + 'static,
    {
        self.write_state().listeners.push(Box::new(listener));
    }

    /// Remove and return the most recently registered listener.
    pub fn unlisten(&self) -> Option<Listener> {
        self.write_state().listeners.pop()
    }

    /// Remove and return all registered listeners.
    pub fn unlisten_all(&self) -> Vec<Listener> {
        std::mem::take(&mut self.write_state().listeners)
    }

    fn apply(&self, state: &mut State, env: Env) -> Result<()> {
        if self.is_locked() {
            return Err(Error::Locked);
        }
        if !env.is_in(&state.registered) {
            return Err(Error::InvalidEnv(env));
        }
        if state.current.is(&env) {
            return Ok(());
        }
        let old = std::mem::replace(&mut state.current, env);
        tracing::debug!(from = %old, to = %state.current, "runtime environment changed");
        for listener in &state.listeners {
            listener(&state.current, &old);
        }
        Ok(())
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
