// Copyright (c) Contributors to the runenv project.
// SPDX-License-Identifier: Apache-2.0

//! runenv - Process-wide runtime environment registry
//!
//! This crate tracks which runtime environment a program is running in
//! (development, testing, prerelease, production, or any registered
//! custom stage) so that other components can gate behavior on it.
//!
//! # Overview
//!
//! A [`Manager`] owns the current [`Env`], a registry of permitted
//! environments, and change listeners. Changes are rejected unless the
//! target environment was registered first, and a manager can be
//! permanently locked so the environment can never change again. A
//! process-wide default manager backs the free functions at the crate
//! root, so most programs never construct a manager themselves.
//!
//! # Example
//!
//! ```
//! use runenv::{Env, Manager};
//!
//! let manager = Manager::new();
//! assert_eq!(manager.get(), Env::DEVELOPMENT);
//!
//! manager.register("staging");
//! manager.set("staging")?;
//! assert!(manager.get().is(&Env::from("staging")));
//!
//! manager.lock();
//! assert!(manager.set(Env::PRODUCTION).is_err());
//! # Ok::<(), runenv::Error>(())
//! ```

pub mod env;
pub mod error;
pub mod global;
pub mod manager;

pub use env::Env;
pub use error::{Error, Result};
pub use global::{
    default_manager, get, is, is_in, is_locked, is_registered, listen, lock, register, set,
    set_and_lock, set_default_manager, unlisten, unlisten_all,
};
pub use manager::{Listener, Manager};
