// Copyright (c) Contributors to the runenv project.
// SPDX-License-Identifier: Apache-2.0

//! The runtime environment value type.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "./env_test.rs"]
mod env_test;

/// The name of a runtime environment, such as [`Env::DEVELOPMENT`].
///
/// An `Env` is an immutable label identifying one stage of the release
/// cycle. Comparisons are exact string comparisons: no case folding or
/// whitespace trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Env(Cow<'static, str>);

impl Env {
    /// The development runtime environment.
    pub const DEVELOPMENT: Env = Env::from_static("development");

    /// The testing runtime environment.
    pub const TESTING: Env = Env::from_static("testing");

    /// The prerelease runtime environment.
    pub const PRERELEASE: Env = Env::from_static("prerelease");

    /// The production runtime environment.
    pub const PRODUCTION: Env = Env::from_static("production");

    /// Create an environment from a static name without allocating.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The environment name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Report whether this environment is the same as the given one.
    pub fn is(&self, other: &Env) -> bool {
        self == other
    }

    /// Report whether this environment appears in the given list.
    pub fn is_in(&self, envs: &[Env]) -> bool {
        envs.contains(self)
    }
}

impl Default for Env {
    /// The default environment is the empty name.
    fn default() -> Self {
        Self(Cow::Borrowed(""))
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Env {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Env {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for Env {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl PartialEq<str> for Env {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Env {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Env> for str {
    fn eq(&self, other: &Env) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Env> for &str {
    fn eq(&self, other: &Env) -> bool {
        *self == other.as_str()
    }
}
