//! Injected environment-source capability.
//!
//! Responsibilities:
//! - Define the `EnvSource` trait every accessor reads through.
//! - Provide the process-backed and in-memory implementations.
//!
//! Does NOT handle:
//! - JSON decoding of descriptor variables (see `application`/`services`).
//! - Error construction; absence is `None` here and `VcapEnv` raises.
//!
//! Invariants:
//! - Sources are read-only; nothing in this crate mutates the environment.

use std::collections::HashMap;

/// A read-only source of environment variables.
///
/// Implementations supply string lookups and never fail; an unset variable
/// is `None`. [`VcapEnv`](crate::VcapEnv) converts absence into
/// [`VcapError::EnvVarNotFound`](crate::VcapError::EnvVarNotFound).
pub trait EnvSource {
    /// Return the exact stored value for `name`, or `None` if unset.
    fn get(&self, name: &str) -> Option<String>;
}

/// Environment source backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment source for deterministic tests and embedding.
///
/// Lets callers exercise the full accessor chain without touching real
/// process state.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// An empty source; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, replacing any previous value for the same name.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticEnv {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for StaticEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
