//! Read-only variable lookup used by both resolution strategies.
//!
//! Resolution never mutates the environment. The trait exists so the resolvers
//! can be driven from a fixed mapping instead of the live process environment.
//! Values are kept as raw OS strings so non-UTF-8 bytes survive resolution.

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};

/// A source of variable values.
pub trait Environment {
    /// Returns the value of `name`, or `None` if it is unset.
    fn get(&self, name: &str) -> Option<OsString>;

    /// Returns the value of `name` only if it is set to something non-empty.
    ///
    /// Both resolvers treat an empty value exactly like an unset one.
    fn non_empty(&self, name: &str) -> Option<OsString> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn get(&self, name: &str) -> Option<OsString> {
        // Names the OS cannot store can never be set.
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }

        env::var_os(name)
    }
}

impl<V, S> Environment for HashMap<String, V, S>
where
    V: AsRef<OsStr>,
    S: std::hash::BuildHasher,
{
    fn get(&self, name: &str) -> Option<OsString> {
        HashMap::get(self, name).map(|value| value.as_ref().to_os_string())
    }
}
