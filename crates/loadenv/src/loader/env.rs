//! Environment writers.
//!
//! Responsibilities:
//! - Define the [`EnvWriter`] capability the loader writes through.
//! - Write to the real process environment ([`ProcessEnv`]).
//! - Capture writes in memory for tests and dry runs ([`MemoryEnv`]).
//!
//! Invariants:
//! - Both writers reject the same pairs: an empty key, a key containing `=`
//!   or NUL, and a value containing NUL. The platform cannot store these and
//!   `std::env::set_var` would panic on them.

use super::error::LoadError;
use crate::parser::VarMap;

/// Destination for loaded variables.
pub trait EnvWriter {
    /// Set `key` to `value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), LoadError>;
}

impl<W: EnvWriter + ?Sized> EnvWriter for &mut W {
    fn set(&mut self, key: &str, value: &str) -> Result<(), LoadError> {
        (**self).set(key, value)
    }
}

fn check_pair(key: &str, value: &str) -> Result<(), LoadError> {
    let reason = if key.is_empty() {
        "key is empty"
    } else if key.contains('=') {
        "key contains '='"
    } else if key.contains('\0') {
        "key contains a NUL character"
    } else if value.contains('\0') {
        "value contains a NUL character"
    } else {
        return Ok(());
    };
    Err(LoadError::EnvSet {
        key: key.to_string(),
        reason: reason.to_string(),
    })
}

/// Writes to the environment of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvWriter for ProcessEnv {
    fn set(&mut self, key: &str, value: &str) -> Result<(), LoadError> {
        check_pair(key, value)?;
        // SAFETY: loading is single-threaded; callers serialize environment
        // access with any other threads that read or write it.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

/// Records writes instead of touching the process environment.
#[derive(Debug, Default, Clone)]
pub struct MemoryEnv {
    writes: Vec<(String, String)>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every accepted write, in order.
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    /// The current value of `key`, i.e. its last write.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Final state after all writes.
    pub fn to_vars(&self) -> VarMap {
        self.writes.iter().cloned().collect()
    }
}

impl EnvWriter for MemoryEnv {
    fn set(&mut self, key: &str, value: &str) -> Result<(), LoadError> {
        check_pair(key, value)?;
        self.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
