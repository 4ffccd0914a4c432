//! File loading, environment writing and record binding.
//!
//! Responsibilities:
//! - Read `KEY=VALUE` files in caller order and parse them.
//! - Apply parsed pairs to an [`EnvWriter`] (the process environment by default).
//! - Merge files and bind the result onto a [`crate::Record`].
//!
//! Does NOT handle:
//! - Line syntax (see `parser`).
//! - Type coercion of individual fields (see `record`).
//!
//! Invariants / Assumptions:
//! - With no paths, the single source is `.env` in the current directory.
//! - Every operation stops at the first error. Nothing already written is rolled back.
//! - Later files win over earlier ones, and later lines over earlier lines.
//! - `unmarshal` never reads or writes the process environment.

mod bind;
mod builder;
mod env;
mod error;
mod source;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::parser::VarMap;
use crate::record::Record;

pub use builder::Loader;
pub use env::{EnvWriter, MemoryEnv, ProcessEnv};
pub use error::LoadError;
pub use source::lines_from_file;

/// Load `paths` in order into the process environment.
///
/// An empty slice loads `.env`.
pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<(), LoadError> {
    Loader::new().with_paths(paths).load()
}

/// Load `paths` in order into `writer` instead of the process environment.
pub fn load_with<W, P>(writer: &mut W, paths: &[P]) -> Result<(), LoadError>
where
    W: EnvWriter + ?Sized,
    P: AsRef<Path>,
{
    Loader::new().with_paths(paths).load_into(writer)
}

/// Read and merge `paths` without touching the environment.
pub fn read_vars<P: AsRef<Path>>(paths: &[P]) -> Result<VarMap, LoadError> {
    Loader::new().with_paths(paths).read_vars()
}

/// Bind the merged contents of `paths` onto `dest`.
///
/// An empty slice reads `.env`.
pub fn unmarshal<R, P>(dest: &mut R, paths: &[P]) -> Result<(), LoadError>
where
    R: Record + ?Sized,
    P: AsRef<Path>,
{
    Loader::new().with_paths(paths).unmarshal(dest)
}
