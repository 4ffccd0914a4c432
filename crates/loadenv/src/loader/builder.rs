//! Builder for loading env files.
//!
//! Responsibilities:
//! - Collect the ordered list of sources and loading options.
//! - Apply sources to an [`EnvWriter`], merge them into a [`VarMap`], or bind
//!   them onto a [`Record`].
//!
//! Does NOT handle:
//! - Reading a single file (see source.rs).
//! - Per-field binding rules (see bind.rs).
//!
//! Invariants / Assumptions:
//! - Sources are processed strictly in the order they were added.
//! - With no sources, `DEFAULT_ENV_FILE` is the only source.
//! - `load_into` applies each file as soon as it is parsed; `unmarshal` reads
//!   and merges every file before touching the record.
//! - Missing files are errors unless `ignore_missing(true)` was set.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::bind::bind;
use super::env::{EnvWriter, ProcessEnv};
use super::error::LoadError;
use super::source::read_file;
use crate::constants::DEFAULT_ENV_FILE;
use crate::parser::VarMap;
use crate::record::Record;

/// Loads env files into the environment or a record.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    paths: Vec<PathBuf>,
    ignore_missing: bool,
}

impl Loader {
    /// Create a loader with no explicit sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source file.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Append several source files, keeping their order.
    pub fn with_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.paths
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    /// Skip sources that do not exist instead of failing.
    ///
    /// Other read errors, such as permission denied, still fail.
    pub fn ignore_missing(mut self, ignore: bool) -> Self {
        self.ignore_missing = ignore;
        self
    }

    /// The sources that will be read, in order.
    pub fn sources(&self) -> Vec<&Path> {
        if self.paths.is_empty() {
            vec![Path::new(DEFAULT_ENV_FILE)]
        } else {
            self.paths.iter().map(PathBuf::as_path).collect()
        }
    }

    /// Set every variable in the process environment.
    pub fn load(&self) -> Result<(), LoadError> {
        self.load_into(&mut ProcessEnv)
    }

    /// Set every variable through `writer`.
    ///
    /// Each file is read, parsed and applied before the next one is read. On
    /// failure, variables from earlier files and earlier keys stay set.
    pub fn load_into<W: EnvWriter + ?Sized>(&self, writer: &mut W) -> Result<(), LoadError> {
        for path in self.sources() {
            let Some(vars) = self.read_source(path)? else {
                continue;
            };
            for (key, value) in &vars {
                writer.set(key, value)?;
                tracing::trace!(key = %key, "Set environment variable");
            }
            tracing::debug!(path = %path.display(), vars = vars.len(), "Applied env file");
        }
        Ok(())
    }

    /// Read every source and merge them. Later sources win on duplicate keys.
    pub fn read_vars(&self) -> Result<VarMap, LoadError> {
        let mut merged = VarMap::new();
        for path in self.sources() {
            if let Some(vars) = self.read_source(path)? {
                merged.extend(vars);
            }
        }
        Ok(merged)
    }

    /// Bind the merged sources onto `dest`.
    ///
    /// The process environment is neither read nor written.
    pub fn unmarshal<R: Record + ?Sized>(&self, dest: &mut R) -> Result<(), LoadError> {
        let vars = self.read_vars()?;
        bind(dest, &vars)
    }

    fn read_source(&self, path: &Path) -> Result<Option<VarMap>, LoadError> {
        match read_file(path) {
            Ok(vars) => Ok(Some(vars)),
            Err(LoadError::Io { source, .. })
                if self.ignore_missing && source.kind() == ErrorKind::NotFound =>
            {
                tracing::debug!(path = %path.display(), "Env file not found, skipping");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
