//! Reading env files from disk.

use std::path::Path;

use super::error::LoadError;
use crate::constants::LINE_SEPARATOR;
use crate::parser::{self, VarMap};

/// Read `path` and split its contents on line feeds.
///
/// Carriage returns are left in place. Contents that are not valid UTF-8
/// are reported as [`LoadError::Io`] with kind `InvalidData`.
pub fn lines_from_file(path: &Path) -> Result<Vec<String>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.split(LINE_SEPARATOR).map(str::to_string).collect())
}

/// Read and parse a single file.
pub(crate) fn read_file(path: &Path) -> Result<VarMap, LoadError> {
    let lines = lines_from_file(path)?;
    let vars = parser::parse_lines(&lines).map_err(|e| LoadError::Syntax {
        path: path.to_path_buf(),
        line: e.line,
    })?;
    tracing::debug!(path = %path.display(), vars = vars.len(), "Read env file");
    Ok(vars)
}
