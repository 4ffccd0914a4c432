//! Error types for loading and binding.
//!
//! Invariants:
//! - Every variant names what failed (path, line, field or key).
//! - Syntax errors carry only the line index, never the line, which may hold a secret.
//! - Coercion errors carry the raw value so the caller can see what was rejected.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`crate::load`], [`crate::unmarshal`] and friends.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read env file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank line is not exactly one `KEY=VALUE` pair.
    #[error("Bad syntax in env file at {path} on line number {line}")]
    Syntax { path: PathBuf, line: usize },

    /// The `required` annotation of a field is not a boolean string.
    #[error("The required annotation on field {field} must be a valid bool, got '{value}'")]
    Tag { field: String, value: String },

    /// A required field has no value in any of the files.
    #[error("Required environment variable {field} not provided")]
    MissingRequiredField { field: String },

    /// A value cannot be converted to the field's declared type.
    #[error("Environment variable {field} has value '{value}'; it cannot be made into type {kind}")]
    Coercion {
        field: String,
        value: String,
        kind: &'static str,
    },

    /// The field's declared type cannot be bound.
    #[error("Unsupported field kind {kind} for field {field}")]
    UnsupportedType { field: String, kind: &'static str },

    /// The environment rejected the variable.
    #[error("Failed to set environment variable '{key}': {reason}")]
    EnvSet { key: String, reason: String },
}
