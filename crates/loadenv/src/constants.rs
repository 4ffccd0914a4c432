//! Centralized constants for the loadenv crate.

// =============================================================================
// File Format
// =============================================================================

/// File read when no explicit source is given, resolved against the current directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Separator between a key and its value. A valid line contains exactly one.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Line terminator used to split file contents. Carriage returns are not stripped.
pub const LINE_SEPARATOR: char = '\n';
