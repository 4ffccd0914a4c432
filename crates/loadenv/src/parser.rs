//! Line parsing for `KEY=VALUE` files.
//!
//! Responsibilities:
//! - Trim each line and skip lines that are blank after trimming.
//! - Split the remaining lines on the single `=` separator into a [`VarMap`].
//!
//! Does NOT handle:
//! - Reading files (see `loader`).
//! - Comments, quoting, escapes, multi-line values or `${VAR}` expansion.
//!
//! Invariants:
//! - A non-blank line with zero or more than one `=` is a [`ParseError`]
//!   carrying the 0-based index of that line.
//! - Whitespace next to `=` is kept; only the ends of the whole line are trimmed.
//! - A key repeated within one input keeps its last value.
//! - Parse errors never carry line contents, which may hold secrets.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::constants::{KEY_VALUE_SEPARATOR, LINE_SEPARATOR};

/// Parsed variables keyed by name.
pub type VarMap = BTreeMap<String, String>;

/// A line that is not a single `KEY=VALUE` pair.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("bad syntax on line number {line}")]
pub struct ParseError {
    /// 0-based index of the offending line.
    pub line: usize,
}

/// Parse already-split lines into a [`VarMap`].
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<VarMap, ParseError> {
    let mut vars = VarMap::new();
    for (index, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = split_pair(line).ok_or(ParseError { line: index })?;
        vars.insert(key.to_string(), value.to_string());
    }
    Ok(vars)
}

/// Split `contents` on line feeds and parse the result.
pub fn parse_str(contents: &str) -> Result<VarMap, ParseError> {
    let lines: Vec<&str> = contents.split(LINE_SEPARATOR).collect();
    parse_lines(&lines)
}

fn split_pair(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(KEY_VALUE_SEPARATOR)?;
    if value.contains(KEY_VALUE_SEPARATOR) {
        return None;
    }
    Some((key, value))
}
