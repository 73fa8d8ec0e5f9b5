//! Codec for the flat INI configuration format.
//!
//! File format:
//! ```text
//! key = value
//! another_key = another value
//! ; comment lines start with ';' or '#'
//! ```
//! One entry per line.  Whitespace around the key and the value is trimmed.
//! Blank lines and comment lines are ignored.  `[section]` headers are not
//! modeled — the file holds top-level keys only — and are rejected as a
//! parse error rather than silently flattened.
//!
//! # Round-trip invariant
//!
//! Any text accepted by [`parse_ini`] can be fed through [`serialize_ini`]
//! and parsed again without losing keys or values.  The serialized form is
//! canonical (`key = value\n`, keys in map order), so comments and original
//! line ordering are not preserved — only the mapping itself is.

use std::collections::BTreeMap;

use thiserror::Error;

/// The in-memory form of the configuration file: a flat string map.
///
/// `BTreeMap` keeps iteration order deterministic, which makes the
/// serialized output stable across runs (useful for diffing the file and
/// for tests).  Insertion order is not semantically significant.
pub type ConfigMap = BTreeMap<String, String>;

/// Errors that can occur while parsing configuration text.
///
/// Every variant carries the 1-based line number so the failure can be
/// reported precisely to the operator editing the file by hand.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IniError {
    /// A non-blank, non-comment line has no `=` separator.
    #[error("line {line}: expected 'key = value', found no '='")]
    MissingDelimiter { line: usize },

    /// The text before `=` is empty after trimming whitespace.
    #[error("line {line}: entry has an empty key")]
    EmptyKey { line: usize },

    /// A `[section]` header was encountered; only top-level keys are modeled.
    #[error("line {line}: sections are not supported in this file")]
    SectionNotSupported { line: usize },
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parses flat INI text into a [`ConfigMap`].
///
/// Blank lines and lines starting with `;` or `#` are skipped.  When the
/// same key appears more than once, the last occurrence wins.
///
/// # Errors
///
/// Returns [`IniError`] on the first malformed line: a line without `=`,
/// an entry with an empty key, or a `[section]` header.
///
/// # Examples
///
/// ```rust
/// use heatctl_core::config::parse_ini;
///
/// let map = parse_ini("day_temp = 21.5\nstart_hour = 6\n").unwrap();
/// assert_eq!(map["day_temp"], "21.5");
/// assert_eq!(map["start_hour"], "6");
/// ```
pub fn parse_ini(text: &str) -> Result<ConfigMap, IniError> {
    let mut map = ConfigMap::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1; // humans count lines from 1
        let trimmed = raw_line.trim();

        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with('[') {
            return Err(IniError::SectionNotSupported { line });
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(IniError::MissingDelimiter { line });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(IniError::EmptyKey { line });
        }

        // Last occurrence of a duplicate key wins, mirroring how a human
        // (or a naive editor) would expect the later line to override.
        map.insert(key.to_string(), value.trim().to_string());
    }

    Ok(map)
}

/// Serializes a [`ConfigMap`] into canonical flat INI text.
///
/// Each entry becomes one `key = value` line terminated by `\n`, in map
/// order.  An empty map serializes to an empty string.
///
/// # Examples
///
/// ```rust
/// use heatctl_core::config::{parse_ini, serialize_ini, ConfigMap};
///
/// let mut map = ConfigMap::new();
/// map.insert("night_temp".to_string(), "17.0".to_string());
/// let text = serialize_ini(&map);
/// assert_eq!(text, "night_temp = 17.0\n");
/// assert_eq!(parse_ini(&text).unwrap(), map);
/// ```
pub fn serialize_ini(map: &ConfigMap) -> String {
    let mut out = String::new();
    for (key, value) in map {
        out.push_str(key);
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
