//! Loading and saving the configuration mapping.
//!
//! Every HTTP read loads the file fresh from disk and every write replaces
//! the file wholesale — there is no cache, no merge, and no partial update.
//! This keeps the file authoritative: hand edits between requests are
//! always picked up, at the cost of a read-modify-write race the service
//! deliberately does not defend against.
//!
//! # Failure behavior
//!
//! A missing file is an error, not a default: the service must surface the
//! problem rather than invent an empty configuration that the next write
//! would silently persist.  Writes truncate in place with no backup and no
//! atomic rename, so an interrupted write can corrupt the file — an
//! accepted risk for this controller, documented rather than guarded.

use std::path::{Path, PathBuf};

use heatctl_core::config::{parse_ini, serialize_ini, ConfigMap, IniError};
use thiserror::Error;
use tracing::debug;

/// Error type for configuration file operations.
///
/// One variant per failure class so tests (and the API layer) can assert on
/// the cause directly instead of relying on framework defaults.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    /// A file system I/O error occurred (missing or unreadable file on
    /// load, permission or disk failure on save).
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid flat INI text.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] IniError),
}

/// Loads the configuration mapping from `path`.
///
/// # Errors
///
/// Returns [`ConfigStoreError::Io`] if the file is missing or unreadable,
/// and [`ConfigStoreError::Parse`] if its content is malformed.
pub async fn load_mapping(path: &Path) -> Result<ConfigMap, ConfigStoreError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigStoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let map = parse_ini(&text)?;
    debug!("loaded {} config entries from {}", map.len(), path.display());
    Ok(map)
}

/// Serializes `map` to canonical flat INI text and overwrites the file at
/// `path`, truncating any previous contents.
///
/// Creates the parent directory if it does not exist yet.
///
/// # Errors
///
/// Returns [`ConfigStoreError::Io`] for file-system failures.
pub async fn save_mapping(path: &Path, map: &ConfigMap) -> Result<(), ConfigStoreError> {
    // Ensure the directory exists before writing.
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| ConfigStoreError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }
    }

    let text = serialize_ini(map);
    tokio::fs::write(path, text)
        .await
        .map_err(|source| ConfigStoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("wrote {} config entries to {}", map.len(), path.display());
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
