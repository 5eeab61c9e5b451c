//! Index file persistence.
//!
//! The index is a single JSON object, two-space indented, with non-ASCII
//! characters written as-is. Saves go through a `.tmp` sibling and a rename,
//! so a failed write never truncates the previous index.

use std::path::{Path, PathBuf};

use crate::error::{io_err, IndexError};
use crate::types::Index;

/// Load the index at `path`.
///
/// Returns `IndexError::NotFound` if absent,
/// `IndexError::Parse` (with path context) if malformed or not a top-level object.
/// Individual records are not checked.
pub fn load_at(path: &Path) -> Result<Index, IndexError> {
    if !path.exists() {
        return Err(IndexError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let index: Index = serde_json::from_str(&contents).map_err(|source| IndexError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loaded {} entries from {}", index.len(), path.display());
    Ok(index)
}

/// Render the index exactly as [`save_at`] writes it.
pub fn to_json(index: &Index) -> Result<String, IndexError> {
    Ok(serde_json::to_string_pretty(index)?)
}

/// Overwrite the index at `path` in full.
///
/// Write flow: serialize → `<path>.tmp` → `rename`.
pub fn save_at(path: &Path, index: &Index) -> Result<(), IndexError> {
    let json = to_json(index)?;
    let tmp = tmp_path(path);

    std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("saved {} entries to {}", index.len(), path.display());
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
