//! Error types for pagedex-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading, scanning, prompting or saving.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index file did not exist at the expected path.
    #[error("index not found at {path}")]
    NotFound { path: PathBuf },

    /// JSON parse error on load — the document is malformed or not an object.
    #[error("failed to parse index at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The pages directory is missing or cannot be listed.
    #[error("cannot read pages directory {path}: {source}")]
    PagesDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The metadata provider could not supply an answer (console closed, etc.).
    #[error("failed to read page metadata: {0}")]
    Prompt(#[source] std::io::Error),
}

/// Convenience constructor for [`IndexError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> IndexError {
    IndexError::Io {
        path: path.into(),
        source,
    }
}
