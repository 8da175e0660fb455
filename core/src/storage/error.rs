//! Error types for progress persistence

use std::path::PathBuf;
use thiserror::Error;

/// Errors from a [`ProgressStorage`](super::ProgressStorage) backend.
///
/// The trail store never surfaces these to the visitor; they are logged and
/// the session continues on in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("progress storage is unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("progress storage rejected the write: {reason}")]
    Rejected { reason: String },

    #[error("failed to read progress file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write progress file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create data directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
