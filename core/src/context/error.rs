//! Error types for context operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors while watching the progress file
#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("failed to create progress directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("progress file {path} has no parent directory")]
    NoParent { path: PathBuf },

    #[error("failed to initialize file watcher")]
    InitWatcher(#[source] notify::Error),

    #[error("failed to watch path {path}")]
    WatchPath {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("invalid trail configuration")]
    Trail(#[from] crate::trail::ConfigError),
}
