//! Error types for trail configuration and the persisted record

use thiserror::Error;

/// Invalid trail configuration. Raised when a store is built, never later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("trail must define at least one stop")]
    NoStops,

    #[error("stop ids must not be blank")]
    BlankStopId,

    #[error("stop '{id}' is defined more than once")]
    DuplicateStop { id: String },

    #[error("route '{route}' is used by more than one stop")]
    DuplicateRoute { route: String },

    #[error("unlock threshold {threshold} exceeds the {total} available stops")]
    UnreachableThreshold { threshold: usize, total: usize },
}

/// Errors decoding or encoding the persisted trail record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed trail record")]
    Malformed(#[from] serde_json::Error),

    #[error("trail record references unknown stop '{id}'")]
    UnknownStop { id: String },

    #[error("failed to encode trail record")]
    Encode(#[source] serde_json::Error),
}
