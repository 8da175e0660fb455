//! Error types for site content loading

use std::path::PathBuf;
use thiserror::Error;

/// Content failed to load or validate. The site refuses to start on these;
/// the trail store never sees them.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {document} content")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("duplicate app slug '{slug}'")]
    DuplicateSlug { slug: String },

    #[error("app '{id}' needs a url to launch")]
    MissingAppUrl { id: String },
}
