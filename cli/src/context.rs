use std::path::PathBuf;

use trailhead_core::context::AppConfig;
use trailhead_core::{Content, FileStorage, TrailProgressStore};

/// Holds all state for one CLI session.
///
/// The store is single-threaded; the REPL and the watch loop both run on
/// the main thread.
pub struct CliContext {
    pub config: AppConfig,
    pub progress_path: PathBuf,
    pub store: TrailProgressStore,
    /// None when no content directory is configured or it failed to load
    pub content: Option<Content>,
}

impl CliContext {
    pub fn new() -> Result<Self, String> {
        Self::with_config(AppConfig::load())
    }

    pub fn with_config(config: AppConfig) -> Result<Self, String> {
        let progress_path = config.progress_path();
        let store = TrailProgressStore::builder(config.trail.clone())
            .storage(FileStorage::new(&progress_path))
            .build()
            .map_err(|e| format!("Invalid trail configuration: {e}"))?;

        let content = match &config.content_dir {
            Some(dir) => match Content::load_dir(dir) {
                Ok(content) => Some(content),
                Err(e) => {
                    tracing::warn!(error = %e, dir = %dir.display(), "Content not loaded");
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            config,
            progress_path,
            store,
            content,
        })
    }
}
