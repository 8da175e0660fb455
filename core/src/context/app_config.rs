use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::AppConfigError;
use crate::storage::FileStorage;
use crate::trail::TrailConfig;

pub const APP_NAME: &str = "trailhead";

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Progress file; platform data dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_file: Option<PathBuf>,
    /// Directory holding the content JSON documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,
    #[serde(default)]
    pub trail: TrailConfig,
}

impl AppConfig {
    /// Load the config, falling back to defaults if it cannot be read.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default configuration");
            Self::default()
        })
    }

    /// Load the config and check the trail section.
    pub fn try_load() -> Result<Self, AppConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit file, writing defaults there if it is missing.
    pub fn load_from(path: &Path) -> Result<Self, AppConfigError> {
        let config: Self = confy::load_path(path)?;
        config.trail.validate()?;
        Ok(config)
    }

    /// Write to the standard config file and return its path.
    pub fn save(&self) -> Result<PathBuf, AppConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppConfigError> {
        confy::store_path(path, self).map_err(AppConfigError::Save)
    }

    pub fn config_path() -> Result<PathBuf, AppConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, "config")?)
    }

    pub fn progress_path(&self) -> PathBuf {
        self.progress_file
            .clone()
            .unwrap_or_else(FileStorage::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_progress_file_wins() {
        let config = AppConfig {
            progress_file: Some(PathBuf::from("/tmp/trail.json")),
            ..Default::default()
        };
        assert_eq!(config.progress_path(), PathBuf::from("/tmp/trail.json"));
    }

    #[test]
    fn default_progress_file_lives_under_trailhead() {
        let path = AppConfig::default().progress_path();
        assert!(path.ends_with("trailhead/progress.json"));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = AppConfig {
            content_dir: Some(PathBuf::from("content")),
            ..Default::default()
        };
        config.trail.unlock_threshold = 4;

        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn unreachable_threshold_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[trail]\nunlock_threshold = 9\n").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(AppConfigError::Trail(_))
        ));
    }
}
