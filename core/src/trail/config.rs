//! Product policy for the trail: which stops exist, how many unlock the
//! recruiter packet, and where progress is stored.

use serde::{Deserialize, Serialize};
use trailhead_types::Stop;

use super::{ConfigError, StopSet, default_stops};

pub const DEFAULT_UNLOCK_THRESHOLD: usize = 3;
pub const DEFAULT_STORAGE_KEY: &str = "trailProgress";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Distinct visits needed to unlock the recruiter packet
    pub unlock_threshold: usize,
    /// Storage entry name for the persisted record
    pub storage_key: String,
    // Last so TOML writes the scalar keys before the `[[trail.stops]]` tables
    pub stops: Vec<Stop>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            stops: default_stops(),
            unlock_threshold: DEFAULT_UNLOCK_THRESHOLD,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl TrailConfig {
    /// Check the config and build the stop set the store runs on.
    pub fn validate(&self) -> Result<StopSet, ConfigError> {
        let stops = StopSet::new(self.stops.clone())?;
        if self.unlock_threshold > stops.len() {
            return Err(ConfigError::UnreachableThreshold {
                threshold: self.unlock_threshold,
                total: stops.len(),
            });
        }
        Ok(stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TrailConfig::default();
        assert_eq!(config.validate().unwrap().len(), 6);
        assert_eq!(config.unlock_threshold, 3);
        assert_eq!(config.storage_key, "trailProgress");
    }

    #[test]
    fn threshold_beyond_stop_count_is_rejected() {
        let config = TrailConfig {
            unlock_threshold: 7,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnreachableThreshold {
                threshold: 7,
                total: 6
            })
        );
    }

    #[test]
    fn zero_threshold_is_allowed() {
        let config = TrailConfig {
            unlock_threshold: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: TrailConfig = serde_json::from_str(r#"{"unlock_threshold": 2}"#).unwrap();
        assert_eq!(config.unlock_threshold, 2);
        assert_eq!(config.stops, default_stops());
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }
}
