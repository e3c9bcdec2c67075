//! Player configuration for trellis-player
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/trellis-player/config.yaml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Where track data comes from
    pub data: DataConfig,
    /// Playback settings
    pub playback: PlaybackConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

/// Track source configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the manifest and track files
    /// Default: ~/trellis-data
    pub data_dir: PathBuf,
    /// Manifest file name inside the data directory
    pub manifest_file: String,
    /// Optional path segment between the data directory and the track files
    pub base_path: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        let data_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trellis-data");
        Self {
            data_dir,
            manifest_file: "manifest.json".to_string(),
            base_path: None,
        }
    }
}

/// Playback configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Tick interval in milliseconds; unusable values fall back to 500
    pub interval_ms: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { interval_ms: 500.0 }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/trellis-player/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("trellis-player")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> PlayerConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return PlayerConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<PlayerConfig>(&contents) {
            Ok(config) => {
                log::info!("load_config: Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("load_config: Invalid config ({}), using defaults", e);
                PlayerConfig::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: Could not read config ({}), using defaults", e);
            PlayerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.data.manifest_file, "manifest.json");
        assert_eq!(config.playback.interval_ms, 500.0);
        assert!(config.data.base_path.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: PlayerConfig =
            serde_yaml::from_str("data:\n  data_dir: /tmp/runs\n").unwrap();
        assert_eq!(config.data.data_dir, PathBuf::from("/tmp/runs"));
        assert_eq!(config.data.manifest_file, "manifest.json");
        assert_eq!(config.playback.interval_ms, 500.0);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config(Path::new("/nonexistent/trellis/config.yaml"));
        assert_eq!(config.playback.interval_ms, 500.0);
    }
}
