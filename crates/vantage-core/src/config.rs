//! Dashboard configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vantage_select::{PlacementConfig, SelectBehavior};
use vantage_tabs::TabsConfig;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Crossfade and indicator settings shared by every settings screen
    pub tabs: TabsConfig,
    /// Placement heuristic of floating dropdowns
    pub select: PlacementConfig,
    /// Dismissal and viewport tracking of floating dropdowns
    pub select_behavior: SelectBehavior,
    /// Trigger text of the webhook event dropdown with nothing selected
    pub event_placeholder: String,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let config = Self::from_json_str(&json)?;
                tracing::info!(path = %path.display(), "Loaded configuration");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// `<platform config dir>/vantage/config.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("vantage").join("config.json"))
            .unwrap_or_else(|| PathBuf::from("vantage").join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        let s = &self.select;
        if s.row_height < 0.0 || s.chrome_height < 0.0 || s.gap < 0.0 {
            return Err(CoreError::Config(
                "select sizes must not be negative".to_string(),
            ));
        }
        if s.max_height <= 0.0 || s.min_width <= 0.0 {
            return Err(CoreError::Config(
                "select max_height and min_width must be positive".to_string(),
            ));
        }
        if self.tabs.indicator_stiffness < 0.0 || self.tabs.indicator_damping < 0.0 {
            return Err(CoreError::Config(
                "indicator spring must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tabs: TabsConfig::default(),
            select: PlacementConfig::default(),
            select_behavior: SelectBehavior::default(),
            event_placeholder: "Select events".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tabs.crossfade_ms, 300);
        assert_eq!(config.select.row_height, 36.0);
        assert_eq!(config.select.chrome_height, 80.0);
        assert_eq!(config.select.max_height, 300.0);
        assert_eq!(config.select.gap, 4.0);
        assert_eq!(config.select.min_width, 280.0);
        assert!(config.select_behavior.track_viewport);
        assert_eq!(config.event_placeholder, "Select events");
    }

    #[test]
    fn test_partial_json() {
        let config =
            Config::from_json_str(r#"{"tabs": {"crossfade_ms": 120}, "event_placeholder": "Events"}"#)
                .unwrap();
        assert_eq!(config.tabs.crossfade_ms, 120);
        assert_eq!(config.tabs.indicator_damping, 30.0);
        assert_eq!(config.select, PlacementConfig::default());
        assert_eq!(config.event_placeholder, "Events");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Config::from_json_str(r#"{"select": {"max_height": 0}}"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Config::from_json_str("{not json"),
            Err(CoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("vantage-config-does-not-exist.json");
        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "vantage-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"select_behavior": {"close_on_escape": false}}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.select_behavior.close_on_escape);
        assert!(config.select_behavior.track_viewport);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        assert!(Config::default_path().ends_with("vantage/config.json"));
    }
}
