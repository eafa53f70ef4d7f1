//! Dropdown configuration

use serde::{Deserialize, Serialize};

/// Constants of the placement heuristic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Height budget per item row
    pub row_height: f64,
    /// Fixed height of the panel chrome (quick actions, footer)
    pub chrome_height: f64,
    /// Cap on the panel height
    pub max_height: f64,
    /// Distance between trigger and panel
    pub gap: f64,
    /// Narrowest the panel may be
    pub min_width: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            row_height: 36.0,
            chrome_height: 80.0,
            max_height: 300.0,
            gap: 4.0,
            min_width: 280.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectBehavior {
    /// Re-place the open panel when the viewport scrolls or resizes
    pub track_viewport: bool,
    /// Close the panel on Escape
    pub close_on_escape: bool,
}

impl Default for SelectBehavior {
    fn default() -> Self {
        Self {
            track_viewport: true,
            close_on_escape: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PlacementConfig = serde_json::from_str(r#"{"max_height": 400}"#).unwrap();
        assert_eq!(config.max_height, 400.0);
        assert_eq!(config.row_height, 36.0);
        assert_eq!(config.min_width, 280.0);

        let behavior: SelectBehavior =
            serde_json::from_str(r#"{"track_viewport": false}"#).unwrap();
        assert!(!behavior.track_viewport);
        assert!(behavior.close_on_escape);
    }
}
