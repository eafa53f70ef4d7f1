//! Tab switcher configuration

use serde::{Deserialize, Serialize};

use crate::indicator::IndicatorTransition;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Length of the panel crossfade in milliseconds
    pub crossfade_ms: u64,
    /// Spring stiffness of the sliding indicator
    pub indicator_stiffness: f64,
    /// Spring damping of the sliding indicator
    pub indicator_damping: f64,
    /// Prefix of the animation group id claimed per tab set
    pub indicator_group_prefix: String,
}

impl TabsConfig {
    pub fn indicator_transition(&self) -> IndicatorTransition {
        IndicatorTransition {
            stiffness: self.indicator_stiffness,
            damping: self.indicator_damping,
        }
    }

    pub fn crossfade_duration(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.crossfade_ms.min(i64::MAX as u64) as i64)
    }
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            crossfade_ms: 300,
            indicator_stiffness: 500.0,
            indicator_damping: 30.0,
            indicator_group_prefix: "tab-indicator".to_string(),
        }
    }
}
