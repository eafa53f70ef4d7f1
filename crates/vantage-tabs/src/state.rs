//! Panel State Machine
//!
//! ```text
//! Hidden
//!   ↓ activate
//! Active
//!   ↓ another tab activated
//! Hidden
//! ```
//!
//! The classification is discrete. The crossfade only animates opacity
//! on top of it, so a hidden panel can still be fading out while the
//! active one fades in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    /// Panel belongs to the active tab
    Active,
    /// Panel stays mounted but is taken out of flow
    Hidden,
}

impl PanelState {
    pub fn for_tab(id: &str, active_id: &str) -> Self {
        if id == active_id {
            PanelState::Active
        } else {
            PanelState::Hidden
        }
    }

    pub fn style(&self) -> PanelStyle {
        match self {
            PanelState::Active => PanelStyle::ACTIVE,
            PanelState::Hidden => PanelStyle::HIDDEN,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PanelState::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelState::Active => "active",
            PanelState::Hidden => "hidden",
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PanelState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PanelState::Active),
            "hidden" => Ok(PanelState::Hidden),
            _ => Err(format!("Unknown panel state: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPosition {
    /// In normal flow, sizes the container
    Relative,
    /// Stacked underneath, out of flow
    Absolute,
}

impl PanelPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelPosition::Relative => "relative",
            PanelPosition::Absolute => "absolute",
        }
    }
}

/// Style directive for one panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelStyle {
    pub opacity: f32,
    pub visible: bool,
    pub position: PanelPosition,
    pub width: &'static str,
}

impl PanelStyle {
    pub const ACTIVE: PanelStyle = PanelStyle {
        opacity: 1.0,
        visible: true,
        position: PanelPosition::Relative,
        width: "100%",
    };

    pub const HIDDEN: PanelStyle = PanelStyle {
        opacity: 0.0,
        visible: false,
        position: PanelPosition::Absolute,
        width: "100%",
    };

    pub fn is_active(&self) -> bool {
        *self == PanelStyle::ACTIVE
    }
}
