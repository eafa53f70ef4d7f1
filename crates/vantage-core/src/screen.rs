//! Settings screens
//!
//! Every screen is a tab set. The declared lists below are the full sets;
//! viewers without the admin capability get them minus restricted tabs.

use serde::{Deserialize, Serialize};

use vantage_tabs::TabDescriptor;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    General,
    Appearance,
    Integrations,
    Widgets,
}

impl Screen {
    /// All screens in navigation order
    pub const ALL: [Screen; 4] = [
        Screen::General,
        Screen::Appearance,
        Screen::Integrations,
        Screen::Widgets,
    ];

    /// (id, label, icon, restricted)
    fn tab_table(&self) -> &'static [(&'static str, &'static str, &'static str, bool)] {
        match self {
            Screen::General => &[
                ("profile", "Profile", "user", false),
                ("notifications", "Notifications", "bell", false),
                ("security", "Security", "lock", false),
                ("admin", "Administration", "shield", true),
            ],
            Screen::Appearance => &[
                ("theme", "Theme", "palette", false),
                ("layout", "Layout", "layout", false),
                ("advanced", "Advanced", "sliders", true),
            ],
            Screen::Integrations => &[
                ("webhooks", "Webhooks", "webhook", false),
                ("slack", "Slack", "message", false),
                ("api-keys", "API Keys", "key", true),
            ],
            Screen::Widgets => &[
                ("widgets", "Widgets", "grid", false),
                ("templates", "Templates", "copy", false),
                ("sharing", "Sharing", "share", true),
            ],
        }
    }

    pub fn declared_tabs(&self) -> Vec<TabDescriptor> {
        self.tab_table()
            .iter()
            .map(|(id, label, icon, restricted)| TabDescriptor {
                id: id.to_string(),
                label: label.to_string(),
                icon: Some(icon.to_string()),
                restricted: *restricted,
            })
            .collect()
    }

    /// Tab shown when the screen is first opened
    pub fn default_tab(&self) -> &'static str {
        self.tab_table()[0].0
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::General => "general",
            Screen::Appearance => "appearance",
            Screen::Integrations => "integrations",
            Screen::Widgets => "widgets",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Screen {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Screen::General),
            "appearance" => Ok(Screen::Appearance),
            "integrations" => Ok(Screen::Integrations),
            "widgets" => Ok(Screen::Widgets),
            _ => Err(CoreError::UnknownScreen(s.to_string())),
        }
    }
}
