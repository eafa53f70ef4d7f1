//! Tab descriptors
//!
//! A tab button shows:
//! - Label
//! - Optional icon
//!
//! Restricted tabs (admin-only) are removed from the set for viewers
//! without the capability. They are never shown disabled.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Identifier, unique within its tab set and stable across renders
    pub id: String,
    /// Button label
    pub label: String,
    /// Icon name, if the button has one
    pub icon: Option<String>,
    /// Only present for viewers holding the admin capability
    #[serde(default)]
    pub restricted: bool,
}

impl TabDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TabError::InvalidId("Tab id cannot be empty".to_string()));
        }

        Ok(Self {
            id,
            label: label.into(),
            icon: None,
            restricted: false,
        })
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Mark the tab as admin-only
    pub fn restricted(mut self) -> Self {
        self.restricted = true;
        self
    }
}

/// The tabs a viewer actually gets, in declared order
pub fn visible_tabs(tabs: &[TabDescriptor], is_admin: bool) -> Vec<TabDescriptor> {
    tabs.iter()
        .filter(|t| is_admin || !t.restricted)
        .cloned()
        .collect()
}

/// Check a tab set: non-empty, no duplicate ids
pub fn validate_tab_set(tabs: &[TabDescriptor]) -> Result<()> {
    if tabs.is_empty() {
        return Err(TabError::EmptyTabSet);
    }

    for (i, tab) in tabs.iter().enumerate() {
        if tabs[..i].iter().any(|t| t.id == tab.id) {
            return Err(TabError::DuplicateId(tab.id.clone()));
        }
    }

    Ok(())
}
