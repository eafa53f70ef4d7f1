//! Selectable items

use serde::{Deserialize, Serialize};

use crate::error::SelectError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableItem {
    /// Unique within the item list
    pub key: String,
    /// Row label
    pub label: String,
}

impl SelectableItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Check an item list: non-empty keys, no duplicates
pub(crate) fn validate_items(items: &[SelectableItem]) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        if item.key.is_empty() {
            return Err(SelectError::InvalidKey("Item key cannot be empty".to_string()));
        }
        if items[..i].iter().any(|other| other.key == item.key) {
            return Err(SelectError::DuplicateKey(item.key.clone()));
        }
    }
    Ok(())
}
