//! Animation groups
//!
//! A group id names one logical animated element (for example the
//! sliding indicator under a tab strip). Whoever claims the group owns
//! the single mounted instance; everything else animates that instance
//! instead of mounting its own.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::OverlayError;
use crate::Result;

pub struct AnimationGroups {
    /// group id -> owner holding the mounted element
    holders: Arc<RwLock<HashMap<String, String>>>,
}

impl AnimationGroups {
    pub fn new() -> Self {
        Self {
            holders: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Claim a group for `owner`. Claiming a group you already hold is a no-op.
    pub fn claim(&self, group: &str, owner: &str) -> Result<()> {
        let mut holders = self.holders.write();
        match holders.get(group) {
            Some(holder) if holder == owner => Ok(()),
            Some(holder) => Err(OverlayError::GroupOccupied {
                group: group.to_string(),
                owner: holder.clone(),
            }),
            None => {
                holders.insert(group.to_string(), owner.to_string());
                tracing::debug!(group = %group, owner = %owner, "Claimed animation group");
                Ok(())
            }
        }
    }

    /// Release a group. Only the holder can release it.
    pub fn release(&self, group: &str, owner: &str) -> bool {
        let mut holders = self.holders.write();
        if holders.get(group).is_some_and(|holder| holder == owner) {
            holders.remove(group);
            tracing::debug!(group = %group, owner = %owner, "Released animation group");
            true
        } else {
            false
        }
    }

    pub fn holder(&self, group: &str) -> Option<String> {
        self.holders.read().get(group).cloned()
    }

    pub fn is_mounted(&self, group: &str) -> bool {
        self.holders.read().contains_key(group)
    }

    pub fn len(&self) -> usize {
        self.holders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.read().is_empty()
    }
}

impl Default for AnimationGroups {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AnimationGroups {
    fn clone(&self) -> Self {
        Self {
            holders: Arc::clone(&self.holders),
        }
    }
}
