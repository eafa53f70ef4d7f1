//! Overlay layer
//!
//! A single detached render target shared by every floating panel.
//! Panels are keyed by their owner (the component instance that opened
//! them), so each owner has at most one mounted panel and owners never
//! touch each other's entries.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::OverlayError;
use crate::Result;

/// Identifier of one mount of a panel.
///
/// A fresh id is issued every time an owner mounts, so the host can tell
/// a re-opened panel apart from the one it replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MountId(String);

impl MountId {
    fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct OverlayEntry<P> {
    /// Owner that mounted the panel
    pub owner: String,
    /// Id of this particular mount
    pub mount_id: MountId,
    /// Where the panel should be drawn
    pub placement: P,
}

pub struct OverlayLayer<P> {
    /// Mounted panels, in mount order (later entries draw on top)
    entries: Arc<RwLock<Vec<OverlayEntry<P>>>>,
}

impl<P: Clone> OverlayLayer<P> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Mount the owner's panel, replacing any panel it already had
    pub fn mount(&self, owner: &str, placement: P) -> MountId {
        let mount_id = MountId::new();
        let mut entries = self.entries.write();
        entries.retain(|e| e.owner != owner);
        entries.push(OverlayEntry {
            owner: owner.to_string(),
            mount_id: mount_id.clone(),
            placement,
        });

        tracing::debug!(owner = %owner, mount_id = %mount_id, "Mounted overlay panel");

        mount_id
    }

    /// Move an already mounted panel
    pub fn update(&self, owner: &str, placement: P) -> Result<()> {
        let mut entries = self.entries.write();
        let entry = entries
            .iter_mut()
            .find(|e| e.owner == owner)
            .ok_or_else(|| OverlayError::NotMounted(owner.to_string()))?;
        entry.placement = placement;
        Ok(())
    }

    /// Remove the owner's panel. Returns false if nothing was mounted.
    pub fn unmount(&self, owner: &str) -> bool {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|e| e.owner != owner);
        let removed = entries.len() != before;

        if removed {
            tracing::debug!(owner = %owner, "Unmounted overlay panel");
        }

        removed
    }

    pub fn get(&self, owner: &str) -> Option<OverlayEntry<P>> {
        self.entries.read().iter().find(|e| e.owner == owner).cloned()
    }

    pub fn is_mounted(&self, owner: &str) -> bool {
        self.entries.read().iter().any(|e| e.owner == owner)
    }

    /// Owners with a mounted panel, bottom to top
    pub fn mounted_owners(&self) -> Vec<String> {
        self.entries.read().iter().map(|e| e.owner.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<P: Clone> Default for OverlayLayer<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for OverlayLayer<P> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}
