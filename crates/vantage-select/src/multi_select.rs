//! Floating multi-select
//!
//! Lifecycle of one dropdown instance:
//! ```text
//! Closed --open()--> Open (layout pending) --commit_layout()--> Open (placed)
//!   ^                                                              |
//!   +------------------- close() / dismiss() ----------------------+
//! ```
//! Layout is committed by the host after the render pass that follows
//! `open()`, so the trigger is mounted and positioned when it is measured.

use std::collections::HashSet;

use uuid::Uuid;

use vantage_overlay::OverlayLayer;

use crate::config::{PlacementConfig, SelectBehavior};
use crate::geometry::{compute_placement, AnchorRect, Placement, Viewport};
use crate::item::{validate_items, SelectableItem};
use crate::summary::display_text;
use crate::Result;

pub type ChangeHandler = Box<dyn FnMut(Vec<String>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Click on the backdrop outside the panel
    Backdrop,
    /// The "Done" button
    Done,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

pub struct FloatingMultiSelect {
    /// Owner id on the overlay layer
    id: String,
    /// Items in display order
    items: Vec<SelectableItem>,
    /// Mirror of the owner's selection
    selected: HashSet<String>,
    placeholder: String,
    noun: String,
    disabled: bool,
    is_open: bool,
    layout_pending: bool,
    placement: Option<Placement>,
    overlay: OverlayLayer<Placement>,
    config: PlacementConfig,
    behavior: SelectBehavior,
    on_change: ChangeHandler,
}

impl FloatingMultiSelect {
    pub fn new(
        items: Vec<SelectableItem>,
        initial: &[String],
        placeholder: impl Into<String>,
        on_change: impl FnMut(Vec<String>) + 'static,
        overlay: &OverlayLayer<Placement>,
        config: PlacementConfig,
        behavior: SelectBehavior,
    ) -> Result<Self> {
        validate_items(&items)?;

        let id = format!("multi-select:{}", Uuid::new_v4());
        let mut select = Self {
            id,
            items,
            selected: HashSet::new(),
            placeholder: placeholder.into(),
            noun: "events".to_string(),
            disabled: false,
            is_open: false,
            layout_pending: false,
            placement: None,
            overlay: overlay.clone(),
            config,
            behavior,
            on_change: Box::new(on_change),
        };
        select.set_selection(initial);

        Ok(select)
    }

    /// Plural used in the trigger text ("events" by default)
    pub fn with_noun(mut self, noun: impl Into<String>) -> Self {
        self.noun = noun.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether `commit_layout` still has to run for the current open
    pub fn is_layout_pending(&self) -> bool {
        self.layout_pending
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    /// Selected keys in display order
    pub fn selected(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|i| self.selected.contains(&i.key))
            .map(|i| i.key.clone())
            .collect()
    }

    pub fn display_text(&self) -> String {
        display_text(&self.items, &self.selected, &self.placeholder, &self.noun)
    }

    /// Take the owner's current selection. Unknown keys are dropped.
    pub fn set_selection(&mut self, keys: &[String]) {
        self.selected = keys
            .iter()
            .filter(|k| {
                let known = self.items.iter().any(|i| &i.key == *k);
                if !known {
                    tracing::debug!(select = %self.id, key = %k, "Dropping unknown key");
                }
                known
            })
            .cloned()
            .collect();
    }

    /// Replace the item list. Keys that disappeared are deselected.
    pub fn set_items(&mut self, items: Vec<SelectableItem>) -> Result<()> {
        validate_items(&items)?;

        let count_changed = items.len() != self.items.len();
        self.items = items;

        let before = self.selected.len();
        let items = &self.items;
        self.selected.retain(|k| items.iter().any(|i| &i.key == k));
        if self.selected.len() != before {
            self.emit();
        }

        if self.is_open && count_changed {
            self.layout_pending = true;
        }

        Ok(())
    }

    /// Disabling an open dropdown closes it
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled && self.is_open {
            self.close();
        }
    }

    /// Open the panel. Ignored while disabled or already open.
    pub fn open(&mut self) -> bool {
        if self.disabled {
            tracing::debug!(select = %self.id, "Ignoring open on disabled select");
            return false;
        }
        if self.is_open {
            return false;
        }

        self.is_open = true;
        self.layout_pending = true;
        tracing::debug!(select = %self.id, "Opened multi-select");
        true
    }

    pub fn close(&mut self) {
        let was_open = self.is_open;
        self.is_open = false;
        self.layout_pending = false;
        self.placement = None;
        self.overlay.unmount(&self.id);

        if was_open {
            tracing::debug!(select = %self.id, "Closed multi-select");
        }
    }

    pub fn dismiss(&mut self, reason: DismissReason) {
        if reason == DismissReason::Escape && !self.behavior.close_on_escape {
            return;
        }
        self.close();
    }

    /// Returns whether the key was handled
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape if self.is_open && self.behavior.close_on_escape => {
                self.dismiss(DismissReason::Escape);
                true
            }
            _ => false,
        }
    }

    /// Measure and place the panel after the render that followed `open()`.
    ///
    /// Does nothing (and returns `None`) if the dropdown was closed in the
    /// meantime. Once placed, later calls return the existing placement.
    pub fn commit_layout(&mut self, anchor: AnchorRect, viewport: Viewport) -> Option<Placement> {
        if !self.is_open {
            return None;
        }
        if !self.layout_pending {
            return self.placement;
        }

        let placement = compute_placement(anchor, viewport, self.items.len(), &self.config);
        let mount_id = self.overlay.mount(&self.id, placement);
        self.placement = Some(placement);
        self.layout_pending = false;

        tracing::debug!(
            select = %self.id,
            mount_id = %mount_id,
            direction = ?placement.direction,
            top = placement.top,
            left = placement.left,
            "Placed multi-select panel"
        );

        Some(placement)
    }

    /// Re-place an open panel after the window scrolled or resized
    pub fn on_viewport_change(
        &mut self,
        anchor: AnchorRect,
        viewport: Viewport,
    ) -> Result<Option<Placement>> {
        if !self.is_open || self.layout_pending || !self.behavior.track_viewport {
            return Ok(None);
        }

        let placement = compute_placement(anchor, viewport, self.items.len(), &self.config);
        self.overlay.update(&self.id, placement)?;
        self.placement = Some(placement);

        Ok(Some(placement))
    }

    /// Flip one key. Keys not in the item list are ignored.
    pub fn toggle(&mut self, key: &str) -> bool {
        if !self.items.iter().any(|i| i.key == key) {
            tracing::debug!(select = %self.id, key = %key, "Ignoring toggle of unknown key");
            return false;
        }

        if !self.selected.remove(key) {
            self.selected.insert(key.to_string());
        }
        self.emit();
        true
    }

    pub fn select_all(&mut self) {
        self.selected = self.items.iter().map(|i| i.key.clone()).collect();
        self.emit();
    }

    pub fn select_none(&mut self) {
        self.selected.clear();
        self.emit();
    }

    fn emit(&mut self) {
        let selected = self.selected();
        tracing::debug!(select = %self.id, count = selected.len(), "Selection changed");
        (self.on_change)(selected);
    }
}

impl Drop for FloatingMultiSelect {
    fn drop(&mut self) {
        self.overlay.unmount(&self.id);
    }
}
