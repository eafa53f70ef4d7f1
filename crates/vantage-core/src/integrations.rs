//! Webhook integration settings
//!
//! The event dropdown writes into the shared settings through its change
//! callback; the host reads `payload()` when it saves.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use vantage_overlay::OverlayLayer;
use vantage_select::{FloatingMultiSelect, Placement, SelectableItem};

use crate::config::Config;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookSettings {
    /// Endpoint the events are delivered to
    pub url: String,
    /// Subscribed event keys, in catalog order
    pub events: Vec<String>,
    /// Last local edit, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

pub(crate) struct WebhookEditor {
    settings: Arc<RwLock<WebhookSettings>>,
    events: FloatingMultiSelect,
}

impl WebhookEditor {
    pub(crate) fn new(
        catalog: Vec<SelectableItem>,
        config: &Config,
        overlay: &OverlayLayer<Placement>,
    ) -> Result<Self> {
        let settings = Arc::new(RwLock::new(WebhookSettings::default()));

        let sink = Arc::clone(&settings);
        let events = FloatingMultiSelect::new(
            catalog,
            &[],
            config.event_placeholder.clone(),
            move |selected: Vec<String>| {
                let mut settings = sink.write();
                settings.events = selected;
                settings.updated_at = Some(Utc::now());
            },
            overlay,
            config.select,
            config.select_behavior,
        )?;

        Ok(Self { settings, events })
    }

    /// Take settings loaded by the host. Events missing from the catalog are dropped.
    pub(crate) fn load(&mut self, settings: WebhookSettings) {
        self.events.set_selection(&settings.events);
        let events = self.events.selected();

        let mut current = self.settings.write();
        *current = settings;
        current.events = events;
    }

    pub(crate) fn set_url(&mut self, url: String) {
        let mut settings = self.settings.write();
        settings.url = url.trim().to_string();
        settings.updated_at = Some(Utc::now());
    }

    pub(crate) fn payload(&self) -> WebhookSettings {
        self.settings.read().clone()
    }

    pub(crate) fn events(&self) -> &FloatingMultiSelect {
        &self.events
    }

    pub(crate) fn events_mut(&mut self) -> &mut FloatingMultiSelect {
        &mut self.events
    }
}
