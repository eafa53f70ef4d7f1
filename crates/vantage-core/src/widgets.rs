//! Widget and template catalog
//!
//! Read-only view over the widget list the host fetched.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSummary {
    pub id: String,
    pub name: String,
    /// Widget type, e.g. "chart" or "counter"
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    /// Widget the template instantiates
    pub widget_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetCatalog {
    #[serde(default)]
    pub widgets: Vec<WidgetSummary>,
    #[serde(default)]
    pub templates: Vec<TemplateSummary>,
}

impl WidgetCatalog {
    pub fn widget(&self, id: &str) -> Option<&WidgetSummary> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn templates_for(&self, widget_id: &str) -> Vec<&TemplateSummary> {
        self.templates
            .iter()
            .filter(|t| t.widget_id == widget_id)
            .collect()
    }

    /// Templates pointing at widgets the catalog doesn't have
    pub fn orphan_templates(&self) -> Vec<&TemplateSummary> {
        self.templates
            .iter()
            .filter(|t| self.widget(&t.widget_id).is_none())
            .collect()
    }

    /// Widget kinds present, first-seen order
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for widget in &self.widgets {
            if !kinds.contains(&widget.kind.as_str()) {
                kinds.push(&widget.kind);
            }
        }
        kinds
    }
}
