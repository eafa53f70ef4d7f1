//! Theme picker
//!
//! The catalog comes from the host; the picker only tracks which entry
//! is chosen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub dark: bool,
}

impl Theme {
    pub fn new(id: impl Into<String>, name: impl Into<String>, dark: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dark,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCatalog {
    pub themes: Vec<Theme>,
}

impl ThemeCatalog {
    pub fn new(themes: Vec<Theme>) -> Self {
        Self { themes }
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub fn light(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter().filter(|t| !t.dark)
    }

    pub fn dark(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter().filter(|t| t.dark)
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ThemePicker {
    catalog: ThemeCatalog,
    selected: Option<String>,
}

impl ThemePicker {
    /// Start on `selected` if the catalog has it, else on the first theme
    pub fn new(catalog: ThemeCatalog, selected: Option<&str>) -> Self {
        let selected = selected
            .filter(|id| catalog.get(id).is_some())
            .map(str::to_string)
            .or_else(|| catalog.themes.first().map(|t| t.id.clone()));

        Self { catalog, selected }
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// Choose a theme. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        if self.catalog.get(id).is_none() {
            tracing::debug!(theme = %id, "Ignoring unknown theme");
            return false;
        }
        if self.selected.as_deref() == Some(id) {
            return false;
        }

        tracing::debug!(theme = %id, "Theme selected");
        self.selected = Some(id.to_string());
        true
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_theme(&self) -> Option<&Theme> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Swap in a refreshed catalog, keeping the selection when it still exists
    pub fn set_catalog(&mut self, catalog: ThemeCatalog) {
        let keep = self
            .selected
            .as_deref()
            .filter(|id| catalog.get(id).is_some())
            .map(str::to_string);
        self.selected = keep.or_else(|| catalog.themes.first().map(|t| t.id.clone()));
        self.catalog = catalog;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ThemeCatalog {
        ThemeCatalog::new(vec![
            Theme::new("daylight", "Daylight", false),
            Theme::new("midnight", "Midnight", true),
            Theme::new("slate", "Slate", true),
        ])
    }

    #[test]
    fn test_initial_selection() {
        assert_eq!(
            ThemePicker::new(catalog(), Some("slate")).selected_id(),
            Some("slate")
        );
        assert_eq!(
            ThemePicker::new(catalog(), Some("neon")).selected_id(),
            Some("daylight")
        );
        assert_eq!(ThemePicker::new(catalog(), None).selected_id(), Some("daylight"));
        assert!(ThemePicker::new(ThemeCatalog::default(), None)
            .selected_theme()
            .is_none());
    }

    #[test]
    fn test_select() {
        let mut picker = ThemePicker::new(catalog(), None);
        assert!(picker.select("midnight"));
        assert!(!picker.select("midnight"));
        assert!(!picker.select("neon"));
        assert_eq!(picker.selected_theme().unwrap().name, "Midnight");
        assert!(picker.is_selected("midnight"));
    }

    #[test]
    fn test_grouping() {
        let catalog = catalog();
        assert_eq!(catalog.light().count(), 1);
        let dark: Vec<&str> = catalog.dark().map(|t| t.id.as_str()).collect();
        assert_eq!(dark, vec!["midnight", "slate"]);
    }

    #[test]
    fn test_refresh_catalog() {
        let mut picker = ThemePicker::new(catalog(), Some("slate"));
        picker.set_catalog(ThemeCatalog::new(vec![
            Theme::new("slate", "Slate", true),
            Theme::new("paper", "Paper", false),
        ]));
        assert_eq!(picker.selected_id(), Some("slate"));

        picker.set_catalog(ThemeCatalog::new(vec![Theme::new("paper", "Paper", false)]));
        assert_eq!(picker.selected_id(), Some("paper"));
    }
}
