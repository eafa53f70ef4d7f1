//! Main dashboard state container
//!
//! Holds one tab switcher per settings screen plus the pickers those
//! screens host. All inputs arrive already fetched; the host renders from
//! the state exposed here.

use serde::{Deserialize, Serialize};

use vantage_overlay::{AnimationGroups, OverlayLayer};
use vantage_select::{
    AnchorRect, DismissReason, FloatingMultiSelect, Key, Placement, SelectableItem, Viewport,
};
use vantage_tabs::{validate_tab_set, visible_tabs, TabDescriptor, TabSwitcher};

use crate::config::Config;
use crate::integrations::{WebhookEditor, WebhookSettings};
use crate::screen::Screen;
use crate::theme::{ThemeCatalog, ThemePicker};
use crate::widgets::WidgetCatalog;
use crate::Result;

/// Who is looking at the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub is_admin: bool,
}

impl Viewer {
    pub fn admin() -> Self {
        Self { is_admin: true }
    }

    /// Editing integrations is admin-only; others see them read-only
    pub fn can_manage_integrations(&self) -> bool {
        self.is_admin
    }
}

/// One settings screen: its declared tabs and the switcher over the visible ones
struct ScreenEntry {
    screen: Screen,
    declared: Vec<TabDescriptor>,
    switcher: TabSwitcher,
}

pub struct Dashboard {
    config: Config,
    viewer: Viewer,
    /// Shared animation identities (one indicator per screen)
    groups: AnimationGroups,
    /// Shared render target of floating panels
    overlay: OverlayLayer<Placement>,
    /// Screens in `Screen::ALL` order
    screens: Vec<ScreenEntry>,
    active_screen: Screen,
    themes: ThemePicker,
    webhooks: WebhookEditor,
    widgets: WidgetCatalog,
}

impl Dashboard {
    pub fn new(
        config: Config,
        viewer: Viewer,
        theme_catalog: ThemeCatalog,
        event_catalog: Vec<SelectableItem>,
    ) -> Result<Self> {
        let groups = AnimationGroups::new();
        let overlay = OverlayLayer::new();

        let mut screens = Vec::with_capacity(Screen::ALL.len());
        for screen in Screen::ALL {
            let declared = screen.declared_tabs();
            let switcher = TabSwitcher::new(
                screen.as_str(),
                visible_tabs(&declared, viewer.is_admin),
                Some(screen.default_tab()),
                &config.tabs,
                &groups,
            )?;
            screens.push(ScreenEntry {
                screen,
                declared,
                switcher,
            });
        }

        let mut webhooks = WebhookEditor::new(event_catalog, &config, &overlay)?;
        webhooks
            .events_mut()
            .set_disabled(!viewer.can_manage_integrations());

        tracing::info!(
            is_admin = viewer.is_admin,
            themes = theme_catalog.themes.len(),
            "Dashboard initialized"
        );

        Ok(Self {
            config,
            viewer,
            groups,
            overlay,
            screens,
            active_screen: Screen::General,
            themes: ThemePicker::new(theme_catalog, None),
            webhooks,
            widgets: WidgetCatalog::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn viewer(&self) -> Viewer {
        self.viewer
    }

    pub fn overlay(&self) -> &OverlayLayer<Placement> {
        &self.overlay
    }

    pub fn animation_groups(&self) -> &AnimationGroups {
        &self.groups
    }

    // === Screens ===

    pub fn active_screen(&self) -> Screen {
        self.active_screen
    }

    pub fn set_active_screen(&mut self, screen: Screen) {
        if screen != self.active_screen {
            tracing::debug!(from = %self.active_screen, to = %screen, "Screen switch");
            // Leaving a screen dismisses any open dropdown on it
            self.webhooks.events_mut().dismiss(DismissReason::Backdrop);
            self.active_screen = screen;
        }
    }

    pub fn screen(&self, screen: Screen) -> &TabSwitcher {
        &self.screens[Self::index_of(screen)].switcher
    }

    pub fn screen_mut(&mut self, screen: Screen) -> &mut TabSwitcher {
        &mut self.screens[Self::index_of(screen)].switcher
    }

    /// Click on a tab button. Unknown ids are ignored.
    pub fn select_tab(&mut self, screen: Screen, tab_id: &str) -> bool {
        self.screen_mut(screen).set_active(tab_id)
    }

    fn index_of(screen: Screen) -> usize {
        Screen::ALL
            .iter()
            .position(|s| *s == screen)
            .unwrap_or(0)
    }

    /// Change the viewer's capability and rebuild every tab set.
    ///
    /// Screens whose active tab disappeared fall back to their first tab.
    /// Returns the screens that fell back. Every new tab set is checked
    /// before any screen changes, so an error leaves the dashboard as it was.
    pub fn set_admin(&mut self, is_admin: bool) -> Result<Vec<Screen>> {
        if self.viewer.is_admin == is_admin {
            return Ok(Vec::new());
        }

        let next: Vec<Vec<TabDescriptor>> = self
            .screens
            .iter()
            .map(|entry| visible_tabs(&entry.declared, is_admin))
            .collect();
        for tabs in &next {
            validate_tab_set(tabs)?;
        }

        let mut fell_back = Vec::new();
        for (entry, tabs) in self.screens.iter_mut().zip(next) {
            if entry.switcher.replace_tabs(tabs)? {
                fell_back.push(entry.screen);
            }
        }

        self.viewer.is_admin = is_admin;
        tracing::info!(is_admin, "Viewer capability changed");

        self.webhooks
            .events_mut()
            .set_disabled(!self.viewer.can_manage_integrations());

        Ok(fell_back)
    }

    // === Theme ===

    pub fn themes(&self) -> &ThemePicker {
        &self.themes
    }

    pub fn select_theme(&mut self, id: &str) -> bool {
        self.themes.select(id)
    }

    pub fn set_theme_catalog(&mut self, catalog: ThemeCatalog) {
        self.themes.set_catalog(catalog);
    }

    // === Integrations ===

    pub fn event_select(&self) -> &FloatingMultiSelect {
        self.webhooks.events()
    }

    pub fn event_select_mut(&mut self) -> &mut FloatingMultiSelect {
        self.webhooks.events_mut()
    }

    pub fn open_event_select(&mut self) -> bool {
        self.webhooks.events_mut().open()
    }

    /// Run after the render that followed `open_event_select`
    pub fn commit_event_layout(&mut self, anchor: AnchorRect, viewport: Viewport) -> Option<Placement> {
        self.webhooks.events_mut().commit_layout(anchor, viewport)
    }

    pub fn on_viewport_change(
        &mut self,
        anchor: AnchorRect,
        viewport: Viewport,
    ) -> Result<Option<Placement>> {
        Ok(self.webhooks.events_mut().on_viewport_change(anchor, viewport)?)
    }

    pub fn handle_key(&mut self, key: Key) -> bool {
        self.webhooks.events_mut().handle_key(key)
    }

    pub fn load_webhook(&mut self, settings: WebhookSettings) {
        self.webhooks.load(settings);
    }

    pub fn set_webhook_url(&mut self, url: String) {
        self.webhooks.set_url(url);
    }

    /// Current webhook settings, for the host to save
    pub fn webhook_payload(&self) -> WebhookSettings {
        self.webhooks.payload()
    }

    // === Widgets ===

    pub fn widgets(&self) -> &WidgetCatalog {
        &self.widgets
    }

    pub fn set_widget_catalog(&mut self, catalog: WidgetCatalog) {
        tracing::debug!(
            widgets = catalog.widgets.len(),
            templates = catalog.templates.len(),
            "Widget catalog updated"
        );
        self.widgets = catalog;
    }
}
