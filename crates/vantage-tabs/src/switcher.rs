//! Tab Switcher
//!
//! Owns the active tab of one tab set. Activation is the only external
//! input; panel styles, crossfade, indicator and scroll directive all
//! follow from it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use vantage_overlay::AnimationGroups;

use crate::config::TabsConfig;
use crate::crossfade::Crossfade;
use crate::indicator::{Indicator, IndicatorTransition, Span};
use crate::scroll::ScrollRequest;
use crate::state::{PanelState, PanelStyle};
use crate::tab::{validate_tab_set, TabDescriptor};
use crate::Result;

pub struct TabSwitcher {
    /// Instance id, used as the owner of the indicator group
    id: String,
    /// Tabs in display order
    tabs: Vec<TabDescriptor>,
    /// Always a member of `tabs`
    active_id: String,
    /// Group id of the single indicator of this tab set
    indicator_group: String,
    indicator: Indicator,
    groups: AnimationGroups,
    crossfade_duration: chrono::Duration,
    /// Last switch, kept until replaced
    crossfade: Option<Crossfade>,
    /// Scroll directive waiting for the next committed render
    pending_scroll: Option<ScrollRequest>,
}

impl TabSwitcher {
    /// Build a switcher over `tabs`, starting on `default_id` or the first tab.
    ///
    /// `tab_set` names the tab set; only one live switcher per tab set may
    /// hold its indicator group, a second one gets `GroupOccupied`.
    pub fn new(
        tab_set: &str,
        tabs: Vec<TabDescriptor>,
        default_id: Option<&str>,
        config: &TabsConfig,
        groups: &AnimationGroups,
    ) -> Result<Self> {
        validate_tab_set(&tabs)?;

        let active_id = match default_id {
            Some(id) if tabs.iter().any(|t| t.id == id) => id.to_string(),
            Some(id) => {
                tracing::warn!(tab_id = %id, "Default tab not in tab set, using first tab");
                tabs[0].id.clone()
            }
            None => tabs[0].id.clone(),
        };

        let id = Uuid::new_v4().to_string();
        let indicator_group = format!("{}:{}", config.indicator_group_prefix, tab_set);
        groups.claim(&indicator_group, &id)?;

        tracing::debug!(
            switcher = %id,
            tab_set = %tab_set,
            active = %active_id,
            tab_count = tabs.len(),
            "Created tab switcher"
        );

        Ok(Self {
            id,
            tabs,
            active_id,
            indicator_group,
            indicator: Indicator::new(config.indicator_transition()),
            groups: groups.clone(),
            crossfade_duration: config.crossfade_duration(),
            crossfade: None,
            pending_scroll: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn active_tab(&self) -> &TabDescriptor {
        // active_id is kept in the set by every mutation
        &self.tabs[self.active_index()]
    }

    pub fn active_index(&self) -> usize {
        self.tabs
            .iter()
            .position(|t| t.id == self.active_id)
            .unwrap_or(0)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tabs.iter().any(|t| t.id == id)
    }

    /// Activate a tab. Unknown ids are ignored.
    ///
    /// Returns whether the active tab changed. Re-selecting the active tab
    /// changes nothing but still asks for its button to be scrolled into view.
    pub fn set_active(&mut self, id: &str) -> bool {
        self.set_active_at(id, Utc::now())
    }

    pub fn set_active_at(&mut self, id: &str, now: DateTime<Utc>) -> bool {
        if !self.contains(id) {
            tracing::debug!(switcher = %self.id, tab_id = %id, "Ignoring unknown tab");
            return false;
        }

        self.pending_scroll = Some(ScrollRequest::for_tab(id));

        if id == self.active_id {
            return false;
        }

        tracing::debug!(
            switcher = %self.id,
            from = %self.active_id,
            to = %id,
            "Tab switch"
        );

        let current = self.current_opacities(now);
        self.active_id = id.to_string();
        self.crossfade = Some(Crossfade::from_opacities(
            current,
            self.active_id.clone(),
            now,
            self.crossfade_duration,
        ));

        true
    }

    /// Swap in a new tab set (for example when capabilities change).
    ///
    /// If the active tab is gone, the first tab of the new set becomes
    /// active and `true` is returned.
    pub fn replace_tabs(&mut self, tabs: Vec<TabDescriptor>) -> Result<bool> {
        self.replace_tabs_at(tabs, Utc::now())
    }

    pub fn replace_tabs_at(&mut self, tabs: Vec<TabDescriptor>, now: DateTime<Utc>) -> Result<bool> {
        validate_tab_set(&tabs)?;
        let current = self.current_opacities(now);
        self.tabs = tabs;

        if self.contains(&self.active_id) {
            return Ok(false);
        }

        let fallback = self.tabs[0].id.clone();
        tracing::warn!(
            switcher = %self.id,
            removed = %self.active_id,
            fallback = %fallback,
            "Active tab left the tab set, falling back to first tab"
        );

        // Panels that left the set are unmounted, they don't fade
        let current = current.into_iter().filter(|(id, _)| self.contains(id));
        let crossfade = Crossfade::from_opacities(current, fallback.clone(), now, self.crossfade_duration);

        self.active_id = fallback.clone();
        self.crossfade = Some(crossfade);
        self.pending_scroll = Some(ScrollRequest::for_tab(fallback));

        Ok(true)
    }

    pub fn panel_state(&self, id: &str) -> Option<PanelState> {
        self.contains(id)
            .then(|| PanelState::for_tab(id, &self.active_id))
    }

    /// Discrete style of a panel; `None` for ids outside the set
    pub fn panel_style(&self, id: &str) -> Option<PanelStyle> {
        self.panel_state(id).map(|state| state.style())
    }

    /// Styles of every panel, in tab order
    pub fn style_map(&self) -> Vec<(String, PanelStyle)> {
        self.tabs
            .iter()
            .map(|t| (t.id.clone(), PanelState::for_tab(&t.id, &self.active_id).style()))
            .collect()
    }

    /// Animated opacity of a panel at `now`
    pub fn panel_opacity(&self, id: &str, now: DateTime<Utc>) -> Option<f32> {
        let style = self.panel_style(id)?;
        Some(match &self.crossfade {
            Some(fade) => fade.opacity(id, now),
            None => style.opacity,
        })
    }

    /// Opacity every panel shows at `now`, in tab order
    fn current_opacities(&self, now: DateTime<Utc>) -> Vec<(String, f32)> {
        self.tabs
            .iter()
            .map(|t| {
                let opacity = match &self.crossfade {
                    Some(fade) => fade.opacity(&t.id, now),
                    None => PanelState::for_tab(&t.id, &self.active_id).style().opacity,
                };
                (t.id.clone(), opacity)
            })
            .collect()
    }

    pub fn crossfade(&self) -> Option<&Crossfade> {
        self.crossfade.as_ref()
    }

    pub fn is_transitioning(&self, now: DateTime<Utc>) -> bool {
        self.crossfade.as_ref().is_some_and(|f| f.is_running(now))
    }

    /// Scroll directive for the host to run once the new active tab is rendered
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }

    pub fn indicator_group(&self) -> &str {
        &self.indicator_group
    }

    pub fn indicator_transition(&self) -> IndicatorTransition {
        self.indicator.transition()
    }

    /// Feed the measured button spans (tab order) and retarget the indicator.
    ///
    /// Returns false if the spans don't line up with the tab set.
    pub fn layout_indicator(&mut self, spans: &[Span]) -> bool {
        if spans.len() != self.tabs.len() {
            tracing::debug!(
                switcher = %self.id,
                expected = self.tabs.len(),
                got = spans.len(),
                "Ignoring indicator layout"
            );
            return false;
        }

        self.indicator.set_target(spans[self.active_index()]);
        true
    }

    pub fn step_indicator(&mut self, dt: f64) {
        self.indicator.step(dt);
    }

    pub fn indicator_position(&self) -> Span {
        self.indicator.position()
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }
}

impl Drop for TabSwitcher {
    fn drop(&mut self) {
        self.groups.release(&self.indicator_group, &self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PanelPosition;
    use crate::TabError;
    use vantage_overlay::OverlayError;

    fn tabs(ids: &[&str]) -> Vec<TabDescriptor> {
        ids.iter()
            .map(|id| TabDescriptor::new(*id, id.to_uppercase()).unwrap())
            .collect()
    }

    fn switcher(ids: &[&str]) -> (TabSwitcher, AnimationGroups) {
        let groups = AnimationGroups::new();
        let switcher = TabSwitcher::new("test", tabs(ids), None, &TabsConfig::default(), &groups).unwrap();
        (switcher, groups)
    }

    fn active_count(switcher: &TabSwitcher) -> usize {
        switcher
            .style_map()
            .iter()
            .filter(|(_, style)| style.is_active())
            .count()
    }

    #[test]
    fn test_defaults_to_first_tab() {
        let (s, _) = switcher(&["profile", "notifications", "security"]);
        assert_eq!(s.active_id(), "profile");
        assert_eq!(s.active_index(), 0);
    }

    #[test]
    fn test_declared_default() {
        let groups = AnimationGroups::new();
        let s = TabSwitcher::new(
            "declared",
            tabs(&["profile", "security"]),
            Some("security"),
            &TabsConfig::default(),
            &groups,
        )
        .unwrap();
        assert_eq!(s.active_id(), "security");

        let s = TabSwitcher::new(
            "fallback",
            tabs(&["profile", "security"]),
            Some("billing"),
            &TabsConfig::default(),
            &groups,
        )
        .unwrap();
        assert_eq!(s.active_id(), "profile");
    }

    #[test]
    fn test_invalid_tab_sets_rejected() {
        let groups = AnimationGroups::new();
        let config = TabsConfig::default();
        assert!(matches!(
            TabSwitcher::new("empty", Vec::new(), None, &config, &groups),
            Err(TabError::EmptyTabSet)
        ));
        assert!(matches!(
            TabSwitcher::new("dup", tabs(&["a", "a"]), None, &config, &groups),
            Err(TabError::DuplicateId(_))
        ));
        assert!(groups.is_empty());
    }

    #[test]
    fn test_exactly_one_active_panel() {
        let ids = ["profile", "notifications", "security", "admin"];
        let (mut s, _) = switcher(&ids);

        for id in ids {
            s.set_active(id);
            assert_eq!(active_count(&s), 1);
            assert_eq!(s.style_map().len() - 1, 3);

            let style = s.panel_style(id).unwrap();
            assert_eq!(style.opacity, 1.0);
            assert!(style.visible);
            assert_eq!(style.position, PanelPosition::Relative);

            for other in ids.iter().filter(|o| **o != id) {
                let hidden = s.panel_style(other).unwrap();
                assert_eq!(hidden.opacity, 0.0);
                assert!(!hidden.visible);
                assert_eq!(hidden.position, PanelPosition::Absolute);
            }
        }
    }

    #[test]
    fn test_set_active_is_idempotent() {
        let (mut s, _) = switcher(&["profile", "security"]);

        assert!(s.set_active("security"));
        let first = s.style_map();
        assert!(!s.set_active("security"));
        assert_eq!(s.style_map(), first);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let (mut s, _) = switcher(&["profile", "security"]);
        let before = s.style_map();

        assert!(!s.set_active("billing"));
        assert_eq!(s.active_id(), "profile");
        assert_eq!(s.style_map(), before);
        assert!(s.take_scroll_request().is_none());
        assert!(s.panel_style("billing").is_none());
    }

    #[test]
    fn test_scroll_request_follows_activation() {
        let (mut s, _) = switcher(&["profile", "security"]);
        assert!(s.take_scroll_request().is_none());

        s.set_active("security");
        let req = s.take_scroll_request().unwrap();
        assert_eq!(req.tab_id, "security");
        assert!(s.take_scroll_request().is_none());

        // Re-selecting still scrolls
        s.set_active("security");
        assert_eq!(s.take_scroll_request().unwrap().tab_id, "security");
    }

    #[test]
    fn test_crossfade_keeps_classification() {
        let (mut s, _) = switcher(&["profile", "security", "admin"]);
        let start = Utc::now();
        s.set_active_at("security", start);

        let mid = start + chrono::Duration::milliseconds(150);
        assert!(s.is_transitioning(mid));

        // Discrete styles switch immediately
        assert!(s.panel_style("security").unwrap().is_active());
        assert!(!s.panel_style("profile").unwrap().visible);

        // Opacity overlaps
        let incoming = s.panel_opacity("security", mid).unwrap();
        let outgoing = s.panel_opacity("profile", mid).unwrap();
        assert!((incoming - 0.5).abs() < 1e-6);
        assert!((outgoing - 0.5).abs() < 1e-6);
        assert_eq!(s.panel_opacity("admin", mid), Some(0.0));

        let done = start + chrono::Duration::milliseconds(300);
        assert!(!s.is_transitioning(done));
        assert_eq!(s.panel_opacity("security", done), Some(1.0));
        assert_eq!(s.panel_opacity("profile", done), Some(0.0));
    }

    #[test]
    fn test_reswitch_mid_fade() {
        let (mut s, _) = switcher(&["a", "b", "c"]);
        let start = Utc::now();
        s.set_active_at("b", start);

        let reswitch = start + chrono::Duration::milliseconds(60);
        assert!((s.panel_opacity("a", reswitch).unwrap() - 0.8).abs() < 1e-6);
        assert!((s.panel_opacity("b", reswitch).unwrap() - 0.2).abs() < 1e-6);

        s.set_active_at("c", reswitch);

        // Nothing jumps at the moment of the second switch
        assert!((s.panel_opacity("a", reswitch).unwrap() - 0.8).abs() < 1e-6);
        assert!((s.panel_opacity("b", reswitch).unwrap() - 0.2).abs() < 1e-6);
        assert_eq!(s.panel_opacity("c", reswitch), Some(0.0));

        // Both outgoing panels keep decaying from where they were
        let mid = reswitch + chrono::Duration::milliseconds(150);
        assert!((s.panel_opacity("a", mid).unwrap() - 0.4).abs() < 1e-6);
        assert!((s.panel_opacity("b", mid).unwrap() - 0.1).abs() < 1e-6);
        assert!((s.panel_opacity("c", mid).unwrap() - 0.5).abs() < 1e-6);

        let done = reswitch + chrono::Duration::milliseconds(300);
        assert_eq!(s.panel_opacity("a", done), Some(0.0));
        assert_eq!(s.panel_opacity("b", done), Some(0.0));
        assert_eq!(s.panel_opacity("c", done), Some(1.0));
    }

    #[test]
    fn test_switch_back_mid_fade() {
        let (mut s, _) = switcher(&["a", "b"]);
        let start = Utc::now();
        s.set_active_at("b", start);

        let back = start + chrono::Duration::milliseconds(90);
        s.set_active_at("a", back);

        assert!((s.panel_opacity("a", back).unwrap() - 0.7).abs() < 1e-6);
        assert!((s.panel_opacity("b", back).unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_opacity_before_any_switch() {
        let (s, _) = switcher(&["profile", "security"]);
        let now = Utc::now();
        assert_eq!(s.panel_opacity("profile", now), Some(1.0));
        assert_eq!(s.panel_opacity("security", now), Some(0.0));
        assert_eq!(s.panel_opacity("billing", now), None);
    }

    #[test]
    fn test_replace_tabs_keeps_active() {
        let (mut s, _) = switcher(&["profile", "security", "admin"]);
        s.set_active("security");
        s.take_scroll_request();

        assert!(!s.replace_tabs(tabs(&["profile", "security"])).unwrap());
        assert_eq!(s.active_id(), "security");
        assert!(s.take_scroll_request().is_none());
    }

    #[test]
    fn test_replace_tabs_falls_back_to_first() {
        let (mut s, _) = switcher(&["profile", "security", "admin"]);
        s.set_active("admin");

        assert!(s.replace_tabs(tabs(&["profile", "security"])).unwrap());
        assert_eq!(s.active_id(), "profile");
        assert_eq!(active_count(&s), 1);
        assert_eq!(s.take_scroll_request().unwrap().tab_id, "profile");
    }

    #[test]
    fn test_replace_tabs_validates() {
        let (mut s, _) = switcher(&["profile", "security"]);
        assert!(s.replace_tabs(Vec::new()).is_err());
        assert_eq!(s.tabs().len(), 2);
    }

    #[test]
    fn test_single_indicator_per_tab_set() {
        let groups = AnimationGroups::new();
        let config = TabsConfig::default();

        let a = TabSwitcher::new("general", tabs(&["x", "y"]), None, &config, &groups).unwrap();
        assert_eq!(a.indicator_group(), "tab-indicator:general");
        assert_eq!(groups.holder("tab-indicator:general").as_deref(), Some(a.id()));

        // Same tab set while the first indicator is mounted
        let second = TabSwitcher::new("general", tabs(&["x", "y"]), None, &config, &groups);
        assert!(matches!(
            second,
            Err(TabError::Overlay(OverlayError::GroupOccupied { .. }))
        ));
        assert_eq!(groups.holder("tab-indicator:general").as_deref(), Some(a.id()));

        // Other tab sets are independent
        let other = TabSwitcher::new("widgets", tabs(&["x", "y"]), None, &config, &groups).unwrap();
        assert_eq!(groups.len(), 2);

        drop(a);
        assert!(!groups.is_mounted("tab-indicator:general"));

        let b = TabSwitcher::new("general", tabs(&["x", "y"]), None, &config, &groups).unwrap();
        assert_eq!(groups.holder("tab-indicator:general").as_deref(), Some(b.id()));

        drop(b);
        drop(other);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_indicator_follows_active_tab() {
        let (mut s, _) = switcher(&["profile", "security", "admin"]);
        let spans = [
            Span::new(0.0, 80.0),
            Span::new(80.0, 90.0),
            Span::new(170.0, 70.0),
        ];

        assert!(s.layout_indicator(&spans));
        assert_eq!(s.indicator_position(), spans[0]);

        s.set_active("admin");
        assert!(s.layout_indicator(&spans));
        assert_eq!(s.indicator().target(), spans[2]);

        for _ in 0..600 {
            s.step_indicator(1.0 / 60.0);
        }
        assert_eq!(s.indicator_position(), spans[2]);

        assert!(!s.layout_indicator(&spans[..2]));
    }

    #[test]
    fn test_indicator_transition_from_config() {
        let (s, _) = switcher(&["profile"]);
        let transition = s.indicator_transition();
        assert_eq!(transition.stiffness, 500.0);
        assert_eq!(transition.damping, 30.0);
    }
}
