//! Vantage Core
//!
//! Coordination layer for the settings dashboard: the four settings
//! screens, capability gating, theme picking and integration event
//! selection. Network calls belong to the host; everything here works on
//! data the host already fetched.

mod config;
mod dashboard;
mod error;
mod integrations;
mod screen;
mod theme;
mod widgets;

pub use config::Config;
pub use dashboard::{Dashboard, Viewer};
pub use error::CoreError;
pub use integrations::WebhookSettings;
pub use screen::Screen;
pub use theme::{Theme, ThemeCatalog, ThemePicker};
pub use widgets::{TemplateSummary, WidgetCatalog, WidgetSummary};

// Re-export the component crates
pub use vantage_overlay::{AnimationGroups, MountId, OverlayEntry, OverlayError, OverlayLayer};
pub use vantage_select::{
    compute_placement, AnchorRect, DismissReason, FloatingMultiSelect, Key, Placement,
    PlacementConfig, SelectBehavior, SelectError, SelectableItem, Viewport,
};
pub use vantage_tabs::{
    PanelPosition, PanelState, PanelStyle, ScrollRequest, Span, StripGeometry, TabDescriptor,
    TabError, TabSwitcher, TabsConfig,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
