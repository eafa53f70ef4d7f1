//! Vantage Tab Switching
//!
//! Owns the active tab of a settings screen and derives everything the
//! renderer needs from it: per-panel styles, crossfade opacity, the
//! sliding indicator and the scroll-into-view directive.
//! Panels are never unmounted; switching only changes their style.

mod config;
mod crossfade;
mod error;
mod indicator;
mod scroll;
mod state;
mod switcher;
mod tab;

pub use config::TabsConfig;
pub use crossfade::Crossfade;
pub use error::TabError;
pub use indicator::{Indicator, IndicatorTransition, Span};
pub use scroll::{ScrollAlign, ScrollBehavior, ScrollRequest, StripGeometry};
pub use state::{PanelPosition, PanelState, PanelStyle};
pub use switcher::TabSwitcher;
pub use tab::{validate_tab_set, visible_tabs, TabDescriptor};

pub type Result<T> = std::result::Result<T, TabError>;
