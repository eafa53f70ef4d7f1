//! Vantage Multi-Select
//!
//! A dropdown whose panel floats in the shared overlay layer. Placement is
//! computed from the trigger's rectangle when the panel opens; selection
//! changes are pushed to the owner through a change callback.

mod config;
mod error;
mod geometry;
mod item;
mod multi_select;
mod summary;

pub use config::{PlacementConfig, SelectBehavior};
pub use error::SelectError;
pub use geometry::{compute_placement, desired_height, AnchorRect, Direction, Placement, Viewport};
pub use item::SelectableItem;
pub use multi_select::{DismissReason, FloatingMultiSelect, Key};
pub use summary::display_text;

pub type Result<T> = std::result::Result<T, SelectError>;
