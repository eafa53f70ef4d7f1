//! Vantage Overlay
//!
//! Render targets that live outside the normal component tree:
//! the overlay layer floating panels are mounted into, and the
//! animation group registry that keeps shared indicators singular.

mod error;
mod group;
mod layer;

pub use error::OverlayError;
pub use group::AnimationGroups;
pub use layer::{MountId, OverlayEntry, OverlayLayer};

pub type Result<T> = std::result::Result<T, OverlayError>;
