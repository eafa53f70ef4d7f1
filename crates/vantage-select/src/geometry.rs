//! Panel placement
//!
//! Single-shot, greedy: the panel goes below the trigger unless it doesn't
//! fit there and there is more room above. Coordinates are document
//! coordinates (viewport position plus scroll offset), ready for an
//! absolutely positioned panel in the overlay layer.

use serde::{Deserialize, Serialize};

use crate::config::PlacementConfig;

/// Trigger rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
}

impl AnchorRect {
    pub fn new(top: f64, left: f64, bottom: f64, width: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn scrolled(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    /// Height the panel was budgeted
    pub height: f64,
    pub direction: Direction,
}

/// Row heuristic plus chrome, capped
pub fn desired_height(item_count: usize, config: &PlacementConfig) -> f64 {
    (item_count as f64 * config.row_height + config.chrome_height).min(config.max_height)
}

pub fn compute_placement(
    anchor: AnchorRect,
    viewport: Viewport,
    item_count: usize,
    config: &PlacementConfig,
) -> Placement {
    let space_below = viewport.height - anchor.bottom;
    let space_above = anchor.top;
    let height = desired_height(item_count, config);

    let (top, direction) = if space_below < height && space_above > space_below {
        (
            anchor.top + viewport.scroll_y - height - config.gap,
            Direction::Above,
        )
    } else {
        (anchor.bottom + viewport.scroll_y + config.gap, Direction::Below)
    };

    Placement {
        top,
        left: anchor.left + viewport.scroll_x,
        width: anchor.width.max(config.min_width),
        height,
        direction,
    }
}
