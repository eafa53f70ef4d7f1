//! Scroll-into-view directive for the tab button strip
//!
//! The strip can overflow horizontally. After the render that applies a
//! new active tab, its button is brought into view: smooth scrolling,
//! nearest block alignment, centered inline.

use serde::{Deserialize, Serialize};

use crate::indicator::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlign {
    Start,
    Center,
    End,
    Nearest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    /// Tab whose button should be brought into view
    pub tab_id: String,
    pub behavior: ScrollBehavior,
    pub block: ScrollAlign,
    pub inline: ScrollAlign,
}

/// Horizontal scroll state of the strip, in strip content coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripGeometry {
    pub scroll_left: f64,
    pub viewport_width: f64,
    pub content_width: f64,
}

impl StripGeometry {
    pub fn max_scroll(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }
}

impl ScrollRequest {
    pub fn for_tab(tab_id: impl Into<String>) -> Self {
        Self {
            tab_id: tab_id.into(),
            behavior: ScrollBehavior::Smooth,
            block: ScrollAlign::Nearest,
            inline: ScrollAlign::Center,
        }
    }

    /// New `scroll_left` for the strip so the button lands per `inline`.
    ///
    /// The strip only scrolls horizontally, so `block` never moves it.
    pub fn resolve(&self, strip: StripGeometry, button: Span) -> f64 {
        let view_start = strip.scroll_left;
        let view_end = strip.scroll_left + strip.viewport_width;

        let target = match self.inline {
            ScrollAlign::Start => button.x,
            ScrollAlign::End => button.x + button.width - strip.viewport_width,
            ScrollAlign::Center => button.center() - strip.viewport_width / 2.0,
            ScrollAlign::Nearest => {
                if button.x >= view_start && button.x + button.width <= view_end {
                    view_start
                } else if button.x < view_start || button.width > strip.viewport_width {
                    button.x
                } else {
                    button.x + button.width - strip.viewport_width
                }
            }
        };

        target.clamp(0.0, strip.max_scroll())
    }
}
