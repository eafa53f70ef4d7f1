//! Active tab indicator
//!
//! One indicator per tab set slides between tab buttons. Its horizontal
//! position and width each follow a damped spring towards the active
//! button's span.

use serde::{Deserialize, Serialize};

/// Spring parameters handed to the renderer for the indicator animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorTransition {
    pub stiffness: f64,
    pub damping: f64,
}

/// Horizontal extent of a tab button inside its strip
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Span {
    pub x: f64,
    pub width: f64,
}

impl Span {
    pub fn new(x: f64, width: f64) -> Self {
        Self { x, width }
    }

    pub fn center(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Longest step integrated at once, so a stalled frame can't blow up the spring
const MAX_STEP: f64 = 0.05;
/// Distance and speed under which the spring snaps to rest
const REST_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Spring1D {
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring1D {
    fn new(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    fn step(&mut self, dt: f64, transition: IndicatorTransition) {
        let dt = dt.clamp(0.0, MAX_STEP);
        if transition.stiffness <= 0.0 {
            self.snap_to(self.target);
            return;
        }

        let displacement = self.value - self.target;
        let acceleration =
            -transition.stiffness * displacement - transition.damping.max(0.0) * self.velocity;

        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        if !self.is_animating() {
            self.snap_to(self.target);
        }
    }

    fn is_animating(&self) -> bool {
        (self.value - self.target).abs() >= REST_THRESHOLD || self.velocity.abs() >= REST_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    x: Spring1D,
    width: Spring1D,
    transition: IndicatorTransition,
    initialized: bool,
}

impl Indicator {
    pub fn new(transition: IndicatorTransition) -> Self {
        Self {
            x: Spring1D::new(0.0),
            width: Spring1D::new(0.0),
            transition,
            initialized: false,
        }
    }

    /// Aim at a new button. The first target is taken immediately.
    pub fn set_target(&mut self, span: Span) {
        if self.initialized {
            self.x.target = span.x;
            self.width.target = span.width;
        } else {
            self.snap_to(span);
        }
    }

    pub fn snap_to(&mut self, span: Span) {
        self.x.snap_to(span.x);
        self.width.snap_to(span.width);
        self.initialized = true;
    }

    /// Advance the animation by `dt` seconds
    pub fn step(&mut self, dt: f64) {
        self.x.step(dt, self.transition);
        self.width.step(dt, self.transition);
    }

    pub fn position(&self) -> Span {
        Span::new(self.x.value, self.width.value)
    }

    pub fn target(&self) -> Span {
        Span::new(self.x.target, self.width.target)
    }

    pub fn transition(&self) -> IndicatorTransition {
        self.transition
    }

    pub fn is_animating(&self) -> bool {
        self.x.is_animating() || self.width.is_animating()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
