//! Panel crossfade
//!
//! Outgoing and incoming panels overlap in time: the incoming panel's
//! opacity runs up to 1 while every outgoing one runs down to 0. Both stay
//! mounted; only opacity changes over the window.
//!
//! A fade starts from whatever opacity each panel shows at the moment of
//! the switch, so switching again mid-fade never makes a panel jump.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Crossfade {
    /// Tab being faded in
    pub to: String,
    /// Opacity of `to` when the fade started
    pub to_start: f32,
    /// Panels fading out, each with its opacity when the fade started
    pub fading_out: Vec<(String, f32)>,
    /// When the switch happened
    pub started_at: DateTime<Utc>,
    /// Length of the fade
    pub duration: Duration,
}

impl Crossfade {
    /// Fade from a fully shown `from` panel to a hidden `to` panel
    pub fn new(from: Option<String>, to: String, started_at: DateTime<Utc>, duration: Duration) -> Self {
        Self::from_opacities(from.map(|id| (id, 1.0)), to, started_at, duration)
    }

    /// Fade towards `to`, starting from the opacities panels show right now.
    ///
    /// Panels missing from `current` start at 0.
    pub fn from_opacities<I>(current: I, to: String, started_at: DateTime<Utc>, duration: Duration) -> Self
    where
        I: IntoIterator<Item = (String, f32)>,
    {
        let mut to_start = 0.0;
        let mut fading_out = Vec::new();

        for (id, opacity) in current {
            let opacity = opacity.clamp(0.0, 1.0);
            if id == to {
                to_start = opacity;
            } else if opacity > 0.0 {
                fading_out.push((id, opacity));
            }
        }

        Self {
            to,
            to_start,
            fading_out,
            started_at,
            duration,
        }
    }

    /// Fade progress in `[0, 1]`
    pub fn progress(&self, now: DateTime<Utc>) -> f32 {
        let total = self.duration.num_milliseconds();
        if total <= 0 {
            return 1.0;
        }

        let elapsed = (now - self.started_at).num_milliseconds();
        (elapsed as f32 / total as f32).clamp(0.0, 1.0)
    }

    pub fn is_running(&self, now: DateTime<Utc>) -> bool {
        self.progress(now) < 1.0
    }

    /// Animated opacity of a panel at `now`
    pub fn opacity(&self, id: &str, now: DateTime<Utc>) -> f32 {
        let progress = self.progress(now);
        if id == self.to {
            return self.to_start + (1.0 - self.to_start) * progress;
        }

        self.fading_out
            .iter()
            .find(|(panel, _)| panel == id)
            .map_or(0.0, |(_, start)| start * (1.0 - progress))
    }
}
