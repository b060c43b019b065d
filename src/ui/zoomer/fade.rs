// SPDX-License-Identifier: MPL-2.0
//! Opacity animation for showing and hiding widget regions.
//!
//! Plays the role of the host library's `fadeIn`/`fadeOut`/`show`/
//! `hide`: a `Fade` holds a current alpha and a target, and `tick`
//! advances the alpha toward the target at the rate set by the last
//! transition. Re-targeting mid-animation continues from the current
//! alpha, so overlapping transitions blend instead of jumping.

use std::time::Duration;

/// Standard fade duration for fade-in and fade-out transitions.
pub const FADE_DURATION: Duration = Duration::from_millis(400);

/// Fast fade-out used when the lens leaves the tracking zone.
pub const FADE_OUT_FAST: Duration = Duration::from_millis(50);

/// Animated visibility of a single region.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    alpha: f32,
    target: f32,
    /// Alpha change per second; sized so a full 0→1 sweep takes the
    /// requested duration.
    rate: f32,
}

impl Fade {
    /// A region that starts fully hidden.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            alpha: 0.0,
            target: 0.0,
            rate: 0.0,
        }
    }

    /// A region that starts fully visible.
    #[must_use]
    pub fn visible() -> Self {
        Self {
            alpha: 1.0,
            target: 1.0,
            rate: 0.0,
        }
    }

    /// Starts fading toward fully visible over `duration`.
    pub fn fade_in(&mut self, duration: Duration) {
        self.target = 1.0;
        self.rate = full_sweep_rate(duration);
    }

    /// Starts fading toward fully hidden over `duration`.
    pub fn fade_out(&mut self, duration: Duration) {
        self.target = 0.0;
        self.rate = full_sweep_rate(duration);
    }

    /// Shows the region immediately, skipping the animation.
    pub fn show(&mut self) {
        self.alpha = 1.0;
        self.target = 1.0;
    }

    /// Hides the region immediately, skipping the animation.
    pub fn hide(&mut self) {
        self.alpha = 0.0;
        self.target = 0.0;
    }

    /// Advances the animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if !self.is_animating() {
            return;
        }
        let step = self.rate * dt.as_secs_f32();
        if self.alpha < self.target {
            self.alpha = (self.alpha + step).min(self.target);
        } else {
            self.alpha = (self.alpha - step).max(self.target);
        }
    }

    /// Current opacity in `[0, 1]`.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Target visibility: true from the moment a fade-in is requested,
    /// false from the moment a fade-out is requested.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.target > 0.5
    }

    /// Whether the alpha is still moving toward the target.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        (self.alpha - self.target).abs() > f32::EPSILON
    }
}

fn full_sweep_rate(duration: Duration) -> f32 {
    let secs = duration.as_secs_f32();
    if secs <= 0.0 {
        f32::INFINITY
    } else {
        1.0 / secs
    }
}
