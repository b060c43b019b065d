// SPDX-License-Identifier: MPL-2.0
//! Double-click detection for mode toggling.

use std::time::{Duration, Instant};

/// Time threshold for double-click detection.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Tracks click timing; a second click within the threshold fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detector {
    last_click: Option<Instant>,
}

impl Detector {
    /// Registers a click at `now` and returns whether it completed a
    /// double-click. The detector resets after firing so a third click
    /// within the threshold does not fire again.
    pub fn register(&mut self, now: Instant) -> bool {
        let is_double_click = self
            .last_click
            .is_some_and(|t| now.duration_since(t) < DOUBLE_CLICK_THRESHOLD);

        if is_double_click {
            self.last_click = None; // Reset to avoid triple-click
            true
        } else {
            self.last_click = Some(now);
            false
        }
    }
}
