//! Carousel behavior settings (the `[carousel]` table of `site.toml`).

use serde::Deserialize;
use std::time::Duration;

use crate::error::ContentError;

/// Autoplay cadence in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 4000;

/// Longest interval a browser timer accepts (delays are signed 32-bit ms).
pub const MAX_INTERVAL_MS: u64 = i32::MAX as u64;

/// Minimum horizontal travel, in input coordinate units, that counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Milliseconds between autoplay ticks.
    pub interval_ms: u64,
    /// A swipe navigates only when its travel is strictly greater than this.
    pub swipe_threshold: f64,
    /// Pause autoplay while the pointer hovers the carousel.
    pub pause_on_hover: bool,
    /// Bind `ArrowLeft` / `ArrowRight` while the carousel is mounted.
    pub keyboard: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            pause_on_hover: true,
            keyboard: true,
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.interval_ms == 0 {
            return Err(ContentError::ZeroInterval);
        }
        if self.interval_ms > MAX_INTERVAL_MS {
            return Err(ContentError::IntervalTooLong(self.interval_ms));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(ContentError::InvalidSwipeThreshold(self.swipe_threshold));
        }
        Ok(())
    }
}
