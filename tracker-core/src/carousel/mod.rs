//! Carousel controller.
//!
//! [`Carousel`] owns the committed state of the hero carousel: which entry
//! is shown, whether autoplay is paused, and any swipe in progress. Every
//! input the page receives (clicks, arrow keys, touches, hover, timer ticks)
//! is turned into one synchronous method call here, so the whole behavior
//! can be tested without a browser.
//!
//! ```rust
//! use tracker_core::Carousel;
//!
//! let mut carousel = Carousel::new(3).unwrap();
//! carousel.handle_key("ArrowRight");
//! assert_eq!(carousel.index(), 1);
//!
//! carousel.hover_enter();
//! assert!(carousel.tick().is_none());
//! assert_eq!(carousel.index(), 1);
//! ```

mod config;
mod gesture;
mod key;
mod playback;

pub use config::{
    CarouselConfig, DEFAULT_INTERVAL_MS, DEFAULT_SWIPE_THRESHOLD, MAX_INTERVAL_MS,
};
pub use gesture::{SwipeDirection, SwipeTracker};
pub use key::NavKey;
pub use playback::Playback;

use std::num::NonZeroUsize;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::CarouselError;

/// What triggered a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// Prev/next buttons or a direct API call.
    Control,
    /// Indicator dot.
    Dot,
    Key,
    Swipe,
    Autoplay,
}

/// A committed index change.
///
/// `from == to` is possible (a one-entry carousel wraps onto itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub from: usize,
    pub to: usize,
    pub cause: Cause,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: NonZeroUsize,
    index: usize,
    playback: Playback,
    swipe: SwipeTracker,
    interval: Duration,
    pause_on_hover: bool,
}

impl Carousel {
    /// Build a controller over `len` entries with default settings.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        Self::with_config(len, &CarouselConfig::default())
    }

    pub fn with_config(len: usize, config: &CarouselConfig) -> Result<Self, CarouselError> {
        let len = NonZeroUsize::new(len).ok_or(CarouselError::NoItems)?;
        Ok(Self {
            len,
            index: 0,
            playback: Playback::Playing,
            swipe: SwipeTracker::new(config.swipe_threshold),
            interval: config.interval(),
            pause_on_hover: config.pause_on_hover,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_paused(&self) -> bool {
        self.playback.is_paused()
    }

    /// Autoplay period this controller was configured with.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Transient drag distance for rendering a preview. Never committed.
    pub fn drag_offset(&self) -> f64 {
        self.swipe.offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.swipe.is_active()
    }

    pub fn next(&mut self) -> Navigation {
        self.step_forward(Cause::Control)
    }

    pub fn previous(&mut self) -> Navigation {
        self.step_back(Cause::Control)
    }

    /// Jump to `index`.
    ///
    /// Out-of-range indices are rejected: the current index is kept and
    /// `None` is returned.
    pub fn go_to(&mut self, index: usize) -> Option<Navigation> {
        if index >= self.len() {
            warn!(index, len = self.len(), "ignoring jump to out-of-range slide");
            return None;
        }
        Some(self.commit(index, Cause::Dot))
    }

    /// Takes effect on the next [`tick`](Self::tick).
    pub fn set_paused(&mut self, paused: bool) {
        let playback = Playback::from_paused(paused);
        if playback != self.playback {
            debug!(state = playback.as_label(), "carousel playback changed");
            self.playback = playback;
        }
    }

    pub fn hover_enter(&mut self) {
        if self.pause_on_hover {
            self.set_paused(true);
        }
    }

    pub fn hover_leave(&mut self) {
        if self.pause_on_hover {
            self.set_paused(false);
        }
    }

    /// Autoplay timer fired. Advances by one unless paused.
    pub fn tick(&mut self) -> Option<Navigation> {
        if self.playback.is_paused() {
            debug!(index = self.index, "autoplay tick skipped while paused");
            return None;
        }
        Some(self.step_forward(Cause::Autoplay))
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.begin(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        self.swipe.track(x);
    }

    /// Commit a swipe: travel to the left shows the next entry, travel to
    /// the right the previous one.
    pub fn touch_end(&mut self, x: f64) -> Option<Navigation> {
        match self.swipe.finish(x)? {
            SwipeDirection::Left => Some(self.step_forward(Cause::Swipe)),
            SwipeDirection::Right => Some(self.step_back(Cause::Swipe)),
        }
    }

    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Handle a DOM `KeyboardEvent.key` value.
    pub fn handle_key(&mut self, key: &str) -> Option<Navigation> {
        match NavKey::from_key(key)? {
            NavKey::Left => Some(self.step_back(Cause::Key)),
            NavKey::Right => Some(self.step_forward(Cause::Key)),
        }
    }

    fn step_forward(&mut self, cause: Cause) -> Navigation {
        let to = (self.index + 1) % self.len();
        self.commit(to, cause)
    }

    fn step_back(&mut self, cause: Cause) -> Navigation {
        let len = self.len();
        let to = (self.index + len - 1) % len;
        self.commit(to, cause)
    }

    fn commit(&mut self, to: usize, cause: Cause) -> Navigation {
        let nav = Navigation {
            from: self.index,
            to,
            cause,
        };
        self.index = to;
        debug!(from = nav.from, to = nav.to, ?cause, "carousel moved");
        nav
    }
}
