//! Error types for the carousel controller and the site content loader.

use thiserror::Error;

use crate::carousel::MAX_INTERVAL_MS;

/// Failure to build a [`Carousel`](crate::Carousel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A carousel always shows exactly one entry, so it cannot be empty.
    #[error("carousel needs at least one item")]
    NoItems,
}

/// Failure to load `site.toml`.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("site content has no slides")]
    NoSlides,

    #[error("carousel interval must be greater than zero")]
    ZeroInterval,

    #[error("carousel interval of {0} ms exceeds the browser timer limit of {max} ms", max = MAX_INTERVAL_MS)]
    IntervalTooLong(u64),

    #[error("swipe threshold must be a positive finite number, got {0}")]
    InvalidSwipeThreshold(f64),
}
