//! # tracker-core
//!
//! Target-independent logic behind the Tracker landing page.
//!
//! - [`carousel`] - the hero carousel controller: autoplay, hover pause,
//!   arrow keys, swipes, indicator dots
//! - [`scope`] - RAII guards for the timer and listener subscriptions the
//!   carousel holds while mounted
//! - [`content`] - `site.toml` model with defaults for every section
//! - [`error`] - error types
//!
//! Nothing here touches the DOM, so the whole state machine is tested
//! natively. The `tracker-landing` crate binds it to Leptos.

#![warn(missing_debug_implementations)]

pub mod carousel;
pub mod content;
pub mod error;
pub mod scope;

pub use carousel::{Carousel, CarouselConfig, Cause, Navigation, Playback};
pub use content::SiteContent;
pub use error::{CarouselError, ContentError};
pub use scope::{Release, Scoped};
