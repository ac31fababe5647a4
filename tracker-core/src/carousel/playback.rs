//! Two-state autoplay machine driven by hover events.

/// Whether autoplay ticks advance the carousel.
///
/// The timer itself keeps running in both states; a tick evaluated while
/// `Paused` is skipped, so resuming keeps the original cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Playing,
    Paused,
}

impl Playback {
    pub fn from_paused(paused: bool) -> Self {
        if paused { Self::Paused } else { Self::Playing }
    }

    pub fn is_paused(self) -> bool {
        self == Self::Paused
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }
}
