//! Horizontal swipe tracking.
//!
//! The committed outcome of a gesture is decided once, at touch end. While
//! the finger is down the tracker only exposes a transient drag offset for
//! visual feedback.

/// Which way the finger travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved toward smaller x. Shows the next entry.
    Left,
    /// Finger moved toward larger x. Shows the previous entry.
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start: Option<f64>,
    current: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start: None,
            current: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Record the start of a gesture. A second start replaces the first.
    pub fn begin(&mut self, x: f64) {
        self.start = Some(x);
        self.current = Some(x);
    }

    /// Update the drag position. Ignored when no gesture is in progress.
    pub fn track(&mut self, x: f64) {
        if self.start.is_some() {
            self.current = Some(x);
        }
    }

    /// Finish the gesture at `x`.
    ///
    /// Returns a direction only when the travel exceeds the threshold. The
    /// gesture is cleared either way; finishing with no recorded start is a
    /// no-op.
    pub fn finish(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        self.current = None;

        let delta = x - start;
        if delta.abs() > self.threshold {
            Some(if delta > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            })
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.current = None;
    }

    /// Distance dragged so far, or `0.0` with no gesture in progress.
    pub fn offset(&self) -> f64 {
        match (self.start, self.current) {
            (Some(start), Some(current)) => current - start,
            _ => 0.0,
        }
    }
}
