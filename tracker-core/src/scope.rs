//! Lifetime-scoped subscriptions.
//!
//! The carousel holds two resources that outlive any single event: the
//! autoplay interval and the window `keydown` listener. Both must stop
//! touching controller state once the carousel is unmounted. [`Scoped`]
//! owns one such subscription and releases it exactly once, on whichever
//! comes first of an explicit [`Scoped::release`], a replacement, or drop.

use std::fmt;

/// A subscription that can be torn down.
///
/// Implemented for every `FnOnce()` so a teardown closure such as
/// `move || handle.clear()` can be scoped directly.
pub trait Release {
    fn release(self);
}

impl<F: FnOnce()> Release for F {
    fn release(self) {
        self()
    }
}

/// Owns at most one live subscription.
pub struct Scoped<R: Release> {
    inner: Option<R>,
}

impl<R: Release> Scoped<R> {
    pub fn new(resource: R) -> Self {
        Self {
            inner: Some(resource),
        }
    }

    pub fn empty() -> Self {
        Self { inner: None }
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Install `resource`, releasing the one held before it.
    pub fn replace(&mut self, resource: R) {
        self.release();
        self.inner = Some(resource);
    }

    /// Release the held subscription. Returns `false` if nothing was held.
    pub fn release(&mut self) -> bool {
        match self.inner.take() {
            Some(resource) => {
                resource.release();
                true
            }
            None => false,
        }
    }
}

impl<R: Release> Default for Scoped<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: Release> Drop for Scoped<R> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<R: Release> fmt::Debug for Scoped<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scoped")
            .field("active", &self.is_active())
            .finish()
    }
}
