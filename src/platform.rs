use crate::{state::Theme, view::VNode};

/// The narrow surface the core needs from whatever is hosting it. The web
/// implementation lives in [`crate::dom`]; tests substitute a recording stub.
pub trait Platform {
    /// Discard whatever subtree is currently mounted at the attachment point
    /// and mount `tree` in its place.
    fn mount(&self, tree: &VNode);

    /// Apply the theme to the platform-level theme attribute.
    fn set_theme(&self, theme: Theme);

    /// Scroll the viewport back to the origin.
    fn scroll_to_origin(&self);

    /// Run `callback` once after `delay_ms` milliseconds. The returned handle
    /// keeps the pending callback alive; cancelling it prevents the callback
    /// from running.
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Handle to a scheduled callback. Owning it keeps the platform-side timer
/// state alive; the store retains every handle it creates and never cancels
/// them, so navigating away mid-simulation leaves the timers pending.
pub struct TimerHandle {
    canceller: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    /// Create a handle from a platform-specific canceller.
    pub fn new<F>(canceller: F) -> Self
    where
        F: 'static + FnOnce(),
    {
        Self {
            canceller: Some(Box::new(canceller)),
        }
    }

    /// A handle for a callback that cannot be revoked.
    pub fn uncancellable() -> Self {
        Self { canceller: None }
    }

    /// Revoke the pending callback, if the platform supports it.
    pub fn cancel(mut self) {
        if let Some(canceller) = self.canceller.take() {
            canceller();
        }
    }
}
