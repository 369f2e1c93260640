//! Listener contract for visibility transitions.

use std::sync::Arc;

/// Observer of visibility transitions.
///
/// Both callbacks run synchronously on whichever thread delivered the raw
/// signal, while further transitions are blocked. Listeners are expected to
/// be fast, non-blocking observers (logging, flag setting); doing
/// long-running work inside a callback stalls signal delivery for the whole
/// process and is an anti-pattern.
///
/// A panic inside a callback is caught and logged; it never reaches other
/// listeners or the tracker's state.
pub trait VisibilityListener: Send + Sync {
    /// The application became visible.
    fn on_foreground(&self);

    /// The application stopped being visible.
    fn on_background(&self);
}

/// Type alias for a shared listener reference.
///
/// Listener identity is the `Arc` allocation (`Arc::ptr_eq`): registering
/// one `ListenerRef` twice produces duplicate notifications, and
/// unregistering removes the first matching entry only.
pub type ListenerRef = Arc<dyn VisibilityListener>;
