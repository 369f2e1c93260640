//! Error types for tracker lifecycle misuse.

use thiserror::Error;

/// Errors from [`VisibilityTracker`](crate::VisibilityTracker) lifecycle calls.
///
/// Both variants are programmer errors: they indicate a leaked or duplicated
/// subscription, so callers should treat them as bugs rather than recover.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// `start()` was called again without an interleaved `stop()`.
    #[error("tracker already started - call stop() before starting again")]
    AlreadyStarted,

    /// `stop()` was called without a prior `start()`.
    #[error("tracker not started - nothing to stop")]
    NotStarted,
}
