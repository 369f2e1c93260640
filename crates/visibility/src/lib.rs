//! Foreground/background visibility tracking for a host application.
//!
//! The platform offers no single authoritative visibility callback, so
//! [`VisibilityTracker`] derives one: it aggregates three independent raw
//! signal sources (unit starts, memory-pressure tiers, screen power) into a
//! binary [`VisibilityState`] and notifies registered listeners exactly on
//! transitions, never on every raw signal. Racing signals are arbitrated
//! internally, including the first-launch case where the very first unit
//! start must emit a foreground notification even though the tracker is
//! already in its default background state.
//!
//! Sources are capability traits injected at construction, so hosts wire
//! real platform adapters while tests drive the `Manual*` implementations.

mod error;
mod listener;
mod sources;
mod state;
mod tracker;

pub use error::TrackerError;
pub use listener::{ListenerRef, VisibilityListener};
pub use sources::{
    signal_callback, ActivitySource, ManualActivitySource, ManualMemoryPressureSource,
    ManualScreenPowerSource, MemoryPressureSource, PressureCallback, ScreenPowerSource,
    SignalCallback, SignalSources,
};
pub use state::{PressureLevel, VisibilityState};
pub use tracker::VisibilityTracker;
