//! Capability traits for the raw visibility signal sources.
//!
//! The tracker never talks to the platform directly. It depends on three
//! narrow capabilities ("something that can notify me of X"), injected at
//! construction, which keeps the core testable with the manual sources
//! defined below.

use std::sync::{Arc, Mutex};

use crate::state::PressureLevel;

/// Callback invoked for payload-free raw signals.
pub type SignalCallback = Arc<dyn Fn() + Send + Sync + 'static>;

/// Callback invoked with a memory-pressure severity tier.
pub type PressureCallback = Arc<dyn Fn(PressureLevel) + Send + Sync + 'static>;

/// Wrap a closure as a [`SignalCallback`].
pub fn signal_callback<F>(f: F) -> SignalCallback
where
    F: Fn() + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Source of "a UI-bearing unit started" signals.
///
/// This is the only reliable "becoming visible" signal the platform offers.
pub trait ActivitySource: Send + Sync {
    /// Register `callback` to run on every unit-started signal, replacing
    /// any previous registration.
    fn subscribe(&self, callback: SignalCallback);

    /// Drop the current registration, if any.
    fn unsubscribe(&self);
}

/// Source of memory-pressure signals, each carrying a severity tier.
pub trait MemoryPressureSource: Send + Sync {
    /// Register `callback` to run on every pressure signal, replacing any
    /// previous registration.
    fn subscribe(&self, callback: PressureCallback);

    /// Drop the current registration, if any.
    fn unsubscribe(&self);
}

/// Source of "the display turned off" signals.
pub trait ScreenPowerSource: Send + Sync {
    /// Register `callback` to run on every screen-off signal, replacing any
    /// previous registration.
    fn subscribe(&self, callback: SignalCallback);

    /// Drop the current registration, if any.
    fn unsubscribe(&self);
}

/// Manually driven [`ActivitySource`] for tests and headless wiring.
#[derive(Default)]
pub struct ManualActivitySource {
    callback: Mutex<Option<SignalCallback>>,
}

impl ManualActivitySource {
    /// Create an unsubscribed source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one unit-started signal to the subscriber, if any.
    pub fn fire(&self) {
        let callback = self.callback.lock().unwrap().clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Whether a subscriber is currently registered.
    pub fn is_subscribed(&self) -> bool {
        self.callback.lock().unwrap().is_some()
    }
}

impl ActivitySource for ManualActivitySource {
    fn subscribe(&self, callback: SignalCallback) {
        *self.callback.lock().unwrap() = Some(callback);
    }

    fn unsubscribe(&self) {
        *self.callback.lock().unwrap() = None;
    }
}

/// Manually driven [`MemoryPressureSource`].
#[derive(Default)]
pub struct ManualMemoryPressureSource {
    callback: Mutex<Option<PressureCallback>>,
}

impl ManualMemoryPressureSource {
    /// Create an unsubscribed source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one pressure signal with the given tier.
    pub fn fire(&self, level: PressureLevel) {
        let callback = self.callback.lock().unwrap().clone();
        if let Some(callback) = callback {
            callback(level);
        }
    }

    /// Whether a subscriber is currently registered.
    pub fn is_subscribed(&self) -> bool {
        self.callback.lock().unwrap().is_some()
    }
}

impl MemoryPressureSource for ManualMemoryPressureSource {
    fn subscribe(&self, callback: PressureCallback) {
        *self.callback.lock().unwrap() = Some(callback);
    }

    fn unsubscribe(&self) {
        *self.callback.lock().unwrap() = None;
    }
}

/// Manually driven [`ScreenPowerSource`].
#[derive(Default)]
pub struct ManualScreenPowerSource {
    callback: Mutex<Option<SignalCallback>>,
}

impl ManualScreenPowerSource {
    /// Create an unsubscribed source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one screen-off signal to the subscriber, if any.
    pub fn fire(&self) {
        let callback = self.callback.lock().unwrap().clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Whether a subscriber is currently registered.
    pub fn is_subscribed(&self) -> bool {
        self.callback.lock().unwrap().is_some()
    }
}

impl ScreenPowerSource for ManualScreenPowerSource {
    fn subscribe(&self, callback: SignalCallback) {
        *self.callback.lock().unwrap() = Some(callback);
    }

    fn unsubscribe(&self) {
        *self.callback.lock().unwrap() = None;
    }
}

/// The three signal sources a tracker subscribes to.
#[derive(Clone)]
pub struct SignalSources {
    /// Unit-started signals.
    pub activity: Arc<dyn ActivitySource>,
    /// Memory-pressure signals.
    pub pressure: Arc<dyn MemoryPressureSource>,
    /// Screen-off signals.
    pub screen: Arc<dyn ScreenPowerSource>,
}

impl SignalSources {
    /// Bundle three fresh manual sources, returning handles to drive them.
    ///
    /// The returned tuple is (bundle, activity, pressure, screen).
    pub fn manual() -> (
        Self,
        Arc<ManualActivitySource>,
        Arc<ManualMemoryPressureSource>,
        Arc<ManualScreenPowerSource>,
    ) {
        let activity = Arc::new(ManualActivitySource::new());
        let pressure = Arc::new(ManualMemoryPressureSource::new());
        let screen = Arc::new(ManualScreenPowerSource::new());
        let sources = Self {
            activity: activity.clone(),
            pressure: pressure.clone(),
            screen: screen.clone(),
        };
        (sources, activity, pressure, screen)
    }
}
