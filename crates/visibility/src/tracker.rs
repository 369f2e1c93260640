//! The visibility tracker: raw-signal arbitration and listener fan-out.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::error::TrackerError;
use crate::listener::ListenerRef;
use crate::sources::SignalSources;
use crate::state::{PressureLevel, VisibilityState};

/// State shared between the tracker handle and the source callbacks.
struct Shared {
    /// Published state, readable without taking the transition lock.
    foreground: AtomicBool,
    /// Serializes state check, state write, and listener notification, so
    /// racing signals can neither double-fire nor reorder deliveries.
    transition: Mutex<()>,
    /// Consumed exactly once, on the first unit-started signal.
    first_launch: AtomicBool,
    listeners: Mutex<Vec<ListenerRef>>,
}

impl Shared {
    fn new() -> Self {
        Self {
            foreground: AtomicBool::new(false),
            transition: Mutex::new(()),
            first_launch: AtomicBool::new(true),
            listeners: Mutex::new(Vec::new()),
        }
    }

    fn current_state(&self) -> VisibilityState {
        if self.foreground.load(Ordering::SeqCst) {
            VisibilityState::Foreground
        } else {
            VisibilityState::Background
        }
    }

    fn activity_started(&self) {
        if self
            .first_launch
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            debug!("first unit start observed, emitting initial foreground");
            self.enter_foreground();
            return;
        }

        if !self.foreground.load(Ordering::SeqCst) {
            self.enter_foreground();
        }
    }

    fn memory_pressure(&self, level: PressureLevel) {
        if level.is_ui_hidden() {
            self.enter_background();
        }
    }

    fn screen_off(&self) {
        self.enter_background();
    }

    fn enter_foreground(&self) {
        let _guard = self.transition.lock().unwrap();
        if self.foreground.load(Ordering::SeqCst) {
            return;
        }
        self.foreground.store(true, Ordering::SeqCst);
        debug!("visibility changed to foreground");
        for listener in self.snapshot() {
            if catch_unwind(AssertUnwindSafe(|| listener.on_foreground())).is_err() {
                warn!("listener panicked during foreground notification");
            }
        }
    }

    fn enter_background(&self) {
        let _guard = self.transition.lock().unwrap();
        if !self.foreground.load(Ordering::SeqCst) {
            return;
        }
        self.foreground.store(false, Ordering::SeqCst);
        debug!("visibility changed to background");
        for listener in self.snapshot() {
            if catch_unwind(AssertUnwindSafe(|| listener.on_background())).is_err() {
                warn!("listener panicked during background notification");
            }
        }
    }

    /// Stable copy of the listener list for one notification round.
    /// Concurrent (un)registration cannot corrupt or skip an ongoing round.
    fn snapshot(&self) -> Vec<ListenerRef> {
        self.listeners.lock().unwrap().clone()
    }
}

/// Single source of truth for the host application's visibility.
///
/// Aggregates three raw signal sources into one authoritative
/// [`VisibilityState`] and notifies listeners on actual transitions only.
/// Construct one per process, [`register_listener`](Self::register_listener)
/// the interested observers, then [`start`](Self::start).
///
/// Source callbacks may arrive concurrently from different platform threads;
/// all tracker methods are safe to call from any thread.
pub struct VisibilityTracker {
    shared: Arc<Shared>,
    sources: SignalSources,
    started: AtomicBool,
}

impl VisibilityTracker {
    /// Create a tracker over the given signal sources.
    ///
    /// The initial state is [`VisibilityState::Background`]; no signals are
    /// observed until [`start`](Self::start).
    pub fn new(sources: SignalSources) -> Self {
        Self {
            shared: Arc::new(Shared::new()),
            sources,
            started: AtomicBool::new(false),
        }
    }

    /// Subscribe to all three signal sources.
    ///
    /// # Errors
    ///
    /// [`TrackerError::AlreadyStarted`] if called twice without an
    /// interleaved [`stop`](Self::stop).
    pub fn start(&self) -> Result<(), TrackerError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(TrackerError::AlreadyStarted);
        }

        let shared = Arc::clone(&self.shared);
        self.sources
            .activity
            .subscribe(Arc::new(move || shared.activity_started()));

        let shared = Arc::clone(&self.shared);
        self.sources
            .pressure
            .subscribe(Arc::new(move |level| shared.memory_pressure(level)));

        let shared = Arc::clone(&self.shared);
        self.sources
            .screen
            .subscribe(Arc::new(move || shared.screen_off()));

        debug!("visibility tracker started");
        Ok(())
    }

    /// Unsubscribe from all sources, freezing the state at its last value.
    ///
    /// # Errors
    ///
    /// [`TrackerError::NotStarted`] without a prior [`start`](Self::start).
    pub fn stop(&self) -> Result<(), TrackerError> {
        if !self.started.swap(false, Ordering::SeqCst) {
            return Err(TrackerError::NotStarted);
        }

        self.sources.activity.unsubscribe();
        self.sources.pressure.unsubscribe();
        self.sources.screen.unsubscribe();

        debug!("visibility tracker stopped");
        Ok(())
    }

    /// Append `listener` to the notification list.
    ///
    /// Listeners are notified in registration order. Duplicate registrations
    /// are kept and produce duplicate notifications. May be called at any
    /// time, including before `start` or after `stop`.
    pub fn register_listener(&self, listener: ListenerRef) {
        self.shared.listeners.lock().unwrap().push(listener);
    }

    /// Remove the first entry matching `listener` (by `Arc` identity).
    ///
    /// No-op when the listener is not registered.
    pub fn unregister_listener(&self, listener: &ListenerRef) {
        let mut listeners = self.shared.listeners.lock().unwrap();
        if let Some(index) = listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            listeners.remove(index);
        }
    }

    /// Snapshot of the current visibility state. Never blocks.
    pub fn current_state(&self) -> VisibilityState {
        self.shared.current_state()
    }
}
