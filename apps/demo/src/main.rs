//! Headless visibility-tracker demo.
//!
//! Wires a tracker the way a host process would at startup: construct once,
//! register a listener, `start()`. The platform is simulated by the manual
//! sources, driven through a representative signal sequence.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vigil_visibility::{
    ListenerRef, PressureLevel, SignalSources, VisibilityListener, VisibilityTracker,
};

/// Logs every transition, the typical fast observer.
struct LogListener;

impl VisibilityListener for LogListener {
    fn on_foreground(&self) {
        info!("app entered foreground");
    }

    fn on_background(&self) {
        info!("app entered background");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (sources, activity, pressure, screen) = SignalSources::manual();
    let tracker = VisibilityTracker::new(sources);
    let listener: ListenerRef = Arc::new(LogListener);
    tracker.register_listener(listener);
    tracker.start()?;

    info!(state = ?tracker.current_state(), "tracker started");

    // A representative session: launch, a transient memory warning that must
    // not background us, the UI going hidden, a relaunch, screen off.
    activity.fire();
    info!(state = ?tracker.current_state(), "after first unit start");

    pressure.fire(PressureLevel::RunningLow);
    info!(state = ?tracker.current_state(), "after unrelated pressure tier");

    pressure.fire(PressureLevel::UiHidden);
    info!(state = ?tracker.current_state(), "after ui-hidden pressure tier");

    activity.fire();
    info!(state = ?tracker.current_state(), "after unit restart");

    screen.fire();
    info!(state = ?tracker.current_state(), "after screen off");

    tracker.stop()?;
    info!(state = ?tracker.current_state(), "tracker stopped, state frozen");

    Ok(())
}
