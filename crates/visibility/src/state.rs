//! Visibility state and memory-pressure severity models.

use serde::{Deserialize, Serialize};

/// Binary classification of whether the host application currently has
/// user-facing presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityState {
    /// No user-facing presence. This is the initial state.
    Background,
    /// The application is visible to the user.
    Foreground,
}

impl VisibilityState {
    /// Whether this is the foreground state.
    pub fn is_foreground(self) -> bool {
        matches!(self, VisibilityState::Foreground)
    }
}

/// Severity tier reported by a [`MemoryPressureSource`](crate::MemoryPressureSource).
///
/// Mirrors the host platform's memory-trim taxonomy. Only [`UiHidden`]
/// carries visibility information: it is reported exactly when the process
/// keeps running but none of its UI remains visible. Every other tier
/// describes memory scarcity unrelated to visibility and is ignored by the
/// tracker, so transient low-memory events never cause false backgrounding.
///
/// [`UiHidden`]: PressureLevel::UiHidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureLevel {
    /// Process is visible and moderately memory-constrained.
    RunningModerate,
    /// Process is visible and low on memory.
    RunningLow,
    /// Process is visible and critically low on memory.
    RunningCritical,
    /// The application's UI is no longer visible.
    UiHidden,
    /// Process is backgrounded and an easy reclaim candidate.
    Background,
    /// Process is in the middle of the background reclaim list.
    Moderate,
    /// Process is one of the first reclaim candidates.
    Complete,
}

impl PressureLevel {
    /// Whether this tier indicates the UI stopped being visible.
    pub fn is_ui_hidden(self) -> bool {
        matches!(self, PressureLevel::UiHidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_state_serializes_snake_case() {
        let json = serde_json::to_string(&VisibilityState::Foreground).unwrap();
        assert_eq!(json, "\"foreground\"");
        let state: VisibilityState = serde_json::from_str("\"background\"").unwrap();
        assert_eq!(state, VisibilityState::Background);
    }

    #[test]
    fn test_only_ui_hidden_tier_is_ui_hidden() {
        assert!(PressureLevel::UiHidden.is_ui_hidden());
        for level in [
            PressureLevel::RunningModerate,
            PressureLevel::RunningLow,
            PressureLevel::RunningCritical,
            PressureLevel::Background,
            PressureLevel::Moderate,
            PressureLevel::Complete,
        ] {
            assert!(!level.is_ui_hidden(), "{level:?} must not map to a transition");
        }
    }
}
