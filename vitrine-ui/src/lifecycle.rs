//! Mount/teardown tracking for widget instances.
//!
//! Calling into a widget after it was torn down is a programming error, not
//! a recoverable condition. [`Lifecycle::ensure_live`] panics in debug builds
//! so the mistake is caught during development, and degrades to a logged
//! no-op in release builds.

use tracing::error;

/// Mount state of a widget instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MountState {
    /// The widget is mounted and accepts calls.
    #[default]
    Mounted,
    /// The widget was torn down; every public call is a precondition
    /// violation.
    TornDown,
}

/// Tracks whether a widget instance may still be used.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lifecycle {
    state: MountState,
}

impl Lifecycle {
    /// Creates a lifecycle in the mounted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current mount state.
    pub fn state(&self) -> MountState {
        self.state
    }

    /// Returns `true` while the widget is mounted.
    pub fn is_live(&self) -> bool {
        self.state == MountState::Mounted
    }

    /// Marks the widget as torn down.
    ///
    /// Returns `false` if it already was.
    pub fn tear_down(&mut self) -> bool {
        let was_live = self.is_live();
        self.state = MountState::TornDown;
        was_live
    }

    /// Checks the precondition that `operation` runs on a mounted widget.
    ///
    /// # Panics
    ///
    /// Panics in debug builds when the widget was torn down. Release builds
    /// log the violation and return `false` so the caller can skip the
    /// operation.
    pub fn ensure_live(&self, operation: &str) -> bool {
        if self.is_live() {
            return true;
        }
        if cfg!(debug_assertions) {
            panic!("`{operation}` called on a torn-down widget");
        }
        error!(operation, "call on a torn-down widget ignored");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tear_down_is_reported_once() {
        let mut lifecycle = Lifecycle::new();
        assert!(lifecycle.ensure_live("next"));
        assert!(lifecycle.tear_down());
        assert!(!lifecycle.tear_down());
        assert_eq!(lifecycle.state(), MountState::TornDown);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "torn-down widget")]
    fn use_after_tear_down_is_loud_in_debug() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.tear_down();
        lifecycle.ensure_live("go_to_page");
    }
}
