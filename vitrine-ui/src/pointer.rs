//! Pointer events forwarded by the host.
//!
//! The host performs hit testing and forwards the horizontal pointer
//! position of a press that started inside a widget, every move while the
//! button is held, and the release. Touch and mouse input map onto the same
//! events.

use crate::{Dp, Listeners, Subscription};

/// A pointer event along the widget's scroll axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The primary button or a touch went down at `x`.
    Pressed {
        /// Horizontal position in the container's coordinate space.
        x: Dp,
    },
    /// The pointer moved to `x`.
    Moved {
        /// Horizontal position in the container's coordinate space.
        x: Dp,
    },
    /// The primary button or touch was released.
    Released,
    /// The host aborted the interaction (focus loss, touch cancel).
    Cancelled,
}

/// Broadcast channel for [`PointerEvent`]s.
#[derive(Clone, Debug, Default)]
pub struct PointerChannel {
    listeners: Listeners<PointerEvent>,
}

impl PointerChannel {
    /// Creates a channel with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every subscriber in subscription order.
    pub fn emit(&self, event: PointerEvent) {
        self.listeners.notify(&event);
    }

    /// Subscribes to pointer events.
    pub fn subscribe(
        &self,
        handler: impl Fn(&PointerEvent) + Send + Sync + 'static,
    ) -> Subscription {
        self.listeners.subscribe(handler)
    }

    /// Returns the number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}
