//! Keeps pagination consistent when the container is resized.

use vitrine_ui::{ContainerSize, Subscription};

use super::controller::PaginationController;

/// Forwards container width changes to a [`PaginationController`].
///
/// Observation stops when the reactor is dropped or disconnected.
#[derive(Debug)]
pub struct ResizeReactor {
    subscription: Subscription,
}

impl ResizeReactor {
    /// Starts observing `container`. With `resnap`, every resize moves the
    /// offset onto the canonical offset of the page it settles on.
    pub fn observe(container: &ContainerSize, controller: PaginationController, resnap: bool) -> Self {
        let subscription = container.observe(move |width| {
            controller.apply_container_width(width, resnap);
        });
        Self { subscription }
    }

    /// Returns `true` while the container is being observed.
    pub fn is_observing(&self) -> bool {
        self.subscription.is_active()
    }

    /// Stops observing.
    pub fn disconnect(self) {
        self.subscription.unsubscribe();
    }
}
