//! Pointer drag over the strip.
//!
//! On press the gesture takes ownership of the position store and remembers
//! where the pointer and the strip started. Every move writes
//! `origin_offset + (x - origin_x)` straight into the store (the store clamps
//! it) and lets the controller track the page live. Release or cancel hands
//! the store back and the controller snaps to the nearest page.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};
use vitrine_ui::{Dp, PointerChannel, PointerEvent, Subscription};

use super::{controller::PaginationController, position::OffsetOwner};

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveDrag {
    origin_x: Dp,
    origin_offset: Dp,
}

/// A drag gesture bound to one pointer channel and one carousel.
#[derive(Debug)]
pub struct DragGesture {
    active: Arc<Mutex<Option<ActiveDrag>>>,
    controller: PaginationController,
    subscription: Subscription,
}

impl DragGesture {
    /// Starts listening to `pointer`.
    pub fn attach(pointer: &PointerChannel, controller: PaginationController) -> Self {
        let active = Arc::new(Mutex::new(None));
        let subscription = {
            let active = active.clone();
            let controller = controller.clone();
            pointer.subscribe(move |event| handle_event(&active, &controller, *event))
        };
        Self {
            active,
            controller,
            subscription,
        }
    }

    /// Returns `true` between press and release.
    pub fn is_active(&self) -> bool {
        self.active.lock().is_some()
    }

    /// Abandons an in-flight gesture without snapping.
    pub fn cancel(&self) {
        let was_active = self.active.lock().take().is_some();
        if was_active {
            self.controller.abort_gesture();
        }
    }

    /// Cancels any in-flight gesture and stops listening.
    pub fn detach(self) {
        self.cancel();
        self.subscription.unsubscribe();
    }
}

fn handle_event(
    active: &Mutex<Option<ActiveDrag>>,
    controller: &PaginationController,
    event: PointerEvent,
) {
    match event {
        PointerEvent::Pressed { x } => {
            if !x.is_finite() || active.lock().is_some() {
                return;
            }
            let store = controller.store();
            store.acquire(OffsetOwner::Gesture);
            let origin_offset = store.get();
            *active.lock() = Some(ActiveDrag {
                origin_x: x,
                origin_offset,
            });
            debug!(%x, %origin_offset, "drag started");
        }
        PointerEvent::Moved { x } => {
            let Some(drag) = *active.lock() else {
                return;
            };
            if !x.is_finite() {
                return;
            }
            let target = drag.origin_offset + (x - drag.origin_x);
            if let Some(committed) = controller.store().set_as(OffsetOwner::Gesture, target) {
                let page = controller.on_external_offset_change(committed);
                trace!(%target, %committed, page, "drag moved");
            }
        }
        PointerEvent::Released | PointerEvent::Cancelled => {
            let was_active = active.lock().take().is_some();
            if was_active {
                controller.on_gesture_end();
            }
        }
    }
}
