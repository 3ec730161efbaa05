//! The position store: the single continuous strip offset.
//!
//! Exactly one writer owns the store at a time. The pagination controller
//! owns it by default; a drag gesture takes it over from pointer-down to
//! pointer-up and hands it back when the gesture ends.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};
use vitrine_ui::{Dp, Listeners, Subscription};

/// Who may currently write the offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OffsetOwner {
    /// Programmatic navigation and snapping.
    #[default]
    Controller,
    /// A live drag gesture.
    Gesture,
}

#[derive(Debug)]
struct StoreState {
    offset: Dp,
    max_offset: Dp,
    owner: OffsetOwner,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            offset: Dp::ZERO,
            max_offset: Dp::ZERO,
            owner: OffsetOwner::Controller,
        }
    }
}

/// Shared handle to the strip offset.
///
/// Every committed value lies in `[max_offset, 0]`. Clones share the same
/// state and listeners.
#[derive(Clone, Debug, Default)]
pub struct PositionStore {
    state: Arc<RwLock<StoreState>>,
    listeners: Listeners<Dp>,
}

impl PositionStore {
    /// Creates a store at offset zero with no scroll range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current committed offset.
    pub fn get(&self) -> Dp {
        self.state.read().offset
    }

    /// Most negative legal offset.
    pub fn max_offset(&self) -> Dp {
        self.state.read().max_offset
    }

    /// Current owner.
    pub fn owner(&self) -> OffsetOwner {
        self.state.read().owner
    }

    /// Clamps `offset` into `[max_offset, 0]`, commits it and notifies
    /// listeners. Returns the committed value.
    ///
    /// Non-finite requests are ignored and the current value is returned.
    pub fn set(&self, offset: Dp) -> Dp {
        let committed = {
            let mut state = self.state.write();
            if !offset.is_finite() {
                debug!(%offset, "ignoring non-finite offset");
                return state.offset;
            }
            state.offset = offset.clamp(state.max_offset, Dp::ZERO);
            state.offset
        };
        trace!(requested = %offset, %committed, "offset committed");
        self.listeners.notify(&committed);
        committed
    }

    /// Writes on behalf of `writer`, which must be the current owner.
    ///
    /// Returns `None` without touching the store when `writer` does not own
    /// it.
    pub fn set_as(&self, writer: OffsetOwner, offset: Dp) -> Option<Dp> {
        let owner = self.owner();
        if owner != writer {
            debug!(?writer, ?owner, "write from non-owner dropped");
            return None;
        }
        Some(self.set(offset))
    }

    /// Installs a new scroll boundary and re-clamps the current offset.
    ///
    /// Listeners are notified only when the offset moved. Returns the
    /// committed offset.
    pub fn set_bounds(&self, max_offset: Dp) -> Dp {
        let (committed, moved) = {
            let mut state = self.state.write();
            state.max_offset = if max_offset.is_finite() {
                max_offset.min(Dp::ZERO)
            } else {
                Dp::ZERO
            };
            let clamped = state.offset.clamp(state.max_offset, Dp::ZERO);
            let moved = clamped != state.offset;
            state.offset = clamped;
            (clamped, moved)
        };
        if moved {
            debug!(%committed, "offset re-clamped to new bounds");
            self.listeners.notify(&committed);
        }
        committed
    }

    /// Hands ownership to `owner`. Returns the previous owner.
    pub fn acquire(&self, owner: OffsetOwner) -> OffsetOwner {
        let previous = std::mem::replace(&mut self.state.write().owner, owner);
        if previous != owner {
            trace!(?previous, ?owner, "offset ownership transferred");
        }
        previous
    }

    /// Returns ownership to the controller.
    pub fn release(&self) -> OffsetOwner {
        self.acquire(OffsetOwner::Controller)
    }

    /// Registers a listener called with every committed offset.
    pub fn subscribe(&self, listener: impl Fn(&Dp) + Send + Sync + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    /// Returns the number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use vitrine_ui::testing::Recorder;

    use super::*;

    #[test]
    fn set_always_lands_in_bounds() {
        let store = PositionStore::new();
        store.set_bounds(Dp(-1944.0));

        for request in [-5000.0, -1944.0, -972.5, 0.0, 12.0, 1e9, -1e9] {
            let committed = store.set(Dp(request));
            assert_eq!(committed, store.get());
            assert!(store.get() <= Dp::ZERO);
            assert!(store.get() >= Dp(-1944.0));
        }
    }

    #[test]
    fn non_finite_requests_are_ignored() {
        let store = PositionStore::new();
        store.set_bounds(Dp(-500.0));
        store.set(Dp(-100.0));

        let recorder = Recorder::new();
        let _subscription = store.subscribe(recorder.listener());
        assert_eq!(store.set(Dp(f64::NAN)), Dp(-100.0));
        assert!(recorder.is_empty());
    }

    #[test]
    fn listeners_see_every_committed_value() {
        let store = PositionStore::new();
        store.set_bounds(Dp(-1000.0));
        let recorder = Recorder::new();
        let _subscription = store.subscribe(recorder.listener());

        store.set(Dp(-200.0));
        store.set(Dp(-2000.0));
        store.set(Dp(-2000.0));

        assert_eq!(recorder.take(), vec![Dp(-200.0), Dp(-1000.0), Dp(-1000.0)]);
    }

    #[test]
    fn narrowing_bounds_reclamps_and_notifies() {
        let store = PositionStore::new();
        store.set_bounds(Dp(-1944.0));
        store.set(Dp(-1944.0));

        let recorder = Recorder::new();
        let _subscription = store.subscribe(recorder.listener());

        assert_eq!(store.set_bounds(Dp(-972.0)), Dp(-972.0));
        assert_eq!(store.set_bounds(Dp(-3000.0)), Dp(-972.0));
        assert_eq!(recorder.take(), vec![Dp(-972.0)]);
    }

    #[test]
    fn only_the_owner_may_write() {
        let store = PositionStore::new();
        store.set_bounds(Dp(-1000.0));

        assert_eq!(store.acquire(OffsetOwner::Gesture), OffsetOwner::Controller);
        assert_eq!(store.set_as(OffsetOwner::Controller, Dp(-300.0)), None);
        assert_eq!(store.set_as(OffsetOwner::Gesture, Dp(-300.0)), Some(Dp(-300.0)));

        assert_eq!(store.release(), OffsetOwner::Gesture);
        assert_eq!(store.set_as(OffsetOwner::Gesture, Dp(-400.0)), None);
        assert_eq!(store.get(), Dp(-300.0));
    }

    #[test]
    fn listener_may_read_store_while_notified() {
        let store = PositionStore::new();
        store.set_bounds(Dp(-1000.0));
        let reader = store.clone();
        let recorder = Recorder::new();
        let record = recorder.listener();
        let _subscription = store.subscribe(move |_| record(&reader.get()));

        store.set(Dp(-250.0));
        assert_eq!(recorder.take(), vec![Dp(-250.0)]);
    }
}
