//! Drag-paginated card carousel.
//!
//! ## Usage
//!
//! Page through a horizontal strip of fixed-width cards with next/previous
//! buttons, indicator dots or a pointer drag. The host reports the
//! container's width and forwards pointer events; the carousel answers with
//! the strip offset to translate by and the current page.
//!
//! ```
//! use vitrine_components::{
//!     carousel::{Carousel, CarouselArgs},
//!     collection::ItemCollection,
//! };
//! use vitrine_ui::{ContainerSize, Dp, PointerChannel};
//!
//! let container = ContainerSize::with_width(Dp(972.0));
//! let pointer = PointerChannel::new();
//! let carousel = Carousel::mount(
//!     CarouselArgs::default().item_width(Dp(300.0)),
//!     ItemCollection::with_len(9),
//!     &container,
//!     &pointer,
//! );
//!
//! assert_eq!(carousel.total_pages(), 3);
//! carousel.go_to_page(2);
//! assert_eq!(carousel.offset(), Dp(-1944.0));
//! ```

mod controller;
mod drag;
mod layout;
mod page;
mod position;
mod resize;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};
use vitrine_ui::{ContainerSize, Dp, Lifecycle, PointerChannel, Subscription};

pub use controller::PaginationController;
pub use drag::DragGesture;
pub use layout::{LayoutMetrics, LayoutSample, sample, total_pages};
pub use page::{PageMapper, offset_to_page, page_to_offset};
pub use position::{OffsetOwner, PositionStore};
pub use resize::ResizeReactor;

use crate::{
    collection::ItemCollection,
    indicator::{PageDot, page_dots},
};

/// Default spacing between cards.
pub const DEFAULT_GAP: Dp = Dp(24.0);
const DEFAULT_ITEM_WIDTH: Dp = Dp(300.0);

/// Configuration for [`Carousel`].
#[derive(Clone, Debug, PartialEq, Setters, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselArgs {
    /// Width of each card.
    pub item_width: Dp,
    /// Spacing after each card.
    pub gap: Dp,
    /// Move onto the settled page's canonical offset after a resize.
    pub snap_on_resize: bool,
    /// Whether pointer dragging is enabled.
    pub user_drag_enabled: bool,
}

impl Default for CarouselArgs {
    fn default() -> Self {
        Self {
            item_width: DEFAULT_ITEM_WIDTH,
            gap: DEFAULT_GAP,
            snap_on_resize: true,
            user_drag_enabled: true,
        }
    }
}

/// A mounted carousel instance.
///
/// Mounting subscribes to the container size and, when dragging is enabled,
/// to the pointer channel. Both subscriptions are released by
/// [`Carousel::teardown`] or when the carousel is dropped. Calling any
/// operation after teardown is a precondition violation (see
/// [`Lifecycle::ensure_live`]).
#[derive(Debug)]
pub struct Carousel {
    args: CarouselArgs,
    collection: ItemCollection,
    controller: PaginationController,
    reactor: Option<ResizeReactor>,
    drag: Option<DragGesture>,
    lifecycle: Lifecycle,
}

impl Carousel {
    /// Mounts a carousel over `collection`, starting at offset zero.
    pub fn mount(
        args: CarouselArgs,
        collection: ItemCollection,
        container: &ContainerSize,
        pointer: &PointerChannel,
    ) -> Self {
        let metrics = LayoutMetrics::new(args.item_width, args.gap, container.width());
        let controller = PaginationController::new(PositionStore::new(), metrics, collection.len());
        let reactor = ResizeReactor::observe(container, controller.clone(), args.snap_on_resize);
        let drag = args
            .user_drag_enabled
            .then(|| DragGesture::attach(pointer, controller.clone()));
        debug!(
            items = collection.len(),
            container = %container.width(),
            pages = controller.total_pages(),
            drag = drag.is_some(),
            "carousel mounted"
        );
        Self {
            args,
            collection,
            controller,
            reactor: Some(reactor),
            drag,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Arguments the carousel was mounted with.
    pub fn args(&self) -> &CarouselArgs {
        &self.args
    }

    /// The collection being paged.
    pub fn collection(&self) -> ItemCollection {
        self.collection
    }

    /// The underlying controller.
    pub fn controller(&self) -> &PaginationController {
        &self.controller
    }

    /// Current page index.
    pub fn current_page(&self) -> usize {
        if !self.lifecycle.ensure_live("current_page") {
            return 0;
        }
        self.controller.current_page()
    }

    /// Number of pages.
    pub fn total_pages(&self) -> usize {
        if !self.lifecycle.ensure_live("total_pages") {
            return 1;
        }
        self.controller.total_pages()
    }

    /// Strip offset to translate the cards by.
    pub fn offset(&self) -> Dp {
        if !self.lifecycle.ensure_live("offset") {
            return Dp::ZERO;
        }
        self.controller.offset()
    }

    /// Moves to the next page.
    pub fn next(&self) {
        if self.lifecycle.ensure_live("next") {
            self.controller.next();
        }
    }

    /// Moves to the previous page.
    pub fn previous(&self) {
        if self.lifecycle.ensure_live("previous") {
            self.controller.previous();
        }
    }

    /// Moves to `index`, clamped.
    pub fn go_to_page(&self, index: usize) {
        if self.lifecycle.ensure_live("go_to_page") {
            self.controller.go_to_page(index);
        }
    }

    /// Observes every committed offset.
    pub fn subscribe_offset(&self, listener: impl Fn(&Dp) + Send + Sync + 'static) -> Subscription {
        if !self.lifecycle.ensure_live("subscribe_offset") {
            return Subscription::detached();
        }
        self.controller.store().subscribe(listener)
    }

    /// Indicator dots for the current state.
    pub fn page_dots(&self) -> SmallVec<[PageDot; 8]> {
        if !self.lifecycle.ensure_live("page_dots") {
            return SmallVec::new();
        }
        page_dots(self.controller.current_page(), self.controller.total_pages())
    }

    /// Returns `true` while a pointer drag is in flight.
    pub fn is_dragging(&self) -> bool {
        self.drag.as_ref().is_some_and(DragGesture::is_active)
    }

    /// Replaces the collection.
    ///
    /// A collection with a different identity starts a new session: any drag
    /// in flight is abandoned and offset and page go back to zero.
    pub fn set_items(&mut self, collection: ItemCollection) {
        if !self.lifecycle.ensure_live("set_items") {
            return;
        }
        if self.collection.same_session(&collection) {
            trace!("same collection, keeping pagination state");
            return;
        }
        if let Some(drag) = &self.drag {
            drag.cancel();
        }
        self.collection = collection;
        self.controller.reset(collection.len());
    }

    /// Returns `true` until the carousel is torn down.
    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_live()
    }

    /// Releases the container and pointer subscriptions. Idempotent.
    pub fn teardown(&mut self) {
        if !self.lifecycle.tear_down() {
            return;
        }
        if let Some(drag) = self.drag.take() {
            drag.detach();
        }
        if let Some(reactor) = self.reactor.take() {
            reactor.disconnect();
        }
        debug!("carousel torn down");
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use vitrine_ui::{PointerEvent, testing::Recorder};

    use super::*;

    fn mount(width: f64, count: usize) -> (ContainerSize, PointerChannel, Carousel) {
        let container = ContainerSize::with_width(Dp(width));
        let pointer = PointerChannel::new();
        let carousel = Carousel::mount(
            CarouselArgs::default(),
            ItemCollection::with_len(count),
            &container,
            &pointer,
        );
        (container, pointer, carousel)
    }

    #[test]
    fn navigation_lands_on_canonical_offsets() {
        let (_container, _pointer, carousel) = mount(972.0, 9);
        assert_eq!(carousel.total_pages(), 3);
        assert_eq!(carousel.current_page(), 0);

        carousel.go_to_page(2);
        assert_eq!(carousel.offset(), Dp(-1944.0));
        assert_eq!(carousel.current_page(), 2);
        assert!(carousel.page_dots()[2].active);

        carousel.previous();
        assert_eq!(carousel.offset(), Dp(-972.0));
    }

    #[test]
    fn resize_then_drag() {
        let (container, pointer, carousel) = mount(972.0, 9);
        carousel.go_to_page(2);

        container.report(Dp(1944.0));
        assert_eq!(carousel.total_pages(), 2);
        assert_eq!(carousel.current_page(), 1);
        assert_eq!(carousel.offset(), Dp(-972.0));

        pointer.emit(PointerEvent::Pressed { x: Dp(100.0) });
        assert!(carousel.is_dragging());
        pointer.emit(PointerEvent::Moved { x: Dp(900.0) });
        assert_eq!(carousel.offset(), Dp(-172.0));
        pointer.emit(PointerEvent::Released);
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(carousel.offset(), Dp::ZERO);
    }

    #[test]
    fn resize_during_drag_defers_snap_to_release() {
        let (container, pointer, carousel) = mount(972.0, 9);

        pointer.emit(PointerEvent::Pressed { x: Dp(1000.0) });
        pointer.emit(PointerEvent::Moved { x: Dp(-500.0) });
        assert_eq!(carousel.offset(), Dp(-1500.0));
        assert_eq!(carousel.current_page(), 2);

        container.report(Dp(1944.0));
        assert!(carousel.is_dragging());
        assert_eq!(carousel.total_pages(), 2);
        assert_eq!(carousel.offset(), Dp(-972.0));
        assert_eq!(carousel.current_page(), 1);

        pointer.emit(PointerEvent::Released);
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.offset(), Dp(-972.0));
        assert_eq!(carousel.current_page(), 1);
    }

    #[test]
    fn drag_can_be_disabled() {
        let container = ContainerSize::with_width(Dp(400.0));
        let pointer = PointerChannel::new();
        let carousel = Carousel::mount(
            CarouselArgs::default().user_drag_enabled(false),
            ItemCollection::with_len(9),
            &container,
            &pointer,
        );
        assert_eq!(pointer.subscriber_count(), 0);

        pointer.emit(PointerEvent::Pressed { x: Dp(500.0) });
        pointer.emit(PointerEvent::Moved { x: Dp(0.0) });
        assert_eq!(carousel.offset(), Dp::ZERO);
    }

    #[test]
    fn offset_subscribers_are_notified() {
        let (_container, _pointer, carousel) = mount(972.0, 9);
        let recorder = Recorder::new();
        let _subscription = carousel.subscribe_offset(recorder.listener());

        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(recorder.take(), vec![Dp(-972.0), Dp(-1944.0)]);
    }

    #[test]
    fn new_collection_resets_session() {
        let (_container, pointer, mut carousel) = mount(972.0, 9);
        carousel.go_to_page(1);

        carousel.set_items(ItemCollection::with_len(9));
        assert_eq!(carousel.current_page(), 1);

        pointer.emit(PointerEvent::Pressed { x: Dp(0.0) });
        pointer.emit(PointerEvent::Moved { x: Dp(-50.0) });
        carousel.set_items(ItemCollection::from_keys(["a", "b", "c", "d"]));
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.offset(), Dp::ZERO);
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(carousel.total_pages(), 2);

        // The abandoned gesture's release is ignored.
        pointer.emit(PointerEvent::Released);
        assert_eq!(carousel.offset(), Dp::ZERO);
    }

    #[test]
    fn teardown_releases_subscriptions() {
        let (container, pointer, mut carousel) = mount(972.0, 9);
        assert_eq!(container.observer_count(), 1);
        assert_eq!(pointer.subscriber_count(), 1);

        carousel.teardown();
        assert!(!carousel.is_mounted());
        assert_eq!(container.observer_count(), 0);
        assert_eq!(pointer.subscriber_count(), 0);
        carousel.teardown();
    }

    #[test]
    fn drop_releases_subscriptions() {
        let (container, pointer, carousel) = mount(972.0, 9);
        drop(carousel);
        assert_eq!(container.observer_count(), 0);
        assert_eq!(pointer.subscriber_count(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "torn-down")]
    fn navigation_after_teardown_panics_in_debug() {
        let (_container, _pointer, mut carousel) = mount(972.0, 9);
        carousel.teardown();
        carousel.next();
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn subscribing_after_teardown_is_refused_in_release() {
        let (_container, _pointer, mut carousel) = mount(972.0, 9);
        let store = carousel.controller().store().clone();
        carousel.teardown();

        let subscription = carousel.subscribe_offset(|_| {});
        assert!(!subscription.is_active());
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "torn-down")]
    fn subscribing_after_teardown_panics_in_debug() {
        let (_container, _pointer, mut carousel) = mount(972.0, 9);
        carousel.teardown();
        let _subscription = carousel.subscribe_offset(|_| {});
    }

    #[test]
    fn args_round_trip_through_json() {
        let args: CarouselArgs = serde_json::from_str(r#"{ "item_width": 280.0 }"#).expect("partial args parse");
        assert_eq!(args.item_width, Dp(280.0));
        assert_eq!(args.gap, DEFAULT_GAP);
        assert!(args.snap_on_resize);
    }
}
