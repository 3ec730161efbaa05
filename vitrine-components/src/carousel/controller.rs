//! Pagination controller: discrete navigation over the position store.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};
use vitrine_ui::Dp;

use super::{
    layout::{self, LayoutMetrics, LayoutSample},
    page::PageMapper,
    position::{OffsetOwner, PositionStore},
};

#[derive(Debug)]
struct PagerState {
    metrics: LayoutMetrics,
    count: usize,
    sample: LayoutSample,
    current_page: usize,
}

impl PagerState {
    fn mapper(&self) -> PageMapper {
        PageMapper::new(&self.metrics, &self.sample)
    }
}

/// Drives the [`PositionStore`] from page-level requests and keeps the
/// current page in step with the offset.
///
/// The controller is a cheap handle; clones share the same state. All
/// operations are total: out-of-range pages are clamped and requests that
/// cannot apply are dropped.
///
/// Page state is updated before the store is written, and no lock is held
/// while store listeners run, so a listener can query the controller for the
/// page matching the offset it was just given.
#[derive(Clone, Debug)]
pub struct PaginationController {
    state: Arc<RwLock<PagerState>>,
    store: PositionStore,
}

impl PaginationController {
    /// Creates a controller for `count` items laid out with `metrics`.
    ///
    /// The store's bounds are installed immediately.
    pub fn new(store: PositionStore, metrics: LayoutMetrics, count: usize) -> Self {
        let sample = layout::sample(metrics, count, None);
        let committed = store.set_bounds(sample.max_offset);
        let current_page = PageMapper::new(&metrics, &sample).offset_to_page(committed);
        Self {
            state: Arc::new(RwLock::new(PagerState {
                metrics,
                count,
                sample,
                current_page,
            })),
            store,
        }
    }

    /// The store this controller writes to.
    pub fn store(&self) -> &PositionStore {
        &self.store
    }

    /// Current committed offset.
    pub fn offset(&self) -> Dp {
        self.store.get()
    }

    /// Current page index.
    pub fn current_page(&self) -> usize {
        self.state.read().current_page
    }

    /// Number of pages.
    pub fn total_pages(&self) -> usize {
        self.state.read().sample.total_pages
    }

    /// Items shown per page.
    pub fn items_per_page(&self) -> usize {
        self.state.read().sample.items_per_page
    }

    /// Number of items being paged.
    pub fn item_count(&self) -> usize {
        self.state.read().count
    }

    /// Latest layout sample.
    pub fn sample(&self) -> LayoutSample {
        self.state.read().sample
    }

    /// Latest layout metrics.
    pub fn metrics(&self) -> LayoutMetrics {
        self.state.read().metrics
    }

    /// Page mapper for the latest layout.
    pub fn mapper(&self) -> PageMapper {
        self.state.read().mapper()
    }

    /// Returns `true` while a drag gesture owns the store.
    pub fn is_gesture_active(&self) -> bool {
        self.store.owner() == OffsetOwner::Gesture
    }

    /// Moves to the next page; no-op on the last page.
    pub fn next(&self) {
        let target = {
            let state = self.state.read();
            if state.current_page + 1 >= state.sample.total_pages {
                trace!(page = state.current_page, "next: already on the last page");
                return;
            }
            state.current_page + 1
        };
        self.commit_page(target, "next");
    }

    /// Moves to the previous page; no-op on the first page.
    pub fn previous(&self) {
        let target = {
            let state = self.state.read();
            if state.current_page == 0 {
                trace!("previous: already on the first page");
                return;
            }
            state.current_page - 1
        };
        self.commit_page(target, "previous");
    }

    /// Moves to `index`, clamped into the valid page range.
    pub fn go_to_page(&self, index: usize) {
        self.commit_page(index, "go_to_page");
    }

    fn commit_page(&self, page: usize, reason: &'static str) {
        if self.is_gesture_active() {
            debug!(reason, page, "navigation ignored while a gesture owns the offset");
            return;
        }
        let (page, offset) = {
            let mut state = self.state.write();
            let mapper = state.mapper();
            let page = mapper.clamp_page(page);
            state.current_page = page;
            (page, mapper.page_to_offset(page))
        };
        debug!(reason, page, %offset, "navigating");
        self.store.set_as(OffsetOwner::Controller, offset);
    }

    /// Tracks the page live while a gesture moves the strip.
    ///
    /// Does not write the store. Returns the page for `offset`.
    pub fn on_external_offset_change(&self, offset: Dp) -> usize {
        let mut state = self.state.write();
        let page = state.mapper().offset_to_page(offset);
        if page != state.current_page {
            trace!(from = state.current_page, to = page, %offset, "page changed during gesture");
            state.current_page = page;
        }
        page
    }

    /// Ends a gesture: takes the store back and snaps the offset to the
    /// nearest page's canonical offset.
    pub fn on_gesture_end(&self) {
        let released_at = self.store.get();
        let (page, canonical) = {
            let mut state = self.state.write();
            let mapper = state.mapper();
            let page = mapper.offset_to_page(released_at);
            state.current_page = page;
            (page, mapper.page_to_offset(page))
        };
        self.store.release();
        debug!(%released_at, page, %canonical, "gesture ended, snapping");
        self.store.set_as(OffsetOwner::Controller, canonical);
    }

    /// Takes the store back from a gesture without snapping.
    ///
    /// Used when a gesture is abandoned because the widget goes away or its
    /// items change.
    pub fn abort_gesture(&self) {
        if self.store.release() == OffsetOwner::Gesture {
            let offset = self.store.get();
            let mut state = self.state.write();
            state.current_page = state.mapper().offset_to_page(offset);
            debug!(%offset, "gesture aborted");
        }
    }

    /// Reconciles page and offset with a new container width.
    pub fn apply_container_width(&self, container_width: Dp, resnap: bool) {
        let metrics = self.metrics().with_container_width(container_width);
        self.apply_metrics(metrics, resnap);
    }

    /// Reconciles page and offset with new layout metrics.
    ///
    /// The page is re-derived from the offset the strip is at right now, not
    /// from the old page index, so a resize alone never jumps pages. With
    /// `resnap` the offset then moves to that page's canonical offset, unless
    /// a gesture owns the store.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn apply_metrics(&self, metrics: LayoutMetrics, resnap: bool) {
        let existing = self.store.get();
        let (page, max_offset) = {
            let mut state = self.state.write();
            let sample = layout::sample(metrics, state.count, Some(state.sample));
            state.metrics = metrics;
            state.sample = sample;
            let page = state.mapper().offset_to_page(existing);
            state.current_page = page;
            (page, sample.max_offset)
        };
        self.store.set_bounds(max_offset);

        if resnap && !self.is_gesture_active() {
            let offset = self.mapper().page_to_offset(page);
            debug!(page, %offset, "re-snapping after layout change");
            self.store.set_as(OffsetOwner::Controller, offset);
        } else {
            let settled = self.store.get();
            let mut state = self.state.write();
            state.current_page = state.mapper().offset_to_page(settled);
        }
    }

    /// Starts a new session for a collection of `count` items: offset and
    /// page go back to zero.
    pub fn reset(&self, count: usize) {
        self.abort_gesture();
        let max_offset = {
            let mut state = self.state.write();
            let sample = layout::sample(state.metrics, count, None);
            state.count = count;
            state.sample = sample;
            state.current_page = 0;
            sample.max_offset
        };
        debug!(count, "pagination session reset");
        self.store.set_bounds(max_offset);
        self.store.set_as(OffsetOwner::Controller, Dp::ZERO);
    }
}
