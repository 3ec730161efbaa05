//! Container size source.
//!
//! ## Usage
//!
//! The host owns one [`ContainerSize`] per widget container and reports the
//! measured width whenever its resize observer fires. Widgets subscribe to it
//! instead of polling.

use tracing::trace;

use crate::{Dp, Observable, Subscription};

/// Width of a widget's container, as reported by the host.
///
/// A width of zero means "not yet measured". Reports of an identical width
/// are coalesced.
#[derive(Clone, Debug, Default)]
pub struct ContainerSize {
    width: Observable<Dp>,
}

impl ContainerSize {
    /// Creates an unmeasured container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a container that has already been measured.
    pub fn with_width(width: Dp) -> Self {
        Self {
            width: Observable::new(width.non_negative()),
        }
    }

    /// Returns the last reported width.
    pub fn width(&self) -> Dp {
        self.width.get()
    }

    /// Returns `true` once a positive width has been reported.
    pub fn is_measured(&self) -> bool {
        self.width() > Dp::ZERO
    }

    /// Reports a new width. Negative and non-finite widths count as zero.
    ///
    /// Returns `true` when observers were notified.
    pub fn report(&self, width: Dp) -> bool {
        let width = width.non_negative();
        let changed = self.width.set_if_changed(width);
        trace!(%width, changed, "container width reported");
        changed
    }

    /// Observes width changes.
    pub fn observe(&self, observer: impl Fn(Dp) + Send + Sync + 'static) -> Subscription {
        self.width.subscribe(move |width| observer(*width))
    }

    /// Returns the number of live observers.
    pub fn observer_count(&self) -> usize {
        self.width.listener_count()
    }
}
