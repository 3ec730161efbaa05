//! Crossfade slideshow.
//!
//! ## Usage
//!
//! Show one full-size slide at a time and fade between them when a dot is
//! clicked or the host advances the show. Autoplay timing is left to the
//! host; it calls [`Slideshow::advance`] when it wants the next slide.

use std::time::Duration;

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    collection::ItemCollection,
    indicator::{PageDot, page_dots},
};

/// Length of a crossfade.
pub const FADE_DURATION: Duration = Duration::from_millis(600);

/// A crossfade the host should animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeTransition {
    /// Slide fading out.
    pub outgoing: usize,
    /// Slide fading in.
    pub incoming: usize,
    /// Fade length.
    pub duration: Duration,
}

/// Slideshow state over an [`ItemCollection`].
#[derive(Clone, Debug)]
pub struct Slideshow {
    collection: ItemCollection,
    active: usize,
}

impl Slideshow {
    /// Creates a slideshow showing the first slide.
    pub fn new(collection: ItemCollection) -> Self {
        Self {
            collection,
            active: 0,
        }
    }

    /// The collection being shown.
    pub fn collection(&self) -> ItemCollection {
        self.collection
    }

    /// Index of the visible slide, `None` when there are no slides.
    pub fn active(&self) -> Option<usize> {
        (!self.collection.is_empty()).then_some(self.active)
    }

    /// Shows slide `index`, clamped.
    pub fn select(&mut self, index: usize) -> Option<FadeTransition> {
        let last = self.collection.len().checked_sub(1)?;
        self.show(index.min(last))
    }

    /// Shows the next slide, wrapping after the last one.
    pub fn advance(&mut self) -> Option<FadeTransition> {
        let len = self.collection.len();
        if len == 0 {
            return None;
        }
        self.show((self.active + 1) % len)
    }

    fn show(&mut self, incoming: usize) -> Option<FadeTransition> {
        if incoming == self.active {
            return None;
        }
        let transition = FadeTransition {
            outgoing: self.active,
            incoming,
            duration: FADE_DURATION,
        };
        self.active = incoming;
        debug!(from = transition.outgoing, to = incoming, "slide changed");
        Some(transition)
    }

    /// Target opacity of slide `index` once any fade completes.
    pub fn opacity(&self, index: usize) -> f32 {
        if self.active() == Some(index) { 1.0 } else { 0.0 }
    }

    /// Replaces the slides. A different collection restarts at slide 0
    /// without a fade.
    pub fn set_collection(&mut self, collection: ItemCollection) {
        if self.collection.same_session(&collection) {
            return;
        }
        debug!(slides = collection.len(), "slideshow collection replaced");
        self.collection = collection;
        self.active = 0;
    }

    /// Indicator dots, one per slide.
    pub fn page_dots(&self) -> SmallVec<[PageDot; 8]> {
        page_dots(self.active, self.collection.len())
    }
}
