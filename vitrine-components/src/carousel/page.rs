//! Conversion between the continuous strip offset and discrete pages.
//!
//! A page is `items_per_page` consecutive items, so the canonical offset of
//! page `p` is `-(step_width * items_per_page * p)`. Going the other way
//! rounds to the nearest page: a drag released past the midpoint between two
//! pages lands on the farther one.

use vitrine_ui::Dp;

use super::layout::{LayoutMetrics, LayoutSample};

/// Tolerance for treating an offset as resting on the scroll boundary.
const BOUNDARY_EPSILON: f64 = 1e-3;

/// Maps `offset` to the nearest page in `[0, total_pages - 1]`.
pub fn offset_to_page(
    offset: Dp,
    items_per_page: usize,
    step_width: Dp,
    total_pages: usize,
) -> usize {
    let page_width = step_width * items_per_page as f64;
    if !page_width.is_finite() || page_width <= Dp::ZERO || !offset.is_finite() {
        return 0;
    }
    let nearest = (-offset / page_width).round();
    let last_page = total_pages.saturating_sub(1);
    if nearest <= 0.0 {
        0
    } else {
        (nearest as usize).min(last_page)
    }
}

/// Maps `page` to its canonical offset, clamped into `[max_offset, 0]`.
pub fn page_to_offset(page: usize, items_per_page: usize, step_width: Dp, max_offset: Dp) -> Dp {
    let page_width = step_width * items_per_page as f64;
    if !page_width.is_finite() {
        return Dp::ZERO;
    }
    let raw = -(page_width * page as f64);
    raw.clamp(max_offset.min(Dp::ZERO), Dp::ZERO)
}

/// Bidirectional page mapping for one layout sample.
///
/// Besides rounding, the mapper treats an offset resting on `max_offset` as
/// the last page. When the item count does not divide evenly, the last
/// page's raw target overshoots the boundary and gets clamped short of it;
/// without this rule the clamped offset could round back to the previous
/// page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMapper {
    items_per_page: usize,
    step_width: Dp,
    total_pages: usize,
    max_offset: Dp,
}

impl PageMapper {
    /// Creates a mapper for `sample` laid out with `metrics`.
    pub fn new(metrics: &LayoutMetrics, sample: &LayoutSample) -> Self {
        Self {
            items_per_page: sample.items_per_page.max(1),
            step_width: metrics.step_width(),
            total_pages: sample.total_pages.max(1),
            max_offset: sample.max_offset.min(Dp::ZERO),
        }
    }

    /// Width covered by one page.
    pub fn page_width(&self) -> Dp {
        self.step_width * self.items_per_page as f64
    }

    /// Index of the last page.
    pub fn last_page(&self) -> usize {
        self.total_pages - 1
    }

    /// Clamps a page index into range.
    pub fn clamp_page(&self, page: usize) -> usize {
        page.min(self.last_page())
    }

    /// Page shown at `offset`.
    pub fn offset_to_page(&self, offset: Dp) -> usize {
        if self.max_offset < Dp::ZERO && offset.get() <= self.max_offset.get() + BOUNDARY_EPSILON {
            return self.last_page();
        }
        offset_to_page(offset, self.items_per_page, self.step_width, self.total_pages)
    }

    /// Canonical offset of `page`.
    pub fn page_to_offset(&self, page: usize) -> Dp {
        page_to_offset(
            self.clamp_page(page),
            self.items_per_page,
            self.step_width,
            self.max_offset,
        )
    }

    /// Canonical offset of the page nearest to `offset`.
    pub fn snap(&self, offset: Dp) -> Dp {
        self.page_to_offset(self.offset_to_page(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::layout::sample;

    fn mapper(container: f64, count: usize) -> PageMapper {
        let metrics = LayoutMetrics::new(Dp(300.0), Dp(24.0), Dp(container));
        PageMapper::new(&metrics, &sample(metrics, count, None))
    }

    #[test]
    fn rounds_to_nearest_page() {
        let step = Dp(324.0);
        assert_eq!(offset_to_page(Dp(-500.0), 1, step, 9), 2);
        assert_eq!(offset_to_page(Dp(-161.0), 1, step, 9), 0);
        // Exactly half way snaps forward.
        assert_eq!(offset_to_page(Dp(-162.0), 1, step, 9), 1);
    }

    #[test]
    fn offset_to_page_clamps_into_range() {
        let step = Dp(324.0);
        assert_eq!(offset_to_page(Dp(400.0), 3, step, 3), 0);
        assert_eq!(offset_to_page(Dp(-100_000.0), 3, step, 3), 2);
        assert_eq!(offset_to_page(Dp(-500.0), 3, Dp::ZERO, 3), 0);
        assert_eq!(offset_to_page(Dp(f64::NAN), 3, step, 3), 0);
    }

    #[test]
    fn page_to_offset_clamps_to_boundary() {
        let step = Dp(324.0);
        assert_eq!(page_to_offset(2, 3, step, Dp(-1944.0)), Dp(-1944.0));
        assert_eq!(page_to_offset(3, 3, step, Dp(-1944.0)), Dp(-1944.0));
        assert_eq!(page_to_offset(0, 3, step, Dp(-1944.0)), Dp::ZERO);
    }

    #[test]
    fn round_trip_holds_for_every_page() {
        for (container, count) in [(972.0, 9), (1000.0, 10), (400.0, 9), (1300.0, 7), (650.0, 5)] {
            let mapper = mapper(container, count);
            for page in 0..=mapper.last_page() {
                let offset = mapper.page_to_offset(page);
                assert_eq!(
                    mapper.offset_to_page(offset),
                    page,
                    "container {container}, count {count}, page {page}"
                );
            }
        }
    }

    #[test]
    fn clamped_last_page_still_maps_to_last_page() {
        // 10 items, 3 per page: the last page's raw target (-2916) is past
        // the boundary (-2240) and -2240 alone would round to page 2.
        let mapper = mapper(1000.0, 10);
        assert_eq!(mapper.last_page(), 3);
        assert_eq!(mapper.page_to_offset(3), Dp(-2240.0));
        assert_eq!(offset_to_page(Dp(-2240.0), 3, Dp(324.0), 4), 2);
        assert_eq!(mapper.offset_to_page(Dp(-2240.0)), 3);
    }

    #[test]
    fn snap_goes_to_canonical_offset() {
        let mapper = mapper(400.0, 9);
        assert_eq!(mapper.snap(Dp(-500.0)), Dp(-648.0));
        assert_eq!(mapper.snap(Dp(-10.0)), Dp::ZERO);
    }
}
