//! Layout sampling: how many items fit per page and how far the strip may
//! scroll.

use vitrine_ui::Dp;

/// Measured sizes the carousel pages over.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LayoutMetrics {
    /// Width of one item.
    pub item_width: Dp,
    /// Spacing after each item.
    pub gap: Dp,
    /// Visible width of the container.
    pub container_width: Dp,
}

impl LayoutMetrics {
    /// Creates metrics, normalizing negative or non-finite sizes to zero.
    pub fn new(item_width: Dp, gap: Dp, container_width: Dp) -> Self {
        Self {
            item_width: item_width.non_negative(),
            gap: gap.non_negative(),
            container_width: container_width.non_negative(),
        }
    }

    /// Returns a copy with a new container width.
    pub fn with_container_width(self, container_width: Dp) -> Self {
        Self {
            container_width: container_width.non_negative(),
            ..self
        }
    }

    /// Distance between the starts of two neighbouring items.
    pub fn step_width(&self) -> Dp {
        self.item_width.non_negative() + self.gap.non_negative()
    }

    /// A zero container width means layout has not happened yet.
    pub fn is_measured(&self) -> bool {
        self.container_width.is_finite() && self.container_width > Dp::ZERO
    }
}

/// Result of sampling the layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSample {
    /// Items fully visible at once; at least one.
    pub items_per_page: usize,
    /// Most negative legal offset; never positive.
    pub max_offset: Dp,
    /// Number of pages; at least one.
    pub total_pages: usize,
}

impl LayoutSample {
    /// Sample used before the container has ever been measured.
    pub fn unmeasured(count: usize) -> Self {
        Self {
            items_per_page: 1,
            max_offset: Dp::ZERO,
            total_pages: total_pages(count, 1),
        }
    }
}

/// Samples the layout for `count` items.
///
/// An unmeasured container keeps `previous`, or falls back to
/// [`LayoutSample::unmeasured`] when there is nothing to keep.
pub fn sample(metrics: LayoutMetrics, count: usize, previous: Option<LayoutSample>) -> LayoutSample {
    if !metrics.is_measured() {
        return previous.unwrap_or_else(|| LayoutSample::unmeasured(count));
    }

    let container = metrics.container_width;
    let step = metrics.step_width();
    if step <= Dp::ZERO {
        // Zero-width items all fit on a single page.
        return LayoutSample {
            items_per_page: count.max(1),
            max_offset: Dp::ZERO,
            total_pages: 1,
        };
    }

    let fitting = (container / step).floor();
    let items_per_page = if fitting >= 1.0 { fitting as usize } else { 1 };
    let content_width = step * count as f64;
    let max_offset = (container - content_width).min(Dp::ZERO);

    LayoutSample {
        items_per_page,
        max_offset,
        total_pages: total_pages(count, items_per_page),
    }
}

/// `ceil(count / items_per_page)`, never less than one.
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    count.div_ceil(items_per_page.max(1)).max(1)
}
