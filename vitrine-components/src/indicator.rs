//! Page indicator dots.
//!
//! ## Usage
//!
//! Render one dot per page under a carousel or slideshow and highlight the
//! current one. Clicking a dot navigates with `go_to_page(dot.index)`.

use smallvec::SmallVec;

/// One dot of a page indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageDot {
    /// Page this dot navigates to.
    pub index: usize,
    /// Whether this is the current page.
    pub active: bool,
}

/// Builds the dots for `total` pages with `current` highlighted.
///
/// `current` is clamped, so exactly one dot is active whenever `total > 0`.
///
/// ```
/// use vitrine_components::indicator::page_dots;
///
/// let dots = page_dots(1, 3);
/// assert_eq!(dots.len(), 3);
/// assert!(dots[1].active);
/// ```
pub fn page_dots(current: usize, total: usize) -> SmallVec<[PageDot; 8]> {
    let current = current.min(total.saturating_sub(1));
    (0..total)
        .map(|index| PageDot {
            index,
            active: index == current,
        })
        .collect()
}
