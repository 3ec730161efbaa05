//! Endless horizontal ticker.
//!
//! ## Usage
//!
//! Scroll a row of logos or testimonial cards continuously. The row is
//! rendered [`Marquee::copies_for`] times back to back and translated by
//! [`Marquee::offset_at`]; after one period the translation wraps to zero and
//! the next copy sits exactly where the first one started, so the loop is
//! seamless.

use std::time::Duration;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vitrine_ui::Dp;

/// Scroll direction of a [`Marquee`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarqueeDirection {
    /// Content moves towards the left edge.
    #[default]
    Left,
    /// Content moves towards the right edge.
    Right,
}

/// Configuration for [`Marquee`].
#[derive(Clone, Debug, PartialEq, Setters, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeArgs {
    /// Scroll direction.
    pub direction: MarqueeDirection,
    /// Seconds one full period takes.
    pub loop_seconds: f64,
    /// Spacing after each item.
    pub gap: Dp,
}

impl Default for MarqueeArgs {
    fn default() -> Self {
        Self {
            direction: MarqueeDirection::Left,
            loop_seconds: 50.0,
            gap: Dp(48.0),
        }
    }
}

/// Linear, looping ticker state.
#[derive(Clone, Debug, PartialEq)]
pub struct Marquee {
    args: MarqueeArgs,
    item_count: usize,
    period: Dp,
}

impl Marquee {
    /// Creates a marquee with no measured items.
    pub fn new(args: MarqueeArgs) -> Self {
        Self {
            args,
            item_count: 0,
            period: Dp::ZERO,
        }
    }

    /// Arguments the marquee was created with.
    pub fn args(&self) -> &MarqueeArgs {
        &self.args
    }

    /// Number of items in one copy.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Records the measured widths of one copy of the items.
    pub fn set_item_widths(&mut self, widths: &[Dp]) {
        let gap = self.args.gap.non_negative();
        self.item_count = widths.len();
        self.period = widths
            .iter()
            .fold(Dp::ZERO, |sum, width| sum + width.non_negative() + gap);
        debug!(items = self.item_count, period = %self.period, "marquee measured");
    }

    /// Width of one copy including its trailing gaps.
    pub fn period(&self) -> Dp {
        self.period
    }

    /// Signed distance travelled in one loop.
    pub fn distance(&self) -> Dp {
        match self.args.direction {
            MarqueeDirection::Left => -self.period,
            MarqueeDirection::Right => self.period,
        }
    }

    /// Translation of the row `elapsed` after the ticker started.
    pub fn offset_at(&self, elapsed: Duration) -> Dp {
        let loop_seconds = self.args.loop_seconds;
        if self.period <= Dp::ZERO || !loop_seconds.is_finite() || loop_seconds <= 0.0 {
            return Dp::ZERO;
        }
        let progress = (elapsed.as_secs_f64() % loop_seconds) / loop_seconds;
        self.distance() * progress
    }

    /// Number of copies needed to cover `container_width` with no visible
    /// gap at any point of the loop. Never less than two.
    pub fn copies_for(&self, container_width: Dp) -> usize {
        if self.period <= Dp::ZERO || !container_width.is_finite() {
            return 2;
        }
        let needed = ((container_width.non_negative() / self.period).ceil() as usize).saturating_add(1);
        needed.max(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(direction: MarqueeDirection) -> Marquee {
        let mut marquee = Marquee::new(MarqueeArgs::default().direction(direction));
        marquee.set_item_widths(&[Dp(200.0), Dp(300.0), Dp(250.0)]);
        marquee
    }

    #[test]
    fn period_includes_gaps() {
        let marquee = measured(MarqueeDirection::Left);
        assert_eq!(marquee.period(), Dp(894.0));
        assert_eq!(marquee.distance(), Dp(-894.0));
        assert_eq!(measured(MarqueeDirection::Right).distance(), Dp(894.0));
    }

    #[test]
    fn offset_is_linear_and_wraps() {
        let left = measured(MarqueeDirection::Left);
        assert_eq!(left.offset_at(Duration::ZERO), Dp::ZERO);
        assert_eq!(left.offset_at(Duration::from_secs(25)), Dp(-447.0));
        assert_eq!(left.offset_at(Duration::from_secs(50)), Dp::ZERO);
        assert_eq!(left.offset_at(Duration::from_secs(75)), Dp(-447.0));

        let right = measured(MarqueeDirection::Right);
        assert_eq!(right.offset_at(Duration::from_secs(25)), Dp(447.0));
    }

    #[test]
    fn unmeasured_or_stalled_marquee_stays_put() {
        let marquee = Marquee::new(MarqueeArgs::default());
        assert_eq!(marquee.offset_at(Duration::from_secs(10)), Dp::ZERO);

        let mut stalled = Marquee::new(MarqueeArgs::default().loop_seconds(0.0));
        stalled.set_item_widths(&[Dp(100.0)]);
        assert_eq!(stalled.offset_at(Duration::from_secs(10)), Dp::ZERO);
    }

    #[test]
    fn enough_copies_to_hide_the_seam() {
        let marquee = measured(MarqueeDirection::Left);
        assert_eq!(marquee.copies_for(Dp(500.0)), 2);
        assert_eq!(marquee.copies_for(Dp(1000.0)), 3);
        assert_eq!(marquee.copies_for(Dp(1788.0)), 3);
        assert_eq!(Marquee::new(MarqueeArgs::default()).copies_for(Dp(1000.0)), 2);
    }

    #[test]
    fn huge_container_saturates_copy_count() {
        let mut marquee = Marquee::new(MarqueeArgs::default().gap(Dp(0.5)));
        marquee.set_item_widths(&[Dp::ZERO]);
        assert_eq!(marquee.copies_for(Dp(1e30)), usize::MAX);
    }
}
