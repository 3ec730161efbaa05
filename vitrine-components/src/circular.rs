//! Circular image rotator.
//!
//! ## Usage
//!
//! Show a ring of images with the current one enlarged in the middle and
//! its neighbours fanned out to each side. The ring rotates one step every
//! interval; the host calls [`CircularCarousel::tick`] from its frame or
//! timer callback and animates each item towards its [`ItemPose`].

use std::time::{Duration, Instant};

use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use vitrine_ui::Dp;

/// Which way the ring turns on each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    /// The current index decreases, wrapping to the last item.
    #[default]
    Backward,
    /// The current index increases, wrapping to the first item.
    Forward,
}

/// Configuration for [`CircularCarousel`].
#[derive(Clone, Debug, PartialEq, Setters, Serialize, Deserialize)]
#[serde(default)]
pub struct CircularArgs {
    /// Horizontal distance between neighbouring positions.
    pub item_spacing: Dp,
    /// Step direction.
    pub rotation: Rotation,
    /// Milliseconds between steps. Zero disables automatic rotation.
    pub interval_ms: u64,
}

impl Default for CircularArgs {
    fn default() -> Self {
        Self {
            item_spacing: Dp(220.0),
            rotation: Rotation::Backward,
            interval_ms: 3000,
        }
    }
}

impl CircularArgs {
    /// Step interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Target presentation of one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPose {
    /// Position relative to the centre; 0 is the current item.
    pub position: i64,
    /// Horizontal translation from the centre.
    pub translate_x: Dp,
    /// Scale factor.
    pub scale: f32,
    /// Stacking order; higher is in front.
    pub z_index: i32,
    /// Opacity.
    pub opacity: f32,
}

/// Rotating ring state.
#[derive(Clone, Debug)]
pub struct CircularCarousel {
    args: CircularArgs,
    len: usize,
    current: usize,
    anchor: Option<Instant>,
}

impl CircularCarousel {
    /// Creates a ring of `len` items with item 0 in the centre.
    pub fn new(args: CircularArgs, len: usize) -> Self {
        Self {
            args,
            len,
            current: 0,
            anchor: None,
        }
    }

    /// Arguments the ring was created with.
    pub fn args(&self) -> &CircularArgs {
        &self.args
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the ring has no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the centred item, `None` when empty.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    /// Changes the number of items. The centred index restarts at 0 when it
    /// falls out of range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.current >= len {
            self.current = 0;
        }
    }

    /// Moves one step in the configured direction.
    pub fn rotate(&mut self) {
        self.rotate_by(1);
    }

    fn rotate_by(&mut self, steps: usize) {
        if self.len == 0 {
            return;
        }
        let steps = steps % self.len;
        self.current = match self.args.rotation {
            Rotation::Backward => (self.current + self.len - steps) % self.len,
            Rotation::Forward => (self.current + steps) % self.len,
        };
    }

    /// Advances by every full interval elapsed since the previous step.
    ///
    /// The first call only starts the clock. Returns the number of steps
    /// taken.
    pub fn tick(&mut self, now: Instant) -> usize {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(now);
            return 0;
        };
        let interval = self.args.interval();
        if interval.is_zero() || self.len == 0 {
            self.anchor = Some(now);
            return 0;
        }

        let elapsed = now.saturating_duration_since(anchor);
        let interval_nanos = interval.as_nanos();
        let steps = elapsed.as_nanos() / interval_nanos;
        if steps == 0 {
            return 0;
        }
        let remainder = Duration::from_nanos(
            u64::try_from(elapsed.as_nanos() % interval_nanos).unwrap_or(u64::MAX),
        );
        self.anchor = Some(now.checked_sub(remainder).unwrap_or(now));

        let steps = usize::try_from(steps).unwrap_or(usize::MAX);
        self.rotate_by(steps);
        trace!(steps, current = self.current, "ring rotated");
        steps
    }

    /// Restarts the interval clock, e.g. after the ring was hidden.
    pub fn restart_clock(&mut self) {
        debug!("ring clock restarted");
        self.anchor = None;
    }

    /// Position of item `index` relative to the centre, wrapped into
    /// `[-len / 2, len / 2]`. `None` for an out-of-range index.
    pub fn relative_position(&self, index: usize) -> Option<i64> {
        if index >= self.len {
            return None;
        }
        let len = self.len as i64;
        let half = len / 2;
        let mut position = index as i64 - self.current as i64;
        if position < -half {
            position += len;
        }
        if position > half {
            position -= len;
        }
        Some(position)
    }

    /// Presentation target of item `index`.
    pub fn pose(&self, index: usize) -> Option<ItemPose> {
        let position = self.relative_position(index)?;
        let (scale, z_index) = match position.abs() {
            0 => (2.0, 3),
            1 => (1.5, 2),
            _ => (1.0, 1),
        };
        Some(ItemPose {
            position,
            translate_x: self.args.item_spacing * position as f64,
            scale,
            z_index,
            opacity: if position == 0 { 1.0 } else { 0.8 },
        })
    }

    /// Poses of every item, in index order.
    pub fn poses(&self) -> impl Iterator<Item = ItemPose> + '_ {
        (0..self.len).filter_map(|index| self.pose(index))
    }
}
