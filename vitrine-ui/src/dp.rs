//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type, the length unit every vitrine
//! widget works in: item widths, gaps, container widths and strip offsets.
//!
//! ## Overview
//!
//! Hosts report container sizes and pointer positions in device-independent
//! pixels, the same unit a browser reports for CSS pixels. Widgets keep all of
//! their state in `Dp` and only convert to physical pixels when the
//! presentation layer applies a transform.
//!
//! ## Scale Factor
//!
//! The conversion to physical pixels is controlled by a global scale factor
//! stored in [`SCALE_FACTOR`] and installed with [`set_scale_factor`].
//!
//! ## Usage
//!
//! ```
//! use vitrine_ui::Dp;
//!
//! let item = Dp(300.0);
//! let gap = Dp(24.0);
//! let step = item + gap;
//! assert_eq!(step, Dp(324.0));
//!
//! // Offsets are negative translations of the item strip.
//! let offset = -(step * 3.0);
//! assert_eq!(offset.clamp(Dp(-500.0), Dp::ZERO), Dp(-500.0));
//! ```

use std::{
    fmt,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
    sync::OnceLock,
};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Global scale factor for converting density-independent pixels to physical
/// pixels.
///
/// A factor of `2.0` means one dp covers two physical pixels. When nothing
/// has been installed the factor is `1.0`.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Installs the dp-to-pixel scale factor used by [`Dp::to_pixels_f32`].
///
/// Non-finite or non-positive factors are ignored.
pub fn set_scale_factor(factor: f64) {
    if !factor.is_finite() || factor <= 0.0 {
        tracing::warn!(factor, "ignoring invalid scale factor");
        return;
    }
    *SCALE_FACTOR.get_or_init(|| RwLock::new(1.0)).write() = factor;
}

/// Returns the current dp-to-pixel scale factor.
pub fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|factor| *factor.read()).unwrap_or(1.0)
}

/// Density-independent pixels.
///
/// `Dp` wraps an `f64` so sub-pixel drag positions survive until a snap
/// replaces them with a page's canonical offset. Arithmetic is provided for
/// the handful of operations the widgets need; anything else can work on the
/// inner value directly.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero length.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp` value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns `true` when the value is neither NaN nor infinite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Returns the smaller of two values.
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Restricts the value to `[min, max]`.
    ///
    /// Unlike [`f64::clamp`] this never panics: when `min > max` the result is
    /// `max`, which is what the widgets want for a degenerate range.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.max(min.0).min(max.0))
    }

    /// Maps negative and non-finite lengths to zero.
    ///
    /// Sizes reported before layout, or computed from stale state, must never
    /// turn into negative widths.
    pub fn non_negative(self) -> Self {
        if self.0.is_finite() && self.0 > 0.0 {
            self
        } else {
            Self::ZERO
        }
    }

    /// Converts to physical pixels using the global [`SCALE_FACTOR`].
    pub fn to_pixels_f32(self) -> f32 {
        (self.0 * scale_factor()) as f32
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Dp> for f64 {
    fn from(value: Dp) -> Self {
        value.0
    }
}

impl Add for Dp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Dp {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Dp {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Dp {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Dp {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Dp {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

/// Ratio of two lengths.
impl Div for Dp {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_arithmetic() {
        let a = Dp(300.0);
        let b = Dp(24.0);

        assert_eq!(a + b, Dp(324.0));
        assert_eq!(a - b, Dp(276.0));
        assert_eq!(-a, Dp(-300.0));
        assert_eq!(b * 3.0, Dp(72.0));
        assert_eq!(a / 2.0, Dp(150.0));
        assert_eq!(Dp(972.0) / Dp(324.0), 3.0);
    }

    #[test]
    fn test_dp_clamp() {
        assert_eq!(Dp(10.0).clamp(Dp(-100.0), Dp::ZERO), Dp::ZERO);
        assert_eq!(Dp(-150.0).clamp(Dp(-100.0), Dp::ZERO), Dp(-100.0));
        assert_eq!(Dp(-50.0).clamp(Dp(-100.0), Dp::ZERO), Dp(-50.0));
        // Degenerate range resolves to the upper bound.
        assert_eq!(Dp(-50.0).clamp(Dp(10.0), Dp::ZERO), Dp::ZERO);
    }

    #[test]
    fn test_dp_non_negative() {
        assert_eq!(Dp(-3.0).non_negative(), Dp::ZERO);
        assert_eq!(Dp(f64::NAN).non_negative(), Dp::ZERO);
        assert_eq!(Dp(f64::INFINITY).non_negative(), Dp::ZERO);
        assert_eq!(Dp(12.5).non_negative(), Dp(12.5));
    }

    #[test]
    fn test_dp_serde_is_transparent() {
        let json = serde_json::to_string(&Dp(24.0)).expect("serialize");
        assert_eq!(json, "24.0");
        let back: Dp = serde_json::from_str("300").expect("deserialize");
        assert_eq!(back, Dp(300.0));
    }
}
