// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value domain and quantization.
//!
//! A [`ValueRange`] is the closed interval `[lower, upper]` a slider may hold,
//! plus a [`Transform`] applied to every raw value after clamping. The
//! transform is how callers quantize the continuous scroll position: round to
//! whole degrees, snap to a step, and so on.
//!
//! Transforms must be idempotent: applying one to its own output returns the
//! same value. Offset → value → offset round trips rely on this.

use alloc::rc::Rc;
use core::fmt;
use core::ops::RangeInclusive;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Error returned when constructing an invalid [`ValueRange`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum RangeError {
    /// The lower bound is greater than the upper bound.
    #[error("lower bound {lower} is greater than upper bound {upper}")]
    Inverted {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },
    /// One of the bounds is NaN or infinite.
    #[error("range bounds must be finite, got [{lower}, {upper}]")]
    NonFinite {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },
}

/// Quantizing transform applied to raw, already clamped values.
#[derive(Clone, Default)]
pub enum Transform {
    /// Leave values untouched.
    #[default]
    Identity,
    /// Round to the nearest integer, ties away from zero.
    Round,
    /// Round to the nearest integer, ties to the even neighbour.
    RoundTiesEven,
    /// Snap to the nearest multiple of the given step.
    ///
    /// Non-finite or non-positive steps behave like [`Transform::Identity`].
    Step(f64),
    /// Caller supplied transform. Must be idempotent.
    Custom(Rc<dyn Fn(f64) -> f64>),
}

impl Transform {
    /// Wraps a closure as a [`Transform::Custom`].
    pub fn custom(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::Custom(Rc::new(f))
    }

    /// Applies the transform to `value`.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Round => value.round(),
            Self::RoundTiesEven => round_ties_even(value),
            Self::Step(step) => {
                debug_assert!(
                    step.is_finite() && *step > 0.0,
                    "Transform::Step expects a positive finite step; got {step:?}"
                );
                if step.is_finite() && *step > 0.0 {
                    (value / step).round() * step
                } else {
                    value
                }
            }
            Self::Custom(f) => f(value),
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Round => f.write_str("Round"),
            Self::RoundTiesEven => f.write_str("RoundTiesEven"),
            Self::Step(step) => f.debug_tuple("Step").field(step).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

fn round_ties_even(value: f64) -> f64 {
    let rounded = value.round();
    if (rounded - value).abs() == 0.5 {
        // Exactly halfway: pick the even neighbour.
        2.0 * (value / 2.0).round()
    } else {
        rounded
    }
}

/// The closed domain `[lower, upper]` of a slider plus its quantizing transform.
///
/// A `ValueRange` can only be built with `lower <= upper` and finite bounds;
/// see [`ValueRange::new`].
#[derive(Clone, Debug)]
pub struct ValueRange {
    lower: f64,
    upper: f64,
    transform: Transform,
}

impl ValueRange {
    /// Creates a range with the identity transform.
    ///
    /// Fails if either bound is not finite or if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, RangeError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(RangeError::NonFinite { lower, upper });
        }
        if lower > upper {
            return Err(RangeError::Inverted { lower, upper });
        }
        Ok(Self {
            lower,
            upper,
            transform: Transform::Identity,
        })
    }

    /// Returns this range with `transform` as its quantizer.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Lower bound.
    #[must_use]
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    #[must_use]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Distance between the bounds. Zero for a single-point range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// The quantizing transform.
    #[must_use]
    pub const fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Returns `true` if `value` lies within `[lower, upper]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Clamps `raw` into the range, quantizes it, and clamps again.
    ///
    /// The second clamp keeps the result in bounds for transforms whose grid
    /// does not line up with the bounds (e.g. a step of 1 over `[0, 1.5]`).
    /// NaN maps to the lower bound.
    #[must_use]
    pub fn clamp(&self, raw: f64) -> f64 {
        let raw = if raw.is_nan() { self.lower } else { raw };
        let quantized = self.transform.apply(raw.clamp(self.lower, self.upper));
        if quantized.is_nan() {
            return self.lower;
        }
        quantized.clamp(self.lower, self.upper)
    }

    /// Fraction of the way from `lower` to `upper` at which `value` sits.
    ///
    /// Not clamped; values outside the range give progress outside `0..=1`.
    /// A single-point range always reports `0`.
    #[must_use]
    pub fn progress(&self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            0.0
        } else {
            (value - self.lower) / span
        }
    }

    /// The raw value at `progress` along the range, clamping progress to `0..=1`.
    #[must_use]
    pub fn lerp(&self, progress: f64) -> f64 {
        let progress = progress.clamp(0.0, 1.0);
        self.lower + self.span() * progress
    }
}

impl TryFrom<RangeInclusive<f64>> for ValueRange {
    type Error = RangeError;

    fn try_from(range: RangeInclusive<f64>) -> Result<Self, Self::Error> {
        Self::new(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn inverted_and_non_finite_bounds_are_rejected() {
        assert_eq!(
            ValueRange::new(1.0, -1.0).unwrap_err(),
            RangeError::Inverted {
                lower: 1.0,
                upper: -1.0
            }
        );
        assert!(matches!(
            ValueRange::new(f64::NAN, 1.0),
            Err(RangeError::NonFinite { .. })
        ));
        assert!(matches!(
            ValueRange::try_from(0.0..=f64::INFINITY),
            Err(RangeError::NonFinite { .. })
        ));
        assert!(ValueRange::new(2.0, 2.0).is_ok());
    }

    #[test]
    fn clamp_pins_to_bounds_then_quantizes() {
        let range = ValueRange::new(-45.0, 45.0)
            .unwrap()
            .with_transform(Transform::RoundTiesEven);
        assert_eq!(range.clamp(100.0), 45.0);
        assert_eq!(range.clamp(-100.0), -45.0);
        assert_eq!(range.clamp(2.5), 2.0);
        assert_eq!(range.clamp(3.5), 4.0);
        assert_eq!(range.clamp(-2.5), -2.0);
        assert_eq!(range.clamp(2.6), 3.0);
        assert_eq!(range.clamp(f64::NAN), -45.0);
    }

    #[test]
    fn round_breaks_ties_away_from_zero() {
        let range = ValueRange::new(-10.0, 10.0)
            .unwrap()
            .with_transform(Transform::Round);
        assert_eq!(range.clamp(2.5), 3.0);
        assert_eq!(range.clamp(-2.5), -3.0);
    }

    #[test]
    fn step_transform_is_reclamped() {
        let range = ValueRange::new(0.0, 1.5)
            .unwrap()
            .with_transform(Transform::Step(1.0));
        assert_eq!(range.clamp(1.4), 1.0);
        // 1.5 would round up to 2.0, outside the range.
        assert_eq!(range.clamp(1.5), 1.5);

        let quarter = ValueRange::new(0.0, 1.0)
            .unwrap()
            .with_transform(Transform::Step(0.25));
        assert_eq!(quarter.clamp(0.3), 0.25);
        assert_eq!(quarter.clamp(0.9), 1.0);
    }

    #[test]
    fn custom_transform_is_applied() {
        let range = ValueRange::new(0.0, 100.0)
            .unwrap()
            .with_transform(Transform::custom(|v| (v / 10.0).floor() * 10.0));
        assert_eq!(range.clamp(47.0), 40.0);
        assert_eq!(range.clamp(200.0), 100.0);
    }

    #[test]
    fn progress_and_lerp_are_inverse() {
        let range = ValueRange::new(-1.0, 1.0).unwrap();
        assert_eq!(range.progress(0.0), 0.5);
        assert_eq!(range.lerp(0.5), 0.0);
        assert_eq!(range.lerp(2.0), 1.0);
        assert_eq!(range.lerp(-1.0), -1.0);

        let point = ValueRange::new(3.0, 3.0).unwrap();
        assert_eq!(point.progress(3.0), 0.0);
        assert_eq!(point.lerp(0.7), 3.0);
    }

    proptest! {
        #[test]
        fn clamp_always_lands_in_range(raw in -1.0e6_f64..1.0e6, lower in -100.0_f64..0.0, width in 0.0_f64..200.0) {
            let range = ValueRange::new(lower, lower + width)
                .unwrap()
                .with_transform(Transform::Step(0.5));
            let value = range.clamp(raw);
            prop_assert!(range.contains(value), "{value} outside [{}, {}]", range.lower(), range.upper());
        }

        #[test]
        fn rounding_transforms_are_idempotent(raw in -1.0e6_f64..1.0e6) {
            for transform in [Transform::Round, Transform::RoundTiesEven, Transform::Step(0.25)] {
                let once = transform.apply(raw);
                prop_assert_eq!(transform.apply(once), once);
            }
        }
    }
}
