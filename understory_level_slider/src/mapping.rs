// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure conversion between scroll offsets and slider values.
//!
//! The strip of tick marks scrolls horizontally under a fixed centre marker.
//! Every conversion goes through a `0..=1` progress fraction:
//!
//! ```text
//! offset = content_width * progress - inset_left
//! value  = lower + (upper - lower) * progress
//! ```
//!
//! Because the offset is rebuilt from progress and the current [`Geometry`]
//! each time, a geometry change (rotation, resize) never requires rescaling the
//! stored value.

use kurbo::{Insets, Size};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::ValueRange;

/// Snapping grid for raw values, as a fraction of the range span (2^-36).
const SNAP_FRACTION: f64 = 1.0 / 68_719_476_736.0;

/// Snapshot of the scrollable strip's horizontal geometry.
///
/// Recomputed by the host whenever its bounds change and only ever used
/// transiently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Width of the scrollable content (the tick strip).
    pub content_width: f64,
    /// Width of the visible viewport.
    pub viewport_width: f64,
    /// Leading content inset of the scroll surface.
    pub inset_left: f64,
}

impl Geometry {
    /// A zero-sized geometry. Scroll events are ignored until a real one arrives.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a geometry snapshot from raw measurements.
    #[must_use]
    pub const fn new(content_width: f64, viewport_width: f64, inset_left: f64) -> Self {
        Self {
            content_width,
            viewport_width,
            inset_left,
        }
    }

    /// Geometry for a strip as wide as the viewport itself.
    ///
    /// This is the usual configuration: the strip fills the host bounds and is
    /// inset by half its width on each side so that both ends can reach the
    /// centre marker.
    #[must_use]
    pub fn fill(viewport: Size) -> Self {
        Self::centered(viewport, viewport)
    }

    /// Geometry for a strip of size `content` inside a viewport of size `viewport`.
    ///
    /// The inset is half the content width plus half of any slack between the
    /// viewport and a narrower strip, which keeps the strip's ends aligned with
    /// the viewport centre.
    #[must_use]
    pub fn centered(viewport: Size, content: Size) -> Self {
        let slack = (viewport.width - content.width).max(0.0);
        Self {
            content_width: content.width,
            viewport_width: viewport.width,
            inset_left: content.width / 2.0 + slack / 2.0,
        }
    }

    /// Returns `true` if offsets cannot be mapped to values with this geometry.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.viewport_width > 0.0 && self.content_width > 0.0)
    }

    /// Content insets the host should apply to its scroll surface.
    ///
    /// The strip is inset symmetrically, so the trailing inset equals the
    /// leading one.
    #[must_use]
    pub fn insets(&self) -> Insets {
        Insets::new(self.inset_left, 0.0, self.inset_left, 0.0)
    }

    /// Offsets at which the lower and upper bound sit under the centre marker.
    #[must_use]
    pub fn offset_bounds(&self) -> (f64, f64) {
        (-self.inset_left, self.content_width - self.inset_left)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Returns the scroll offset that places `value` under the centre marker.
///
/// `value` is not clamped; callers pass values that already went through
/// [`ValueRange::clamp`].
#[must_use]
pub fn value_to_offset(value: f64, range: &ValueRange, geometry: &Geometry) -> f64 {
    geometry.content_width * range.progress(value) - geometry.inset_left
}

/// Returns the unquantized value under the centre marker at `offset`.
///
/// The result is always within the range bounds. Returns `None` for a
/// degenerate geometry, where the mapping is undefined.
///
/// The value is snapped to a power-of-two grid roughly `2^-36` of the span
/// wide. That absorbs the rounding error of the offset/progress trip, so a
/// value like `-20.5` written through [`value_to_offset`] reads back as
/// exactly `-20.5` and ties break the way the range's transform intends.
#[must_use]
pub fn offset_to_raw_value(offset: f64, range: &ValueRange, geometry: &Geometry) -> Option<f64> {
    if geometry.is_degenerate() {
        return None;
    }
    debug_assert!(offset.is_finite(), "scroll offset must be finite; got {offset:?}");
    let progress = (offset + geometry.inset_left) / geometry.content_width;
    Some(snap(range.lerp(progress), range))
}

/// Returns the quantized value under the centre marker at `offset`.
///
/// Same as [`offset_to_raw_value`] followed by [`ValueRange::clamp`].
#[must_use]
pub fn offset_to_value(offset: f64, range: &ValueRange, geometry: &Geometry) -> Option<f64> {
    offset_to_raw_value(offset, range, geometry).map(|raw| range.clamp(raw))
}

/// Rounds `raw` to the nearest multiple of a power of two scaled to the span.
///
/// Scaling by a power of two is exact, so values already on the grid
/// (integers, halves, quarters) come back unchanged.
fn snap(raw: f64, range: &ValueRange) -> f64 {
    let fine = range.span() * SNAP_FRACTION;
    if !(fine.is_normal() && raw.is_finite()) {
        return raw;
    }
    // Keep only the exponent: the largest power of two not above `fine`.
    let grid = f64::from_bits(fine.to_bits() & 0xfff0_0000_0000_0000);
    let snapped = (raw / grid).round() * grid;
    if snapped.is_finite() {
        snapped.clamp(range.lower(), range.upper())
    } else {
        raw
    }
}
