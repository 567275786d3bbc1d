// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Level Slider: the headless core of a ruler-style slider.
//!
//! A level slider shows a strip of tick marks that the user scrolls
//! horizontally under a fixed centre marker; the value under the marker is the
//! slider's value. This crate owns the parts of such a control that are not
//! rendering:
//!
//! - [`ValueRange`]: the closed value domain plus a quantizing [`Transform`]
//!   (rounding, stepping, or a custom function).
//! - [`value_to_offset`] / [`offset_to_value`]: pure conversions between a
//!   scroll offset and a value for a given [`Geometry`] snapshot.
//! - [`ScrollTracker`]: the [`ScrollPhase`] state machine that decides when
//!   scroll movement means "the user picked a value" and when programmatic
//!   writes may move the strip.
//! - [`decide`]: the commit/notify policy for continuous and discrete
//!   [`UpdateMode`]s.
//! - [`HapticsPolicy`] and [`HapticsTrigger`]: feedback keyed to value commits,
//!   played on a host [`FeedbackGenerator`].
//! - [`LevelSlider`]: the controller tying these together around a host
//!   [`ScrollSurface`].
//!
//! This crate deliberately does **not** draw tick marks, fade masks, or run
//! animations. Host frameworks are responsible for:
//!
//! - Implementing [`ScrollSurface`] over their scroll view and executing the
//!   [`ScrollCommand`]s it receives.
//! - Forwarding drag, scroll, and deceleration callbacks to the slider.
//! - Calling [`LevelSlider::relayout`] when their bounds change.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_level_slider::{
//!     Geometry, LevelSlider, ScrollCommand, ScrollSurface, Transform, ValueRange,
//! };
//!
//! /// A surface that jumps straight to every requested offset.
//! struct Strip {
//!     offset: f64,
//! }
//!
//! impl ScrollSurface for Strip {
//!     fn geometry(&self) -> Geometry {
//!         Geometry::fill(Size::new(90.0, 40.0))
//!     }
//!     fn offset(&self) -> f64 {
//!         self.offset
//!     }
//!     fn scroll_to(&mut self, command: ScrollCommand) {
//!         self.offset = command.offset;
//!     }
//! }
//!
//! let range = ValueRange::new(-45.0, 45.0)
//!     .expect("valid range")
//!     .with_transform(Transform::RoundTiesEven);
//! let mut slider = LevelSlider::new(range, Strip { offset: 0.0 })
//!     .on_value_changed(|value| assert_eq!(value, 12.0));
//!
//! // The user drags the strip 12.3 units to the right.
//! slider.begin_drag();
//! slider.surface_mut().offset = 12.3;
//! let update = slider.did_scroll();
//! assert!(update.emitted);
//! slider.end_drag(false);
//! assert_eq!(slider.value(), 12.0);
//!
//! // Programmatic writes are clamped and move the idle strip.
//! slider.set_value(100.0);
//! assert_eq!(slider.value(), 45.0);
//! assert_eq!(slider.surface().offset, 45.0);
//! ```
//!
//! All offsets live in the host's horizontal content coordinate space
//! (typically logical pixels).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

// Property tests expand to `std` paths and macros.
#[cfg(test)]
#[macro_use]
extern crate std;

mod haptics;
mod mapping;
mod notify;
mod phase;
mod range;
mod slider;
mod surface;

pub use haptics::{FeedbackGenerator, FeedbackStyle, HapticsPolicy, HapticsTrigger, ImpactStrength};
pub use mapping::{Geometry, offset_to_raw_value, offset_to_value, value_to_offset};
pub use notify::{Decision, ScrollSignal, UpdateMode, decide};
pub use phase::{ScrollPhase, ScrollTracker, Settle};
pub use range::{RangeError, Transform, ValueRange};
pub use slider::{LevelSlider, SliderConfig, SliderUpdate};
pub use surface::{ScrollCommand, ScrollMotion, ScrollSurface, Spring};
