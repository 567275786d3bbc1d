// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll phase tracking for the slider's scroll surface.
//!
//! The tracker is the single place that knows whether the user is currently
//! manipulating the strip. It drives two policies:
//!
//! - scroll movement is only turned into values while the user is dragging or
//!   the strip is decelerating after a fling, and
//! - programmatic value writes only move the strip while it is idle, so a
//!   programmatic scroll never fights the user's finger.
//!
//! ```text
//! Idle ──begin_drag──▶ Dragging ──end_drag(decelerate)──▶ Decelerating
//!  ▲                      │  ▲                                 │
//!  └──end_drag(at rest)───┘  └────────────begin_drag───────────┤
//!  ▲                                                           │
//!  └──────────────────────end_deceleration─────────────────────┘
//! ```

use crate::Geometry;

/// Where the scroll surface is in its gesture lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    /// At rest; programmatic scrolls are allowed.
    #[default]
    Idle,
    /// The user's finger (or pointer) is moving the strip.
    Dragging,
    /// The strip is coasting after the user released it with velocity.
    Decelerating,
}

impl ScrollPhase {
    /// Returns `true` while the user owns the strip's position.
    #[must_use]
    pub const fn is_user_driven(self) -> bool {
        matches!(self, Self::Dragging | Self::Decelerating)
    }
}

/// How the strip came to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// The drag ended without residual velocity.
    DragEnded,
    /// Deceleration after a fling completed.
    DecelerationEnded,
}

/// State machine over [`ScrollPhase`] driven by the host's gesture callbacks.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    phase: ScrollPhase,
}

impl ScrollTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: ScrollPhase::Idle,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Returns `true` when the surface is at rest.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.phase, ScrollPhase::Idle)
    }

    /// Records the start of a drag and returns the phase it interrupted.
    ///
    /// Grabbing a decelerating strip turns the fling back into a drag without
    /// a settle in between.
    pub fn begin_drag(&mut self) -> ScrollPhase {
        core::mem::replace(&mut self.phase, ScrollPhase::Dragging)
    }

    /// Records the end of a drag.
    ///
    /// Returns [`Settle::DragEnded`] if the strip came to rest immediately.
    /// A release with residual velocity moves to [`ScrollPhase::Decelerating`]
    /// instead. Calls outside of a drag are ignored.
    pub fn end_drag(&mut self, will_decelerate: bool) -> Option<Settle> {
        if self.phase != ScrollPhase::Dragging {
            return None;
        }
        if will_decelerate {
            self.phase = ScrollPhase::Decelerating;
            None
        } else {
            self.phase = ScrollPhase::Idle;
            Some(Settle::DragEnded)
        }
    }

    /// Records the end of a deceleration.
    ///
    /// Returns [`Settle::DecelerationEnded`] if the tracker was decelerating.
    /// A stale notification arriving after the user grabbed the strip again is
    /// ignored.
    pub fn end_deceleration(&mut self) -> Option<Settle> {
        if self.phase != ScrollPhase::Decelerating {
            return None;
        }
        self.phase = ScrollPhase::Idle;
        Some(Settle::DecelerationEnded)
    }

    /// Returns `true` if a scroll movement should be mapped to a value.
    ///
    /// Movement is only meaningful while the user drives the strip and the
    /// geometry can be mapped at all; programmatic scrolls and zero-width
    /// layouts are skipped.
    #[must_use]
    pub fn accepts_movement(&self, geometry: &Geometry) -> bool {
        self.phase.is_user_driven() && !geometry.is_degenerate()
    }

    /// Returns `true` if a programmatic write may move the surface.
    #[must_use]
    pub const fn allows_programmatic_scroll(&self) -> bool {
        self.is_idle()
    }

    /// Forces the tracker back to idle.
    ///
    /// Used by [`LevelSlider::cancel_gesture`](crate::LevelSlider::cancel_gesture).
    pub fn reset(&mut self) {
        self.phase = ScrollPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: Geometry = Geometry::new(100.0, 100.0, 50.0);

    #[test]
    fn drag_without_velocity_settles_immediately() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.begin_drag(), ScrollPhase::Idle);
        assert_eq!(tracker.phase(), ScrollPhase::Dragging);
        assert_eq!(tracker.end_drag(false), Some(Settle::DragEnded));
        assert!(tracker.is_idle());
    }

    #[test]
    fn fling_settles_after_deceleration() {
        let mut tracker = ScrollTracker::new();
        tracker.begin_drag();
        assert_eq!(tracker.end_drag(true), None);
        assert_eq!(tracker.phase(), ScrollPhase::Decelerating);
        assert!(!tracker.allows_programmatic_scroll());
        assert_eq!(
            tracker.end_deceleration(),
            Some(Settle::DecelerationEnded)
        );
        assert!(tracker.allows_programmatic_scroll());
    }

    #[test]
    fn grabbing_a_decelerating_strip_resumes_dragging() {
        let mut tracker = ScrollTracker::new();
        tracker.begin_drag();
        tracker.end_drag(true);
        assert_eq!(tracker.begin_drag(), ScrollPhase::Decelerating);
        // The deceleration end reported after the grab is stale.
        assert_eq!(tracker.end_deceleration(), None);
        assert_eq!(tracker.phase(), ScrollPhase::Dragging);
    }

    #[test]
    fn stray_callbacks_are_ignored() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.end_drag(false), None);
        assert_eq!(tracker.end_deceleration(), None);
        assert!(tracker.is_idle());
    }

    #[test]
    fn movement_is_accepted_only_while_user_driven_with_valid_geometry() {
        let mut tracker = ScrollTracker::new();
        assert!(!tracker.accepts_movement(&GEOMETRY));
        tracker.begin_drag();
        assert!(tracker.accepts_movement(&GEOMETRY));
        assert!(!tracker.accepts_movement(&Geometry::ZERO));
        tracker.end_drag(true);
        assert!(tracker.accepts_movement(&GEOMETRY));
        tracker.reset();
        assert!(!tracker.accepts_movement(&GEOMETRY));
    }
}
