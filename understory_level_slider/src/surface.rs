// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scrollable surface the slider drives.
//!
//! The slider never animates anything itself. When a programmatic write needs
//! the strip to move, it hands the surface an explicit [`ScrollCommand`]
//! describing the target offset and the motion to use. Commands follow a
//! latest-write-wins policy: a newer command supersedes any animation still in
//! flight, and a new drag cancels it through [`ScrollSurface::cancel_scroll`].

use crate::Geometry;

/// Spring parameters for animated scrolls.
///
/// The default is the control's stock animation: a 0.3 second critically
/// damped spring starting at rest, interruptible by the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    /// Nominal duration in seconds.
    pub duration: f64,
    /// Damping ratio; `1.0` is critically damped (no overshoot).
    pub damping_ratio: f64,
    /// Initial velocity, relative to the total distance per second.
    pub initial_velocity: f64,
    /// Whether user interaction may interrupt the animation.
    pub interruptible: bool,
}

impl Spring {
    /// The default critically damped spring.
    pub const CRITICAL: Self = Self {
        duration: 0.3,
        damping_ratio: 1.0,
        initial_velocity: 0.0,
        interruptible: true,
    };
}

impl Default for Spring {
    fn default() -> Self {
        Self::CRITICAL
    }
}

/// How the surface should travel to a new offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollMotion {
    /// Jump straight to the offset.
    Immediate,
    /// Animate from the current position using a spring.
    Spring(Spring),
}

/// A request to move the surface so that `offset` is its content offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCommand {
    /// Target horizontal content offset.
    pub offset: f64,
    /// How to get there.
    pub motion: ScrollMotion,
}

impl ScrollCommand {
    /// A command that jumps to `offset`.
    #[must_use]
    pub const fn immediate(offset: f64) -> Self {
        Self {
            offset,
            motion: ScrollMotion::Immediate,
        }
    }

    /// A command that springs to `offset`.
    #[must_use]
    pub const fn spring(offset: f64, spring: Spring) -> Self {
        Self {
            offset,
            motion: ScrollMotion::Spring(spring),
        }
    }

    /// Returns `true` if the command is animated.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        matches!(self.motion, ScrollMotion::Spring(_))
    }
}

/// Host scroll component the slider is attached to.
///
/// Gesture callbacks (drag begin/end, deceleration end, scroll movement) are
/// forwarded by the host to [`LevelSlider`](crate::LevelSlider); this trait
/// covers what the slider needs to ask of the surface in return.
pub trait ScrollSurface {
    /// Current geometry snapshot.
    fn geometry(&self) -> Geometry;

    /// Current horizontal content offset.
    fn offset(&self) -> f64;

    /// Moves the surface, superseding any animation in flight.
    fn scroll_to(&mut self, command: ScrollCommand);

    /// Stops an in-flight programmatic animation where it is.
    ///
    /// Surfaces whose animations are interrupted by touches natively can keep
    /// the default no-op.
    fn cancel_scroll(&mut self) {}
}
