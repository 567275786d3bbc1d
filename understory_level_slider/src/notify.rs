// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commit and notification policy for user-driven scroll events.
//!
//! [`decide`] is a pure function of the incoming [`ScrollSignal`], the
//! [`UpdateMode`], the quantized candidate value, and the currently committed
//! value. It returns a [`Decision`] describing what the controller should do;
//! the controller itself performs no policy of its own.
//!
//! | signal   | mode       | result                                              |
//! |----------|------------|-----------------------------------------------------|
//! | moved    | continuous | commit + emit if the candidate differs              |
//! | moved    | discrete   | display-only update, no commit, no emit             |
//! | settled  | discrete   | commit + emit, even if the value did not change     |
//! | settled  | continuous | nothing; every change was committed while moving    |
//!
//! "Changed" compares quantized values, so offsets that collapse to the same
//! value under the range's transform never produce duplicate notifications.

use crate::Settle;

/// When values are committed during a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Commit and notify throughout the drag.
    #[default]
    Continuous,
    /// Track a display value during the drag; commit once the strip settles.
    Discrete,
}

impl UpdateMode {
    /// Maps the conventional `is_continuous` flag to a mode.
    #[must_use]
    pub const fn from_continuous(is_continuous: bool) -> Self {
        if is_continuous {
            Self::Continuous
        } else {
            Self::Discrete
        }
    }

    /// Returns `true` for [`UpdateMode::Continuous`].
    #[must_use]
    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::Continuous)
    }
}

/// A user-driven scroll event as seen by the change policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollSignal {
    /// The strip moved while dragging or decelerating.
    Moved,
    /// The strip came to rest.
    Settled(Settle),
}

/// What to do with a candidate value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Decision {
    /// Value to store as the authoritative slider value, if any.
    pub commit: Option<f64>,
    /// Value to show while the gesture is still in flight, if any.
    pub display: Option<f64>,
    /// `true` if the committed value differs from the previous one.
    pub changed: bool,
    /// `true` if observers should be notified.
    pub emit: bool,
}

impl Decision {
    /// A decision that changes nothing.
    pub const NONE: Self = Self {
        commit: None,
        display: None,
        changed: false,
        emit: false,
    };
}

/// Decides whether `candidate` is committed and announced.
///
/// `candidate` must already be quantized; `committed` is the slider's current
/// authoritative value.
#[must_use]
pub fn decide(signal: ScrollSignal, mode: UpdateMode, candidate: f64, committed: f64) -> Decision {
    let changed = candidate != committed;
    match (signal, mode) {
        (ScrollSignal::Moved, UpdateMode::Continuous) => {
            if changed {
                Decision {
                    commit: Some(candidate),
                    display: None,
                    changed: true,
                    emit: true,
                }
            } else {
                Decision::NONE
            }
        }
        (ScrollSignal::Moved, UpdateMode::Discrete) => Decision {
            display: Some(candidate),
            ..Decision::NONE
        },
        (ScrollSignal::Settled(_), UpdateMode::Discrete) => Decision {
            commit: Some(candidate),
            display: None,
            changed,
            emit: true,
        },
        (ScrollSignal::Settled(_), UpdateMode::Continuous) => Decision::NONE,
    }
}
