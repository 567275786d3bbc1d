// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Haptic feedback keyed to committed values.
//!
//! A [`HapticsPolicy`] maps a committed value to an optional
//! [`FeedbackStyle`]; a [`FeedbackGenerator`] is the host's platform feedback
//! capability. [`HapticsTrigger`] connects the two and suppresses no-op
//! commits, so a value never produces feedback twice in a row.
//!
//! ```
//! use understory_level_slider::{FeedbackStyle, HapticsPolicy, ImpactStrength};
//!
//! // A light tap on every multiple of five.
//! let policy = HapticsPolicy::new(|value| {
//!     (value % 5.0 == 0.0).then(|| FeedbackStyle::impact(ImpactStrength::Light, 0.4))
//! });
//! assert!(policy.evaluate(10.0).is_some());
//! assert!(policy.evaluate(11.0).is_none());
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

/// Physical weight of an impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactStrength {
    /// A small, light collision.
    Light,
    /// A moderate collision.
    Medium,
    /// A large, heavy collision.
    Heavy,
    /// A collision between soft, flexible objects.
    Soft,
    /// A collision between hard, inflexible objects.
    Rigid,
}

/// Kind of feedback to play.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeedbackStyle {
    /// A selection tick, as when a picker moves past an item.
    Selection,
    /// A physical impact with a strength and an intensity in `0..=1`.
    Impact {
        /// Weight of the impact.
        strength: ImpactStrength,
        /// Intensity in `0..=1`.
        intensity: f64,
    },
}

impl FeedbackStyle {
    /// An impact with `intensity` clamped into `0..=1`. NaN becomes full intensity.
    #[must_use]
    pub fn impact(strength: ImpactStrength, intensity: f64) -> Self {
        let intensity = if intensity.is_nan() {
            1.0
        } else {
            intensity.clamp(0.0, 1.0)
        };
        Self::Impact {
            strength,
            intensity,
        }
    }

    /// Plays this style on `generator`.
    pub fn dispatch(self, generator: &mut dyn FeedbackGenerator) {
        match self {
            Self::Selection => generator.selection_changed(),
            Self::Impact {
                strength,
                intensity,
            } => generator.impact(strength, intensity),
        }
    }
}

/// The host's feedback capability.
///
/// Implementations forward to the platform's feedback generators; each call
/// plays one feedback event.
pub trait FeedbackGenerator {
    /// Plays a selection tick.
    fn selection_changed(&mut self);

    /// Plays an impact of the given strength at `intensity` in `0..=1`.
    fn impact(&mut self, strength: ImpactStrength, intensity: f64);
}

/// Pure function from a committed value to the feedback it should produce.
///
/// The default policy never produces feedback.
#[derive(Clone, Default)]
pub struct HapticsPolicy {
    trigger: Option<Rc<dyn Fn(f64) -> Option<FeedbackStyle>>>,
}

impl HapticsPolicy {
    /// A policy that never produces feedback.
    #[must_use]
    pub const fn none() -> Self {
        Self { trigger: None }
    }

    /// A policy backed by `trigger`.
    pub fn new(trigger: impl Fn(f64) -> Option<FeedbackStyle> + 'static) -> Self {
        Self {
            trigger: Some(Rc::new(trigger)),
        }
    }

    /// A policy that plays a selection tick on every change.
    #[must_use]
    pub fn selection() -> Self {
        Self::new(|_| Some(FeedbackStyle::Selection))
    }

    /// Returns `true` if the policy can never produce feedback.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.trigger.is_none()
    }

    /// Evaluates the policy for `value`.
    #[must_use]
    pub fn evaluate(&self, value: f64) -> Option<FeedbackStyle> {
        self.trigger.as_ref().and_then(|trigger| trigger(value))
    }
}

impl fmt::Debug for HapticsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HapticsPolicy")
            .field("trigger", &self.trigger.as_ref().map(|_| "Fn(f64)"))
            .finish()
    }
}

/// Dispatches feedback for value commits.
#[derive(Default)]
pub struct HapticsTrigger {
    policy: HapticsPolicy,
    generator: Option<Box<dyn FeedbackGenerator>>,
}

impl HapticsTrigger {
    /// A trigger with the given policy and no generator attached.
    #[must_use]
    pub fn new(policy: HapticsPolicy) -> Self {
        Self {
            policy,
            generator: None,
        }
    }

    /// The active policy.
    #[must_use]
    pub const fn policy(&self) -> &HapticsPolicy {
        &self.policy
    }

    /// Replaces the policy.
    pub fn set_policy(&mut self, policy: HapticsPolicy) {
        self.policy = policy;
    }

    /// Attaches the generator feedback is played on.
    pub fn set_generator(&mut self, generator: impl FeedbackGenerator + 'static) {
        self.generator = Some(Box::new(generator));
    }

    /// Detaches the generator. Policies are still evaluated and reported.
    pub fn clear_generator(&mut self) {
        self.generator = None;
    }

    /// Handles a commit of `value`.
    ///
    /// Unchanged commits are ignored without consulting the policy. Otherwise
    /// the policy's style, if any, is played once on the attached generator
    /// and returned.
    pub fn on_commit(&mut self, value: f64, changed: bool) -> Option<FeedbackStyle> {
        if !changed {
            return None;
        }
        let style = self.policy.evaluate(value)?;
        if let Some(generator) = self.generator.as_deref_mut() {
            style.dispatch(generator);
        }
        Some(style)
    }
}

impl fmt::Debug for HapticsTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HapticsTrigger")
            .field("policy", &self.policy)
            .field("has_generator", &self.generator.is_some())
            .finish()
    }
}
