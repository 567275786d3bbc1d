// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The level slider controller.

use alloc::boxed::Box;
use core::fmt;

use crate::{
    FeedbackGenerator, FeedbackStyle, HapticsPolicy, HapticsTrigger, ScrollCommand, ScrollPhase,
    ScrollSignal, ScrollSurface, ScrollTracker, Settle, Spring, UpdateMode, ValueRange, decide,
    offset_to_value, value_to_offset,
};

/// Construction-time configuration for a [`LevelSlider`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    /// Commit policy during gestures.
    pub mode: UpdateMode,
    /// Animation used when programmatic writes move the strip.
    pub spring: Spring,
    /// Starting value, clamped and quantized into the range.
    pub initial_value: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            mode: UpdateMode::Continuous,
            spring: Spring::CRITICAL,
            initial_value: 0.0,
        }
    }
}

/// What a gesture callback did to the slider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderUpdate {
    /// Authoritative value after the event.
    pub value: f64,
    /// `true` if the event committed a value different from the previous one.
    pub changed: bool,
    /// `true` if observers were notified.
    pub emitted: bool,
    /// Feedback played for the commit, if any.
    pub feedback: Option<FeedbackStyle>,
}

/// A ruler-style slider whose value follows a horizontally scrolling strip.
///
/// The slider owns its [`ScrollSurface`] and is driven by the host forwarding
/// the surface's gesture callbacks:
///
/// - [`begin_drag`](Self::begin_drag) when the user touches the strip,
/// - [`did_scroll`](Self::did_scroll) on every offset change,
/// - [`end_drag`](Self::end_drag) when the user lets go,
/// - [`end_deceleration`](Self::end_deceleration) when a fling comes to rest,
/// - [`relayout`](Self::relayout) when the host bounds change.
///
/// User-driven changes are committed and announced according to the
/// [`UpdateMode`]; programmatic writes through [`set_value`](Self::set_value)
/// are clamped, never announced, and only move the strip while it is idle.
///
/// The slider is single-threaded: it holds reference-counted callbacks and is
/// therefore neither `Send` nor `Sync`. Writes originating elsewhere must be
/// marshalled onto the thread that owns it.
pub struct LevelSlider<S: ScrollSurface> {
    surface: S,
    range: ValueRange,
    value: f64,
    display: Option<f64>,
    mode: UpdateMode,
    spring: Spring,
    tracker: ScrollTracker,
    haptics: HapticsTrigger,
    on_value_changed: Option<Box<dyn FnMut(f64)>>,
}

impl<S: ScrollSurface> LevelSlider<S> {
    /// Creates a continuous slider over `range` starting at `0` (clamped into the range).
    pub fn new(range: ValueRange, surface: S) -> Self {
        Self::with_config(range, surface, SliderConfig::default())
    }

    /// Creates a slider with explicit configuration.
    ///
    /// The surface is positioned on the initial value right away if its
    /// geometry allows it.
    pub fn with_config(range: ValueRange, surface: S, config: SliderConfig) -> Self {
        let value = range.clamp(config.initial_value);
        let mut slider = Self {
            surface,
            range,
            value,
            display: None,
            mode: config.mode,
            spring: config.spring,
            tracker: ScrollTracker::new(),
            haptics: HapticsTrigger::default(),
            on_value_changed: None,
        };
        slider.relayout();
        slider
    }

    /// Returns this slider with `policy` deciding haptic feedback.
    #[must_use]
    pub fn with_haptics(mut self, policy: HapticsPolicy) -> Self {
        self.haptics.set_policy(policy);
        self
    }

    /// Returns this slider playing feedback on `generator`.
    #[must_use]
    pub fn with_feedback(mut self, generator: impl FeedbackGenerator + 'static) -> Self {
        self.haptics.set_generator(generator);
        self
    }

    /// Returns this slider notifying `observer` of user-driven commits.
    #[must_use]
    pub fn on_value_changed(mut self, observer: impl FnMut(f64) + 'static) -> Self {
        self.set_on_value_changed(observer);
        self
    }

    /// Replaces the single value-changed observer.
    pub fn set_on_value_changed(&mut self, observer: impl FnMut(f64) + 'static) {
        self.on_value_changed = Some(Box::new(observer));
    }

    /// Removes the value-changed observer.
    pub fn clear_on_value_changed(&mut self) {
        self.on_value_changed = None;
    }

    /// Replaces the haptics policy.
    pub fn set_haptics(&mut self, policy: HapticsPolicy) {
        self.haptics.set_policy(policy);
    }

    /// Replaces the feedback generator.
    pub fn set_feedback(&mut self, generator: impl FeedbackGenerator + 'static) {
        self.haptics.set_generator(generator);
    }

    /// Shared access to the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Authoritative value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Value to render right now.
    ///
    /// Differs from [`value`](Self::value) only in discrete mode while a
    /// gesture is in flight.
    #[must_use]
    pub fn display_value(&self) -> f64 {
        self.display.unwrap_or(self.value)
    }

    /// Value domain.
    #[must_use]
    pub const fn range(&self) -> &ValueRange {
        &self.range
    }

    /// Commit policy.
    #[must_use]
    pub const fn mode(&self) -> UpdateMode {
        self.mode
    }

    /// Returns `true` in continuous mode.
    #[must_use]
    pub const fn is_continuous(&self) -> bool {
        self.mode.is_continuous()
    }

    /// Current scroll phase.
    #[must_use]
    pub const fn phase(&self) -> ScrollPhase {
        self.tracker.phase()
    }

    /// Animation used for programmatic moves.
    #[must_use]
    pub const fn spring(&self) -> Spring {
        self.spring
    }

    /// Sets the animation used for programmatic moves.
    pub fn set_spring(&mut self, spring: Spring) {
        self.spring = spring;
    }

    /// Sets the commit policy.
    ///
    /// Any pending display value is dropped when switching to continuous mode.
    pub fn set_mode(&mut self, mode: UpdateMode) {
        self.mode = mode;
        if mode.is_continuous() {
            self.display = None;
        }
    }

    /// Sets the commit policy from the conventional `is_continuous` flag.
    pub fn set_continuous(&mut self, is_continuous: bool) {
        self.set_mode(UpdateMode::from_continuous(is_continuous));
    }

    /// Programmatically sets the value.
    ///
    /// The value is clamped and quantized, observers are not notified, and no
    /// feedback is played. While the strip is idle it springs to the new
    /// value; during a gesture the strip is left alone.
    pub fn set_value(&mut self, value: f64) {
        self.value = self.range.clamp(value);
        self.follow_value();
    }

    /// Replaces the value domain, re-clamping the current value.
    pub fn set_range(&mut self, range: ValueRange) {
        self.range = range;
        self.value = self.range.clamp(self.value);
        if let Some(display) = self.display {
            self.display = Some(self.range.clamp(display));
        }
        self.follow_value();
    }

    /// Re-reads the surface geometry and snaps the strip to the current value.
    ///
    /// Hosts call this whenever their bounds change. The move is immediate.
    pub fn relayout(&mut self) {
        let geometry = self.surface.geometry();
        if geometry.is_degenerate() {
            return;
        }
        let offset = value_to_offset(self.value, &self.range, &geometry);
        self.surface.scroll_to(ScrollCommand::immediate(offset));
    }

    /// The user started dragging the strip.
    ///
    /// A programmatic animation still in flight is cancelled.
    pub fn begin_drag(&mut self) {
        let interrupted = self.tracker.begin_drag();
        if interrupted == ScrollPhase::Idle {
            self.surface.cancel_scroll();
        }
    }

    /// The strip's offset changed.
    ///
    /// Ignored unless the user is dragging or the strip is decelerating, and
    /// while the geometry is degenerate.
    pub fn did_scroll(&mut self) -> SliderUpdate {
        let geometry = self.surface.geometry();
        if !self.tracker.accepts_movement(&geometry) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                phase = ?self.tracker.phase(),
                degenerate = geometry.is_degenerate(),
                "ignoring scroll movement"
            );
            return self.unchanged();
        }
        match offset_to_value(self.surface.offset(), &self.range, &geometry) {
            Some(candidate) => self.apply(ScrollSignal::Moved, candidate),
            None => self.unchanged(),
        }
    }

    /// The user released the strip.
    ///
    /// `will_decelerate` reports whether the strip keeps moving on its own.
    pub fn end_drag(&mut self, will_decelerate: bool) -> SliderUpdate {
        match self.tracker.end_drag(will_decelerate) {
            Some(settle) => self.settle(settle),
            None => self.unchanged(),
        }
    }

    /// A fling came to rest.
    pub fn end_deceleration(&mut self) -> SliderUpdate {
        match self.tracker.end_deceleration() {
            Some(settle) => self.settle(settle),
            None => self.unchanged(),
        }
    }

    /// The host cancelled the gesture, e.g. because the touch was taken over.
    ///
    /// Nothing is committed or announced. The in-flight display value is
    /// dropped and the idle strip springs back to the committed value.
    pub fn cancel_gesture(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(phase = ?self.tracker.phase(), "gesture cancelled");
        self.tracker.reset();
        self.display = None;
        self.follow_value();
    }

    fn settle(&mut self, settle: Settle) -> SliderUpdate {
        let geometry = self.surface.geometry();
        let candidate = offset_to_value(self.surface.offset(), &self.range, &geometry)
            .unwrap_or_else(|| self.display_value());
        #[cfg(feature = "tracing")]
        tracing::debug!(?settle, candidate, mode = ?self.mode, "strip settled");
        let update = self.apply(ScrollSignal::Settled(settle), candidate);
        self.display = None;
        update
    }

    fn apply(&mut self, signal: ScrollSignal, candidate: f64) -> SliderUpdate {
        let decision = decide(signal, self.mode, candidate, self.value);
        if decision.display.is_some() {
            self.display = decision.display;
        }
        let mut feedback = None;
        if let Some(value) = decision.commit {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                value,
                previous = self.value,
                changed = decision.changed,
                "committing value"
            );
            self.value = value;
            self.display = None;
            feedback = self.haptics.on_commit(value, decision.changed);
        }
        if decision.emit
            && let Some(observer) = self.on_value_changed.as_mut()
        {
            observer(self.value);
        }
        SliderUpdate {
            value: self.value,
            changed: decision.changed,
            emitted: decision.emit,
            feedback,
        }
    }

    fn follow_value(&mut self) {
        if !self.tracker.allows_programmatic_scroll() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                value = self.value,
                phase = ?self.tracker.phase(),
                "leaving strip to the user"
            );
            return;
        }
        let geometry = self.surface.geometry();
        if geometry.is_degenerate() {
            return;
        }
        let offset = value_to_offset(self.value, &self.range, &geometry);
        #[cfg(feature = "tracing")]
        tracing::debug!(value = self.value, offset, "springing strip to value");
        self.surface.scroll_to(ScrollCommand::spring(offset, self.spring));
    }

    fn unchanged(&self) -> SliderUpdate {
        SliderUpdate {
            value: self.value,
            ..SliderUpdate::default()
        }
    }
}

impl<S: ScrollSurface + fmt::Debug> fmt::Debug for LevelSlider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelSlider")
            .field("surface", &self.surface)
            .field("range", &self.range)
            .field("value", &self.value)
            .field("display", &self.display)
            .field("mode", &self.mode)
            .field("spring", &self.spring)
            .field("tracker", &self.tracker)
            .field("haptics", &self.haptics)
            .field("has_observer", &self.on_value_changed.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Geometry, ImpactStrength, ScrollMotion, Transform};
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Size;

    /// Surface that applies every command instantly and records it.
    #[derive(Debug)]
    struct TestSurface {
        geometry: Geometry,
        offset: f64,
        commands: Vec<ScrollCommand>,
        cancels: usize,
    }

    impl TestSurface {
        fn new(width: f64) -> Self {
            Self {
                geometry: Geometry::fill(Size::new(width, 20.0)),
                offset: 0.0,
                commands: Vec::new(),
                cancels: 0,
            }
        }
    }

    impl ScrollSurface for TestSurface {
        fn geometry(&self) -> Geometry {
            self.geometry
        }

        fn offset(&self) -> f64 {
            self.offset
        }

        fn scroll_to(&mut self, command: ScrollCommand) {
            self.offset = command.offset;
            self.commands.push(command);
        }

        fn cancel_scroll(&mut self) {
            self.cancels += 1;
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<FeedbackStyle>>>);

    impl FeedbackGenerator for Recorder {
        fn selection_changed(&mut self) {
            self.0.borrow_mut().push(FeedbackStyle::Selection);
        }

        fn impact(&mut self, strength: ImpactStrength, intensity: f64) {
            self.0.borrow_mut().push(FeedbackStyle::Impact {
                strength,
                intensity,
            });
        }
    }

    /// `[0, 10]`, rounded, over a 100 unit strip: offset = 10 * value - 50.
    fn rounded_slider(mode: UpdateMode, initial_value: f64) -> LevelSlider<TestSurface> {
        let range = ValueRange::new(0.0, 10.0)
            .unwrap()
            .with_transform(Transform::Round);
        LevelSlider::with_config(
            range,
            TestSurface::new(100.0),
            SliderConfig {
                mode,
                initial_value,
                ..SliderConfig::default()
            },
        )
    }

    fn observe(slider: &mut LevelSlider<TestSurface>) -> Rc<RefCell<Vec<f64>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        slider.set_on_value_changed(move |value| sink.borrow_mut().push(value));
        seen
    }

    /// Moves the strip to where `value` would sit and reports the movement.
    fn drag_to(slider: &mut LevelSlider<TestSurface>, value: f64) -> SliderUpdate {
        let geometry = slider.surface().geometry;
        let offset = value_to_offset(value, slider.range(), &geometry);
        slider.surface_mut().offset = offset;
        slider.did_scroll()
    }

    #[test]
    fn construction_clamps_and_positions() {
        let range = ValueRange::new(10.0, 20.0).unwrap();
        let slider = LevelSlider::new(range, TestSurface::new(100.0));
        assert_eq!(slider.value(), 10.0);
        assert_eq!(slider.surface().offset, -50.0);
        assert_eq!(
            slider.surface().commands.as_slice(),
            &[ScrollCommand::immediate(-50.0)]
        );
    }

    #[test]
    fn construction_with_zero_width_does_not_scroll() {
        let range = ValueRange::new(0.0, 1.0).unwrap();
        let slider = LevelSlider::new(range, TestSurface::new(0.0));
        assert!(slider.surface().commands.is_empty());
    }

    #[test]
    fn idle_write_springs_to_value_without_notifying() {
        let mut slider = rounded_slider(UpdateMode::Continuous, 5.0);
        let seen = observe(&mut slider);

        slider.set_value(7.4);
        assert_eq!(slider.value(), 7.0);
        assert_eq!(slider.surface().offset, 20.0);
        assert_eq!(
            slider.surface().commands.last(),
            Some(&ScrollCommand::spring(20.0, Spring::CRITICAL))
        );
        assert!(seen.borrow().is_empty());

        slider.set_value(99.0);
        assert_eq!(slider.value(), 10.0);
        assert_eq!(slider.surface().offset, 50.0);
    }

    #[test]
    fn write_during_drag_leaves_strip_alone() {
        let mut slider = rounded_slider(UpdateMode::Continuous, 5.0);
        slider.begin_drag();
        drag_to(&mut slider, 3.0);
        let commands = slider.surface().commands.len();

        slider.set_value(8.0);
        assert_eq!(slider.value(), 8.0);
        assert_eq!(slider.surface().offset, -20.0);
        assert_eq!(slider.surface().commands.len(), commands);

        // Same while coasting after a fling.
        slider.end_drag(true);
        assert_eq!(slider.phase(), ScrollPhase::Decelerating);
        slider.set_value(1.0);
        assert_eq!(slider.surface().offset, -20.0);
        assert_eq!(slider.surface().commands.len(), commands);
    }

    #[test]
    fn continuous_drag_emits_once_per_distinct_value() {
        let mut slider = rounded_slider(UpdateMode::Continuous, 5.0);
        let seen = observe(&mut slider);

        slider.begin_drag();
        for value in [0.0, 0.2, 1.0, 1.3, 2.0] {
            drag_to(&mut slider, value);
        }
        assert_eq!(seen.borrow().as_slice(), &[0.0, 1.0, 2.0]);

        // Settling does not repeat the last value.
        let update = slider.end_drag(false);
        assert!(!update.emitted);
        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(slider.value(), 2.0);
    }

    #[test]
    fn discrete_drag_emits_final_value_on_release() {
        let mut slider = rounded_slider(UpdateMode::Discrete, 5.0);
        let seen = observe(&mut slider);

        slider.begin_drag();
        for value in [4.0, 2.0, 6.6] {
            let update = drag_to(&mut slider, value);
            assert!(!update.emitted);
        }
        assert_eq!(slider.value(), 5.0);
        assert_eq!(slider.display_value(), 7.0);
        assert!(seen.borrow().is_empty());

        let update = slider.end_drag(false);
        assert!(update.emitted && update.changed);
        assert_eq!(seen.borrow().as_slice(), &[7.0]);
        assert_eq!(slider.value(), 7.0);
        assert_eq!(slider.display_value(), 7.0);
    }

    #[test]
    fn discrete_fling_commits_when_deceleration_ends() {
        let mut slider = rounded_slider(UpdateMode::Discrete, 5.0);
        let seen = observe(&mut slider);

        slider.begin_drag();
        drag_to(&mut slider, 3.0);
        assert!(!slider.end_drag(true).emitted);
        drag_to(&mut slider, 1.0);
        assert!(seen.borrow().is_empty());

        let update = slider.end_deceleration();
        assert!(update.emitted);
        assert_eq!(seen.borrow().as_slice(), &[1.0]);
    }

    #[test]
    fn discrete_settle_without_change_emits_but_stays_quiet() {
        let recorder = Recorder::default();
        let mut slider = rounded_slider(UpdateMode::Discrete, 5.0)
            .with_haptics(HapticsPolicy::selection())
            .with_feedback(recorder.clone());
        let seen = observe(&mut slider);

        slider.begin_drag();
        drag_to(&mut slider, 5.2);
        let update = slider.end_drag(false);
        assert!(update.emitted);
        assert!(!update.changed);
        assert_eq!(update.feedback, None);
        assert_eq!(seen.borrow().as_slice(), &[5.0]);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn haptics_fire_once_per_matching_commit() {
        let recorder = Recorder::default();
        let mut slider = rounded_slider(UpdateMode::Continuous, 3.0)
            .with_haptics(HapticsPolicy::new(|value| {
                (value % 5.0 == 0.0).then(|| FeedbackStyle::impact(ImpactStrength::Light, 0.4))
            }))
            .with_feedback(recorder.clone());

        slider.begin_drag();
        let fired: Vec<_> = [3.0, 4.0, 5.0, 5.1, 6.0, 7.0]
            .into_iter()
            .filter_map(|value| drag_to(&mut slider, value).feedback)
            .collect();
        slider.end_drag(false);

        assert_eq!(fired.len(), 1);
        assert_eq!(
            recorder.0.borrow().as_slice(),
            &[FeedbackStyle::Impact {
                strength: ImpactStrength::Light,
                intensity: 0.4
            }]
        );
    }

    #[test]
    fn halfway_offset_commits_even_neighbour() {
        let range = ValueRange::new(-45.0, 45.0)
            .unwrap()
            .with_transform(Transform::RoundTiesEven);
        let mut slider = LevelSlider::new(range, TestSurface::new(90.0));
        slider.begin_drag();
        slider.surface_mut().offset = 2.5;
        let update = slider.did_scroll();
        assert_eq!(update.value, 2.0);
        assert_eq!(slider.value(), 2.0);
    }

    #[test]
    fn movement_outside_a_gesture_is_ignored() {
        let mut slider = rounded_slider(UpdateMode::Continuous, 5.0);
        let seen = observe(&mut slider);
        // A programmatic animation reports movement while idle.
        let update = drag_to(&mut slider, 9.0);
        assert_eq!(
            update,
            SliderUpdate {
                value: 5.0,
                ..SliderUpdate::default()
            }
        );
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn zero_width_geometry_suspends_mapping() {
        let mut slider = rounded_slider(UpdateMode::Continuous, 5.0);
        slider.begin_drag();
        slider.surface_mut().geometry = Geometry::ZERO;
        slider.surface_mut().offset = 30.0;
        assert!(!slider.did_scroll().changed);
        assert_eq!(slider.value(), 5.0);

        slider.surface_mut().geometry = Geometry::fill(Size::new(100.0, 20.0));
        assert!(slider.did_scroll().changed);
        assert_eq!(slider.value(), 8.0);
    }

    #[test]
    fn drag_cancels_programmatic_animation() {
        let mut slider = rounded_slider(UpdateMode::Continuous, 5.0);
        slider.set_value(9.0);
        slider.begin_drag();
        assert_eq!(slider.surface().cancels, 1);

        // Regrabbing a fling has nothing to cancel.
        slider.end_drag(true);
        slider.begin_drag();
        assert_eq!(slider.surface().cancels, 1);
    }

    #[test]
    fn range_change_reclamps_and_repositions() {
        let mut slider = rounded_slider(UpdateMode::Continuous, 8.0);
        slider.set_range(ValueRange::new(0.0, 4.0).unwrap());
        assert_eq!(slider.value(), 4.0);
        // Upper bound sits at the trailing end of the strip.
        assert_eq!(slider.surface().offset, 50.0);
        assert!(matches!(
            slider.surface().commands.last().map(|c| c.motion),
            Some(ScrollMotion::Spring(_))
        ));
    }

    #[test]
    fn range_change_mid_gesture_reclamps_without_moving_strip() {
        let mut slider = rounded_slider(UpdateMode::Continuous, 5.0);
        slider.begin_drag();
        drag_to(&mut slider, 8.0);
        let commands = slider.surface().commands.len();

        slider.set_range(ValueRange::new(0.0, 4.0).unwrap());
        assert_eq!(slider.value(), 4.0);
        assert_eq!(slider.surface().offset, 30.0);
        assert_eq!(slider.surface().commands.len(), commands);

        // A discrete fling keeps its display value inside the new bounds.
        let mut slider = rounded_slider(UpdateMode::Discrete, 5.0);
        slider.begin_drag();
        drag_to(&mut slider, 8.0);
        slider.end_drag(true);
        assert_eq!(slider.phase(), ScrollPhase::Decelerating);
        let commands = slider.surface().commands.len();

        slider.set_range(ValueRange::new(0.0, 4.0).unwrap());
        assert_eq!(slider.value(), 4.0);
        assert_eq!(slider.display_value(), 4.0);
        assert_eq!(slider.surface().offset, 30.0);
        assert_eq!(slider.surface().commands.len(), commands);
    }

    #[test]
    fn settle_with_zero_width_commits_display_value() {
        let mut slider = rounded_slider(UpdateMode::Discrete, 5.0);
        let seen = observe(&mut slider);
        slider.begin_drag();
        drag_to(&mut slider, 7.0);
        assert_eq!(slider.display_value(), 7.0);

        slider.surface_mut().geometry = Geometry::ZERO;
        let update = slider.end_drag(false);
        assert!(update.emitted && update.changed);
        assert_eq!(slider.value(), 7.0);
        assert_eq!(seen.borrow().as_slice(), &[7.0]);
    }

    #[test]
    fn cancelled_gesture_returns_to_committed_value() {
        let mut slider = rounded_slider(UpdateMode::Discrete, 5.0);
        let seen = observe(&mut slider);
        slider.begin_drag();
        drag_to(&mut slider, 9.0);
        assert_eq!(slider.display_value(), 9.0);

        slider.cancel_gesture();
        assert_eq!(slider.phase(), ScrollPhase::Idle);
        assert_eq!(slider.value(), 5.0);
        assert_eq!(slider.display_value(), 5.0);
        assert_eq!(
            slider.surface().commands.last(),
            Some(&ScrollCommand::spring(0.0, Spring::CRITICAL))
        );

        // Later movement is programmatic and a release has nothing to settle.
        assert!(!drag_to(&mut slider, 2.0).emitted);
        assert!(!slider.end_drag(false).emitted);
        assert!(seen.borrow().is_empty());

        slider.set_value(3.0);
        assert_eq!(slider.surface().offset, -20.0);
    }

    #[test]
    fn relayout_snaps_to_value_for_new_geometry() {
        let mut slider = rounded_slider(UpdateMode::Continuous, 7.0);
        slider.surface_mut().geometry = Geometry::fill(Size::new(200.0, 20.0));
        slider.relayout();
        assert_eq!(slider.value(), 7.0);
        assert_eq!(slider.surface().offset, 40.0);
        assert_eq!(
            slider.surface().commands.last(),
            Some(&ScrollCommand::immediate(40.0))
        );
    }

    #[test]
    fn switching_mode_mid_drag_drops_display_value() {
        let mut slider = rounded_slider(UpdateMode::Discrete, 5.0);
        assert!(!slider.is_continuous());
        slider.begin_drag();
        drag_to(&mut slider, 9.0);
        assert_eq!(slider.display_value(), 9.0);

        slider.set_continuous(true);
        assert_eq!(slider.display_value(), 5.0);
        assert!(drag_to(&mut slider, 9.0).emitted);
    }
}
