// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a level slider through simulated gestures.
//!
//! The slider covers `[-45, 45]` degrees rounded to the nearest even whole
//! degree, and plays a light impact on every multiple of five. A simulated
//! scroll view animates programmatic moves with a critically damped spring and
//! reports every frame back to the slider, just like a real host would.
//!
//! Run:
//! - `cargo run -p understory_demos --example level_slider_drag`
//! - `RUST_LOG=trace cargo run -p understory_demos --example level_slider_drag`

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_level_slider::{
    FeedbackGenerator, FeedbackStyle, Geometry, HapticsPolicy, ImpactStrength, LevelSlider,
    ScrollCommand, ScrollMotion, ScrollSurface, SliderConfig, Spring, Transform, UpdateMode,
    ValueRange,
};

const FRAME: f64 = 1.0 / 60.0;

/// A horizontal scroll view with a pending spring animation.
#[derive(Debug)]
struct SimulatedScrollView {
    bounds: Size,
    offset: f64,
    animation: Option<Animation>,
}

#[derive(Clone, Copy, Debug)]
struct Animation {
    from: f64,
    to: f64,
    spring: Spring,
    elapsed: f64,
}

impl Animation {
    /// Critically damped response starting at rest.
    fn sample(&self) -> f64 {
        let omega = 8.0 / self.spring.duration;
        let t = self.elapsed;
        let decay = (1.0 + omega * t) * (-omega * t).exp();
        self.to + (self.from - self.to) * decay
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.spring.duration
    }
}

impl SimulatedScrollView {
    fn new(width: f64) -> Self {
        Self {
            bounds: Size::new(width, 50.0),
            offset: 0.0,
            animation: None,
        }
    }

    /// Advances the animation by one frame. Returns `true` if the offset moved.
    fn tick(&mut self) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        animation.elapsed += FRAME;
        if animation.is_done() {
            self.offset = animation.to;
            self.animation = None;
        } else {
            self.offset = animation.sample();
        }
        true
    }
}

impl ScrollSurface for SimulatedScrollView {
    fn geometry(&self) -> Geometry {
        Geometry::fill(self.bounds)
    }

    fn offset(&self) -> f64 {
        self.offset
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        match command.motion {
            ScrollMotion::Immediate => {
                self.offset = command.offset;
                self.animation = None;
            }
            ScrollMotion::Spring(spring) => {
                self.animation = Some(Animation {
                    from: self.offset,
                    to: command.offset,
                    spring,
                    elapsed: 0.0,
                });
            }
        }
    }

    fn cancel_scroll(&mut self) {
        self.animation = None;
    }
}

/// Prints feedback instead of buzzing.
#[derive(Debug)]
struct ConsoleFeedback;

impl FeedbackGenerator for ConsoleFeedback {
    fn selection_changed(&mut self) {
        println!("    *tick*");
    }

    fn impact(&mut self, strength: ImpactStrength, intensity: f64) {
        println!("    *impact {strength:?} @ {intensity:.1}*");
    }
}

/// Drags the strip through `offsets`, reporting each frame.
fn drag(slider: &mut LevelSlider<SimulatedScrollView>, offsets: &[f64], fling: bool) {
    slider.begin_drag();
    for &offset in offsets {
        slider.surface_mut().offset = offset;
        let update = slider.did_scroll();
        println!(
            "  offset {offset:>6.1} -> value {:>5.1} (display {:>5.1}){}",
            update.value,
            slider.display_value(),
            if update.emitted { " [changed]" } else { "" }
        );
    }
    slider.end_drag(fling);
    if fling {
        // Coast a little further before coming to rest.
        let last = offsets.last().copied().unwrap_or_default();
        slider.surface_mut().offset = last + 4.0;
        slider.did_scroll();
        slider.end_deceleration();
    }
}

/// Runs the surface's animation to completion, reporting each frame.
fn settle_animation(slider: &mut LevelSlider<SimulatedScrollView>) {
    let mut frames = 0;
    while slider.surface_mut().tick() {
        // Programmatic movement while idle never changes the value.
        slider.did_scroll();
        frames += 1;
    }
    println!(
        "  animated for {frames} frames to offset {:.1}",
        slider.surface().offset
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let range = ValueRange::new(-45.0, 45.0)
        .expect("degree range is valid")
        .with_transform(Transform::RoundTiesEven);
    let haptics = HapticsPolicy::new(|value| {
        (value % 5.0 == 0.0).then(|| FeedbackStyle::impact(ImpactStrength::Light, 0.4))
    });

    let mut slider = LevelSlider::with_config(
        range,
        SimulatedScrollView::new(180.0),
        SliderConfig {
            mode: UpdateMode::Continuous,
            ..SliderConfig::default()
        },
    )
    .with_haptics(haptics)
    .with_feedback(ConsoleFeedback)
    .on_value_changed(|value| println!("  observer: {value}"));

    println!("continuous drag:");
    drag(&mut slider, &[2.0, 5.0, 9.0, 10.0, 14.0, 20.0], false);

    println!("discrete fling:");
    slider.set_continuous(false);
    drag(&mut slider, &[16.0, 8.0, 0.0, -12.0], true);
    println!("  settled at {}", slider.value());

    slider.set_continuous(true);
    for target in [0.0, 0.5, 1.0] {
        println!("button {target}:");
        slider.set_value(target);
        settle_animation(&mut slider);
        println!("  value {}", slider.value());
    }

    println!("button 30 interrupted by a drag:");
    slider.set_value(30.0);
    slider.surface_mut().tick();
    drag(&mut slider, &[-30.0], false);
    println!("  value {}", slider.value());
}
