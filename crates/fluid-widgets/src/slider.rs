#![forbid(unsafe_code)]

//! The fluid slider widget.
//!
//! [`FluidSlider`] wires the `fluid-core` pieces together: pointer events go
//! through the [`Tracker`], the position model moves the knob circle, the
//! rise/fall [`Transition`] moves the bubble circle, and every paint the
//! metaball engine recomputes the blend outline between them. [`scene`]
//! returns the resulting frame as plain draw commands for the host's
//! compositor.
//!
//! The widget owns no clock and no canvas. The host calls
//! [`tick`](FluidSlider::tick) (or [`advance`](FluidSlider::advance) with an
//! explicit delta in tests) once per frame and rasterizes the scene.
//!
//! [`scene`]: FluidSlider::scene

use std::time::Duration;

use web_time::Instant;

use fluid_core::animation::{Animation, Transition, ease_out, overshoot};
use fluid_core::event::PointerEvent;
use fluid_core::geometry::{Circle, Point, Rect};
use fluid_core::metaball::{BlendConfig, compute_outline};
use fluid_core::position::{Position, TrackMetrics};
use fluid_core::tracker::{Response, TrackEvent, Tracker};

use crate::scene::{DrawOp, Scene, TextAlign, outline_path};
use crate::style::Color;

// Design-space constants at scale 1.0 (logical pixels).
const BAR_INNER_OFFSET: f32 = 2.0;
const BAR_CORNER_RADIUS: f32 = 4.0;
const TEXT_SIZE: f32 = 12.0;
const TEXT_OFFSET: f32 = 8.0;
/// Bubble rise distance, in knob diameters.
const RISE_FACTOR: f32 = 1.1;
/// Blend cut-off distance, in knob diameters.
const MAX_BLEND_FACTOR: f32 = 2.0;
const DEFAULT_DURATION_MS: u64 = 400;

/// Knob size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum SliderSize {
    /// 56-pixel knob at scale 1.
    #[default]
    Normal,
    /// 40-pixel knob at scale 1.
    Small,
}

impl SliderSize {
    /// Knob diameter in logical pixels.
    #[inline]
    #[must_use]
    pub const fn diameter(self) -> f32 {
        match self {
            SliderSize::Normal => 56.0,
            SliderSize::Small => 40.0,
        }
    }
}

/// User-facing slider configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    /// Label at the left end of the bar.
    pub start_text: String,
    /// Label at the right end of the bar.
    pub end_text: String,
    /// Bubble label override. `None` shows `round(position · 100)`.
    pub bubble_text: Option<String>,
    /// Label text size in logical pixels.
    pub text_size: f32,
    pub bar_color: Color,
    pub bubble_color: Color,
    pub bar_text_color: Color,
    pub bubble_text_color: Color,
    /// Rise/fall animation duration.
    pub duration: Duration,
    pub size: SliderSize,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            start_text: "0".to_string(),
            end_text: "100".to_string(),
            bubble_text: None,
            text_size: TEXT_SIZE,
            bar_color: Color::BAR,
            bubble_color: Color::WHITE,
            bar_text_color: Color::WHITE,
            bubble_text_color: Color::BLACK,
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            size: SliderSize::Normal,
        }
    }
}

/// Resolved per-size, per-density geometry. Recomputed on resize only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    /// The bar occupies the lower half of the widget; the upper half is
    /// headroom for the rising bubble.
    pub bar: Rect,
    pub knob_diameter: f32,
    pub metrics: TrackMetrics,
    /// Resting knob (and bubble) center y.
    pub knob_center_y: f32,
    /// Full bubble travel in pixels.
    pub rise_distance: f32,
    pub blend: BlendConfig,
    pub text_size: f32,
}

impl Layout {
    fn compute(config: &SliderConfig, width: f32, height: f32, scale: f32) -> Self {
        let knob_diameter = config.size.diameter() * scale;
        let bar = Rect::new(0.0, height / 2.0, width, height / 2.0);
        let inner_offset = BAR_INNER_OFFSET * scale;
        Self {
            width,
            height,
            scale,
            bar,
            knob_diameter,
            metrics: TrackMetrics::new(width, knob_diameter, inner_offset),
            knob_center_y: bar.top() + knob_diameter / 2.0,
            rise_distance: knob_diameter * RISE_FACTOR,
            blend: BlendConfig {
                max_distance: knob_diameter * MAX_BLEND_FACTOR,
                corner_radius: BAR_CORNER_RADIUS * scale,
                ..BlendConfig::default()
            },
            text_size: config.text_size * scale,
        }
    }
}

/// The interactive fluid slider.
#[derive(Debug, Clone)]
pub struct FluidSlider {
    config: SliderConfig,
    layout: Layout,
    position: Position,
    tracker: Tracker,
    /// Bubble vertical offset in pixels, 0 = resting on the knob.
    rise: Transition,
    last_tick: Option<Instant>,
}

impl Default for FluidSlider {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

impl FluidSlider {
    /// Create a slider with the given configuration, centered at 0.5.
    ///
    /// Call [`resize`](FluidSlider::resize) before the first paint; until
    /// then the layout is the design-space default (224×112 at scale 1).
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        let layout = Layout::compute(&config, 224.0, 112.0, 1.0);
        Self {
            config,
            layout,
            position: Position::new(0.5),
            tracker: Tracker::new(),
            rise: Transition::settled(0.0),
            last_tick: None,
        }
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Mutable configuration access for labels and colors.
    ///
    /// Size and text size changes take effect on the next
    /// [`resize`](FluidSlider::resize).
    #[inline]
    pub fn config_mut(&mut self) -> &mut SliderConfig {
        &mut self.config
    }

    /// Current layout.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Current position in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position.get()
    }

    /// Set the position, clamped to `[0, 1]`.
    ///
    /// Returns `Some(clamped)` when the effective value changed, mirroring
    /// the position listener's single-firing semantics. Non-finite input is
    /// ignored.
    pub fn set_position(&mut self, value: f32) -> Option<f32> {
        self.position.set(value)
    }

    /// Set the animation duration in milliseconds.
    ///
    /// A negative value is taken by absolute value rather than rejected.
    pub fn set_duration_ms(&mut self, ms: i64) {
        self.config.duration = Duration::from_millis(ms.unsigned_abs());
    }

    /// Whether the pointer is currently captured.
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Whether the bubble is mid-rise or mid-fall.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.rise.is_complete()
    }

    /// Recompute the layout for a new viewport.
    ///
    /// The bubble's current travel ratio carries over so a mid-animation
    /// resize does not snap.
    pub fn resize(&mut self, width: f32, height: f32, scale: f32) {
        let old_distance = self.layout.rise_distance;
        let (value_ratio, target_ratio) = if old_distance > 0.0 {
            (
                self.rise.value() / old_distance,
                self.rise.end() / old_distance,
            )
        } else {
            (0.0, 0.0)
        };

        self.layout = Layout::compute(&self.config, width, height, scale);

        let animating = self.is_animating();
        let new_distance = self.layout.rise_distance;
        self.rise = Transition::settled(value_ratio * new_distance);
        if animating {
            self.rise.retarget(
                target_ratio * new_distance,
                self.config.duration,
                if target_ratio > value_ratio {
                    overshoot
                } else {
                    ease_out
                },
            );
        }
    }

    /// Process one pointer event.
    ///
    /// Begin/end tracking signals also start the bubble's rise and fall; a
    /// transition interrupted mid-flight continues from its current offset.
    pub fn process(&mut self, event: PointerEvent) -> Response {
        let knob = self.knob_circle();
        let response = self.tracker.process(
            event,
            self.layout.bar,
            knob,
            &self.layout.metrics,
            &mut self.position,
        );

        for ev in &response.events {
            match ev {
                TrackEvent::BeginTracking => {
                    self.rise
                        .retarget(self.layout.rise_distance, self.config.duration, overshoot);
                }
                TrackEvent::EndTracking => {
                    self.rise.retarget(0.0, self.config.duration, ease_out);
                }
                TrackEvent::PositionChanged(_) => {}
            }
        }
        response
    }

    /// Advance animations using a wall-clock instant.
    ///
    /// The first call establishes the reference point and advances nothing.
    pub fn tick(&mut self, now: Instant) {
        let dt = match self.last_tick {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);
        self.advance(dt);
    }

    /// Advance animations by an explicit delta. Deterministic; used directly
    /// in tests.
    pub fn advance(&mut self, dt: Duration) {
        self.rise.tick(dt);
    }

    /// Bubble travel progress: 0 = resting, 1 = fully risen.
    ///
    /// Clamped even while the overshoot easing carries the raw offset past
    /// the rise distance.
    #[must_use]
    pub fn rise_ratio(&self) -> f32 {
        if self.layout.rise_distance <= 0.0 {
            return 0.0;
        }
        (self.rise.value() / self.layout.rise_distance).clamp(0.0, 1.0)
    }

    /// The knob circle for the current frame.
    #[must_use]
    pub fn knob_circle(&self) -> Circle {
        Circle::new(
            Point::new(
                self.layout.metrics.position_to_x(self.position.get()),
                self.layout.knob_center_y,
            ),
            self.layout.knob_diameter / 2.0,
        )
    }

    /// The bubble circle for the current frame.
    ///
    /// The raw (unclamped) transition value is used for the center so the
    /// overshoot easing visibly carries the bubble past its resting height.
    #[must_use]
    pub fn bubble_circle(&self) -> Circle {
        let knob = self.knob_circle();
        Circle::new(
            Point::new(knob.center.x, knob.center.y - self.rise.value()),
            self.layout.knob_diameter / 2.0,
        )
    }

    /// The bubble label: the override if set, else `round(position · 100)`.
    #[must_use]
    pub fn bubble_text(&self) -> String {
        match &self.config.bubble_text {
            Some(text) => text.clone(),
            None => format!("{}", (self.position.get() * 100.0).round() as i32),
        }
    }

    /// Compose the current frame.
    ///
    /// Paint order: bar, bar labels, knob, bubble, blend outline, bubble
    /// label. The outline paints over the circles so its curved flanks seal
    /// the seam between them. It is recomputed here every frame from the
    /// live circles; nothing is cached across frames.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let layout = &self.layout;
        let knob = self.knob_circle();
        let bubble = self.bubble_circle();

        let mut scene = Scene::new();
        scene.push(DrawOp::RoundRect {
            rect: layout.bar,
            corner_radius: BAR_CORNER_RADIUS * layout.scale,
            color: self.config.bar_color,
        });

        let label_baseline = layout.knob_center_y + layout.text_size / 2.0;
        scene.push(DrawOp::Text {
            text: self.config.start_text.clone(),
            origin: Point::new(layout.bar.left() + TEXT_OFFSET * layout.scale, label_baseline),
            size: layout.text_size,
            color: self.config.bar_text_color,
            align: TextAlign::Left,
        });
        scene.push(DrawOp::Text {
            text: self.config.end_text.clone(),
            origin: Point::new(
                layout.bar.right() - TEXT_OFFSET * layout.scale,
                label_baseline,
            ),
            size: layout.text_size,
            color: self.config.bar_text_color,
            align: TextAlign::Right,
        });

        scene.push(DrawOp::Circle {
            circle: knob,
            color: self.config.bubble_color,
        });
        scene.push(DrawOp::Circle {
            circle: bubble,
            color: self.config.bubble_color,
        });

        if let Some(outline) =
            compute_outline(knob, bubble, &layout.blend, self.rise_ratio(), Some(layout.bar))
        {
            scene.push(DrawOp::Path {
                ops: outline_path(&outline),
                color: self.config.bubble_color,
            });
        }

        scene.push(DrawOp::Text {
            text: self.bubble_text(),
            origin: Point::new(bubble.center.x, bubble.center.y + layout.text_size / 3.0),
            size: layout.text_size,
            color: self.config.bubble_text_color,
            align: TextAlign::Center,
        });

        scene
    }
}

// ============================================================================
// Stateful Persistence
// ============================================================================

/// Persistable slider state: the flat user-facing record that survives
/// sessions. Derived/cached geometry never persists.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SliderPersistState {
    pub position: f32,
    pub start_text: String,
    pub end_text: String,
    pub text_size: f32,
    pub bubble_color: Color,
    pub bar_color: Color,
    pub bar_text_color: Color,
    pub bubble_text_color: Color,
    pub duration_ms: u64,
}

impl FluidSlider {
    /// Capture the persistable state.
    #[must_use]
    pub fn save_state(&self) -> SliderPersistState {
        SliderPersistState {
            position: self.position.get(),
            start_text: self.config.start_text.clone(),
            end_text: self.config.end_text.clone(),
            text_size: self.config.text_size,
            bubble_color: self.config.bubble_color,
            bar_color: self.config.bar_color,
            bar_text_color: self.config.bar_text_color,
            bubble_text_color: self.config.bubble_text_color,
            duration_ms: self.config.duration.as_millis() as u64,
        }
    }

    /// Restore a previously captured state.
    ///
    /// The position goes through the usual clamp; interaction and animation
    /// state reset to resting.
    pub fn restore_state(&mut self, state: SliderPersistState) {
        self.config.start_text = state.start_text;
        self.config.end_text = state.end_text;
        self.config.text_size = state.text_size;
        self.config.bubble_color = state.bubble_color;
        self.config.bar_color = state.bar_color;
        self.config.bar_text_color = state.bar_text_color;
        self.config.bubble_text_color = state.bubble_text_color;
        self.config.duration = Duration::from_millis(state.duration_ms);
        self.position = Position::new(state.position);
        self.tracker.reset();
        self.rise = Transition::settled(0.0);
        self.layout = Layout::compute(
            &self.config,
            self.layout.width,
            self.layout.height,
            self.layout.scale,
        );
    }
}
