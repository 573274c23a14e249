#![forbid(unsafe_code)]

//! Time-based interpolation for the bubble's rise and fall.
//!
//! [`Transition`] is a single-value tween driven by explicit [`tick`]
//! (`Duration`) calls — there is no internal clock, so tests drive it
//! deterministically. The widget owns one transition for the bubble's
//! vertical offset and retargets it on `BeginTracking`/`EndTracking`.
//!
//! [`tick`]: Animation::tick
//!
//! # Invariants
//!
//! 1. A transition is terminal once `elapsed ≥ duration`; its value then
//!    equals `end` exactly (no easing residue).
//! 2. [`Transition::retarget`] restarts from the **current in-flight value**,
//!    never the original start, so interrupting a fall with a new rise never
//!    snaps visually.
//! 3. A zero duration completes on the first tick and reports `end`
//!    immediately.
//!
//! # Failure Modes
//!
//! - Mid-flight values may overshoot the `start..end` range when using the
//!   [`overshoot`] easing; callers wanting a bounded value clamp at the use
//!   site.

use std::time::Duration;

/// A time-based animation advanced by explicit deltas.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end state.
    fn is_complete(&self) -> bool;

    /// Current animated value.
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);
}

/// An easing function mapping linear progress `t ∈ [0, 1]` to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[inline]
#[must_use]
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic ease-out: fast start, gentle settle. Used for the fall.
#[inline]
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Overshoot easing: flies past the target, then springs back. Used for the
/// rise.
///
/// The classic overshoot curve `(t−1)²·((T+1)(t−1)+T)+1` with tension
/// `T = 2.0`; peaks at roughly 1.1 before settling to exactly 1.0 at `t = 1`.
#[inline]
#[must_use]
pub fn overshoot(t: f32) -> f32 {
    const TENSION: f32 = 2.0;
    let t = t - 1.0;
    t * t * ((TENSION + 1.0) * t + TENSION) + 1.0
}

/// A retargetable scalar tween between two values.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    start: f32,
    end: f32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Transition {
    /// Create a transition from `start` to `end` over `duration`.
    #[must_use]
    pub fn new(start: f32, end: f32, duration: Duration, easing: EasingFn) -> Self {
        Self {
            start,
            end,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// A transition already settled at `value` (no motion).
    #[must_use]
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, Duration::ZERO, linear)
    }

    /// Target value.
    #[inline]
    #[must_use]
    pub fn end(&self) -> f32 {
        self.end
    }

    /// Replace the in-flight motion with a new one toward `end`.
    ///
    /// The new start is the transition's current value, preserving visual
    /// continuity when an animation is interrupted mid-flight.
    pub fn retarget(&mut self, end: f32, duration: Duration, easing: EasingFn) {
        self.start = self.value();
        self.end = end;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
        self.easing = easing;
        #[cfg(feature = "tracing")]
        tracing::trace!(start = self.start, end, ?duration, "transition retargeted");
    }

    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }
}

impl Animation for Transition {
    fn tick(&mut self, dt: Duration) {
        if self.is_complete() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        if self.is_complete() {
            // Terminal: snap to the target, regardless of easing shape.
            return self.end;
        }
        self.start + (self.end - self.start) * (self.easing)(self.progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
