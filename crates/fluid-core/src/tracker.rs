#![forbid(unsafe_code)]

//! Interaction state machine: raw pointer events in, tracking signals out.
//!
//! [`Tracker`] is a stateful processor that consumes [`PointerEvent`]s,
//! updates the [`Position`] model, and emits [`TrackEvent`]s. The widget
//! layer turns `BeginTracking`/`EndTracking` into the bubble's rise and fall
//! animations.
//!
//! # State Machine
//!
//! Two states: `Idle` and `Tracking`.
//!
//! - `Idle` + down inside the track bounds → `Tracking`. A down outside the
//!   knob's hit circle also snaps the position to the pointer's mapped value.
//! - `Tracking` + move → position shifts by `Δx / max_movement`, anchor
//!   advances to the new x.
//! - `Tracking` + up or cancel → `Idle`. Cancel is treated exactly like up so
//!   the machine can never remain stuck in `Tracking`.
//! - Anything else is not handled.
//!
//! # Invariants
//!
//! 1. The touch anchor exists iff the state is `Tracking` (encoded in the
//!    enum; there is no separate nullable field to drift out of sync).
//! 2. `PositionChanged` is emitted only when the clamped position actually
//!    changed — a move that maps to the same value is silent.
//! 3. Every down that begins tracking emits exactly one `BeginTracking`;
//!    every up/cancel that ends it emits exactly one `EndTracking`.

use crate::event::{PointerEvent, PointerPhase};
use crate::geometry::{Circle, Rect};
use crate::position::{Position, TrackMetrics};

/// Tracking state. The anchor x is the last pointer x consumed by a delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackState {
    /// No interaction in progress.
    Idle,
    /// Pointer held; `anchor_x` is the x of the last consumed event.
    Tracking { anchor_x: f32 },
}

/// Signals produced while processing pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackEvent {
    /// Tracking began (pointer captured).
    BeginTracking,
    /// The clamped position changed to the new value.
    PositionChanged(f32),
    /// Tracking ended (pointer released or cancelled).
    EndTracking,
}

/// Outcome of processing one pointer event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Response {
    /// Whether the event was consumed. Unhandled events should be offered to
    /// other widgets by the host.
    pub handled: bool,
    /// Signals emitted, in order.
    pub events: Vec<TrackEvent>,
}

impl Response {
    fn ignored() -> Self {
        Self::default()
    }

    fn handled(events: Vec<TrackEvent>) -> Self {
        Self {
            handled: true,
            events,
        }
    }
}

/// Pointer-driven slider interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tracker {
    state: TrackState,
}

impl Default for TrackState {
    fn default() -> Self {
        Self::Idle
    }
}

impl Tracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> TrackState {
        self.state
    }

    /// Whether a pointer is currently held.
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackState::Tracking { .. })
    }

    /// The touch anchor x, defined iff tracking.
    #[inline]
    #[must_use]
    pub fn anchor_x(&self) -> Option<f32> {
        match self.state {
            TrackState::Idle => None,
            TrackState::Tracking { anchor_x } => Some(anchor_x),
        }
    }

    /// Force the machine back to idle without emitting events.
    ///
    /// For host-side teardown only; normal interaction ends through up or
    /// cancel, which emit `EndTracking`.
    pub fn reset(&mut self) {
        self.state = TrackState::Idle;
    }

    /// Process one pointer event.
    ///
    /// `bounds` is the touch-accepting region (the bar), `knob` the knob's
    /// current hit circle, `metrics` the pixel mapping. `position` is updated
    /// in place; every effective change is mirrored as a
    /// [`TrackEvent::PositionChanged`].
    pub fn process(
        &mut self,
        event: PointerEvent,
        bounds: Rect,
        knob: Circle,
        metrics: &TrackMetrics,
        position: &mut Position,
    ) -> Response {
        match (self.state, event.phase) {
            (TrackState::Idle, PointerPhase::Down) => {
                if !bounds.contains(event.position()) {
                    return Response::ignored();
                }

                let mut events = Vec::with_capacity(2);
                // A down away from the knob jumps straight to that value.
                if !knob.contains(event.position())
                    && let Some(changed) = position.set(metrics.x_to_position(event.x))
                {
                    events.push(TrackEvent::PositionChanged(changed));
                }

                self.state = TrackState::Tracking { anchor_x: event.x };
                events.push(TrackEvent::BeginTracking);
                #[cfg(feature = "tracing")]
                tracing::debug!(x = event.x, "begin tracking");
                Response::handled(events)
            }
            (TrackState::Tracking { anchor_x }, PointerPhase::Move) => {
                let delta = (event.x - anchor_x) / metrics.max_movement();
                self.state = TrackState::Tracking { anchor_x: event.x };

                let mut events = Vec::with_capacity(1);
                if let Some(changed) = position.shift(delta) {
                    events.push(TrackEvent::PositionChanged(changed));
                }
                Response::handled(events)
            }
            (TrackState::Tracking { .. }, PointerPhase::Up | PointerPhase::Cancel) => {
                self.state = TrackState::Idle;
                #[cfg(feature = "tracing")]
                tracing::debug!(phase = ?event.phase, "end tracking");
                Response::handled(vec![TrackEvent::EndTracking])
            }
            (TrackState::Tracking { .. }, PointerPhase::Down) => {
                // Platforms may resend a down after capture; re-anchor.
                self.state = TrackState::Tracking { anchor_x: event.x };
                Response::handled(Vec::new())
            }
            _ => Response::ignored(),
        }
    }
}
