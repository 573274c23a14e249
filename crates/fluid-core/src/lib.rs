#![forbid(unsafe_code)]

//! Core: metaball geometry, position model, and interaction state machine.
//!
//! # Role in the fluid slider
//! `fluid-core` is the pure computational layer. It owns the blend-outline
//! math, the clamped position scalar, the pointer-driven tracking state
//! machine, and the rise/fall tween. Nothing here touches a canvas, a clock,
//! or a platform event loop.
//!
//! # Primary responsibilities
//! - **Geometry**: `Point`/`Rect`/`Circle` float primitives.
//! - **Metaball**: `compute_outline` — the knob/bubble blend outline.
//! - **Position**: clamped `[0, 1]` scalar with single-firing change
//!   detection and the track pixel mapping.
//! - **Tracker**: raw pointer events in, tracking signals out.
//! - **Animation**: easing curves and the retargetable `Transition`.
//!
//! # How it fits in the system
//! The widget layer (`fluid-widgets`) feeds pointer events and frame deltas
//! into this crate and assembles the returned value types into a drawable
//! scene for the host's compositor. Everything here is deterministic and
//! testable without a display or a real clock.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod metaball;
pub mod position;
pub mod tracker;

pub use animation::{Animation, EasingFn, Transition};
pub use event::{PointerEvent, PointerPhase};
pub use geometry::{Circle, Point, Rect};
pub use metaball::{BlendConfig, MetaballOutline, compute_outline};
pub use position::{Position, TrackMetrics};
pub use tracker::{Response, TrackEvent, TrackState, Tracker};
