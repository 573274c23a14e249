#![forbid(unsafe_code)]

//! # fluid-widgets
//!
//! The user-facing fluid slider widget, built on the `fluid-core` geometry
//! and interaction engine.
//!
//! # Role in the fluid slider
//!
//! `fluid-core` is deliberately headless: it knows about circles, positions,
//! and pointer phases, but nothing about color, text, or frames. This crate
//! adds the presentation layer on top.
//!
//! # Primary responsibilities
//!
//! - **Widget state** ([`slider`]): the [`FluidSlider`] type owning the
//!   position model, pointer tracker, and rise/fall transition, with resize,
//!   per-frame tick, and persistable state.
//! - **Frame description** ([`scene`]): backend-neutral draw commands the
//!   host rasterizes, including the assembled blend-outline path.
//! - **Style** ([`style`]): packed ARGB colors and the default palette.
//!
//! # How it fits in the system
//!
//! The host forwards pointer events to [`FluidSlider::process`], advances
//! time with [`FluidSlider::tick`] once per frame, and paints the scene from
//! [`FluidSlider::scene`]. Position changes surface as [`TrackEvent`]s in
//! the returned [`Response`]; no callbacks, no hidden clock.

pub mod scene;
pub mod slider;
pub mod style;

pub use scene::{DrawOp, PathOp, Scene, TextAlign, outline_path};
pub use slider::{FluidSlider, Layout, SliderConfig, SliderPersistState, SliderSize};
pub use style::Color;

pub use fluid_core::event::{PointerEvent, PointerPhase};
pub use fluid_core::tracker::{Response, TrackEvent};
