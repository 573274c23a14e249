#![forbid(unsafe_code)]

//! Value-level frame description for the host compositor.
//!
//! The widget never draws. Each paint it produces a [`Scene`]: an ordered
//! list of [`DrawOp`]s the host rasterizes with whatever canvas it owns.
//! Everything is plain data, so renderer backends and tests consume the same
//! structure.

use crate::style::Color;
use fluid_core::geometry::{Circle, Point, Rect};
use fluid_core::metaball::MetaballOutline;

/// One segment of a filled path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    /// Start a subpath.
    MoveTo(Point),
    /// Cubic Bézier with absolute control points.
    CubicTo { c1: Point, c2: Point, to: Point },
    /// Straight segment.
    LineTo(Point),
    /// Close the subpath.
    Close,
}

/// Horizontal text anchoring relative to the origin point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A single rasterization command, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Filled rounded rectangle.
    RoundRect {
        rect: Rect,
        corner_radius: f32,
        color: Color,
    },
    /// Filled circle.
    Circle { circle: Circle, color: Color },
    /// Filled closed path.
    Path { ops: Vec<PathOp>, color: Color },
    /// Text run. `origin` is the baseline point honoring `align`.
    Text {
        text: String,
        origin: Point,
        size: f32,
        color: Color,
        align: TextAlign,
    },
}

/// An ordered list of draw commands for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub ops: Vec<DrawOp>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a draw op.
    #[inline]
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

/// Assemble a blend outline into path segments.
///
/// The path order matches the outline contract: knob leading anchor, cubic to
/// the bubble, straight across the bubble surface, cubic back down, straight
/// close across the knob surface.
#[must_use]
pub fn outline_path(outline: &MetaballOutline) -> Vec<PathOp> {
    let (from, c1, c2, to) = outline.cubic_to_top();
    let (_, c3, c4, back) = outline.cubic_to_bottom();
    vec![
        PathOp::MoveTo(from),
        PathOp::CubicTo { c1, c2, to },
        PathOp::LineTo(outline.p2b),
        PathOp::CubicTo {
            c1: c3,
            c2: c4,
            to: back,
        },
        PathOp::Close,
    ]
}
