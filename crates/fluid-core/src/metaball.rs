#![forbid(unsafe_code)]

//! Metaball geometry engine.
//!
//! [`compute_outline`] produces the closed, smoothly-curved outline that makes
//! two circles appear to merge into one organic blob: two cubic Bézier
//! "meniscus" curves joined by straight segments across the circle surfaces.
//! The slider uses it to connect the knob with the floating value bubble while
//! the bubble rises and falls.
//!
//! The function is pure and total: degenerate inputs (zero radius, excessive
//! separation, one circle contained in the other) are ordinary inputs that
//! yield `None`, never an error. The containment guard is ordered before any
//! division by the center distance, so `d == 0` can never reach a division.
//!
//! # Invariants
//!
//! 1. `compute_outline` is idempotent: identical inputs produce identical
//!    outlines (no hidden state, no allocation).
//! 2. A returned outline's anchor pairs are symmetric about the line through
//!    the two centers (before the optional track clamp).
//! 3. Angle signs follow y-down screen coordinates; they are never
//!    "corrected", because the curve's handedness depends on them.
//!
//! # Failure Modes
//!
//! None. Every input has a defined, non-panicking outcome.

use crate::geometry::{Circle, Point, Rect};
use std::f32::consts::{FRAC_PI_2, PI};

/// Shape parameters for the blend outline.
///
/// Immutable for a given render pass; the widget scales the pixel-valued
/// fields by display density on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendConfig {
    /// Center distance beyond which no blend is drawn, in pixels.
    pub max_distance: f32,
    /// Spread factor for the bubble-side (far circle) tangents. Constant.
    pub top_spread: f32,
    /// Knob-side spread factor when the bubble is resting (rise ratio 0).
    pub bottom_start_spread: f32,
    /// Knob-side spread factor when the bubble is fully risen (rise ratio 1).
    pub bottom_end_spread: f32,
    /// Multiplier on the Bézier handle length.
    pub handle_rate: f32,
    /// Track corner radius, in pixels. Keeps the clamped blob off the
    /// rounded corners of the bar.
    pub corner_radius: f32,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            max_distance: 112.0,
            top_spread: 0.46,
            bottom_start_spread: 0.25,
            bottom_end_spread: 0.1,
            handle_rate: 2.4,
            corner_radius: 4.0,
        }
    }
}

/// A closed blend outline: four anchor points and four control offsets.
///
/// The path is assembled as `p1a` → cubic to `p2a` → line to `p2b` → cubic to
/// `p1b` → line closing back to `p1a`. Control points are `anchor + offset`;
/// [`MetaballOutline::cubic_to_top`] and [`MetaballOutline::cubic_to_bottom`]
/// return the two curves in that absolute form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetaballOutline {
    /// Knob-side anchor, leading edge.
    pub p1a: Point,
    /// Bubble-side anchor, leading edge.
    pub p2a: Point,
    /// Bubble-side anchor, trailing edge.
    pub p2b: Point,
    /// Knob-side anchor, trailing edge.
    pub p1b: Point,
    /// Control offset at `p1a`.
    pub sp1: Point,
    /// Control offset at `p2a`.
    pub sp2: Point,
    /// Control offset at `p2b`.
    pub sp3: Point,
    /// Control offset at `p1b`.
    pub sp4: Point,
}

impl MetaballOutline {
    /// The knob-to-bubble curve: `(from, ctrl1, ctrl2, to)` with absolute
    /// control points.
    #[inline]
    pub fn cubic_to_top(&self) -> (Point, Point, Point, Point) {
        (self.p1a, self.p1a + self.sp1, self.p2a + self.sp2, self.p2a)
    }

    /// The bubble-to-knob curve: `(from, ctrl1, ctrl2, to)` with absolute
    /// control points.
    #[inline]
    pub fn cubic_to_bottom(&self) -> (Point, Point, Point, Point) {
        (self.p2b, self.p2b + self.sp3, self.p1b + self.sp4, self.p1b)
    }

    /// The four anchors in path order.
    #[inline]
    pub fn anchors(&self) -> [Point; 4] {
        [self.p1a, self.p2a, self.p2b, self.p1b]
    }
}

/// Compute the blend outline between `knob` (`circle1`) and `bubble`
/// (`circle2`).
///
/// `rise_ratio` is the bubble's normalized vertical progress (0 = resting,
/// 1 = fully risen); it interpolates the knob-side spread factor and drives
/// the optional track clamp. When `track` is supplied, the knob-side anchors
/// are pinned inside the track's horizontal bounds and pulled toward its top
/// edge proportionally to `rise_ratio`, so the blob grows out of the bar
/// instead of floating in front of it.
///
/// Returns `None` when there is nothing to blend: either radius is zero, the
/// centers are farther apart than `config.max_distance`, or one circle is
/// degenerate-contained in the other (`d ≤ |r1 − r2|`).
#[must_use]
pub fn compute_outline(
    knob: Circle,
    bubble: Circle,
    config: &BlendConfig,
    rise_ratio: f32,
    track: Option<Rect>,
) -> Option<MetaballOutline> {
    let r1 = knob.radius;
    let r2 = bubble.radius;
    if r1 == 0.0 || r2 == 0.0 {
        return None;
    }

    let d = knob.center.distance(bubble.center);
    // Containment guard must precede every division by d.
    if d > config.max_distance || d <= (r1 - r2).abs() {
        #[cfg(feature = "tracing")]
        tracing::trace!(d, r1, r2, "no blend: circles out of range");
        return None;
    }

    // Contact half-angles from circle-circle intersection (law of cosines).
    // Separated-but-blending circles have no intersection; both collapse to 0.
    let (u1, u2) = if d < r1 + r2 {
        let (sqr_r1, sqr_r2, sqr_d) = (r1 * r1, r2 * r2, d * d);
        (
            ((sqr_r1 + sqr_d - sqr_r2) / (2.0 * r1 * d)).acos(),
            ((sqr_r2 + sqr_d - sqr_r1) / (2.0 * r2 * d)).acos(),
        )
    } else {
        (0.0, 0.0)
    };

    let angle_centers = knob.center.angle_to(bubble.center);
    let max_spread = ((r1 - r2) / d).acos();

    let rise = rise_ratio.clamp(0.0, 1.0);
    let bottom_spread =
        config.bottom_start_spread + (config.bottom_end_spread - config.bottom_start_spread) * rise;

    // Tangent angles: contact half-angles blended toward the maximum spread.
    // The bubble side is the far circle's near-side tangent, hence the π turn.
    let angle1a = angle_centers + u1 + (max_spread - u1) * bottom_spread;
    let angle1b = angle_centers - u1 - (max_spread - u1) * bottom_spread;
    let angle2a = angle_centers + PI - u2 - (PI - u2 - max_spread) * config.top_spread;
    let angle2b = angle_centers - PI + u2 + (PI - u2 - max_spread) * config.top_spread;

    let mut p1a = knob.point_at(angle1a);
    let mut p1b = knob.point_at(angle1b);
    let p2a = bubble.point_at(angle2a);
    let p2b = bubble.point_at(angle2b);

    // One shared handle length, shrunk as the circles close in so the curves
    // cannot self-intersect when the centers nearly coincide.
    let total_radius = r1 + r2;
    let d2_base = (config.top_spread.max(bottom_spread) * config.handle_rate)
        .min(p1a.distance(p2a) / total_radius);
    let d2 = d2_base * (2.0 * d / total_radius).min(1.0);

    let sp1 = Point::from_angle(angle1a - FRAC_PI_2, r1 * d2);
    let sp2 = Point::from_angle(angle2a + FRAC_PI_2, r2 * d2);
    let sp3 = Point::from_angle(angle2b - FRAC_PI_2, r2 * d2);
    let sp4 = Point::from_angle(angle1b + FRAC_PI_2, r1 * d2);

    if let Some(track) = track {
        // Pin the knob-side anchors inside the bar and pull them toward its
        // top edge as the bubble rises.
        let (min_x, max_x) = (
            track.left() + config.corner_radius,
            track.right() - config.corner_radius,
        );
        p1a.x = p1a.x.clamp(min_x, max_x);
        p1b.x = p1b.x.clamp(min_x, max_x);
        p1a.y += (track.top() - p1a.y) * rise;
        p1b.y += (track.top() - p1b.y) * rise;
    }

    Some(MetaballOutline {
        p1a,
        p2a,
        p2b,
        p1b,
        sp1,
        sp2,
        sp3,
        sp4,
    })
}
