//! Property-based invariant tests for the slider core.
//!
//! 1. **Clamp** — the stored position is in `[0, 1]` for any input, including
//!    non-finite values.
//! 2. **Monotone mapping** — `position_to_x` never decreases as the position
//!    grows, and `x_to_position` inverts it within tolerance.
//! 3. **Blend contract** — `compute_outline` returns `None` exactly when a
//!    radius is zero, the centers are too far apart, or one circle contains
//!    the other; otherwise an outline with finite, on-surface anchors.
//! 4. **Symmetry** — anchor pairs mirror across the line through the centers.
//! 5. **Idempotence** — identical inputs produce identical outlines.
//! 6. **Tracking** — any event sequence that ends with up or cancel leaves
//!    the state machine idle with no anchor.

use fluid_core::event::PointerEvent;
use fluid_core::geometry::{Circle, Point, Rect};
use fluid_core::metaball::{BlendConfig, compute_outline};
use fluid_core::position::{Position, TrackMetrics};
use fluid_core::tracker::Tracker;
use proptest::prelude::*;

fn cfg() -> BlendConfig {
    BlendConfig {
        max_distance: 300.0,
        ..BlendConfig::default()
    }
}

// ── 1. Clamp ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn position_always_clamped(values in prop::collection::vec(-1e6f32..1e6, 1..32)) {
        let mut pos = Position::default();
        for v in values {
            pos.set(v);
            prop_assert!((0.0..=1.0).contains(&pos.get()));
        }
    }

    #[test]
    fn position_survives_non_finite(prefix in -2.0f32..2.0) {
        let mut pos = Position::new(prefix);
        let before = pos.get();
        pos.set(f32::NAN);
        pos.set(f32::INFINITY);
        pos.set(f32::NEG_INFINITY);
        prop_assert_eq!(pos.get(), before);
    }
}

// ── 2. Pixel mapping ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn mapping_monotone_and_invertible(
        width in 100.0f32..2000.0,
        knob in 20.0f32..80.0,
        inset in 0.0f32..10.0,
        a in 0.0f32..1.0,
        b in 0.0f32..1.0,
    ) {
        prop_assume!(width > knob + 2.0 * inset + 1.0);
        let m = TrackMetrics::new(width, knob, inset);

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(m.position_to_x(lo) <= m.position_to_x(hi));

        let round = m.x_to_position(m.position_to_x(a));
        prop_assert!((round - a).abs() < 1e-3);
    }
}

// ── 3–5. Blend contract, symmetry, idempotence ──────────────────────────

proptest! {
    #[test]
    fn blend_contract(
        r1 in 0.0f32..100.0,
        r2 in 0.0f32..100.0,
        d in 0.0f32..500.0,
        angle in 0.0f32..std::f32::consts::TAU,
        rise in 0.0f32..1.0,
    ) {
        let cfg = cfg();
        let knob = Circle::new(Point::new(500.0, 500.0), r1);
        let bubble = Circle::new(knob.center + Point::from_angle(angle, d), r2);
        let outline = compute_outline(knob, bubble, &cfg, rise, None);

        // Use the actual center distance: constructing the second center from
        // (angle, d) rounds, and the contract is defined on the real d.
        let d_actual = knob.center.distance(bubble.center);
        let expect_none =
            r1 == 0.0 || r2 == 0.0 || d_actual > cfg.max_distance || d_actual <= (r1 - r2).abs();
        prop_assert_eq!(outline.is_none(), expect_none);

        if let Some(o) = outline {
            for p in o.anchors() {
                prop_assert!(p.x.is_finite() && p.y.is_finite());
            }
        }
    }

    #[test]
    fn anchors_mirror_across_center_line(
        r1 in 5.0f32..60.0,
        r2 in 5.0f32..60.0,
        d in 1.0f32..200.0,
        rise in 0.0f32..1.0,
    ) {
        let cfg = cfg();
        // Vertical stacking keeps the mirror line axis-aligned, so the
        // reflection check is exact arithmetic on x.
        let knob = Circle::new(Point::new(300.0, 300.0), r1);
        let bubble = Circle::new(Point::new(300.0, 300.0 - d), r2);
        if let Some(o) = compute_outline(knob, bubble, &cfg, rise, None) {
            prop_assert!(((o.p1a.x - 300.0) + (o.p1b.x - 300.0)).abs() < 1e-2);
            prop_assert!((o.p1a.y - o.p1b.y).abs() < 1e-2);
            prop_assert!(((o.p2a.x - 300.0) + (o.p2b.x - 300.0)).abs() < 1e-2);
            prop_assert!((o.p2a.y - o.p2b.y).abs() < 1e-2);
        }
    }

    #[test]
    fn outline_idempotent(
        r1 in 5.0f32..60.0,
        r2 in 5.0f32..60.0,
        dx in -150.0f32..150.0,
        dy in -150.0f32..150.0,
        rise in 0.0f32..1.0,
    ) {
        let cfg = cfg();
        let knob = Circle::new(Point::new(300.0, 300.0), r1);
        let bubble = Circle::new(Point::new(300.0 + dx, 300.0 + dy), r2);
        let first = compute_outline(knob, bubble, &cfg, rise, None);
        let second = compute_outline(knob, bubble, &cfg, rise, None);
        prop_assert_eq!(first, second);
    }
}

// ── 6. Tracking always returns to idle ──────────────────────────────────

proptest! {
    #[test]
    fn tracking_ends_idle(
        start in 0.0f32..1.0,
        xs in prop::collection::vec(-50.0f32..300.0, 0..24),
        cancel in proptest::bool::ANY,
    ) {
        let bounds = Rect::new(0.0, 100.0, 224.0, 56.0);
        let metrics = TrackMetrics::new(224.0, 56.0, 2.0);
        let mut position = Position::new(start);
        let mut tracker = Tracker::new();

        let knob = |p: &Position| Circle::new(Point::new(metrics.position_to_x(p.get()), 128.0), 28.0);

        let down_x = metrics.position_to_x(start);
        let k = knob(&position);
        tracker.process(PointerEvent::down(down_x, 128.0), bounds, k, &metrics, &mut position);

        for x in xs {
            let k = knob(&position);
            tracker.process(PointerEvent::moved(x, 128.0), bounds, k, &metrics, &mut position);
            prop_assert!((0.0..=1.0).contains(&position.get()));
        }

        let k = knob(&position);
        let finish = if cancel {
            PointerEvent::cancel(0.0, 0.0)
        } else {
            PointerEvent::up(0.0, 0.0)
        };
        tracker.process(finish, bounds, k, &metrics, &mut position);

        prop_assert!(!tracker.is_tracking());
        prop_assert_eq!(tracker.anchor_x(), None);
    }
}
