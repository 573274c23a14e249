//! End-to-end widget tests: pointer gestures driving the slider with
//! deterministic frame advancement, plus the persistence round trip.

use std::time::Duration;

use fluid_core::event::PointerEvent;
use fluid_core::tracker::TrackEvent;
use fluid_widgets::scene::DrawOp;
use fluid_widgets::slider::{FluidSlider, SliderConfig};

const WIDTH: f32 = 224.0;
const HEIGHT: f32 = 112.0;
const FRAME: Duration = Duration::from_millis(16);

fn slider() -> FluidSlider {
    let mut s = FluidSlider::new(SliderConfig::default());
    s.resize(WIDTH, HEIGHT, 1.0);
    s
}

fn knob(s: &FluidSlider) -> (f32, f32) {
    let c = s.knob_circle().center;
    (c.x, c.y)
}

#[test]
fn full_drag_gesture() {
    let mut s = slider();
    let (x, y) = knob(&s);

    let down = s.process(PointerEvent::down(x, y));
    assert!(down.handled);
    assert_eq!(down.events, vec![TrackEvent::BeginTracking]);

    // Drag right by a quarter of the track.
    let delta = s.layout().metrics.max_movement() / 4.0;
    let moved = s.process(PointerEvent::moved(x + delta, y));
    assert!(moved.handled);
    assert_eq!(moved.events.len(), 1);
    match moved.events[0] {
        TrackEvent::PositionChanged(p) => assert!((p - 0.75).abs() < 1e-5),
        ref other => panic!("unexpected event {other:?}"),
    }

    let up = s.process(PointerEvent::up(x + delta, y));
    assert_eq!(up.events, vec![TrackEvent::EndTracking]);
    assert!(!s.is_tracking());
    assert!((s.position() - 0.75).abs() < 1e-5);
}

#[test]
fn snap_on_down_outside_knob() {
    let mut s = slider();
    let bar = s.layout().bar;
    // Press at the far left of the bar, well away from the centered knob.
    let r = s.process(PointerEvent::down(bar.left() + 5.0, bar.center().y));

    assert!(r.handled);
    assert_eq!(r.events.len(), 2, "position snap plus begin");
    assert!(matches!(r.events[0], TrackEvent::PositionChanged(_)));
    assert_eq!(r.events[1], TrackEvent::BeginTracking);
    assert!(s.position() < 0.5);
}

#[test]
fn down_on_knob_emits_exactly_one_begin() {
    let mut s = slider();
    let (x, y) = knob(&s);
    let r = s.process(PointerEvent::down(x, y));
    assert_eq!(r.events, vec![TrackEvent::BeginTracking]);
}

#[test]
fn unchanged_move_emits_nothing() {
    let mut s = slider();
    let (x, y) = knob(&s);
    s.process(PointerEvent::down(x, y));

    let r = s.process(PointerEvent::moved(x, y));
    assert!(r.handled);
    assert!(r.events.is_empty());
}

#[test]
fn cancel_behaves_like_up() {
    let mut s = slider();
    let (x, y) = knob(&s);
    s.process(PointerEvent::down(x, y));
    for _ in 0..10 {
        s.advance(FRAME);
    }

    let r = s.process(PointerEvent::cancel(x, y));
    assert_eq!(r.events, vec![TrackEvent::EndTracking]);
    assert!(!s.is_tracking());

    // The bubble settles back down.
    for _ in 0..60 {
        s.advance(FRAME);
    }
    assert!(!s.is_animating());
    assert_eq!(s.rise_ratio(), 0.0);
}

#[test]
fn events_outside_bar_are_ignored() {
    let mut s = slider();
    let r = s.process(PointerEvent::down(10.0, 5.0));
    assert!(!r.handled);
    assert!(r.events.is_empty());
    assert!(!s.is_tracking());
}

#[test]
fn bubble_rises_and_blends_frame_by_frame() {
    let mut s = slider();
    let (x, y) = knob(&s);
    s.process(PointerEvent::down(x, y));

    let mut saw_blend = false;
    for _ in 0..30 {
        s.advance(FRAME);
        let scene = s.scene();
        if scene.ops.iter().any(|op| matches!(op, DrawOp::Path { .. })) {
            saw_blend = true;
        }
    }
    assert!(saw_blend, "rising bubble should produce blend frames");
    assert!(s.bubble_circle().center.y < s.knob_circle().center.y);
}

#[test]
fn scene_is_stable_between_ticks() {
    let mut s = slider();
    let a = s.scene();
    let b = s.scene();
    assert_eq!(a, b, "painting must not mutate state");
}

#[cfg(feature = "state-persistence")]
#[test]
fn persist_state_serde_round_trip() {
    let mut s = slider();
    s.set_position(0.8);
    s.config_mut().end_text = "max".to_string();
    s.set_duration_ms(320);

    let state = s.save_state();
    let json = serde_json::to_string(&state).expect("serialize");
    let back: fluid_widgets::slider::SliderPersistState =
        serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, state);

    let mut restored = slider();
    restored.restore_state(back);
    assert_eq!(restored.position(), 0.8);
    assert_eq!(restored.config().end_text, "max");
    assert_eq!(restored.config().duration, Duration::from_millis(320));
}
