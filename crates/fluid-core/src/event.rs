#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! The host adapter translates its platform's touch/mouse callbacks into
//! [`PointerEvent`]s in widget-local coordinates. Only a single pointer is
//! tracked; multi-touch is out of scope.

use crate::geometry::Point;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Pointer made contact.
    Down,
    /// Pointer moved while in contact.
    Move,
    /// Pointer lifted.
    Up,
    /// Interaction aborted by the platform (focus loss, gesture steal).
    ///
    /// Handled identically to [`PointerPhase::Up`] so tracking can never get
    /// stuck.
    Cancel,
}

/// A pointer event in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[inline]
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    /// Pointer-down at a position.
    #[inline]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    /// Pointer-move to a position.
    #[inline]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    /// Pointer-up at a position.
    #[inline]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }

    /// Pointer-cancel at a position.
    #[inline]
    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Cancel, x, y)
    }

    /// Event position as a point.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{PointerEvent, PointerPhase};

    #[test]
    fn constructors_set_phase() {
        assert_eq!(PointerEvent::down(1.0, 2.0).phase, PointerPhase::Down);
        assert_eq!(PointerEvent::moved(1.0, 2.0).phase, PointerPhase::Move);
        assert_eq!(PointerEvent::up(1.0, 2.0).phase, PointerPhase::Up);
        assert_eq!(PointerEvent::cancel(1.0, 2.0).phase, PointerPhase::Cancel);
    }

    #[test]
    fn position_round_trip() {
        let ev = PointerEvent::down(3.5, 7.25);
        assert_eq!(ev.position().x, 3.5);
        assert_eq!(ev.position().y, 7.25);
    }
}
