#![forbid(unsafe_code)]

//! Position model: a clamped scalar in `[0, 1]` plus the track pixel mapping.
//!
//! # Invariants
//!
//! 1. The stored value is always in `[0.0, 1.0]`, for every input including
//!    out-of-range and non-finite values.
//! 2. [`Position::set`] reports a change only when the clamped value differs
//!    from the previous value. Clamp no-ops never fire listeners.
//! 3. `position_to_x` is monotonically non-decreasing in position, and
//!    `x_to_position` inverts it within floating-point tolerance.

/// Clamped knob position with single-firing change detection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    value: f32,
}

impl Position {
    /// Create a position, clamping the initial value.
    #[must_use]
    pub fn new(value: f32) -> Self {
        let mut pos = Self { value: 0.0 };
        pos.set(value);
        pos
    }

    /// Current value, always in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Store `value` clamped to `[0, 1]`.
    ///
    /// Returns `Some(clamped)` only when the effective value changed; the
    /// caller forwards that to its position listener. Non-finite input is
    /// ignored (NaN has no meaningful clamp), keeping invariant 1.
    pub fn set(&mut self, value: f32) -> Option<f32> {
        if !value.is_finite() {
            return None;
        }
        let clamped = value.clamp(0.0, 1.0);
        if clamped == self.value {
            return None;
        }
        self.value = clamped;
        Some(clamped)
    }

    /// Shift the position by a delta, clamped. Same change semantics as
    /// [`Position::set`].
    pub fn shift(&mut self, delta: f32) -> Option<f32> {
        self.set(self.value + delta)
    }
}

/// Pixel mapping between position values and knob center x-coordinates.
///
/// The knob center travels from `inner_offset + knob_diameter / 2` (position
/// 0) to `width − inner_offset − knob_diameter / 2` (position 1).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackMetrics {
    /// Track width in pixels.
    pub width: f32,
    /// Knob diameter in pixels.
    pub knob_diameter: f32,
    /// Horizontal inset from each track edge, in pixels.
    pub inner_offset: f32,
}

impl TrackMetrics {
    /// Create track metrics.
    #[inline]
    pub const fn new(width: f32, knob_diameter: f32, inner_offset: f32) -> Self {
        Self {
            width,
            knob_diameter,
            inner_offset,
        }
    }

    /// Pixel range the knob center can travel.
    #[inline]
    #[must_use]
    pub fn max_movement(&self) -> f32 {
        self.width - self.knob_diameter - 2.0 * self.inner_offset
    }

    /// Knob center x for a position value.
    #[inline]
    #[must_use]
    pub fn position_to_x(&self, position: f32) -> f32 {
        self.inner_offset + self.knob_diameter / 2.0 + self.max_movement() * position
    }

    /// Inverse mapping: position value for a pointer x.
    ///
    /// The result is unclamped; callers store it through [`Position::set`].
    #[inline]
    #[must_use]
    pub fn x_to_position(&self, x: f32) -> f32 {
        (x - self.inner_offset - self.knob_diameter / 2.0) / self.max_movement()
    }
}
