#![forbid(unsafe_code)]

//! Packed ARGB colors and the default slider palette.

/// A color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Color(pub u32);

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color(0xFF_FF_FF_FF);
    /// Opaque black.
    pub const BLACK: Color = Color(0xFF_00_00_00);
    /// Default bar fill, the indigo of the original design.
    pub const BAR: Color = Color(0xFF_61_68_E7);

    /// Build a color from components.
    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Alpha component.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red component.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green component.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color(packed)
    }
}
