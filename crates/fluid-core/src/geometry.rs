#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All types are plain `Copy` values in screen coordinates: the origin is the
//! widget's top-left corner and y grows downward. Angle helpers keep that
//! handedness — `atan2` signs are never flipped, because the metaball curve
//! orientation depends on them.

use std::ops::{Add, Mul, Sub};

/// A 2D point (or vector) in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector of the given `length` pointing at `radians`.
    ///
    /// With y-down coordinates, positive angles rotate clockwise on screen.
    #[inline]
    pub fn from_angle(radians: f32, length: f32) -> Self {
        Self {
            x: radians.cos() * length,
            y: radians.sin() * length,
        }
    }

    /// Euclidean length of this point treated as a vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f32 {
        (other - *self).length()
    }

    /// Angle of the vector from this point to `other`, in radians.
    #[inline]
    pub fn angle_to(&self, other: Point) -> f32 {
        let d = other - *self;
        d.y.atan2(d.x)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// An axis-aligned rectangle in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// A circle described by center and radius.
///
/// A radius of `0.0` means "absent/collapsed"; the geometry engine treats it
/// as nothing to blend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    /// Create a new circle.
    #[inline]
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Point on the circle surface at `radians`.
    #[inline]
    pub fn point_at(&self, radians: f32) -> Point {
        self.center + Point::from_angle(radians, self.radius)
    }

    /// Check if a point lies inside the circle (boundary inclusive).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius
    }
}
