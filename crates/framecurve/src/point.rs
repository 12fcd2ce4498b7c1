//! Pixel-space point types used by frames and the rendering queue.
//!
//! Two variants exist and no more: [`Vec2`] carries real-valued coordinates
//! for transient pixel-space arithmetic, [`PixelPoint`] carries the integer
//! coordinates used for frame corners and final drawable endpoints. The only
//! lossy conversion is [`Vec2::floor`], and it is applied exactly once, when a
//! fragment is flattened into a rendering queue.

use std::ops::{Add, Div};

/// A real-valued point in absolute pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    /// Horizontal coordinate, growing rightwards.
    pub x: f64,
    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

impl Vec2 {
    /// Create a new real-valued point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both coordinates down to the nearest integer pixel.
    ///
    /// This is the crate's single rounding rule. It is deliberately confined
    /// to the flatten step so rounding error never compounds across
    /// recursion depth.
    pub fn floor(self) -> PixelPoint {
        PixelPoint {
            x: self.x.floor() as i32,
            y: self.y.floor() as i32,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

/// An integer point in absolute pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    /// Horizontal coordinate, growing rightwards.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl PixelPoint {
    /// Create a new integer pixel point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Widen to a real-valued point. Lossless.
    pub fn to_vec2(self) -> Vec2 {
        Vec2 {
            x: f64::from(self.x),
            y: f64::from(self.y),
        }
    }
}

impl Add for PixelPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Div<i32> for PixelPoint {
    type Output = Self;

    /// Componentwise floor division, matching [`Vec2::floor`] for negative
    /// coordinates.
    fn div(self, rhs: i32) -> Self {
        Self {
            x: self.x.div_euclid(rhs),
            y: self.y.div_euclid(rhs),
        }
    }
}
