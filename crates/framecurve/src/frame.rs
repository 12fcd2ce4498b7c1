//! Frames and frame-relative coordinates.
//!
//! A [`Frame`] is an axis-aligned rectangle of the pixel plane used as a
//! local coordinate system. A [`FrameCoord`] is a point normalized to
//! `[0,1]²` within some frame; which frame is implicit and supplied by the
//! caller at projection time.

use crate::{
    error::{Error, Result},
    point::{PixelPoint, Vec2},
};

/// A point with both coordinates nominally in `[0,1]`, relative to a frame.
///
/// `x` grows rightwards and `y` grows downwards, matching pixel space.
/// Values outside `[0,1]` are permitted — [`Frame::real_coords`] extrapolates
/// linearly — but a correctly composed fragment keeps every stored
/// coordinate inside the unit square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCoord {
    /// Normalized horizontal coordinate.
    pub x: f64,
    /// Normalized vertical coordinate.
    pub y: f64,
}

impl FrameCoord {
    /// Create a new normalized coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate about the frame center by `angle` radians.
    ///
    /// The coordinate is lifted into a centered math frame in `[-1,1]²` with
    /// `y` growing upwards (normalized `y` grows downwards, hence the flip),
    /// rotated there, and mapped back. For the quarter-turn angles used by
    /// curve composition the result is exact up to floating-point rounding,
    /// and rotating by `-angle` afterwards recovers the original coordinate.
    pub fn rotated(self, angle: f64) -> Self {
        let mx = 2.0 * self.x - 1.0;
        let my = 1.0 - 2.0 * self.y;
        let (sin, cos) = angle.sin_cos();
        let u = mx * cos + my * sin;
        let v = -mx * sin + my * cos;
        Self {
            x: (u + 1.0) / 2.0,
            y: 1.0 - (v + 1.0) / 2.0,
        }
    }

    /// Euclidean distance to another coordinate, in normalized units.
    pub fn distance(self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An axis-aligned rectangle in pixel space, used as a local coordinate
/// system.
///
/// Construction enforces that the top-left corner lies strictly above and to
/// the left of the bottom-right corner, so every `Frame` has positive width
/// and height and both projection directions are total. A frame owns no
/// children; subdivision computes new frames rather than mutating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Top-left corner.
    top_left: PixelPoint,
    /// Bottom-right corner.
    bottom_right: PixelPoint,
}

/// The four quadrant sub-frames produced by [`Frame::hilbert_split`], named
/// by role.
///
/// The composition order of the curve is fixed: bottom-left, top-left,
/// top-right, bottom-right. Naming the quadrants keeps that ordering explicit
/// at every callsite instead of encoding it in tuple positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quadrants {
    /// Bottom-left quadrant; the curve enters here.
    pub bottom_left: Frame,
    /// Top-left quadrant.
    pub top_left: Frame,
    /// Top-right quadrant.
    pub top_right: Frame,
    /// Bottom-right quadrant; the curve exits here.
    pub bottom_right: Frame,
}

impl Frame {
    /// Create a frame from its top-left and bottom-right corners.
    ///
    /// Fails with a geometry error when the rectangle has zero or negative
    /// width or height.
    pub fn new(top_left: PixelPoint, bottom_right: PixelPoint) -> Result<Self> {
        if top_left.x >= bottom_right.x || top_left.y >= bottom_right.y {
            return Err(Error::Geometry(format!(
                "degenerate frame: ({}, {}) - ({}, {}) must have positive width and height",
                top_left.x, top_left.y, bottom_right.x, bottom_right.y
            )));
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// The top-left corner.
    pub fn top_left(&self) -> PixelPoint {
        self.top_left
    }

    /// The bottom-right corner.
    pub fn bottom_right(&self) -> PixelPoint {
        self.bottom_right
    }

    /// Width in pixels. Always positive.
    pub fn width(&self) -> i32 {
        self.bottom_right.x - self.top_left.x
    }

    /// Height in pixels. Always positive.
    pub fn height(&self) -> i32 {
        self.bottom_right.y - self.top_left.y
    }

    /// Split into four quadrants sharing the rectangle midpoint as a common
    /// corner.
    ///
    /// The midpoint is computed with floor division. Fails when the frame is
    /// too small to yield four non-degenerate quadrants, which bounds how
    /// deep a curve can recurse over a given frame.
    pub fn hilbert_split(&self) -> Result<Quadrants> {
        if self.width() < 2 || self.height() < 2 {
            return Err(Error::Geometry(format!(
                "frame {}x{} is too small to subdivide",
                self.width(),
                self.height()
            )));
        }

        let midpoint = (self.top_left + self.bottom_right) / 2;

        Ok(Quadrants {
            bottom_left: Self::new(
                PixelPoint::new(self.top_left.x, midpoint.y),
                PixelPoint::new(midpoint.x, self.bottom_right.y),
            )?,
            top_left: Self::new(self.top_left, midpoint)?,
            top_right: Self::new(
                PixelPoint::new(midpoint.x, self.top_left.y),
                PixelPoint::new(self.bottom_right.x, midpoint.y),
            )?,
            bottom_right: Self::new(midpoint, self.bottom_right)?,
        })
    }

    /// Project a normalized coordinate into absolute pixel space.
    ///
    /// The map is affine and unclamped: coordinates outside `[0,1]` are
    /// extrapolated linearly.
    pub fn real_coords(&self, coord: FrameCoord) -> Vec2 {
        Vec2 {
            x: f64::from(self.top_left.x) + coord.x * f64::from(self.width()),
            y: f64::from(self.top_left.y) + coord.y * f64::from(self.height()),
        }
    }

    /// Project an absolute pixel-space point into this frame's normalized
    /// coordinates. Exact inverse of [`Frame::real_coords`].
    ///
    /// Total because construction guarantees positive width and height.
    pub fn frame_coords_of(&self, point: Vec2) -> FrameCoord {
        FrameCoord {
            x: (point.x - f64::from(self.top_left.x)) / f64::from(self.width()),
            y: (point.y - f64::from(self.top_left.y)) / f64::from(self.height()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    /// Shorthand frame constructor for tests.
    fn frame(left: i32, top: i32, right: i32, bottom: i32) -> Frame {
        Frame::new(PixelPoint::new(left, top), PixelPoint::new(right, bottom)).expect("valid frame")
    }

    #[test]
    fn rejects_degenerate_frames() {
        assert!(Frame::new(PixelPoint::new(0, 0), PixelPoint::new(0, 10)).is_err());
        assert!(Frame::new(PixelPoint::new(0, 0), PixelPoint::new(10, 0)).is_err());
        assert!(Frame::new(PixelPoint::new(5, 5), PixelPoint::new(5, 5)).is_err());
        assert!(Frame::new(PixelPoint::new(10, 0), PixelPoint::new(0, 10)).is_err());
    }

    #[test]
    fn split_quadrants_share_midpoint() -> Result<()> {
        let quads = frame(0, 0, 8, 8).hilbert_split()?;

        assert_eq!(quads.top_left, frame(0, 0, 4, 4));
        assert_eq!(quads.top_right, frame(4, 0, 8, 4));
        assert_eq!(quads.bottom_left, frame(0, 4, 4, 8));
        assert_eq!(quads.bottom_right, frame(4, 4, 8, 8));
        Ok(())
    }

    #[test]
    fn split_floors_odd_midpoints() -> Result<()> {
        let quads = frame(0, 0, 5, 7).hilbert_split()?;
        assert_eq!(quads.top_left, frame(0, 0, 2, 3));
        assert_eq!(quads.bottom_right, frame(2, 3, 5, 7));
        Ok(())
    }

    #[test]
    fn split_rejects_tiny_frames() {
        assert!(frame(0, 0, 1, 8).hilbert_split().is_err());
        assert!(frame(0, 0, 8, 1).hilbert_split().is_err());
    }

    #[test]
    fn real_coords_maps_unit_square_to_rect() {
        let fr = frame(10, 20, 110, 220);
        assert_eq!(fr.real_coords(FrameCoord::new(0.0, 0.0)), Vec2::new(10.0, 20.0));
        assert_eq!(
            fr.real_coords(FrameCoord::new(1.0, 1.0)),
            Vec2::new(110.0, 220.0)
        );
        assert_eq!(
            fr.real_coords(FrameCoord::new(0.5, 0.5)),
            Vec2::new(60.0, 120.0)
        );
        // Unclamped: extrapolates outside the unit square.
        assert_eq!(
            fr.real_coords(FrameCoord::new(-0.5, 2.0)),
            Vec2::new(-40.0, 420.0)
        );
    }

    #[test]
    fn frame_coords_of_inverts_real_coords() {
        let fr = frame(-7, 3, 13, 43);
        for &(x, y) in &[(0.0, 0.0), (0.25, 0.75), (1.0, 1.0), (-0.5, 1.5)] {
            let coord = FrameCoord::new(x, y);
            let back = fr.frame_coords_of(fr.real_coords(coord));
            assert!(coord.distance(back) < 1e-12, "{coord:?} -> {back:?}");
        }
    }

    #[test]
    fn quarter_turn_rotation_permutes_corners() {
        // A positive quarter turn carries bottom-left to top-left in
        // normalized space (the y axis points down).
        let rotated = FrameCoord::new(0.25, 0.75).rotated(FRAC_PI_2);
        assert!(rotated.distance(FrameCoord::new(0.25, 0.25)) < 1e-12);

        let rotated = FrameCoord::new(0.25, 0.25).rotated(FRAC_PI_2);
        assert!(rotated.distance(FrameCoord::new(0.75, 0.25)) < 1e-12);
    }

    #[test]
    fn rotation_round_trips() {
        let coord = FrameCoord::new(0.1, 0.9);
        for turns in -4i32..=4 {
            let angle = f64::from(turns) * FRAC_PI_2;
            let back = coord.rotated(angle).rotated(-angle);
            assert!(coord.distance(back) < 1e-9, "turns {turns}: {back:?}");
        }
    }

    #[test]
    fn center_is_a_rotation_fixpoint() {
        let center = FrameCoord::new(0.5, 0.5);
        let rotated = center.rotated(FRAC_PI_2);
        assert!(center.distance(rotated) < 1e-12);
    }
}
