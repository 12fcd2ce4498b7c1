//! Image drawing helpers used by the CLI.
//!
//! The core hands us a [`RenderingQueue`] of absolute pixel segments; this
//! module rasterizes it into an [`RgbaImage`] with Bresenham strokes,
//! optionally grading the stroke color along the traversal order.

use framecurve::RenderingQueue;
use image::{Rgba, RgbaImage};

/// Colors used when rendering a curve.
#[derive(Clone, Copy, Debug)]
pub struct CurvePalette {
    /// Stroke color at the start of the path.
    pub start: Rgba<u8>,
    /// Stroke color at the end of the path; equal to `start` for a solid
    /// stroke.
    pub end: Rgba<u8>,
    /// Background fill color.
    pub background: Rgba<u8>,
}

impl CurvePalette {
    /// Stroke color for a segment at position `index` of `total`.
    fn color_at(&self, index: usize, total: usize) -> Rgba<u8> {
        if total <= 1 || self.start == self.end {
            return self.start;
        }
        let t = index as f64 / (total - 1) as f64;
        lerp_rgba(self.start, self.end, t)
    }
}

/// Stroke styling options for rendering.
#[derive(Clone, Copy, Debug)]
pub struct StrokeOptions {
    /// Stroke width in pixels.
    pub line_width: u32,
    /// Colors for the stroke gradient and background.
    pub palette: CurvePalette,
}

/// Linear interpolation between two colors, componentwise.
fn lerp_rgba(from: Rgba<u8>, to: Rgba<u8>, t: f64) -> Rgba<u8> {
    let mut out = [0u8; 4];
    for (slot, (&a, &b)) in out.iter_mut().zip(from.0.iter().zip(to.0.iter())) {
        *slot = (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    }
    Rgba(out)
}

/// Put a pixel if the coordinates are inside the image bounds.
fn put_pixel_safe(img: &mut RgbaImage, x: i64, y: i64, col: Rgba<u8>) {
    let w = i64::from(img.width());
    let h = i64::from(img.height());
    if x >= 0 && y >= 0 && x < w && y < h {
        img.put_pixel(x as u32, y as u32, col);
    }
}

/// Stamp a filled square centered on `(cx, cy)` with a given side length.
fn stamp_square(img: &mut RgbaImage, cx: i64, cy: i64, size: u32, col: Rgba<u8>) {
    let radius = (i64::from(size) - 1) / 2;
    let extra = if size.is_multiple_of(2) { 1 } else { 0 };

    for y in (cy - radius)..=(cy + radius + i64::from(extra)) {
        for x in (cx - radius)..=(cx + radius + i64::from(extra)) {
            put_pixel_safe(img, x, y, col);
        }
    }
}

/// Draw a Bresenham line into `img`, stamping the stroke width at each step.
fn draw_line(
    img: &mut RgbaImage,
    mut x0: i64,
    mut y0: i64,
    x1: i64,
    y1: i64,
    col: Rgba<u8>,
    line_width: u32,
) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp_square(img, x0, y0, line_width, col);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw the first `count` segments of `queue` into `img`.
///
/// Gradient colors are always computed against the full queue length so a
/// partially drawn curve matches the corresponding prefix of the finished
/// one; animation frames reuse this to grow the path without color shifts.
pub fn draw_queue_prefix(
    img: &mut RgbaImage,
    queue: &RenderingQueue,
    count: usize,
    stroke: StrokeOptions,
) {
    let total = queue.len();
    let width = stroke.line_width.max(1);
    for (index, seg) in queue.iter().take(count.min(total)).enumerate() {
        let col = stroke.palette.color_at(index, total);
        draw_line(
            img,
            i64::from(seg.start.x),
            i64::from(seg.start.y),
            i64::from(seg.end.x),
            i64::from(seg.end.y),
            col,
            width,
        );
    }
}

/// Render a square `size`×`size` image showing the whole queue.
pub fn render_curve_image(size: u32, queue: &RenderingQueue, stroke: StrokeOptions) -> RgbaImage {
    let mut imgbuf: RgbaImage =
        image::ImageBuffer::from_pixel(size, size, stroke.palette.background);
    draw_queue_prefix(&mut imgbuf, queue, queue.len(), stroke);
    imgbuf
}

#[cfg(test)]
mod tests {
    use framecurve::{PixelPoint, PixelSegment};

    use super::*;

    /// Solid-stroke options with distinguishable colors.
    fn stroke(width: u32) -> StrokeOptions {
        StrokeOptions {
            line_width: width,
            palette: CurvePalette {
                start: Rgba([10, 20, 30, 255]),
                end: Rgba([10, 20, 30, 255]),
                background: Rgba([0, 0, 0, 255]),
            },
        }
    }

    /// Two-segment L-shaped queue for drawing tests.
    fn queue() -> RenderingQueue {
        RenderingQueue::new(vec![
            PixelSegment::new(PixelPoint::new(2, 10), PixelPoint::new(2, 2)),
            PixelSegment::new(PixelPoint::new(2, 2), PixelPoint::new(10, 2)),
        ])
    }

    #[test]
    fn draws_both_strokes() {
        let img = render_curve_image(16, &queue(), stroke(1));
        assert_eq!(img.get_pixel(2, 6), &Rgba([10, 20, 30, 255]));
        assert_eq!(img.get_pixel(6, 2), &Rgba([10, 20, 30, 255]));
        assert_eq!(img.get_pixel(8, 8), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn prefix_draws_only_leading_segments() {
        let mut img = image::ImageBuffer::from_pixel(16, 16, Rgba([0, 0, 0, 255]));
        draw_queue_prefix(&mut img, &queue(), 1, stroke(1));
        assert_eq!(img.get_pixel(2, 6), &Rgba([10, 20, 30, 255]));
        assert_eq!(img.get_pixel(6, 2), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn gradient_interpolates_along_the_path() {
        let palette = CurvePalette {
            start: Rgba([0, 0, 0, 255]),
            end: Rgba([200, 100, 50, 255]),
            background: Rgba([255, 255, 255, 255]),
        };
        assert_eq!(palette.color_at(0, 3), Rgba([0, 0, 0, 255]));
        assert_eq!(palette.color_at(2, 3), Rgba([200, 100, 50, 255]));
        assert_eq!(palette.color_at(1, 3), Rgba([100, 50, 25, 255]));
    }

    #[test]
    fn wide_strokes_thicken_the_line() {
        let img = render_curve_image(16, &queue(), stroke(3));
        assert_eq!(img.get_pixel(3, 6), &Rgba([10, 20, 30, 255]));
        assert_eq!(img.get_pixel(1, 6), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn out_of_bounds_strokes_are_clipped() {
        let oob = RenderingQueue::new(vec![PixelSegment::new(
            PixelPoint::new(-5, -5),
            PixelPoint::new(5, 5),
        )]);
        // Must not panic; only in-bounds pixels are written.
        let img = render_curve_image(8, &oob, stroke(1));
        assert_eq!(img.get_pixel(5, 5), &Rgba([10, 20, 30, 255]));
    }
}
