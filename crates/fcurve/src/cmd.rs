//! Command handlers for the `fcurve` CLI.
//!
//! These functions build a curve through the core library and write the
//! resulting images to disk.

use std::{fs::File, path::Path};

use anyhow::{Result, bail};
use framecurve::{Frame, PixelPoint, RenderingQueue};
use gif::{Encoder, Frame as GifFrame, Repeat};
use image::RgbaImage;

use crate::draw::{StrokeOptions, draw_queue_prefix, render_curve_image};

/// Margin between the curve's frame and the image border, before accounting
/// for stroke width.
const BASE_MARGIN: u32 = 10;

/// Compute the curve frame for a square image of `size` pixels.
///
/// The frame is inset so strokes at the requested width stay inside the
/// image.
fn curve_frame(size: u32, line_width: u32) -> Result<Frame> {
    let margin = BASE_MARGIN + line_width / 2;
    if size <= margin * 2 + 1 {
        bail!("image size {size} leaves no room for the curve (margin is {margin}px per side)");
    }
    let near = margin as i32;
    let far = (size - margin) as i32;
    Ok(Frame::new(
        PixelPoint::new(near, near),
        PixelPoint::new(far, far),
    )?)
}

/// Build the rendering queue for an order/size combination.
fn build_queue(order: u32, size: u32, line_width: u32) -> Result<RenderingQueue> {
    let frame = curve_frame(size, line_width)?;
    Ok(framecurve::rendering_queue(frame, order)?)
}

/// Render a curve of the given order into a square image.
pub fn render(order: u32, size: u32, stroke: StrokeOptions) -> Result<RgbaImage> {
    if stroke.line_width == 0 {
        bail!("line width must be >= 1");
    }
    let queue = build_queue(order, size, stroke.line_width)?;
    Ok(render_curve_image(size, &queue, stroke))
}

/// Parameters controlling animated GIF rendering.
pub struct AnimOptions<'a> {
    /// Curve recursion order.
    pub order: u32,
    /// Output image size in pixels.
    pub size: u32,
    /// Number of animation frames to spread the drawing over.
    pub frames: u32,
    /// Frames per second for the GIF.
    pub fps: u16,
    /// Stroke styling for the curve.
    pub stroke: StrokeOptions,
    /// Output GIF path.
    pub output: &'a Path,
}

/// Generate an animated GIF that draws the curve progressively, a batch of
/// segments per frame.
pub fn anim(options: AnimOptions<'_>) -> Result<()> {
    let AnimOptions {
        order,
        size,
        frames,
        fps,
        stroke,
        output,
    } = options;

    if stroke.line_width == 0 {
        bail!("line width must be >= 1");
    }
    if frames == 0 {
        bail!("frame count must be >= 1");
    }
    if size > u32::from(u16::MAX) {
        bail!("size {} exceeds GIF limits ({})", size, u16::MAX);
    }

    let queue = build_queue(order, size, stroke.line_width)?;
    let total = queue.len() as u32;
    let frames = frames.min(total.max(1));

    let mut file = File::create(output)?;
    let mut encoder = Encoder::new(&mut file, size as u16, size as u16, &[])?;
    encoder.set_repeat(Repeat::Infinite)?;
    let frame_delay = frame_delay_from_fps(fps);

    for step in 1..=frames {
        // Integer scaling so the final frame always shows the whole curve.
        let prefix = (u64::from(total) * u64::from(step) / u64::from(frames)) as usize;
        let mut image: RgbaImage =
            image::ImageBuffer::from_pixel(size, size, stroke.palette.background);
        draw_queue_prefix(&mut image, &queue, prefix, stroke);

        let mut raw = image.into_raw();
        let mut frame = GifFrame::from_rgba_speed(size as u16, size as u16, &mut raw, 10);
        frame.delay = frame_delay;
        encoder.write_frame(&frame)?;
    }

    Ok(())
}

/// Convert frames-per-second into a GIF frame delay (hundredths of a second).
fn frame_delay_from_fps(fps: u16) -> u16 {
    // GIF delays are centiseconds; clamp to at least 1cs to avoid zero-delay frames.
    let fps = fps.max(1);
    ((100 + (fps / 2)) / fps).max(1)
}

/// Summary of a curve, printed by the `info` subcommand.
pub fn info(order: u32, size: u32) -> Result<String> {
    let queue = build_queue(order, size, 1)?;
    let mut out = format!("order {order}: {} segments", queue.len());
    if let Some((top_left, bottom_right)) = queue.bounds() {
        out.push_str(&format!(
            "\nbounds: ({}, {}) - ({}, {})",
            top_left.x, top_left.y, bottom_right.x, bottom_right.y
        ));
    }
    Ok(out)
}
