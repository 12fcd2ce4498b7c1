//! Minimal example: build a curve and walk its rendering queue.

use std::error::Error;

use framecurve::{Frame, PixelPoint};

fn main() -> Result<(), Box<dyn Error>> {
    // Order-3 pseudo-Hilbert curve over a 256x256 pixel frame.
    let frame = Frame::new(PixelPoint::new(0, 0), PixelPoint::new(256, 256))?;
    let curve = framecurve::pseudo_hilbert_curve(frame, 3)?;
    let queue = curve.to_rendering_queue();

    println!("segments: {}", queue.len());
    if let Some((top_left, bottom_right)) = queue.bounds() {
        println!(
            "bounds: ({}, {}) - ({}, {})",
            top_left.x, top_left.y, bottom_right.x, bottom_right.y
        );
    }

    let first = queue.segments().first().expect("non-empty curve");
    let last = queue.segments().last().expect("non-empty curve");
    println!("enters at ({}, {})", first.start.x, first.start.y);
    println!("exits at ({}, {})", last.end.x, last.end.y);

    Ok(())
}
