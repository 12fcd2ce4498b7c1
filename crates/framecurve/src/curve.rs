//! The recursive pseudo-Hilbert curve builder.
//!
//! The construction follows the Hilbert L-system rule: split the frame into
//! quadrants, build a fragment per quadrant at the next lower order, rotate
//! and reverse the bottom-left and bottom-right fragments so their open ends
//! meet their neighbours, then stitch everything into one path in the fixed
//! bottom-left → top-left → top-right → bottom-right traversal order.

use crate::{
    error::{Error, Result},
    fragment::FilledFrame,
    frame::{Frame, FrameCoord},
    queue::RenderingQueue,
};

/// Maximum supported recursion order.
///
/// Segment counts grow as `4^order - 1`; this cap keeps the count indexable
/// by `u32`. Memory is the real hazard well before the cap — an order-15
/// curve materializes over a billion segments — so callers should bound the
/// order to what they can afford to hold.
pub const MAX_ORDER: u32 = 15;

/// Number of segments in a composed curve of the given order, connectors
/// included.
///
/// Each order-1 fragment holds the 3 motif segments; every recursive step
/// quadruples the count and adds 3 connectors, giving `4^order - 1` overall
/// (`3·4^(order-1)` motif segments plus `4^(order-1) - 1` connectors).
pub fn segment_count(order: u32) -> u32 {
    4u32.pow(order) - 1
}

/// Build a pseudo-Hilbert curve fragment of the given order over `frame`.
///
/// The returned fragment's segments are expressed in `frame`'s normalized
/// coordinates, in traversal order; flatten with
/// [`FilledFrame::to_rendering_queue`] for drawing.
///
/// Fails with an order error when `order` is zero or above [`MAX_ORDER`],
/// and with a geometry error when the frame cannot be subdivided deep
/// enough (each order of recursion halves the quadrant size, so the frame
/// must be at least `2^(order-1)` pixels on each side).
pub fn pseudo_hilbert_curve(frame: Frame, order: u32) -> Result<FilledFrame> {
    if order == 0 {
        return Err(Error::Order("order must be >= 1".to_string()));
    }
    if order > MAX_ORDER {
        return Err(Error::Order(format!(
            "order {order} exceeds the supported maximum of {MAX_ORDER}"
        )));
    }
    build(frame, order)
}

/// Build the curve and flatten it to absolute pixel segments in one step.
pub fn rendering_queue(frame: Frame, order: u32) -> Result<RenderingQueue> {
    Ok(pseudo_hilbert_curve(frame, order)?.to_rendering_queue())
}

/// Recursive core; `order` is already validated to be at least 1.
fn build(frame: Frame, order: u32) -> Result<FilledFrame> {
    if order <= 1 {
        return Ok(u_motif(frame));
    }

    let quads = frame.hilbert_split()?;

    // The quadrant fragments are independent; only composition below imposes
    // an order.
    let bottom_left = build(quads.bottom_left, order - 1)?.rotated(1).reoriented();
    let top_left = build(quads.top_left, order - 1)?;
    let top_right = build(quads.top_right, order - 1)?;
    let bottom_right = build(quads.bottom_right, order - 1)?.rotated(-1).reoriented();

    let mut composed = FilledFrame::new(frame);
    composed.subsume(&bottom_left);
    composed.subsume_with_connection(&top_left);
    composed.subsume_with_connection(&top_right);
    composed.subsume_with_connection(&bottom_right);
    Ok(composed)
}

/// The terminal three-segment "U" motif, opening towards the bottom of the
/// frame.
///
/// Entry is the bottom-left arm, exit the bottom-right arm; every rotation
/// applied higher up the recursion is defined relative to these fixed open
/// ends.
fn u_motif(frame: Frame) -> FilledFrame {
    let mut filled = FilledFrame::new(frame);
    filled.add_line(FrameCoord::new(0.25, 0.75), FrameCoord::new(0.25, 0.25));
    filled.add_line(FrameCoord::new(0.25, 0.25), FrameCoord::new(0.75, 0.25));
    filled.add_line(FrameCoord::new(0.75, 0.25), FrameCoord::new(0.75, 0.75));
    filled
}
