//! Recursive construction of pseudo-Hilbert space-filling curves.
//!
//! A curve is generated over a [`Frame`] — an axis-aligned rectangle of the
//! pixel plane — as a single connected polyline. The construction is purely
//! recursive: the frame is split into quadrants, a fragment is built in each,
//! the bottom-left and bottom-right fragments are rotated and reversed so
//! their traversal directions chain, and all four are stitched into one path.
//! The composed fragment is flattened once into a [`RenderingQueue`] of
//! absolute integer-pixel segments for whatever renderer consumes it.
//!
//! ```
//! use framecurve::{Frame, PixelPoint, pseudo_hilbert_curve};
//!
//! let frame = Frame::new(PixelPoint::new(0, 0), PixelPoint::new(64, 64))?;
//! let curve = pseudo_hilbert_curve(frame, 3)?;
//! let queue = curve.to_rendering_queue();
//! assert_eq!(queue.len() as u32, framecurve::segment_count(3));
//! # Ok::<(), framecurve::error::Error>(())
//! ```

/// The recursive curve builder.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// Curve fragments and their composition operations.
pub mod fragment;
/// Frames and frame-relative coordinates.
pub mod frame;
/// Pixel-space point types.
pub mod point;
/// The flattened, renderer-facing segment sequence.
pub mod queue;

pub use crate::{
    curve::{MAX_ORDER, pseudo_hilbert_curve, rendering_queue, segment_count},
    fragment::{FilledFrame, Segment},
    frame::{Frame, FrameCoord, Quadrants},
    point::{PixelPoint, Vec2},
    queue::{PixelSegment, RenderingQueue},
};
