//! Curve fragments: a frame paired with an ordered polyline.
//!
//! A [`FilledFrame`] owns its segment list outright. Composition reprojects
//! coordinates out of a source fragment into the destination's coordinate
//! frame and appends copies, never aliasing the source's storage, so sibling
//! fragments can be built independently and discarded after merging.

use std::f64::consts::FRAC_PI_2;

use smallvec::SmallVec;

use crate::{
    frame::{Frame, FrameCoord},
    queue::{PixelSegment, RenderingQueue},
};

/// A directed line segment in some frame's normalized coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Traversal entry point.
    pub start: FrameCoord,
    /// Traversal exit point.
    pub end: FrameCoord,
}

impl Segment {
    /// Create a segment from its endpoints.
    pub fn new(start: FrameCoord, end: FrameCoord) -> Self {
        Self { start, end }
    }

    /// The same segment traversed in the opposite direction.
    fn flipped(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

/// Inline segment capacity; fragments up to order 2 avoid heap allocation.
const INLINE_SEGMENTS: usize = 15;

/// A frame plus an ordered polyline expressed in that frame's normalized
/// coordinates.
///
/// Segment order encodes traversal order. Transforms take the fragment by
/// value and return it, so composition chains like
/// `fragment.rotated(1).reoriented()` leave no shared state behind.
#[derive(Clone, Debug)]
pub struct FilledFrame {
    /// The coordinate frame the segments are relative to.
    frame: Frame,
    /// Segments in traversal order.
    lines: SmallVec<[Segment; INLINE_SEGMENTS]>,
}

impl FilledFrame {
    /// Create an empty fragment scoped to `frame`.
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            lines: SmallVec::new(),
        }
    }

    /// The frame this fragment's coordinates are relative to.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Segments in traversal order.
    pub fn segments(&self) -> &[Segment] {
        &self.lines
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the fragment holds no segments yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Where the path enters the fragment, if any segments exist.
    pub fn entry_point(&self) -> Option<FrameCoord> {
        self.lines.first().map(|seg| seg.start)
    }

    /// Where the path exits the fragment, if any segments exist.
    pub fn exit_point(&self) -> Option<FrameCoord> {
        self.lines.last().map(|seg| seg.end)
    }

    /// Append a segment, preserving traversal order.
    pub fn add_line(&mut self, start: FrameCoord, end: FrameCoord) {
        self.lines.push(Segment::new(start, end));
    }

    /// Rotate every endpoint about the frame center by `quarter_turns`
    /// multiples of 90°. Segment order is unchanged.
    pub fn rotated(mut self, quarter_turns: i32) -> Self {
        let angle = f64::from(quarter_turns) * FRAC_PI_2;
        for seg in &mut self.lines {
            seg.start = seg.start.rotated(angle);
            seg.end = seg.end.rotated(angle);
        }
        self
    }

    /// Flip the traversal direction while keeping the geometry identical.
    ///
    /// Reverses segment order and swaps each segment's endpoints. After a
    /// quarter-turn rotation a sub-curve's natural entry and exit no longer
    /// line up with where the parent path needs to enter and leave it; this
    /// is the other half of that correction.
    pub fn reoriented(mut self) -> Self {
        self.lines.reverse();
        for seg in &mut self.lines {
            *seg = seg.flipped();
        }
        self
    }

    /// Reproject `other`'s endpoint into this fragment's normalized space.
    fn reproject(&self, other: &Self, coord: FrameCoord) -> FrameCoord {
        self.frame.frame_coords_of(other.frame.real_coords(coord))
    }

    /// Append every segment of `other`, reprojected into this fragment's
    /// coordinate frame.
    ///
    /// This is a pure change of coordinate frame: each endpoint is projected
    /// through `other`'s frame into absolute pixel space and back through
    /// this fragment's frame. `other` is only read and may be dropped
    /// afterwards.
    pub fn subsume(&mut self, other: &Self) {
        self.lines.reserve(other.lines.len());
        for seg in &other.lines {
            let start = self.reproject(other, seg.start);
            let end = self.reproject(other, seg.end);
            self.lines.push(Segment::new(start, end));
        }
    }

    /// Like [`FilledFrame::subsume`], but first appends a connecting segment
    /// from this fragment's exit point to `other`'s reprojected entry point.
    ///
    /// The connector is what turns four quadrant sub-curves into one
    /// continuous path. When this fragment is still empty there is nothing
    /// to connect from and the call degenerates to a plain subsume.
    pub fn subsume_with_connection(&mut self, other: &Self) {
        if let (Some(exit), Some(entry)) = (self.exit_point(), other.entry_point()) {
            let entry = self.reproject(other, entry);
            self.lines.push(Segment::new(exit, entry));
        }
        self.subsume(other);
    }

    /// Flatten into an ordered sequence of absolute integer-pixel segments.
    ///
    /// Endpoints are projected through this fragment's frame and floored to
    /// pixels, in traversal order. This is the only place coordinates are
    /// rounded.
    pub fn to_rendering_queue(&self) -> RenderingQueue {
        let segments = self
            .lines
            .iter()
            .map(|seg| {
                PixelSegment::new(
                    self.frame.real_coords(seg.start).floor(),
                    self.frame.real_coords(seg.end).floor(),
                )
            })
            .collect();
        RenderingQueue::new(segments)
    }
}
