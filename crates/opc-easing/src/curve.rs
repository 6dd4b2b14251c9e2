//! The assembled piecewise curve and segment lookup.

use std::sync::Arc;

use crate::anchor::{self, Anchor, AnchorSource};
use crate::error::{EasingError, Result};
use crate::segment::{self, Point, Segment};

/// An immutable piecewise cubic Bezier curve spanning `[0, 1]` in x.
///
/// Consecutive segments share knots, the first segment starts at x = 0 and
/// the last ends at x = 1. The segment list is shared, so clones are cheap and
/// never observe each other.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    anchors: Arc<[Anchor]>,
    segments: Arc<[Segment]>,
}

impl Curve {
    /// Normalize `source` and assemble its segments.
    ///
    /// # Errors
    ///
    /// Returns any validation error from [`anchor::normalize`].
    pub fn new(source: &AnchorSource) -> Result<Self> {
        let anchors = anchor::normalize(source)?;
        Self::from_sorted(anchors)
    }

    /// The built-in ease-in-out curve.
    pub fn ease_in_out() -> Self {
        let anchors = anchor::DEFAULT_ANCHORS.to_vec();
        let segments = segment::build_segments(&anchors);
        Self {
            anchors: anchors.into(),
            segments: segments.into(),
        }
    }

    fn from_sorted(anchors: Vec<Anchor>) -> Result<Self> {
        let segments = segment::build_segments(&anchors);
        if segments.is_empty() {
            return Err(EasingError::InsufficientAnchors {
                count: anchors.len(),
            });
        }
        Ok(Self {
            anchors: anchors.into(),
            segments: segments.into(),
        })
    }

    /// The validated anchors, sorted by `pX`, with handles as authored.
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// The segments in ascending x order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Start knot of the first segment.
    pub fn start(&self) -> Point {
        self.segments.first().map_or(Point::new(0.0, 0.0), |s| s.p1)
    }

    /// End knot of the last segment.
    pub fn end(&self) -> Point {
        self.segments.last().map_or(Point::new(1.0, 1.0), |s| s.p2)
    }

    /// Index of the segment whose x range contains `x`.
    ///
    /// Inputs before the first segment map to 0 and inputs past the last map
    /// to the last index. A knot shared by two segments may resolve to either,
    /// both give the same y there.
    pub fn segment_index(&self, x: f64) -> usize {
        let last = self.segments.len().saturating_sub(1);
        if x <= self.start().x {
            return 0;
        }
        if x >= self.end().x {
            return last;
        }

        let mut lo = 0usize;
        let mut hi = last;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            let Some(segment) = self.segments.get(mid) else {
                break;
            };
            if x < segment.p1.x {
                match mid.checked_sub(1) {
                    Some(next) => hi = next,
                    None => break,
                }
            } else if x > segment.p2.x {
                lo = mid + 1;
            } else {
                return mid;
            }
        }
        lo.min(last)
    }

    /// The segment owning `x`, see [`Curve::segment_index`].
    pub fn segment_for(&self, x: f64) -> Option<&Segment> {
        self.segments.get(self.segment_index(x))
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::ease_in_out()
    }
}
