//! Cubic Bezier segments and their assembly from anchors.

use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;

/// A point in the curve plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate (the easing input axis).
    pub x: f64,
    /// Vertical coordinate (the easing output axis).
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point-reflect `self` through `center`: `2·center − self`.
    #[inline]
    pub fn reflect_through(self, center: Point) -> Point {
        Point::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }
}

/// One cubic Bezier piece of an easing curve.
///
/// `p1` and `p2` are knots the curve passes through, `c1` is the outgoing
/// control of `p1` and `c2` the incoming control of `p2`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start knot.
    pub p1: Point,
    /// Outgoing control of the start knot.
    pub c1: Point,
    /// Incoming control of the end knot.
    pub c2: Point,
    /// End knot.
    pub p2: Point,
}

impl Segment {
    /// Create a segment from its four control points.
    pub const fn new(p1: Point, c1: Point, c2: Point, p2: Point) -> Self {
        Self { p1, c1, c2, p2 }
    }

    /// Evaluate the segment at parameter `t`.
    ///
    /// Uses the formula: B(t) = (1-t)³P₁ + 3(1-t)²tC₁ + 3(1-t)t²C₂ + t³P₂
    ///
    /// `t` is not clamped; callers pass values in `[0,1]`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        let [b0, b1, b2, b3] = bernstein(t);
        Point::new(
            b0 * self.p1.x + b1 * self.c1.x + b2 * self.c2.x + b3 * self.p2.x,
            b0 * self.p1.y + b1 * self.c1.y + b2 * self.c2.y + b3 * self.p2.y,
        )
    }

    /// The x-component of [`Segment::point_at`].
    #[inline]
    pub fn x_at(&self, t: f64) -> f64 {
        let [b0, b1, b2, b3] = bernstein(t);
        b0 * self.p1.x + b1 * self.c1.x + b2 * self.c2.x + b3 * self.p2.x
    }

    /// The y-component of [`Segment::point_at`].
    #[inline]
    pub fn y_at(&self, t: f64) -> f64 {
        let [b0, b1, b2, b3] = bernstein(t);
        b0 * self.p1.y + b1 * self.c1.y + b2 * self.c2.y + b3 * self.p2.y
    }

    /// dx/dt of the segment at parameter `t`.
    ///
    /// The derivative of a cubic Bezier is a quadratic Bezier:
    /// B'(t) = 3(1-t)²(C₁-P₁) + 6(1-t)t(C₂-C₁) + 3t²(P₂-C₂)
    #[inline]
    pub fn dx_dt(&self, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * (self.c1.x - self.p1.x)
            + 6.0 * mt * t * (self.c2.x - self.c1.x)
            + 3.0 * t * t * (self.p2.x - self.c2.x)
    }

    /// Whether `x` lies within `[p1.x, p2.x]`.
    #[inline]
    pub fn contains_x(&self, x: f64) -> bool {
        self.p1.x <= x && x <= self.p2.x
    }
}

#[inline]
fn bernstein(t: f64) -> [f64; 4] {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;
    [mt2 * mt, 3.0 * mt2 * t, 3.0 * mt * t2, t2 * t]
}

/// Assemble segments from validated anchors sorted by `pX`.
///
/// Each anchor carries one authored handle. It is used as the outgoing
/// control, and its reflection through the anchor point is the incoming
/// control of the segment that ends there. The last anchor's handle is
/// reflected once before assembly, so the final segment's incoming control is
/// the handle exactly as authored.
///
/// Returns an empty vector for fewer than two anchors.
pub fn build_segments(anchors: &[Anchor]) -> Vec<Segment> {
    let mut anchors = anchors.to_vec();
    if let Some(last) = anchors.last_mut() {
        *last = last.mirrored();
    }

    anchors
        .windows(2)
        .filter_map(|pair| match pair {
            [start, end] => Some(Segment::new(
                start.point(),
                start.handle(),
                incoming_control(end),
                end.point(),
            )),
            _ => None,
        })
        .collect()
}

/// The incoming control at `anchor`: its handle reflected through its point.
#[inline]
fn incoming_control(anchor: &Anchor) -> Point {
    anchor.handle().reflect_through(anchor.point())
}
