//! Corner smoothing
//!
//! Every ring vertex is replaced by a quadratic corner: the curve starts `r`
//! before the vertex along the incoming edge, ends `r` after it along the
//! outgoing edge, and uses the vertex itself as control point. The radius is
//! clamped to half of each adjacent edge, so neighboring corners can at most
//! meet in the middle of their shared edge and never overlap.
//!
//! Convex and reflex corners go through exactly the same arithmetic; the
//! direction vectors carry the orientation.

use crate::layout::Point;

use super::ring::{Polygon, Ring};

/// One rounded corner of a ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    /// Original polygon vertex, used as the curve's control point
    pub vertex: Point,
    /// Where the curve leaves the incoming edge
    pub start: Point,
    /// Where the curve joins the outgoing edge
    pub end: Point,
    /// Effective radius after clamping
    pub radius: f64,
}

impl Corner {
    /// A corner with no rounding
    pub fn sharp(vertex: Point) -> Self {
        Self {
            vertex,
            start: vertex,
            end: vertex,
            radius: 0.0,
        }
    }

    pub fn is_sharp(&self) -> bool {
        self.radius == 0.0
    }
}

/// A ring whose vertices have all been rounded
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedRing {
    pub corners: Vec<Corner>,
}

impl SmoothedRing {
    /// Ring with every corner left sharp
    pub fn sharp(ring: &Ring) -> Self {
        Self {
            corners: ring.points().iter().copied().map(Corner::sharp).collect(),
        }
    }
}

/// Round every vertex of `ring` with radius up to `requested_radius`
pub fn smooth_ring(ring: &Ring, requested_radius: f64) -> SmoothedRing {
    let requested = if requested_radius.is_finite() {
        requested_radius.max(0.0)
    } else {
        0.0
    };

    let corners = ring
        .points()
        .iter()
        .enumerate()
        .map(|(i, &curr)| {
            let v_prev = curr - ring.prev(i);
            let v_next = ring.next(i) - curr;
            let radius = requested
                .min(v_prev.length() / 2.0)
                .min(v_next.length() / 2.0);

            if radius <= 0.0 {
                return Corner::sharp(curr);
            }
            Corner {
                vertex: curr,
                start: curr - v_prev.normalize() * radius,
                end: curr + v_next.normalize() * radius,
                radius,
            }
        })
        .collect();

    SmoothedRing { corners }
}

/// Smooth each ring of a polygon independently
pub fn smooth_polygon(polygon: &Polygon, requested_radius: f64) -> Vec<SmoothedRing> {
    polygon
        .rings
        .iter()
        .map(|ring| smooth_ring(ring, requested_radius))
        .collect()
}
