//! Path emission
//!
//! Converts smoothed rings into SVG path `d` attribute strings. Only move,
//! line, quadratic and close commands are produced, so every renderer draws
//! the same curves.

use crate::geometry::{Corner, SmoothedRing, EPSILON};
use crate::layout::{BoundingBox, Point};

/// A segment in a resolved path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point (begins a subpath)
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Quadratic Bezier curve
    QuadraticTo { control: Point, end: Point },
    /// Close the current subpath
    Close,
}

/// A resolved path ready for SVG or canvas rendering
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    /// One closed subpath per ring
    ///
    /// Each subpath starts where its first corner's curve begins, alternates
    /// edge lines and corner curves, and returns to its start point before
    /// closing. Sharp corners become plain line vertices.
    pub fn from_rings(rings: &[SmoothedRing]) -> Self {
        let mut segments = Vec::new();
        for ring in rings {
            push_ring(&mut segments, &ring.corners);
        }
        Self { segments }
    }

    /// A plain rectangle with no rounding
    pub fn rectangle(bounds: &BoundingBox) -> Self {
        let corners = bounds.corners().map(Corner::sharp);
        let mut segments = Vec::new();
        push_ring(&mut segments, &corners);
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of closed subpaths
    pub fn subpath_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::MoveTo(_)))
            .count()
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        if self.segments.is_empty() {
            return String::new();
        }

        let mut d = String::new();

        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(p) => {
                    if !d.is_empty() {
                        d.push(' ');
                    }
                    d.push_str(&format!("M{} {}", num(p.x), num(p.y)));
                }
                PathSegment::LineTo(p) => {
                    d.push_str(&format!(" L{} {}", num(p.x), num(p.y)));
                }
                PathSegment::QuadraticTo { control, end } => {
                    // SVG Q command: Q cx cy ex ey
                    d.push_str(&format!(
                        " Q{} {} {} {}",
                        num(control.x),
                        num(control.y),
                        num(end.x),
                        num(end.y)
                    ));
                }
                PathSegment::Close => {
                    d.push_str(" Z");
                }
            }
        }

        d
    }
}

fn push_ring(segments: &mut Vec<PathSegment>, corners: &[Corner]) {
    let Some(first) = corners.first() else {
        return;
    };

    segments.push(PathSegment::MoveTo(first.start));
    let mut pen = first.start;

    for (k, corner) in corners.iter().enumerate() {
        if k > 0 && !pen.approx_eq(corner.start, EPSILON) {
            segments.push(PathSegment::LineTo(corner.start));
            pen = corner.start;
        }
        if !corner.is_sharp() {
            segments.push(PathSegment::QuadraticTo {
                control: corner.vertex,
                end: corner.end,
            });
            pen = corner.end;
        }
    }

    if !pen.approx_eq(first.start, EPSILON) {
        segments.push(PathSegment::LineTo(first.start));
    }
    segments.push(PathSegment::Close);
}

/// Two-decimal coordinate without a negative zero
fn num(value: f64) -> String {
    let s = format!("{:.2}", value);
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}
