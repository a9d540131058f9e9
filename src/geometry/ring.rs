//! Closed polygon boundaries

use crate::layout::{Point, Rect};

use super::error::GeometryError;

/// Points closer than this are considered the same vertex
pub const EPSILON: f64 = 1e-7;

/// Vertex ordering of a ring, as seen on a y-down canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// One closed polygon boundary
///
/// Stored as an ordered vertex list; the closing edge from the last vertex
/// back to the first is implicit. Neighbors are found by modular indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Build a ring, dropping consecutive duplicate points (including a
    /// repeated closing point)
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        let mut deduped: Vec<Point> = Vec::with_capacity(points.len());
        for p in points {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(GeometryError::NonFinite);
            }
            if deduped.last().map_or(true, |last| !last.approx_eq(p, EPSILON)) {
                deduped.push(p);
            }
        }
        while deduped.len() > 1 && deduped[0].approx_eq(deduped[deduped.len() - 1], EPSILON) {
            deduped.pop();
        }

        if deduped.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                count: deduped.len(),
            });
        }
        Ok(Self { points: deduped })
    }

    /// Clockwise ring around a rectangle, starting at its top-left corner
    pub fn from_rect(rect: &Rect) -> Result<Self, GeometryError> {
        if rect.width <= EPSILON || rect.height <= EPSILON {
            return Err(GeometryError::degenerate(rect.line_index));
        }
        Self::new(rect.bounds().corners().to_vec())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertex before `i`, wrapping around
    pub fn prev(&self, i: usize) -> Point {
        let n = self.points.len();
        self.points[(i + n - 1) % n]
    }

    /// Vertex after `i`, wrapping around
    pub fn next(&self, i: usize) -> Point {
        self.points[(i + 1) % self.points.len()]
    }

    /// Shoelace area; positive for clockwise rings on a y-down canvas
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.0
    }

    pub fn winding(&self) -> Winding {
        if self.signed_area() >= 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

/// One or more rings; several when the merged rectangles form islands
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Total vertex count over all rings
    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(Ring::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_ring_drops_duplicates() {
        let mut pts = square();
        pts.insert(1, Point::new(0.0, 0.0));
        pts.push(Point::new(0.0, 0.0));
        let ring = Ring::new(pts).unwrap();
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn test_ring_needs_three_points() {
        let err = Ring::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).unwrap_err();
        assert!(matches!(err, GeometryError::TooFewPoints { count: 2 }));
    }

    #[test]
    fn test_ring_rejects_nan() {
        let mut pts = square();
        pts[2] = Point::new(f64::NAN, 1.0);
        assert!(matches!(Ring::new(pts), Err(GeometryError::NonFinite)));
    }

    #[test]
    fn test_modular_neighbors() {
        let ring = Ring::new(square()).unwrap();
        assert_eq!(ring.prev(0), Point::new(0.0, 10.0));
        assert_eq!(ring.next(3), Point::new(0.0, 0.0));
        assert_eq!(ring.next(1), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_winding_and_area() {
        let ring = Ring::new(square()).unwrap();
        assert_eq!(ring.signed_area(), 100.0);
        assert_eq!(ring.winding(), Winding::Clockwise);

        let mut reversed = square();
        reversed.reverse();
        let ring = Ring::new(reversed).unwrap();
        assert_eq!(ring.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn test_from_rect() {
        let ring = Ring::from_rect(&Rect::new(1.0, 2.0, 3.0, 4.0, 0)).unwrap();
        assert_eq!(ring.points()[0], Point::new(1.0, 2.0));
        assert_eq!(ring.points()[2], Point::new(4.0, 6.0));
        assert_eq!(ring.winding(), Winding::Clockwise);
    }

    #[test]
    fn test_from_zero_area_rect() {
        let err = Ring::from_rect(&Rect::new(0.0, 0.0, 0.0, 4.0, 3)).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateRectangle { line_index: 3 }));
    }
}
