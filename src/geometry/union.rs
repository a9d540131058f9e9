//! Polygon union over axis-aligned rectangles
//!
//! The union primitive is hidden behind [`UnionEngine`] so another clipping
//! implementation can be swapped in. [`GridUnion`] compresses the rectangle
//! edges into a grid of cells, marks the covered cells, and walks the directed
//! boundary between covered and uncovered cells. Outer boundaries come out
//! clockwise (y-down), holes counter-clockwise, with collinear vertices
//! removed.

use crate::layout::{Point, Rect};

use super::error::GeometryError;
use super::ring::{Polygon, Ring, EPSILON};

/// Merges rectangles into closed rings
pub trait UnionEngine {
    fn union(&self, rects: &[Rect]) -> Result<Polygon, GeometryError>;
}

/// Coordinate-compressed cell union
#[derive(Debug, Clone, Copy, Default)]
pub struct GridUnion;

impl UnionEngine for GridUnion {
    fn union(&self, rects: &[Rect]) -> Result<Polygon, GeometryError> {
        if rects.is_empty() {
            return Ok(Polygon::default());
        }
        for rect in rects {
            let finite = [rect.x, rect.y, rect.width, rect.height]
                .iter()
                .all(|v| v.is_finite());
            if !finite {
                return Err(GeometryError::NonFinite);
            }
            if rect.width <= EPSILON || rect.height <= EPSILON {
                return Err(GeometryError::degenerate(rect.line_index));
            }
        }

        let xs = Axis::new(rects.iter().flat_map(|r| [r.x, r.right()]));
        let ys = Axis::new(rects.iter().flat_map(|r| [r.y, r.bottom()]));
        let grid = CellGrid::cover(&xs, &ys, rects);
        let edges = grid.boundary_edges();
        let rings = trace_rings(&edges, &xs, &ys)?;

        tracing::trace!(
            rects = rects.len(),
            cells = grid.cols * grid.rows,
            edges = edges.len(),
            rings = rings.len(),
            "rectangle union"
        );
        Ok(Polygon::new(rings))
    }
}

/// Sorted distinct coordinates along one axis
struct Axis {
    coords: Vec<f64>,
}

impl Axis {
    fn new(values: impl Iterator<Item = f64>) -> Self {
        let mut sorted: Vec<f64> = values.collect();
        sorted.sort_by(f64::total_cmp);

        let mut coords: Vec<f64> = Vec::with_capacity(sorted.len());
        for v in sorted {
            if coords.last().map_or(true, |&last| v - last > EPSILON) {
                coords.push(v);
            }
        }
        Self { coords }
    }

    /// Grid line index of a coordinate that went into this axis
    fn index(&self, value: f64) -> usize {
        let idx = self.coords.partition_point(|&c| c < value - EPSILON);
        idx.min(self.coords.len() - 1)
    }

    fn len(&self) -> usize {
        self.coords.len()
    }
}

/// Covered/uncovered flag per grid cell
struct CellGrid {
    cols: usize,
    rows: usize,
    filled: Vec<bool>,
}

impl CellGrid {
    fn cover(xs: &Axis, ys: &Axis, rects: &[Rect]) -> Self {
        let cols = xs.len().saturating_sub(1);
        let rows = ys.len().saturating_sub(1);
        let mut filled = vec![false; cols * rows];

        for rect in rects {
            let (i0, i1) = (xs.index(rect.x), xs.index(rect.right()));
            let (j0, j1) = (ys.index(rect.y), ys.index(rect.bottom()));
            for j in j0..j1 {
                for i in i0..i1 {
                    filled[j * cols + i] = true;
                }
            }
        }

        Self { cols, rows, filled }
    }

    fn is_filled(&self, i: isize, j: isize) -> bool {
        if i < 0 || j < 0 || i as usize >= self.cols || j as usize >= self.rows {
            return false;
        }
        self.filled[j as usize * self.cols + i as usize]
    }

    /// Directed edges separating covered from uncovered cells, with the
    /// covered side on the right of the direction of travel
    fn boundary_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for j in 0..self.rows {
            for i in 0..self.cols {
                let (ci, cj) = (i as isize, j as isize);
                if !self.is_filled(ci, cj) {
                    continue;
                }
                if !self.is_filled(ci, cj - 1) {
                    edges.push(Edge::new((i, j), (i + 1, j), (1, 0)));
                }
                if !self.is_filled(ci + 1, cj) {
                    edges.push(Edge::new((i + 1, j), (i + 1, j + 1), (0, 1)));
                }
                if !self.is_filled(ci, cj + 1) {
                    edges.push(Edge::new((i + 1, j + 1), (i, j + 1), (-1, 0)));
                }
                if !self.is_filled(ci - 1, cj) {
                    edges.push(Edge::new((i, j + 1), (i, j), (0, -1)));
                }
            }
        }
        edges
    }
}

/// A unit boundary edge between two grid vertices
#[derive(Debug, Clone, Copy)]
struct Edge {
    from: (usize, usize),
    to: (usize, usize),
    dir: (i32, i32),
}

impl Edge {
    fn new(from: (usize, usize), to: (usize, usize), dir: (i32, i32)) -> Self {
        Self { from, to, dir }
    }
}

/// Preference for leaving a vertex in direction `out` after arriving along
/// `incoming`: right turn, then straight, then left. U-turns are never taken.
///
/// Taking the rightmost turn splits rectangles that only touch at a corner
/// into separate rings.
fn turn_rank(incoming: (i32, i32), out: (i32, i32)) -> Option<u8> {
    let cross = incoming.0 * out.1 - incoming.1 * out.0;
    let dot = incoming.0 * out.0 + incoming.1 * out.1;
    match (cross.signum(), dot.signum()) {
        (1, _) => Some(2),
        (0, 1) => Some(1),
        (-1, _) => Some(0),
        _ => None,
    }
}

fn trace_rings(edges: &[Edge], xs: &Axis, ys: &Axis) -> Result<Vec<Ring>, GeometryError> {
    let stride = xs.len();
    let vertex_id = |(i, j): (usize, usize)| j * stride + i;

    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); xs.len() * ys.len()];
    for (idx, edge) in edges.iter().enumerate() {
        outgoing[vertex_id(edge.from)].push(idx);
    }

    let point = |(i, j): (usize, usize)| Point::new(xs.coords[i], ys.coords[j]);
    let mut used = vec![false; edges.len()];
    let mut rings = Vec::new();

    for start in 0..edges.len() {
        if used[start] {
            continue;
        }

        let mut cycle = Vec::new();
        let mut current = start;
        loop {
            used[current] = true;
            cycle.push(current);

            let edge = edges[current];
            let next = outgoing[vertex_id(edge.to)]
                .iter()
                .copied()
                .filter_map(|cand| turn_rank(edge.dir, edges[cand].dir).map(|rank| (rank, cand)))
                .max_by_key(|&(rank, _)| rank)
                .map(|(_, cand)| cand);

            let open = || {
                let p = point(edge.to);
                GeometryError::OpenBoundary { x: p.x, y: p.y }
            };
            match next {
                Some(n) if n == start => break,
                Some(n) if !used[n] => current = n,
                _ => return Err(open()),
            }
        }

        // Keep only the vertices where the direction changes
        let m = cycle.len();
        let points: Vec<Point> = (0..m)
            .filter(|&k| edges[cycle[(k + m - 1) % m]].dir != edges[cycle[k]].dir)
            .map(|k| point(edges[cycle[k]].from))
            .collect();
        rings.push(Ring::new(points)?);
    }

    Ok(rings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ring::Winding;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(x, y, w, h, 0)
    }

    fn union(rects: &[Rect]) -> Polygon {
        GridUnion.union(rects).expect("union should succeed")
    }

    #[test]
    fn test_empty_input() {
        assert!(union(&[]).is_empty());
    }

    #[test]
    fn test_single_rectangle() {
        let poly = union(&[rect(1.0, 2.0, 10.0, 5.0)]);
        assert_eq!(poly.rings.len(), 1);
        assert_eq!(
            poly.rings[0].points(),
            &[
                Point::new(1.0, 2.0),
                Point::new(11.0, 2.0),
                Point::new(11.0, 7.0),
                Point::new(1.0, 7.0),
            ]
        );
    }

    #[test]
    fn test_stepped_union() {
        let poly = union(&[rect(0.0, 0.0, 100.0, 20.0), rect(10.0, 10.0, 80.0, 20.0)]);
        assert_eq!(poly.rings.len(), 1);
        let ring = &poly.rings[0];
        assert_eq!(
            ring.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 20.0),
                Point::new(90.0, 20.0),
                Point::new(90.0, 30.0),
                Point::new(10.0, 30.0),
                Point::new(10.0, 20.0),
                Point::new(0.0, 20.0),
            ]
        );
        assert_eq!(ring.winding(), Winding::Clockwise);
        assert_eq!(ring.signed_area(), 100.0 * 20.0 + 80.0 * 10.0);
    }

    #[test]
    fn test_equal_widths_merge_to_rectangle() {
        let poly = union(&[
            rect(0.0, 0.0, 50.0, 20.0),
            rect(0.0, 15.0, 50.0, 20.0),
            rect(0.0, 30.0, 50.0, 20.0),
        ]);
        assert_eq!(poly.rings.len(), 1);
        assert_eq!(poly.rings[0].len(), 4);
    }

    #[test]
    fn test_shared_edge_merges() {
        let poly = union(&[rect(0.0, 0.0, 50.0, 10.0), rect(0.0, 10.0, 50.0, 10.0)]);
        assert_eq!(poly.vertex_count(), 4);
    }

    #[test]
    fn test_disjoint_islands() {
        let poly = union(&[rect(0.0, 0.0, 10.0, 10.0), rect(50.0, 0.0, 10.0, 10.0)]);
        assert_eq!(poly.rings.len(), 2);
        assert!(poly
            .rings
            .iter()
            .all(|r| r.len() == 4 && r.winding() == Winding::Clockwise));
    }

    #[test]
    fn test_corner_touching_rectangles_split() {
        let poly = union(&[rect(0.0, 0.0, 10.0, 10.0), rect(10.0, 10.0, 10.0, 10.0)]);
        assert_eq!(poly.rings.len(), 2);
        assert!(poly.rings.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn test_contained_rectangle() {
        let poly = union(&[rect(0.0, 0.0, 100.0, 100.0), rect(10.0, 10.0, 20.0, 20.0)]);
        assert_eq!(poly.rings.len(), 1);
        assert_eq!(poly.rings[0].len(), 4);
    }

    #[test]
    fn test_frame_produces_hole() {
        let poly = union(&[
            rect(0.0, 0.0, 30.0, 10.0),
            rect(0.0, 20.0, 30.0, 10.0),
            rect(0.0, 0.0, 10.0, 30.0),
            rect(20.0, 0.0, 10.0, 30.0),
        ]);
        assert_eq!(poly.rings.len(), 2);
        assert_eq!(poly.rings[0].winding(), Winding::Clockwise);
        assert_eq!(poly.rings[1].winding(), Winding::CounterClockwise);
        assert_eq!(poly.rings[1].signed_area(), -100.0);
    }

    #[test]
    fn test_near_equal_coordinates_snap() {
        let poly = union(&[
            rect(0.0, 0.0, 50.0, 10.0),
            rect(1e-9, 10.0 - 1e-9, 50.0, 10.0),
        ]);
        assert_eq!(poly.rings.len(), 1);
        assert_eq!(poly.rings[0].len(), 4);
    }

    #[test]
    fn test_degenerate_rectangle_is_an_error() {
        let err = GridUnion
            .union(&[rect(0.0, 0.0, 10.0, 10.0), Rect::new(0.0, 20.0, 0.0, 10.0, 1)])
            .unwrap_err();
        assert_eq!(err, GeometryError::DegenerateRectangle { line_index: 1 });
    }

    #[test]
    fn test_non_finite_is_an_error() {
        let err = GridUnion.union(&[rect(f64::NAN, 0.0, 10.0, 10.0)]).unwrap_err();
        assert_eq!(err, GeometryError::NonFinite);
    }

    #[test]
    fn test_deterministic() {
        let rects = [
            rect(-8.0, -8.0, 116.0, 56.0),
            rect(12.0, 32.0, 76.0, 56.0),
            rect(-3.0, 72.0, 106.0, 56.0),
        ];
        assert_eq!(union(&rects), union(&rects));
    }
}
