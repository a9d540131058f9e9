//! Outline generation pipeline
//!
//! Lines are turned into padded rectangles, merged (or kept per line),
//! smoothed corner by corner, and emitted as path data. Geometry failures
//! never escape: the outline degrades to a plain rectangle around all lines.

use std::str::FromStr;

use serde::Deserialize;

use crate::geometry::{
    smooth_polygon, smooth_ring, Corner, GeometryError, GridUnion, Ring, SmoothedRing,
    UnionEngine,
};
use crate::layout::{build_rectangles, rectangles_bounds, BlobOptions, BoundingBox, Line, Rect};
use crate::renderer::ResolvedPath;

/// How line rectangles become an outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineMode {
    /// Union of all rectangles, rounded as one shape
    #[default]
    Merged,
    /// An independent rounded rectangle per line
    PerLine,
}

impl FromStr for OutlineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "merged" => Ok(OutlineMode::Merged),
            "per_line" => Ok(OutlineMode::PerLine),
            other => Err(format!("unknown outline mode '{}'", other)),
        }
    }
}

/// The generated outline
#[derive(Debug, Clone, PartialEq)]
pub struct BlobPath {
    /// SVG path data (`M`, `L`, `Q`, `Z` only)
    pub d: String,
    /// Extent of all line rectangles, spread included
    pub bounds: BoundingBox,
    /// Smoothed rings the path was emitted from
    pub rings: Vec<SmoothedRing>,
    /// True when geometry failed and the plain bounding rectangle was emitted
    pub fallback: bool,
}

impl BlobPath {
    /// Nothing to render
    pub fn empty() -> Self {
        Self {
            d: String::new(),
            bounds: BoundingBox::zero(),
            rings: Vec::new(),
            fallback: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    /// Segment form of the path, for canvas-style consumers
    pub fn segments(&self) -> ResolvedPath {
        ResolvedPath::from_rings(&self.rings)
    }

    fn from_rings(rings: Vec<SmoothedRing>, bounds: BoundingBox, fallback: bool) -> Self {
        Self {
            d: ResolvedPath::from_rings(&rings).to_svg_d(),
            bounds,
            rings,
            fallback,
        }
    }
}

/// Generate the outline for a block of measured lines
///
/// Pure and deterministic: the same input always yields the same path.
/// Out-of-range options are clamped, never rejected.
pub fn generate(lines: &[Line], options: &BlobOptions) -> BlobPath {
    generate_with(lines, options, &GridUnion)
}

/// Generate the outline with a custom union engine
pub fn generate_with(lines: &[Line], options: &BlobOptions, engine: &dyn UnionEngine) -> BlobPath {
    let options = options.sanitized();
    let rects = build_rectangles(lines, &options);
    let Some(bounds) = rectangles_bounds(&rects) else {
        return BlobPath::empty();
    };

    let blob = match outline_rings(&rects, &options, engine) {
        Ok(rings) => BlobPath::from_rings(rings, bounds, false),
        Err(err) => {
            tracing::warn!(error = %err, rects = rects.len(), "outline geometry failed, using bounding rectangle");
            let corners = bounds.corners().map(Corner::sharp).to_vec();
            BlobPath::from_rings(vec![SmoothedRing { corners }], bounds, true)
        }
    };

    tracing::debug!(
        lines = lines.len(),
        rects = rects.len(),
        rings = blob.rings.len(),
        mode = ?options.mode,
        fallback = blob.fallback,
        "generated outline"
    );
    blob
}

fn outline_rings(
    rects: &[Rect],
    options: &BlobOptions,
    engine: &dyn UnionEngine,
) -> Result<Vec<SmoothedRing>, GeometryError> {
    let radius = options.requested_radius();
    match options.mode {
        OutlineMode::Merged => {
            let polygon = engine.union(rects)?;
            if polygon.is_empty() {
                return Err(GeometryError::EmptyUnion);
            }
            Ok(smooth_polygon(&polygon, radius))
        }
        OutlineMode::PerLine => rects
            .iter()
            .map(|rect| Ring::from_rect(rect).map(|ring| smooth_ring(&ring, radius)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;
    use crate::layout::{lines_from_widths, Align};

    struct FailingUnion;

    impl UnionEngine for FailingUnion {
        fn union(&self, _rects: &[Rect]) -> Result<Polygon, GeometryError> {
            Err(GeometryError::NonFinite)
        }
    }

    struct EmptyUnion;

    impl UnionEngine for EmptyUnion {
        fn union(&self, _rects: &[Rect]) -> Result<Polygon, GeometryError> {
            Ok(Polygon::default())
        }
    }

    fn options() -> BlobOptions {
        BlobOptions::new()
            .with_line_height(40.0)
            .with_spread(8.0)
            .with_roundness(1.0)
            .with_align(Align::Center)
    }

    #[test]
    fn test_empty_input() {
        let blob = generate(&[], &options());
        assert!(blob.is_empty());
        assert_eq!(blob.bounds, BoundingBox::zero());
        assert!(!blob.fallback);
    }

    #[test]
    fn test_blank_lines_only() {
        let lines = vec![Line::new(0, "", 0.0), Line::new(1, "  ", 12.0)];
        let blob = generate(&lines, &options());
        assert!(blob.is_empty());
        assert!(blob.rings.is_empty());
    }

    #[test]
    fn test_merged_stepped_blob() {
        let blob = generate(&lines_from_widths(&[100.0, 60.0, 90.0]), &options());
        assert!(!blob.fallback);
        assert_eq!(blob.rings.len(), 1);
        assert_eq!(blob.rings[0].corners.len(), 12);
        assert_eq!(blob.bounds, BoundingBox::new(-8.0, -8.0, 116.0, 136.0));
    }

    #[test]
    fn test_per_line_mode() {
        let blob = generate(
            &lines_from_widths(&[100.0, 60.0, 90.0]),
            &options().with_mode(OutlineMode::PerLine),
        );
        assert_eq!(blob.rings.len(), 3);
        assert!(blob.rings.iter().all(|r| r.corners.len() == 4));
        assert_eq!(blob.d.matches('M').count(), 3);
    }

    #[test]
    fn test_union_failure_falls_back_to_rectangle() {
        let blob = generate_with(&lines_from_widths(&[100.0, 60.0]), &options(), &FailingUnion);
        assert!(blob.fallback);
        assert_eq!(blob.rings.len(), 1);
        assert!(blob.rings[0].corners.iter().all(Corner::is_sharp));
        assert_eq!(
            blob.d,
            "M-8.00 -8.00 L108.00 -8.00 L108.00 88.00 L-8.00 88.00 L-8.00 -8.00 Z"
        );
    }

    #[test]
    fn test_empty_union_falls_back() {
        let blob = generate_with(&lines_from_widths(&[50.0]), &options(), &EmptyUnion);
        assert!(blob.fallback);
        assert!(!blob.is_empty());
    }

    #[test]
    fn test_degenerate_rectangle_falls_back() {
        // Zero spread and zero line height collapse every rectangle
        let opts = BlobOptions::new().with_line_height(0.0).with_spread(0.0);
        let blob = generate(&lines_from_widths(&[50.0, 30.0]), &opts);
        assert!(blob.fallback);
        assert!(blob.d.starts_with('M'));
    }

    #[test]
    fn test_invalid_options_are_clamped() {
        let lines = lines_from_widths(&[80.0]);
        let clamped = generate(&lines, &options().with_spread(-5.0).with_roundness(3.0));
        let explicit = generate(&lines, &options().with_spread(0.0).with_roundness(1.0));
        assert_eq!(clamped, explicit);
    }

    #[test]
    fn test_segments_match_path_string() {
        let blob = generate(&lines_from_widths(&[40.0, 70.0]), &options());
        assert_eq!(blob.segments().to_svg_d(), blob.d);
    }

    #[test]
    fn test_outline_mode_from_str() {
        assert_eq!("merged".parse::<OutlineMode>(), Ok(OutlineMode::Merged));
        assert_eq!("per-line".parse::<OutlineMode>(), Ok(OutlineMode::PerLine));
        assert!("blob".parse::<OutlineMode>().is_err());
    }
}
