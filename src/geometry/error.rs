//! Error types for the geometry stages

use thiserror::Error;

/// Reasons the union stage can fail to produce a valid polygon
///
/// These never reach callers of [`crate::generate`]: they trigger the
/// bounding-box fallback instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A rectangle with zero (or negative) width or height
    #[error("rectangle for line {line_index} has zero area")]
    DegenerateRectangle { line_index: usize },

    /// NaN or infinite coordinate
    #[error("non-finite coordinate")]
    NonFinite,

    /// Fewer than three distinct points left after cleanup
    #[error("ring has {count} distinct points, need at least 3")]
    TooFewPoints { count: usize },

    /// The union produced no rings for non-empty input
    #[error("union produced no rings")]
    EmptyUnion,

    /// Boundary tracing reached a vertex with no way to continue
    #[error("boundary is not closed at ({x}, {y})")]
    OpenBoundary { x: f64, y: f64 },
}

impl GeometryError {
    /// Create a degenerate rectangle error
    pub fn degenerate(line_index: usize) -> Self {
        Self::DegenerateRectangle { line_index }
    }
}
