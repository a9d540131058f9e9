//! Text Blob - smooth outlines that hug a block of wrapped text
//!
//! Each measured line becomes a padded rectangle; the rectangles are merged
//! into one stepped polygon and every corner, convex or concave, is rounded
//! with a clamped quadratic curve. The result is SVG path data plus the
//! bounding box to use as a viewBox.
//!
//! # Example
//!
//! ```rust
//! use text_blob::{generate, lines_from_widths, Align, BlobOptions};
//!
//! let lines = lines_from_widths(&[100.0, 60.0, 90.0]);
//! let options = BlobOptions::new()
//!     .with_line_height(40.0)
//!     .with_spread(8.0)
//!     .with_roundness(1.0)
//!     .with_align(Align::Center);
//!
//! let blob = generate(&lines, &options);
//! assert!(blob.d.starts_with('M'));
//! assert_eq!(blob.rings.len(), 1);
//! ```

pub mod config;
pub mod geometry;
pub mod layout;
pub mod outline;
pub mod renderer;

pub use config::{ConfigError, ConfigFile};
pub use geometry::{GeometryError, GridUnion, UnionEngine};
pub use layout::{
    lines_from_widths, wrap_text, Align, BlobOptions, BoundingBox, FixedAdvance, Line, Point,
    Rect, TextMeasure,
};
pub use outline::{generate, generate_with, BlobPath, OutlineMode};
pub use renderer::{render_svg, render_svg_with_lines, SvgConfig};

/// Wrap, measure and outline free text in one step
///
/// # Example
///
/// ```rust
/// use text_blob::{outline_text, BlobOptions, FixedAdvance};
///
/// let (lines, blob) = outline_text(
///     "hello gooey world",
///     80.0,
///     &FixedAdvance::new(10.0),
///     &BlobOptions::default(),
/// );
/// assert_eq!(lines.len(), 3);
/// assert!(!blob.is_empty());
/// ```
pub fn outline_text(
    text: &str,
    max_width: f64,
    measurer: &impl TextMeasure,
    options: &BlobOptions,
) -> (Vec<Line>, BlobPath) {
    let lines = wrap_text(text, max_width, measurer);
    let blob = generate(&lines, options);
    (lines, blob)
}
