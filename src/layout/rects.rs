//! Rectangle builder: one padded rectangle per visible line

use super::config::{non_negative, BlobOptions};
use super::types::{BoundingBox, Line, Rect};

/// Build the per-line rectangles for a block of wrapped lines
///
/// Each line is placed on row `line.index`, aligned inside the reference
/// width, and centered vertically on the font box within its line box. Blank
/// lines produce no rectangle but still occupy their row. `options` are
/// expected to be sanitized.
pub fn build_rectangles(lines: &[Line], options: &BlobOptions) -> Vec<Rect> {
    let reference_width = options
        .reference_width
        .unwrap_or_else(|| widest_line(lines));
    let font_size = options.font_size();
    let spread = options.spread;
    let baseline_offset = (options.line_height - font_size) / 2.0;

    lines
        .iter()
        .filter(|line| !line.is_blank())
        .map(|line| {
            let width = non_negative(line.width);
            let x = options.align.offset(reference_width, width);
            let y = line.index as f64 * options.line_height + baseline_offset;
            Rect::new(
                x - spread,
                y - spread,
                width + 2.0 * spread,
                font_size + 2.0 * spread,
                line.index,
            )
        })
        .collect()
}

/// Smallest box containing every rectangle, or `None` when there are none
pub fn rectangles_bounds(rects: &[Rect]) -> Option<BoundingBox> {
    rects
        .iter()
        .map(Rect::bounds)
        .reduce(|acc, b| acc.union(&b))
}

fn widest_line(lines: &[Line]) -> f64 {
    lines
        .iter()
        .filter(|line| !line.is_blank())
        .map(|line| non_negative(line.width))
        .fold(0.0, f64::max)
}
