//! Line layout: measured lines in, padded per-line rectangles out
//!
//! Text measurement itself is an external concern; this module defines the
//! contract for it and places each measured line on its row.

pub mod config;
pub mod measure;
pub mod rects;
pub mod types;

pub use config::BlobOptions;
pub use measure::{lines_from_widths, wrap_text, FixedAdvance, TextMeasure};
pub use rects::{build_rectangles, rectangles_bounds};
pub use types::*;
