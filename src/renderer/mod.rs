//! Renderers for generated outlines
//!
//! `path` turns smoothed rings into path data; `svg` wraps an outline in a
//! standalone SVG document.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use path::{PathSegment, ResolvedPath};
pub use svg::{render_svg, render_svg_with_lines, SvgBuilder};
