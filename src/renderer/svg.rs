//! Standalone SVG documents for generated outlines

use crate::layout::{Align, BlobOptions, BoundingBox, Line};
use crate::outline::BlobPath;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the blob outline as a filled path
    pub fn add_blob(&mut self, d: &str) {
        let prefix = self.prefix();
        let opacity = if self.config.opacity < 1.0 {
            format!(r#" fill-opacity="{}""#, self.config.opacity)
        } else {
            String::new()
        };
        self.elements.push(format!(
            r#"{}<path class="{}blob" d="{}" fill="{}"{}/>"#,
            self.indent_str(),
            prefix,
            d,
            escape_xml(&self.config.fill),
            opacity
        ));
    }

    /// Add one line of text, vertically centered on its row
    pub fn add_text(&mut self, x: f64, y: f64, anchor: &str, font_size: f64, text: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}text" x="{}" y="{}" text-anchor="{}" dominant-baseline="central" font-size="{}" font-family="{}" fill="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            x,
            y,
            anchor,
            font_size,
            escape_xml(&self.config.font_family),
            escape_xml(&self.config.text_fill),
            escape_xml(text)
        ));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            vb_x, vb_y, vb_w, vb_h, vb_w, vb_h
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render an outline on its own
pub fn render_svg(blob: &BlobPath, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    if !blob.is_empty() {
        builder.add_blob(&blob.d);
    }
    builder.build(blob.bounds)
}

/// Render an outline with its text lines drawn on top
///
/// `options` must be the ones the outline was generated with, so the text
/// lands on the same rows and alignment.
pub fn render_svg_with_lines(
    blob: &BlobPath,
    lines: &[Line],
    options: &BlobOptions,
    config: &SvgConfig,
) -> String {
    let options = options.sanitized();
    let mut builder = SvgBuilder::new(config.clone());
    if !blob.is_empty() {
        builder.add_blob(&blob.d);
    }

    let reference_width = options.reference_width.unwrap_or_else(|| {
        lines
            .iter()
            .filter(|l| !l.is_blank())
            .map(|l| l.width)
            .fold(0.0, f64::max)
    });
    let (x, anchor) = match options.align {
        Align::Left => (0.0, "start"),
        Align::Center => (reference_width / 2.0, "middle"),
        Align::Right => (reference_width, "end"),
    };

    for line in lines.iter().filter(|l| !l.is_blank()) {
        let y = (line.index as f64 + 0.5) * options.line_height;
        builder.add_text(x, y, anchor, options.font_size(), &line.text);
    }

    builder.build(blob.bounds)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
