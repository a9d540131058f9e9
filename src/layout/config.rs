//! Configuration for blob generation

use serde::Deserialize;

use super::types::Align;
use crate::outline::OutlineMode;

/// Options controlling rectangle layout and corner smoothing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlobOptions {
    /// Distance between consecutive line baselines, in px
    pub line_height: f64,

    /// Font size in px; defaults to the line height
    pub font_size: Option<f64>,

    /// Padding added around each line's rectangle, in px
    pub spread: f64,

    /// Normalized corner roundness in `[0, 1]`
    pub roundness: f64,

    /// Horizontal alignment of lines inside the reference width
    pub align: Align,

    /// Container width; defaults to the widest line
    pub reference_width: Option<f64>,

    /// Merged blob or independent per-line rectangles
    pub mode: OutlineMode,
}

impl Default for BlobOptions {
    fn default() -> Self {
        Self {
            line_height: 32.0,
            font_size: None,
            spread: 8.0,
            roundness: 0.5,
            align: Align::Center,
            reference_width: None,
            mode: OutlineMode::Merged,
        }
    }
}

impl BlobOptions {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line height
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set an explicit font size
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Set the spread padding
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    /// Set the normalized roundness
    pub fn with_roundness(mut self, roundness: f64) -> Self {
        self.roundness = roundness;
        self
    }

    /// Set the line alignment
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the container width used for alignment
    pub fn with_reference_width(mut self, width: f64) -> Self {
        self.reference_width = Some(width);
        self
    }

    /// Set the outline strategy
    pub fn with_mode(mut self, mode: OutlineMode) -> Self {
        self.mode = mode;
        self
    }

    /// Effective font size
    pub fn font_size(&self) -> f64 {
        self.font_size.unwrap_or(self.line_height)
    }

    /// Largest corner radius a roundness of 1 can request
    pub fn max_radius(&self) -> f64 {
        (self.line_height + 2.0 * self.spread) / 2.0
    }

    /// Corner radius requested before per-corner clamping
    pub fn requested_radius(&self) -> f64 {
        self.roundness * self.max_radius()
    }

    /// Copy of these options with every value clamped into its valid range
    ///
    /// Out-of-range values are never rejected: interactive editing must
    /// always produce some outline.
    pub fn sanitized(&self) -> Self {
        let clamped = Self {
            line_height: non_negative(self.line_height),
            font_size: self.font_size.map(non_negative),
            spread: non_negative(self.spread),
            roundness: if self.roundness.is_finite() {
                self.roundness.clamp(0.0, 1.0)
            } else {
                0.0
            },
            align: self.align,
            reference_width: self
                .reference_width
                .filter(|w| w.is_finite())
                .map(|w| w.max(0.0)),
            mode: self.mode,
        };

        if clamped != *self {
            tracing::debug!(requested = ?self, ?clamped, "clamped blob options");
        }
        clamped
    }
}

/// Clamp to `[0, inf)`, mapping NaN and infinities to zero
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
