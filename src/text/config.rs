use std::fmt;

use ab_glyph::{Font, FontArc, PxScale};

use crate::foundation::{
    color::Color,
    core::Fixed26,
    error::{CarverError, CarverResult},
};

/// Everything the estimator and renderer need to turn lines into pixels.
///
/// Font, size and DPI are fixed at construction, so any measurement taken from a
/// `RenderConfig` already reflects the final point-to-pixel conversion.
#[derive(Clone)]
pub struct RenderConfig {
    font: FontArc,
    size_pt: f64,
    dpi: f64,
    fg: Color,
    margin: u32,
}

impl RenderConfig {
    pub const DEFAULT_SIZE_PT: f64 = 11.0;
    pub const DEFAULT_DPI: f64 = 96.0;
    /// Fixed pixel margin around the text, independent of font size.
    pub const DEFAULT_MARGIN: u32 = 16;
    /// Extra points of leading added to the font size for line spacing.
    pub const LEADING_PT: f64 = 2.0;

    pub fn new(font: FontArc, size_pt: f64, dpi: f64, fg: Color) -> CarverResult<Self> {
        if !size_pt.is_finite() || size_pt <= 0.0 {
            return Err(CarverError::validation(format!(
                "font size must be a positive number of points, got {size_pt}"
            )));
        }
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(CarverError::validation(format!(
                "dpi must be a positive number, got {dpi}"
            )));
        }
        Ok(Self {
            font,
            size_pt,
            dpi,
            fg,
            margin: Self::DEFAULT_MARGIN,
        })
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    pub fn size_pt(&self) -> f64 {
        self.size_pt
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    pub fn fg(&self) -> Color {
        self.fg
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// One em at the configured size and DPI.
    pub fn em(&self) -> Fixed26 {
        Fixed26::from_points(self.size_pt, self.dpi)
    }

    /// Baseline-to-baseline distance between consecutive lines.
    pub fn line_spacing(&self) -> Fixed26 {
        Fixed26::from_points(self.size_pt + Self::LEADING_PT, self.dpi)
    }

    /// Rasterizer scale whose em square matches [`Self::em`].
    pub fn px_scale(&self) -> CarverResult<PxScale> {
        let units_per_em = self
            .font
            .units_per_em()
            .ok_or_else(|| CarverError::render("font does not declare units per em"))?;
        let px_per_em = (self.size_pt * self.dpi / 72.0) as f32;
        let height = px_per_em * self.font.height_unscaled() / units_per_em;
        if !height.is_finite() || height <= 0.0 {
            return Err(CarverError::render(format!(
                "cannot scale font to {} pt at {} dpi",
                self.size_pt, self.dpi
            )));
        }
        Ok(PxScale::from(height))
    }
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("size_pt", &self.size_pt)
            .field("dpi", &self.dpi)
            .field("fg", &self.fg)
            .field("margin", &self.margin)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/config.rs"]
mod tests;
