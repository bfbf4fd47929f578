use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::{
    color::Color,
    error::{CarverError, CarverResult},
};

/// What the text is composited onto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CanvasSource {
    /// A new image filled with this color, sized to the rendered text.
    Flat(Color),
    /// A PNG or JPEG file.
    File(PathBuf),
}

impl CanvasSource {
    pub fn from_arg(path: Option<PathBuf>, background: Color) -> Self {
        path.map_or(Self::Flat(background), Self::File)
    }

    /// Produce the mutable canvas. `text_size` is only used for flat canvases.
    #[tracing::instrument(skip(self), fields(source = ?self))]
    pub fn acquire(&self, text_size: (u32, u32)) -> CarverResult<RgbaImage> {
        match self {
            Self::Flat(bg) => Ok(flat_canvas(text_size.0, text_size.1, *bg)),
            Self::File(path) => load_canvas(path),
        }
    }
}

/// Uniform image of `color`, written by replacement so alpha is kept as given.
pub fn flat_canvas(width: u32, height: u32, color: Color) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color.into())
}

pub fn load_canvas(path: &Path) -> CarverResult<RgbaImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| CarverError::decode(format!("open '{}': {e}", path.display())))?;
    decode_canvas(&bytes).map_err(|e| CarverError::decode(format!("'{}': {e:#}", path.display())))
}

/// Decode PNG or JPEG bytes (format sniffed from content) into straight RGBA8.
pub fn decode_canvas(bytes: &[u8]) -> CarverResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.into_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
