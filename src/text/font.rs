use std::path::PathBuf;

use ab_glyph::FontArc;

use crate::foundation::error::{CarverError, CarverResult};

/// DejaVu Sans Mono, used when no font file is given.
pub const BUNDLED_FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSansMono.ttf");

/// Where the font program comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FontSource {
    #[default]
    Bundled,
    File(PathBuf),
}

impl FontSource {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Bundled, Self::File)
    }

    /// Read and parse the font. The file handle is released before this returns.
    pub fn load(&self) -> CarverResult<FontArc> {
        match self {
            Self::Bundled => FontArc::try_from_slice(BUNDLED_FONT_BYTES)
                .map_err(|e| CarverError::font(format!("bundled font: {e}"))),
            Self::File(path) => {
                let bytes = std::fs::read(path)
                    .map_err(|e| CarverError::font(format!("read '{}': {e}", path.display())))?;
                FontArc::try_from_vec(bytes)
                    .map_err(|e| CarverError::font(format!("parse '{}': {e}", path.display())))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
