use std::{fmt, str::FromStr};

use crate::foundation::error::{CarverError, CarverResult};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack `0xRRGGBBAA`.
    pub const fn from_u32(v: u32) -> Self {
        Self {
            r: (v >> 24) as u8,
            g: (v >> 16) as u8,
            b: (v >> 8) as u8,
            a: v as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse exactly eight hex digits `RRGGBBAA`, optionally prefixed with `#`.
    pub fn parse_hex(s: &str) -> CarverResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CarverError::validation(format!(
                "color \"{s}\" must be 8 hex digits RRGGBBAA (e.g. 0a0b0cff)"
            )));
        }
        let v = u32::from_str_radix(digits, 16)
            .map_err(|e| CarverError::validation(format!("color \"{s}\": {e}")))?;
        Ok(Self::from_u32(v))
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba(c.to_array())
    }
}

impl FromStr for Color {
    type Err = CarverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.to_u32())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
