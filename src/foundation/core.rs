use std::ops::{Add, AddAssign};

/// Pixel value in 26.6 fixed point (64 units per pixel).
///
/// Point-to-pixel conversion truncates into this representation before any rounding, which
/// keeps measurements stable across runs and platforms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed26(pub i64);

impl Fixed26 {
    /// Whole pixels.
    pub fn from_px(px: i64) -> Self {
        Self(px * 64)
    }

    /// Fractional pixels, truncated toward zero.
    pub fn from_px_f32(px: f32) -> Self {
        Self((f64::from(px) * 64.0) as i64)
    }

    /// Size of `points` at `dpi`, truncated toward zero.
    pub fn from_points(points: f64, dpi: f64) -> Self {
        Self((points * dpi / 72.0 * 64.0) as i64)
    }

    /// Smallest whole pixel count not below this value.
    pub fn ceil(self) -> i64 {
        (self.0 + 63).div_euclid(64)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / 64.0
    }
}

impl Add for Fixed26 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Fixed26 {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Integer pixel rectangle, `x1`/`y1` exclusive. Always normalized so `x0 <= x1` and `y0 <= y1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PxRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PxRect {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, i64::from(width), i64::from(height))
    }

    pub fn from_origin_size(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self::new(x, y, x + i64::from(width), y + i64::from(height))
    }

    pub fn width(self) -> u32 {
        clamp_u32(self.x1 - self.x0)
    }

    pub fn height(self) -> u32 {
        clamp_u32(self.y1 - self.y0)
    }

    pub fn size(self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Overlap of two rectangles, `None` when they do not share any pixel.
    pub fn intersect(self, other: Self) -> Option<Self> {
        let r = Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        };
        if r.x0 >= r.x1 || r.y0 >= r.y1 {
            return None;
        }
        Some(r)
    }
}

fn clamp_u32(v: i64) -> u32 {
    v.clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
