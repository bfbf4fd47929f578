use std::{fmt, str::FromStr};

use crate::foundation::{
    core::PxRect,
    error::{CarverError, CarverResult},
};

/// One of the nine intersections of {left, center, right} x {top, center, bottom}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// How much of the free space goes before the text along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Share {
    Zero,
    Half,
    Full,
}

impl Share {
    fn of(self, slack: i64) -> i64 {
        match self {
            Self::Zero => 0,
            Self::Half => slack / 2,
            Self::Full => slack,
        }
    }
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::CenterLeft,
        Self::Center,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Short code used on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopCenter => "tc",
            Self::TopRight => "tr",
            Self::CenterLeft => "cl",
            Self::Center => "c",
            Self::CenterRight => "cr",
            Self::BottomLeft => "bl",
            Self::BottomCenter => "bc",
            Self::BottomRight => "br",
        }
    }

    fn shares(self) -> (Share, Share) {
        use Share::{Full, Half, Zero};
        match self {
            Self::TopLeft => (Zero, Zero),
            Self::TopCenter => (Half, Zero),
            Self::TopRight => (Full, Zero),
            Self::CenterLeft => (Zero, Half),
            Self::Center => (Half, Half),
            Self::CenterRight => (Full, Half),
            Self::BottomLeft => (Zero, Full),
            Self::BottomCenter => (Half, Full),
            Self::BottomRight => (Full, Full),
        }
    }

    pub fn parse(s: &str) -> CarverResult<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.code() == s)
            .ok_or_else(|| {
                let codes: Vec<_> = Self::ALL.iter().map(|a| a.code()).collect();
                CarverError::validation(format!(
                    "anchor \"{s}\" must be one of {}",
                    codes.join(", ")
                ))
            })
    }
}

impl FromStr for Anchor {
    type Err = CarverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Where a `text`-sized image lands on a `canvas`-sized image for `anchor`.
///
/// The offset may be negative when the text is larger than the canvas; the compositor
/// clips in that case.
pub fn place(canvas: (u32, u32), text: (u32, u32), anchor: Anchor) -> PxRect {
    let ox = i64::from(canvas.0) - i64::from(text.0);
    let oy = i64::from(canvas.1) - i64::from(text.1);
    let (sx, sy) = anchor.shares();
    PxRect::from_origin_size(sx.of(ox), sy.of(oy), text.0, text.1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/placement.rs"]
mod tests;
