use crate::{foundation::core::PxRect, text::config::RenderConfig};

/// Ems reserved around the text: left/right (or top/bottom) margins plus a safety pad.
const MARGIN_EMS: i64 = 4;

/// Upper bound of the area needed to render `lines`, computed without drawing.
///
/// Width assumes every character is at most one em wide, so the estimate is generous for
/// proportional fonts. The renderer allocates this size and crops down to what it used.
/// A margin wider than [`RenderConfig::DEFAULT_MARGIN`] widens the estimate by the extra
/// margin on both sides of each axis.
pub fn estimate_bounds<S: AsRef<str>>(config: &RenderConfig, lines: &[S]) -> PxRect {
    let max_len = lines
        .iter()
        .map(|l| l.as_ref().chars().count())
        .max()
        .unwrap_or(0) as i64;

    let po = config.em().ceil();
    let vs = config.line_spacing().ceil();

    let extra = 2 * i64::from(config.margin().saturating_sub(RenderConfig::DEFAULT_MARGIN));

    let dx = max_len * po + MARGIN_EMS * po + extra;
    let dy = lines.len() as i64 * vs + MARGIN_EMS * po + extra;

    PxRect::new(0, 0, dx, dy)
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
