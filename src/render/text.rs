use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use image::{RgbaImage, SubImage, imageops};

use crate::{
    foundation::{
        color::Color,
        core::{Fixed26, PxRect},
        error::CarverResult,
    },
    render::composite::over_straight,
    text::{config::RenderConfig, metrics::estimate_bounds},
};

/// Lines drawn onto a transparent buffer, together with the area the drawing actually used.
///
/// The buffer keeps the estimated size it was allocated with; [`RenderedText::view`] exposes
/// only the used area without copying.
#[derive(Clone, Debug)]
pub struct RenderedText {
    buffer: RgbaImage,
    used: PxRect,
}

impl RenderedText {
    /// Read-only view of the used area.
    pub fn view(&self) -> SubImage<&RgbaImage> {
        let (w, h) = self.used.size();
        imageops::crop_imm(&self.buffer, 0, 0, w, h)
    }

    pub fn size(&self) -> (u32, u32) {
        self.used.size()
    }

    /// Bounds of the whole allocated buffer, i.e. the estimate the renderer started from.
    pub fn allocated(&self) -> PxRect {
        PxRect::from_size(self.buffer.width(), self.buffer.height())
    }

    /// Owned copy of the used area.
    pub fn to_image(&self) -> RgbaImage {
        self.view().to_image()
    }
}

/// Draw `lines` top to bottom starting one margin in from the top-left corner.
///
/// Each line's baseline sits one line spacing below the previous one (the first one below
/// the top margin). The used area is the furthest pen position reached plus the margin on
/// the right and the last baseline plus the margin at the bottom, never more than the
/// estimate.
#[tracing::instrument(skip_all, fields(lines = lines.len()))]
pub fn render_lines<S: AsRef<str>>(
    config: &RenderConfig,
    lines: &[S],
) -> CarverResult<RenderedText> {
    let estimate = estimate_bounds(config, lines);
    let scale = config.px_scale()?;
    let mut buffer = RgbaImage::new(estimate.width(), estimate.height());

    let margin = Fixed26::from_px(i64::from(config.margin()));
    let spacing = config.line_spacing();

    let pen_x = margin;
    let mut baseline = margin;
    let mut used_x = Fixed26::default();
    let mut used_y = Fixed26::default();
    for line in lines {
        baseline += spacing;
        let end_x = draw_line(
            &mut buffer,
            config.font(),
            scale,
            config.fg(),
            line.as_ref(),
            pen_x,
            baseline,
        );
        used_x = used_x.max(end_x);
        used_y = baseline;
    }
    used_x += margin;
    used_y += margin;

    let used = PxRect::new(
        0,
        0,
        used_x.ceil().min(estimate.x1),
        used_y.ceil().min(estimate.y1),
    );
    tracing::debug!(
        estimate_w = estimate.width(),
        estimate_h = estimate.height(),
        width = used.width(),
        height = used.height(),
        "rendered text"
    );
    Ok(RenderedText { buffer, used })
}

/// Draw one line with its baseline at `baseline`, returning the pen position after the last
/// glyph. Pixels outside `buffer` are dropped.
fn draw_line(
    buffer: &mut RgbaImage,
    font: &FontArc,
    scale: PxScale,
    fg: Color,
    line: &str,
    x: Fixed26,
    baseline: Fixed26,
) -> Fixed26 {
    let scaled = font.as_scaled(scale);
    let (w, h) = (i64::from(buffer.width()), i64::from(buffer.height()));
    let fg = fg.to_array();
    let y = baseline.to_f32();

    let mut pen = x;
    let mut prev: Option<GlyphId> = None;
    for c in line.chars() {
        let id = scaled.glyph_id(c);
        if let Some(p) = prev {
            pen += Fixed26::from_px_f32(scaled.kern(p, id));
        }
        let glyph = id.with_scale_and_position(scale, point(pen.to_f32(), y));
        pen += Fixed26::from_px_f32(scaled.h_advance(id));
        prev = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let origin = outlined.px_bounds().min;
        outlined.draw(|gx, gy, coverage| {
            let px = origin.x as i64 + i64::from(gx);
            let py = origin.y as i64 + i64::from(gy);
            if px < 0 || py < 0 || px >= w || py >= h {
                return;
            }
            let dst = buffer.get_pixel_mut(px as u32, py as u32);
            dst.0 = over_straight(dst.0, fg, coverage);
        });
    }
    pen
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
