use image::{GenericImageView, Rgba, RgbaImage};

use crate::foundation::core::PxRect;

pub type Rgba8 = [u8; 4];

/// Source-over on premultiplied RGBA8, with `src` scaled by `opacity`.
pub fn over_premul(dst: Rgba8, src: Rgba8, opacity: f32) -> Rgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Source-over on straight (non-premultiplied) RGBA8.
///
/// A fully transparent or zero-opacity source leaves `dst` bit-exact, and an opaque
/// destination stays opaque.
pub fn over_straight(dst: Rgba8, src: Rgba8, opacity: f32) -> Rgba8 {
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }
    unpremultiply(over_premul(premultiply(dst), premultiply(src), opacity))
}

pub fn premultiply(px: Rgba8) -> Rgba8 {
    let a = u16::from(px[3]);
    [
        mul_div255(u16::from(px[0]), a),
        mul_div255(u16::from(px[1]), a),
        mul_div255(u16::from(px[2]), a),
        px[3],
    ]
}

pub fn unpremultiply(px: Rgba8) -> Rgba8 {
    let a = u32::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let un = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

/// Blend `src` over `canvas` with its top-left at `dest.x0, dest.y0`.
///
/// `dest` may extend past the canvas on any side; only the overlapping pixels are touched.
/// Returns the canvas area that was written, if any.
pub fn draw_over<V>(canvas: &mut RgbaImage, src: &V, dest: PxRect) -> Option<PxRect>
where
    V: GenericImageView<Pixel = Rgba<u8>>,
{
    let (sw, sh) = src.dimensions();
    let src_rect = PxRect::from_origin_size(
        dest.x0,
        dest.y0,
        sw.min(dest.width()),
        sh.min(dest.height()),
    );
    let clip = src_rect.intersect(PxRect::from_size(canvas.width(), canvas.height()))?;

    for y in clip.y0..clip.y1 {
        for x in clip.x0..clip.x1 {
            let s = src.get_pixel((x - dest.x0) as u32, (y - dest.y0) as u32);
            let d = canvas.get_pixel_mut(x as u32, y as u32);
            d.0 = over_straight(d.0, s.0, 1.0);
        }
    }
    Some(clip)
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
