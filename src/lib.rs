//! carver renders lines of text into an image and writes it as a PNG.
//!
//! # Pipeline overview
//!
//! 1. **Read**: [`TextSource`] yields lines with tabs expanded to four spaces.
//! 2. **Estimate**: [`estimate_bounds`] sizes a buffer from character counts alone.
//! 3. **Render**: [`render_lines`] draws into that buffer and crops to the area used.
//! 4. **Canvas**: [`CanvasSource`] decodes a PNG/JPEG or fills a flat background.
//! 5. **Place + composite**: [`place`] picks one of nine [`Anchor`]s and
//!    [`draw_over`] source-over blends the text onto the canvas.
//! 6. **Encode**: [`write_png`] writes the canvas.
//!
//! [`run`] drives all of it from one immutable [`Job`].
#![forbid(unsafe_code)]

mod foundation;
mod pipeline;
mod render;
mod text;

pub use foundation::color::Color;
pub use foundation::core::{Fixed26, PxRect};
pub use foundation::error::{CarverError, CarverResult};
pub use pipeline::{
    DEFAULT_BG, DEFAULT_FG, Job, Outcome, Output, carve, composite, encode_png, render_text,
    report, run, write_png,
};
pub use render::canvas::{CanvasSource, decode_canvas, flat_canvas, load_canvas};
pub use render::composite::{draw_over, over_premul, over_straight, premultiply, unpremultiply};
pub use render::placement::{Anchor, place};
pub use render::text::{RenderedText, render_lines};
pub use text::config::RenderConfig;
pub use text::font::{BUNDLED_FONT_BYTES, FontSource};
pub use text::metrics::estimate_bounds;
pub use text::source::{TAB_WIDTH, TextSource, expand_tabs, read_lines};
