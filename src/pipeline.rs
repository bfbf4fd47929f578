use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{ImageFormat, RgbaImage};

use crate::{
    foundation::{
        color::Color,
        error::{CarverError, CarverResult},
    },
    render::{
        canvas::CanvasSource,
        composite::draw_over,
        placement::{Anchor, place},
        text::{RenderedText, render_lines},
    },
    text::{config::RenderConfig, font::FontSource, source::TextSource},
};

/// Default foreground, opaque black.
pub const DEFAULT_FG: Color = Color::rgba(0x00, 0x00, 0x00, 0xff);
/// Default background, light yellow.
pub const DEFAULT_BG: Color = Color::rgba(0xff, 0xff, 0xe0, 0xff);

/// What a run produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Measure only: no canvas, no compositing, no file.
    Report,
    /// Composite and write a PNG to this path.
    Png(PathBuf),
}

/// Everything one run needs, fixed up front and passed explicitly to each stage.
#[derive(Clone, Debug)]
pub struct Job {
    pub text: TextSource,
    pub font: FontSource,
    pub size_pt: f64,
    pub dpi: f64,
    pub fg: Color,
    pub margin: u32,
    pub canvas: CanvasSource,
    pub anchor: Anchor,
    pub output: Output,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            text: TextSource::Stdin,
            font: FontSource::Bundled,
            size_pt: RenderConfig::DEFAULT_SIZE_PT,
            dpi: RenderConfig::DEFAULT_DPI,
            fg: DEFAULT_FG,
            margin: RenderConfig::DEFAULT_MARGIN,
            canvas: CanvasSource::Flat(DEFAULT_BG),
            anchor: Anchor::TopLeft,
            output: Output::Report,
        }
    }
}

impl Job {
    /// Load the font and freeze the rendering parameters.
    pub fn render_config(&self) -> CarverResult<RenderConfig> {
        let font = self.font.load()?;
        Ok(RenderConfig::new(font, self.size_pt, self.dpi, self.fg)?.with_margin(self.margin))
    }
}

/// Result of [`run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Reported { width: u32, height: u32 },
    Wrote(PathBuf),
}

/// Load font, read lines, draw them.
#[tracing::instrument(skip(job), fields(font = ?job.font, size_pt = job.size_pt, dpi = job.dpi))]
pub fn render_text(job: &Job) -> CarverResult<RenderedText> {
    let config = job.render_config()?;
    let lines = job.text.read_lines()?;
    tracing::debug!(lines = lines.len(), "read text");
    render_lines(&config, &lines)
}

/// Size of the rendered text, without touching any canvas.
pub fn report(job: &Job) -> CarverResult<(u32, u32)> {
    Ok(render_text(job)?.size())
}

/// Blend `rendered` onto the canvas at `anchor`.
#[tracing::instrument(skip(rendered, canvas))]
pub fn composite(
    rendered: &RenderedText,
    canvas: &CanvasSource,
    anchor: Anchor,
) -> CarverResult<RgbaImage> {
    let mut img = canvas.acquire(rendered.size())?;
    let dest = place(img.dimensions(), rendered.size(), anchor);
    let written = draw_over(&mut img, &*rendered.view(), dest);
    tracing::debug!(?dest, ?written, "composited text");
    Ok(img)
}

/// Render the job's text and composite it onto its canvas.
pub fn carve(job: &Job) -> CarverResult<RgbaImage> {
    let rendered = render_text(job)?;
    composite(&rendered, &job.canvas, job.anchor)
}

pub fn encode_png(img: &RgbaImage) -> CarverResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| CarverError::encode(format!("png: {e}")))?;
    Ok(buf)
}

/// Encode `img` and write it to `path`, creating parent directories.
#[tracing::instrument(skip(img))]
pub fn write_png(img: &RgbaImage, path: &Path) -> CarverResult<()> {
    let bytes = encode_png(img)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CarverError::io(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    std::fs::write(path, bytes)
        .map_err(|e| CarverError::io(format!("write '{}': {e}", path.display())))
}

/// Execute a job end to end.
pub fn run(job: &Job) -> CarverResult<Outcome> {
    match &job.output {
        Output::Report => {
            let (width, height) = report(job)?;
            Ok(Outcome::Reported { width, height })
        }
        Output::Png(path) => {
            let img = carve(job)?;
            write_png(&img, path)?;
            Ok(Outcome::Wrote(path.clone()))
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
