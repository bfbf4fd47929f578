use image::Rgba;

use super::*;

fn literal(text: &str) -> TextSource {
    TextSource::Literal(text.to_string())
}

#[test]
fn default_job_matches_cli_defaults() {
    let job = Job::default();
    assert_eq!(job.fg.to_string(), "000000ff");
    assert_eq!(job.canvas, CanvasSource::Flat(DEFAULT_BG));
    assert_eq!(DEFAULT_BG.to_string(), "ffffe0ff");
    assert_eq!(job.anchor, Anchor::TopLeft);
    assert_eq!(job.margin, 16);
    assert_eq!(job.output, Output::Report);
}

#[test]
fn report_returns_cropped_size() {
    let job = Job {
        text: literal("one\ntwo\nthree"),
        ..Job::default()
    };
    let (w, h) = report(&job).unwrap();
    assert!(w > 32 && h > 32);
    assert_eq!(run(&job).unwrap(), Outcome::Reported { width: w, height: h });
}

#[test]
fn flat_canvas_matches_text_size() {
    let job = Job {
        text: literal("LGTM"),
        ..Job::default()
    };
    let rendered = render_text(&job).unwrap();
    let img = carve(&job).unwrap();
    assert_eq!(img.dimensions(), rendered.size());
}

#[test]
fn invalid_size_is_validation_error() {
    let job = Job {
        text: literal("x"),
        size_pt: 0.0,
        ..Job::default()
    };
    assert!(matches!(report(&job).unwrap_err(), CarverError::Validation(_)));
}

#[test]
fn composite_onto_larger_canvas_at_bottom_right() {
    let job = Job {
        text: literal("Hi"),
        fg: Color::rgba(255, 0, 0, 255),
        ..Job::default()
    };
    let rendered = render_text(&job).unwrap();
    let (tw, th) = rendered.size();

    let dir = PathBuf::from("target").join("unit_pipeline");
    std::fs::create_dir_all(&dir).unwrap();
    let base = dir.join("base.png");
    let white = RgbaImage::from_pixel(tw * 3, th * 2, Rgba([255, 255, 255, 255]));
    write_png(&white, &base).unwrap();

    let img = composite(&rendered, &CanvasSource::File(base), Anchor::BottomRight).unwrap();
    assert_eq!(img.dimensions(), (tw * 3, th * 2));

    let inked: Vec<_> = img
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0 != [255, 255, 255, 255])
        .map(|(x, y, _)| (x, y))
        .collect();
    assert!(!inked.is_empty());
    assert!(inked.iter().all(|&(x, y)| x >= tw * 2 && y >= th));
    assert!(img.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn write_png_creates_parent_dirs() {
    let path = PathBuf::from("target")
        .join("unit_pipeline")
        .join("nested")
        .join("deeper")
        .join("out.png");
    let _ = std::fs::remove_file(&path);
    let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
    write_png(&img, &path).unwrap();

    let decoded = image::open(&path).unwrap().into_rgba8();
    assert_eq!(decoded, img);
}
