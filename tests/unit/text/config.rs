use super::*;
use crate::text::font::FontSource;

fn font() -> FontArc {
    FontSource::Bundled.load().unwrap()
}

#[test]
fn defaults_match_legacy_constants() {
    let cfg = RenderConfig::new(
        font(),
        RenderConfig::DEFAULT_SIZE_PT,
        RenderConfig::DEFAULT_DPI,
        Color::rgba(0, 0, 0, 255),
    )
    .unwrap();
    assert_eq!(cfg.margin(), 16);
    assert_eq!(cfg.em().ceil(), 15);
    assert_eq!(cfg.line_spacing().ceil(), 18);
}

#[test]
fn rejects_non_positive_size_and_dpi() {
    let fg = Color::default();
    for (size, dpi) in [(0.0, 96.0), (-1.0, 96.0), (11.0, 0.0), (f64::NAN, 96.0), (11.0, f64::INFINITY)] {
        let err = RenderConfig::new(font(), size, dpi, fg).unwrap_err();
        assert!(matches!(err, CarverError::Validation(_)), "{size} / {dpi}");
    }
}

#[test]
fn px_scale_grows_with_size() {
    let fg = Color::default();
    let small = RenderConfig::new(font(), 11.0, 96.0, fg).unwrap();
    let large = RenderConfig::new(font(), 22.0, 96.0, fg).unwrap();
    let s = small.px_scale().unwrap();
    let l = large.px_scale().unwrap();
    assert!(s.y > 0.0);
    assert!((l.y - 2.0 * s.y).abs() < 1e-3);
}

#[test]
fn margin_is_configurable() {
    let cfg = RenderConfig::new(font(), 11.0, 96.0, Color::default())
        .unwrap()
        .with_margin(4);
    assert_eq!(cfg.margin(), 4);
    assert!(format!("{cfg:?}").contains("margin: 4"));
}
