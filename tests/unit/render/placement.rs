use super::*;

#[test]
fn codes_round_trip() {
    for a in Anchor::ALL {
        assert_eq!(a.code().parse::<Anchor>().unwrap(), a);
        assert_eq!(a.to_string(), a.code());
    }
    assert_eq!(Anchor::default(), Anchor::TopLeft);
}

#[test]
fn unknown_codes_are_rejected() {
    for bad in ["zz", "", "TL", "top-left", "cc", " c"] {
        let err = bad.parse::<Anchor>().unwrap_err();
        assert!(matches!(err, CarverError::Validation(_)), "{bad:?}");
    }
    let msg = Anchor::parse("zz").unwrap_err().to_string();
    assert!(msg.contains("tl, tc, tr, cl, c, cr, bl, bc, br"));
}

#[test]
fn table_of_offsets() {
    let canvas = (100, 50);
    let text = (21, 10);
    let cases = [
        (Anchor::TopLeft, (0, 0)),
        (Anchor::TopCenter, (39, 0)),
        (Anchor::TopRight, (79, 0)),
        (Anchor::CenterLeft, (0, 20)),
        (Anchor::Center, (39, 20)),
        (Anchor::CenterRight, (79, 20)),
        (Anchor::BottomLeft, (0, 40)),
        (Anchor::BottomCenter, (39, 40)),
        (Anchor::BottomRight, (79, 40)),
    ];
    for (anchor, (x, y)) in cases {
        let r = place(canvas, text, anchor);
        assert_eq!((r.x0, r.y0), (x, y), "{anchor}");
        assert_eq!(r.size(), text, "{anchor}");
    }
}

#[test]
fn top_left_is_always_origin() {
    for canvas in [(0, 0), (10, 10), (640, 480)] {
        for text in [(0, 0), (5, 500), (1000, 3)] {
            let r = place(canvas, text, Anchor::TopLeft);
            assert_eq!((r.x0, r.y0), (0, 0));
        }
    }
}

#[test]
fn bottom_right_touches_canvas_corner_when_text_fits() {
    for (canvas, text) in [((100, 50), (21, 10)), ((64, 64), (64, 64)), ((9, 7), (1, 1))] {
        let r = place(canvas, text, Anchor::BottomRight);
        assert_eq!((r.x1, r.y1), (i64::from(canvas.0), i64::from(canvas.1)));
    }
}

#[test]
fn oversized_text_gets_negative_offsets() {
    let r = place((10, 10), (31, 15), Anchor::Center);
    // slack -21 / 2 truncates toward zero.
    assert_eq!((r.x0, r.y0), (-10, -2));
    let r = place((10, 10), (31, 15), Anchor::BottomRight);
    assert_eq!((r.x0, r.y0), (-21, -5));
}
