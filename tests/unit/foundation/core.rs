use super::*;

#[test]
fn points_convert_at_dpi() {
    assert_eq!(Fixed26::from_points(72.0, 72.0), Fixed26::from_px(72));
    // 11pt at 96dpi is 14.666..px -> truncated to 938/64.
    let p = Fixed26::from_points(11.0, 96.0);
    assert_eq!(p.0, 938);
    assert_eq!(p.ceil(), 15);
    assert_eq!(Fixed26::from_points(13.0, 96.0).ceil(), 18);
}

#[test]
fn ceil_handles_whole_and_negative_values() {
    assert_eq!(Fixed26::from_px(16).ceil(), 16);
    assert_eq!(Fixed26(1).ceil(), 1);
    assert_eq!(Fixed26(0).ceil(), 0);
    assert_eq!(Fixed26(-1).ceil(), 0);
    assert_eq!(Fixed26(-65).ceil(), -1);
}

#[test]
fn fixed_add_and_to_f32() {
    let mut p = Fixed26::from_px(16);
    p += Fixed26(32);
    assert_eq!(p + Fixed26(32), Fixed26::from_px(17));
    assert!((p.to_f32() - 16.5).abs() < 1e-6);
    assert_eq!(Fixed26::from_px_f32(2.75), Fixed26(176));
}

#[test]
fn rect_is_normalized() {
    let r = PxRect::new(10, 20, 0, 5);
    assert_eq!(r, PxRect::new(0, 5, 10, 20));
    assert_eq!(r.size(), (10, 15));
}

#[test]
fn rect_intersection() {
    let a = PxRect::from_size(10, 10);
    let b = PxRect::from_origin_size(-5, 6, 8, 8);
    assert_eq!(a.intersect(b), Some(PxRect::new(0, 6, 3, 10)));

    let far = PxRect::from_origin_size(20, 20, 4, 4);
    assert_eq!(a.intersect(far), None);
}
