use super::*;

#[test]
fn viewport_rejects_zero_height() {
    assert!(Viewport::new(1280.0, 0.0, 4000.0).is_err());
    assert!(Viewport::new(1280.0, f64::NAN, 4000.0).is_err());
    assert!(Viewport::new(1280.0, 800.0, 4000.0).is_ok());
}

#[test]
fn scroll_is_clamped_to_document() {
    let vp = Viewport::new(1280.0, 800.0, 4000.0).unwrap();
    assert_eq!(vp.scrolled_to(-50.0).scroll_y, 0.0);
    assert_eq!(vp.scrolled_to(10_000.0).scroll_y, 3200.0);
    assert_eq!(vp.scrolled_to(f64::NAN).scroll_y, 0.0);
}

#[test]
fn to_viewport_subtracts_scroll() {
    let vp = Viewport::new(1280.0, 800.0, 4000.0)
        .unwrap()
        .scrolled_to(500.0);
    let r = vp.to_viewport(Rect::new(0.0, 1200.0, 100.0, 1400.0));
    assert_eq!(r.y0, 700.0);
    assert_eq!(r.y1, 900.0);
}

#[test]
fn nearness_covers_one_viewport_each_side() {
    let vp = Viewport::new(1280.0, 800.0, 4000.0).unwrap();
    assert!(vp.is_near(Rect::new(0.0, 1500.0, 10.0, 1600.0)));
    assert!(vp.is_near(Rect::new(0.0, -900.0, 10.0, -700.0)));
    assert!(!vp.is_near(Rect::new(0.0, 1700.0, 10.0, 1800.0)));
    assert!(!vp.is_near(Rect::new(0.0, -1000.0, 10.0, -850.0)));
}
