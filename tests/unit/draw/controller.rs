use super::*;
use crate::foundation::core::{BezPath, Rect};
use crate::host::memory::MemoryElement;

fn line(len: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((len, 0.0));
    p
}

fn rope(len: f64) -> MemoryElement {
    MemoryElement::with_path("rope", Rect::new(0.0, 0.0, len, 10.0), &line(len))
}

#[test]
fn starts_uninitialized_and_binds_on_first_frame() {
    let el = rope(200.0);
    let mut d = PathDraw::new(Ease::Linear);
    assert_eq!(d.state(), DrawState::Uninitialized);
    let f = d.frame(&el, 0.0).unwrap();
    assert_eq!(d.state(), DrawState::Bound { total_length: 200.0 });
    assert_eq!(f.get(Property::StrokeDasharray), Some(200.0));
    assert_eq!(f.get(Property::StrokeDashoffset), Some(200.0));
}

#[test]
fn draw_round_trip() {
    let el = rope(200.0);
    let mut d = PathDraw::new(Ease::Linear);
    let off = |d: &mut PathDraw, p| d.frame(&el, p).unwrap().get(Property::StrokeDashoffset);
    assert_eq!(off(&mut d, 0.0), Some(200.0));
    assert_eq!(off(&mut d, 0.5), Some(100.0));
    assert_eq!(off(&mut d, 1.0), Some(0.0));
}

#[test]
fn offset_never_leaves_range() {
    for p in [-2.0, -0.1, 0.0, 0.3, 1.0, 1.5, f64::NAN, f64::INFINITY] {
        for ease in Ease::ALL {
            let o = PathDraw::offset_for(120.0, ease, p);
            assert!((0.0..=120.0).contains(&o), "{ease} {p} -> {o}");
        }
    }
}

#[test]
fn unmeasurable_path_stays_uninitialized() {
    let el = MemoryElement::new("plain", Rect::new(0.0, 0.0, 10.0, 10.0));
    let mut d = PathDraw::new(Ease::Linear);
    assert!(d.frame(&el, 0.5).is_none());
    assert_eq!(d.state(), DrawState::Uninitialized);
}

#[test]
fn layout_change_remeasures() {
    let el = rope(200.0);
    let mut d = PathDraw::new(Ease::Linear);
    d.frame(&el, 0.5).unwrap();

    el.set_path(&line(400.0));
    // Without invalidation the cached length is used.
    assert_eq!(d.total_length(), Some(200.0));

    d.invalidate();
    let f = d.frame(&el, 0.5).unwrap();
    assert_eq!(d.total_length(), Some(400.0));
    assert_eq!(f.get(Property::StrokeDashoffset), Some(200.0));
}

#[test]
fn torn_down_never_writes() {
    let el = rope(200.0);
    let mut d = PathDraw::new(Ease::Linear);
    d.frame(&el, 0.2).unwrap();
    d.tear_down();
    assert_eq!(d.state(), DrawState::TornDown);
    assert!(d.frame(&el, 0.9).is_none());
}

#[test]
fn marker_rides_the_drawn_end() {
    let el = rope(200.0);
    let mut d = PathDraw::new(Ease::Linear);
    let f = d.frame(&el, 0.0).unwrap();
    assert_eq!(f.get(Property::MarkerX), Some(0.0));
    assert_eq!(f.get(Property::MarkerY), Some(0.0));

    let f = d.frame(&el, 0.25).unwrap();
    let x = f.get(Property::MarkerX).unwrap();
    assert!((x - 50.0).abs() < 1e-6, "{x}");

    let f = d.frame(&el, 1.0).unwrap();
    let x = f.get(Property::MarkerX).unwrap();
    assert!((x - 200.0).abs() < 1e-6, "{x}");
}

struct LengthOnly;

impl RenderTarget for LengthOnly {
    fn layout_rect(&self) -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    fn apply_style(&self, _style: &StyleFrame) {}

    fn total_length(&self) -> Option<f64> {
        Some(80.0)
    }
}

#[test]
fn hosts_without_point_lookup_get_no_marker() {
    let mut d = PathDraw::new(Ease::Linear);
    let f = d.frame(&LengthOnly, 0.5).unwrap();
    assert_eq!(f.get(Property::StrokeDashoffset), Some(40.0));
    assert!(f.get(Property::MarkerX).is_none());
    assert_eq!(f.len(), 2);
}
