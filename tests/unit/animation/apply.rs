use super::*;
use crate::animation::ease::Ease;
use crate::animation::property::{Property, PropertyTween};
use crate::host::memory::MemoryElement;
use kurbo::Rect;

fn fade_up() -> PropertySpec {
    PropertySpec::new(
        [
            PropertyTween::new(Property::Opacity, 0.0, 1.0),
            PropertyTween::new(Property::Y, 30.0, 0.0),
        ],
        Ease::Linear,
    )
}

#[test]
fn endpoints_hit_from_and_to() {
    let spec = fade_up();
    assert_eq!(apply(&spec, 0.0), spec.from_frame());
    assert_eq!(apply(&spec, 1.0), spec.to_frame());
}

#[test]
fn midpoint_is_linear() {
    let f = apply(&fade_up(), 0.5);
    assert_eq!(f.get(Property::Opacity), Some(0.5));
    assert_eq!(f.get(Property::Y), Some(15.0));
}

#[test]
fn repeated_apply_is_bit_identical() {
    let spec = PropertySpec::new(
        [
            PropertyTween::new(Property::Opacity, 0.0, 1.0).with_ease(Ease::OutCubic),
            PropertyTween::new(Property::Y, 30.0, 0.0).with_ease(Ease::InOutSine),
        ],
        Ease::OutQuad,
    );
    for p in [0.0, 0.1234567, 0.5, 0.987654321, 1.0] {
        let a = apply(&spec, p);
        let b = apply(&spec, p);
        for ((pa, va), (pb, vb)) in a.iter().zip(b.iter()) {
            assert_eq!(pa, pb);
            assert_eq!(va.to_bits(), vb.to_bits());
        }
    }
}

#[test]
fn out_of_range_progress_clamps() {
    let spec = fade_up();
    assert_eq!(apply(&spec, -0.5), spec.from_frame());
    assert_eq!(apply(&spec, 7.0), spec.to_frame());
    assert_eq!(apply(&spec, f64::NAN), spec.from_frame());
}

#[test]
fn apply_to_writes_all_properties_at_once() {
    let el = MemoryElement::new("card", Rect::new(0.0, 0.0, 100.0, 100.0));
    apply_to(&el, &fade_up(), 0.25);
    assert_eq!(el.write_count(), 1);
    let style = el.style();
    assert_eq!(style.get(Property::Opacity), Some(0.25));
    assert_eq!(style.get(Property::Y), Some(22.5));
}

#[test]
fn apply_to_skips_detached_targets() {
    let el = MemoryElement::new("card", Rect::new(0.0, 0.0, 100.0, 100.0));
    el.detach();
    apply_to(&el, &fade_up(), 0.25);
    assert_eq!(el.write_count(), 0);
}
