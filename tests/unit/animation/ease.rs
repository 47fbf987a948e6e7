use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease}");
        assert!(b < c, "{ease}");
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-1.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(2.0), 1.0);
    assert_eq!(Ease::OutCubic.apply(f64::NAN), 0.0);
}

#[test]
fn gsap_names_parse() {
    assert_eq!("none".parse::<Ease>().unwrap(), Ease::Linear);
    assert_eq!("power2.out".parse::<Ease>().unwrap(), Ease::OutCubic);
    assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::OutQuart);
    assert_eq!("sine.inOut".parse::<Ease>().unwrap(), Ease::InOutSine);
    assert_eq!("power1.inOut".parse::<Ease>().unwrap(), Ease::InOutQuad);
    assert_eq!("expo.out".parse::<Ease>().unwrap(), Ease::OutExpo);
    assert_eq!("power2".parse::<Ease>().unwrap(), Ease::OutCubic);
    assert!("bounce.out".parse::<Ease>().is_err());
    assert!("power2.sideways".parse::<Ease>().is_err());
}

#[test]
fn names_round_trip_through_serde() {
    for ease in Ease::ALL {
        let json = serde_json::to_string(&ease).unwrap();
        let back: Ease = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ease);
    }
}

#[test]
fn cubic_bezier_parses_and_displays() {
    let ease: Ease = "cubic-bezier(0.16, 1, 0.3, 1)".parse().unwrap();
    assert_eq!(
        ease,
        Ease::CubicBezier {
            x1: 0.16,
            y1: 1.0,
            x2: 0.3,
            y2: 1.0
        }
    );
    assert_eq!(ease.to_string(), "cubic-bezier(0.16, 1, 0.3, 1)");
    assert_eq!(ease.name(), "cubic-bezier");
    assert_eq!(ease.to_string().parse::<Ease>().unwrap(), ease);

    let json = serde_json::to_string(&ease).unwrap();
    assert_eq!(json, "\"cubic-bezier(0.16, 1, 0.3, 1)\"");
    let back: Ease = serde_json::from_str("\"cubic-bezier(0.22,1,0.36,1)\"").unwrap();
    assert_eq!(back, Ease::cubic_bezier(0.22, 1.0, 0.36, 1.0).unwrap());
}

#[test]
fn cubic_bezier_rejects_bad_control_points() {
    assert!("cubic-bezier(1.2, 0, 0.5, 1)".parse::<Ease>().is_err());
    assert!("cubic-bezier(0.5, 0, -0.1, 1)".parse::<Ease>().is_err());
    assert!("cubic-bezier(0.5, 0, 0.5)".parse::<Ease>().is_err());
    assert!("cubic-bezier(0.5, x, 0.5, 1)".parse::<Ease>().is_err());
    assert!(Ease::cubic_bezier(0.5, f64::NAN, 0.5, 1.0).is_err());
}

#[test]
fn cubic_bezier_curves_are_exact_at_the_ends_and_monotonic() {
    for ease in [
        Ease::cubic_bezier(0.16, 1.0, 0.3, 1.0).unwrap(),
        Ease::cubic_bezier(0.22, 1.0, 0.36, 1.0).unwrap(),
        Ease::cubic_bezier(0.42, 0.0, 0.58, 1.0).unwrap(),
    ] {
        assert_eq!(ease.apply(0.0), 0.0, "{ease}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease}");
        let mut last = 0.0;
        for i in 1..100 {
            let v = ease.apply(i as f64 / 100.0);
            assert!(v >= last, "{ease} at {i}");
            last = v;
        }
    }
    // Strong ease-out: well past halfway a fifth of the way in.
    let expo_like = Ease::cubic_bezier(0.16, 1.0, 0.3, 1.0).unwrap();
    assert!(expo_like.apply(0.2) > 0.6);
}

#[test]
fn diagonal_cubic_bezier_is_linear() {
    let ease = Ease::cubic_bezier(0.0, 0.0, 1.0, 1.0).unwrap();
    for i in 1..10 {
        let t = i as f64 / 10.0;
        assert!((ease.apply(t) - t).abs() < 1e-6, "{t}");
    }
    let css_ease = Ease::cubic_bezier(0.25, 0.1, 0.25, 1.0).unwrap();
    // CSS `ease` at its midpoint.
    assert!((css_ease.apply(0.5) - 0.8024).abs() < 1e-3);
}
