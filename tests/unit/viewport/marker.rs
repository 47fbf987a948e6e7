use super::*;

#[test]
fn keyword_and_percent_markers() {
    let m: Marker = "top 80%".parse().unwrap();
    assert_eq!(m, Marker::default_start());
    assert_eq!(m.viewport.resolve(800.0), 640.0);

    let m: Marker = "bottom top".parse().unwrap();
    assert_eq!(m, Marker::default_end());

    let m: Marker = "center center".parse().unwrap();
    assert_eq!(m.element.resolve(200.0), 100.0);
    assert_eq!(m.viewport.resolve(800.0), 400.0);
}

#[test]
fn pixel_and_relative_offsets() {
    let m: Marker = "top+=100 120px".parse().unwrap();
    assert_eq!(m.element.resolve(500.0), 100.0);
    assert_eq!(m.viewport.resolve(800.0), 120.0);

    let m: Marker = "bottom-=50 50%".parse().unwrap();
    assert_eq!(m.element.resolve(300.0), 250.0);
}

#[test]
fn single_anchor_defaults_viewport_to_top() {
    let m: Marker = "center".parse().unwrap();
    assert_eq!(m.viewport, Anchor::TOP);
}

#[test]
fn malformed_markers_are_config_errors() {
    for bad in ["", "top 80% 10%", "middle 50%", "top abc%", "top+=x 10%"] {
        let err = bad.parse::<Marker>().unwrap_err();
        assert!(matches!(err, RevealError::Config(_)), "{bad}");
    }
}

#[test]
fn display_round_trips() {
    for s in ["top 80%", "bottom top", "center 30%", "top+=100 120px", "bottom-=50 center"] {
        let m: Marker = s.parse().unwrap();
        let again: Marker = m.to_string().parse().unwrap();
        assert_eq!(m, again, "{s}");
    }
}

#[test]
fn serde_uses_string_form() {
    let m: Marker = serde_json::from_str("\"top 70%\"").unwrap();
    assert_eq!(serde_json::to_string(&m).unwrap(), "\"top 70%\"");
}
