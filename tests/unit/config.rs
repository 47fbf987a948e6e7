use super::*;
use crate::animation::property::Property;
use crate::foundation::core::Rect;
use crate::host::memory::MemoryElement;
use crate::timeline::toggle::ToggleAction;
use crate::viewport::marker::Anchor;

#[test]
fn defaults_match_documented_values() {
    let spec: RevealSpec =
        serde_json::from_str(r#"{ "properties": [{ "property": "opacity", "from": 0, "to": 1 }] }"#)
            .unwrap();
    assert_eq!(spec.start, Marker::default_start());
    assert_eq!(spec.end, None);
    assert_eq!(spec.scrub.lag(), None);
    assert_eq!(spec.stagger, 0.0);
    assert_eq!(spec.delay, 0.0);
    assert_eq!(spec.duration, 0.5);
    assert_eq!(spec.ease, Ease::OutQuad);
    assert!(!spec.draw);
    assert!(!spec.once);
    assert_eq!(spec.toggle_actions, ToggleActions::default());
}

#[test]
fn full_json_parses() {
    let spec = RevealSpec::from_json(
        r#"{
            "start": "top 70%",
            "end": "bottom 30%",
            "scrub": 1,
            "ease": "power2.inOut",
            "stagger": 0.1,
            "properties": [
                { "property": "translateY", "from": 30, "to": 0 },
                { "property": "opacity", "from": 0, "to": 1, "ease": "none" }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(spec.start, Marker::new(Anchor::TOP, Anchor::fraction(0.7)));
    assert_eq!(spec.scrub.lag(), Some(1.0));
    assert_eq!(spec.ease, Ease::InOutCubic);
    assert_eq!(spec.properties[0].property, Property::Y);
    assert_eq!(spec.properties[1].ease, Some(Ease::Linear));
}

#[test]
fn scrub_accepts_bool_or_seconds() {
    let parse = |s: &str| serde_json::from_str::<Scrub>(s).unwrap().lag();
    assert_eq!(parse("false"), None);
    assert_eq!(parse("true"), Some(0.0));
    assert_eq!(parse("0.5"), Some(0.5));
}

#[test]
fn toggle_actions_parse_from_json() {
    let spec = RevealSpec::from_json(
        r#"{ "toggleActions": "play none none reverse", "properties": [{ "property": "y", "from": 50, "to": 0 }] }"#,
    )
    .unwrap();
    assert_eq!(spec.toggle_actions.on_leave_back, ToggleAction::Reverse);
}

#[test]
fn rejects_bad_specs() {
    assert!(RevealSpec::from_json("{}").is_err());
    assert!(RevealSpec::from_json(r#"{ "start": "middle 80%" }"#).is_err());
    assert!(RevealSpec::from_json(r#"{ "draw": true, "unknown": 1 }"#).is_err());
    assert!(
        RevealSpec::from_json(
            r#"{ "draw": true, "properties": [{ "property": "opacity", "from": 0, "to": 1 }] }"#
        )
        .is_err()
    );
    assert!(RevealSpec::from_json(r#"{ "draw": true, "duration": -1 }"#).is_err());
    assert!(RevealSpec::from_json(r#"{ "draw": true, "scrub": -2 }"#).is_err());
    assert!(RevealSpec::from_json(r#"{ "draw": true, "scrub": true, "once": true }"#).is_err());
    assert!(RevealSpec::from_json(r#"{ "draw": true }"#).is_ok());
}

#[test]
fn registration_binds_targets_and_trigger() {
    let (_a, a) = MemoryElement::new("a", Rect::new(0.0, 0.0, 10.0, 10.0)).into_ref();
    let (_b, b) = MemoryElement::new("b", Rect::new(0.0, 20.0, 10.0, 30.0)).into_ref();
    let spec = crate::presets::fade_up();

    let reg = spec
        .registration(OwnerTag(7), &[a.clone(), b.clone()], &TriggerRef::Target)
        .unwrap();
    assert_eq!(reg.owner, OwnerTag(7));
    assert_eq!(reg.targets.len(), 2);
    assert_eq!(reg.timing.count, 2);
    assert!((reg.timing.total() - 0.7).abs() < 1e-12);
    assert!(matches!(reg.playback, Playback::OneShot { once: false, .. }));
    let Trigger::Element(trigger) = &reg.trigger else {
        panic!("expected an element trigger");
    };
    assert!(Rc::ptr_eq(&trigger.upgrade().unwrap(), &a));

    let reg = spec
        .registration(OwnerTag(7), &[a], &TriggerRef::Root)
        .unwrap();
    assert!(matches!(reg.trigger, Trigger::Root));
}

#[test]
fn registration_needs_targets() {
    let err = crate::presets::hero()
        .registration(OwnerTag(1), &[], &TriggerRef::Target)
        .unwrap_err();
    assert!(matches!(err, RevealError::Validation(_)));
    let err = crate::presets::hero()
        .registration(OwnerTag(1), &[], &TriggerRef::Root)
        .unwrap_err();
    assert!(matches!(err, RevealError::Validation(_)));
}

#[test]
fn serializes_in_camel_case() {
    let json = serde_json::to_value(crate::presets::rope_draw()).unwrap();
    assert_eq!(json["start"], "top 70%");
    assert_eq!(json["end"], "bottom 30%");
    assert_eq!(json["scrub"], 1.0);
    assert_eq!(json["ease"], "power2.inOut");
    assert_eq!(json["toggleActions"], "play none none none");
}

#[test]
fn css_bezier_eases_are_accepted() {
    let spec = RevealSpec::from_json(
        r#"{
            "duration": 1.2,
            "ease": "cubic-bezier(0.22, 1, 0.36, 1)",
            "properties": [
                { "property": "opacity", "from": 0, "to": 1 },
                { "property": "y", "from": 100, "to": 0, "ease": "cubic-bezier(0.16, 1, 0.3, 1)" }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(spec.ease, Ease::cubic_bezier(0.22, 1.0, 0.36, 1.0).unwrap());
    assert_eq!(
        spec.properties[1].ease,
        Some(Ease::cubic_bezier(0.16, 1.0, 0.3, 1.0).unwrap())
    );
    assert!(RevealSpec::from_json(r#"{ "ease": "cubic-bezier(2, 0, 0, 1)", "draw": true }"#).is_err());
}
