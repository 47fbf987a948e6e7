use super::*;
use crate::animation::property::Property;

fn scene() -> Scene {
    Scene::from_reader(include_str!("../../data/landing.json").as_bytes()).unwrap()
}

#[test]
fn landing_scene_reveals_everything_in_view() {
    let mut frames = Vec::new();
    let summary = simulate(&scene(), SimulateOptions::default(), |f| {
        frames.push(f.clone());
        Ok(())
    })
    .unwrap();

    assert_eq!(summary.frames, 301);
    assert!(summary.ticks > 0 && summary.ticks <= summary.frames);
    assert_eq!(summary.torn_down, 4);
    assert_eq!(frames.len() as u64, summary.ticks);

    let hero = &summary.styles["hero"];
    assert_eq!(hero.get(Property::Y), Some(0.0));
    for id in ["intro-1", "intro-2"] {
        assert_eq!(summary.styles[id].get(Property::Opacity), Some(1.0));
        assert_eq!(summary.styles[id].get(Property::Y), Some(0.0));
    }

    let divider = &summary.styles["divider"];
    assert_eq!(divider.get(Property::StrokeDasharray), Some(1280.0));
    let offset = divider.get(Property::StrokeDashoffset).unwrap();
    assert!((offset - 680.0).abs() < 1e-6, "{offset}");

    let rope = &summary.styles["rope"];
    let len = rope.get(Property::StrokeDasharray).unwrap();
    let offset = rope.get(Property::StrokeDashoffset).unwrap();
    assert!(offset > 0.0 && offset < len);
}

#[test]
fn second_intro_starts_after_the_first() {
    let mut first_moves = std::collections::BTreeMap::new();
    simulate(&scene(), SimulateOptions::default(), |f| {
        for (id, style) in &f.styles {
            if style.get(Property::Opacity).is_some_and(|o| o > 0.0) {
                first_moves.entry(id.clone()).or_insert(f.t);
            }
        }
        Ok(())
    })
    .unwrap();
    let a = first_moves["intro-1"];
    let b = first_moves["intro-2"];
    // 0.1s stagger, measured on a 60fps frame grid.
    assert!(b - a > 0.08, "{a} {b}");
}

#[test]
fn sink_errors_stop_the_run() {
    let err = simulate(&scene(), SimulateOptions::default(), |_| {
        Err(RevealError::validation("stop"))
    })
    .unwrap_err();
    assert!(err.to_string().contains("stop"));
}

#[test]
fn bad_options_are_rejected() {
    let opts = SimulateOptions {
        fps: 0.0,
        settle: 1.0,
        ..SimulateOptions::default()
    };
    assert!(simulate(&scene(), opts, |_| Ok(())).is_err());
}

#[test]
fn reduced_motion_never_offsets_elements() {
    let opts = SimulateOptions {
        reduced_motion: true,
        ..SimulateOptions::default()
    };
    let mut saw_fade = false;
    let summary = simulate(&scene(), opts, |f| {
        for style in f.styles.values() {
            if let Some(y) = style.get(Property::Y) {
                assert_eq!(y, 0.0, "frame {}", f.frame);
            }
            saw_fade |= style.get(Property::Opacity).is_some_and(|o| o > 0.0 && o < 1.0);
        }
        Ok(())
    })
    .unwrap();
    assert!(saw_fade);
    assert_eq!(summary.styles["intro-2"].get(Property::Opacity), Some(1.0));
}
