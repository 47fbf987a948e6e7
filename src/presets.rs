//! Ready-made specs for the reveals used across the site's pages.

use crate::animation::ease::Ease;
use crate::animation::property::{Property, PropertyTween};
use crate::config::{RevealSpec, Scrub};
use crate::viewport::marker::{Anchor, Marker};

/// Section content fading in while rising 30px, staggered 0.1s across siblings.
pub fn fade_up() -> RevealSpec {
    RevealSpec {
        duration: 0.6,
        stagger: 0.1,
        ease: Ease::OutCubic,
        properties: vec![
            PropertyTween::new(Property::Opacity, 0.0, 1.0),
            PropertyTween::new(Property::Y, 30.0, 0.0),
        ],
        ..RevealSpec::default()
    }
}

/// Hero block settling 50px upward almost immediately.
pub fn hero() -> RevealSpec {
    RevealSpec {
        duration: 0.1,
        properties: vec![PropertyTween::new(Property::Y, 50.0, 0.0)],
        ..RevealSpec::default()
    }
}

/// Decorative rope drawn as its section scrolls from 70% to 30% of the viewport, easing in and
/// out at the ends of the stroke.
pub fn rope_draw() -> RevealSpec {
    RevealSpec {
        start: Marker::new(Anchor::TOP, Anchor::fraction(0.7)),
        end: Some(Marker::new(Anchor::BOTTOM, Anchor::fraction(0.3))),
        scrub: Scrub::Lag(1.0),
        ease: Ease::InOutCubic,
        draw: true,
        ..RevealSpec::default()
    }
}

#[cfg(test)]
#[path = "../tests/unit/presets.rs"]
mod tests;
