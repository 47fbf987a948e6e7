use std::rc::Rc;

use crate::animation::ease::Ease;
use crate::animation::property::{PropertySpec, PropertyTween};
use crate::foundation::core::OwnerTag;
use crate::foundation::error::{RevealError, RevealResult};
use crate::host::target::ElementRef;
use crate::registry::registration::{Animation, Playback, Registration, Trigger, TriggerRef};
use crate::timeline::stagger::Timing;
use crate::timeline::toggle::ToggleActions;
use crate::viewport::marker::Marker;
use crate::viewport::progress::ScrollWindow;

/// `scrub` as written in JSON: `false`, `true` or a lag in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Scrub {
    /// `true` binds progress directly to scroll, `false` makes a one-shot reveal.
    Enabled(bool),
    /// Scrubbed with this many seconds of smoothing.
    Lag(f64),
}

impl Default for Scrub {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

impl Scrub {
    /// Smoothing lag, or `None` for one-shot playback.
    pub fn lag(self) -> Option<f64> {
        match self {
            Self::Enabled(false) => None,
            Self::Enabled(true) => Some(0.0),
            Self::Lag(lag) => Some(lag),
        }
    }
}

/// Declarative description of one reveal, as written in view code or scene files.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RevealSpec {
    /// Marker that enters the window.
    pub start: Marker,
    /// Marker that leaves the window; `bottom top` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Marker>,
    /// One-shot (`false`) or scroll-bound playback.
    pub scrub: Scrub,
    /// Seconds between consecutive targets.
    pub stagger: f64,
    /// Seconds before the first target starts.
    pub delay: f64,
    /// Seconds each target animates for.
    pub duration: f64,
    /// Default curve.
    pub ease: Ease,
    /// Animated properties (empty for draw reveals).
    pub properties: Vec<PropertyTween>,
    /// Draw path targets instead of tweening properties.
    pub draw: bool,
    /// Playback commands for one-shot reveals.
    pub toggle_actions: ToggleActions,
    /// Remove the registration after the first complete play.
    pub once: bool,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            start: Marker::default_start(),
            end: None,
            scrub: Scrub::default(),
            stagger: 0.0,
            delay: 0.0,
            duration: 0.5,
            ease: Ease::default(),
            properties: Vec::new(),
            draw: false,
            toggle_actions: ToggleActions::default(),
            once: false,
        }
    }
}

impl RevealSpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> RevealResult<Self> {
        let spec: Self = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Check the reveal on its own, before any targets are known.
    pub fn validate(&self) -> RevealResult<()> {
        if self.draw && !self.properties.is_empty() {
            return Err(RevealError::validation(
                "draw reveals compute their own properties; leave `properties` empty",
            ));
        }
        if !self.draw && self.properties.is_empty() {
            return Err(RevealError::validation(
                "a reveal needs `properties` unless `draw` is set",
            ));
        }
        if let Some(lag) = self.scrub.lag() {
            if !(lag.is_finite() && lag >= 0.0) {
                return Err(RevealError::validation(format!(
                    "scrub lag must be finite and >= 0, got {lag}"
                )));
            }
            if self.once {
                return Err(RevealError::validation("`once` only applies to one-shot reveals"));
            }
        }
        Timing::new(self.duration, self.delay, self.stagger, 1)?;
        self.property_spec().validate()
    }

    fn property_spec(&self) -> PropertySpec {
        PropertySpec::new(self.properties.iter().copied(), self.ease)
    }

    /// Bind this reveal to host elements.
    pub fn registration(
        &self,
        owner: OwnerTag,
        targets: &[ElementRef],
        trigger: &TriggerRef,
    ) -> RevealResult<Registration> {
        self.validate()?;
        let trigger = match trigger {
            TriggerRef::Target => Trigger::element(
                targets
                    .first()
                    .ok_or_else(|| RevealError::validation("a reveal needs at least one target"))?,
            ),
            TriggerRef::Root => Trigger::Root,
            TriggerRef::Element(el) => Trigger::element(el),
        };
        let playback = match self.scrub.lag() {
            Some(lag) => Playback::Scrub { lag },
            None => Playback::OneShot {
                toggle_actions: self.toggle_actions,
                once: self.once,
            },
        };
        let animation = if self.draw {
            Animation::Draw { ease: self.ease }
        } else {
            Animation::Tween(self.property_spec())
        };
        let registration = Registration {
            owner,
            targets: targets.iter().map(Rc::downgrade).collect(),
            trigger,
            window: ScrollWindow::new(self.start, self.end),
            timing: Timing::new(self.duration, self.delay, self.stagger, targets.len())?,
            playback,
            animation,
        };
        registration.validate()?;
        Ok(registration)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
