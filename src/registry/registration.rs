use std::rc::{Rc, Weak};

use crate::animation::ease::Ease;
use crate::animation::property::PropertySpec;
use crate::foundation::core::OwnerTag;
use crate::foundation::error::{RevealError, RevealResult};
use crate::host::target::{ElementRef, RenderTarget};
use crate::timeline::stagger::Timing;
use crate::timeline::toggle::ToggleActions;
use crate::viewport::progress::ScrollWindow;

/// Element whose position drives a registration's window.
#[derive(Clone, Debug)]
pub enum Trigger {
    /// The document root; progress follows the whole page.
    Root,
    /// A host element, held weakly.
    Element(Weak<dyn RenderTarget>),
}

impl Trigger {
    /// Weak trigger for `element`.
    pub fn element(element: &ElementRef) -> Self {
        Self::Element(Rc::downgrade(element))
    }
}

/// Trigger as declared by a view, before it is resolved against the targets.
#[derive(Clone, Default)]
pub enum TriggerRef {
    /// The first animated target.
    #[default]
    Target,
    /// The document root.
    Root,
    /// Some other element.
    Element(ElementRef),
}

impl std::fmt::Debug for TriggerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target => f.write_str("Target"),
            Self::Root => f.write_str("Root"),
            Self::Element(_) => f.write_str("Element(..)"),
        }
    }
}

/// How progress is derived from the trigger window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Playback {
    /// Time-based timeline started and stopped by window transitions.
    OneShot {
        /// What to do on each transition.
        toggle_actions: ToggleActions,
        /// Remove the registration once it has played to the end.
        once: bool,
    },
    /// Progress bound to the scroll position, smoothed by `lag` seconds.
    Scrub {
        /// `0` binds directly.
        lag: f64,
    },
}

/// What a registration writes to its targets.
#[derive(Clone, Debug, PartialEq)]
pub enum Animation {
    /// Interpolated properties.
    Tween(PropertySpec),
    /// Stroke drawing of path targets.
    Draw {
        /// Curve applied to the drawn fraction.
        ease: Ease,
    },
}

/// One scroll-triggered animation bound to host elements.
#[derive(Clone, Debug)]
pub struct Registration {
    /// Mount that created this registration.
    pub owner: OwnerTag,
    /// Animated elements, in stagger order.
    pub targets: Vec<Weak<dyn RenderTarget>>,
    /// Element the window is measured against.
    pub trigger: Trigger,
    /// Start/end markers.
    pub window: ScrollWindow,
    /// Duration, delay and stagger shared by the targets.
    pub timing: Timing,
    /// One-shot or scrubbed.
    pub playback: Playback,
    /// Written values.
    pub animation: Animation,
}

impl Registration {
    /// Check the invariants the registry relies on.
    pub fn validate(&self) -> RevealResult<()> {
        if self.targets.is_empty() {
            return Err(RevealError::validation("a reveal needs at least one target"));
        }
        if self.timing.count != self.targets.len() {
            return Err(RevealError::validation(format!(
                "timing covers {} targets but {} were given",
                self.timing.count,
                self.targets.len()
            )));
        }
        if let Playback::Scrub { lag } = self.playback
            && !(lag.is_finite() && lag >= 0.0)
        {
            return Err(RevealError::validation(format!(
                "scrub lag must be finite and >= 0, got {lag}"
            )));
        }
        match &self.animation {
            Animation::Tween(spec) if spec.tweens.is_empty() => Err(RevealError::validation(
                "a tween reveal needs at least one property",
            )),
            Animation::Tween(spec) => spec.validate(),
            Animation::Draw { .. } => Ok(()),
        }
    }

    /// `true` for scrubbed registrations.
    pub fn is_scrub(&self) -> bool {
        matches!(self.playback, Playback::Scrub { .. })
    }
}
