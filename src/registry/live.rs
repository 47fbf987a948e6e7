use std::borrow::Cow;
use std::rc::Rc;

use crate::animation::apply::apply;
use crate::animation::property::StyleFrame;
use crate::draw::controller::PathDraw;
use crate::foundation::core::Viewport;
use crate::host::target::RenderTarget;
use crate::registry::registration::{Animation, Playback, Registration, Trigger};
use crate::timeline::player::Player;
use crate::timeline::scrub::Scrubber;
use crate::timeline::toggle::ToggleActions;
use crate::viewport::progress::Phase;

#[derive(Clone, Debug)]
enum Motion {
    Player {
        player: Player,
        toggle_actions: ToggleActions,
        once: bool,
    },
    Scrub(Scrubber),
}

/// Outcome of stepping one registration.
pub(crate) enum Step {
    /// The trigger element is gone.
    Orphaned,
    /// Settled and far from the viewport.
    Culled,
    /// Recomputed; `writes` still have to be flushed.
    Updated {
        writes: Vec<(Rc<dyn RenderTarget>, StyleFrame)>,
        finished: bool,
    },
}

/// A registration plus its per-tick state.
#[derive(Debug)]
pub(crate) struct Live {
    pub(crate) reg: Registration,
    motion: Motion,
    draws: Vec<PathDraw>,
    last_phase: Option<Phase>,
    last_now: Option<f64>,
    last_written: Vec<Option<StyleFrame>>,
    fresh: bool,
    animating: bool,
}

impl Live {
    pub(crate) fn new(reg: Registration) -> Self {
        let motion = match reg.playback {
            Playback::OneShot {
                toggle_actions,
                once,
            } => Motion::Player {
                player: Player::new(reg.timing.total()),
                toggle_actions,
                once,
            },
            Playback::Scrub { lag } => Motion::Scrub(Scrubber::new(lag)),
        };
        let draws = match &reg.animation {
            Animation::Draw { ease } => vec![PathDraw::new(*ease); reg.targets.len()],
            Animation::Tween(_) => Vec::new(),
        };
        let last_written = vec![None; reg.targets.len()];
        Self {
            reg,
            motion,
            draws,
            last_phase: None,
            last_now: None,
            last_written,
            fresh: true,
            animating: false,
        }
    }

    /// Never ticked, or ticked before a layout change.
    pub(crate) fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Playing or converging as of the last tick.
    pub(crate) fn is_animating(&self) -> bool {
        self.animating
    }

    /// Recompute on the next tick even when settled and far away.
    pub(crate) fn refresh(&mut self) {
        self.fresh = true;
    }

    pub(crate) fn invalidate_layout(&mut self) {
        self.refresh();
        for d in &mut self.draws {
            d.invalidate();
        }
    }

    pub(crate) fn tear_down(&mut self) {
        for d in &mut self.draws {
            d.tear_down();
        }
        self.animating = false;
    }

    pub(crate) fn step(&mut self, viewport: &Viewport, now: f64, reduced_motion: bool) -> Step {
        let bounds = match &self.reg.trigger {
            Trigger::Root => Some(viewport.root_rect()),
            Trigger::Element(weak) => match weak.upgrade() {
                Some(el) => el.layout_rect().map(|r| viewport.to_viewport(r)),
                None => return Step::Orphaned,
            },
        };

        let dt = match self.last_now {
            Some(prev) if now.is_finite() && now > prev => now - prev,
            _ => 0.0,
        };
        if now.is_finite() && self.last_now.is_none_or(|prev| now > prev) {
            self.last_now = Some(now);
        }

        let sample = self.reg.window.sample(bounds, viewport.height);
        // Far-off registrations are only skipped when this sample would not move them; a jump
        // across the whole window still fires its transitions.
        let unchanged = self.last_phase == Some(sample.phase)
            && match &self.motion {
                Motion::Player { .. } => true,
                Motion::Scrub(scrub) => scrub.is_settled(sample.progress),
            };
        if !self.fresh
            && !self.animating
            && unchanged
            && bounds.is_some_and(|b| !viewport.is_near(b))
        {
            return Step::Culled;
        }
        self.fresh = false;

        let finished = match &mut self.motion {
            Motion::Player {
                player,
                toggle_actions,
                once,
            } => {
                player.advance(dt);
                for action in toggle_actions.for_transition(self.last_phase, sample.phase) {
                    player.apply(action);
                }
                self.animating = player.is_running();
                *once && player.is_complete()
            }
            Motion::Scrub(scrub) => {
                scrub.update(sample.progress, dt);
                self.animating = !scrub.is_settled(sample.progress);
                false
            }
        };
        self.last_phase = Some(sample.phase);

        let tween = match &self.reg.animation {
            Animation::Tween(spec) if reduced_motion => Some(Cow::Owned(spec.reduced_motion())),
            Animation::Tween(spec) => Some(Cow::Borrowed(spec)),
            Animation::Draw { .. } => None,
        };

        let mut writes = Vec::new();
        for (i, weak) in self.reg.targets.iter().enumerate() {
            let Some(target) = weak.upgrade() else {
                continue;
            };
            let local = match &self.motion {
                Motion::Player { player, .. } => player.local_progress(&self.reg.timing, i),
                Motion::Scrub(s) => self.reg.timing.scrubbed_progress(i, s.value()),
            };
            let frame = match &tween {
                Some(spec) => Some(apply(spec, local)),
                None => self.draws[i].frame(target.as_ref(), local),
            };
            let Some(frame) = frame else {
                continue;
            };
            if self.last_written[i].as_ref() == Some(&frame) {
                continue;
            }
            self.last_written[i] = Some(frame.clone());
            writes.push((target, frame));
        }

        Step::Updated { writes, finished }
    }
}
