use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

use crate::foundation::core::{OwnerTag, Viewport};
use crate::foundation::error::RevealResult;
use crate::registry::live::{Live, Step};
use crate::registry::registration::Registration;

new_key_type! {
    /// Generational handle to one registration. Stale handles never alias a newer registration.
    pub struct RevealId;
}

/// Counters for one [`TriggerRegistry::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TickReport {
    /// Registrations whose progress was recomputed.
    pub recomputed: usize,
    /// Registrations skipped because they are settled and far off-screen.
    pub culled: usize,
    /// `apply_style` calls made.
    pub writes: usize,
    /// Registrations removed during the tick (orphaned or finished `once` reveals).
    pub removed: usize,
    /// Registrations still playing or converging after the tick.
    pub animating: usize,
}

#[derive(Default)]
struct Inner {
    slots: SlotMap<RevealId, Live>,
    order: Vec<RevealId>,
    next_owner: u64,
    reduced_motion: bool,
}

impl Inner {
    fn remove(&mut self, id: RevealId) -> bool {
        let Some(mut live) = self.slots.remove(id) else {
            return false;
        };
        live.tear_down();
        self.order.retain(|k| *k != id);
        true
    }
}

/// Explicitly owned set of live scroll registrations.
///
/// Cloning yields another handle to the same registry. Ticks visit registrations in the order
/// they were registered. The registry is single-threaded and never keeps host elements alive.
#[derive(Clone, Default)]
pub struct TriggerRegistry {
    inner: Rc<RefCell<Inner>>,
}

impl fmt::Debug for TriggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("TriggerRegistry")
            .field("len", &inner.slots.len())
            .field("next_owner", &inner.next_owner)
            .field("reduced_motion", &inner.reduced_motion)
            .finish()
    }
}

impl TriggerRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh owner tag, unique within this registry.
    pub fn new_owner(&self) -> OwnerTag {
        let mut inner = self.inner.borrow_mut();
        inner.next_owner += 1;
        OwnerTag(inner.next_owner)
    }

    /// Validate and add a registration. Duplicates are allowed and animate independently.
    pub fn register(&self, registration: Registration) -> RevealResult<RevealId> {
        registration.validate()?;
        let owner = registration.owner;
        let targets = registration.targets.len();
        let mut inner = self.inner.borrow_mut();
        let id = inner.slots.insert(Live::new(registration));
        inner.order.push(id);
        tracing::debug!(?id, owner = owner.0, targets, "reveal registered");
        Ok(id)
    }

    /// Remove one registration. Returns `false` if it was already gone.
    pub fn unregister(&self, id: RevealId) -> bool {
        let removed = self.inner.borrow_mut().remove(id);
        if removed {
            tracing::debug!(?id, "reveal unregistered");
        }
        removed
    }

    /// Remove every registration of `owner` in one pass. Returns how many were removed.
    pub fn unregister_all(&self, owner: OwnerTag) -> usize {
        let mut inner = self.inner.borrow_mut();
        let Inner { slots, order, .. } = &mut *inner;
        let mut removed = 0;
        order.retain(|id| {
            let mine = slots.get(*id).is_some_and(|l| l.reg.owner == owner);
            if mine {
                if let Some(mut live) = slots.remove(*id) {
                    live.tear_down();
                }
                removed += 1;
            }
            !mine
        });
        if removed > 0 {
            tracing::debug!(owner = owner.0, removed, "owner torn down");
        }
        removed
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.inner.borrow().slots.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live registrations created by `owner`.
    pub fn owner_len(&self, owner: OwnerTag) -> usize {
        self.inner
            .borrow()
            .slots
            .values()
            .filter(|l| l.reg.owner == owner)
            .count()
    }

    /// `true` for a registration that is still present.
    pub fn contains(&self, id: RevealId) -> bool {
        self.inner.borrow().slots.contains_key(id)
    }

    /// `true` when some registration needs a tick even without new scroll events.
    pub fn needs_frame(&self) -> bool {
        self.inner
            .borrow()
            .slots
            .values()
            .any(|l| l.is_fresh() || l.is_animating())
    }

    /// Geometry changed: re-measure paths and recompute every registration on the next tick.
    pub fn invalidate_layout(&self) {
        for live in self.inner.borrow_mut().slots.values_mut() {
            live.invalidate_layout();
        }
    }

    /// Collapse spatial offsets (translation, scale, rotation) to their resting values and keep
    /// only opacity fades. Path drawing is unaffected.
    ///
    /// Every registration is recomputed on the next tick when the setting changes.
    pub fn set_reduced_motion(&self, reduced: bool) {
        let mut inner = self.inner.borrow_mut();
        if inner.reduced_motion == reduced {
            return;
        }
        inner.reduced_motion = reduced;
        for live in inner.slots.values_mut() {
            live.refresh();
        }
        tracing::debug!(reduced, "reduced motion changed");
    }

    /// Whether [`TriggerRegistry::set_reduced_motion`] is on.
    pub fn reduced_motion(&self) -> bool {
        self.inner.borrow().reduced_motion
    }

    /// Recompute every live registration against `viewport` at time `now` (seconds).
    ///
    /// Never fails. Registrations whose trigger element has been dropped are removed.
    #[tracing::instrument(level = "trace", skip(self, viewport), fields(scroll_y = viewport.scroll_y))]
    pub fn tick(&self, viewport: &Viewport, now: f64) -> TickReport {
        let ids: Vec<RevealId> = self.inner.borrow().order.clone();
        let mut report = TickReport::default();

        for id in ids {
            // The borrow ends before any host code runs.
            let step = {
                let mut inner = self.inner.borrow_mut();
                let reduced_motion = inner.reduced_motion;
                let Some(live) = inner.slots.get_mut(id) else {
                    continue;
                };
                live.step(viewport, now, reduced_motion)
            };

            match step {
                Step::Orphaned => {
                    tracing::warn!(?id, "trigger element dropped while still registered");
                    if self.inner.borrow_mut().remove(id) {
                        report.removed += 1;
                    }
                }
                Step::Culled => report.culled += 1,
                Step::Updated { writes, finished } => {
                    report.recomputed += 1;
                    for (target, frame) in writes {
                        // A host write may have torn this registration down.
                        if !self.contains(id) {
                            break;
                        }
                        if target.is_attached() {
                            target.apply_style(&frame);
                            report.writes += 1;
                        }
                    }
                    if finished && self.inner.borrow_mut().remove(id) {
                        tracing::debug!(?id, "one-time reveal finished");
                        report.removed += 1;
                    }
                }
            }
        }

        report.animating = self
            .inner
            .borrow()
            .slots
            .values()
            .filter(|l| l.is_animating())
            .count();
        report
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/store.rs"]
mod tests;
