use crate::config::RevealSpec;
use crate::foundation::core::OwnerTag;
use crate::foundation::error::RevealResult;
use crate::host::target::ElementRef;
use crate::registry::registration::TriggerRef;
use crate::registry::store::{RevealId, TriggerRegistry};

/// A reveal declared by a view: which elements, what drives them, how they move.
#[derive(Clone)]
pub struct Reveal {
    /// Animated elements, in stagger order.
    pub targets: Vec<ElementRef>,
    /// Trigger element; the first target unless set.
    pub trigger: TriggerRef,
    /// Animation description.
    pub spec: RevealSpec,
}

impl std::fmt::Debug for Reveal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reveal")
            .field("targets", &self.targets.len())
            .field("trigger", &self.trigger)
            .field("spec", &self.spec)
            .finish()
    }
}

impl Reveal {
    /// Reveal triggered by its first target.
    pub fn new(targets: Vec<ElementRef>, spec: RevealSpec) -> Self {
        Self {
            targets,
            trigger: TriggerRef::Target,
            spec,
        }
    }

    /// Use another trigger.
    pub fn with_trigger(mut self, trigger: TriggerRef) -> Self {
        self.trigger = trigger;
        self
    }
}

/// Registrations owned by one mounted view.
///
/// Everything registered through a scope shares its owner tag and is removed exactly once, by
/// [`RevealScope::teardown`] or on drop. `D` is the view's dependency value; reveals are only
/// rebuilt when it changes.
#[derive(Debug)]
pub struct RevealScope<D: PartialEq> {
    registry: TriggerRegistry,
    owner: OwnerTag,
    deps: D,
    ids: Vec<RevealId>,
    torn_down: bool,
}

impl<D: PartialEq> RevealScope<D> {
    /// Register `reveals` under a fresh owner tag.
    ///
    /// If any reveal is invalid, the ones already registered are removed again and the error is
    /// returned.
    #[tracing::instrument(level = "debug", skip_all, fields(reveals = reveals.len()))]
    pub fn mount(registry: &TriggerRegistry, deps: D, reveals: Vec<Reveal>) -> RevealResult<Self> {
        let owner = registry.new_owner();
        let mut scope = Self {
            registry: registry.clone(),
            owner,
            deps,
            ids: Vec::new(),
            torn_down: false,
        };
        scope.register_all(&reveals)?;
        Ok(scope)
    }

    fn register_all(&mut self, reveals: &[Reveal]) -> RevealResult<()> {
        for reveal in reveals {
            let registered = reveal
                .spec
                .registration(self.owner, &reveal.targets, &reveal.trigger)
                .and_then(|reg| self.registry.register(reg));
            match registered {
                Ok(id) => self.ids.push(id),
                Err(e) => {
                    self.registry.unregister_all(self.owner);
                    self.ids.clear();
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Owner tag shared by this scope's registrations.
    pub fn owner(&self) -> OwnerTag {
        self.owner
    }

    /// Current dependency value.
    pub fn deps(&self) -> &D {
        &self.deps
    }

    /// Ids registered by the last mount or rebind.
    pub fn ids(&self) -> &[RevealId] {
        &self.ids
    }

    /// Replace the reveals when `deps` changed. Returns `Ok(false)` for equal deps.
    ///
    /// Old registrations are removed before the new ones are added. On error the scope is left
    /// empty but still mounted.
    pub fn rebind(&mut self, deps: D, reveals: Vec<Reveal>) -> RevealResult<bool> {
        if deps == self.deps {
            return Ok(false);
        }
        let removed = self.registry.unregister_all(self.owner);
        tracing::debug!(owner = self.owner.0, removed, "rebinding reveals");
        self.ids.clear();
        self.deps = deps;
        self.register_all(&reveals)?;
        Ok(true)
    }

    /// Remove every registration of this scope now.
    pub fn teardown(mut self) -> usize {
        self.release()
    }

    fn release(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        self.torn_down = true;
        self.ids.clear();
        self.registry.unregister_all(self.owner)
    }
}

impl<D: PartialEq> Drop for RevealScope<D> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/scope.rs"]
mod tests;
