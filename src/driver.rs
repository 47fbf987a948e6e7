use crate::foundation::core::Viewport;
use crate::registry::store::{TickReport, TriggerRegistry};
use crate::viewport::tracker::ScrollTracker;

/// Glue between host events and registry ticks.
///
/// Forward scroll and resize events to [`ScrollDriver::tracker_mut`] and call
/// [`ScrollDriver::frame`] from the animation-frame callback.
#[derive(Debug)]
pub struct ScrollDriver {
    tracker: ScrollTracker,
    registry: TriggerRegistry,
}

impl ScrollDriver {
    /// Driver ticking `registry` against `viewport`.
    pub fn new(viewport: Viewport, registry: TriggerRegistry) -> Self {
        Self {
            tracker: ScrollTracker::new(viewport),
            registry,
        }
    }

    /// Registry handle.
    pub fn registry(&self) -> &TriggerRegistry {
        &self.registry
    }

    /// Event sink.
    pub fn tracker_mut(&mut self) -> &mut ScrollTracker {
        &mut self.tracker
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.tracker.viewport()
    }

    /// Forward the host's reduced-motion preference to the registry.
    ///
    /// Takes effect on the next frame, which is requested right away.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.registry.set_reduced_motion(reduced);
    }

    /// `true` when the host should schedule another animation frame.
    pub fn wants_frame(&self) -> bool {
        self.tracker.is_pending() || self.registry.needs_frame()
    }

    /// Run one tick if an event arrived or something is still moving.
    pub fn frame(&mut self, now: f64) -> Option<TickReport> {
        let viewport = match self.tracker.take_frame() {
            Some(req) => {
                if req.layout_changed {
                    self.registry.invalidate_layout();
                }
                req.viewport
            }
            None if self.registry.needs_frame() => self.tracker.viewport(),
            None => return None,
        };
        Some(self.registry.tick(&viewport, now))
    }
}

#[cfg(test)]
#[path = "../tests/unit/driver.rs"]
mod tests;
