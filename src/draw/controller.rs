use crate::animation::ease::Ease;
use crate::animation::property::{Property, StyleFrame};
use crate::foundation::math::clamp01;
use crate::host::target::RenderTarget;

/// Lifecycle of one self-drawing path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawState {
    /// Path length not measured yet (element missing or not laid out).
    Uninitialized,
    /// Measured and driven by progress updates.
    Bound {
        /// Measured stroke length.
        total_length: f64,
    },
    /// Registration removed; no further writes happen.
    TornDown,
}

/// Drives `strokeDashoffset` of a path from progress: hidden at 0, fully drawn at 1.
///
/// When the host can locate points on the stroke, each frame also carries `markerX`/`markerY`
/// at the drawn end.
#[derive(Clone, Debug)]
pub struct PathDraw {
    state: DrawState,
    ease: Ease,
    stale: bool,
}

impl PathDraw {
    /// Controller in the [`DrawState::Uninitialized`] state.
    pub fn new(ease: Ease) -> Self {
        Self {
            state: DrawState::Uninitialized,
            ease,
            stale: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Measured length, when bound.
    pub fn total_length(&self) -> Option<f64> {
        match self.state {
            DrawState::Bound { total_length } => Some(total_length),
            _ => None,
        }
    }

    /// Request a re-measure before the next frame (geometry may have changed).
    pub fn invalidate(&mut self) {
        if matches!(self.state, DrawState::Bound { .. }) {
            self.stale = true;
        }
    }

    /// Stop driving the path. Further calls to [`PathDraw::frame`] return `None`.
    pub fn tear_down(&mut self) {
        self.state = DrawState::TornDown;
    }

    /// Dash offset for `progress` on a path of `total_length`, clamped to `[0, total_length]`.
    pub fn offset_for(total_length: f64, ease: Ease, progress: f64) -> f64 {
        let total = total_length.max(0.0);
        let drawn = ease.apply(clamp01(progress));
        (total * (1.0 - drawn)).clamp(0.0, total)
    }

    /// Measure if needed, then compute the dash state for `progress`.
    ///
    /// Returns `None` while the path cannot be measured or after teardown.
    pub fn frame(&mut self, target: &dyn RenderTarget, progress: f64) -> Option<StyleFrame> {
        match self.state {
            DrawState::TornDown => return None,
            DrawState::Uninitialized => self.measure(target)?,
            DrawState::Bound { .. } if self.stale => {
                // Keep the old length if the path is briefly unmeasurable mid-relayout.
                let _ = self.measure(target);
                self.stale = false;
            }
            DrawState::Bound { .. } => {}
        }

        let total = self.total_length()?;
        let offset = Self::offset_for(total, self.ease, progress);
        let mut frame = StyleFrame::new();
        frame.set(Property::StrokeDasharray, total);
        frame.set(Property::StrokeDashoffset, offset);
        if let Some(p) = target.point_at_length(total - offset) {
            frame.set(Property::MarkerX, p.x);
            frame.set(Property::MarkerY, p.y);
        }
        Some(frame)
    }

    fn measure(&mut self, target: &dyn RenderTarget) -> Option<()> {
        let total_length = target.total_length().filter(|l| l.is_finite() && *l >= 0.0)?;
        if let DrawState::Bound { total_length: old } = self.state
            && old != total_length
        {
            tracing::debug!(old, new = total_length, "path length re-measured");
        }
        self.state = DrawState::Bound { total_length };
        Some(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/controller.rs"]
mod tests;
