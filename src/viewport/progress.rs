use crate::foundation::core::Rect;
use crate::viewport::marker::Marker;

/// Where the scroll position sits relative to a trigger window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Start marker not reached yet (also used while the trigger is unmeasurable).
    Before,
    /// Between start and end, both inclusive.
    Active,
    /// Scrolled past the end marker.
    After,
}

/// Progress through a trigger window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WindowSample {
    /// Clamped progress in `[0, 1]`; never NaN.
    pub progress: f64,
    /// Window phase.
    pub phase: Phase,
}

impl WindowSample {
    /// Sample for a trigger that has not been entered.
    pub const BEFORE: WindowSample = WindowSample {
        progress: 0.0,
        phase: Phase::Before,
    };
}

/// Start/end markers bounding a trigger window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollWindow {
    /// Marker that enters the window.
    pub start: Marker,
    /// Marker that leaves the window.
    pub end: Marker,
}

impl ScrollWindow {
    /// Window with an optional end; missing ends default to `bottom top`.
    pub fn new(start: Marker, end: Option<Marker>) -> Self {
        Self {
            start,
            end: end.unwrap_or_else(Marker::default_end),
        }
    }

    /// Sample this window for a trigger at `bounds`.
    pub fn sample(&self, bounds: Option<Rect>, viewport_height: f64) -> WindowSample {
        compute_progress(bounds, viewport_height, &self.start, &self.end)
    }
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new(Marker::default_start(), None)
    }
}

/// Progress of the current scroll position through the window `[start, end]`.
///
/// `bounds` is the trigger's box relative to the viewport (the current scroll position is the
/// origin). Unmeasurable triggers and non-finite geometry sample as [`WindowSample::BEFORE`]. A
/// window whose end does not lie after its start flips straight from 0 to 1 at the start marker.
pub fn compute_progress(
    bounds: Option<Rect>,
    viewport_height: f64,
    start: &Marker,
    end: &Marker,
) -> WindowSample {
    let Some(bounds) = bounds else {
        return WindowSample::BEFORE;
    };
    if !(viewport_height.is_finite() && viewport_height > 0.0) {
        return WindowSample::BEFORE;
    }

    let h = bounds.height();
    // Scroll distance still needed to reach each marker (<= 0 once reached).
    let to_start = bounds.y0 + start.element.resolve(h) - start.viewport.resolve(viewport_height);
    let to_end = bounds.y0 + end.element.resolve(h) - end.viewport.resolve(viewport_height);
    if !(to_start.is_finite() && to_end.is_finite()) {
        return WindowSample::BEFORE;
    }

    if to_start > 0.0 {
        return WindowSample::BEFORE;
    }
    let phase = if to_end < 0.0 {
        Phase::After
    } else {
        Phase::Active
    };
    let span = to_end - to_start;
    let progress = if span <= 0.0 || phase == Phase::After {
        1.0
    } else {
        (to_start.abs() / span).min(1.0)
    };
    WindowSample { progress, phase }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/progress.rs"]
mod tests;
