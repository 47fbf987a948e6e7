use crate::foundation::core::Viewport;

/// What changed since the last animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRequest {
    /// Viewport to tick against.
    pub viewport: Viewport,
    /// Geometry may have moved; cached measurements must be refreshed.
    pub layout_changed: bool,
}

/// Coalesces scroll, resize and layout events into at most one pending frame.
///
/// Hosts forward raw events as they arrive and call [`ScrollTracker::take_frame`] from their
/// animation-frame callback.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    viewport: Viewport,
    pending: bool,
    layout_changed: bool,
}

impl ScrollTracker {
    /// Tracker for `viewport`. The first frame is always pending.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            pending: true,
            layout_changed: false,
        }
    }

    /// Current viewport geometry.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record a scroll to `y`.
    pub fn on_scroll(&mut self, y: f64) {
        let next = self.viewport.scrolled_to(y);
        if next.scroll_y != self.viewport.scroll_y {
            self.viewport = next;
            self.pending = true;
        }
    }

    /// Record a viewport resize. Non-positive or non-finite sizes are ignored.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height > 0.0) {
            return;
        }
        let scroll = self.viewport.scroll_y;
        self.viewport.width = width;
        self.viewport.height = height;
        self.viewport = self.viewport.scrolled_to(scroll);
        self.mark_layout_changed();
    }

    /// Record a change of the document height (content loaded, sections expanded, ...).
    pub fn on_document_resize(&mut self, document_height: f64) {
        if !(document_height.is_finite() && document_height >= 0.0) {
            return;
        }
        let scroll = self.viewport.scroll_y;
        self.viewport.document_height = document_height;
        self.viewport = self.viewport.scrolled_to(scroll);
        self.mark_layout_changed();
    }

    /// Record a layout change that may have moved or reshaped elements.
    pub fn mark_layout_changed(&mut self) {
        self.layout_changed = true;
        self.pending = true;
    }

    /// `true` when an event arrived since the last frame.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending frame, if any.
    pub fn take_frame(&mut self) -> Option<FrameRequest> {
        if !self.pending {
            return None;
        }
        let req = FrameRequest {
            viewport: self.viewport,
            layout_changed: self.layout_changed,
        };
        self.pending = false;
        self.layout_changed = false;
        Some(req)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/tracker.rs"]
mod tests;
