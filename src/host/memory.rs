use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::animation::property::StyleFrame;
use crate::draw::metrics::PathMetrics;
use crate::foundation::core::{BezPath, Point, Rect};
use crate::host::target::{ElementRef, RenderTarget};

/// In-memory [`RenderTarget`] used by the simulator and tests.
///
/// Records the merged style it has received and how many writes happened.
#[derive(Debug)]
pub struct MemoryElement {
    id: String,
    rect: Cell<Option<Rect>>,
    path: RefCell<Option<PathMetrics>>,
    attached: Cell<bool>,
    style: RefCell<StyleFrame>,
    writes: Cell<usize>,
}

impl MemoryElement {
    /// Element laid out at `rect` (document coordinates).
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect: Cell::new(Some(rect)),
            path: RefCell::new(None),
            attached: Cell::new(true),
            style: RefCell::new(StyleFrame::new()),
            writes: Cell::new(0),
        }
    }

    /// Element that has not been laid out yet.
    pub fn unmeasured(id: impl Into<String>) -> Self {
        let el = Self::new(id, Rect::ZERO);
        el.rect.set(None);
        el
    }

    /// Path element laid out at `rect` whose stroke follows `path`.
    pub fn with_path(id: impl Into<String>, rect: Rect, path: &BezPath) -> Self {
        let el = Self::new(id, rect);
        el.set_path(path);
        el
    }

    /// Wrap into a shared [`ElementRef`] while keeping a typed handle.
    pub fn into_ref(self) -> (Rc<MemoryElement>, ElementRef) {
        let typed = Rc::new(self);
        let dyn_ref: ElementRef = typed.clone();
        (typed, dyn_ref)
    }

    /// Element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Move or resize the element.
    pub fn set_rect(&self, rect: Option<Rect>) {
        self.rect.set(rect);
    }

    /// Replace the path geometry (e.g. after a responsive re-layout).
    pub fn set_path(&self, path: &BezPath) {
        *self.path.borrow_mut() = Some(PathMetrics::new(path));
    }

    /// Simulate removal from the render tree.
    pub fn detach(&self) {
        self.attached.set(false);
    }

    /// Merged style written so far.
    pub fn style(&self) -> StyleFrame {
        self.style.borrow().clone()
    }

    /// Number of [`RenderTarget::apply_style`] calls received.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl RenderTarget for MemoryElement {
    fn layout_rect(&self) -> Option<Rect> {
        self.rect.get()
    }

    fn apply_style(&self, style: &StyleFrame) {
        self.style.borrow_mut().merge(style);
        self.writes.set(self.writes.get() + 1);
    }

    fn total_length(&self) -> Option<f64> {
        self.path.borrow().as_ref().map(PathMetrics::total_length)
    }

    fn point_at_length(&self, len: f64) -> Option<Point> {
        self.path.borrow().as_ref()?.point_at_length(len)
    }

    fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/memory.rs"]
mod tests;
