use std::rc::Rc;

use crate::animation::property::StyleFrame;
use crate::foundation::core::{Point, Rect};

/// Host element the engine can measure and style.
///
/// Implementations wrap whatever the host renders with (a DOM node, a scene-graph node, an
/// in-memory record). All methods take `&self`; hosts use interior mutability for writes.
pub trait RenderTarget {
    /// Layout box in document coordinates, or `None` while the element is not measurable.
    fn layout_rect(&self) -> Option<Rect>;

    /// Write every value of `style` in one update.
    fn apply_style(&self, style: &StyleFrame);

    /// Total stroke length for path-like elements.
    fn total_length(&self) -> Option<f64> {
        None
    }

    /// Point reached after `len` along the stroke, in the path's own coordinates.
    ///
    /// Hosts that return a point get a marker riding the drawn end of the path.
    fn point_at_length(&self, _len: f64) -> Option<Point> {
        None
    }

    /// `false` once the element has been removed from the render tree.
    fn is_attached(&self) -> bool {
        true
    }
}

/// Shared handle to a host element, owned by the view that renders it.
///
/// The registry only keeps [`std::rc::Weak`] copies of these.
pub type ElementRef = Rc<dyn RenderTarget>;
