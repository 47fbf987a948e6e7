use crate::foundation::error::{RevealError, RevealResult};

pub use kurbo::{BezPath, Point, Rect, Size, Vec2};

/// Identifies every registration created by one mount of a view.
///
/// Tags are handed out by [`TriggerRegistry::new_owner`](crate::TriggerRegistry::new_owner) and
/// never reused within a registry.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct OwnerTag(pub u64);

/// Visible window onto the document, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Viewport width.
    pub width: f64,
    /// Viewport height, must be > 0.
    pub height: f64,
    /// Current vertical scroll offset of the document.
    #[serde(default)]
    pub scroll_y: f64,
    /// Total scrollable document height (used for the root trigger).
    #[serde(default)]
    pub document_height: f64,
}

impl Viewport {
    /// Create a validated viewport scrolled to the top.
    pub fn new(width: f64, height: f64, document_height: f64) -> RevealResult<Self> {
        if !(width.is_finite() && width >= 0.0) {
            return Err(RevealError::validation("Viewport width must be finite and >= 0"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(RevealError::validation("Viewport height must be finite and > 0"));
        }
        if !(document_height.is_finite() && document_height >= 0.0) {
            return Err(RevealError::validation(
                "Viewport document_height must be finite and >= 0",
            ));
        }
        Ok(Self {
            width,
            height,
            scroll_y: 0.0,
            document_height,
        })
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(self) -> f64 {
        (self.document_height - self.height).max(0.0)
    }

    /// Same viewport scrolled to `y`, clamped to the scrollable range.
    pub fn scrolled_to(mut self, y: f64) -> Self {
        self.scroll_y = if y.is_finite() {
            y.clamp(0.0, self.max_scroll())
        } else {
            0.0
        };
        self
    }

    /// Convert a rect in document coordinates into viewport-relative coordinates.
    pub fn to_viewport(self, doc_rect: Rect) -> Rect {
        doc_rect - Vec2::new(0.0, self.scroll_y)
    }

    /// Viewport-relative bounds of the whole document.
    pub fn root_rect(self) -> Rect {
        self.to_viewport(Rect::new(
            0.0,
            0.0,
            self.width,
            self.document_height.max(self.height),
        ))
    }

    /// `true` when `rect` (viewport-relative) lies within one viewport height above or below the
    /// visible area.
    pub fn is_near(self, rect: Rect) -> bool {
        rect.y1 >= -self.height && rect.y0 <= 2.0 * self.height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
