use smallvec::SmallVec;

use crate::animation::ease::Ease;
use crate::foundation::error::{RevealError, RevealResult};

/// Visual attribute an animation can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// Element opacity in `[0, 1]`.
    Opacity,
    /// Horizontal translation in pixels.
    #[serde(alias = "translateX")]
    X,
    /// Vertical translation in pixels.
    #[serde(alias = "translateY")]
    Y,
    /// Uniform scale factor.
    Scale,
    /// Rotation in degrees.
    Rotation,
    /// Stroke dash offset of a path.
    StrokeDashoffset,
    /// Stroke dash pattern length (`v v`).
    StrokeDasharray,
    /// Horizontal position of the marker riding the drawn end of a path.
    MarkerX,
    /// Vertical position of the marker riding the drawn end of a path.
    MarkerY,
}

impl Property {
    /// CSS-ish name used in logs and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::X => "x",
            Self::Y => "y",
            Self::Scale => "scale",
            Self::Rotation => "rotation",
            Self::StrokeDashoffset => "strokeDashoffset",
            Self::StrokeDasharray => "strokeDasharray",
            Self::MarkerX => "markerX",
            Self::MarkerY => "markerY",
        }
    }
}

/// One `(property, from, to, ease)` tuple.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyTween {
    /// Animated attribute.
    pub property: Property,
    /// Value at progress 0.
    pub from: f64,
    /// Value at progress 1.
    pub to: f64,
    /// Per-property curve; falls back to the shared ease.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
}

impl PropertyTween {
    /// Tween using the shared ease.
    pub fn new(property: Property, from: f64, to: f64) -> Self {
        Self {
            property,
            from,
            to,
            ease: None,
        }
    }

    /// Override the ease for this property only.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }
}

/// Ordered set of property tweens sharing a default ease.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertySpec {
    /// Tweens in declaration order.
    pub tweens: SmallVec<[PropertyTween; 4]>,
    /// Ease used by tweens that do not carry their own.
    pub ease: Ease,
}

impl PropertySpec {
    /// Build a spec from tweens and a default ease.
    pub fn new(tweens: impl IntoIterator<Item = PropertyTween>, ease: Ease) -> Self {
        Self {
            tweens: tweens.into_iter().collect(),
            ease,
        }
    }

    /// Reject non-finite values and properties declared twice.
    pub fn validate(&self) -> RevealResult<()> {
        for (i, t) in self.tweens.iter().enumerate() {
            if !(t.from.is_finite() && t.to.is_finite()) {
                return Err(RevealError::validation(format!(
                    "property '{}' has non-finite from/to values",
                    t.property.name()
                )));
            }
            if self.tweens[..i].iter().any(|p| p.property == t.property) {
                return Err(RevealError::validation(format!(
                    "property '{}' is declared more than once",
                    t.property.name()
                )));
            }
        }
        Ok(())
    }

    /// Same tweens with every spatial offset collapsed to its resting value.
    ///
    /// Only opacity still animates, for hosts that prefer reduced motion.
    pub fn reduced_motion(&self) -> PropertySpec {
        let tweens = self.tweens.iter().map(|t| match t.property {
            Property::Opacity => *t,
            _ => PropertyTween { from: t.to, ..*t },
        });
        Self::new(tweens, self.ease)
    }

    /// Values at progress 0.
    pub fn from_frame(&self) -> StyleFrame {
        self.tweens.iter().map(|t| (t.property, t.from)).collect()
    }

    /// Values at progress 1.
    pub fn to_frame(&self) -> StyleFrame {
        self.tweens.iter().map(|t| (t.property, t.to)).collect()
    }
}

/// A complete set of property values written to a target in one call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleFrame {
    values: SmallVec<[(Property, f64); 4]>,
}

impl StyleFrame {
    /// Empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property`, replacing any earlier value while keeping its position.
    pub fn set(&mut self, property: Property, value: f64) {
        match self.values.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.values.push((property, value)),
        }
    }

    /// Value of `property`, if present.
    pub fn get(&self, property: Property) -> Option<f64> {
        self.values
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }

    /// Iterate values in write order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        self.values.iter().copied()
    }

    /// Number of properties in the frame.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when the frame carries no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay `other` on top of `self`.
    pub fn merge(&mut self, other: &StyleFrame) {
        for (p, v) in other.iter() {
            self.set(p, v);
        }
    }
}

impl FromIterator<(Property, f64)> for StyleFrame {
    fn from_iter<I: IntoIterator<Item = (Property, f64)>>(iter: I) -> Self {
        let mut frame = StyleFrame::new();
        for (p, v) in iter {
            frame.set(p, v);
        }
        frame
    }
}

impl serde::Serialize for StyleFrame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (p, v) in &self.values {
            map.serialize_entry(p.name(), v)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/property.rs"]
mod tests;
