use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{RevealError, RevealResult};

/// Position along one axis of a box, e.g. `top`, `80%`, `120px`, `center+=40`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    base: AnchorBase,
    offset_px: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum AnchorBase {
    Fraction(f64),
    Pixels(f64),
}

impl Anchor {
    /// Anchor at `fraction` of the box length (`0.0` = top, `1.0` = bottom).
    pub const fn fraction(fraction: f64) -> Self {
        Self {
            base: AnchorBase::Fraction(fraction),
            offset_px: 0.0,
        }
    }

    /// Anchor `px` pixels from the top of the box.
    pub const fn pixels(px: f64) -> Self {
        Self {
            base: AnchorBase::Pixels(px),
            offset_px: 0.0,
        }
    }

    /// Top edge.
    pub const TOP: Anchor = Anchor::fraction(0.0);
    /// Vertical center.
    pub const CENTER: Anchor = Anchor::fraction(0.5);
    /// Bottom edge.
    pub const BOTTOM: Anchor = Anchor::fraction(1.0);

    /// Shift the anchor by `px` pixels (positive is downward).
    pub fn offset(mut self, px: f64) -> Self {
        self.offset_px += px;
        self
    }

    /// Distance from the top of a box of the given `length`.
    pub fn resolve(self, length: f64) -> f64 {
        let base = match self.base {
            AnchorBase::Fraction(f) => f * length,
            AnchorBase::Pixels(px) => px,
        };
        base + self.offset_px
    }

    fn parse(token: &str) -> RevealResult<Self> {
        let (head, offset) = match token.find("+=").or_else(|| token.find("-=")) {
            Some(at) => {
                let sign = if token[at..].starts_with('-') { -1.0 } else { 1.0 };
                let amount = parse_number(token[at + 2..].trim_end_matches("px"), token)?;
                (&token[..at], sign * amount)
            }
            None => (token, 0.0),
        };

        let base = match head {
            "top" | "left" => AnchorBase::Fraction(0.0),
            "center" => AnchorBase::Fraction(0.5),
            "bottom" | "right" => AnchorBase::Fraction(1.0),
            _ => {
                if let Some(pct) = head.strip_suffix('%') {
                    AnchorBase::Fraction(parse_number(pct, token)? / 100.0)
                } else {
                    AnchorBase::Pixels(parse_number(head.trim_end_matches("px"), token)?)
                }
            }
        };
        Ok(Self {
            base,
            offset_px: offset,
        })
    }
}

fn parse_number(s: &str, token: &str) -> RevealResult<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RevealError::config(format!("invalid marker anchor '{token}'")))
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.base {
            AnchorBase::Fraction(v) if v == 0.0 => f.write_str("top")?,
            AnchorBase::Fraction(v) if v == 0.5 => f.write_str("center")?,
            AnchorBase::Fraction(v) if v == 1.0 => f.write_str("bottom")?,
            AnchorBase::Fraction(v) => write!(f, "{}%", v * 100.0)?,
            AnchorBase::Pixels(px) => write!(f, "{px}px")?,
        }
        if self.offset_px > 0.0 {
            write!(f, "+={}", self.offset_px)?;
        } else if self.offset_px < 0.0 {
            write!(f, "-={}", -self.offset_px)?;
        }
        Ok(())
    }
}

/// Scroll marker pairing a point on the trigger element with a line in the viewport.
///
/// `"top 80%"` is reached when the trigger's top edge meets the line 80% down the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Marker {
    /// Point on the trigger element.
    pub element: Anchor,
    /// Line in the viewport.
    pub viewport: Anchor,
}

impl Marker {
    /// Marker from explicit anchors.
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// Default start marker: `top 80%`.
    pub const fn default_start() -> Self {
        Self::new(Anchor::TOP, Anchor::fraction(0.8))
    }

    /// Default end marker: `bottom top` (trigger fully scrolled past).
    pub const fn default_end() -> Self {
        Self::new(Anchor::BOTTOM, Anchor::TOP)
    }
}

impl FromStr for Marker {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let element = parts
            .next()
            .ok_or_else(|| RevealError::config("marker must not be empty"))?;
        let viewport = parts.next();
        if parts.next().is_some() {
            return Err(RevealError::config(format!(
                "marker '{s}' has more than two anchors"
            )));
        }
        Ok(Self {
            element: Anchor::parse(element)?,
            viewport: match viewport {
                Some(v) => Anchor::parse(v)?,
                None => Anchor::TOP,
            },
        })
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

impl TryFrom<String> for Marker {
    type Error = RevealError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Marker> for String {
    fn from(m: Marker) -> Self {
        m.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/marker.rs"]
mod tests;
