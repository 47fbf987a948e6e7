//! Generators for the decorative rope paths.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::str::FromStr;

use crate::foundation::core::{BezPath, Point, Size, Vec2};
use crate::foundation::error::{RevealError, RevealResult};

/// Meander multiplier used when a rope does not set one.
pub const DEFAULT_ROPE_WAVINESS: f64 = 0.22;

/// Meander segment count used when a rope does not set one.
pub const DEFAULT_ROPE_SEGMENTS: usize = 5;

// Peak sideways offset in pixels at waviness 1.
const ROPE_AMPLITUDE: f64 = 120.0;

/// Start and end corners of a corner-to-corner rope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RopeCorners {
    /// Top-left to bottom-right.
    #[default]
    TopLeftToBottomRight,
    /// Top-right to bottom-left.
    TopRightToBottomLeft,
    /// Bottom-left to top-right.
    BottomLeftToTopRight,
    /// Bottom-right to top-left.
    BottomRightToTopLeft,
}

impl RopeCorners {
    /// Short form such as `tl-br`.
    pub fn name(self) -> &'static str {
        match self {
            Self::TopLeftToBottomRight => "tl-br",
            Self::TopRightToBottomLeft => "tr-bl",
            Self::BottomLeftToTopRight => "bl-tr",
            Self::BottomRightToTopLeft => "br-tl",
        }
    }

    // Normalized endpoints, inset 5% from the edges.
    fn endpoints(self) -> (Vec2, Vec2) {
        let (near, far) = (0.05, 0.95);
        match self {
            Self::TopLeftToBottomRight => (Vec2::new(near, near), Vec2::new(far, far)),
            Self::TopRightToBottomLeft => (Vec2::new(far, near), Vec2::new(near, far)),
            Self::BottomLeftToTopRight => (Vec2::new(near, far), Vec2::new(far, near)),
            Self::BottomRightToTopLeft => (Vec2::new(far, far), Vec2::new(near, near)),
        }
    }
}

impl FromStr for RopeCorners {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tl-br" => Ok(Self::TopLeftToBottomRight),
            "tr-bl" => Ok(Self::TopRightToBottomLeft),
            "bl-tr" => Ok(Self::BottomLeftToTopRight),
            "br-tl" => Ok(Self::BottomRightToTopLeft),
            other => Err(RevealError::config(format!("unknown rope corners '{other}'"))),
        }
    }
}

impl TryFrom<String> for RopeCorners {
    type Error = RevealError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RopeCorners> for String {
    fn from(c: RopeCorners) -> Self {
        c.name().to_owned()
    }
}

/// Meandering cubic rope between two corners of a `size` box.
///
/// `segments - 1` interior points are pushed off the straight line along its normal by
/// `waviness * 120 * sin(πt)` pixels, so the offset peaks mid-rope whatever the box size. The
/// polyline is then smoothed into a Catmull-Rom cubic chain.
pub fn corner_rope(
    corners: RopeCorners,
    size: Size,
    waviness: f64,
    segments: usize,
) -> RevealResult<BezPath> {
    if !(size.width > 0.0 && size.height > 0.0) {
        return Err(RevealError::validation("rope size must be positive"));
    }
    if segments < 1 {
        return Err(RevealError::validation("rope needs at least one segment"));
    }
    if !waviness.is_finite() {
        return Err(RevealError::validation("rope waviness must be finite"));
    }

    let (a, b) = corners.endpoints();
    let p0 = Point::new(a.x * size.width, a.y * size.height);
    let pn = Point::new(b.x * size.width, b.y * size.height);
    let dir = pn - p0;
    let len = dir.hypot();
    let normal = if len > 0.0 {
        Vec2::new(-dir.y / len, dir.x / len)
    } else {
        Vec2::ZERO
    };
    let reach = waviness * ROPE_AMPLITUDE;

    let mut pts = Vec::with_capacity(segments + 1);
    pts.push(p0);
    for i in 1..segments {
        let t = i as f64 / segments as f64;
        let amp = reach * (PI * t).sin();
        pts.push(p0 + dir * t + normal * amp);
    }
    pts.push(pn);

    Ok(catmull_rom(&pts))
}

fn catmull_rom(pts: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = pts.first() else {
        return path;
    };
    path.move_to(first);
    let last = pts.len() - 1;
    for i in 0..last {
        let p0 = pts[i.saturating_sub(1)];
        let p1 = pts[i];
        let p2 = pts[i + 1];
        let p3 = pts[(i + 2).min(last)];
        let c1 = p1 + (p2 - p0) / 6.0;
        let c2 = p2 - (p3 - p1) / 6.0;
        path.curve_to(c1, c2, p2);
    }
    path
}

/// Closed, slightly irregular circle that reads as a coiled rope.
pub fn circular_rope(size: f64, stroke_width: f64) -> RevealResult<BezPath> {
    let radius = (size - stroke_width * 2.0) / 2.0;
    if !(radius.is_finite() && radius > 0.0) {
        return Err(RevealError::validation(
            "circular rope needs size > 2 * stroke_width",
        ));
    }
    const SEGMENTS: usize = 32;
    let center = Point::new(size / 2.0, size / 2.0);
    let at = |i: usize| {
        let angle = i as f64 / SEGMENTS as f64 * TAU;
        let r = radius + (angle * 8.0).sin() * 2.0;
        (angle, r, center + Vec2::from_angle(angle) * r)
    };

    let mut path = BezPath::new();
    path.move_to(at(0).2);
    for i in 1..=SEGMENTS {
        let (prev_angle, _, prev) = at(i - 1);
        let (angle, r, p) = at(i);
        let c1 = prev + Vec2::from_angle(prev_angle + FRAC_PI_2) * (r * 0.1);
        let c2 = p - Vec2::from_angle(angle + FRAC_PI_2) * (r * 0.1);
        path.curve_to(c1, c2, p);
    }
    path.close_path();
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/draw/rope.rs"]
mod tests;
