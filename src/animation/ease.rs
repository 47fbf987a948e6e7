use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{RevealError, RevealResult};

/// Easing functions used to map normalized animation progress.
///
/// Names follow the GSAP vocabulary used by page configs: `power1` is quadratic, `power2` cubic,
/// `power3` quartic and `power4` quintic. CSS `cubic-bezier(x1, y1, x2, y2)` curves are accepted
/// too.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    /// Linear interpolation (`none`).
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    #[default]
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Quintic ease-in.
    InQuint,
    /// Quintic ease-out.
    OutQuint,
    /// Quintic ease-in/out.
    InOutQuint,
    /// Sine ease-in.
    InSine,
    /// Sine ease-out.
    OutSine,
    /// Sine ease-in/out.
    InOutSine,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in/out.
    InOutExpo,
    /// CSS timing curve through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`.
    ///
    /// Build it with [`Ease::cubic_bezier`], which checks that `x1` and `x2` lie in `[0, 1]`.
    CubicBezier {
        /// First control point, x.
        x1: f64,
        /// First control point, y.
        y1: f64,
        /// Second control point, x.
        x2: f64,
        /// Second control point, y.
        y2: f64,
    },
}

impl Ease {
    /// Every named curve, in declaration order.
    pub const ALL: [Ease; 19] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
        Ease::InExpo,
        Ease::OutExpo,
        Ease::InOutExpo,
    ];

    /// CSS cubic-bezier curve. Both x coordinates must lie in `[0, 1]` so the curve is a
    /// function of time; y may overshoot.
    pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> RevealResult<Self> {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(RevealError::config("cubic-bezier control points must be finite"));
        }
        if !((0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2)) {
            return Err(RevealError::config(format!(
                "cubic-bezier x coordinates must be in [0, 1], got {x1} and {x2}"
            )));
        }
        Ok(Self::CubicBezier { x1, y1, x2, y2 })
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    ///
    /// Endpoints are exact for every curve.
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::InQuad => ease_in(t, 2),
            Self::OutQuad => ease_out(t, 2),
            Self::InOutQuad => ease_in_out(t, 2),
            Self::InCubic => ease_in(t, 3),
            Self::OutCubic => ease_out(t, 3),
            Self::InOutCubic => ease_in_out(t, 3),
            Self::InQuart => ease_in(t, 4),
            Self::OutQuart => ease_out(t, 4),
            Self::InOutQuart => ease_in_out(t, 4),
            Self::InQuint => ease_in(t, 5),
            Self::OutQuint => ease_out(t, 5),
            Self::InOutQuint => ease_in_out(t, 5),
            Self::InSine => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
            Self::OutSine => (t * std::f64::consts::FRAC_PI_2).sin(),
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
            Self::InExpo => 2f64.powf(10.0 * t - 10.0),
            Self::OutExpo => 1.0 - 2f64.powf(-10.0 * t),
            Self::InOutExpo => {
                if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }

    /// GSAP-style name, e.g. `power2.out`. Bezier curves report `cubic-bezier`; their
    /// [`Display`](fmt::Display) form carries the control points.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "none",
            Self::InQuad => "power1.in",
            Self::OutQuad => "power1.out",
            Self::InOutQuad => "power1.inOut",
            Self::InCubic => "power2.in",
            Self::OutCubic => "power2.out",
            Self::InOutCubic => "power2.inOut",
            Self::InQuart => "power3.in",
            Self::OutQuart => "power3.out",
            Self::InOutQuart => "power3.inOut",
            Self::InQuint => "power4.in",
            Self::OutQuint => "power4.out",
            Self::InOutQuint => "power4.inOut",
            Self::InSine => "sine.in",
            Self::OutSine => "sine.out",
            Self::InOutSine => "sine.inOut",
            Self::InExpo => "expo.in",
            Self::OutExpo => "expo.out",
            Self::InOutExpo => "expo.inOut",
            Self::CubicBezier { .. } => "cubic-bezier",
        }
    }
}

fn ease_in(t: f64, n: i32) -> f64 {
    t.powi(n)
}

fn ease_out(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

fn ease_in_out(t: f64, n: i32) -> f64 {
    if t < 0.5 {
        (2.0 * t).powi(n) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(n) / 2.0
    }
}

// Newton on x(u) first, bisection when the slope is too flat to trust.
fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    fn sample(a1: f64, a2: f64, u: f64) -> f64 {
        let omu = 1.0 - u;
        3.0 * omu * omu * u * a1 + 3.0 * omu * u * u * a2 + u * u * u
    }
    fn slope(a1: f64, a2: f64, u: f64) -> f64 {
        let omu = 1.0 - u;
        3.0 * omu * omu * a1 + 6.0 * omu * u * (a2 - a1) + 3.0 * u * u * (1.0 - a2)
    }
    const EPS: f64 = 1e-9;

    let mut u = x;
    for _ in 0..8 {
        let err = sample(x1, x2, u) - x;
        if err.abs() < EPS {
            return sample(y1, y2, u);
        }
        let d = slope(x1, x2, u);
        if d.abs() < 1e-7 {
            break;
        }
        u = (u - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    u = x;
    for _ in 0..48 {
        let xu = sample(x1, x2, u);
        if (xu - x).abs() < EPS {
            break;
        }
        if xu < x {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    sample(y1, y2, u)
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
            named => f.write_str(named.name()),
        }
    }
}

impl FromStr for Ease {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if matches!(s, "none" | "linear" | "power0" | "power0.none") {
            return Ok(Self::Linear);
        }
        if let Some(args) = s
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_cubic_bezier(args);
        }

        // A bare family name means `.out`, same as GSAP.
        let (family, dir) = s.split_once('.').unwrap_or((s, "out"));
        let table = match family {
            "power1" | "quad" => [Self::InQuad, Self::OutQuad, Self::InOutQuad],
            "power2" | "cubic" => [Self::InCubic, Self::OutCubic, Self::InOutCubic],
            "power3" | "quart" => [Self::InQuart, Self::OutQuart, Self::InOutQuart],
            "power4" | "quint" | "strong" => [Self::InQuint, Self::OutQuint, Self::InOutQuint],
            "sine" => [Self::InSine, Self::OutSine, Self::InOutSine],
            "expo" => [Self::InExpo, Self::OutExpo, Self::InOutExpo],
            _ => return Err(RevealError::config(format!("unknown ease '{s}'"))),
        };
        match dir {
            "in" => Ok(table[0]),
            "out" => Ok(table[1]),
            "inOut" | "inout" => Ok(table[2]),
            _ => Err(RevealError::config(format!("unknown ease direction in '{s}'"))),
        }
    }
}

fn parse_cubic_bezier(args: &str) -> RevealResult<Ease> {
    let coords = args
        .split(',')
        .map(|v| {
            v.trim().parse::<f64>().map_err(|_| {
                RevealError::config(format!("bad cubic-bezier coordinate '{}'", v.trim()))
            })
        })
        .collect::<RevealResult<Vec<f64>>>()?;
    match coords[..] {
        [x1, y1, x2, y2] => Ease::cubic_bezier(x1, y1, x2, y2),
        _ => Err(RevealError::config(format!(
            "cubic-bezier takes 4 coordinates, got {}",
            coords.len()
        ))),
    }
}

impl TryFrom<String> for Ease {
    type Error = RevealError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Ease> for String {
    fn from(e: Ease) -> Self {
        e.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
