/// Clamp into `[0, 1]`, mapping NaN to 0.
pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Distance below which a smoothed value snaps onto its target.
pub(crate) const SETTLE_EPSILON: f64 = 1e-4;

/// Exponentially approach `target` from `current` with time constant `tau` seconds.
///
/// Never overshoots, and lands exactly on `target` once within [`SETTLE_EPSILON`].
pub(crate) fn approach(current: f64, target: f64, dt: f64, tau: f64) -> f64 {
    if tau <= 0.0 || !dt.is_finite() {
        return target;
    }
    let dt = dt.max(0.0);
    let alpha = 1.0 - (-dt / tau).exp();
    let next = current + (target - current) * alpha;
    if (target - next).abs() < SETTLE_EPSILON {
        target
    } else {
        next
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
