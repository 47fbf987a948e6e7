use crate::animation::property::{PropertySpec, StyleFrame};
use crate::foundation::math::{clamp01, lerp};
use crate::host::target::RenderTarget;

/// Interpolate every tween of `spec` at `progress`.
///
/// Pure: identical inputs yield bit-identical frames. `progress` is clamped to `[0, 1]`, NaN
/// maps to 0.
pub fn apply(spec: &PropertySpec, progress: f64) -> StyleFrame {
    let t = clamp01(progress);
    spec.tweens
        .iter()
        .map(|tw| {
            let e = tw.ease.unwrap_or(spec.ease).apply(t);
            // Exact endpoints regardless of float rounding in lerp.
            let v = if e <= 0.0 {
                tw.from
            } else if e >= 1.0 {
                tw.to
            } else {
                lerp(tw.from, tw.to, e)
            };
            (tw.property, v)
        })
        .collect()
}

/// Interpolate and write the whole frame to `target` in one call.
pub fn apply_to(target: &dyn RenderTarget, spec: &PropertySpec, progress: f64) -> StyleFrame {
    let frame = apply(spec, progress);
    if target.is_attached() {
        target.apply_style(&frame);
    }
    frame
}

#[cfg(test)]
#[path = "../../tests/unit/animation/apply.rs"]
mod tests;
