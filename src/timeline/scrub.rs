use crate::foundation::math::{approach, clamp01};

/// Progress that follows scroll with an optional smoothing lag.
///
/// With zero lag the value is the raw progress. Otherwise it approaches the raw progress
/// exponentially with the lag as time constant, never overshooting, and lands exactly on it once
/// close enough.
#[derive(Clone, Debug)]
pub struct Scrubber {
    lag: f64,
    current: Option<f64>,
}

impl Scrubber {
    /// Scrubber with `lag` seconds of smoothing (`0` binds directly).
    pub fn new(lag: f64) -> Self {
        Self {
            lag: if lag.is_finite() { lag.max(0.0) } else { 0.0 },
            current: None,
        }
    }

    /// Smoothing lag in seconds.
    pub fn lag(&self) -> f64 {
        self.lag
    }

    /// Smoothed progress; `0` before the first update.
    pub fn value(&self) -> f64 {
        self.current.unwrap_or(0.0)
    }

    /// Feed the raw progress after `dt` seconds and return the smoothed value.
    ///
    /// The first update snaps to `target`.
    pub fn update(&mut self, target: f64, dt: f64) -> f64 {
        let target = clamp01(target);
        let next = match self.current {
            None => target,
            Some(current) => approach(current, target, dt, self.lag),
        };
        self.current = Some(next);
        next
    }

    /// `true` when the smoothed value equals `target`.
    pub fn is_settled(&self, target: f64) -> bool {
        self.current == Some(clamp01(target))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scrub.rs"]
mod tests;
