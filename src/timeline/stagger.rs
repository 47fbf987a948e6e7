use crate::foundation::error::{RevealError, RevealResult};

/// Shared timing of a reveal over `count` sibling targets.
///
/// Target `i` runs from `delay + i * stagger` for `duration` seconds; the whole timeline lasts
/// [`Timing::total`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Seconds each target takes.
    pub duration: f64,
    /// Seconds before the first target starts.
    pub delay: f64,
    /// Extra seconds between consecutive targets.
    pub stagger: f64,
    /// Number of targets sharing the timeline.
    pub count: usize,
}

impl Timing {
    /// Validated timing.
    pub fn new(duration: f64, delay: f64, stagger: f64, count: usize) -> RevealResult<Self> {
        for (name, v) in [("duration", duration), ("delay", delay), ("stagger", stagger)] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(RevealError::validation(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        Ok(Self {
            duration,
            delay,
            stagger,
            count,
        })
    }

    /// Length of the whole timeline.
    pub fn total(&self) -> f64 {
        let extra = self.count.saturating_sub(1) as f64 * self.stagger;
        self.delay + self.duration + extra
    }

    /// Seconds into the timeline at which target `index` starts.
    pub fn start_of(&self, index: usize) -> f64 {
        self.delay + index as f64 * self.stagger
    }

    /// Progress of target `index` when the playhead is at `head` seconds.
    pub fn local_progress(&self, index: usize, head: f64) -> f64 {
        let elapsed = head - self.start_of(index);
        if self.duration <= 0.0 {
            return if elapsed >= 0.0 && head > 0.0 { 1.0 } else { 0.0 };
        }
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Progress of target `index` when the whole timeline is scrubbed to `progress`.
    pub fn scrubbed_progress(&self, index: usize, progress: f64) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return progress;
        }
        self.local_progress(index, progress * total)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/stagger.rs"]
mod tests;
