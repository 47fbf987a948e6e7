use std::collections::BTreeMap;

use crate::animation::property::StyleFrame;
use crate::driver::ScrollDriver;
use crate::foundation::error::{RevealError, RevealResult};
use crate::lifecycle::scope::RevealScope;
use crate::registry::store::{TickReport, TriggerRegistry};
use crate::scene::model::Scene;

/// Frame rate, settle time and motion preference for [`simulate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulateOptions {
    /// Animation frames per second.
    pub fps: f64,
    /// Seconds simulated after the last scroll keyframe.
    pub settle: f64,
    /// Simulate a host that prefers reduced motion.
    pub reduced_motion: bool,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        Self {
            fps: 60.0,
            settle: 2.0,
            reduced_motion: false,
        }
    }
}

/// One ticked frame.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    /// Frame index, counted from 0 at `t = 0`.
    pub frame: u64,
    /// Frame time in seconds.
    pub t: f64,
    /// Clamped scroll position used for the tick.
    pub scroll_y: f64,
    /// Registry counters for the tick.
    pub report: TickReport,
    /// Merged style of every element written during this frame.
    pub styles: BTreeMap<String, StyleFrame>,
}

/// Totals after a run.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    /// Frames stepped, ticked or not.
    pub frames: u64,
    /// Frames that ran a registry tick.
    pub ticks: u64,
    /// `apply_style` calls across all ticks.
    pub writes: usize,
    /// Registrations removed on teardown.
    pub torn_down: usize,
    /// Final merged style per element.
    pub styles: BTreeMap<String, StyleFrame>,
}

/// Replay the scene's scroll script frame by frame, reporting every ticked frame to `sink`.
#[tracing::instrument(skip(scene, sink))]
pub fn simulate(
    scene: &Scene,
    opts: SimulateOptions,
    mut sink: impl FnMut(&FrameOutput) -> RevealResult<()>,
) -> RevealResult<SimulationSummary> {
    if !(opts.fps.is_finite() && opts.fps > 0.0) {
        return Err(RevealError::validation("fps must be finite and > 0"));
    }
    if !(opts.settle.is_finite() && opts.settle >= 0.0) {
        return Err(RevealError::validation("settle must be finite and >= 0"));
    }

    let host = scene.instantiate()?;
    let registry = TriggerRegistry::new();
    let scope = RevealScope::mount(&registry, (), host.reveals)?;
    let mut driver = ScrollDriver::new(scene.viewport()?, registry);
    driver.set_reduced_motion(opts.reduced_motion);

    let last = ((scene.end_time() + opts.settle) * opts.fps).ceil() as u64;
    let mut ticks = 0;
    let mut writes = 0;
    let mut seen: BTreeMap<&str, usize> = host
        .elements
        .iter()
        .map(|(id, el)| (id.as_str(), el.write_count()))
        .collect();

    for frame in 0..=last {
        let t = frame as f64 / opts.fps;
        driver.tracker_mut().on_scroll(scene.scroll_at(t));
        let scroll_y = driver.viewport().scroll_y;
        let Some(report) = driver.frame(t) else {
            continue;
        };
        ticks += 1;
        writes += report.writes;

        let mut styles = BTreeMap::new();
        for (id, el) in &host.elements {
            let count = el.write_count();
            if seen.insert(id.as_str(), count) != Some(count) {
                styles.insert(id.clone(), el.style());
            }
        }
        sink(&FrameOutput {
            frame,
            t,
            scroll_y,
            report,
            styles,
        })?;
    }

    let torn_down = scope.teardown();
    tracing::debug!(ticks, writes, torn_down, "simulation finished");
    Ok(SimulationSummary {
        frames: last + 1,
        ticks,
        writes,
        torn_down,
        styles: host
            .elements
            .iter()
            .map(|(id, el)| (id.clone(), el.style()))
            .collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/simulate.rs"]
mod tests;
