use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::core::{BezPath, Point};

const ARCLEN_ACCURACY: f64 = 1e-6;

/// Arc-length table for a path, measured once per geometry.
#[derive(Clone, Debug)]
pub struct PathMetrics {
    segs: Vec<PathSeg>,
    // Cumulative length at the end of each segment.
    ends: Vec<f64>,
}

impl PathMetrics {
    /// Measure every segment of `path`.
    pub fn new(path: &BezPath) -> Self {
        let segs: Vec<PathSeg> = path.segments().collect();
        let mut ends = Vec::with_capacity(segs.len());
        let mut acc = 0.0;
        for seg in &segs {
            acc += seg.arclen(ARCLEN_ACCURACY);
            ends.push(acc);
        }
        Self { segs, ends }
    }

    /// Parse SVG path data and measure it.
    pub fn from_svg(d: &str) -> Result<Self, kurbo::SvgParseError> {
        Ok(Self::new(&BezPath::from_svg(d)?))
    }

    /// Total stroke length.
    pub fn total_length(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    /// Point reached after travelling `len` along the path, clamped to the path ends.
    pub fn point_at_length(&self, len: f64) -> Option<Point> {
        let total = self.total_length();
        let first = self.segs.first()?;
        if len.is_nan() || len <= 0.0 {
            return Some(first.eval(0.0));
        }
        let len = len.min(total);
        let idx = self.ends.partition_point(|&e| e < len).min(self.segs.len() - 1);
        let seg_start = if idx == 0 { 0.0 } else { self.ends[idx - 1] };
        let seg = &self.segs[idx];
        let t = seg.inv_arclen(len - seg_start, ARCLEN_ACCURACY);
        Some(seg.eval(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/metrics.rs"]
mod tests;
