use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::rc::Rc;

use anyhow::Context as _;

use crate::config::RevealSpec;
use crate::draw::rope::{DEFAULT_ROPE_SEGMENTS, DEFAULT_ROPE_WAVINESS, RopeCorners, corner_rope};
use crate::foundation::core::{BezPath, Rect, Size, Viewport};
use crate::foundation::error::{RevealError, RevealResult};
use crate::host::memory::MemoryElement;
use crate::host::target::ElementRef;
use crate::lifecycle::scope::Reveal;
use crate::registry::registration::TriggerRef;

/// Page layout plus scripted scrolling, loaded from JSON.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Scene {
    /// Visible area; only `width` and `height` are read.
    pub viewport: Viewport,
    /// Full scrollable height of the page.
    pub document_height: f64,
    /// Host elements, referenced by id.
    pub elements: Vec<SceneElement>,
    /// Reveals mounted together as one view.
    pub reveals: Vec<SceneReveal>,
    /// Scroll script, sorted by time.
    pub scroll: Vec<ScrollKey>,
}

/// One laid-out host element.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SceneElement {
    /// Unique, non-empty id.
    pub id: String,
    /// `[x, y, width, height]` in document coordinates.
    pub rect: [f64; 4],
    /// SVG path data for path elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Generated rope spanning the element box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rope: Option<RopeCorners>,
    /// Rope meander multiplier.
    #[serde(default = "default_waviness")]
    pub waviness: f64,
    /// Rope meander segments.
    #[serde(default = "default_segments")]
    pub segments: usize,
}

fn default_waviness() -> f64 {
    DEFAULT_ROPE_WAVINESS
}

fn default_segments() -> usize {
    DEFAULT_ROPE_SEGMENTS
}

/// A reveal bound to scene elements by id.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SceneReveal {
    /// Element ids, in stagger order.
    pub targets: Vec<String>,
    /// `"root"`, an element id, or absent for the first target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    /// What to animate and how.
    pub spec: RevealSpec,
}

/// Scroll position `y` at time `t` seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrollKey {
    /// Seconds from the start of the script.
    pub t: f64,
    /// Document scroll offset in pixels.
    pub y: f64,
}

/// Host elements and reveals instantiated from a [`Scene`].
#[derive(Debug)]
pub struct SceneHost {
    /// Elements by id.
    pub elements: BTreeMap<String, Rc<MemoryElement>>,
    /// Reveals ready to mount.
    pub reveals: Vec<Reveal>,
}

impl Scene {
    /// Read and validate a scene file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> RevealResult<Self> {
        let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse and validate a scene.
    pub fn from_reader(r: impl Read) -> RevealResult<Self> {
        let scene: Self = serde_json::from_reader(r)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Check ids, geometry, references and the scroll script.
    pub fn validate(&self) -> RevealResult<()> {
        self.viewport()?;

        let mut ids = BTreeSet::new();
        for el in &self.elements {
            if el.id.trim().is_empty() {
                return Err(RevealError::validation("element id must be non-empty"));
            }
            if !ids.insert(el.id.as_str()) {
                return Err(RevealError::validation(format!(
                    "element id '{}' is used more than once",
                    el.id
                )));
            }
            let [_, _, w, h] = el.rect;
            if el.rect.iter().any(|v| !v.is_finite()) || w < 0.0 || h < 0.0 {
                return Err(RevealError::validation(format!(
                    "element '{}' has an invalid rect",
                    el.id
                )));
            }
            if el.path.is_some() && el.rope.is_some() {
                return Err(RevealError::validation(format!(
                    "element '{}' sets both `path` and `rope`",
                    el.id
                )));
            }
            el.geometry()?;
        }

        for (i, reveal) in self.reveals.iter().enumerate() {
            if reveal.targets.is_empty() {
                return Err(RevealError::validation(format!("reveal #{i} has no targets")));
            }
            let trigger = reveal.trigger.iter().filter(|id| id.as_str() != "root");
            for id in reveal.targets.iter().chain(trigger) {
                if !ids.contains(id.as_str()) {
                    return Err(RevealError::validation(format!(
                        "reveal #{i} references missing element '{id}'"
                    )));
                }
            }
            reveal.spec.validate()?;
        }

        if self.scroll.is_empty() {
            return Err(RevealError::validation("scroll needs at least one keyframe"));
        }
        for pair in self.scroll.windows(2) {
            if !(pair[1].t >= pair[0].t) {
                return Err(RevealError::validation(
                    "scroll keyframes must be sorted by time",
                ));
            }
        }
        if self
            .scroll
            .iter()
            .any(|k| !(k.t.is_finite() && k.y.is_finite() && k.t >= 0.0))
        {
            return Err(RevealError::validation(
                "scroll keyframes need finite t >= 0 and finite y",
            ));
        }
        Ok(())
    }

    /// Validated viewport at the top of the document.
    pub fn viewport(&self) -> RevealResult<Viewport> {
        Viewport::new(
            self.viewport.width,
            self.viewport.height,
            self.document_height,
        )
    }

    /// Time of the last scroll keyframe.
    pub fn end_time(&self) -> f64 {
        self.scroll.last().map_or(0.0, |k| k.t)
    }

    /// Scroll position at `t`, linearly interpolated and held past the ends.
    pub fn scroll_at(&self, t: f64) -> f64 {
        let (Some(first), Some(last)) = (self.scroll.first(), self.scroll.last()) else {
            return 0.0;
        };
        if t <= first.t {
            return first.y;
        }
        if t >= last.t {
            return last.y;
        }
        let i = self.scroll.partition_point(|k| k.t <= t);
        let (a, b) = (self.scroll[i - 1], self.scroll[i]);
        let span = b.t - a.t;
        if span <= 0.0 {
            return b.y;
        }
        a.y + (b.y - a.y) * (t - a.t) / span
    }

    /// Build in-memory elements and the reveals that animate them.
    pub fn instantiate(&self) -> RevealResult<SceneHost> {
        let mut elements = BTreeMap::new();
        let mut refs: BTreeMap<&str, ElementRef> = BTreeMap::new();
        for el in &self.elements {
            let [x, y, w, h] = el.rect;
            let rect = Rect::new(x, y, x + w, y + h);
            let mem = match el.geometry()? {
                Some(path) => MemoryElement::with_path(el.id.clone(), rect, &path),
                None => MemoryElement::new(el.id.clone(), rect),
            };
            let (typed, dyn_ref) = mem.into_ref();
            refs.insert(el.id.as_str(), dyn_ref);
            elements.insert(el.id.clone(), typed);
        }

        let lookup = |id: &str| {
            refs.get(id)
                .cloned()
                .ok_or_else(|| RevealError::validation(format!("missing element '{id}'")))
        };
        let mut reveals = Vec::with_capacity(self.reveals.len());
        for r in &self.reveals {
            let targets = r
                .targets
                .iter()
                .map(|id| lookup(id))
                .collect::<RevealResult<Vec<_>>>()?;
            let trigger = match r.trigger.as_deref() {
                None => TriggerRef::Target,
                Some("root") => TriggerRef::Root,
                Some(id) => TriggerRef::Element(lookup(id)?),
            };
            reveals.push(Reveal::new(targets, r.spec.clone()).with_trigger(trigger));
        }
        Ok(SceneHost { elements, reveals })
    }
}

impl SceneElement {
    fn geometry(&self) -> RevealResult<Option<BezPath>> {
        if let Some(d) = &self.path {
            let path = BezPath::from_svg(d).map_err(|e| {
                RevealError::config(format!("element '{}' has bad path data: {e}", self.id))
            })?;
            return Ok(Some(path));
        }
        match self.rope {
            Some(corners) => corner_rope(
                corners,
                Size::new(self.rect[2], self.rect[3]),
                self.waviness,
                self.segments,
            )
            .map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
