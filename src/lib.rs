#![forbid(unsafe_code)]
#![deny(missing_docs)]
//! Scroll-synchronized reveal animations.
//!
//! Views declare [`Reveal`]s and mount them with a [`RevealScope`]. A [`TriggerRegistry`] holds
//! the live registrations and a [`ScrollDriver`] turns scroll/resize events into registry ticks
//! that write interpolated [`StyleFrame`]s to host [`RenderTarget`]s.

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod draw;
pub(crate) mod driver;
pub(crate) mod foundation;
pub(crate) mod host;
pub(crate) mod lifecycle;
pub mod presets;
pub(crate) mod registry;
pub(crate) mod scene;
pub(crate) mod timeline;
pub(crate) mod viewport;

pub use animation::{
    apply::{apply, apply_to},
    ease::Ease,
    property::{Property, PropertySpec, PropertyTween, StyleFrame},
};
pub use config::{RevealSpec, Scrub};
pub use draw::{
    controller::{DrawState, PathDraw},
    metrics::PathMetrics,
    rope::{
        DEFAULT_ROPE_SEGMENTS, DEFAULT_ROPE_WAVINESS, RopeCorners, circular_rope, corner_rope,
    },
};
pub use driver::ScrollDriver;
pub use foundation::{
    core::{BezPath, OwnerTag, Point, Rect, Size, Vec2, Viewport},
    error::{RevealError, RevealResult},
};
pub use host::{
    memory::MemoryElement,
    target::{ElementRef, RenderTarget},
};
pub use lifecycle::scope::{Reveal, RevealScope};
pub use registry::{
    registration::{Animation, Playback, Registration, Trigger, TriggerRef},
    store::{RevealId, TickReport, TriggerRegistry},
};
pub use scene::{
    model::{Scene, SceneElement, SceneHost, SceneReveal, ScrollKey},
    simulate::{FrameOutput, SimulateOptions, SimulationSummary, simulate},
};
pub use timeline::{
    player::Player,
    scrub::Scrubber,
    stagger::Timing,
    toggle::{ToggleAction, ToggleActions},
};
pub use viewport::{
    marker::{Anchor, Marker},
    progress::{Phase, ScrollWindow, WindowSample, compute_progress},
    tracker::{FrameRequest, ScrollTracker},
};
