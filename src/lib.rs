//! Timeline engine for the footprint -> zoning -> furnishing Pix2Pix explainer.
//!
//! A single scalar clock position drives the whole presentation. This crate owns the two pieces
//! of that presentation that carry logic:
//!
//! 1. **Resolve**: `RevisionConfig + t -> SceneFrame` (which scene is active, and the derived
//!    values it displays: reveal counts, training progress, epoch bucket, losses, SSIM).
//! 2. **Transport**: a [`Clock`] with play/pause/seek/step semantics, advanced by real elapsed
//!    time from an injectable [`FrameSource`] through a [`Player`].
//!
//! Drawing, styling and asset loading are left to the host; they consume [`SceneFrame`] and the
//! static tables in this crate and never feed anything back.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure resolution**: `resolve` is total, deterministic and keeps no state between calls.
//! - **Fail fast**: malformed boundary or epoch tables are rejected when a resolver or clock is
//!   built, never per call.
//! - **Revisions are data**: the 6-, 8- and 11-scene cuts share one code path and differ only in
//!   their [`RevisionConfig`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod playback;
mod presentation;
mod scene;

pub use config::revision::{
    DatasetConfig, EvaluationScore, FramingConfig, Revision, RevisionConfig, TimeBase,
    TrainingStepConfig,
};
pub use foundation::core::{LocalSpan, TimeWindow};
pub use foundation::error::{ExplainerError, ExplainerResult};
pub use playback::clock::{Advance, Clock, ClockConfig, STEP_BACK_EPSILON, TransportState};
pub use playback::frame_source::{FrameRequest, FrameSource, ManualFrameSource};
pub use playback::player::Player;
pub use presentation::layout::{
    DisplayHint, SLIDER_STEP, framing_connector_width, snap_to_slider, time_readout,
};
pub use presentation::legend::{
    COLOR_LEGEND, ColorLegendEntry, STAGES, StageDescriptor, StageId, visible_stages,
};
pub use scene::boundary::{Boundary, SceneBoundaryTable};
pub use scene::formulas::{LOSS_DECIMALS, evaluation_score, training};
pub use scene::frame::{ParamValue, SceneFrame, SceneParams, TrainingParams};
pub use scene::id::SceneId;
pub use scene::resolver::SceneResolver;
