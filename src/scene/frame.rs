use std::collections::BTreeMap;

use crate::scene::id::SceneId;

/// Derived values for one training scene at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TrainingParams {
    /// `(t - start) / duration`, unclamped.
    pub raw_progress: f64,
    /// Raw progress clamped to `[floor, 1]`.
    pub progress: f64,
    /// Index into the step's epoch table.
    pub epoch_index: usize,
    /// Displayed epoch count (`epochs[epoch_index]`).
    pub epoch: u32,
    /// `1 - progress`, four decimal places.
    pub generator_loss: f64,
    /// `progress * 0.5`, four decimal places.
    pub discriminator_loss: f64,
}

/// Per-scene parameter set. The variant is fixed by the scene.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneParams {
    /// Scene identity alone selects the content.
    Static,
    /// Staged reveal of the footprint/zoning/furnishing panels.
    Framing {
        /// Number of stages currently shown.
        visible_count: u32,
        /// Number of stages in the scene.
        stage_count: u32,
    },
    /// Dataset preparation gates.
    Dataset {
        /// Show the pixelated raster rendition of the footprint.
        show_raster: bool,
        /// Show the grid of augmented copies.
        show_augment_extras: bool,
    },
    /// GAN training progress for `Step1` / `Step2`.
    Training(TrainingParams),
    /// Structural-similarity score shown in the evaluation ring.
    Evaluation {
        /// Score in `[0, 1]`.
        ssim: f64,
    },
}

/// Loosely typed view of a single derived parameter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean gate.
    Bool(bool),
    /// Discrete count or lookup value.
    Count(u32),
    /// Continuous value.
    Scalar(f64),
}

impl ParamValue {
    /// Boolean payload, if this is a gate.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Numeric payload widened to `f64`.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Count(v) => Some(f64::from(v)),
            Self::Scalar(v) => Some(v),
            Self::Bool(_) => None,
        }
    }
}

/// Everything presentation needs to draw the timeline at one instant.
///
/// Recomputed on every resolve; holds no identity beyond the instant it describes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    /// Timeline position the frame was resolved for (after clamping).
    pub t: f64,
    /// Active scene.
    pub scene: SceneId,
    /// 1-based position of `scene` in the revision's table.
    pub scene_index: usize,
    /// Number of scenes in the revision.
    pub scene_count: usize,
    /// Start of the active scene.
    pub scene_start: f64,
    /// Seconds since `scene_start`.
    pub local_t: f64,
    /// Scene-specific derived values.
    pub params: SceneParams,
}

impl SceneFrame {
    /// "Scene X / N" counter text.
    pub fn counter_label(&self) -> String {
        format!("Scene {} / {}", self.scene_index, self.scene_count)
    }

    /// Name-keyed view of [`SceneFrame::params`].
    pub fn params_map(&self) -> BTreeMap<&'static str, ParamValue> {
        let mut out = BTreeMap::new();
        match self.params {
            SceneParams::Static => {}
            SceneParams::Framing {
                visible_count,
                stage_count,
            } => {
                out.insert("visible_count", ParamValue::Count(visible_count));
                out.insert("stage_count", ParamValue::Count(stage_count));
            }
            SceneParams::Dataset {
                show_raster,
                show_augment_extras,
            } => {
                out.insert("show_raster", ParamValue::Bool(show_raster));
                out.insert("show_augment_extras", ParamValue::Bool(show_augment_extras));
            }
            SceneParams::Training(p) => {
                out.insert("progress", ParamValue::Scalar(p.progress));
                out.insert("epoch", ParamValue::Count(p.epoch));
                out.insert("generator_loss", ParamValue::Scalar(p.generator_loss));
                out.insert(
                    "discriminator_loss",
                    ParamValue::Scalar(p.discriminator_loss),
                );
            }
            SceneParams::Evaluation { ssim } => {
                out.insert("ssim", ParamValue::Scalar(ssim));
            }
        }
        out
    }

    /// Look up one derived parameter by name.
    pub fn param(&self, name: &str) -> Option<ParamValue> {
        self.params_map().get(name).copied()
    }

    /// Training parameters, when the active scene is a training step.
    pub fn training(&self) -> Option<TrainingParams> {
        match self.params {
            SceneParams::Training(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/frame.rs"]
mod tests;
