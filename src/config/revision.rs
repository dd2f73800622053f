use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{LocalSpan, TimeWindow};
use crate::foundation::error::{ExplainerError, ExplainerResult};
use crate::scene::boundary::{Boundary, SceneBoundaryTable};
use crate::scene::id::SceneId;

/// The published configurations of the explainer timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Revision {
    /// First cut: 6 scenes over 60 s, real-time playback, animated SSIM.
    Initial,
    /// 8 scenes over 53 s, opens mid-timeline on step 1.
    Extended,
    /// Final cut: 11 scenes over 77 s at double speed, fixed SSIM.
    #[default]
    Canonical,
}

impl Revision {
    /// All built-in revisions, oldest first.
    pub const ALL: [Revision; 3] = [Self::Initial, Self::Extended, Self::Canonical];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Extended => "extended",
            Self::Canonical => "canonical",
        }
    }

    /// Build and validate the configuration for this revision.
    pub fn config(self) -> ExplainerResult<RevisionConfig> {
        let cfg = match self {
            Self::Initial => initial()?,
            Self::Extended => extended()?,
            Self::Canonical => canonical()?,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Clock a scene formula reads its thresholds against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBase {
    /// Timeline position `t`.
    #[default]
    Absolute,
    /// Seconds since the scene started.
    SceneLocal,
}

/// Staged reveal thresholds for the framing scene.
///
/// One stage is visible below the first threshold; each threshold reached reveals one more.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FramingConfig {
    /// Strictly increasing reveal times, read on `time_base`.
    pub reveal_at: Vec<f64>,
    /// Whether `reveal_at` is measured on the timeline or from the scene start.
    #[serde(default)]
    pub time_base: TimeBase,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            reveal_at: vec![3.0, 6.0],
            time_base: TimeBase::Absolute,
        }
    }
}

/// Gates for the dataset scene, in scene-local seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DatasetConfig {
    /// Augmented copies appear once local time is strictly past this.
    pub augment_after: f64,
    /// Optional span during which the rasterized footprint replaces the vector one.
    #[serde(default)]
    pub raster: Option<LocalSpan>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            augment_after: 10.0,
            raster: None,
        }
    }
}

/// Progress window and epoch lookup for one training step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrainingStepConfig {
    /// Span over which progress runs from the floor to 1.
    pub window: TimeWindow,
    /// Minimum displayed progress at window entry.
    #[serde(default = "default_progress_floor")]
    pub progress_floor: f64,
    /// Epoch counts shown as progress quantizes into `epochs.len()` buckets.
    pub epochs: Vec<u32>,
}

fn default_progress_floor() -> f64 {
    0.1
}

/// How the evaluation scene's SSIM score is produced.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EvaluationScore {
    /// Constant score for the whole scene.
    Fixed {
        /// Displayed score.
        score: f64,
    },
    /// `clamp(local / ramp_secs, 0, cap)`.
    Ramped {
        /// Seconds for the score to climb from 0 to 1 before capping.
        ramp_secs: f64,
        /// Upper bound of the score.
        cap: f64,
    },
}

impl Default for EvaluationScore {
    fn default() -> Self {
        Self::Fixed { score: 0.88 }
    }
}

/// Complete description of one timeline: boundaries, playback settings and per-scene formulas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevisionConfig {
    /// Display name.
    pub name: String,
    /// Scene partition of `[0, t_max]`.
    pub boundaries: SceneBoundaryTable,
    /// Timeline seconds per wall-clock second during playback.
    pub speed: f64,
    /// Clock position on construction.
    #[serde(default)]
    pub initial_t: f64,
    /// Framing reveal thresholds.
    #[serde(default)]
    pub framing: FramingConfig,
    /// Dataset gates.
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Footprint -> zoning training step.
    #[serde(default)]
    pub step1: Option<TrainingStepConfig>,
    /// Zoning -> furnishing training step.
    #[serde(default)]
    pub step2: Option<TrainingStepConfig>,
    /// SSIM score mode.
    #[serde(default)]
    pub evaluation: EvaluationScore,
}

impl RevisionConfig {
    /// Parse a revision config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> ExplainerResult<Self> {
        let cfg: RevisionConfig = serde_json::from_reader(r)
            .map_err(|e| ExplainerError::config(format!("parse revision JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a revision config from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> ExplainerResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ExplainerError::config(format!("open revision JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty-printed JSON readable by [`RevisionConfig::from_reader`].
    pub fn to_json_pretty(&self) -> ExplainerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExplainerError::serde(format!("serialize revision '{}': {e}", self.name)))
    }

    /// End of the timeline.
    pub fn t_max(&self) -> f64 {
        self.boundaries.t_max()
    }

    /// Training config for `scene`, if it is a training step.
    pub fn training_step(&self, scene: SceneId) -> Option<&TrainingStepConfig> {
        match scene {
            SceneId::Step1 => self.step1.as_ref(),
            SceneId::Step2 => self.step2.as_ref(),
            _ => None,
        }
    }

    /// Check every construction-time invariant the resolver and clock rely on.
    #[tracing::instrument(skip(self), fields(name = %self.name))]
    pub fn validate(&self) -> ExplainerResult<()> {
        let t_max = self.t_max();
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ExplainerError::validation(format!(
                "speed must be finite and > 0 (got {})",
                self.speed
            )));
        }
        if !(0.0..=t_max).contains(&self.initial_t) {
            return Err(ExplainerError::validation(format!(
                "initial_t {} is outside [0, {t_max}]",
                self.initial_t
            )));
        }

        let mut prev = 0.0;
        for &at in &self.framing.reveal_at {
            if !at.is_finite() || at <= prev {
                return Err(ExplainerError::validation(
                    "framing reveal_at must be finite, > 0 and strictly increasing",
                ));
            }
            prev = at;
        }

        if !self.dataset.augment_after.is_finite() || self.dataset.augment_after < 0.0 {
            return Err(ExplainerError::validation(
                "dataset augment_after must be finite and >= 0",
            ));
        }
        if let Some(span) = self.dataset.raster
            && !(span.after.is_finite() && span.before.is_finite() && span.after < span.before)
        {
            return Err(ExplainerError::validation(
                "dataset raster span must satisfy after < before",
            ));
        }

        for scene in [SceneId::Step1, SceneId::Step2] {
            let in_table = self.boundaries.position_of(scene).is_some();
            match (in_table, self.training_step(scene)) {
                (true, None) => {
                    return Err(ExplainerError::validation(format!(
                        "scene '{scene}' is in the boundary table but has no training config"
                    )));
                }
                (_, Some(step)) => validate_step(scene, step, t_max)?,
                (false, None) => {}
            }
        }

        match self.evaluation {
            EvaluationScore::Fixed { score } => {
                if !(0.0..=1.0).contains(&score) {
                    return Err(ExplainerError::validation(format!(
                        "fixed evaluation score {score} is outside [0, 1]"
                    )));
                }
            }
            EvaluationScore::Ramped { ramp_secs, cap } => {
                if !ramp_secs.is_finite() || ramp_secs <= 0.0 {
                    return Err(ExplainerError::validation(
                        "evaluation ramp_secs must be finite and > 0",
                    ));
                }
                if !(0.0..=1.0).contains(&cap) {
                    return Err(ExplainerError::validation(format!(
                        "evaluation cap {cap} is outside [0, 1]"
                    )));
                }
            }
        }

        Ok(())
    }
}

fn validate_step(scene: SceneId, step: &TrainingStepConfig, t_max: f64) -> ExplainerResult<()> {
    step.window.validate()?;
    if step.window.end() > t_max {
        return Err(ExplainerError::validation(format!(
            "'{scene}' training window ends at {} past t_max {t_max}",
            step.window.end()
        )));
    }
    if !(0.0..=1.0).contains(&step.progress_floor) {
        return Err(ExplainerError::validation(format!(
            "'{scene}' progress_floor {} is outside [0, 1]",
            step.progress_floor
        )));
    }
    if step.epochs.is_empty() {
        return Err(ExplainerError::validation(format!(
            "'{scene}' epoch table is empty"
        )));
    }
    if step.epochs.windows(2).any(|w| w[1] < w[0]) {
        return Err(ExplainerError::validation(format!(
            "'{scene}' epoch table must be non-decreasing"
        )));
    }
    Ok(())
}

fn table(entries: &[(f64, SceneId)], t_max: f64) -> ExplainerResult<SceneBoundaryTable> {
    SceneBoundaryTable::new(
        entries
            .iter()
            .map(|&(at, scene)| Boundary { at, scene })
            .collect(),
        t_max,
    )
}

fn step(start: f64, duration: f64, progress_floor: f64, epochs: &[u32]) -> TrainingStepConfig {
    TrainingStepConfig {
        window: TimeWindow { start, duration },
        progress_floor,
        epochs: epochs.to_vec(),
    }
}

const STEP1_EPOCHS: [u32; 4] = [10, 30, 70, 170];
const STEP2_EPOCHS: [u32; 5] = [10, 70, 140, 210, 300];

const RAMPED_SSIM: EvaluationScore = EvaluationScore::Ramped {
    ramp_secs: 8.0,
    cap: 0.92,
};

fn initial() -> ExplainerResult<RevisionConfig> {
    use SceneId::*;
    Ok(RevisionConfig {
        name: Revision::Initial.name().to_owned(),
        boundaries: table(
            &[
                (0.0, Framing),
                (8.0, Dataset),
                (18.0, Step1),
                (35.0, Step2),
                (50.0, Evaluation),
                (58.0, Summary),
            ],
            60.0,
        )?,
        speed: 1.0,
        initial_t: 0.0,
        framing: FramingConfig::default(),
        dataset: DatasetConfig {
            augment_after: 6.0,
            raster: Some(LocalSpan {
                after: 2.0,
                before: 6.0,
            }),
        },
        step1: Some(step(18.0, 15.0, 0.0, &STEP1_EPOCHS)),
        step2: Some(step(35.0, 15.0, 0.0, &STEP2_EPOCHS)),
        evaluation: RAMPED_SSIM,
    })
}

fn extended() -> ExplainerResult<RevisionConfig> {
    use SceneId::*;
    Ok(RevisionConfig {
        name: Revision::Extended.name().to_owned(),
        boundaries: table(
            &[
                (0.0, Architecture),
                (5.0, Framing),
                (11.0, Dataset),
                (19.0, Step1),
                (29.0, Step2),
                (39.0, Evaluation),
                (45.0, ValidationStep1),
                (49.0, Summary),
            ],
            53.0,
        )?,
        speed: 1.0,
        initial_t: 19.0,
        framing: FramingConfig::default(),
        dataset: DatasetConfig {
            augment_after: 6.0,
            raster: None,
        },
        step1: Some(step(19.0, 10.0, 0.1, &STEP1_EPOCHS)),
        step2: Some(step(29.0, 10.0, 0.1, &STEP2_EPOCHS)),
        evaluation: RAMPED_SSIM,
    })
}

fn canonical() -> ExplainerResult<RevisionConfig> {
    use SceneId::*;
    Ok(RevisionConfig {
        name: Revision::Canonical.name().to_owned(),
        boundaries: table(
            &[
                (0.0, Architecture),
                (8.0, RawMaterial),
                (16.0, Framing),
                (26.0, Dataset),
                (41.0, GanArchitecture),
                (49.5, Step1),
                (57.0, Step2),
                (64.5, Evaluation),
                (67.5, ValidationStep1),
                (70.5, ValidationStep2),
                (73.5, Summary),
            ],
            77.0,
        )?,
        speed: 2.0,
        initial_t: 0.0,
        framing: FramingConfig::default(),
        dataset: DatasetConfig::default(),
        step1: Some(step(49.5, 7.5, 0.1, &STEP1_EPOCHS)),
        step2: Some(step(57.0, 7.5, 0.1, &STEP2_EPOCHS)),
        evaluation: EvaluationScore::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/config/revision.rs"]
mod tests;
