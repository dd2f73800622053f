//! Per-scene derived values. Each function is a pure map from scene-local (or absolute) time
//! and the revision's constants to the numbers presentation displays.

use crate::config::revision::{
    DatasetConfig, EvaluationScore, FramingConfig, TimeBase, TrainingStepConfig,
};
use crate::foundation::math::{clamp_or_low, round_places};
use crate::scene::frame::{SceneParams, TrainingParams};

/// Decimal places kept on the displayed generator/discriminator losses.
pub const LOSS_DECIMALS: i32 = 4;

pub(crate) fn framing(cfg: &FramingConfig, t: f64, local: f64) -> SceneParams {
    let at_time = match cfg.time_base {
        TimeBase::Absolute => t,
        TimeBase::SceneLocal => local,
    };
    let revealed = cfg.reveal_at.iter().filter(|&&at| at_time >= at).count();
    SceneParams::Framing {
        visible_count: 1 + revealed as u32,
        stage_count: 1 + cfg.reveal_at.len() as u32,
    }
}

pub(crate) fn dataset(cfg: &DatasetConfig, local: f64) -> SceneParams {
    SceneParams::Dataset {
        show_raster: cfg.raster.is_some_and(|span| span.contains_open(local)),
        show_augment_extras: local > cfg.augment_after,
    }
}

/// Training progress at absolute time `t`.
///
/// `progress` never drops below the step's floor. The epoch bucket is quantized from the
/// unfloored progress.
pub fn training(cfg: &TrainingStepConfig, t: f64) -> TrainingParams {
    let raw_progress = cfg.window.raw_progress(t);
    let progress = clamp_or_low(raw_progress, cfg.progress_floor, 1.0);

    let buckets = cfg.epochs.len();
    let unit = clamp_or_low(raw_progress, 0.0, 1.0);
    let epoch_index = ((unit * buckets as f64).floor() as usize).min(buckets.saturating_sub(1));
    let epoch = cfg.epochs.get(epoch_index).copied().unwrap_or_default();

    TrainingParams {
        raw_progress,
        progress,
        epoch_index,
        epoch,
        generator_loss: round_places(1.0 - progress, LOSS_DECIMALS),
        discriminator_loss: round_places(progress * 0.5, LOSS_DECIMALS),
    }
}

/// SSIM score shown `local` seconds into the evaluation scene.
pub fn evaluation_score(mode: EvaluationScore, local: f64) -> f64 {
    match mode {
        EvaluationScore::Fixed { score } => score,
        EvaluationScore::Ramped { ramp_secs, cap } => clamp_or_low(local / ramp_secs, 0.0, cap),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/formulas.rs"]
mod tests;
