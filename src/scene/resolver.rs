use crate::config::revision::{Revision, RevisionConfig};
use crate::foundation::error::ExplainerResult;
use crate::foundation::math::clamp_or_low;
use crate::scene::boundary::SceneBoundaryTable;
use crate::scene::formulas;
use crate::scene::frame::{SceneFrame, SceneParams};
use crate::scene::id::SceneId;

/// Stateless map from timeline position to [`SceneFrame`] for one revision.
///
/// The revision is validated once in [`SceneResolver::new`]; after that `resolve` is total over
/// all `f64` inputs and never fails.
#[derive(Clone, Debug)]
pub struct SceneResolver {
    config: RevisionConfig,
}

impl SceneResolver {
    /// Validate `config` and build a resolver over it.
    #[tracing::instrument(skip(config), fields(name = %config.name))]
    pub fn new(config: RevisionConfig) -> ExplainerResult<Self> {
        config.validate()?;
        tracing::debug!(
            scenes = config.boundaries.len(),
            t_max = config.t_max(),
            "scene resolver ready"
        );
        Ok(Self { config })
    }

    /// Resolver over a built-in revision.
    pub fn for_revision(revision: Revision) -> ExplainerResult<Self> {
        Self::new(revision.config()?)
    }

    /// Revision this resolver evaluates.
    pub fn config(&self) -> &RevisionConfig {
        &self.config
    }

    /// Boundary table of the revision.
    pub fn boundaries(&self) -> &SceneBoundaryTable {
        &self.config.boundaries
    }

    /// End of the timeline.
    pub fn t_max(&self) -> f64 {
        self.config.t_max()
    }

    /// Resolve the frame at `t`. Out-of-range and NaN inputs are clamped into `[0, t_max]`.
    pub fn resolve(&self, t: f64) -> SceneFrame {
        let table = &self.config.boundaries;
        let t = clamp_or_low(t, 0.0, table.t_max());
        let index = table.index_at(t);
        let entry = table.entries()[index];
        let local_t = t - entry.at;

        SceneFrame {
            t,
            scene: entry.scene,
            scene_index: index + 1,
            scene_count: table.len(),
            scene_start: entry.at,
            local_t,
            params: self.params_for(entry.scene, t, local_t),
        }
    }

    /// Scene active at `t`, without deriving parameters.
    pub fn scene_at(&self, t: f64) -> SceneId {
        let table = &self.config.boundaries;
        table.entry_at(clamp_or_low(t, 0.0, table.t_max())).scene
    }

    fn params_for(&self, scene: SceneId, t: f64, local_t: f64) -> SceneParams {
        match scene {
            SceneId::Framing => formulas::framing(&self.config.framing, t, local_t),
            SceneId::Dataset => formulas::dataset(&self.config.dataset, local_t),
            SceneId::Step1 | SceneId::Step2 => self
                .config
                .training_step(scene)
                .map_or(SceneParams::Static, |step| {
                    SceneParams::Training(formulas::training(step, t))
                }),
            SceneId::Evaluation => SceneParams::Evaluation {
                ssim: formulas::evaluation_score(self.config.evaluation, local_t),
            },
            SceneId::Architecture
            | SceneId::RawMaterial
            | SceneId::GanArchitecture
            | SceneId::ValidationStep1
            | SceneId::ValidationStep2
            | SceneId::Summary => SceneParams::Static,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/resolver.rs"]
mod tests;
