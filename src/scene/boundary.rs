use crate::foundation::error::{ExplainerError, ExplainerResult};
use crate::scene::id::SceneId;

/// One scene start: the scene is active from `at` until the next entry's `at`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Boundary {
    /// Scene start in timeline seconds.
    pub at: f64,
    /// Scene that starts here.
    pub scene: SceneId,
}

/// Ordered partition of `[0, t_max]` into scenes.
///
/// Intervals are half-open `[at_i, at_{i+1})`; the last one is closed at `t_max`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "BoundaryTableDef", into = "BoundaryTableDef")]
pub struct SceneBoundaryTable {
    entries: Vec<Boundary>,
    t_max: f64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct BoundaryTableDef {
    entries: Vec<Boundary>,
    t_max: f64,
}

impl TryFrom<BoundaryTableDef> for SceneBoundaryTable {
    type Error = ExplainerError;

    fn try_from(def: BoundaryTableDef) -> ExplainerResult<Self> {
        Self::new(def.entries, def.t_max)
    }
}

impl From<SceneBoundaryTable> for BoundaryTableDef {
    fn from(table: SceneBoundaryTable) -> Self {
        Self {
            entries: table.entries,
            t_max: table.t_max,
        }
    }
}

impl SceneBoundaryTable {
    /// Build a validated table.
    ///
    /// Rejects empty tables, a first entry not at `0`, thresholds that are not strictly
    /// increasing, thresholds at or past `t_max`, and scenes listed out of narration order.
    pub fn new(entries: Vec<Boundary>, t_max: f64) -> ExplainerResult<Self> {
        if !t_max.is_finite() || t_max <= 0.0 {
            return Err(ExplainerError::validation(format!(
                "boundary table t_max must be finite and > 0 (got {t_max})"
            )));
        }
        let Some(first) = entries.first() else {
            return Err(ExplainerError::validation("boundary table is empty"));
        };
        if first.at != 0.0 {
            return Err(ExplainerError::validation(format!(
                "boundary table must start at 0 (first entry '{}' starts at {})",
                first.scene, first.at
            )));
        }
        for pair in entries.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if !b.at.is_finite() || b.at <= a.at {
                return Err(ExplainerError::validation(format!(
                    "boundary thresholds must be strictly increasing ('{}' at {} follows '{}' at {})",
                    b.scene, b.at, a.scene, a.at
                )));
            }
            if b.scene <= a.scene {
                return Err(ExplainerError::validation(format!(
                    "scene '{}' is listed after '{}' but precedes it in narration order",
                    b.scene, a.scene
                )));
            }
        }
        if let Some(last) = entries.last()
            && last.at >= t_max
        {
            return Err(ExplainerError::validation(format!(
                "last boundary '{}' at {} leaves no time before t_max {t_max}",
                last.scene, last.at
            )));
        }
        Ok(Self { entries, t_max })
    }

    /// Ordered entries.
    pub fn entries(&self) -> &[Boundary] {
        &self.entries
    }

    /// End of the timeline.
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    /// Number of scenes in this table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed table; pairs with [`SceneBoundaryTable::len`] for
    /// clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scene start times, in order.
    pub fn stops(&self) -> Vec<f64> {
        self.entries.iter().map(|b| b.at).collect()
    }

    /// Index of the entry active at `t`: the greatest threshold `<= t`, or `0` below the first.
    pub fn index_at(&self, t: f64) -> usize {
        self.entries.partition_point(|b| b.at <= t).saturating_sub(1)
    }

    /// Entry active at `t`.
    pub fn entry_at(&self, t: f64) -> Boundary {
        self.entries[self.index_at(t)]
    }

    /// Scene start time of `scene`, if this table contains it.
    pub fn start_of(&self, scene: SceneId) -> Option<f64> {
        self.position_of(scene).map(|i| self.entries[i].at)
    }

    /// Position of `scene` in this table.
    pub fn position_of(&self, scene: SceneId) -> Option<usize> {
        self.entries.iter().position(|b| b.scene == scene)
    }

    /// Exclusive end of the entry at `index` (`t_max` for the last one).
    pub fn end_of_index(&self, index: usize) -> f64 {
        self.entries
            .get(index + 1)
            .map(|b| b.at)
            .unwrap_or(self.t_max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/boundary.rs"]
mod tests;
