/// Closed set of scenes the explainer can show, in narration order.
///
/// Every revision uses an ordered subset of these; a boundary table never lists a scene after one
/// that comes later in this order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    /// Overview of the two-stage architecture.
    Architecture,
    /// Source drawings the dataset is built from.
    RawMaterial,
    /// Footprint, zoning and furnishing stages revealed one by one.
    Framing,
    /// Rasterization and augmentation of the drawings.
    Dataset,
    /// Generator/discriminator layout of the GAN.
    GanArchitecture,
    /// Training footprint -> zoning.
    Step1,
    /// Training zoning -> furnishing.
    Step2,
    /// Structural-similarity comparison against ground truth.
    Evaluation,
    /// Held-out validation of step 1.
    ValidationStep1,
    /// Held-out validation of step 2.
    ValidationStep2,
    /// Closing footprint -> zoning -> furnishing summary.
    Summary,
}

impl SceneId {
    /// All scenes in narration order.
    pub const ALL: [SceneId; 11] = [
        Self::Architecture,
        Self::RawMaterial,
        Self::Framing,
        Self::Dataset,
        Self::GanArchitecture,
        Self::Step1,
        Self::Step2,
        Self::Evaluation,
        Self::ValidationStep1,
        Self::ValidationStep2,
        Self::Summary,
    ];

    /// Position in [`SceneId::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Human-readable title shown next to the scene counter.
    pub fn title(self) -> &'static str {
        match self {
            Self::Architecture => "Architecture",
            Self::RawMaterial => "Raw Material",
            Self::Framing => "Framing",
            Self::Dataset => "Dataset",
            Self::GanArchitecture => "GAN Architecture",
            Self::Step1 => "Step 1",
            Self::Step2 => "Step 2",
            Self::Evaluation => "Evaluation",
            Self::ValidationStep1 => "Validation Step 1",
            Self::ValidationStep2 => "Validation Step 2",
            Self::Summary => "Summary",
        }
    }

    /// `true` for the two GAN training scenes.
    pub fn is_training(self) -> bool {
        matches!(self, Self::Step1 | Self::Step2)
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
