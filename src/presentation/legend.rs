/// One swatch of the floor-plan color legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ColorLegendEntry {
    /// Element name.
    pub label: &'static str,
    /// Utility class used by the web presentation layer.
    pub css_class: &'static str,
    /// Pixel color the generator is trained to paint, `#RRGGBB`.
    pub hex: &'static str,
}

impl ColorLegendEntry {
    /// Parse [`ColorLegendEntry::hex`] into RGB bytes.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        let digits = self.hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        Some([channel(0)?, channel(2)?, channel(4)?])
    }
}

/// Pipeline stages of a classroom floor plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    /// Empty room outline with walls, doors and openings.
    Footprint,
    /// Functional zones painted into the footprint.
    Zoning,
    /// Furniture placed into the zones.
    Furnishing,
}

/// Static description of one pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StageDescriptor {
    /// Stage identity.
    pub id: StageId,
    /// Panel heading.
    pub label: &'static str,
    /// Dataset caption under the panel; empty when none.
    pub caption: &'static str,
}

/// Color legend, in display order.
pub const COLOR_LEGEND: [ColorLegendEntry; 8] = [
    ColorLegendEntry {
        label: "Wall",
        css_class: "bg-black",
        hex: "#000000",
    },
    ColorLegendEntry {
        label: "Door",
        css_class: "bg-red-600",
        hex: "#FF0000",
    },
    ColorLegendEntry {
        label: "Opening",
        css_class: "bg-cyan-400",
        hex: "#00FFFF",
    },
    ColorLegendEntry {
        label: "Footprint",
        css_class: "bg-gray-200",
        hex: "#DCDCDC",
    },
    ColorLegendEntry {
        label: "Student Desks",
        css_class: "bg-green-500",
        hex: "#00FF00",
    },
    ColorLegendEntry {
        label: "Teacher Desk",
        css_class: "bg-fuchsia-500",
        hex: "#FF00FF",
    },
    ColorLegendEntry {
        label: "Board",
        css_class: "bg-yellow-400",
        hex: "#FFFF00",
    },
    ColorLegendEntry {
        label: "Lockers",
        css_class: "bg-orange-500",
        hex: "#FFA500",
    },
];

/// Footprint -> zoning -> furnishing, in pipeline order.
pub const STAGES: [StageDescriptor; 3] = [
    StageDescriptor {
        id: StageId::Footprint,
        label: "(a) Footprint",
        caption: "dataset 1",
    },
    StageDescriptor {
        id: StageId::Zoning,
        label: "(b) Zoning",
        caption: "dataset 2",
    },
    StageDescriptor {
        id: StageId::Furnishing,
        label: "(c) Furnishing",
        caption: "",
    },
];

/// Stages revealed by a framing scene showing `visible_count` panels.
pub fn visible_stages(visible_count: u32) -> &'static [StageDescriptor] {
    let n = (visible_count as usize).min(STAGES.len());
    &STAGES[..n]
}

#[cfg(test)]
#[path = "../../tests/unit/presentation/legend.rs"]
mod tests;
