//! Cosmetic helpers for the host view. Nothing here feeds back into scene resolution.

/// Granularity of the scrub slider, in timeline seconds.
pub const SLIDER_STEP: f64 = 0.1;

/// Display-size hint supplied by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct DisplayHint {
    /// Narrow viewport: panels stack tighter.
    pub compact: bool,
}

/// Width in px of the connector drawn between revealed framing panels.
pub fn framing_connector_width(hint: DisplayHint) -> u32 {
    if hint.compact { 24 } else { 40 }
}

/// Elapsed / total labels under the slider, e.g. `("8s", "77.0s")`.
pub fn time_readout(t: f64, t_max: f64) -> (String, String) {
    let elapsed = if t.is_finite() { t.max(0.0).floor() } else { 0.0 };
    (format!("{elapsed}s"), format!("{t_max:.1}s"))
}

/// Snap a raw slider value onto [`SLIDER_STEP`] increments.
pub fn snap_to_slider(t: f64) -> f64 {
    (t / SLIDER_STEP).round() * SLIDER_STEP
}

#[cfg(test)]
#[path = "../../tests/unit/presentation/layout.rs"]
mod tests;
