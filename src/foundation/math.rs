/// Clamp `v` into `[lo, hi]`, mapping NaN to `lo`.
pub(crate) fn clamp_or_low(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

/// Round half away from zero to `places` decimal places.
pub(crate) fn round_places(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round() / scale
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
