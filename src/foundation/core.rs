use crate::foundation::error::{ExplainerError, ExplainerResult};

/// Half-open span of timeline seconds, `[start, start + duration)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeWindow {
    /// Window start in timeline seconds.
    pub start: f64,
    /// Window length in seconds (must be > 0).
    pub duration: f64,
}

impl TimeWindow {
    /// Build a validated window.
    pub fn new(start: f64, duration: f64) -> ExplainerResult<Self> {
        let w = Self { start, duration };
        w.validate()?;
        Ok(w)
    }

    pub(crate) fn validate(self) -> ExplainerResult<()> {
        if !self.start.is_finite() || self.start < 0.0 {
            return Err(ExplainerError::validation(
                "TimeWindow start must be finite and >= 0",
            ));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ExplainerError::validation(
                "TimeWindow duration must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Exclusive end of the window.
    pub fn end(self) -> f64 {
        self.start + self.duration
    }

    /// `true` when `t` lies in `[start, end)`.
    pub fn contains(self, t: f64) -> bool {
        self.start <= t && t < self.end()
    }

    /// Unclamped fraction of the window elapsed at `t`. Negative before the window, > 1 after.
    pub fn raw_progress(self, t: f64) -> f64 {
        (t - self.start) / self.duration
    }
}

/// Open interval `(after, before)` of scene-local seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LocalSpan {
    /// Exclusive lower bound.
    pub after: f64,
    /// Exclusive upper bound.
    pub before: f64,
}

impl LocalSpan {
    /// `true` when `after < local < before`.
    pub fn contains_open(self, local: f64) -> bool {
        self.after < local && local < self.before
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
