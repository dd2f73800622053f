//! Playback clock: the single owner of the timeline position.
//!
//! # Invariants
//!
//! 1. `0 <= t <= t_max` after every operation.
//! 2. `playing` is cleared the moment `t` reaches `t_max`; playback never wraps.
//! 3. `advance` only moves time forward and only while playing.
//! 4. Stepping lands exactly on a scene start (or on `0` / `t_max`).

use crate::config::revision::RevisionConfig;
use crate::foundation::error::{ExplainerError, ExplainerResult};
use crate::foundation::math::clamp_or_low;

/// Slack subtracted from `t` before searching backwards, so a second `step_back` issued just
/// after landing on a scene start moves on to the previous one.
pub const STEP_BACK_EPSILON: f64 = 0.5;

/// Construction parameters for a [`Clock`].
#[derive(Clone, Debug, PartialEq)]
pub struct ClockConfig {
    /// End of the timeline.
    pub t_max: f64,
    /// Timeline seconds per wall-clock second.
    pub speed: f64,
    /// Starting position.
    pub initial_t: f64,
    /// Scene start times used as step targets, strictly increasing in `[0, t_max)`.
    pub stops: Vec<f64>,
}

impl From<&RevisionConfig> for ClockConfig {
    fn from(cfg: &RevisionConfig) -> Self {
        Self {
            t_max: cfg.t_max(),
            speed: cfg.speed,
            initial_t: cfg.initial_t,
            stops: cfg.boundaries.stops(),
        }
    }
}

/// Coarse transport state derived from `(t, playing)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportState {
    /// Stopped at the start of the timeline.
    Idle,
    /// Stopped anywhere else.
    Paused,
    /// Advancing with wall-clock time.
    Playing,
}

/// Result of one [`Clock::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Clock was not playing or the delta was rejected; nothing moved.
    Idle,
    /// Time moved and playback continues.
    Running,
    /// Time reached `t_max` on this call and playback stopped.
    Finished,
}

/// Timeline position plus play/pause flag.
#[derive(Clone, Debug)]
pub struct Clock {
    t: f64,
    playing: bool,
    t_max: f64,
    speed: f64,
    stops: Vec<f64>,
}

impl Clock {
    /// Build a paused clock at `cfg.initial_t`.
    pub fn new(cfg: ClockConfig) -> ExplainerResult<Self> {
        if !cfg.t_max.is_finite() || cfg.t_max <= 0.0 {
            return Err(ExplainerError::validation(format!(
                "clock t_max must be finite and > 0 (got {})",
                cfg.t_max
            )));
        }
        if !cfg.speed.is_finite() || cfg.speed <= 0.0 {
            return Err(ExplainerError::validation(format!(
                "clock speed must be finite and > 0 (got {})",
                cfg.speed
            )));
        }
        if !(0.0..=cfg.t_max).contains(&cfg.initial_t) {
            return Err(ExplainerError::validation(format!(
                "clock initial_t {} is outside [0, {}]",
                cfg.initial_t, cfg.t_max
            )));
        }
        if cfg.stops.iter().any(|s| !(0.0..cfg.t_max).contains(s))
            || cfg.stops.windows(2).any(|w| w[1] <= w[0])
        {
            return Err(ExplainerError::validation(
                "clock stops must be strictly increasing within [0, t_max)",
            ));
        }

        Ok(Self {
            t: cfg.initial_t,
            playing: false,
            t_max: cfg.t_max,
            speed: cfg.speed,
            stops: cfg.stops,
        })
    }

    /// Clock for a validated revision.
    pub fn from_revision(cfg: &RevisionConfig) -> ExplainerResult<Self> {
        Self::new(ClockConfig::from(cfg))
    }

    /// Current position.
    pub fn t(&self) -> f64 {
        self.t
    }

    /// End of the timeline.
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    /// Playback speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether `advance` currently moves time.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// `true` once the position sits at `t_max`.
    pub fn is_at_end(&self) -> bool {
        self.t >= self.t_max
    }

    /// Coarse transport state.
    pub fn state(&self) -> TransportState {
        if self.playing {
            TransportState::Playing
        } else if self.t == 0.0 {
            TransportState::Idle
        } else {
            TransportState::Paused
        }
    }

    /// Start playback. From the end of the timeline this restarts at `0`.
    pub fn play(&mut self) {
        if self.is_at_end() {
            self.t = 0.0;
        }
        self.playing = true;
        tracing::debug!(t = self.t, "play");
    }

    /// Stop advancing; position is kept.
    pub fn pause(&mut self) {
        self.playing = false;
        tracing::debug!(t = self.t, "pause");
    }

    /// Pause when playing, otherwise [`Clock::play`].
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Hard stop at the start of the timeline.
    pub fn reset(&mut self) {
        self.t = 0.0;
        self.playing = false;
        tracing::debug!("reset");
    }

    /// Jump to `value`, clamped into `[0, t_max]`. Works while playing or paused.
    pub fn seek(&mut self, value: f64) {
        self.set_t(clamp_or_low(value, 0.0, self.t_max));
    }

    /// Jump to the first scene start strictly after `t`, or to `t_max` past the last one.
    pub fn step_forward(&mut self) {
        let next = self
            .stops
            .iter()
            .copied()
            .find(|&s| s > self.t)
            .unwrap_or(self.t_max);
        self.set_t(next);
    }

    /// Jump to the last scene start at or before `t - STEP_BACK_EPSILON`, or to `0`.
    pub fn step_back(&mut self) {
        let limit = self.t - STEP_BACK_EPSILON;
        let prev = self
            .stops
            .iter()
            .rev()
            .copied()
            .find(|&s| s <= limit)
            .unwrap_or(0.0);
        self.set_t(prev);
    }

    /// Move time forward by `delta_secs` of wall-clock time scaled by `speed`.
    ///
    /// Zero, negative and non-finite deltas leave the clock untouched.
    pub fn advance(&mut self, delta_secs: f64) -> Advance {
        if !self.playing {
            return Advance::Idle;
        }
        if !delta_secs.is_finite() {
            tracing::warn!(delta_secs, "ignoring non-finite playback delta");
            return Advance::Idle;
        }
        if delta_secs <= 0.0 {
            return Advance::Idle;
        }

        let next = self.t + delta_secs * self.speed;
        if next >= self.t_max {
            self.t = self.t_max;
            self.playing = false;
            tracing::debug!(t = self.t, "playback finished");
            Advance::Finished
        } else {
            self.t = next;
            Advance::Running
        }
    }

    fn set_t(&mut self, t: f64) {
        self.t = t;
        if self.playing && self.is_at_end() {
            self.playing = false;
            tracing::debug!(t = self.t, "reached end while playing");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
