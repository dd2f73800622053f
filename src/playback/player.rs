use crate::foundation::error::ExplainerResult;
use crate::playback::clock::{Advance, Clock};
use crate::playback::frame_source::{FrameRequest, FrameSource};
use crate::scene::frame::SceneFrame;
use crate::scene::resolver::SceneResolver;

/// Host-facing transport: one [`Clock`], one [`SceneResolver`] and the frame source driving them.
///
/// At most one frame request is pending at any time, and only while the clock is playing.
/// Pausing, reaching the end, or dropping the player cancels it.
pub struct Player<S: FrameSource> {
    clock: Clock,
    resolver: SceneResolver,
    source: S,
    pending: Option<FrameRequest>,
    last_stamp: Option<f64>,
}

impl<S: FrameSource> Player<S> {
    /// Build a paused player at the revision's initial position.
    pub fn new(resolver: SceneResolver, source: S) -> ExplainerResult<Self> {
        let clock = Clock::from_revision(resolver.config())?;
        Ok(Self {
            clock,
            resolver,
            source,
            pending: None,
            last_stamp: None,
        })
    }

    /// Underlying clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Resolver used by [`Player::frame`].
    pub fn resolver(&self) -> &SceneResolver {
        &self.resolver
    }

    /// Frame source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Frame source, mutably (e.g. to move a manual clock).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Frame request awaiting delivery, if any.
    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Resolve the current position.
    pub fn frame(&self) -> SceneFrame {
        self.resolver.resolve(self.clock.t())
    }

    /// Start playback; elapsed time is measured from this call. No-op while already playing.
    pub fn play(&mut self) {
        if self.clock.is_playing() {
            return;
        }
        self.clock.play();
        self.last_stamp = Some(self.source.now_secs());
        self.sync_schedule();
    }

    /// Stop playback and cancel the pending frame.
    pub fn pause(&mut self) {
        self.clock.pause();
        self.sync_schedule();
    }

    /// Pause when playing, otherwise [`Player::play`].
    pub fn toggle(&mut self) {
        if self.clock.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Hard stop at `0`.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.sync_schedule();
    }

    /// Scrub to `t` (clamped).
    pub fn seek(&mut self, t: f64) {
        self.clock.seek(t);
        self.sync_schedule();
    }

    /// Jump to the next scene start.
    pub fn step_forward(&mut self) {
        self.clock.step_forward();
        self.sync_schedule();
    }

    /// Jump to the previous scene start.
    pub fn step_back(&mut self) {
        self.clock.step_back();
        self.sync_schedule();
    }

    /// Deliver a frame callback fired at `timestamp` seconds.
    ///
    /// Requests other than the pending one are stale and ignored. The clock advances by the
    /// time elapsed since the previous frame (or since `play`); a timestamp earlier than the
    /// previous one advances nothing.
    pub fn on_frame(&mut self, req: FrameRequest, timestamp: f64) -> Advance {
        if self.pending != Some(req) {
            tracing::trace!(?req, "ignoring stale frame request");
            return Advance::Idle;
        }
        self.pending = None;

        let delta = self.last_stamp.map_or(0.0, |prev| timestamp - prev);
        if timestamp.is_finite() {
            self.last_stamp = Some(self.last_stamp.map_or(timestamp, |prev| prev.max(timestamp)));
        }

        let outcome = self.clock.advance(delta);
        self.sync_schedule();
        outcome
    }

    fn sync_schedule(&mut self) {
        if self.clock.is_playing() {
            if self.pending.is_none() {
                self.pending = Some(self.source.request_frame());
            }
        } else {
            if let Some(req) = self.pending.take() {
                self.source.cancel_frame(req);
            }
            self.last_stamp = None;
        }
    }
}

impl<S: FrameSource> Drop for Player<S> {
    fn drop(&mut self) {
        if let Some(req) = self.pending.take() {
            self.source.cancel_frame(req);
        }
    }
}

impl<S: FrameSource> std::fmt::Debug for Player<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("clock", &self.clock)
            .field("pending", &self.pending)
            .field("last_stamp", &self.last_stamp)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
