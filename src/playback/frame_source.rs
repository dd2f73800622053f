/// Handle for one scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(
    /// Source-assigned id, unique per source.
    pub u64,
);

/// Display-refresh capability used to drive playback.
///
/// Contract: a request stays pending until the host delivers it (through
/// [`crate::Player::on_frame`]) or it is cancelled. Timestamps are seconds on a monotonic clock
/// shared by `now_secs` and delivered frames.
pub trait FrameSource {
    /// Current timestamp in seconds.
    fn now_secs(&self) -> f64;
    /// Schedule one frame callback.
    fn request_frame(&mut self) -> FrameRequest;
    /// Drop a previously scheduled callback. Unknown or already delivered handles are ignored.
    fn cancel_frame(&mut self, req: FrameRequest);
}

/// Deterministic frame source for tests and offline simulation.
///
/// Time only moves when [`ManualFrameSource::set_now`] or [`ManualFrameSource::advance_by`] is
/// called; pending and cancelled requests are recorded for inspection.
#[derive(Debug, Default)]
pub struct ManualFrameSource {
    now: f64,
    next_id: u64,
    pending: Vec<FrameRequest>,
    cancelled: Vec<FrameRequest>,
}

impl ManualFrameSource {
    /// Create a source at timestamp `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current timestamp.
    pub fn set_now(&mut self, now: f64) {
        self.now = now;
    }

    /// Move the current timestamp forward by `secs` and return the new value.
    pub fn advance_by(&mut self, secs: f64) -> f64 {
        self.now += secs;
        self.now
    }

    /// Requests scheduled and neither delivered nor cancelled.
    pub fn pending(&self) -> &[FrameRequest] {
        &self.pending
    }

    /// Requests cancelled so far, in cancellation order.
    pub fn cancelled(&self) -> &[FrameRequest] {
        &self.cancelled
    }

    /// Remove and return the oldest pending request, as a display loop would when it fires.
    pub fn take_next(&mut self) -> Option<FrameRequest> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameSource for ManualFrameSource {
    fn now_secs(&self) -> f64 {
        self.now
    }

    fn request_frame(&mut self) -> FrameRequest {
        let req = FrameRequest(self.next_id);
        self.next_id += 1;
        self.pending.push(req);
        req
    }

    fn cancel_frame(&mut self, req: FrameRequest) {
        if let Some(pos) = self.pending.iter().position(|&r| r == req) {
            self.pending.remove(pos);
            self.cancelled.push(req);
        }
    }
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn now_secs(&self) -> f64 {
        (**self).now_secs()
    }

    fn request_frame(&mut self) -> FrameRequest {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, req: FrameRequest) {
        (**self).cancel_frame(req)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/frame_source.rs"]
mod tests;
