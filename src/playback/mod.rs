//! Transport state machine and frame scheduling.

pub(crate) mod clock;
pub(crate) mod frame_source;
pub(crate) mod player;
