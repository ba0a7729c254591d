//! Frame-driven polling loop
//!
//! While a sound plays, exactly one frame request is outstanding. The host
//! calls [`PlaybackSession::on_frame`](crate::PlaybackSession::on_frame) once
//! per display frame (or every [`FRAME_INTERVAL`] when it has no real frame
//! callback); the session consumes the request, samples the position and
//! requests the next frame only if the sound is still playing.

use crate::engine::SoundId;
use std::time::Duration;

/// Suggested tick for hosts without a per-frame callback (~60 Hz)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Handle of one requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Outstanding frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFrame {
    /// Request handle
    pub handle: FrameHandle,

    /// Primitive the frame polls
    pub sound: SoundId,
}

/// At-most-one outstanding frame request
#[derive(Debug, Default)]
pub struct FrameLoop {
    next_handle: u64,
    pending: Option<PendingFrame>,
}

impl FrameLoop {
    /// Create an idle loop
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a frame for `sound`, cancelling any outstanding request first
    pub fn schedule(&mut self, sound: SoundId) -> FrameHandle {
        self.cancel();
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.pending = Some(PendingFrame { handle, sound });
        handle
    }

    /// Cancel the outstanding request, returning its handle
    pub fn cancel(&mut self) -> Option<FrameHandle> {
        self.pending.take().map(|frame| frame.handle)
    }

    /// Whether a request is outstanding
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The outstanding request, if any
    pub fn pending(&self) -> Option<PendingFrame> {
        self.pending
    }

    /// Consume the outstanding request because its frame arrived
    pub fn take_due(&mut self) -> Option<PendingFrame> {
        self.pending.take()
    }
}
