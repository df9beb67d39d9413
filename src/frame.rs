//! Animation frame scheduling
//!
//! A [`FrameLoop`] exists only while the session is Running: it is acquired
//! when a run starts and released, revoking the pending frame, as soon as the
//! run ends or the host shuts down. Frames never keep firing into a frozen
//! session.

use thiserror::Error;

/// Handle to a requested, not yet fired, animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i32);

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame scheduling unavailable: {0}")]
    Unavailable(String),
}

/// Something that can call back once per display refresh
pub trait FrameScheduler {
    /// Ask for one callback on the next frame
    fn request_frame(&mut self) -> Result<FrameToken, FrameError>;
    /// Revoke a requested frame so it never fires
    fn cancel_frame(&mut self, token: FrameToken);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) -> Result<FrameToken, FrameError> {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        (**self).cancel_frame(token)
    }
}

/// The per-run frame loop: at most one frame pending at a time
#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<FrameToken>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Ensure a frame is pending
    pub fn acquire<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> Result<(), FrameError> {
        if self.pending.is_none() {
            self.pending = Some(scheduler.request_frame()?);
        }
        Ok(())
    }

    /// Revoke the pending frame, if any
    pub fn release<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel_frame(token);
            log::debug!("Frame {:?} cancelled", token);
        }
    }

    /// Consume the pending frame when it fires.
    ///
    /// Returns `false` for a frame that was not pending (already revoked).
    pub fn fired(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

/// Scheduler driven by hand: headless runs and tests
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    queued: Vec<FrameToken>,
    /// Every token ever requested
    pub requested: Vec<FrameToken>,
    /// Every token revoked before firing
    pub cancelled: Vec<FrameToken>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames waiting to fire
    pub fn queued(&self) -> &[FrameToken] {
        &self.queued
    }

    /// Simulate a display refresh: pop the oldest queued frame
    pub fn next_frame(&mut self) -> Option<FrameToken> {
        if self.queued.is_empty() {
            None
        } else {
            Some(self.queued.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameToken, FrameError> {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.queued.push(token);
        self.requested.push(token);
        Ok(token)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.queued.retain(|t| *t != token);
        self.cancelled.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_is_idempotent() {
        let mut scheduler = ManualScheduler::new();
        let mut frames = FrameLoop::new();
        frames.acquire(&mut scheduler).unwrap();
        frames.acquire(&mut scheduler).unwrap();
        assert_eq!(scheduler.requested.len(), 1);
        assert_eq!(scheduler.queued(), &[FrameToken(1)]);
        assert!(frames.is_active());
    }

    #[test]
    fn test_release_revokes_pending_frame() {
        let mut scheduler = ManualScheduler::new();
        let mut frames = FrameLoop::new();
        frames.acquire(&mut scheduler).unwrap();
        frames.release(&mut scheduler);
        assert!(!frames.is_active());
        assert!(scheduler.queued().is_empty());
        assert_eq!(scheduler.cancelled, vec![FrameToken(1)]);
        assert_eq!(scheduler.next_frame(), None);

        // Releasing again is a no-op
        frames.release(&mut scheduler);
        assert_eq!(scheduler.cancelled.len(), 1);
    }

    #[test]
    fn test_fired_consumes_pending() {
        let mut scheduler = ManualScheduler::new();
        let mut frames = FrameLoop::new();
        frames.acquire(&mut scheduler).unwrap();
        assert_eq!(scheduler.next_frame(), Some(FrameToken(1)));
        assert!(frames.fired());
        assert!(!frames.fired(), "stale frame must be rejected");
        frames.acquire(&mut scheduler).unwrap();
        assert_eq!(frames.pending(), Some(FrameToken(2)));
    }
}
