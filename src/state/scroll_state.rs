//! Scroll state shared between the flight-card column and the timeline.
//!
//! Also owns the deferred now-marker alignment: when the "now" pixel moves,
//! an alignment shot is armed with a short settle delay so the scroll
//! container is measured after the layout pass has committed. Re-arming
//! cancels a pending shot; dropping the state cancels it outright.

use std::time::{Duration, Instant};

use crate::domain::auto_scroll::target_scroll_x;

/// Delay between arming an alignment and applying it.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// State related to board scrolling.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Offset of the timeline scroll area as of the last frame
    last_offset: egui::Vec2,
    /// Pending auto-scroll target (horizontal), if armed
    pending_target_x: Option<f32>,
    /// When the pending target becomes due
    due_at: Option<Instant>,
    /// The now-marker position the last alignment was computed for
    aligned_now_px: Option<f32>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Shared offset =====

    /// Records the timeline scroll offset observed this frame.
    pub fn note_offset(&mut self, offset: egui::Vec2) {
        self.last_offset = offset;
    }

    /// Offset observed last frame; the card column mirrors its y component.
    pub fn offset(&self) -> egui::Vec2 {
        self.last_offset
    }

    // ===== Deferred now-marker alignment =====

    /// Arms an alignment shot when the now-marker has moved since the last
    /// alignment (or none happened yet). A pending shot is re-armed, which
    /// restarts the settle delay.
    pub fn align_to_now(&mut self, now_px: f32, viewport_width: f32) {
        if self.aligned_now_px == Some(now_px) {
            return;
        }
        self.aligned_now_px = Some(now_px);
        self.pending_target_x = Some(target_scroll_x(now_px, viewport_width));
        self.due_at = Some(Instant::now() + SETTLE_DELAY);
    }

    /// Takes the alignment target once its settle delay has elapsed.
    pub fn take_due_target(&mut self) -> Option<f32> {
        let due_at = self.due_at?;
        if Instant::now() < due_at {
            return None;
        }
        self.due_at = None;
        self.pending_target_x.take()
    }

    /// True while an alignment shot is waiting for its settle delay.
    pub fn has_pending(&self) -> bool {
        self.pending_target_x.is_some()
    }

    /// Cancels any pending alignment and forgets the marker position, so the
    /// next [`Self::align_to_now`] arms again (used when a new snapshot loads).
    pub fn reset(&mut self) {
        self.pending_target_x = None;
        self.due_at = None;
        self.aligned_now_px = None;
        self.last_offset = egui::Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_alignment_waits_for_settle_delay() {
        let mut scroll = ScrollState::new();
        scroll.align_to_now(2000.0, 1000.0);
        assert!(scroll.has_pending());
        assert!(scroll.take_due_target().is_none());

        thread::sleep(SETTLE_DELAY + Duration::from_millis(20));
        assert_eq!(scroll.take_due_target(), Some(1600.0));
        assert!(!scroll.has_pending());
    }

    #[test]
    fn test_unchanged_now_does_not_rearm() {
        let mut scroll = ScrollState::new();
        scroll.align_to_now(2000.0, 1000.0);
        thread::sleep(SETTLE_DELAY + Duration::from_millis(20));
        assert!(scroll.take_due_target().is_some());

        // Same marker position: nothing new to do.
        scroll.align_to_now(2000.0, 1000.0);
        assert!(!scroll.has_pending());
    }

    #[test]
    fn test_rearm_replaces_pending_target() {
        let mut scroll = ScrollState::new();
        scroll.align_to_now(2000.0, 1000.0);
        scroll.align_to_now(2008.0, 1000.0);

        thread::sleep(SETTLE_DELAY + Duration::from_millis(20));
        assert_eq!(scroll.take_due_target(), Some(1608.0));
    }

    #[test]
    fn test_reset_cancels_pending() {
        let mut scroll = ScrollState::new();
        scroll.align_to_now(2000.0, 1000.0);
        scroll.reset();
        thread::sleep(SETTLE_DELAY + Duration::from_millis(20));
        assert!(scroll.take_due_target().is_none());
    }

    #[test]
    fn test_target_clamps_at_zero() {
        let mut scroll = ScrollState::new();
        scroll.align_to_now(10.0, 1000.0);
        thread::sleep(SETTLE_DELAY + Duration::from_millis(20));
        assert_eq!(scroll.take_due_target(), Some(0.0));
    }
}
