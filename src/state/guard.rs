//! Transition Guard - at most one transition in flight.
//!
//! A navigation request either takes the guard or is dropped; there is no
//! queueing and no error. The guard holds for exactly
//! [`ANIMATION_TIME`](crate::types::ANIMATION_TIME) and returns to idle on
//! a timer, never early.
//!
//! State machine: Idle -> Transitioning on an admitted request,
//! Transitioning -> Idle on the timed release, nothing else.

use std::time::Instant;

use spark_signals::{Signal, signal};

use crate::timer::{TimerId, TimerKind, TimerQueue};
use crate::types::{ANIMATION_TIME, Direction, ShiftTag};

// =============================================================================
// Guard
// =============================================================================

/// One-slot admission guard with a timed release.
///
/// Busy flag and styling tag live in signals so host render effects pick
/// up admissions and releases automatically.
pub struct TransitionGuard {
    busy: Signal<bool>,
    tag: Signal<ShiftTag>,
    release: Option<TimerId>,
}

impl TransitionGuard {
    /// Create an idle guard.
    pub fn new() -> Self {
        Self {
            busy: signal(false),
            tag: signal(ShiftTag::None),
            release: None,
        }
    }

    /// True while a transition animation is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Current direction tag for neighbor-slot styling.
    pub fn tag(&self) -> ShiftTag {
        self.tag.get()
    }

    /// Busy-flag signal clone for host render effects.
    pub fn busy_signal(&self) -> Signal<bool> {
        self.busy.clone()
    }

    /// Styling-tag signal clone for host render effects.
    pub fn tag_signal(&self) -> Signal<ShiftTag> {
        self.tag.clone()
    }

    /// Try to take the guard for a transition in `direction`.
    ///
    /// While busy the request is dropped with no state change. On admission
    /// the busy flag is set, the styling tag updated, and the release
    /// scheduled at `now + ANIMATION_TIME`; the caller commits the index
    /// change. A left shift tags the neighbor slots, a right shift resets
    /// the tag to the base styling.
    pub fn admit(&mut self, direction: Direction, now: Instant, timers: &mut TimerQueue) -> bool {
        if self.busy.get() {
            return false;
        }
        self.busy.set(true);
        self.tag.set(match direction {
            Direction::Left => ShiftTag::Left,
            Direction::Right => ShiftTag::None,
        });
        self.release = Some(timers.schedule(now + ANIMATION_TIME, TimerKind::Release));
        true
    }

    /// The timed release fired: return to idle.
    ///
    /// The styling tag stays as the admission left it. Ids that do not
    /// match the pending release are ignored.
    pub fn on_release(&mut self, id: TimerId) {
        if self.release == Some(id) {
            self.release = None;
            self.busy.set(false);
        }
    }
}

impl Default for TransitionGuard {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn setup() -> (TransitionGuard, TimerQueue, Instant) {
        (TransitionGuard::new(), TimerQueue::new(), Instant::now())
    }

    #[test]
    fn test_admission_sets_busy() {
        let (mut guard, mut timers, t0) = setup();

        assert!(!guard.is_busy());
        assert!(guard.admit(Direction::Right, t0, &mut timers));
        assert!(guard.is_busy());
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn test_second_request_rejected() {
        let (mut guard, mut timers, t0) = setup();

        assert!(guard.admit(Direction::Right, t0, &mut timers));
        assert!(!guard.admit(Direction::Left, t0, &mut timers));
        assert!(!guard.admit(Direction::Right, t0, &mut timers));
        // The rejected requests scheduled nothing and changed no state
        assert_eq!(timers.len(), 1);
        assert_eq!(guard.tag(), ShiftTag::None);
    }

    #[test]
    fn test_release_after_animation_time() {
        let (mut guard, mut timers, t0) = setup();

        guard.admit(Direction::Left, t0, &mut timers);
        let fired = timers.pop_due(t0 + ANIMATION_TIME).unwrap();
        assert_eq!(fired.kind, TimerKind::Release);
        assert_eq!(fired.deadline, t0 + ANIMATION_TIME);

        guard.on_release(fired.id);
        assert!(!guard.is_busy());

        // Guard is reusable after release
        assert!(guard.admit(Direction::Right, t0 + ANIMATION_TIME, &mut timers));
    }

    #[test]
    fn test_not_due_before_animation_time() {
        let (mut guard, mut timers, t0) = setup();

        guard.admit(Direction::Right, t0, &mut timers);
        assert!(timers.pop_due(t0 + ANIMATION_TIME - Duration::from_millis(1)).is_none());
        assert!(guard.is_busy());
    }

    #[test]
    fn test_left_tag_persists_until_right_shift() {
        let (mut guard, mut timers, t0) = setup();

        guard.admit(Direction::Left, t0, &mut timers);
        assert_eq!(guard.tag(), ShiftTag::Left);

        // Release does not touch the tag
        let fired = timers.pop_due(t0 + ANIMATION_TIME).unwrap();
        guard.on_release(fired.id);
        assert_eq!(guard.tag(), ShiftTag::Left);

        // The next right shift resets it
        guard.admit(Direction::Right, t0 + ANIMATION_TIME, &mut timers);
        assert_eq!(guard.tag(), ShiftTag::None);
    }

    #[test]
    fn test_stale_release_ignored() {
        let (mut guard, mut timers, t0) = setup();

        guard.admit(Direction::Right, t0, &mut timers);
        let first = timers.pop_due(t0 + ANIMATION_TIME).unwrap();
        guard.on_release(first.id);

        guard.admit(Direction::Right, t0 + ANIMATION_TIME, &mut timers);
        // Replaying the old release id must not end the new hold
        guard.on_release(first.id);
        assert!(guard.is_busy());
    }
}
