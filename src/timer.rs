//! Scoped timers - owned, cancellable deferrals driven by the host loop.
//!
//! The engine schedules three kinds of deferral: the transition release,
//! the auto-scroll tick, and the suppression clear. Each is an entry in a
//! per-engine queue rather than a free-running OS timer: cancelling removes
//! the entry, teardown drops the queue, and firing happens when the host
//! calls `CarouselEngine::tick` with the deadline in the past.
//!
//! The engine never reads the wall clock. Hosts pass `Instant::now()` into
//! every entry point, which keeps all timing behavior deterministic under
//! test.

use std::time::Instant;

// =============================================================================
// Types
// =============================================================================

/// Identifies a scheduled deferral. Ids are never reused within a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

/// What a deferral does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Return the transition guard to idle after the animation window.
    Release,
    /// Periodic forward advance for auto-scroll.
    AutoTick,
    /// End the post-interaction auto-scroll suppression window.
    SuppressionClear,
}

/// A fired deferral, handed to the dispatcher.
///
/// Carries its own deadline so periodic reschedules anchor on the deadline
/// rather than on however late the host called `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub kind: TimerKind,
    pub deadline: Instant,
}

#[derive(Debug)]
struct Entry {
    id: TimerId,
    deadline: Instant,
    kind: TimerKind,
}

// =============================================================================
// Queue
// =============================================================================

/// One-shot deadline queue owned by a single engine instance.
///
/// Holds at most a handful of entries, so a plain vector beats a heap.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<Entry>,
    next_id: u64,
}

impl TimerQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a deferral to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, kind: TimerKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, deadline, kind });
        id
    }

    /// Remove a pending entry.
    ///
    /// Returns `false` when the entry already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Take the earliest entry whose deadline is at or before `now`.
    ///
    /// Deadline ties fire in scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= now)
            .min_by_key(|(_, entry)| (entry.deadline, entry.id.0))
            .map(|(position, _)| position)?;
        let entry = self.entries.remove(position);
        Some(Fired {
            id: entry.id,
            kind: entry.kind,
            deadline: entry.deadline,
        })
    }

    /// The earliest pending deadline, for hosts that sleep between ticks.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Whether `id` is still pending.
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn base() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_schedule_and_pop_due() {
        let t0 = base();
        let mut queue = TimerQueue::new();
        let id = queue.schedule(t0 + Duration::from_millis(100), TimerKind::Release);

        // Not due yet
        assert!(queue.pop_due(t0 + Duration::from_millis(99)).is_none());
        assert!(queue.is_scheduled(id));

        // Due exactly at the deadline
        let fired = queue.pop_due(t0 + Duration::from_millis(100)).unwrap();
        assert_eq!(fired.id, id);
        assert_eq!(fired.kind, TimerKind::Release);
        assert_eq!(fired.deadline, t0 + Duration::from_millis(100));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pop_due_earliest_first() {
        let t0 = base();
        let mut queue = TimerQueue::new();
        let late = queue.schedule(t0 + Duration::from_millis(300), TimerKind::AutoTick);
        let early = queue.schedule(t0 + Duration::from_millis(100), TimerKind::Release);

        let now = t0 + Duration::from_millis(400);
        assert_eq!(queue.pop_due(now).unwrap().id, early);
        assert_eq!(queue.pop_due(now).unwrap().id, late);
        assert!(queue.pop_due(now).is_none());
    }

    #[test]
    fn test_pop_due_ties_in_schedule_order() {
        let t0 = base();
        let deadline = t0 + Duration::from_millis(50);
        let mut queue = TimerQueue::new();
        let first = queue.schedule(deadline, TimerKind::Release);
        let second = queue.schedule(deadline, TimerKind::AutoTick);

        assert_eq!(queue.pop_due(deadline).unwrap().id, first);
        assert_eq!(queue.pop_due(deadline).unwrap().id, second);
    }

    #[test]
    fn test_cancel() {
        let t0 = base();
        let mut queue = TimerQueue::new();
        let id = queue.schedule(t0 + Duration::from_millis(100), TimerKind::SuppressionClear);

        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert!(queue.pop_due(t0 + Duration::from_millis(200)).is_none());
    }

    #[test]
    fn test_ids_not_reused() {
        let t0 = base();
        let mut queue = TimerQueue::new();
        let a = queue.schedule(t0, TimerKind::Release);
        queue.pop_due(t0);
        let b = queue.schedule(t0, TimerKind::Release);
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_deadline() {
        let t0 = base();
        let mut queue = TimerQueue::new();
        assert!(queue.next_deadline().is_none());

        queue.schedule(t0 + Duration::from_millis(300), TimerKind::AutoTick);
        queue.schedule(t0 + Duration::from_millis(100), TimerKind::Release);
        assert_eq!(queue.next_deadline(), Some(t0 + Duration::from_millis(100)));
        assert_eq!(queue.len(), 2);
    }
}
