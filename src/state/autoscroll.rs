//! Auto-Scroll Coordinator - periodic advance with a post-interaction hold.
//!
//! Drives the periodic forward advance and the suppression window a manual
//! interaction opens. Timer ownership rules:
//!
//! - at most one live tick timer per instance, zero when disabled or suppressed
//! - an interval at or below the animation window disables the feature silently
//! - configuration changes tear the owned timers down and rebuild them

use std::time::{Duration, Instant};

use spark_signals::{Signal, signal};

use crate::timer::{TimerId, TimerKind, TimerQueue};
use crate::types::ANIMATION_TIME;

// =============================================================================
// Coordinator
// =============================================================================

/// Periodic forward-advance timing and the suppression window.
///
/// The suppression flag lives in a signal so hosts can reflect the paused
/// state (for example by dimming a progress indicator).
pub struct AutoScroll {
    interval: Option<Duration>,
    click_delay: Option<Duration>,
    suppressed: Signal<bool>,
    tick: Option<TimerId>,
    clear: Option<TimerId>,
}

impl AutoScroll {
    /// Create a coordinator with the given interval and post-click delay.
    ///
    /// Nothing is scheduled until [`start`](Self::start).
    pub fn new(interval: Option<Duration>, click_delay: Option<Duration>) -> Self {
        Self {
            interval,
            click_delay,
            suppressed: signal(false),
            tick: None,
            clear: None,
        }
    }

    /// Whether auto-scroll can run at all.
    ///
    /// Requires an interval strictly longer than the animation window; an
    /// interval at or below it would fire mid-transition and compound with
    /// the guard's own timing.
    pub fn enabled(&self) -> bool {
        matches!(self.interval, Some(interval) if interval > ANIMATION_TIME)
    }

    /// True while a manual interaction holds auto-scroll off.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed.get()
    }

    /// Suppression-flag signal clone for host render effects.
    pub fn suppressed_signal(&self) -> Signal<bool> {
        self.suppressed.clone()
    }

    /// Schedule the next periodic tick one interval after `from`.
    ///
    /// No-op when disabled, suppressed, or already scheduled, so at most
    /// one tick timer ever exists.
    pub fn start(&mut self, from: Instant, timers: &mut TimerQueue) {
        let Some(interval) = self.interval else {
            return;
        };
        if interval <= ANIMATION_TIME || self.suppressed.get() || self.tick.is_some() {
            return;
        }
        self.tick = Some(timers.schedule(from + interval, TimerKind::AutoTick));
    }

    /// Open the suppression window after a manual interaction.
    ///
    /// Cancels the pending tick and re-arms the clear timer. With no
    /// configured click delay the window never closes on its own.
    pub fn suppress(&mut self, now: Instant, timers: &mut TimerQueue) {
        self.suppressed.set(true);
        if let Some(id) = self.tick.take() {
            timers.cancel(id);
        }
        if let Some(id) = self.clear.take() {
            timers.cancel(id);
        }
        if let Some(delay) = self.click_delay {
            self.clear = Some(timers.schedule(now + delay, TimerKind::SuppressionClear));
        }
    }

    /// The clear timer fired: close the window and restart the periodic
    /// advance one full interval after `closed_at`.
    ///
    /// Ids that do not match the pending clear are ignored.
    pub fn on_clear(&mut self, id: TimerId, closed_at: Instant, timers: &mut TimerQueue) {
        if self.clear != Some(id) {
            return;
        }
        self.clear = None;
        self.suppressed.set(false);
        self.start(closed_at, timers);
    }

    /// The periodic tick fired.
    ///
    /// Returns true when the engine should attempt a forward advance. The
    /// next tick is anchored on this one's deadline, so a late host tick
    /// does not drift the period.
    pub fn on_tick(&mut self, id: TimerId, fired_at: Instant, timers: &mut TimerQueue) -> bool {
        if self.tick != Some(id) {
            return false;
        }
        self.tick = None;
        self.start(fired_at, timers);
        true
    }

    /// Apply a new interval and click delay.
    ///
    /// Tears down the owned timers and rebuilds them under the new
    /// configuration; no duplicate timers survive the switch. An open
    /// suppression window stays open and its clear is re-armed against the
    /// new delay (or left unarmed when the delay is removed).
    pub fn reconfigure(
        &mut self,
        interval: Option<Duration>,
        click_delay: Option<Duration>,
        now: Instant,
        timers: &mut TimerQueue,
    ) {
        if let Some(id) = self.tick.take() {
            timers.cancel(id);
        }
        if let Some(id) = self.clear.take() {
            timers.cancel(id);
        }
        self.interval = interval;
        self.click_delay = click_delay;

        if self.suppressed.get() {
            if let Some(delay) = self.click_delay {
                self.clear = Some(timers.schedule(now + delay, TimerKind::SuppressionClear));
            }
        } else {
            self.start(now, timers);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
