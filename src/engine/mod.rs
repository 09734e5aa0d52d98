//! Carousel engine - the control surface.
//!
//! One object owns every piece of mutable carousel state and is consumed
//! two ways:
//!
//! - commands: [`shift_left`](CarouselEngine::shift_left),
//!   [`shift_right`](CarouselEngine::shift_right),
//!   [`jump_to_index`](CarouselEngine::jump_to_index),
//!   [`handle_swipe`](CarouselEngine::handle_swipe)
//! - queries: [`snapshot`](CarouselEngine::snapshot) plus the individual
//!   signal accessors
//!
//! Arrow buttons, the dot indicator, and the gesture recognizer all route
//! through the same three commands; timers route through
//! [`tick`](CarouselEngine::tick). The engine never reads the wall clock -
//! hosts pass `Instant::now()` into every entry point.

mod snapshot;

use std::time::{Duration, Instant};

use spark_signals::{Signal, signal};

use crate::sequencer::{self, NeighborSet};
use crate::state::{AutoScroll, TransitionGuard};
use crate::timer::{TimerKind, TimerQueue};
use crate::types::{CarouselStyle, Dimension, Direction, JumpPolicy, Rgba, ShiftTag, Swipe};

pub use snapshot::{DotsView, RenderSnapshot, SlotView, slot_role, slot_style};

// =============================================================================
// Props
// =============================================================================

/// Recognized configuration surface.
///
/// Display flags pass through to [`RenderSnapshot`] untouched; the timing
/// options feed the auto-scroll coordinator.
///
/// # Example
///
/// ```ignore
/// use std::time::{Duration, Instant};
/// use spark_carousel::{CarouselEngine, CarouselProps, CarouselStyle};
///
/// let engine = CarouselEngine::new(
///     CarouselProps {
///         items: vec!["spring", "summer", "autumn"],
///         carousel_style: CarouselStyle::ThreeD,
///         auto_scroll_interval: Some(Duration::from_millis(4000)),
///         auto_scroll_click_delay: Some(Duration::from_millis(8000)),
///         ..Default::default()
///     },
///     Instant::now(),
/// );
/// ```
pub struct CarouselProps<T: Clone + PartialEq + 'static> {
    // =========================================================================
    // Content
    // =========================================================================
    /// The items to cycle. Lists of five or fewer are doubled internally
    /// so neighbor roles resolve to distinct slots.
    pub items: Vec<T>,

    // =========================================================================
    // Display
    // =========================================================================
    /// Draw the arrow buttons.
    pub arrows: bool,

    /// Draw the dot indicator.
    pub dots_navigation: bool,

    /// Place the dot indicator inside the carousel area instead of below it.
    pub dots_navigation_inside: bool,

    /// Dot outline color override.
    pub dot_navigation_outline_color: Option<Rgba>,

    /// Dot fill color override.
    pub dot_navigation_fill_color: Option<Rgba>,

    /// Carousel width, passed through to the host renderer.
    pub width: Dimension,

    /// Carousel height, passed through to the host renderer.
    pub height: Dimension,

    /// Flat or 3d slot presentation.
    pub carousel_style: CarouselStyle,

    /// Dim slots outside the showing position (default: true).
    pub out_of_focus_darken: bool,

    // =========================================================================
    // Timing
    // =========================================================================
    /// Period of the automatic forward advance. Values at or below
    /// [`ANIMATION_TIME`](crate::types::ANIMATION_TIME) leave auto-scroll
    /// disabled.
    pub auto_scroll_interval: Option<Duration>,

    /// How long a manual interaction holds auto-scroll off. With `None`,
    /// the first manual interaction stops auto-scroll for good.
    pub auto_scroll_click_delay: Option<Duration>,

    // =========================================================================
    // Behavior
    // =========================================================================
    /// What to do with an out-of-range jump target.
    pub jump_policy: JumpPolicy,
}

impl<T: Clone + PartialEq + 'static> Default for CarouselProps<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            arrows: true,
            dots_navigation: true,
            dots_navigation_inside: false,
            dot_navigation_outline_color: None,
            dot_navigation_fill_color: None,
            width: Dimension::Auto,
            height: Dimension::Auto,
            carousel_style: CarouselStyle::Flat,
            out_of_focus_darken: true,
            auto_scroll_interval: None,
            auto_scroll_click_delay: None,
            jump_policy: JumpPolicy::Reject,
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

/// The rotation engine.
///
/// Owns the working item list, the showing index, the transition guard,
/// the auto-scroll coordinator, and the timers that bind them together.
/// Dropping the engine drops its timer queue, so no deferral outlives the
/// instance.
pub struct CarouselEngine<T: Clone + PartialEq + 'static> {
    items: Signal<Vec<T>>,
    /// Working-list length, cached so navigation does not clone the items.
    working_len: usize,
    /// The caller's pre-duplication item count, for the dot indicator.
    source_count: usize,
    showing: Signal<usize>,
    guard: TransitionGuard,
    auto: AutoScroll,
    timers: TimerQueue,

    arrows: bool,
    dots_navigation: bool,
    dots_navigation_inside: bool,
    dot_outline: Rgba,
    dot_fill: Rgba,
    width: Dimension,
    height: Dimension,
    carousel_style: CarouselStyle,
    out_of_focus_darken: bool,
    jump_policy: JumpPolicy,
}

impl<T: Clone + PartialEq + 'static> CarouselEngine<T> {
    /// Create an engine showing the first item, with auto-scroll armed if
    /// the props enable it.
    pub fn new(props: CarouselProps<T>, now: Instant) -> Self {
        let working = sequencer::working_list(&props.items);
        let working_len = working.len();
        let mut timers = TimerQueue::new();
        let mut auto = AutoScroll::new(props.auto_scroll_interval, props.auto_scroll_click_delay);
        auto.start(now, &mut timers);

        Self {
            items: signal(working),
            working_len,
            source_count: props.items.len(),
            showing: signal(0),
            guard: TransitionGuard::new(),
            auto,
            timers,
            arrows: props.arrows,
            dots_navigation: props.dots_navigation,
            dots_navigation_inside: props.dots_navigation_inside,
            dot_outline: props.dot_navigation_outline_color.unwrap_or(Rgba::DOT_DEFAULT),
            dot_fill: props.dot_navigation_fill_color.unwrap_or(Rgba::DOT_DEFAULT),
            width: props.width,
            height: props.height,
            carousel_style: props.carousel_style,
            out_of_focus_darken: props.out_of_focus_darken,
            jump_policy: props.jump_policy,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Index of the item in the showing slot.
    pub fn showing_index(&self) -> usize {
        self.showing.get()
    }

    /// Number of slots in the working list.
    pub fn len(&self) -> usize {
        self.working_len
    }

    /// Whether the working list is empty.
    pub fn is_empty(&self) -> bool {
        self.working_len == 0
    }

    /// The caller's pre-duplication item count.
    pub fn source_count(&self) -> usize {
        self.source_count
    }

    /// The four neighbor slots around the showing index, or `None` when
    /// fewer than two slots exist.
    pub fn neighbors(&self) -> Option<NeighborSet> {
        (self.working_len >= 2)
            .then(|| sequencer::derive_neighbors(self.showing.get(), self.working_len))
    }

    /// True while a transition animation is in flight.
    pub fn is_busy(&self) -> bool {
        self.guard.is_busy()
    }

    /// Current neighbor-slot styling tag.
    pub fn shift_tag(&self) -> ShiftTag {
        self.guard.tag()
    }

    /// True while a manual interaction holds auto-scroll off.
    pub fn is_auto_suppressed(&self) -> bool {
        self.auto.is_suppressed()
    }

    /// Earliest pending deferral, for hosts that sleep between ticks.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Showing-index signal clone for host render effects.
    pub fn showing_signal(&self) -> Signal<usize> {
        self.showing.clone()
    }

    /// Working-list signal clone for host render effects.
    pub fn items_signal(&self) -> Signal<Vec<T>> {
        self.items.clone()
    }

    /// Busy-flag signal clone for host render effects.
    pub fn busy_signal(&self) -> Signal<bool> {
        self.guard.busy_signal()
    }

    /// Styling-tag signal clone for host render effects.
    pub fn tag_signal(&self) -> Signal<ShiftTag> {
        self.guard.tag_signal()
    }

    /// Suppression-flag signal clone for host render effects.
    pub fn suppressed_signal(&self) -> Signal<bool> {
        self.auto.suppressed_signal()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Shift one slot left. Fire-and-forget; dropped while a transition is
    /// in flight.
    pub fn shift_left(&mut self, now: Instant) {
        self.manual(Direction::Left, now);
    }

    /// Shift one slot right. Fire-and-forget; dropped while a transition
    /// is in flight.
    pub fn shift_right(&mut self, now: Instant) {
        self.manual(Direction::Right, now);
    }

    /// Route a swipe gesture into navigation: content dragged right
    /// reveals the previous item, content dragged left the next.
    ///
    /// Returns `true` when the gesture was consumed as navigation, in
    /// which case the host must inhibit its default scroll handling.
    pub fn handle_swipe(&mut self, swipe: Swipe, now: Instant) -> bool {
        self.manual(swipe.navigation_direction(), now);
        true
    }

    /// Jump straight to `index` in the working list.
    ///
    /// Dropped while a transition is in flight. A target equal to the
    /// current prev or next neighbor animates as a normal left or right
    /// shift; any other target commits immediately with no styling tag and
    /// no guard hold. Out-of-range targets follow the configured
    /// [`JumpPolicy`]. Every committed branch opens the auto-scroll
    /// suppression window.
    pub fn jump_to_index(&mut self, index: usize, now: Instant) {
        if self.guard.is_busy() || self.working_len == 0 {
            return;
        }
        let target = if index < self.working_len {
            index
        } else {
            match self.jump_policy {
                JumpPolicy::Reject => return,
                JumpPolicy::Clamp => sequencer::clamp_index(index, self.working_len),
            }
        };

        let committed = match self.neighbors() {
            Some(neighbors) if target == neighbors.prev => self.transition(Direction::Left, now),
            Some(neighbors) if target == neighbors.next => self.transition(Direction::Right, now),
            _ => {
                self.showing.set(target);
                true
            }
        };
        if committed {
            self.auto.suppress(now, &mut self.timers);
        }
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Swap in a new item collection.
    ///
    /// Rebuilds the working list (short lists are doubled) and pins the
    /// showing index back into range.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.source_count = items.len();
        let working = sequencer::working_list(&items);
        self.working_len = working.len();
        // Clamp before publishing the new list so no observer sees an
        // index past the shorter list's end.
        self.showing
            .set(sequencer::clamp_index(self.showing.get(), self.working_len));
        self.items.set(working);
    }

    /// Reconfigure the auto-scroll interval and post-click delay.
    ///
    /// The coordinator tears its timers down and rebuilds them; no
    /// duplicate timers survive the switch.
    pub fn set_auto_scroll(
        &mut self,
        interval: Option<Duration>,
        click_delay: Option<Duration>,
        now: Instant,
    ) {
        self.auto
            .reconfigure(interval, click_delay, now, &mut self.timers);
    }

    // =========================================================================
    // Host loop
    // =========================================================================

    /// Fire every deferral due at `now`, in deadline order.
    ///
    /// Call this from the host's event loop;
    /// [`next_deadline`](CarouselEngine::next_deadline) bounds how long the
    /// loop may sleep.
    pub fn tick(&mut self, now: Instant) {
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.kind {
                TimerKind::Release => self.guard.on_release(fired.id),
                TimerKind::SuppressionClear => {
                    self.auto.on_clear(fired.id, fired.deadline, &mut self.timers);
                }
                TimerKind::AutoTick => {
                    if self.auto.on_tick(fired.id, fired.deadline, &mut self.timers) {
                        // Timer-driven advance: guarded like any other
                        // request, but it never opens the suppression window.
                        let _ = self.transition(Direction::Right, fired.deadline);
                    }
                }
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Manual navigation path: guarded transition plus, on admission, the
    /// auto-scroll suppression window.
    fn manual(&mut self, direction: Direction, now: Instant) {
        if self.transition(direction, now) {
            self.auto.suppress(now, &mut self.timers);
        }
    }

    /// Guarded transition: admit, commit the neighbor index, schedule the
    /// release. Rejections leave every piece of state untouched.
    fn transition(&mut self, direction: Direction, now: Instant) -> bool {
        let Some(neighbors) = self.neighbors() else {
            return false;
        };
        if !self.guard.admit(direction, now, &mut self.timers) {
            return false;
        }
        let target = match direction {
            Direction::Left => neighbors.prev,
            Direction::Right => neighbors.next,
        };
        self.showing.set(target);
        true
    }
}

// =============================================================================
// Tests
// =============================================================================
