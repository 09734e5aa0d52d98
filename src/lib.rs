//! # spark-carousel
//!
//! Reactive carousel rotation engine for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! The engine owns the stateful core of an interactive carousel: circular
//! neighbor math over the item ring, a one-slot transition guard that keeps
//! overlapping navigation requests from corrupting the display, auto-scroll
//! with a post-interaction hold, and the control surface hosts drive.
//! Drawing belongs to the host: read [`RenderSnapshot`] inside an effect
//! and paint.
//!
//! ## Architecture
//!
//! ```text
//! host input (arrows / swipes / dot jumps)      host event loop
//!                  |                                  |
//!                  v                                  v
//!           CarouselEngine ---- admit? ----> TransitionGuard
//!                  |                                  |
//!           Item Sequencer                   TimerQueue <---- AutoScroll
//!                  |
//!                  v
//!           signals --> RenderSnapshot --> host render effect
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use std::time::{Duration, Instant};
//! use spark_carousel::{CarouselEngine, CarouselProps, Swipe};
//! use spark_signals::effect;
//!
//! let mut engine = CarouselEngine::new(
//!     CarouselProps {
//!         items: vec!["one", "two", "three"],
//!         auto_scroll_interval: Some(Duration::from_millis(3000)),
//!         auto_scroll_click_delay: Some(Duration::from_millis(5000)),
//!         ..Default::default()
//!     },
//!     Instant::now(),
//! );
//!
//! // Declarative side: repaint whenever engine state changes
//! let showing = engine.showing_signal();
//! let _stop = effect(move || {
//!     let index = showing.get();
//!     // paint the carousel around `index`...
//! });
//!
//! // Imperative side: arrows, gestures, dot jumps
//! engine.shift_right(Instant::now());
//! engine.handle_swipe(Swipe::Right, Instant::now());
//!
//! // Host loop: fire due timers, sleep until the next deadline
//! loop {
//!     engine.tick(Instant::now());
//!     // poll input, sleep until engine.next_deadline()...
//! }
//! ```
//!
//! ## Modules
//!
//! - [`types`] - shared vocabulary (directions, roles, style flags, colors)
//! - [`sequencer`] - circular neighbor math and the working list
//! - [`timer`] - owned, cancellable deferrals driven by the host loop
//! - [`state`] - transition guard and auto-scroll coordination
//! - [`engine`] - the control surface and the render snapshot

pub mod engine;
pub mod sequencer;
pub mod state;
pub mod timer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use sequencer::{DUPLICATE_MAX, NeighborSet, clamp_index, derive_neighbors, working_list};

pub use timer::{Fired, TimerId, TimerKind, TimerQueue};

pub use state::{AutoScroll, TransitionGuard};

pub use engine::{
    CarouselEngine, CarouselProps, DotsView, RenderSnapshot, SlotView, slot_role, slot_style,
};
