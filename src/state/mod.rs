//! State Module - transition arbitration state
//!
//! The two arbiters between navigation requests and the displayed index:
//!
//! - **Guard** - one-slot admission mutex with its timed release
//! - **AutoScroll** - periodic advance plus the post-interaction hold

mod autoscroll;
mod guard;

pub use autoscroll::AutoScroll;
pub use guard::TransitionGuard;
