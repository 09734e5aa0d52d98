//! Core types for spark-carousel.
//!
//! The vocabulary the engine and the host share: directions, slot roles,
//! style flags, and the small value types carried by the configuration
//! surface. Everything here is plain data that flows through signals.

use std::time::Duration;

// =============================================================================
// Timing
// =============================================================================

/// Duration of one transition animation.
///
/// Part of the observable contract: the transition guard holds for exactly
/// this long, and an auto-scroll interval at or below it leaves auto-scroll
/// disabled.
pub const ANIMATION_TIME: Duration = Duration::from_millis(500);

// =============================================================================
// Directions
// =============================================================================

/// Navigation direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Retreat to the previous item.
    Left,
    /// Advance to the next item.
    Right,
}

/// Discrete swipe gesture event, as delivered by the host's recognizer.
///
/// Swipe direction is inverted relative to navigation: dragging the content
/// right reveals the previous item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Content dragged left.
    Left,
    /// Content dragged right.
    Right,
}

impl Swipe {
    /// The navigation direction this gesture requests.
    pub fn navigation_direction(self) -> Direction {
        match self {
            Self::Left => Direction::Right,
            Self::Right => Direction::Left,
        }
    }
}

// =============================================================================
// Transition styling tag
// =============================================================================

/// Direction tag applied to the neighbor slots while and after a transition.
///
/// A right shift animates with the untagged base styling, so only left
/// shifts carry a tag. A left admission sets [`ShiftTag::Left`]; a right
/// admission resets to [`ShiftTag::None`]; the timed release leaves the tag
/// untouched, so a left tag stays on the neighbor slots until the next
/// right shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftTag {
    /// Base neighbor styling.
    #[default]
    None,
    /// Left-shift styling on the neighbor slots.
    Left,
}

// =============================================================================
// Slot roles
// =============================================================================

/// Visual role of one working-list slot relative to the showing index.
///
/// Every slot gets exactly one role. When roles coincide on very small
/// rings, the earlier variant in the precedence order wins:
/// showing, prev, next, doublePrev, doubleNext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotRole {
    /// The item currently in the showing position.
    Showing,
    /// One slot behind the showing item.
    Prev,
    /// Two slots behind.
    DoublePrev,
    /// One slot ahead.
    Next,
    /// Two slots ahead.
    DoubleNext,
    /// Off-stage; not styled by the rotation.
    #[default]
    None,
}

impl SlotRole {
    /// Whether this role is one of the four styled neighbor positions.
    pub fn is_neighbor(self) -> bool {
        matches!(
            self,
            Self::Prev | Self::DoublePrev | Self::Next | Self::DoubleNext
        )
    }
}

// =============================================================================
// Slot style flags
// =============================================================================

bitflags::bitflags! {
    /// Per-slot style classes as a bitfield.
    ///
    /// Combine with bitwise OR: `SlotStyle::PREV | SlotStyle::LEFT_SHIFT`.
    /// The host maps set flags onto whatever its renderer understands
    /// (CSS classes, cell attributes, transforms).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SlotStyle: u8 {
        const NONE = 0;
        const SHOWING = 1 << 0;
        const PREV = 1 << 1;
        const NEXT = 1 << 2;
        const DOUBLE_PREV = 1 << 3;
        const DOUBLE_NEXT = 1 << 4;
        /// Left-shift animation tag on a neighbor slot.
        const LEFT_SHIFT = 1 << 5;
        /// 3d presentation (absent = flat).
        const THREE_D = 1 << 6;
        /// Dim this slot because it is out of focus.
        const DARKENED = 1 << 7;
    }
}

// =============================================================================
// Presentation options
// =============================================================================

/// Overall carousel presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselStyle {
    /// Slots on one plane.
    #[default]
    Flat,
    /// Slots arranged with depth.
    ThreeD,
}

/// What to do with an out-of-range `jump_to_index` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPolicy {
    /// Drop the request silently.
    #[default]
    Reject,
    /// Pin the target into range, then jump.
    Clamp,
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Integer channels for exact comparison. Alpha 255 = fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Default dot-indicator color when the host supplies no override.
    pub const DOT_DEFAULT: Self = Self::rgb(220, 220, 220);
}

// =============================================================================
// Dimension
// =============================================================================

/// A sizing value passed through to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Size from content.
    #[default]
    Auto,
    /// Absolute size in host units.
    Units(u16),
    /// Percentage of the parent size (0-100).
    Percent(f32),
}

impl From<u16> for Dimension {
    fn from(value: u16) -> Self {
        if value == 0 { Self::Auto } else { Self::Units(value) }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_inverts_navigation() {
        assert_eq!(Swipe::Right.navigation_direction(), Direction::Left);
        assert_eq!(Swipe::Left.navigation_direction(), Direction::Right);
    }

    #[test]
    fn test_neighbor_roles() {
        assert!(SlotRole::Prev.is_neighbor());
        assert!(SlotRole::DoubleNext.is_neighbor());
        assert!(!SlotRole::Showing.is_neighbor());
        assert!(!SlotRole::None.is_neighbor());
    }

    #[test]
    fn test_slot_style_combines() {
        let style = SlotStyle::PREV | SlotStyle::LEFT_SHIFT | SlotStyle::DARKENED;
        assert!(style.contains(SlotStyle::PREV));
        assert!(style.contains(SlotStyle::LEFT_SHIFT));
        assert!(!style.contains(SlotStyle::THREE_D));
    }

    #[test]
    fn test_dimension_from_u16() {
        assert_eq!(Dimension::from(0u16), Dimension::Auto);
        assert_eq!(Dimension::from(40u16), Dimension::Units(40));
    }

    #[test]
    fn test_animation_time() {
        assert_eq!(ANIMATION_TIME, Duration::from_millis(500));
    }
}
