//! Render snapshot - what the host draws.
//!
//! The engine draws nothing. A host render effect calls
//! [`CarouselEngine::snapshot`] and paints from the result; because the
//! snapshot reads the engine's signals, the effect re-runs whenever any of
//! them change.
//!
//! Role precedence follows the render order of the slots: showing wins,
//! then prev, next, doublePrev, doubleNext. On a two-slot ring prev and
//! next share a slot and it reads as prev.

use crate::sequencer::NeighborSet;
use crate::types::{CarouselStyle, Dimension, Rgba, ShiftTag, SlotRole, SlotStyle};

use super::CarouselEngine;

// =============================================================================
// Views
// =============================================================================

/// One working-list slot, ready for the item renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView<T> {
    /// The item occupying this slot.
    pub item: T,
    /// The slot's rotation role.
    pub role: SlotRole,
    /// Composed style flags for this slot.
    pub style: SlotStyle,
}

impl<T> SlotView<T> {
    /// Whether this slot holds the showing item.
    pub fn is_showing(&self) -> bool {
        self.role == SlotRole::Showing
    }
}

/// Input to the dot indicator widget.
#[derive(Debug, Clone, PartialEq)]
pub struct DotsView<T> {
    /// The items the dots stand for.
    pub items: Vec<T>,
    /// Index of the selected dot.
    pub selected: usize,
    /// Dot outline color.
    pub outline_color: Rgba,
    /// Dot fill color.
    pub fill_color: Rgba,
    /// Render the dots inside the carousel area.
    pub inside: bool,
}

/// Full declarative state for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot<T> {
    /// Every working-list slot with its role and style.
    pub slots: Vec<SlotView<T>>,
    /// Index of the showing slot.
    pub showing_index: usize,
    /// Draw the arrow buttons.
    pub arrows: bool,
    /// Dot indicator input, when enabled and items exist.
    pub dots: Option<DotsView<T>>,
    /// Carousel width.
    pub width: Dimension,
    /// Carousel height.
    pub height: Dimension,
    /// Flat or 3d presentation, for chrome outside the slots.
    pub carousel_style: CarouselStyle,
}

// =============================================================================
// Role and style assignment
// =============================================================================

/// Assign the visual role for the slot at `index`.
pub fn slot_role(index: usize, showing: usize, neighbors: NeighborSet) -> SlotRole {
    if index == showing {
        SlotRole::Showing
    } else if index == neighbors.prev {
        SlotRole::Prev
    } else if index == neighbors.next {
        SlotRole::Next
    } else if index == neighbors.double_prev {
        SlotRole::DoublePrev
    } else if index == neighbors.double_next {
        SlotRole::DoubleNext
    } else {
        SlotRole::None
    }
}

/// Compose the style flags for a slot.
///
/// The left-shift tag rides on all four neighbor roles while it is set;
/// darkening applies to every slot outside the showing position.
pub fn slot_style(
    role: SlotRole,
    tag: ShiftTag,
    presentation: CarouselStyle,
    darken: bool,
) -> SlotStyle {
    let mut style = match role {
        SlotRole::Showing => SlotStyle::SHOWING,
        SlotRole::Prev => SlotStyle::PREV,
        SlotRole::Next => SlotStyle::NEXT,
        SlotRole::DoublePrev => SlotStyle::DOUBLE_PREV,
        SlotRole::DoubleNext => SlotStyle::DOUBLE_NEXT,
        SlotRole::None => SlotStyle::NONE,
    };
    if presentation == CarouselStyle::ThreeD {
        style |= SlotStyle::THREE_D;
    }
    if tag == ShiftTag::Left && role.is_neighbor() {
        style |= SlotStyle::LEFT_SHIFT;
    }
    if darken && role != SlotRole::Showing {
        style |= SlotStyle::DARKENED;
    }
    style
}

// =============================================================================
// Snapshot
// =============================================================================

impl<T: Clone + PartialEq + 'static> CarouselEngine<T> {
    /// Build the full declarative frame state.
    ///
    /// Reading this inside a spark-signals effect subscribes the effect to
    /// the working list, the showing index, and the styling tag.
    pub fn snapshot(&self) -> RenderSnapshot<T> {
        let items = self.items_signal().get();
        let showing = self.showing_index();
        let tag = self.shift_tag();
        let neighbors = self.neighbors();

        let slots = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let role = match neighbors {
                    Some(neighbors) => slot_role(index, showing, neighbors),
                    // Degenerate single-slot list: the one slot is showing
                    None if index == showing => SlotRole::Showing,
                    None => SlotRole::None,
                };
                SlotView {
                    item: item.clone(),
                    role,
                    style: slot_style(role, tag, self.carousel_style, self.out_of_focus_darken),
                }
            })
            .collect();

        RenderSnapshot {
            slots,
            showing_index: showing,
            arrows: self.arrows,
            dots: self.dots_view(&items, showing),
            width: self.width,
            height: self.height,
            carousel_style: self.carousel_style,
        }
    }

    /// Dot indicator input for the current frame.
    ///
    /// A caller list of exactly two items hands only the first two working
    /// slots to the indicator, so the duplicated entries do not show up as
    /// extra dots. The selected dot always maps back onto the caller's
    /// original index space.
    fn dots_view(&self, items: &[T], showing: usize) -> Option<DotsView<T>> {
        if !self.dots_navigation || self.source_count == 0 {
            return None;
        }
        let dot_items = if self.source_count == 2 {
            items.iter().take(2).cloned().collect()
        } else {
            items.to_vec()
        };
        Some(DotsView {
            items: dot_items,
            selected: showing % self.source_count,
            outline_color: self.dot_outline,
            fill_color: self.dot_fill,
            inside: self.dots_navigation_inside,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CarouselProps;
    use crate::types::Swipe;
    use std::time::Instant;

    fn neighbors_of(current: usize, count: usize) -> NeighborSet {
        crate::sequencer::derive_neighbors(current, count)
    }

    #[test]
    fn test_role_assignment_six_slots() {
        let n = neighbors_of(0, 6);
        assert_eq!(slot_role(0, 0, n), SlotRole::Showing);
        assert_eq!(slot_role(1, 0, n), SlotRole::Next);
        assert_eq!(slot_role(2, 0, n), SlotRole::DoubleNext);
        assert_eq!(slot_role(3, 0, n), SlotRole::None);
        assert_eq!(slot_role(4, 0, n), SlotRole::DoublePrev);
        assert_eq!(slot_role(5, 0, n), SlotRole::Prev);
    }

    #[test]
    fn test_role_precedence_two_slots() {
        // One source item doubled: prev and next collapse onto slot 1 and
        // the slot reads as prev because prev is checked first
        let n = neighbors_of(0, 2);
        assert_eq!(slot_role(0, 0, n), SlotRole::Showing);
        assert_eq!(slot_role(1, 0, n), SlotRole::Prev);
    }

    #[test]
    fn test_style_left_tag_on_neighbors_only() {
        let tagged = slot_style(SlotRole::Prev, ShiftTag::Left, CarouselStyle::Flat, false);
        assert!(tagged.contains(SlotStyle::LEFT_SHIFT));

        let showing = slot_style(SlotRole::Showing, ShiftTag::Left, CarouselStyle::Flat, false);
        assert!(!showing.contains(SlotStyle::LEFT_SHIFT));

        let offstage = slot_style(SlotRole::None, ShiftTag::Left, CarouselStyle::Flat, false);
        assert!(!offstage.contains(SlotStyle::LEFT_SHIFT));

        let untagged = slot_style(SlotRole::Prev, ShiftTag::None, CarouselStyle::Flat, false);
        assert!(!untagged.contains(SlotStyle::LEFT_SHIFT));
    }

    #[test]
    fn test_style_darken_and_presentation() {
        let style = slot_style(SlotRole::Next, ShiftTag::None, CarouselStyle::ThreeD, true);
        assert!(style.contains(SlotStyle::THREE_D));
        assert!(style.contains(SlotStyle::DARKENED));

        let showing = slot_style(SlotRole::Showing, ShiftTag::None, CarouselStyle::ThreeD, true);
        assert!(!showing.contains(SlotStyle::DARKENED));
    }

    #[test]
    fn test_snapshot_three_items() {
        let t0 = Instant::now();
        let engine = CarouselEngine::new(
            CarouselProps {
                items: vec!["a", "b", "c"],
                ..Default::default()
            },
            t0,
        );

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.slots.len(), 6);
        assert_eq!(snapshot.showing_index, 0);
        assert!(snapshot.slots[0].is_showing());
        assert_eq!(snapshot.slots[1].role, SlotRole::Next);
        assert_eq!(snapshot.slots[5].role, SlotRole::Prev);

        // Dots mirror the full working list for non-two-item sources
        let dots = snapshot.dots.unwrap();
        assert_eq!(dots.items.len(), 6);
        assert_eq!(dots.selected, 0);
        assert_eq!(dots.outline_color, Rgba::DOT_DEFAULT);
    }

    #[test]
    fn test_snapshot_two_item_dots_truncated() {
        let t0 = Instant::now();
        let mut engine = CarouselEngine::new(
            CarouselProps {
                items: vec!["a", "b"],
                ..Default::default()
            },
            t0,
        );

        // Working list is the doubled four slots
        assert_eq!(engine.len(), 4);
        let dots = engine.snapshot().dots.unwrap();
        assert_eq!(dots.items, vec!["a", "b"]);
        assert_eq!(dots.selected, 0);

        // Advancing into the duplicated half still selects a real dot
        engine.shift_right(t0);
        let dots = engine.snapshot().dots.unwrap();
        assert_eq!(dots.selected, 1);
    }

    #[test]
    fn test_snapshot_dot_selection_wraps_into_duplicates() {
        let t0 = Instant::now();
        let mut engine = CarouselEngine::new(
            CarouselProps {
                items: vec!["a", "b"],
                ..Default::default()
            },
            t0,
        );

        engine.jump_to_index(2, t0);
        assert_eq!(engine.showing_index(), 2);
        // Slot 2 is the duplicated "a"; the dot maps back to index 0
        assert_eq!(engine.snapshot().dots.unwrap().selected, 0);
    }

    #[test]
    fn test_snapshot_left_tag_after_left_swipe() {
        let t0 = Instant::now();
        let mut engine = CarouselEngine::new(
            CarouselProps {
                items: vec!["a", "b", "c", "d", "e", "f"],
                carousel_style: CarouselStyle::ThreeD,
                ..Default::default()
            },
            t0,
        );

        engine.handle_swipe(Swipe::Right, t0);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.showing_index, 5);

        for slot in &snapshot.slots {
            assert_eq!(
                slot.style.contains(SlotStyle::LEFT_SHIFT),
                slot.role.is_neighbor(),
            );
            assert!(slot.style.contains(SlotStyle::THREE_D));
        }
    }

    #[test]
    fn test_snapshot_dots_disabled() {
        let t0 = Instant::now();
        let engine = CarouselEngine::new(
            CarouselProps {
                items: vec!["a", "b", "c"],
                dots_navigation: false,
                ..Default::default()
            },
            t0,
        );
        assert!(engine.snapshot().dots.is_none());
    }

    #[test]
    fn test_snapshot_empty_carousel() {
        let t0 = Instant::now();
        let engine = CarouselEngine::new(CarouselProps::<&str>::default(), t0);

        let snapshot = engine.snapshot();
        assert!(snapshot.slots.is_empty());
        assert!(snapshot.dots.is_none());
    }
}
