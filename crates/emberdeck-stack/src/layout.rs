#![forbid(unsafe_code)]

//! Card spacing inside a stack.
//!
//! # Algorithm
//!
//! Given the stack's usable span `[left, right]` and `N` cards:
//!
//! - `N <= 1`: one card at the aligned start, spacing 0.
//! - otherwise `spacing = min(max_spacing, span / (N - 1))` and the row is
//!   `spacing * (N - 1)` wide.
//!
//! [`Align::Left`] always starts at `left`; [`Align::Center`] centres the row
//! inside the span. Card `i` sits at `(start + i * spacing, 0)`.
//!
//! # Failure Modes
//!
//! - Zero or negative span: spacing 0, every card at `left`.

use emberdeck_core::geometry::Point;

/// Horizontal alignment of a stack's row of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Hug the left bound; the row grows rightward.
    Left,
    /// Centre the row within the bounds.
    #[default]
    Center,
}

/// Usable horizontal span for card centres, in the stack's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackBounds {
    pub left: f32,
    pub right: f32,
}

impl StackBounds {
    /// Explicit edges.
    pub const fn from_edges(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Bounds for a stack of `stack_width` centred on its origin, inset by
    /// `padding` and half a card on each side.
    ///
    /// An unknown or non-positive card width counts as 1, which keeps the
    /// first layout usable before the card art has been measured.
    pub fn for_stack(stack_width: f32, padding: f32, card_width: Option<f32>) -> Self {
        let card_width = card_width.filter(|w| *w > 0.0).unwrap_or(1.0);
        let half = card_width / 2.0;
        Self {
            left: -stack_width / 2.0 + padding + half,
            right: stack_width / 2.0 - padding - half,
        }
    }

    /// `right - left`, floored at 0.
    pub fn span(&self) -> f32 {
        (self.right - self.left).max(0.0)
    }
}

/// Start offset and spacing for one stack population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    pub start_offset: f32,
    pub spacing: f32,
}

impl LayoutResult {
    /// Local position of card `index`.
    #[inline]
    pub fn position(&self, index: usize) -> Point {
        Point::new(self.start_offset + index as f32 * self.spacing, 0.0)
    }
}

/// Lay out `card_count` cards inside `bounds`.
pub fn calculate_layout(
    bounds: StackBounds,
    card_count: usize,
    align: Align,
    max_spacing: f32,
) -> LayoutResult {
    if card_count <= 1 {
        return LayoutResult {
            start_offset: aligned_start(align, 0.0, bounds),
            spacing: 0.0,
        };
    }

    let gaps = (card_count - 1) as f32;
    let ideal = bounds.span() / gaps;
    let spacing = ideal.min(max_spacing.max(0.0));
    let total_width = spacing * gaps;

    LayoutResult {
        start_offset: aligned_start(align, total_width, bounds),
        spacing,
    }
}

fn aligned_start(align: Align, total_width: f32, bounds: StackBounds) -> f32 {
    match align {
        Align::Left => bounds.left,
        Align::Center => {
            let leftover = (bounds.span() - total_width).max(0.0);
            bounds.left + leftover / 2.0
        }
    }
}
