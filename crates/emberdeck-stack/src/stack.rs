#![forbid(unsafe_code)]

//! Stacks and the cards resting in them.

use emberdeck_core::geometry::Point;

use crate::layout::{Align, LayoutResult, StackBounds, calculate_layout};

/// Identifies a stack on its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StackId(usize);

impl StackId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the stack in [`StackBoard::stacks`](crate::StackBoard::stacks).
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Stable card identity. Layout never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

/// A card with its position in whichever space currently owns it: stack-local
/// while resting, global while in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    id: CardId,
    position: Point,
}

impl Card {
    /// A card at the local origin.
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            position: Point::ORIGIN,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    /// Position in the owning stack's local space, or global while in flight.
    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

/// An ordered row of cards. The last card is the top of the stack.
#[derive(Debug, Clone)]
pub struct Stack {
    id: StackId,
    align: Align,
    bounds: StackBounds,
    max_spacing: f32,
    cards: Vec<Card>,
}

impl Stack {
    /// An empty stack.
    pub fn new(id: StackId, align: Align, bounds: StackBounds, max_spacing: f32) -> Self {
        Self {
            id,
            align,
            bounds,
            max_spacing,
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> StackId {
        self.id
    }

    pub fn align(&self) -> Align {
        self.align
    }

    /// Horizontal range card positions are kept within.
    pub fn bounds(&self) -> StackBounds {
        self.bounds
    }

    /// Resting cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of resting cards. Cards in flight towards this stack are not counted.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card that would leave next.
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Layout for a population of `count` cards, without moving anything.
    pub fn layout_for(&self, count: usize) -> LayoutResult {
        calculate_layout(self.bounds, count, self.align, self.max_spacing)
    }

    /// Reposition every resting card using the stack's own alignment.
    pub fn layout(&mut self, count_override: Option<usize>) -> Option<LayoutResult> {
        self.layout_with(count_override, self.align)
    }

    /// Reposition every resting card as if the stack held
    /// `max(count_override.unwrap_or(len), 1)` cards.
    ///
    /// Overriding the count leaves room for cards that are still on their way.
    /// Empty stacks are left alone and yield `None`.
    pub fn layout_with(
        &mut self,
        count_override: Option<usize>,
        align: Align,
    ) -> Option<LayoutResult> {
        if self.cards.is_empty() {
            return None;
        }
        let count = count_override.unwrap_or(self.cards.len()).max(1);
        let layout = calculate_layout(self.bounds, count, align, self.max_spacing);
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.position = layout.position(i);
        }
        Some(layout)
    }

    pub(crate) fn set_bounds(&mut self, bounds: StackBounds) {
        self.bounds = bounds;
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
