#![forbid(unsafe_code)]

//! In-flight cards.

use std::time::Duration;

use emberdeck_core::animation::{Animation, Tween, ease_out_cubic};
use emberdeck_core::geometry::Point;

use crate::stack::{Card, CardId, StackId};

/// Identifies one transfer for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransferId(pub u64);

/// A card travelling from one stack to another through global space.
///
/// The transfer owns the card for as long as it is moving; the card's
/// position is global throughout.
#[derive(Debug, Clone)]
pub struct Transfer {
    id: TransferId,
    card: Card,
    source: StackId,
    target: StackId,
    start: Point,
    destination: Point,
    tween: Tween,
}

impl Transfer {
    pub(crate) fn new(
        id: TransferId,
        card: Card,
        source: StackId,
        target: StackId,
        destination: Point,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            start: card.position(),
            card,
            source,
            target,
            destination,
            tween: Tween::new(duration).easing(ease_out_cubic),
        }
    }

    pub fn id(&self) -> TransferId {
        self.id
    }

    /// The card being moved. Its position is global.
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Stack the card left.
    pub fn source(&self) -> StackId {
        self.source
    }

    /// Stack the card is heading for.
    pub fn target(&self) -> StackId {
        self.target
    }

    /// Global position the card left from.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Global position of the card's reserved slot on the target.
    pub fn destination(&self) -> Point {
        self.destination
    }

    /// Current global position.
    pub fn position(&self) -> Point {
        self.card.position()
    }

    /// Flight time so far.
    pub fn elapsed(&self) -> Duration {
        self.tween.elapsed()
    }

    /// Total flight time.
    pub fn duration(&self) -> Duration {
        self.tween.duration()
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.tween.raw_progress()
    }

    /// Whether the card has reached its destination.
    pub fn is_complete(&self) -> bool {
        self.tween.is_complete()
    }

    pub(crate) fn advance(&mut self, dt: Duration) {
        self.tween.tick(dt);
        let eased = self.tween.value();
        self.card.set_position(self.start.lerp(self.destination, eased));
    }

    pub(crate) fn into_card(self) -> Card {
        self.card
    }
}

/// Lifecycle notifications, drained with
/// [`StackBoard::drain_events`](crate::StackBoard::drain_events).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferEvent {
    Started {
        id: TransferId,
        card: CardId,
        source: StackId,
        target: StackId,
    },
    /// The card now rests on `target` at `index`.
    Landed {
        id: TransferId,
        card: CardId,
        target: StackId,
        index: usize,
    },
    /// The transfer was dropped mid-flight; `position` is the card's last
    /// global position.
    Cancelled {
        id: TransferId,
        card: CardId,
        position: Point,
    },
}

impl TransferEvent {
    /// The transfer this event belongs to.
    pub fn transfer_id(&self) -> TransferId {
        match self {
            Self::Started { id, .. } => *id,
            Self::Landed { id, .. } => *id,
            Self::Cancelled { id, .. } => *id,
        }
    }
}
