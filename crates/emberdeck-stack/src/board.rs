#![forbid(unsafe_code)]

//! The board: stacks, the coordinate space joining them, and every transfer
//! in flight between them.
//!
//! # Transfer Lifecycle
//!
//! 1. The source's top card is popped and its position converted to global.
//! 2. The source re-lays out around the gap.
//! 3. The destination slot is reserved: the target's resting count plus every
//!    transfer already heading there. The target re-lays out with room for
//!    the reservation and the slot's local position becomes the flight's
//!    global destination.
//! 4. [`StackBoard::advance`] moves the card along an ease-out-cubic path.
//! 5. On completion the card is converted back to target-local, pushed, and
//!    the target re-lays out so the card settles on its slot.
//!
//! Events for each step are queued and handed out by
//! [`StackBoard::drain_events`].

use std::time::Duration;

use emberdeck_core::geometry::Point;

use crate::config::StackConfig;
use crate::error::StackError;
use crate::layout::{Align, LayoutResult};
use crate::space::{CoordinateSpace, StackTransforms};
use crate::stack::{Card, CardId, Stack, StackId};
use crate::transfer::{Transfer, TransferEvent, TransferId};

/// Owns stacks and in-flight transfers.
#[derive(Debug)]
pub struct StackBoard<S = StackTransforms> {
    config: StackConfig,
    space: S,
    stacks: Vec<Stack>,
    in_flight: Vec<Transfer>,
    events: Vec<TransferEvent>,
    next_card: u32,
    next_transfer: u64,
}

impl StackBoard<StackTransforms> {
    /// Board with per-stack affine transforms, all identity until placed.
    pub fn new(config: StackConfig) -> Self {
        Self::with_space(config, StackTransforms::new())
    }

    /// Place a stack's local origin in global space.
    pub fn set_stack_origin(&mut self, id: StackId, origin: Point) {
        self.space.set_origin(id, origin);
    }
}

impl<S: CoordinateSpace> StackBoard<S> {
    /// Create a board that maps stack-local points through `space`.
    pub fn with_space(config: StackConfig, space: S) -> Self {
        Self {
            config,
            space,
            stacks: Vec::new(),
            in_flight: Vec::new(),
            events: Vec::new(),
            next_card: 0,
            next_transfer: 1,
        }
    }

    /// Shared stack geometry and timing.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// The coordinate space used for local/global conversion.
    pub fn space(&self) -> &S {
        &self.space
    }

    /// Mutable access to the coordinate space, e.g. to move a stack.
    pub fn space_mut(&mut self) -> &mut S {
        &mut self.space
    }

    /// Add an empty stack sized from the board config.
    pub fn add_stack(&mut self, align: Align) -> StackId {
        let id = StackId::new(self.stacks.len());
        self.stacks.push(Stack::new(
            id,
            align,
            self.config.bounds(),
            self.config.max_card_spacing,
        ));
        id
    }

    /// All stacks, indexed by [`StackId::index`].
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Look up one stack.
    pub fn stack(&self, id: StackId) -> Result<&Stack, StackError> {
        self.stacks
            .get(id.index())
            .ok_or(StackError::UnknownStack(id))
    }

    fn stack_mut(&mut self, id: StackId) -> Result<&mut Stack, StackError> {
        self.stacks
            .get_mut(id.index())
            .ok_or(StackError::UnknownStack(id))
    }

    /// Put `count` fresh cards on `id` and lay it out. Returns the new ids.
    pub fn deal(&mut self, id: StackId, count: u32) -> Result<Vec<CardId>, StackError> {
        let start = self.next_card;
        let stack = self
            .stacks
            .get_mut(id.index())
            .ok_or(StackError::UnknownStack(id))?;
        let ids: Vec<CardId> = (start..start.saturating_add(count)).map(CardId).collect();
        for &card in &ids {
            stack.push(Card::new(card));
        }
        self.next_card = start.saturating_add(count);
        self.relayout(id)?;
        Ok(ids)
    }

    /// Lay out `id` with an explicit population and alignment.
    pub fn layout_stack(
        &mut self,
        id: StackId,
        count_override: Option<usize>,
        align: Align,
    ) -> Result<Option<LayoutResult>, StackError> {
        Ok(self.stack_mut(id)?.layout_with(count_override, align))
    }

    /// Lay out `id` with its own alignment, leaving room for cards still
    /// heading there.
    pub fn relayout(&mut self, id: StackId) -> Result<Option<LayoutResult>, StackError> {
        if id.index() >= self.stacks.len() {
            return Err(StackError::UnknownStack(id));
        }
        Ok(self.relayout_index(id.index()))
    }

    /// [`relayout`](Self::relayout) for an index known to be in range.
    fn relayout_index(&mut self, index: usize) -> Option<LayoutResult> {
        let pending = self.pending_for(StackId::new(index));
        let stack = self.stacks.get_mut(index)?;
        let count = stack.len() + pending;
        stack.layout(Some(count))
    }

    /// Record the measured card width, re-derive every stack's bounds, and
    /// lay everything out again.
    pub fn set_card_width(&mut self, width: f32) {
        self.config.card_width = Some(width).filter(|w| *w > 0.0);
        let bounds = self.config.bounds();
        for index in 0..self.stacks.len() {
            self.stacks[index].set_bounds(bounds);
            self.relayout_index(index);
        }
        emberdeck_core::debug!(card_width = width, "card width updated");
    }

    /// Number of transfers currently heading for `target`.
    pub fn pending_for(&self, target: StackId) -> usize {
        self.in_flight
            .iter()
            .filter(|t| t.target() == target)
            .count()
    }

    /// Global position of the card at `index` on `stack`.
    pub fn card_global_position(&self, stack: StackId, index: usize) -> Option<Point> {
        let card = self.stacks.get(stack.index())?.cards().get(index)?;
        Some(self.space.to_global(stack, card.position()))
    }

    /// Begin moving the top card of `source` onto `target`.
    ///
    /// Returns `Ok(None)` when the source is empty.
    pub fn transfer_card(
        &mut self,
        source: StackId,
        target: StackId,
    ) -> Result<Option<TransferId>, StackError> {
        self.stack(target)?;
        if source == target {
            return Err(StackError::SameStack(source));
        }
        let Some(mut card) = self.stack_mut(source)?.pop() else {
            return Ok(None);
        };
        card.set_position(self.space.to_global(source, card.position()));
        self.relayout(source)?;

        let slot = self.stack(target)?.len() + self.pending_for(target);
        let target_stack = self.stack_mut(target)?;
        let reserved = target_stack.layout_for(slot + 1);
        target_stack.layout(Some(slot + 1));
        let destination = self.space.to_global(target, reserved.position(slot));

        let id = TransferId(self.next_transfer);
        self.next_transfer += 1;
        emberdeck_core::debug!(
            transfer = id.0,
            card = card.id().0,
            source = source.index(),
            target = target.index(),
            slot,
            "transfer started"
        );
        self.events.push(TransferEvent::Started {
            id,
            card: card.id(),
            source,
            target,
        });
        self.in_flight.push(Transfer::new(
            id,
            card,
            source,
            target,
            destination,
            self.config.transfer_duration,
        ));
        Ok(Some(id))
    }

    /// Advance every transfer by `dt`, landing the ones that finish.
    ///
    /// Returns how many landed.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let mut landed = 0;
        let mut i = 0;
        while i < self.in_flight.len() {
            self.in_flight[i].advance(dt);
            if self.in_flight[i].is_complete() {
                let transfer = self.in_flight.remove(i);
                self.land(transfer);
                landed += 1;
            } else {
                i += 1;
            }
        }
        landed
    }

    fn land(&mut self, transfer: Transfer) {
        let (id, target) = (transfer.id(), transfer.target());
        let mut card = transfer.into_card();
        card.set_position(self.space.to_local(target, card.position()));
        let card_id = card.id();
        let pending = self.pending_for(target);
        // Targets are validated when the transfer starts and stacks are
        // never removed.
        let Some(stack) = self.stacks.get_mut(target.index()) else {
            return;
        };
        stack.push(card);
        let index = stack.len() - 1;
        stack.layout(Some(stack.len() + pending));
        emberdeck_core::debug!(
            transfer = id.0,
            card = card_id.0,
            target = target.index(),
            index,
            "transfer landed"
        );
        self.events.push(TransferEvent::Landed {
            id,
            card: card_id,
            target,
            index,
        });
    }

    /// Transfers that have started but not landed, oldest first.
    pub fn in_flight(&self) -> &[Transfer] {
        &self.in_flight
    }

    /// An in-flight transfer by id.
    pub fn transfer(&self, id: TransferId) -> Option<&Transfer> {
        self.in_flight.iter().find(|t| t.id() == id)
    }

    /// Drop one transfer without landing it. The card comes back at its last
    /// global position and the target stops reserving room for it.
    pub fn cancel(&mut self, id: TransferId) -> Option<Card> {
        let index = self.in_flight.iter().position(|t| t.id() == id)?;
        let transfer = self.in_flight.remove(index);
        let target = transfer.target();
        let card = self.finish_cancel(transfer);
        self.relayout_index(target.index());
        Some(card)
    }

    /// Drop every transfer, returning the cards in start order.
    pub fn cancel_all(&mut self) -> Vec<Card> {
        let transfers = std::mem::take(&mut self.in_flight);
        if !transfers.is_empty() {
            emberdeck_core::debug!(count = transfers.len(), "cancelling all transfers");
        }
        let cards: Vec<Card> = transfers
            .into_iter()
            .map(|t| self.finish_cancel(t))
            .collect();
        for index in 0..self.stacks.len() {
            self.relayout_index(index);
        }
        cards
    }

    fn finish_cancel(&mut self, transfer: Transfer) -> Card {
        let id = transfer.id();
        let card = transfer.into_card();
        emberdeck_core::trace!(transfer = id.0, card = card.id().0, "transfer cancelled");
        self.events.push(TransferEvent::Cancelled {
            id,
            card: card.id(),
            position: card.position(),
        });
        card
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<TransferEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cards resting in stacks plus cards in flight.
    pub fn total_cards(&self) -> usize {
        self.stacks.iter().map(Stack::len).sum::<usize>() + self.in_flight.len()
    }
}
