#![forbid(unsafe_code)]

//! When and between which stacks automatic transfers happen.
//!
//! The board itself never starts transfers on its own; hosts combine a
//! [`TransferCadence`] with a [`PairPolicy`], or use [`AutoTransfer`] which
//! does both.

use std::time::Duration;

use emberdeck_core::rng::{RandomSource, Xorshift32};

use crate::board::StackBoard;
use crate::error::StackError;
use crate::space::CoordinateSpace;
use crate::stack::{Stack, StackId};
use crate::transfer::TransferId;

/// Fires once per interval of accumulated time.
///
/// The accumulator resets to zero when it fires, so a long frame fires at
/// most once and the remainder is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferCadence {
    interval: Duration,
    accumulated: Duration,
}

impl TransferCadence {
    /// A cadence that fires once every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Time between firings.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `dt`; returns `true` when an interval has been reached.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(dt);
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// Forget accumulated time.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

/// Picks the source and target of the next automatic transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairPolicy {
    /// Always the same direction.
    Fixed { source: StackId, target: StackId },
    /// A uniformly chosen non-empty source and a different target.
    RandomDistinct,
}

impl PairPolicy {
    /// `None` when no valid pair exists.
    pub fn pick<R: RandomSource>(
        &self,
        stacks: &[Stack],
        rng: &mut R,
    ) -> Option<(StackId, StackId)> {
        match *self {
            Self::Fixed { source, target } => Some((source, target)),
            Self::RandomDistinct => {
                if stacks.len() < 2 {
                    return None;
                }
                let sources: Vec<StackId> = stacks
                    .iter()
                    .filter(|s| !s.is_empty())
                    .map(Stack::id)
                    .collect();
                if sources.is_empty() {
                    return None;
                }
                let source = sources[rng.below(sources.len() as u32) as usize];
                // Draw from the other n - 1 stacks and step over the source.
                let mut target = rng.below(stacks.len() as u32 - 1) as usize;
                if target >= source.index() {
                    target += 1;
                }
                Some((source, stacks[target].id()))
            }
        }
    }
}

/// A cadence, a pair policy, and the RNG that feeds it.
#[derive(Debug, Clone)]
pub struct AutoTransfer<R = Xorshift32> {
    cadence: TransferCadence,
    policy: PairPolicy,
    rng: R,
}

impl AutoTransfer<Xorshift32> {
    /// Auto-transfer driven by the default seeded [`Xorshift32`].
    pub fn new(interval: Duration, policy: PairPolicy) -> Self {
        Self::with_rng(interval, policy, Xorshift32::default())
    }
}

impl<R: RandomSource> AutoTransfer<R> {
    /// Auto-transfer drawing pairs from `rng`.
    pub fn with_rng(interval: Duration, policy: PairPolicy, rng: R) -> Self {
        Self {
            cadence: TransferCadence::new(interval),
            policy,
            rng,
        }
    }

    /// Current pair policy.
    pub fn policy(&self) -> PairPolicy {
        self.policy
    }

    /// Replace the pair policy. Accumulated cadence time is kept.
    pub fn set_policy(&mut self, policy: PairPolicy) {
        self.policy = policy;
    }

    /// Advance the cadence and, when it fires, start one transfer on `board`.
    pub fn tick<S: CoordinateSpace>(
        &mut self,
        board: &mut StackBoard<S>,
        dt: Duration,
    ) -> Result<Option<TransferId>, StackError> {
        if !self.cadence.tick(dt) {
            return Ok(None);
        }
        match self.policy.pick(board.stacks(), &mut self.rng) {
            Some((source, target)) => board.transfer_card(source, target),
            None => Ok(None),
        }
    }

    /// Restart the cadence from zero.
    pub fn reset(&mut self) {
        self.cadence.reset();
    }
}
