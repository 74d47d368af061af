#![forbid(unsafe_code)]

//! Host-driven frame clock.
//!
//! The host (a terminal loop, a test, a browser `requestAnimationFrame`
//! callback) owns real time. It calls [`FrameClock::advance`] or
//! [`FrameClock::advance_to`] once per displayed frame and hands the resulting
//! [`FrameTick`] to whatever needs to animate.
//!
//! Consumers that animate register a [`TickHandle`] while they are live and
//! deregister it on teardown. The clock never calls back into them; the
//! registry exists so an owner can prove that nothing is left ticking after a
//! scene is destroyed.
//!
//! # Invariants
//!
//! 1. `frame` increases by exactly one per advance.
//! 2. A delivered delta never exceeds `max_delta`.
//! 3. Handles are never reused within one clock.

use std::time::Duration;

/// Reference display rate used to express deltas in "frames".
pub const REFERENCE_FPS: f64 = 60.0;

/// Default upper bound on a single frame delta.
///
/// A host that stalls (debugger, suspended tab, slow terminal) would otherwise
/// deliver one enormous delta and force a burst of catch-up work.
pub const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(100);

/// Time elapsed between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct FrameDelta(Duration);

impl FrameDelta {
    /// A zero-length delta.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Wrap a duration.
    #[inline]
    pub const fn new(elapsed: Duration) -> Self {
        Self(elapsed)
    }

    /// Build from fractional seconds; negative or non-finite input is zero.
    pub fn from_secs_f64(seconds: f64) -> Self {
        if seconds.is_finite() && seconds > 0.0 {
            Self(Duration::from_secs_f64(seconds))
        } else {
            Self::ZERO
        }
    }

    /// The underlying duration.
    #[inline]
    pub const fn duration(self) -> Duration {
        self.0
    }

    /// Delta in seconds.
    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }

    /// Delta in milliseconds.
    #[inline]
    pub fn as_millis_f64(self) -> f64 {
        self.0.as_secs_f64() * 1000.0
    }

    /// Delta expressed in frames at [`REFERENCE_FPS`] (1.0 == one 60 Hz frame).
    #[inline]
    pub fn frames(self) -> f64 {
        self.0.as_secs_f64() * REFERENCE_FPS
    }
}

/// One frame's worth of timing information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTick {
    /// Monotonic frame index, starting at 1 for the first advance.
    pub frame: u64,
    /// Clamped time since the previous frame.
    pub delta: FrameDelta,
    /// Sum of all clamped deltas delivered so far.
    pub elapsed: Duration,
}

/// Identifies one live tick subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickHandle(u64);

impl TickHandle {
    /// Raw id, for logging.
    pub const fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Subscription {
    handle: TickHandle,
    label: &'static str,
}

/// Frame counter, delta clamp, and tick-subscription registry.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: u64,
    elapsed: Duration,
    last_now: Option<Duration>,
    max_delta: Duration,
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl FrameClock {
    /// Create a clock with [`DEFAULT_MAX_DELTA`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame: 0,
            elapsed: Duration::ZERO,
            last_now: None,
            max_delta: DEFAULT_MAX_DELTA,
            subscriptions: Vec::new(),
            next_id: 1,
        }
    }

    /// Override the delta clamp (builder). Zero disables clamping.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Advance by an explicit delta.
    pub fn advance(&mut self, dt: Duration) -> FrameTick {
        let dt = if self.max_delta.is_zero() {
            dt
        } else {
            dt.min(self.max_delta)
        };
        self.frame += 1;
        self.elapsed = self.elapsed.saturating_add(dt);
        FrameTick {
            frame: self.frame,
            delta: FrameDelta::new(dt),
            elapsed: self.elapsed,
        }
    }

    /// Advance to a host timestamp (time since some fixed origin).
    ///
    /// The first call delivers a zero delta. Timestamps that go backwards are
    /// treated as no time passing.
    pub fn advance_to(&mut self, now: Duration) -> FrameTick {
        let dt = match self.last_now {
            Some(last) => now.saturating_sub(last),
            None => Duration::ZERO,
        };
        self.last_now = Some(self.last_now.map_or(now, |last| last.max(now)));
        self.advance(dt)
    }

    /// Frames delivered so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Total clamped time delivered so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Register a tick consumer. `label` only appears in logs and diagnostics.
    pub fn register(&mut self, label: &'static str) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { handle, label });
        crate::trace!(handle = handle.0, label, "tick subscription registered");
        handle
    }

    /// Remove a subscription. Returns `false` if it was not registered.
    pub fn deregister(&mut self, handle: TickHandle) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.handle != handle);
        let removed = self.subscriptions.len() < before;
        if removed {
            crate::trace!(handle = handle.0, "tick subscription removed");
        }
        removed
    }

    /// Whether `handle` is still registered.
    pub fn is_registered(&self, handle: TickHandle) -> bool {
        self.subscriptions.iter().any(|s| s.handle == handle)
    }

    /// Number of live subscriptions.
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    /// Labels of live subscriptions, in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.subscriptions.iter().map(|s| s.label)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
