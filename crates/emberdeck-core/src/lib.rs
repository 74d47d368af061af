#![forbid(unsafe_code)]

//! Core: geometry, easing, a host-driven frame clock, and seedable randomness.
//!
//! Nothing in this crate owns a window or a timer. Hosts push elapsed time in
//! through [`clock::FrameClock`] and everything downstream reacts to the
//! resulting [`clock::FrameTick`].

pub mod animation;
pub mod clock;
pub mod geometry;
pub mod logging;
pub mod rng;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, info_span, trace, warn};
