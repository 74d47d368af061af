#![forbid(unsafe_code)]

//! Procedural fire.
//!
//! A grid of palette indices ("intensities") is fed from a permanently hot
//! bottom row. Each simulation step copies every cell up one row with a random
//! sideways drift and a random cooling of 0 or 1, which produces the familiar
//! rising, flickering flame. Every tick the grid is mapped through a fixed
//! 34-colour palette into an RGBA buffer that a display surface can upload.
//!
//! ```
//! use emberdeck_fire::{FireAutomaton, FireConfig};
//!
//! let mut fire = FireAutomaton::new(FireConfig::default());
//! let steps = fire.update(1.0 / 60.0);
//! assert!(steps <= 1);
//! assert_eq!(fire.pixels().as_bytes().len(), 200 * 140 * 4);
//! ```

pub mod automaton;
pub mod buffer;
pub mod config;
pub mod grid;
pub mod palette;
pub mod viewport;

pub use automaton::{FireAutomaton, MAX_CATCH_UP_STEPS};
pub use buffer::PixelBuffer;
pub use config::FireConfig;
pub use grid::IntensityGrid;
pub use palette::{MAX_INTENSITY, PALETTE, PALETTE_SIZE, Rgb};
pub use viewport::ViewportFit;
