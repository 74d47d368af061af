#![forbid(unsafe_code)]

//! Terminal showcase for the emberdeck engines.
//!
//! Three scenes behind a menu: Ace of Shadows (card stacks dealing
//! themselves), Magic Words (dialogue with inline emoji) and Phoenix Flame
//! (the fire automaton). A [`SceneHost`](host::SceneHost) owns the frame
//! clock and the live scene; the runner drives it either against a real
//! terminal or headless at a fixed step.

pub mod canvas;
pub mod cli;
pub mod dialogue;
pub mod error;
pub mod fps;
pub mod host;
pub mod logging;
pub mod runner;
pub mod scene;
pub mod scenes;
pub mod terminal;

pub use error::ShowcaseError;
