#![forbid(unsafe_code)]

//! Card-stack layout and transfer engine.
//!
//! A [`StackBoard`] owns a set of [`Stack`]s, each a row of overlapping cards
//! spaced to fit inside the stack's bounds. Cards move between stacks through
//! [`Transfer`]s: the card leaves its source immediately, flies through the
//! shared global space along an ease-out-cubic curve, and is handed to the
//! target stack's local space when it lands.
//!
//! Local/global conversion is injected through [`CoordinateSpace`], so the
//! engine never needs a retained scene graph.
//!
//! ```
//! use emberdeck_stack::{Align, StackBoard, StackConfig};
//! use std::time::Duration;
//!
//! let mut board = StackBoard::new(StackConfig::default());
//! let top = board.add_stack(Align::Center);
//! let bottom = board.add_stack(Align::Left);
//! board.deal(top, 3).unwrap();
//!
//! board.transfer_card(top, bottom).unwrap();
//! board.advance(Duration::from_secs(2));
//! assert_eq!(board.stack(bottom).unwrap().len(), 1);
//! ```

pub mod board;
pub mod cadence;
pub mod config;
pub mod error;
pub mod layout;
pub mod space;
pub mod stack;
pub mod transfer;

pub use board::StackBoard;
pub use cadence::{AutoTransfer, PairPolicy, TransferCadence};
pub use config::StackConfig;
pub use error::StackError;
pub use layout::{Align, LayoutResult, StackBounds, calculate_layout};
pub use space::{CoordinateSpace, StackTransforms};
pub use stack::{Card, CardId, Stack, StackId};
pub use transfer::{Transfer, TransferEvent, TransferId};
