#![forbid(unsafe_code)]

//! Stack engine configuration.

use std::time::Duration;

use crate::layout::StackBounds;

/// Geometry and timing shared by every stack on a board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackConfig {
    /// Stack width in local units. Default: 520.
    pub stack_width: f32,
    /// Stack height in local units. Default: 140.
    pub stack_height: f32,
    /// Inset from each side of the stack. Default: 20.
    pub padding: f32,
    /// Upper bound on the distance between neighbouring cards. Default: 6.
    pub max_card_spacing: f32,
    /// Measured card width, once known. Default: `None`.
    pub card_width: Option<f32>,
    /// Flight time of one transfer. Default: 2 s.
    pub transfer_duration: Duration,
    /// Interval between automatic transfers. Default: 1 s.
    pub cadence_interval: Duration,
}

impl StackConfig {
    /// Bounds for a stack built from this config.
    pub fn bounds(&self) -> StackBounds {
        StackBounds::for_stack(self.stack_width, self.padding, self.card_width)
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            stack_width: 520.0,
            stack_height: 140.0,
            padding: 20.0,
            max_card_spacing: 6.0,
            card_width: None,
            transfer_duration: Duration::from_millis(2000),
            cadence_interval: Duration::from_secs(1),
        }
    }
}
