#![forbid(unsafe_code)]

//! Fire configuration.

/// Tunables for [`FireAutomaton`](crate::FireAutomaton).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireConfig {
    /// Grid width in cells. Default: 200.
    pub width: usize,
    /// Grid height in cells. Default: 140.
    pub height: usize,
    /// Simulation steps per second of host time. Default: 60.
    pub steps_per_second: f64,
    /// Horizontal overshoot applied when fitting to a viewport so the flame
    /// bleeds past both edges. Default: 1.05.
    pub width_overshoot: f32,
    /// Upper bound on steps run by one `update` call. Excess accumulated time
    /// is dropped. Default: `None` (run every owed step up to
    /// [`MAX_CATCH_UP_STEPS`](crate::automaton::MAX_CATCH_UP_STEPS)).
    pub max_steps_per_update: Option<u32>,
    /// RNG seed. Default: [`Xorshift32::DEFAULT_SEED`](emberdeck_core::rng::Xorshift32::DEFAULT_SEED).
    pub seed: u32,
}

impl FireConfig {
    /// Config with custom grid dimensions and defaults elsewhere.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 140,
            steps_per_second: 60.0,
            width_overshoot: 1.05,
            max_steps_per_update: None,
            seed: emberdeck_core::rng::Xorshift32::DEFAULT_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = FireConfig::default();
        assert_eq!((cfg.width, cfg.height), (200, 140));
        assert!((cfg.steps_per_second - 60.0).abs() < f64::EPSILON);
        assert!((cfg.width_overshoot - 1.05).abs() < f32::EPSILON);
        assert_eq!(cfg.max_steps_per_update, None);
    }

    #[test]
    fn with_size_keeps_other_defaults() {
        let cfg = FireConfig::with_size(10, 4);
        assert_eq!((cfg.width, cfg.height), (10, 4));
        assert_eq!(cfg.seed, FireConfig::default().seed);
    }
}
