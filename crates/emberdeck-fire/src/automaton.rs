#![forbid(unsafe_code)]

//! The fire cellular automaton.
//!
//! # Step rule
//!
//! For every row `y` above the bottom and every column `x`:
//!
//! 1. read the intensity at `(x, y + 1)`;
//! 2. draw `decay` uniformly from `{0, 1, 2}`;
//! 3. write `src - (decay & 1)` (floored at 0) into
//!    `(clamp(x + decay - 1 + wind), y)`.
//!
//! Rows are visited top-down, so the row below is always read before it is
//! rewritten in the same pass: every read sees the previous step's values.
//! Cells that no column drifts into keep their old value.
//!
//! # Timing
//!
//! [`FireAutomaton::update`] converts host time into 60 Hz step units and runs
//! however many whole steps are owed, then always renders. The flame therefore
//! evolves at the same speed on a 30 Hz and a 144 Hz host.
//!
//! # No Per-Frame Allocations
//!
//! Grid and pixel buffer are allocated once at construction.

use emberdeck_core::rng::{RandomSource, Xorshift32};

use crate::buffer::PixelBuffer;
use crate::config::FireConfig;
use crate::grid::IntensityGrid;
use crate::palette::MAX_INTENSITY;
use crate::viewport::ViewportFit;

/// Hard ceiling on steps run by one [`FireAutomaton::update`] call: one
/// minute of simulation at 60 Hz.
pub const MAX_CATCH_UP_STEPS: u32 = 3_600;

/// Doom-style fire simulation plus its rendered RGBA surface.
#[derive(Debug, Clone)]
pub struct FireAutomaton<R: RandomSource = Xorshift32> {
    config: FireConfig,
    grid: IntensityGrid,
    pixels: PixelBuffer,
    rng: R,
    /// Owed simulation steps, in fractional step units.
    accumulator: f64,
    /// Whether the bottom row is held at full heat.
    fueled: bool,
    /// Extra sideways drift per step: -1, 0, or 1.
    wind: i32,
    fit: Option<ViewportFit>,
}

impl FireAutomaton<Xorshift32> {
    /// Create a fire seeded from `config.seed`.
    pub fn new(config: FireConfig) -> Self {
        let rng = Xorshift32::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl Default for FireAutomaton<Xorshift32> {
    fn default() -> Self {
        Self::new(FireConfig::default())
    }
}

impl<R: RandomSource> FireAutomaton<R> {
    /// Create a fire that draws its jitter from `rng`.
    ///
    /// The bottom row is seeded and the surface rendered once, so `pixels()`
    /// is meaningful before the first update.
    pub fn with_rng(config: FireConfig, rng: R) -> Self {
        let mut fire = Self {
            grid: IntensityGrid::new(config.width, config.height),
            pixels: PixelBuffer::new(config.width, config.height),
            config,
            rng,
            accumulator: 0.0,
            fueled: true,
            wind: 0,
            fit: None,
        };
        fire.seed_fuel();
        fire.render();
        emberdeck_core::debug!(
            width = config.width,
            height = config.height,
            "fire automaton created"
        );
        fire
    }

    /// Set every cell of the bottom row to [`MAX_INTENSITY`].
    pub fn seed_fuel(&mut self) {
        self.grid.bottom_row_mut().fill(MAX_INTENSITY);
    }

    /// Run one simulation step.
    pub fn step(&mut self) {
        let w = self.grid.width();
        let h = self.grid.height();
        if w == 0 || h == 0 {
            return;
        }

        if self.fueled {
            self.seed_fuel();
        }

        let max_x = (w - 1) as i32;
        let wind = self.wind;
        let cells = self.grid.cells_mut();
        for y in 0..h - 1 {
            let row = y * w;
            let below = row + w;
            for x in 0..w {
                let src = cells[below + x];
                let decay = self.rng.below(3);
                let dst_x = (x as i32 + decay as i32 - 1 + wind).clamp(0, max_x) as usize;
                cells[row + dst_x] = src.saturating_sub((decay & 1) as u8);
            }
        }

        if !self.fueled {
            for cell in self.grid.bottom_row_mut() {
                let cooling = (self.rng.next_u32() & 7) as u8 + 1;
                *cell = cell.saturating_sub(cooling);
            }
        }
    }

    /// Map the grid through the palette into the pixel buffer.
    pub fn render(&mut self) {
        self.pixels.fill_from(&self.grid);
    }

    /// Advance by `delta_seconds` of host time and re-render.
    ///
    /// At most [`MAX_CATCH_UP_STEPS`] steps run per call, fewer when
    /// `max_steps_per_update` is set. Owed time beyond that is dropped.
    /// Returns the number of simulation steps that ran.
    pub fn update(&mut self, delta_seconds: f64) -> u32 {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.accumulator += delta_seconds * self.config.steps_per_second;
        }

        let cap = self
            .config
            .max_steps_per_update
            .map_or(MAX_CATCH_UP_STEPS, |cap| cap.min(MAX_CATCH_UP_STEPS));
        let owed = self.accumulator.floor();
        let steps = if owed.is_finite() && owed <= f64::from(cap) {
            owed.max(0.0) as u32
        } else {
            emberdeck_core::trace!(dropped = owed, "fire catch-up capped");
            self.accumulator = if self.accumulator.is_finite() {
                self.accumulator.fract()
            } else {
                0.0
            };
            self.accumulator += f64::from(cap);
            cap
        };

        for _ in 0..steps {
            self.step();
        }
        self.accumulator -= f64::from(steps);

        self.render();
        steps
    }

    /// Fit the surface to a viewport and remember the result.
    pub fn configure_for_viewport(
        &mut self,
        width: f32,
        height: f32,
        coverage: f32,
    ) -> ViewportFit {
        let fit = ViewportFit::compute(
            self.grid.width(),
            self.grid.height(),
            width,
            height,
            coverage,
            self.config.width_overshoot,
        );
        self.fit = Some(fit);
        fit
    }

    /// Most recent viewport fit, if any.
    pub fn viewport_fit(&self) -> Option<ViewportFit> {
        self.fit
    }

    /// Cut the fuel. The bottom row cools a little every step from now on.
    pub fn extinguish(&mut self) {
        if self.fueled {
            self.fueled = false;
            emberdeck_core::debug!("fire extinguished");
        }
    }

    /// Restore the fuel and re-seed the bottom row immediately.
    pub fn ignite(&mut self) {
        self.fueled = true;
        self.seed_fuel();
        emberdeck_core::debug!("fire ignited");
    }

    /// Whether the bottom row is being held at full heat.
    pub fn is_fueled(&self) -> bool {
        self.fueled
    }

    /// Set wind direction (-1 = left, 0 = none, 1 = right).
    pub fn set_wind(&mut self, wind: i32) {
        self.wind = wind.clamp(-1, 1);
    }

    /// Current wind direction.
    pub fn wind(&self) -> i32 {
        self.wind
    }

    /// The simulation grid.
    pub fn grid(&self) -> &IntensityGrid {
        &self.grid
    }

    /// The most recently rendered surface.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Active configuration.
    pub fn config(&self) -> &FireConfig {
        &self.config
    }

    /// Owed fractional steps not yet run.
    pub fn pending_steps(&self) -> f64 {
        self.accumulator
    }
}
