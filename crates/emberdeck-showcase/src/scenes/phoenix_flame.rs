#![forbid(unsafe_code)]

//! Phoenix Flame: the fire automaton stretched over the bottom of the
//! terminal.
//!
//! Each cell shows two vertical pixels with an upper half block, so the
//! viewport handed to the fire is `columns × rows * 2`.

use emberdeck_core::clock::{FrameClock, FrameTick, TickHandle};
use emberdeck_core::geometry::Point;
use emberdeck_fire::{FireAutomaton, FireConfig};

use crate::canvas::{Canvas, Cell, Color};
use crate::scene::{Key, Scene, SceneCommand, SceneId};

/// Fraction of the viewport height the flame covers.
pub const COVERAGE: f32 = 0.75;

#[derive(Debug)]
pub struct PhoenixFlameScene {
    fire: FireAutomaton,
    tick: Option<TickHandle>,
}

impl PhoenixFlameScene {
    pub fn new(config: FireConfig) -> Self {
        Self {
            fire: FireAutomaton::new(config),
            tick: None,
        }
    }

    pub fn fire(&self) -> &FireAutomaton {
        &self.fire
    }

    /// Colour of the viewport pixel at `(x, y)`, or `None` where the flame is
    /// cold or absent.
    fn sample(&self, x: f32, y: f32) -> Option<Color> {
        let fit = self.fire.viewport_fit()?;
        let grid = self.fire.grid();
        let (gx, gy) = fit.cell_at(Point::new(x, y), grid.width(), grid.height())?;
        let [r, g, b, a] = self.fire.pixels().pixel(gx, gy)?;
        (a != 0).then_some(Color::rgb(r, g, b))
    }
}

impl Default for PhoenixFlameScene {
    fn default() -> Self {
        Self::new(FireConfig::default())
    }
}

impl Scene for PhoenixFlameScene {
    fn id(&self) -> SceneId {
        SceneId::PhoenixFlame
    }

    fn on_create(&mut self, clock: &mut FrameClock) {
        self.tick = Some(clock.register("phoenix-flame"));
    }

    fn tick_handle(&self) -> Option<TickHandle> {
        self.tick
    }

    fn on_update(&mut self, tick: &FrameTick) {
        if self.tick.is_none() {
            return;
        }
        self.fire.update(tick.delta.as_secs_f64());
    }

    fn on_resize(&mut self, width: u16, height: u16) {
        self.fire.configure_for_viewport(f32::from(width), f32::from(height) * 2.0, COVERAGE);
    }

    fn on_key(&mut self, key: Key) -> SceneCommand {
        match key {
            Key::Char(' ') => {
                if self.fire.is_fueled() {
                    self.fire.extinguish();
                } else {
                    self.fire.ignite();
                }
            }
            Key::Left => self.fire.set_wind(self.fire.wind() - 1),
            Key::Right => self.fire.set_wind(self.fire.wind() + 1),
            _ => {}
        }
        SceneCommand::None
    }

    fn draw(&self, canvas: &mut Canvas) {
        let (width, height) = (i32::from(canvas.width()), i32::from(canvas.height()));
        for cy in 0..height {
            for cx in 0..width {
                let px = cx as f32 + 0.5;
                let upper = self.sample(px, cy as f32 * 2.0 + 0.5);
                let lower = self.sample(px, cy as f32 * 2.0 + 1.5);
                if upper.is_none() && lower.is_none() {
                    continue;
                }
                canvas.set(
                    cx,
                    cy,
                    Cell {
                        glyph: '▀',
                        fg: upper.unwrap_or(Color::BLACK),
                        bg: lower.unwrap_or(Color::BLACK),
                    },
                );
            }
        }

        canvas.put_str_centered(1, SceneId::PhoenixFlame.title(), Color::WHITE);
        let fuel = if self.fire.is_fueled() { "on" } else { "off" };
        let status = format!("fuel {fuel}  wind {:+}", self.fire.wind());
        canvas.put_str_centered(2, &status, Color::GREY);
        let hint = "space fuel  left/right wind  esc esc menu";
        canvas.put_str_centered(height - 1, hint, Color::GREY);
    }

    fn on_destroy(&mut self, clock: &mut FrameClock) {
        if let Some(handle) = self.tick.take() {
            clock.deregister(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn running(width: u16, height: u16) -> (PhoenixFlameScene, FrameClock) {
        let mut clock = FrameClock::new();
        let mut scene = PhoenixFlameScene::default();
        scene.on_create(&mut clock);
        scene.on_resize(width, height);
        (scene, clock)
    }

    #[test]
    fn resize_fits_fire_to_double_height() {
        let (scene, _) = running(80, 24);
        let fit = scene.fire().viewport_fit().unwrap();
        assert!((fit.scale_y - 48.0 * COVERAGE / 140.0).abs() < 1e-5);
        assert!((fit.offset_y - 12.0).abs() < 1e-4);
    }

    #[test]
    fn bottom_rows_burn_top_rows_stay_dark() {
        let (mut scene, mut clock) = running(40, 12);
        // One second of simulation lets the flame climb past the bottom cells.
        for _ in 0..60 {
            let tick = clock.advance(Duration::from_micros(16_667));
            scene.on_update(&tick);
        }
        let mut canvas = Canvas::new(40, 12);
        scene.draw(&mut canvas);
        let bottom = canvas.get(20, 11).unwrap();
        assert_eq!(bottom.glyph, '▀');
        assert_ne!(bottom.bg, Color::BLACK);
        // Above the covered band nothing is drawn.
        assert_eq!(canvas.get(20, 0).unwrap().bg, Color::BLACK);
        assert_eq!(canvas.get(20, 0).unwrap().glyph, ' ');
    }

    #[test]
    fn updates_advance_the_simulation() {
        let (mut scene, mut clock) = running(40, 12);
        let before = scene.fire().grid().cells().to_vec();
        for _ in 0..10 {
            let tick = clock.advance(Duration::from_millis(16));
            scene.on_update(&tick);
        }
        assert_ne!(scene.fire().grid().cells(), before.as_slice());
    }

    #[test]
    fn keys_control_fuel_and_wind() {
        let (mut scene, _) = running(40, 12);
        scene.on_key(Key::Char(' '));
        assert!(!scene.fire().is_fueled());
        scene.on_key(Key::Char(' '));
        assert!(scene.fire().is_fueled());
        scene.on_key(Key::Left);
        scene.on_key(Key::Left);
        assert_eq!(scene.fire().wind(), -1);
        scene.on_key(Key::Right);
        assert_eq!(scene.fire().wind(), 0);
    }

    #[test]
    fn destroy_releases_tick_and_stops_updates() {
        let (mut scene, mut clock) = running(10, 5);
        scene.on_destroy(&mut clock);
        assert_eq!(clock.active_subscriptions(), 0);
        let before = scene.fire().grid().cells().to_vec();
        for _ in 0..10 {
            scene.on_update(&clock.advance(Duration::from_millis(16)));
        }
        assert_eq!(scene.fire().grid().cells(), before.as_slice());
    }
}
