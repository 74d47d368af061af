#![forbid(unsafe_code)]

//! Scene host: owns the clock, the live scene and the FPS overlay.
//!
//! Only one scene is alive at a time. Switching destroys the current scene
//! before the next one is created, so a scene's tick subscriptions and
//! in-flight work never overlap with its successor's.

use std::time::Duration;

use emberdeck_core::clock::{FrameClock, FrameTick};

use crate::canvas::{Canvas, Color};
use crate::fps::FpsCounter;
use crate::scene::{Key, Scene, SceneCommand, SceneId};
use crate::scenes::{SceneAssets, build_scene};

/// Two ESC presses closer together than this return to the menu.
pub const ESCAPE_WINDOW: Duration = Duration::from_millis(500);

pub struct SceneHost {
    clock: FrameClock,
    assets: SceneAssets,
    current: Box<dyn Scene>,
    size: (u16, u16),
    fps: FpsCounter,
    show_fps: bool,
    last_escape: Option<Duration>,
    quit: bool,
}

impl std::fmt::Debug for SceneHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneHost")
            .field("scene", &self.current.id())
            .field("size", &self.size)
            .field("frame", &self.clock.frame())
            .field("quit", &self.quit)
            .finish()
    }
}

impl SceneHost {
    /// Create the host with `start` already created and sized.
    pub fn new(assets: SceneAssets, start: SceneId, width: u16, height: u16) -> Self {
        let mut clock = FrameClock::new();
        let mut current = build_scene(start, &assets);
        current.on_create(&mut clock);
        current.on_resize(width, height);
        tracing::info!(scene = start.slug(), width, height, "showcase started");
        Self {
            clock,
            assets,
            current,
            size: (width, height),
            fps: FpsCounter::new(),
            show_fps: true,
            last_escape: None,
            quit: false,
        }
    }

    pub fn current(&self) -> SceneId {
        self.current.id()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn fps(&self) -> &FpsCounter {
        &self.fps
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn set_show_fps(&mut self, show: bool) {
        self.show_fps = show;
    }

    /// Destroy the current scene, then create `id` in its place.
    pub fn change_scene(&mut self, id: SceneId) {
        let from = self.current.id();
        self.current.on_destroy(&mut self.clock);
        let leaked = self.clock.active_subscriptions();
        if leaked > 0 {
            let labels: Vec<_> = self.clock.labels().collect();
            tracing::warn!(
                scene = from.slug(),
                leaked,
                ?labels,
                "scene left tick subscriptions behind"
            );
        }

        let mut next = build_scene(id, &self.assets);
        next.on_create(&mut self.clock);
        next.on_resize(self.size.0, self.size.1);
        self.current = next;
        self.last_escape = None;
        tracing::info!(from = from.slug(), to = id.slug(), "scene changed");
    }

    /// Advance one frame of `dt` and update the live scene.
    pub fn frame(&mut self, dt: Duration) -> FrameTick {
        let tick = self.clock.advance(dt);
        if self
            .current
            .tick_handle()
            .is_some_and(|handle| self.clock.is_registered(handle))
        {
            self.current.on_update(&tick);
        }
        if let Some(fps) = self.fps.tick(dt) {
            tracing::trace!(fps, "fps window closed");
        }
        tick
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == Key::Interrupt {
            tracing::debug!("interrupt received");
            self.quit = true;
            return;
        }
        if key == Key::Escape && self.current.id() != SceneId::Menu {
            let now = self.clock.elapsed();
            match self.last_escape {
                Some(at) if now.saturating_sub(at) <= ESCAPE_WINDOW => {
                    self.change_scene(SceneId::Menu);
                }
                _ => self.last_escape = Some(now),
            }
            return;
        }
        if key == Key::Char('f') && self.current.id() == SceneId::Menu {
            self.show_fps = !self.show_fps;
            return;
        }
        match self.current.on_key(key) {
            SceneCommand::None => {}
            SceneCommand::Switch(id) => self.change_scene(id),
            SceneCommand::Quit => self.quit = true,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if self.size == (width, height) {
            return;
        }
        self.size = (width, height);
        self.current.on_resize(width, height);
        tracing::debug!(width, height, "viewport resized");
    }

    /// Draw the live scene and the FPS overlay into `canvas`, resizing it to
    /// the host's viewport first.
    pub fn draw(&self, canvas: &mut Canvas) {
        if (canvas.width(), canvas.height()) == self.size {
            canvas.clear();
        } else {
            canvas.resize(self.size.0, self.size.1);
        }
        self.current.draw(canvas);
        if self.show_fps {
            canvas.put_str_right(0, 1, &self.fps.label(), Color::GREEN);
        }
    }

    /// Destroy the live scene and hand back the clock for inspection.
    pub fn shutdown(mut self) -> FrameClock {
        self.current.on_destroy(&mut self.clock);
        tracing::info!(
            scene = self.current.id().slug(),
            frames = self.clock.frame(),
            leaked = self.clock.active_subscriptions(),
            "showcase stopped"
        );
        self.clock
    }
}
