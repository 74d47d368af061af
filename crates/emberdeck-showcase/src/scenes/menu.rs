#![forbid(unsafe_code)]

use emberdeck_core::animation::{Animation, Pulse};
use emberdeck_core::clock::{FrameClock, FrameTick, TickHandle};

use crate::canvas::{Color, Canvas};
use crate::scene::{Key, Scene, SceneCommand, SceneId};

const TITLE: &str = "EMBERDECK";
const ENTRIES: [SceneId; 3] = [
    SceneId::AceOfShadows,
    SceneId::MagicWords,
    SceneId::PhoenixFlame,
];
const HIGHLIGHT: Color = Color::rgb(255, 170, 40);

/// Scene picker. The selected entry pulses.
#[derive(Debug)]
pub struct MenuScene {
    selected: usize,
    pulse: Pulse,
    tick: Option<TickHandle>,
    size: (u16, u16),
}

impl MenuScene {
    pub fn new() -> Self {
        Self {
            selected: 0,
            pulse: Pulse::new(1.5),
            tick: None,
            size: (0, 0),
        }
    }

    pub fn selected(&self) -> SceneId {
        ENTRIES[self.selected]
    }

    fn entry_row(&self, index: usize) -> i32 {
        (f32::from(self.size.1) * 0.4) as i32 + index as i32 * 2
    }
}

impl Default for MenuScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for MenuScene {
    fn id(&self) -> SceneId {
        SceneId::Menu
    }

    fn on_create(&mut self, clock: &mut FrameClock) {
        self.tick = Some(clock.register("menu"));
    }

    fn tick_handle(&self) -> Option<TickHandle> {
        self.tick
    }

    fn on_update(&mut self, tick: &FrameTick) {
        if self.tick.is_none() {
            return;
        }
        self.pulse.tick(tick.delta.duration());
    }

    fn on_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
    }

    fn on_key(&mut self, key: Key) -> SceneCommand {
        match key {
            Key::Up | Key::Char('k') => {
                self.selected = (self.selected + ENTRIES.len() - 1) % ENTRIES.len();
                self.pulse.reset();
            }
            Key::Down | Key::Char('j') => {
                self.selected = (self.selected + 1) % ENTRIES.len();
                self.pulse.reset();
            }
            Key::Enter | Key::Char(' ') => return SceneCommand::Switch(self.selected()),
            Key::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.selected = index;
                return SceneCommand::Switch(ENTRIES[index]);
            }
            Key::Char('q') | Key::Escape => return SceneCommand::Quit,
            _ => {}
        }
        SceneCommand::None
    }

    fn draw(&self, canvas: &mut Canvas) {
        let title_row = (f32::from(self.size.1) * 0.2) as i32;
        canvas.put_str_centered(title_row, TITLE, Color::WHITE);

        let glow = 0.35 + 0.65 * self.pulse.value();
        for (i, id) in ENTRIES.iter().enumerate() {
            let row = self.entry_row(i);
            if i == self.selected {
                let label = format!("> {} <", id.title());
                canvas.put_str_centered(row, &label, Color::GREY.mix(HIGHLIGHT, glow));
            } else {
                canvas.put_str_centered(row, id.title(), Color::GREY);
            }
        }

        let hint_row = i32::from(self.size.1) - 2;
        canvas.put_str_centered(
            hint_row,
            "up/down select  enter open  esc esc back  q quit",
            Color::GREY,
        );
    }

    fn on_destroy(&mut self, clock: &mut FrameClock) {
        if let Some(handle) = self.tick.take() {
            clock.deregister(handle);
        }
    }
}
