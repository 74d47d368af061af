#![forbid(unsafe_code)]

//! Scene lifecycle.
//!
//! A scene is created once, updated every frame, drawn every frame, and
//! destroyed exactly once when the host switches away from it. Anything a
//! scene registers with the [`FrameClock`] in [`Scene::on_create`] it must
//! release in [`Scene::on_destroy`]. The host only delivers ticks to a scene
//! whose [`TickHandle`] is still registered.

use emberdeck_core::clock::{FrameClock, FrameTick, TickHandle};

use crate::canvas::Canvas;

/// Keys the showcase reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Char(char),
    /// Ctrl+C.
    Interrupt,
}

/// Every scene the host can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Menu,
    AceOfShadows,
    MagicWords,
    PhoenixFlame,
}

impl SceneId {
    pub const ALL: &'static [SceneId] = &[
        SceneId::Menu,
        SceneId::AceOfShadows,
        SceneId::MagicWords,
        SceneId::PhoenixFlame,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            SceneId::Menu => "Menu",
            SceneId::AceOfShadows => "Ace of Shadows",
            SceneId::MagicWords => "Magic Words",
            SceneId::PhoenixFlame => "Phoenix Flame",
        }
    }

    /// Short name accepted by `--scene`.
    pub const fn slug(self) -> &'static str {
        match self {
            SceneId::Menu => "menu",
            SceneId::AceOfShadows => "ace",
            SceneId::MagicWords => "words",
            SceneId::PhoenixFlame => "fire",
        }
    }

    /// Parse a slug, a title (case-insensitive) or a 0-based registry index.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return Self::ALL.get(n).copied();
        }
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.slug().eq_ignore_ascii_case(s) || id.title().eq_ignore_ascii_case(s))
    }
}

/// What a scene asks the host to do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneCommand {
    #[default]
    None,
    Switch(SceneId),
    Quit,
}

/// A screen of the showcase.
pub trait Scene {
    fn id(&self) -> SceneId;

    /// Called once, before the first resize or update.
    fn on_create(&mut self, clock: &mut FrameClock);

    /// The subscription taken in `on_create`, while it is held.
    fn tick_handle(&self) -> Option<TickHandle>;

    /// Called once per frame while [`Scene::tick_handle`] is registered.
    fn on_update(&mut self, tick: &FrameTick);

    /// Called after creation and whenever the viewport changes size.
    fn on_resize(&mut self, width: u16, height: u16);

    fn on_key(&mut self, key: Key) -> SceneCommand {
        let _ = key;
        SceneCommand::None
    }

    fn draw(&self, canvas: &mut Canvas);

    /// Called once; must release everything registered in `on_create`.
    fn on_destroy(&mut self, clock: &mut FrameClock);
}
