#![forbid(unsafe_code)]

//! Magic Words: a dialogue revealed one line at a time, with `{emoji}`
//! references drawn inline.

use std::sync::Arc;
use std::time::Duration;

use emberdeck_core::clock::{FrameClock, FrameTick, TickHandle};

use crate::canvas::{Canvas, Color};
use crate::dialogue::{AvatarSide, DialogueScript, Token, emoji_glyph, tokenize};
use crate::scene::{Key, Scene, SceneCommand, SceneId};

/// Time between two revealed lines.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(1500);

const LEFT_SPEAKER: Color = Color::rgb(110, 200, 255);
const RIGHT_SPEAKER: Color = Color::rgb(255, 140, 200);
const EMOJI: Color = Color::rgb(255, 215, 0);

#[derive(Debug, Clone)]
struct Line {
    speaker: String,
    side: AvatarSide,
    tokens: Vec<Token>,
}

impl Line {
    /// `(text, colour)` runs in display order.
    fn spans(&self) -> Vec<(String, Color)> {
        let speaker = match self.side {
            AvatarSide::Left => LEFT_SPEAKER,
            AvatarSide::Right => RIGHT_SPEAKER,
        };
        let mut spans = vec![(format!("{}: ", self.speaker), speaker)];
        for token in &self.tokens {
            match token {
                Token::Text(text) => spans.push((text.clone(), Color::WHITE)),
                Token::Emoji(name) => spans.push((emoji_glyph(name).to_string(), EMOJI)),
            }
        }
        spans
    }
}

#[derive(Debug)]
pub struct MagicWordsScene {
    script: Arc<DialogueScript>,
    lines: Vec<Line>,
    revealed: usize,
    since_reveal: Duration,
    tick: Option<TickHandle>,
}

impl MagicWordsScene {
    pub fn new(script: Arc<DialogueScript>) -> Self {
        Self {
            script,
            lines: Vec::new(),
            revealed: 0,
            since_reveal: Duration::ZERO,
            tick: None,
        }
    }

    /// Lines currently on screen.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Tokens of line `index`, once the scene has been created.
    pub fn tokens(&self, index: usize) -> Option<&[Token]> {
        self.lines.get(index).map(|l| l.tokens.as_slice())
    }

    fn reveal_next(&mut self) {
        if self.revealed < self.lines.len() {
            self.revealed += 1;
            tracing::trace!(line = self.revealed, "dialogue line revealed");
        }
        self.since_reveal = Duration::ZERO;
    }

    fn restart(&mut self) {
        self.revealed = 0;
        self.reveal_next();
    }
}

impl Scene for MagicWordsScene {
    fn id(&self) -> SceneId {
        SceneId::MagicWords
    }

    fn on_create(&mut self, clock: &mut FrameClock) {
        self.tick = Some(clock.register("magic-words"));
        let known = self.script.emoji_names();
        self.lines = self
            .script
            .dialogue
            .iter()
            .map(|line| Line {
                speaker: line.name.clone(),
                side: self.script.side_of(&line.name),
                tokens: tokenize(&line.text, &known),
            })
            .collect();
        self.restart();
    }

    fn tick_handle(&self) -> Option<TickHandle> {
        self.tick
    }

    fn on_update(&mut self, tick: &FrameTick) {
        if self.tick.is_none() || self.revealed >= self.lines.len() {
            return;
        }
        self.since_reveal += tick.delta.duration();
        if self.since_reveal >= REVEAL_INTERVAL {
            self.reveal_next();
        }
    }

    fn on_resize(&mut self, _width: u16, _height: u16) {}

    fn on_key(&mut self, key: Key) -> SceneCommand {
        match key {
            Key::Enter | Key::Char(' ') => self.reveal_next(),
            Key::Char('r') => self.restart(),
            _ => {}
        }
        SceneCommand::None
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.put_str_centered(1, SceneId::MagicWords.title(), Color::WHITE);

        let first_row = 3;
        let rows = (i32::from(canvas.height()) - first_row - 2).max(0) as usize;
        let shown = &self.lines[..self.revealed];
        let skip = shown.len().saturating_sub(rows);
        for (row, line) in shown[skip..].iter().enumerate() {
            let y = first_row + row as i32;
            let spans = line.spans();
            let len: usize = spans.iter().map(|(text, _)| text.chars().count()).sum();
            let mut x = match line.side {
                AvatarSide::Left => 2,
                AvatarSide::Right => i32::from(canvas.width()) - len as i32 - 2,
            };
            for (text, color) in &spans {
                canvas.put_str(x, y, text, *color);
                x += text.chars().count() as i32;
            }
        }

        let hint = "enter next  r restart  esc esc menu";
        canvas.put_str_centered(i32::from(canvas.height()) - 1, hint, Color::GREY);
    }

    fn on_destroy(&mut self, clock: &mut FrameClock) {
        if let Some(handle) = self.tick.take() {
            clock.deregister(handle);
        }
    }
}
