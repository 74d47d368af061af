#![forbid(unsafe_code)]

//! Ace of Shadows: a deck that deals itself from one stack to another, one
//! card per second.
//!
//! Stack geometry is in world units; one terminal cell is
//! [`AceConfig::cell_size`] units, so the 520-unit stacks fit an 80-column
//! terminal.

use emberdeck_core::clock::{FrameClock, FrameTick, TickHandle};
use emberdeck_core::geometry::Point;
use emberdeck_stack::{
    Align, AutoTransfer, PairPolicy, StackBoard, StackConfig, StackId, TransferEvent,
};

use crate::canvas::{Canvas, Cell, Color};
use crate::scene::{Key, Scene, SceneCommand, SceneId};

const CARD_FACE: Color = Color::rgb(46, 64, 120);
const CARD_FACE_ALT: Color = Color::rgb(38, 52, 100);
const CARD_EDGE: Color = Color::rgb(200, 200, 230);
const FRAME: Color = Color::rgb(90, 90, 90);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AceConfig {
    /// Cards dealt onto the top stack at creation. Default: 144.
    pub card_count: u32,
    /// Card width in world units, applied after the first layout. Default: 48.
    pub card_width: f32,
    /// Vertical position of the top stack as a fraction of the viewport. Default: 0.35.
    pub top_y: f32,
    /// Vertical position of the bottom stack. Default: 0.65.
    pub bottom_y: f32,
    /// World units per terminal cell `(x, y)`. Default: `(8, 16)`.
    pub cell_size: (f32, f32),
    pub stacks: StackConfig,
}

impl Default for AceConfig {
    fn default() -> Self {
        Self {
            card_count: 144,
            card_width: 48.0,
            top_y: 0.35,
            bottom_y: 0.65,
            cell_size: (8.0, 16.0),
            stacks: StackConfig::default(),
        }
    }
}

#[derive(Debug)]
pub struct AceOfShadowsScene {
    config: AceConfig,
    board: StackBoard,
    top: StackId,
    bottom: StackId,
    auto: AutoTransfer,
    tick: Option<TickHandle>,
    size: (u16, u16),
    landed: usize,
}

impl AceOfShadowsScene {
    pub fn new(config: AceConfig) -> Self {
        let mut board = StackBoard::new(config.stacks);
        let top = board.add_stack(Align::Center);
        let bottom = board.add_stack(Align::Left);
        let auto = AutoTransfer::new(
            config.stacks.cadence_interval,
            PairPolicy::Fixed {
                source: top,
                target: bottom,
            },
        );
        Self {
            config,
            board,
            top,
            bottom,
            auto,
            tick: None,
            size: (0, 0),
            landed: 0,
        }
    }

    pub fn board(&self) -> &StackBoard {
        &self.board
    }

    pub fn top(&self) -> StackId {
        self.top
    }

    pub fn bottom(&self) -> StackId {
        self.bottom
    }

    /// Cards that have finished a transfer since the scene was created.
    pub fn landed(&self) -> usize {
        self.landed
    }

    fn reverse(&mut self) {
        if let PairPolicy::Fixed { source, target } = self.auto.policy() {
            self.auto.set_policy(PairPolicy::Fixed {
                source: target,
                target: source,
            });
            tracing::debug!(
                source = target.index(),
                target = source.index(),
                "deal direction reversed"
            );
        }
    }

    fn to_cell(&self, p: Point) -> (i32, i32) {
        let (cw, ch) = self.config.cell_size;
        ((p.x / cw).floor() as i32, (p.y / ch).floor() as i32)
    }

    fn draw_card(&self, canvas: &mut Canvas, center: Point, shade: bool) {
        let half = self.config.card_width / 2.0;
        let (x0, cy) = self.to_cell(Point::new(center.x - half, center.y));
        let (x1, _) = self.to_cell(Point::new(center.x + half, center.y));
        let face = if shade { CARD_FACE_ALT } else { CARD_FACE };
        for y in cy - 1..=cy + 1 {
            for x in x0..=x1 {
                let glyph = if x == x0 { '▏' } else { ' ' };
                canvas.set(
                    x,
                    y,
                    Cell {
                        glyph,
                        fg: CARD_EDGE,
                        bg: face,
                    },
                );
            }
        }
    }

    fn draw_frame(&self, canvas: &mut Canvas, origin: Point) {
        let stacks = &self.config.stacks;
        let (x0, y0) = self.to_cell(Point::new(
            origin.x - stacks.stack_width / 2.0,
            origin.y - stacks.stack_height / 2.0,
        ));
        let (x1, y1) = self.to_cell(Point::new(
            origin.x + stacks.stack_width / 2.0,
            origin.y + stacks.stack_height / 2.0,
        ));
        for x in x0 + 1..x1 {
            canvas.put(x, y0, '─', FRAME);
            canvas.put(x, y1, '─', FRAME);
        }
        for y in y0 + 1..y1 {
            canvas.put(x0, y, '│', FRAME);
            canvas.put(x1, y, '│', FRAME);
        }
        canvas.put(x0, y0, '┌', FRAME);
        canvas.put(x1, y0, '┐', FRAME);
        canvas.put(x0, y1, '└', FRAME);
        canvas.put(x1, y1, '┘', FRAME);
    }

    fn stack_origin(&self, fraction: f32) -> Point {
        let (cw, ch) = self.config.cell_size;
        Point::new(
            f32::from(self.size.0) * cw / 2.0,
            f32::from(self.size.1) * ch * fraction,
        )
    }
}

impl Default for AceOfShadowsScene {
    fn default() -> Self {
        Self::new(AceConfig::default())
    }
}

impl Scene for AceOfShadowsScene {
    fn id(&self) -> SceneId {
        SceneId::AceOfShadows
    }

    fn on_create(&mut self, clock: &mut FrameClock) {
        self.tick = Some(clock.register("ace-of-shadows"));
        // The deck is laid out before the card art is measured, then again
        // once the width is known.
        if let Err(err) = self.board.deal(self.top, self.config.card_count) {
            tracing::warn!(%err, "could not deal the deck");
        }
        self.board.set_card_width(self.config.card_width);
    }

    fn tick_handle(&self) -> Option<TickHandle> {
        self.tick
    }

    fn on_update(&mut self, tick: &FrameTick) {
        if self.tick.is_none() {
            return;
        }
        let dt = tick.delta.duration();
        if let Err(err) = self.auto.tick(&mut self.board, dt) {
            tracing::warn!(%err, "automatic transfer rejected");
        }
        self.board.advance(dt);
        for event in self.board.drain_events() {
            if let TransferEvent::Landed { .. } = event {
                self.landed += 1;
            }
        }
    }

    fn on_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        let top = self.stack_origin(self.config.top_y);
        let bottom = self.stack_origin(self.config.bottom_y);
        self.board.set_stack_origin(self.top, top);
        self.board.set_stack_origin(self.bottom, bottom);
    }

    fn on_key(&mut self, key: Key) -> SceneCommand {
        if key == Key::Char('r') {
            self.reverse();
        }
        SceneCommand::None
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.put_str_centered(1, SceneId::AceOfShadows.title(), Color::WHITE);
        let status = format!(
            "top {}  bottom {}  in flight {}",
            self.board.stack(self.top).map_or(0, |s| s.len()),
            self.board.stack(self.bottom).map_or(0, |s| s.len()),
            self.board.in_flight().len()
        );
        canvas.put_str_centered(2, &status, Color::GREY);

        let stacks = [
            (self.top, self.config.top_y),
            (self.bottom, self.config.bottom_y),
        ];
        for (stack, fraction) in stacks {
            self.draw_frame(canvas, self.stack_origin(fraction));
            let Ok(s) = self.board.stack(stack) else {
                continue;
            };
            for index in 0..s.len() {
                if let Some(p) = self.board.card_global_position(stack, index) {
                    self.draw_card(canvas, p, s.cards()[index].id().0 % 2 == 1);
                }
            }
        }
        for flight in self.board.in_flight() {
            self.draw_card(canvas, flight.position(), flight.card().id().0 % 2 == 1);
        }

        let hint = "r reverse  esc esc menu";
        canvas.put_str_centered(i32::from(canvas.height()) - 1, hint, Color::GREY);
    }

    fn on_destroy(&mut self, clock: &mut FrameClock) {
        let dropped = self.board.cancel_all();
        self.board.drain_events();
        if let Some(handle) = self.tick.take() {
            clock.deregister(handle);
        }
        tracing::debug!(cancelled = dropped.len(), "ace of shadows torn down");
    }
}
