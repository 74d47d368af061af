#![forbid(unsafe_code)]

//! Terminal session and canvas presenter.
//!
//! [`TerminalSession`] owns raw mode and the alternate screen and restores
//! both in `Drop`, on every exit path. A panic hook restores the terminal
//! before the panic message is printed.
//!
//! [`Presenter`] writes a [`Canvas`] as truecolor escape sequences, only
//! emitting cells that changed since the previous frame.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, queue, terminal};

use crate::canvas::{Canvas, Cell, Color};
use crate::scene::Key;

/// Input the run loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Resize(u16, u16),
}

/// RAII guard for raw mode and the alternate screen.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen: bool,
}

impl TerminalSession {
    pub fn new() -> io::Result<Self> {
        install_panic_hook();
        terminal::enable_raw_mode()?;
        tracing::info!("terminal raw mode enabled");

        let mut session = Self {
            alternate_screen: false,
        };
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        session.alternate_screen = true;
        crossterm::execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
        Ok(session)
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for input. `Ok(None)` on timeout or on events the
    /// showcase ignores.
    pub fn poll_input(&self, timeout: Duration) -> io::Result<Option<Input>> {
        if !crossterm::event::poll(timeout)? {
            return Ok(None);
        }
        Ok(map_event(crossterm::event::read()?))
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();
        let _ = crossterm::execute!(stdout, cursor::Show);
        if self.alternate_screen {
            let _ = crossterm::execute!(stdout, terminal::LeaveAlternateScreen);
            self.alternate_screen = false;
        }
        let _ = terminal::disable_raw_mode();
        tracing::info!("terminal restored");
        let _ = stdout.flush();
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, cursor::Show);
    let _ = crossterm::execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();
}

fn map_event(event: Event) -> Option<Input> {
    match event {
        Event::Key(key) => map_key_event(key).map(Input::Key),
        Event::Resize(width, height) => Some(Input::Resize(width, height)),
        _ => None,
    }
}

fn map_key_event(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::Interrupt),
            _ => None,
        };
    }
    match event.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

fn term_color(color: Color) -> crossterm::style::Color {
    crossterm::style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Diffing canvas writer.
#[derive(Debug, Default)]
pub struct Presenter {
    previous: Option<Canvas>,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame so the next present repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Write the cells of `canvas` that differ from the last presented frame
    /// and flush. Returns the number of cells written.
    pub fn present<W: Write>(&mut self, out: &mut W, canvas: &Canvas) -> io::Result<usize> {
        let previous = self
            .previous
            .as_ref()
            .filter(|p| p.width() == canvas.width() && p.height() == canvas.height());
        if previous.is_none() {
            queue!(out, terminal::Clear(terminal::ClearType::All))?;
        }

        let mut written = 0;
        let mut pen: Option<(Color, Color)> = None;
        let mut cursor_at: Option<(u16, u16)> = None;
        for (y, row) in canvas.rows().enumerate() {
            let y = y as u16;
            for (x, cell) in row.iter().enumerate() {
                let x = x as u16;
                let old = previous.and_then(|p| p.get(i32::from(x), i32::from(y)));
                if old == Some(cell) {
                    continue;
                }
                if cursor_at != Some((x, y)) {
                    queue!(out, cursor::MoveTo(x, y))?;
                }
                write_cell(out, cell, &mut pen)?;
                cursor_at = Some((x + 1, y));
                written += 1;
            }
        }
        out.flush()?;
        self.previous = Some(canvas.clone());
        Ok(written)
    }
}

fn write_cell<W: Write>(
    out: &mut W,
    cell: &Cell,
    pen: &mut Option<(Color, Color)>,
) -> io::Result<()> {
    let (fg, bg) = (cell.fg, cell.bg);
    match *pen {
        Some((pen_fg, pen_bg)) if (pen_fg, pen_bg) == (fg, bg) => {}
        Some((pen_fg, _)) if pen_fg == fg => queue!(out, SetBackgroundColor(term_color(bg)))?,
        Some((_, pen_bg)) if pen_bg == bg => queue!(out, SetForegroundColor(term_color(fg)))?,
        _ => queue!(
            out,
            SetForegroundColor(term_color(fg)),
            SetBackgroundColor(term_color(bg))
        )?,
    }
    *pen = Some((fg, bg));
    queue!(out, Print(cell.glyph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_keys() {
        assert_eq!(
            map_key_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Key::Escape)
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Interrupt)
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Key::Char('j'))
        );
        assert_eq!(map_key_event(key(KeyCode::Tab, KeyModifiers::NONE)), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut event = key(KeyCode::Enter, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key_event(event), None);
    }

    #[test]
    fn resize_events_pass_through() {
        assert_eq!(map_event(Event::Resize(100, 30)), Some(Input::Resize(100, 30)));
        assert_eq!(map_event(Event::FocusGained), None);
    }

    #[test]
    fn first_present_writes_every_cell() {
        let mut presenter = Presenter::new();
        let canvas = Canvas::new(4, 2);
        let mut out = Vec::new();
        assert_eq!(presenter.present(&mut out, &canvas).unwrap(), 8);
        assert!(!out.is_empty());
    }

    #[test]
    fn unchanged_frame_writes_nothing() {
        let mut presenter = Presenter::new();
        let mut canvas = Canvas::new(4, 2);
        canvas.put_str(0, 0, "ab", Color::GREEN);
        presenter.present(&mut Vec::new(), &canvas).unwrap();

        let mut out = Vec::new();
        assert_eq!(presenter.present(&mut out, &canvas).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn only_changed_cells_are_written() {
        let mut presenter = Presenter::new();
        let mut canvas = Canvas::new(10, 3);
        presenter.present(&mut Vec::new(), &canvas).unwrap();

        canvas.put_str(2, 1, "hi", Color::WHITE);
        let mut out = Vec::new();
        assert_eq!(presenter.present(&mut out, &canvas).unwrap(), 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("hi"));
    }

    #[test]
    fn size_change_repaints() {
        let mut presenter = Presenter::new();
        presenter
            .present(&mut Vec::new(), &Canvas::new(3, 3))
            .unwrap();
        let written = presenter
            .present(&mut Vec::new(), &Canvas::new(5, 2))
            .unwrap();
        assert_eq!(written, 10);
        presenter.invalidate();
        let written = presenter
            .present(&mut Vec::new(), &Canvas::new(5, 2))
            .unwrap();
        assert_eq!(written, 10);
    }
}
