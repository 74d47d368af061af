#![forbid(unsafe_code)]

//! Cell grid that scenes draw into.
//!
//! The canvas knows nothing about terminals; the presenter turns it into
//! escape sequences and the headless runner simply drops it.

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const GREY: Self = Self::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]`.
    pub fn mix(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::rgb(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

/// One character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize and clear.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write one cell; off-canvas writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Change a cell's glyph and foreground, keeping its background.
    pub fn put(&mut self, x: i32, y: i32, glyph: char, fg: Color) {
        if let Some(i) = self.index(x, y) {
            let cell = &mut self.cells[i];
            cell.glyph = glyph;
            cell.fg = fg;
        }
    }

    pub fn put_str(&mut self, x: i32, y: i32, text: &str, fg: Color) {
        for (dx, ch) in text.chars().enumerate() {
            self.put(x + dx as i32, y, ch, fg);
        }
    }

    /// Write `text` centred on row `y`.
    pub fn put_str_centered(&mut self, y: i32, text: &str, fg: Color) {
        let len = text.chars().count() as i32;
        let x = (i32::from(self.width) - len) / 2;
        self.put_str(x, y, text, fg);
    }

    /// Right-aligned on row `y`, leaving `margin` cells free.
    pub fn put_str_right(&mut self, y: i32, margin: i32, text: &str, fg: Color) {
        let len = text.chars().count() as i32;
        self.put_str(i32::from(self.width) - len - margin, y, text, fg);
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Glyphs of row `y` as a string; empty outside the canvas.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .map(|c| c.glyph)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_canvas_writes_are_ignored() {
        let mut canvas = Canvas::new(4, 2);
        canvas.put_str(2, 0, "abcd", Color::WHITE);
        canvas.put(-1, 0, 'x', Color::WHITE);
        canvas.put(0, 5, 'x', Color::WHITE);
        assert_eq!(canvas.row_text(0), "  ab");
        assert_eq!(canvas.row_text(1), "    ");
        assert_eq!(canvas.row_text(2), "");
    }

    #[test]
    fn centered_and_right_aligned_text() {
        let mut canvas = Canvas::new(10, 2);
        canvas.put_str_centered(0, "abcd", Color::WHITE);
        canvas.put_str_right(1, 1, "fps", Color::GREEN);
        assert_eq!(canvas.row_text(0), "   abcd   ");
        assert_eq!(canvas.row_text(1), "      fps ");
        assert_eq!(canvas.get(6, 1).map(|c| c.fg), Some(Color::GREEN));
    }

    #[test]
    fn put_keeps_background() {
        let mut canvas = Canvas::new(1, 1);
        canvas.set(
            0,
            0,
            Cell {
                glyph: ' ',
                fg: Color::WHITE,
                bg: Color::GREY,
            },
        );
        canvas.put(0, 0, '#', Color::GREEN);
        let cell = canvas.get(0, 0).unwrap();
        assert_eq!((cell.glyph, cell.fg, cell.bg), ('#', Color::GREEN, Color::GREY));
    }

    #[test]
    fn resize_clears() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put(0, 0, 'x', Color::WHITE);
        canvas.resize(3, 1);
        assert_eq!(canvas.row_text(0), "   ");
        assert_eq!(canvas.rows().count(), 1);
    }

    #[test]
    fn mix_blends_and_clamps() {
        assert_eq!(Color::BLACK.mix(Color::WHITE, 0.5), Color::rgb(128, 128, 128));
        assert_eq!(Color::BLACK.mix(Color::WHITE, 4.0), Color::WHITE);
    }
}
