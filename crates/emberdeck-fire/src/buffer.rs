#![forbid(unsafe_code)]

//! RGBA pixel buffer derived from an [`IntensityGrid`].

use crate::grid::IntensityGrid;
use crate::palette;

/// Bytes per pixel (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major RGBA8 buffer, ready to push into a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a fully transparent buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bytes: vec![0; width * height * BYTES_PER_PIXEL],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// One pixel as `[r, g, b, a]`, or `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * BYTES_PER_PIXEL;
        Some([
            self.bytes[i],
            self.bytes[i + 1],
            self.bytes[i + 2],
            self.bytes[i + 3],
        ])
    }

    /// Overwrite the buffer from `grid`.
    ///
    /// Intensity 0 is written with alpha 0 so the cold part of the flame shows
    /// whatever is behind it; every other intensity is opaque.
    ///
    /// # Panics
    ///
    /// Panics if `grid` does not have the buffer's dimensions.
    pub fn fill_from(&mut self, grid: &IntensityGrid) {
        assert_eq!(
            (grid.width(), grid.height()),
            (self.width, self.height),
            "pixel buffer and intensity grid must share dimensions"
        );
        for (px, &heat) in self
            .bytes
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(grid.cells())
        {
            let (r, g, b) = palette::color(heat);
            let a = if heat == 0 { 0 } else { 255 };
            px.copy_from_slice(&[r, g, b, a]);
        }
    }
}
