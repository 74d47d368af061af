#![forbid(unsafe_code)]

//! Row-major grid of fire intensities.

use crate::palette::MAX_INTENSITY;

/// Rectangular buffer of palette indices, row 0 at the top.
///
/// The grid is allocated once and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl IntensityGrid {
    /// Allocate a cold grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Intensity at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Set `(x, y)`; values above [`MAX_INTENSITY`] are clamped. Out-of-range
    /// coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, intensity: u8) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = intensity.min(MAX_INTENSITY);
        }
    }

    /// One row as a slice.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Mutable access to one row.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// The bottom row (the fuel source), empty for a zero-height grid.
    pub fn bottom_row_mut(&mut self) -> &mut [u8] {
        match self.height.checked_sub(1) {
            Some(last) => self.row_mut(last),
            None => &mut [],
        }
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Mutable cells, row-major. Callers must keep values within
    /// `0..=MAX_INTENSITY`.
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Reset every cell to 0.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}
