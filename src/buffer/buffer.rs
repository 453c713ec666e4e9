//! Buffer: A grid of cells representing the terminal screen.
//!
//! Cells are stored contiguously in row-major order: `index = y * width + x`.

use super::cell::{Cell, Modifiers, Rgb};
use crate::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Text style used by [`Buffer::draw_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// Create a style from colors with no modifiers.
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Add modifiers (builder pattern).
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A grid of cells representing the terminal screen.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Buffer {
    /// Create a new buffer filled with empty cells.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Buffer dimensions must be non-zero");
        Self {
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full area covered by this buffer.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Fill a rectangular region with a cell, clipped to the buffer.
    pub fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        let rect = rect.intersection(&self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Clear the entire buffer.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Draw text starting at (x, y), stopping at `max_x` (exclusive).
    ///
    /// Graphemes are placed by display width; a wide grapheme that would
    /// straddle `max_x` is dropped. Returns the number of columns used.
    pub fn draw_text(&mut self, x: u16, y: u16, max_x: u16, text: &str, style: Style) -> u16 {
        let max_x = max_x.min(self.width);
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let width = u16::try_from(grapheme.width()).unwrap_or(u16::MAX);
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) > max_x {
                break;
            }
            let Some(c) = grapheme.chars().next() else {
                continue;
            };
            let cell = Cell::new(c)
                .with_fg(style.fg)
                .with_bg(style.bg)
                .with_modifiers(style.modifiers);
            self.set(col, y, cell);
            for extra in 1..width {
                self.set(col + extra, y, Cell::wide_continuation().with_bg(style.bg));
            }
            col += width;
        }
        col - x
    }

    /// Resize the buffer, preserving content where possible.
    pub fn resize(&mut self, new_width: u16, new_height: u16) {
        if new_width == self.width && new_height == self.height {
            return;
        }

        let mut resized = Self::new(new_width, new_height);
        let copy_width = usize::from(self.width.min(new_width));
        for y in 0..usize::from(self.height.min(new_height)) {
            let old_start = y * usize::from(self.width);
            let new_start = y * usize::from(new_width);
            resized.cells[new_start..new_start + copy_width]
                .copy_from_slice(&self.cells[old_start..old_start + copy_width]);
        }
        *self = resized;
    }

    /// Read back one row as a string (continuation cells skipped).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.is_wide_continuation())
            .map(Cell::symbol)
            .collect()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
