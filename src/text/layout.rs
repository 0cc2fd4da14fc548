//! Text-layout collaborator interface.
//!
//! The editor never measures glyphs itself. It asks a [`TextLayout`] for
//! cursor rectangles, hit-testing and word boundaries. Every query may return
//! `None` while the host has not laid out the line yet; callers fall back to
//! column 0 / offset 0 until the next callback provides real values.

use crate::unicode::{GraphemeCell, WidthMethod, grapheme_cells, word_boundary};
use std::ops::Range;

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create a rectangle from its edges.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from origin and size.
    #[must_use]
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Check if a point lies inside (edges inclusive on the top-left).
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Measurements of laid-out lines, supplied by the rendering layer.
///
/// `row` identifies the line for hosts that cache layouts per row; `line` is
/// its current text for stateless implementations. Rectangles are relative
/// to the line's own origin (left edge of the text, top of the row).
pub trait TextLayout {
    /// Caret rectangle before column `col`.
    fn cursor_rect(&self, row: usize, line: &str, col: usize) -> Option<Rect>;

    /// Bounding box of the glyph at column `col`.
    fn bounding_box(&self, row: usize, line: &str, col: usize) -> Option<Rect>;

    /// Column nearest to horizontal offset `x` (hit-testing).
    fn offset_for_position(&self, row: usize, line: &str, x: f32) -> Option<usize>;

    /// Word containing column `col`, as a column range.
    fn word_boundary(&self, row: usize, line: &str, col: usize) -> Option<Range<usize>>;

    /// Rendered width of the whole line.
    fn line_width(&self, row: usize, line: &str) -> Option<f32>;
}

/// Layout for fixed-width fonts, computed directly from the text.
///
/// Every cell is `glyph_width` wide; wide characters take two cells and tabs
/// advance to the next tab stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceLayout {
    pub glyph_width: f32,
    pub line_height: f32,
    pub tab_width: usize,
    pub width_method: WidthMethod,
}

impl Default for MonospaceLayout {
    fn default() -> Self {
        Self::new(12.0, 20.0)
    }
}

impl MonospaceLayout {
    /// Create a layout with the given cell size.
    #[must_use]
    pub fn new(glyph_width: f32, line_height: f32) -> Self {
        Self {
            glyph_width,
            line_height,
            tab_width: 4,
            width_method: WidthMethod::default(),
        }
    }

    /// Set the tab stop width in cells.
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    fn cells(&self, line: &str) -> Vec<GraphemeCell> {
        grapheme_cells(line, self.tab_width, self.width_method)
    }

    fn cell_for_col(cells: &[GraphemeCell], col: usize) -> usize {
        match cells.iter().find(|cell| cell.char_end() > col) {
            Some(cell) => cell.cell_offset,
            None => cells.last().map_or(0, GraphemeCell::cell_end),
        }
    }

    fn row_rect(&self, left_cell: usize, width_cells: usize) -> Rect {
        let left = left_cell as f32 * self.glyph_width;
        Rect::new(
            left,
            0.0,
            left + width_cells as f32 * self.glyph_width,
            self.line_height,
        )
    }
}

impl TextLayout for MonospaceLayout {
    fn cursor_rect(&self, _row: usize, line: &str, col: usize) -> Option<Rect> {
        let cells = self.cells(line);
        Some(self.row_rect(Self::cell_for_col(&cells, col), 0))
    }

    fn bounding_box(&self, _row: usize, line: &str, col: usize) -> Option<Rect> {
        self.cells(line)
            .into_iter()
            .find(|cell| cell.char_end() > col)
            .map(|cell| self.row_rect(cell.cell_offset, cell.width))
    }

    fn offset_for_position(&self, _row: usize, line: &str, x: f32) -> Option<usize> {
        if x <= 0.0 {
            return Some(0);
        }
        let cells = self.cells(line);
        let target = x / self.glyph_width;
        for cell in &cells {
            let midpoint = cell.cell_offset as f32 + cell.width as f32 / 2.0;
            if target < midpoint {
                return Some(cell.char_offset);
            }
        }
        Some(cells.last().map_or(0, GraphemeCell::char_end))
    }

    fn word_boundary(&self, _row: usize, line: &str, col: usize) -> Option<Range<usize>> {
        Some(word_boundary(line, col))
    }

    fn line_width(&self, _row: usize, line: &str) -> Option<f32> {
        let cells = self.cells(line);
        let total = cells.last().map_or(0, GraphemeCell::cell_end);
        Some(total as f32 * self.glyph_width)
    }
}
