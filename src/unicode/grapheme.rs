//! Grapheme cluster iteration and cell layout.

use crate::unicode::width::{WidthMethod, display_width_with_method};
use unicode_segmentation::UnicodeSegmentation;

/// One grapheme cluster placed on a fixed-width grid.
///
/// Offsets are in characters (Unicode scalar values), matching the editor's
/// column model, and in cells for the horizontal placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphemeCell {
    /// Column of the first character of the cluster.
    pub char_offset: usize,
    /// Number of characters in the cluster.
    pub char_len: usize,
    /// Cell where the cluster starts.
    pub cell_offset: usize,
    /// Cells the cluster occupies.
    pub width: usize,
}

impl GraphemeCell {
    /// Column just past this cluster.
    #[must_use]
    pub fn char_end(&self) -> usize {
        self.char_offset + self.char_len
    }

    /// Cell just past this cluster.
    #[must_use]
    pub fn cell_end(&self) -> usize {
        self.cell_offset + self.width
    }
}

/// Iterate over extended grapheme clusters in a string.
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    s.graphemes(true)
}

/// Lay out a line's grapheme clusters on a fixed-width grid.
///
/// Tabs advance to the next multiple of `tab_width` cells.
#[must_use]
pub fn grapheme_cells(s: &str, tab_width: usize, method: WidthMethod) -> Vec<GraphemeCell> {
    let tab_width = tab_width.max(1);
    let mut cells = Vec::new();
    let mut char_offset = 0;
    let mut cell = 0;

    for grapheme in s.graphemes(true) {
        let width = if grapheme == "\t" {
            tab_width - (cell % tab_width)
        } else {
            display_width_with_method(grapheme, method)
        };
        let char_len = grapheme.chars().count();
        cells.push(GraphemeCell {
            char_offset,
            char_len,
            cell_offset: cell,
            width,
        });
        char_offset += char_len;
        cell += width;
    }

    cells
}
