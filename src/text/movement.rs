//! Cursor movement.
//!
//! Every function here is pure: it maps the document and a current position
//! to a target position without touching editor state. The editor routes the
//! result through its selecting/non-selecting gate.
//!
//! Inputs are clamped into the document first, so callers may pass stale
//! positions.

use crate::text::document::Document;
use crate::text::layout::TextLayout;
use crate::text::position::Position;

/// One character back, wrapping to the end of the previous line.
#[must_use]
pub fn prev_char(doc: &Document, pos: Position) -> Position {
    let pos = doc.clamp(pos);
    if pos.col > 0 {
        Position::new(pos.row, pos.col - 1)
    } else if pos.row > 0 {
        Position::new(pos.row - 1, doc.line_len(pos.row - 1))
    } else {
        Position::origin()
    }
}

/// One character forward, wrapping to the start of the next line.
#[must_use]
pub fn next_char(doc: &Document, pos: Position) -> Position {
    let pos = doc.clamp(pos);
    if pos.col < doc.line_len(pos.row) {
        Position::new(pos.row, pos.col + 1)
    } else if pos.row + 1 < doc.line_count() {
        Position::new(pos.row + 1, 0)
    } else {
        doc.end()
    }
}

/// Start of the previous word on the current line.
///
/// Probes leftwards until the layout reports a boundary strictly before the
/// probed column. Without a layout for the row this falls back to column 0.
#[must_use]
pub fn prev_word(doc: &Document, layout: &dyn TextLayout, pos: Position) -> Position {
    let pos = doc.clamp(pos);
    let line = doc.line(pos.row).unwrap_or_default();
    let len = doc.line_len(pos.row);
    if len == 0 {
        return Position::new(pos.row, 0);
    }

    let mut probe = pos.col;
    loop {
        let Some(boundary) = layout.word_boundary(pos.row, &line, probe.min(len - 1)) else {
            return Position::new(pos.row, 0);
        };
        if boundary.start < probe {
            return Position::new(pos.row, boundary.start);
        }
        if probe == 0 {
            return Position::new(pos.row, 0);
        }
        probe -= 1;
    }
}

/// End of the current or next word on the current line.
///
/// Probes rightwards until the layout reports a boundary strictly after the
/// probed column. Without a layout for the row this falls back to column 0.
#[must_use]
pub fn next_word(doc: &Document, layout: &dyn TextLayout, pos: Position) -> Position {
    let pos = doc.clamp(pos);
    let line = doc.line(pos.row).unwrap_or_default();
    let len = doc.line_len(pos.row);

    let mut probe = pos.col;
    while probe < len {
        let Some(boundary) = layout.word_boundary(pos.row, &line, probe) else {
            return Position::new(pos.row, 0);
        };
        if boundary.end > probe {
            return Position::new(pos.row, boundary.end.min(len));
        }
        probe += 1;
    }
    Position::new(pos.row, len)
}

/// Start of the line, or the previous line when already there.
///
/// Lines are not soft-wrapped, so a paragraph is a single line.
#[must_use]
pub fn prev_paragraph(doc: &Document, pos: Position) -> Position {
    let pos = doc.clamp(pos);
    if pos.col > 0 {
        line_start(pos)
    } else {
        doc.clamp(Position::new(pos.row.saturating_sub(1), pos.col))
    }
}

/// End of the line, or the next line when already there.
#[must_use]
pub fn next_paragraph(doc: &Document, pos: Position) -> Position {
    let pos = doc.clamp(pos);
    if pos.col < doc.line_len(pos.row) {
        line_end(doc, pos)
    } else {
        doc.clamp(Position::new(pos.row + 1, pos.col))
    }
}

#[must_use]
pub fn line_start(pos: Position) -> Position {
    Position::new(pos.row, 0)
}

#[must_use]
pub fn line_end(doc: &Document, pos: Position) -> Position {
    let row = doc.clamp(pos).row;
    Position::new(row, doc.line_len(row))
}

/// One line up, keeping the column. From the first line, snaps to (0, 0).
#[must_use]
pub fn line_up(doc: &Document, pos: Position) -> Position {
    let pos = doc.clamp(pos);
    if pos.row == 0 {
        Position::origin()
    } else {
        doc.clamp(Position::new(pos.row - 1, pos.col))
    }
}

/// One line down, keeping the column. From the last line, snaps to the end.
#[must_use]
pub fn line_down(doc: &Document, pos: Position) -> Position {
    let pos = doc.clamp(pos);
    if pos.row + 1 >= doc.line_count() {
        doc.end()
    } else {
        doc.clamp(Position::new(pos.row + 1, pos.col))
    }
}

/// `rows` lines up, keeping the column where the target line allows.
#[must_use]
pub fn page_up(doc: &Document, pos: Position, rows: usize) -> Position {
    let pos = doc.clamp(pos);
    doc.clamp(Position::new(pos.row.saturating_sub(rows), pos.col))
}

/// `rows` lines down, keeping the column where the target line allows.
#[must_use]
pub fn page_down(doc: &Document, pos: Position, rows: usize) -> Position {
    let pos = doc.clamp(pos);
    doc.clamp(Position::new(pos.row.saturating_add(rows), pos.col))
}

#[must_use]
pub fn document_start() -> Position {
    Position::origin()
}

#[must_use]
pub fn document_end(doc: &Document) -> Position {
    doc.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::layout::{MonospaceLayout, Rect};
    use std::ops::Range;

    fn doc() -> Document {
        Document::from_lines(["hello", "", "world!"])
    }

    #[test]
    fn test_char_wraps_between_lines() {
        let d = doc();
        assert_eq!(prev_char(&d, Position::new(2, 0)), Position::new(1, 0));
        assert_eq!(prev_char(&d, Position::new(1, 0)), Position::new(0, 5));
        assert_eq!(next_char(&d, Position::new(0, 5)), Position::new(1, 0));
        assert_eq!(next_char(&d, Position::new(1, 0)), Position::new(2, 0));
    }

    #[test]
    fn test_char_clamps_at_document_edges() {
        let d = doc();
        assert_eq!(prev_char(&d, Position::origin()), Position::origin());
        assert_eq!(next_char(&d, Position::new(2, 6)), Position::new(2, 6));
    }

    #[test]
    fn test_word_movement() {
        let d = Document::from_lines(["word1 word2"]);
        let layout = MonospaceLayout::default();
        let first = next_word(&d, &layout, Position::origin());
        assert_eq!(first, Position::new(0, 6));
        let second = next_word(&d, &layout, first);
        assert_eq!(second, Position::new(0, 11));
        assert_eq!(next_word(&d, &layout, second), Position::new(0, 11));

        assert_eq!(prev_word(&d, &layout, second), Position::new(0, 6));
        assert_eq!(prev_word(&d, &layout, first), Position::origin());
        assert_eq!(prev_word(&d, &layout, Position::origin()), Position::origin());
    }

    #[test]
    fn test_word_movement_on_empty_line() {
        let d = doc();
        let layout = MonospaceLayout::default();
        assert_eq!(prev_word(&d, &layout, Position::new(1, 0)), Position::new(1, 0));
        assert_eq!(next_word(&d, &layout, Position::new(1, 0)), Position::new(1, 0));
    }

    struct ZeroWidthLayout;

    impl TextLayout for ZeroWidthLayout {
        fn cursor_rect(&self, _: usize, _: &str, _: usize) -> Option<Rect> {
            None
        }
        fn bounding_box(&self, _: usize, _: &str, _: usize) -> Option<Rect> {
            None
        }
        fn offset_for_position(&self, _: usize, _: &str, _: f32) -> Option<usize> {
            None
        }
        fn word_boundary(&self, _: usize, _: &str, col: usize) -> Option<Range<usize>> {
            // Every probe reports an empty boundary at the probed column.
            Some(col..col)
        }
        fn line_width(&self, _: usize, _: &str) -> Option<f32> {
            None
        }
    }

    #[test]
    fn test_word_scan_terminates_on_zero_width_boundaries() {
        let d = Document::from_lines(["abc"]);
        assert_eq!(next_word(&d, &ZeroWidthLayout, Position::new(0, 1)), Position::new(0, 3));
        assert_eq!(prev_word(&d, &ZeroWidthLayout, Position::new(0, 2)), Position::new(0, 0));
    }

    struct MissingLayout;

    impl TextLayout for MissingLayout {
        fn cursor_rect(&self, _: usize, _: &str, _: usize) -> Option<Rect> {
            None
        }
        fn bounding_box(&self, _: usize, _: &str, _: usize) -> Option<Rect> {
            None
        }
        fn offset_for_position(&self, _: usize, _: &str, _: f32) -> Option<usize> {
            None
        }
        fn word_boundary(&self, _: usize, _: &str, _: usize) -> Option<Range<usize>> {
            None
        }
        fn line_width(&self, _: usize, _: &str) -> Option<f32> {
            None
        }
    }

    #[test]
    fn test_word_falls_back_without_layout() {
        let d = Document::from_lines(["abc def"]);
        assert_eq!(next_word(&d, &MissingLayout, Position::new(0, 4)), Position::new(0, 0));
        assert_eq!(prev_word(&d, &MissingLayout, Position::new(0, 4)), Position::new(0, 0));

        // The fallback stays on the cursor's row.
        let d = Document::from_lines(["abc", "def ghi"]);
        assert_eq!(next_word(&d, &MissingLayout, Position::new(1, 5)), Position::new(1, 0));
        assert_eq!(prev_word(&d, &MissingLayout, Position::new(1, 5)), Position::new(1, 0));
    }

    #[test]
    fn test_paragraph() {
        let d = doc();
        assert_eq!(prev_paragraph(&d, Position::new(0, 3)), Position::new(0, 0));
        assert_eq!(prev_paragraph(&d, Position::new(2, 0)), Position::new(1, 0));
        assert_eq!(prev_paragraph(&d, Position::origin()), Position::origin());
        assert_eq!(next_paragraph(&d, Position::new(0, 3)), Position::new(0, 5));
        assert_eq!(next_paragraph(&d, Position::new(0, 5)), Position::new(1, 0));
        assert_eq!(next_paragraph(&d, Position::new(2, 6)), Position::new(2, 6));
    }

    #[test]
    fn test_line_up_down() {
        let d = doc();
        assert_eq!(line_down(&d, Position::new(0, 4)), Position::new(1, 0));
        assert_eq!(line_up(&d, Position::new(2, 4)), Position::new(1, 0));
        assert_eq!(line_up(&d, Position::new(0, 4)), Position::origin());
        assert_eq!(line_down(&d, Position::new(2, 1)), Position::new(2, 6));
    }

    #[test]
    fn test_page_moves_clamp() {
        let d = Document::from_lines((0..30).map(|i| format!("line {i}")));
        assert_eq!(page_down(&d, Position::new(0, 6), 10), Position::new(10, 6));
        assert_eq!(page_down(&d, Position::new(25, 2), 10), Position::new(29, 2));
        assert_eq!(page_up(&d, Position::new(5, 7), 10), Position::new(0, 6));
    }

    #[test]
    fn test_document_bounds() {
        let d = doc();
        assert_eq!(document_start(), Position::origin());
        assert_eq!(document_end(&d), Position::new(2, 6));
    }
}
