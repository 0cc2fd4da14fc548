//! Cursor positions and selections.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

/// A (row, col) location in the document.
///
/// Ordered lexicographically: row first, then column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line index (0-indexed).
    pub row: usize,
    /// Character offset within the line (0-indexed).
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The start of the document.
    #[must_use]
    pub const fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// How a selection covers a given line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineSpan {
    /// The line is outside the selection.
    None,
    /// The selection starts and ends on this line.
    Single,
    /// The selection starts on this line and continues below.
    Start,
    /// The selection ends on this line.
    End,
    /// The line lies strictly between the first and last selected lines.
    Interior,
}

impl LineSpan {
    /// Check if the line is covered at all.
    #[must_use]
    pub fn is_selected(self) -> bool {
        self != Self::None
    }
}

/// An anchored range between two positions.
///
/// `start` is fixed when the selection is created; `end` follows the cursor
/// as the selection is extended. Range operations use [`min`](Self::min)
/// and [`max`](Self::max).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// The lexicographically smaller endpoint.
    #[must_use]
    pub fn min(&self) -> Position {
        self.start.min(self.end)
    }

    /// The lexicographically larger endpoint.
    #[must_use]
    pub fn max(&self) -> Position {
        self.start.max(self.end)
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if a position lies within `[min, max]`.
    #[must_use]
    pub fn includes(&self, pos: Position) -> bool {
        pos >= self.min() && pos <= self.max()
    }

    /// Describe how this selection covers `row`.
    #[must_use]
    pub fn contains(&self, row: usize) -> LineSpan {
        let (min, max) = (self.min(), self.max());
        if row < min.row || row > max.row {
            LineSpan::None
        } else if min.row == max.row {
            LineSpan::Single
        } else if row == min.row {
            LineSpan::Start
        } else if row == max.row {
            LineSpan::End
        } else {
            LineSpan::Interior
        }
    }

    /// Column range highlighted on `row`, given that line's length.
    #[must_use]
    pub fn span(&self, row: usize, line_len: usize) -> Option<Range<usize>> {
        let (min, max) = (self.min(), self.max());
        let range = match self.contains(row) {
            LineSpan::None => return None,
            LineSpan::Single => min.col..max.col,
            LineSpan::Start => min.col..line_len,
            LineSpan::End => 0..max.col,
            LineSpan::Interior => 0..line_len,
        };
        Some(range.start.min(line_len)..range.end.min(line_len))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start_status = if self.start == self.min() { "min" } else { "max" };
        let end_status = if self.end == self.max() { "max" } else { "min" };
        write!(
            f,
            "Selection {{start: {} [{start_status}], end: {} [{end_status}]}}",
            self.start, self.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
        assert_eq!(Position::new(1, 1).cmp(&Position::new(1, 1)), Ordering::Equal);
    }

    #[test]
    fn test_selection_min_max_backward() {
        let sel = Selection::new(Position::new(3, 2), Position::new(1, 7));
        assert_eq!(sel.min(), Position::new(1, 7));
        assert_eq!(sel.max(), Position::new(3, 2));
    }

    #[test]
    fn test_contains_cases() {
        let single = Selection::new(Position::new(1, 1), Position::new(1, 4));
        assert_eq!(single.contains(1), LineSpan::Single);
        assert_eq!(single.contains(0), LineSpan::None);

        let multi = Selection::new(Position::new(4, 0), Position::new(1, 2));
        assert_eq!(multi.contains(1), LineSpan::Start);
        assert_eq!(multi.contains(2), LineSpan::Interior);
        assert_eq!(multi.contains(4), LineSpan::End);
        assert_eq!(multi.contains(5), LineSpan::None);
    }

    #[test]
    fn test_span() {
        let sel = Selection::new(Position::new(0, 2), Position::new(2, 1));
        assert_eq!(sel.span(0, 5), Some(2..5));
        assert_eq!(sel.span(1, 3), Some(0..3));
        assert_eq!(sel.span(2, 4), Some(0..1));
        assert_eq!(sel.span(3, 4), None);
    }

    #[test]
    fn test_display() {
        let sel = Selection::new(Position::new(1, 0), Position::new(0, 0));
        assert_eq!(
            sel.to_string(),
            "Selection {start: (1, 0) [max], end: (0, 0) [min]}"
        );
    }
}
