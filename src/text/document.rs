//! Rope-backed line store.
//!
//! [`Document`] holds the editor's content as an ordered sequence of lines.
//! Storage is a [`ropey::Rope`] built without CR/Unicode line-break support,
//! so `'\n'` is the only line separator and every other character, `'\r'`
//! included, is ordinary line content.

use crate::text::position::{Position, Selection};
use ropey::{Rope, RopeSlice};

/// Split text into lines on `'\n'`.
///
/// `'\r'` is kept as content, matching how [`Document`] stores it, so text
/// copied out of a document splits back into the same lines. The result
/// always has at least one element.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// The editable document: an ordered, never-empty sequence of lines.
#[derive(Clone, Debug, Default)]
pub struct Document {
    rope: Rope,
    revision: u64,
}

impl Document {
    /// Create an empty document (a single empty line).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from raw text. Lines are separated by `'\n'`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            revision: 0,
        }
    }

    /// Create a document from an ordered sequence of lines.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (idx, line) in lines.into_iter().enumerate() {
            if idx > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        Self::from_text(&text)
    }

    /// Number of lines. Always at least one.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total number of characters, separators included.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Revision counter, bumped on every mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Length of a line in characters, excluding the separator.
    ///
    /// Returns 0 for rows past the end.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.line_slice(row).map_or(0, |line| line.len_chars())
    }

    /// Text of a line without its separator.
    #[must_use]
    pub fn line(&self, row: usize) -> Option<String> {
        self.line_slice(row).map(|line| line.to_string())
    }

    /// All lines, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|row| self.line(row))
            .collect()
    }

    /// Full text with lines joined by `'\n'`.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Position just past the last character.
    #[must_use]
    pub fn end(&self) -> Position {
        let last = self.line_count() - 1;
        Position::new(last, self.line_len(last))
    }

    /// Clamp a position into the document bounds.
    #[must_use]
    pub fn clamp(&self, pos: Position) -> Position {
        let row = pos.row.min(self.line_count() - 1);
        Position::new(row, pos.col.min(self.line_len(row)))
    }

    /// Lines covered by a selection, first and last trimmed to its columns.
    #[must_use]
    pub fn text_in(&self, selection: &Selection) -> Vec<String> {
        let (start, end) = self.char_range(selection);
        split_lines(&self.rope.slice(start..end).to_string())
    }

    /// Insert lines at a position, splitting the line at `at.col`.
    ///
    /// Returns the position just past the inserted content.
    pub fn insert(&mut self, at: Position, lines: &[String]) -> Position {
        let at = self.clamp(at);
        if lines.is_empty() {
            return at;
        }
        let text = lines.join("\n");
        let offset = self.char_offset(at);
        self.rope.insert(offset, &text);
        self.revision += 1;
        end_of_insert(at, &text)
    }

    /// Remove the text spanned by a selection.
    ///
    /// Returns the removed lines, so the caller can restore them later.
    pub fn remove(&mut self, selection: &Selection) -> Vec<String> {
        let (start, end) = self.char_range(selection);
        let removed = split_lines(&self.rope.slice(start..end).to_string());
        if start < end {
            self.rope.remove(start..end);
            self.revision += 1;
        }
        removed
    }

    /// Replace the whole content.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.revision += 1;
    }

    fn line_slice(&self, row: usize) -> Option<RopeSlice<'_>> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(row);
        let len = line.len_chars();
        let has_newline = len > 0 && line.char(len - 1) == '\n';
        Some(if has_newline { line.slice(..len - 1) } else { line })
    }

    fn char_offset(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        self.rope.line_to_char(pos.row) + pos.col
    }

    fn char_range(&self, selection: &Selection) -> (usize, usize) {
        (
            self.char_offset(selection.min()),
            self.char_offset(selection.max()),
        )
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.rope == other.rope
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

fn end_of_insert(at: Position, text: &str) -> Position {
    match text.rfind('\n') {
        Some(idx) => Position::new(
            at.row + text.matches('\n').count(),
            text[idx + 1..].chars().count(),
        ),
        None => Position::new(at.row, at.col + text.chars().count()),
    }
}
