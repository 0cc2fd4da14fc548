//! Word segmentation for cursor movement.
//!
//! Segments follow Unicode word boundaries (UAX #29), with each run of
//! whitespace folded into the segment before it. Moving to the end of a
//! segment therefore lands on the start of the next word.

use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Word segments of a line as character ranges covering the whole line.
#[must_use]
pub fn word_segments(line: &str) -> Vec<Range<usize>> {
    let mut segments: Vec<Range<usize>> = Vec::new();
    let mut char_offset = 0;

    for (_, piece) in line.split_word_bound_indices() {
        let len = piece.chars().count();
        let range = char_offset..char_offset + len;
        char_offset += len;

        let is_space = piece.chars().all(char::is_whitespace);
        match segments.last_mut() {
            Some(prev) if is_space => prev.end = range.end,
            _ => segments.push(range),
        }
    }

    segments
}

/// The word segment containing column `col`.
///
/// `col` is clamped into the line. An empty line yields `0..0`.
#[must_use]
pub fn word_boundary(line: &str, col: usize) -> Range<usize> {
    let segments = word_segments(line);
    let Some(last) = segments.last() else {
        return 0..0;
    };
    let col = col.min(last.end.saturating_sub(1));
    segments
        .iter()
        .find(|segment| segment.contains(&col))
        .cloned()
        .unwrap_or(col..col)
}
