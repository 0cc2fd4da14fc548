//! Reversible edit records and undo/redo history.

use crate::config::DEFAULT_MAX_HISTORY_DEPTH;
use crate::text::document::Document;
use crate::text::position::{Position, Selection};

/// A reversible edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `lines` were inserted at `at`.
    Insertion { at: Position, lines: Vec<String> },
    /// The text spanned by `range` was removed. `lines` holds that text as
    /// captured at delete time.
    Deletion { range: Selection, lines: Vec<String> },
}

impl Operation {
    /// Position just past the content an insertion adds.
    #[must_use]
    pub fn insertion_end(at: Position, lines: &[String]) -> Position {
        match lines {
            [] => at,
            [only] => Position::new(at.row, at.col + only.chars().count()),
            [.., last] => Position::new(at.row + lines.len() - 1, last.chars().count()),
        }
    }

    /// Apply this operation to a document.
    ///
    /// Returns the position the cursor should take afterwards: the end of
    /// inserted content, or the start of a removed range.
    pub fn apply(&self, doc: &mut Document) -> Position {
        match self {
            Self::Insertion { at, lines } => doc.insert(*at, lines),
            Self::Deletion { range, .. } => {
                doc.remove(range);
                range.min()
            }
        }
    }

    /// Start of the range this operation touches.
    #[must_use]
    pub fn start(&self) -> Position {
        match self {
            Self::Insertion { at, .. } => *at,
            Self::Deletion { range, .. } => range.min(),
        }
    }
}

/// Compute the operation that reverses `op`.
///
/// An insertion inverts to a deletion of exactly the inserted span. A
/// deletion inverts to re-inserting the text it captured.
#[must_use]
pub fn invert(op: &Operation) -> Operation {
    match op {
        Operation::Insertion { at, lines } => Operation::Deletion {
            range: Selection::new(*at, Operation::insertion_end(*at, lines)),
            lines: lines.clone(),
        },
        Operation::Deletion { range, lines } => Operation::Insertion {
            at: range.min(),
            lines: lines.clone(),
        },
    }
}

/// Undo/redo stacks of operation groups with bounded depth.
///
/// A group holds the operations of one user command and is undone as a unit.
#[derive(Clone, Debug)]
pub struct History {
    undo_stack: Vec<Vec<Operation>>,
    redo_stack: Vec<Vec<Operation>>,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_HISTORY_DEPTH)
    }
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history with a custom maximum depth.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Maximum number of undo groups retained.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Record a new edit group. Clears the redo stack.
    pub fn record(&mut self, group: Vec<Operation>) {
        if group.is_empty() {
            return;
        }
        tracing::trace!(
            target: "caret::history",
            ops = group.len(),
            depth = self.undo_stack.len() + 1,
            "record"
        );
        self.undo_stack.push(group);
        self.redo_stack.clear();
        self.enforce_depth();
    }

    /// Pop the most recent group for undoing.
    pub fn pop_undo(&mut self) -> Option<Vec<Operation>> {
        self.undo_stack.pop()
    }

    /// Pop the most recently undone group for redoing.
    pub fn pop_redo(&mut self) -> Option<Vec<Operation>> {
        self.redo_stack.pop()
    }

    /// Push an undone group onto the redo stack.
    pub fn push_redo(&mut self, group: Vec<Operation>) {
        self.redo_stack.push(group);
    }

    /// Push a redone group back onto the undo stack without touching redo.
    pub fn push_undo(&mut self, group: Vec<Operation>) {
        self.undo_stack.push(group);
        self.enforce_depth();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo groups.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redo groups.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn enforce_depth(&mut self) {
        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
    }
}
