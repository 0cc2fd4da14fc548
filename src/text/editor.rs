//! Editor state: document, cursor, selection, history and viewport.
//!
//! [`EditorState`] is the single owner of everything a text area needs between
//! frames. Hosts feed it commands, key and pointer events; it mutates the
//! document through reversible operations, keeps the cursor in view and
//! reports what changed to its subscribers.

// if-let-else is clearer than map_or for the selection fallbacks
#![allow(clippy::option_if_let_else)]

use crate::config::EditorConfig;
use crate::error::Result;
use crate::event::{EditorEvent, Subscribers, SubscriptionId};
use crate::input::{
    DefaultKeyMapping, KeyEvent, KeyMapping, PointerButton, PointerEvent, PointerEventKind,
};
use crate::text::clipboard::{Clipboard, MemoryClipboard};
use crate::text::command::{Command, Motion};
use crate::text::document::{Document, split_lines};
use crate::text::layout::{MonospaceLayout, Rect, TextLayout};
use crate::text::movement;
use crate::text::operation::{History, Operation, invert};
use crate::text::position::{Position, Selection};
use crate::text::viewport::{CursorBlink, CursorIndicator, Viewport};
use std::fmt;
use std::ops::Range;
use std::time::Instant;

/// Observable state captured before a mutation, diffed afterwards.
#[derive(Clone, Copy)]
struct Snapshot {
    cursor: Position,
    selection: Option<Selection>,
    revision: u64,
    scroll: (f32, f32),
}

/// An editable text area.
pub struct EditorState {
    document: Document,
    cursor: Position,
    selection: Option<Selection>,
    is_selecting: bool,
    history: History,
    viewport: Viewport,
    blink: CursorBlink,
    config: EditorConfig,
    layout: Box<dyn TextLayout>,
    clipboard: Box<dyn Clipboard>,
    key_mapping: Box<dyn KeyMapping>,
    subscribers: Subscribers,
    in_transaction: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::build(EditorConfig::default())
    }
}

impl fmt::Debug for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorState")
            .field("cursor", &self.cursor)
            .field("selection", &self.selection)
            .field("is_selecting", &self.is_selecting)
            .field("line_count", &self.document.line_count())
            .field("revision", &self.document.revision())
            .field("undo_len", &self.history.undo_len())
            .field("redo_len", &self.history.redo_len())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl EditorState {
    /// Create an empty editor with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty editor with a validated configuration.
    pub fn with_config(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EditorConfig) -> Self {
        let layout = MonospaceLayout::new(config.default_glyph_width, config.line_height)
            .with_tab_width(config.tab_width);
        Self {
            document: Document::new(),
            cursor: Position::origin(),
            selection: None,
            is_selecting: false,
            history: History::with_max_depth(config.max_history_depth),
            viewport: Viewport::new(&config),
            blink: CursorBlink::new(config.blink_interval),
            layout: Box::new(layout),
            clipboard: Box::new(MemoryClipboard::new()),
            key_mapping: Box::new(DefaultKeyMapping),
            subscribers: Subscribers::new(),
            in_transaction: false,
            config,
        }
    }

    // --- Collaborators ---

    /// Replace the text layout collaborator.
    pub fn set_layout(&mut self, layout: impl TextLayout + 'static) {
        self.layout = Box::new(layout);
    }

    /// Replace the clipboard collaborator.
    pub fn set_clipboard(&mut self, clipboard: impl Clipboard + 'static) {
        self.clipboard = Box::new(clipboard);
    }

    /// Replace the key mapping.
    pub fn set_key_mapping(&mut self, key_mapping: impl KeyMapping + 'static) {
        self.key_mapping = Box::new(key_mapping);
    }

    /// Access the clipboard collaborator.
    pub fn clipboard_mut(&mut self) -> &mut dyn Clipboard {
        self.clipboard.as_mut()
    }

    /// Register a change callback.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&EditorEvent) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Remove a change callback. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // --- Accessors ---

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Check if a pointer drag is in progress.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.is_selecting
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Full text with lines joined by `'\n'`.
    #[must_use]
    pub fn text(&self) -> String {
        self.document.text()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.document.lines()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // --- Content replacement ---

    /// Replace the document. Resets cursor, selection, history and scroll.
    pub fn set_text(&mut self, text: &str) {
        self.transact(|this| {
            this.document.set_text(text);
            this.reset_after_load();
        });
    }

    /// Replace the document with the given lines.
    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.set_text(&lines.join("\n"));
    }

    fn reset_after_load(&mut self) {
        self.cursor = Position::origin();
        self.selection = None;
        self.is_selecting = false;
        self.history.clear();
        self.viewport.set_line_count(self.document.line_count());
        self.viewport.set_vertical_offset(0.0);
        self.viewport.set_horizontal_offset(0.0);
        self.blink.restart();
    }

    // --- Viewport ---

    /// Set the visible text area, in host coordinates.
    pub fn update_text_area(&mut self, rect: Rect) -> Result<()> {
        self.transact(|this| this.viewport.update_text_area(rect))
    }

    /// Report a measured line width so horizontal scrolling can reach it.
    pub fn increase_width(&mut self, width: f32) {
        self.viewport.increase_width(width);
    }

    /// Advance blink and scroll timers. Returns true if a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.transact(|this| {
            let blinked = this.blink.tick(now);
            let scrolled = this.viewport.tick(now);
            blinked || scrolled
        })
    }

    /// Check if the cursor is in the visible phase of its blink cycle.
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.blink.visible()
    }

    /// Where to draw the cursor.
    #[must_use]
    pub fn cursor_indicator(&self) -> CursorIndicator {
        let line = self.document.line(self.cursor.row).unwrap_or_default();
        self.viewport.cursor_indicator(
            self.layout.as_ref(),
            self.cursor.row,
            &line,
            self.cursor.col,
            self.blink.visible(),
        )
    }

    /// Width of the line-number gutter for the current document.
    #[must_use]
    pub fn gutter_width(&self) -> f32 {
        self.viewport.gutter_width(self.document.line_count())
    }

    /// Check if the line number of `row` should be highlighted.
    #[must_use]
    pub fn is_line_highlighted(&self, row: usize) -> bool {
        self.cursor.row == row
            || self
                .selection
                .is_some_and(|selection| selection.contains(row).is_selected())
    }

    /// Column range of the selection on `row`.
    #[must_use]
    pub fn selection_span(&self, row: usize) -> Option<Range<usize>> {
        self.selection?.span(row, self.document.line_len(row))
    }

    // --- Cursor and selection ---

    /// Move the cursor, optionally extending the selection.
    ///
    /// Returns true if the cursor or selection changed.
    pub fn update_cursor(&mut self, target: Position, selecting: bool) -> bool {
        self.transact(|this| this.move_cursor(target, selecting, true))
    }

    /// Select the whole document, leaving the cursor at its end.
    pub fn select_all(&mut self) {
        self.transact(|this| {
            let end = this.document.end();
            this.cursor = end;
            this.selection = Some(Selection::new(Position::origin(), end));
        });
    }

    pub fn select_none(&mut self) {
        self.transact(|this| this.selection = None);
    }

    fn move_cursor(&mut self, target: Position, selecting: bool, may_scroll: bool) -> bool {
        let target = self.document.clamp(target);
        let before = (self.cursor, self.selection);
        if selecting {
            match self.selection.as_mut() {
                Some(selection) => selection.end = target,
                None => self.selection = Some(Selection::new(self.cursor, target)),
            }
        } else {
            self.selection = None;
        }
        self.cursor = target;
        if may_scroll {
            self.scroll_to_cursor();
        }
        self.blink.restart();
        before != (self.cursor, self.selection)
    }

    fn motion_target(&self, motion: Motion, selecting: bool) -> Position {
        let doc = &self.document;
        let cursor = self.cursor;
        let layout = self.layout.as_ref();
        match motion {
            Motion::LeftChar => match self.selection {
                Some(selection) if !selecting => selection.min(),
                _ => movement::prev_char(doc, cursor),
            },
            Motion::RightChar => match self.selection {
                Some(selection) if !selecting => selection.max(),
                _ => movement::next_char(doc, cursor),
            },
            Motion::LeftWord => movement::prev_word(doc, layout, cursor),
            Motion::RightWord => movement::next_word(doc, layout, cursor),
            Motion::PrevParagraph => movement::prev_paragraph(doc, cursor),
            Motion::NextParagraph => movement::next_paragraph(doc, cursor),
            Motion::LeftLine | Motion::StartLine => movement::line_start(cursor),
            Motion::RightLine | Motion::EndLine => movement::line_end(doc, cursor),
            Motion::UpLine => movement::line_up(doc, cursor),
            Motion::DownLine => movement::line_down(doc, cursor),
            Motion::UpPage => movement::page_up(doc, cursor, self.viewport.visible_rows()),
            Motion::DownPage => movement::page_down(doc, cursor, self.viewport.visible_rows()),
            Motion::Home => movement::document_start(),
            Motion::End => movement::document_end(doc),
        }
    }

    fn apply_motion(&mut self, motion: Motion, selecting: bool) -> bool {
        let target = self.motion_target(motion, selecting);
        self.move_cursor(target, selecting, true)
    }

    fn scroll_to_cursor(&mut self) {
        let row = self.cursor.row;
        let line = self.document.line(row).unwrap_or_default();
        if let Some(width) = self.layout.line_width(row, &line) {
            self.viewport.increase_width(width);
        }
        let rect = self.layout.cursor_rect(row, &line, self.cursor.col);
        self.viewport.scroll_to_cursor(row, rect);
    }

    // --- Editing ---

    /// Delete the selected text as one undo step.
    ///
    /// Returns false when there is no selection or it is empty; an empty
    /// selection is cleared.
    pub fn delete_selection(&mut self) -> bool {
        self.transact(|this| match this.take_selection_deletion() {
            Some(op) => {
                this.finish_edit(vec![op]);
                true
            }
            None => false,
        })
    }

    /// Insert lines at the cursor, replacing the selection if any.
    ///
    /// `["a", "b"]` inserts `"a"`, a line break, then `"b"`.
    pub fn insert_text(&mut self, lines: &[String]) {
        self.transact(|this| this.insert_lines(lines));
    }

    /// Insert raw text at the cursor. Line breaks split lines.
    pub fn insert_str(&mut self, text: &str) {
        self.insert_text(&split_lines(text));
    }

    pub fn insert_new_line(&mut self) {
        self.insert_text(&[String::new(), String::new()]);
    }

    /// Insert the configured indent unit.
    pub fn insert_tab(&mut self) {
        let unit = self.config.indent_unit();
        self.insert_text(&[unit]);
    }

    /// Copy the selected text to the clipboard. Returns false if nothing is
    /// selected.
    pub fn copy(&mut self) -> bool {
        let Some(selection) = self.selection.filter(|s| !s.is_empty()) else {
            return false;
        };
        let text = self.document.text_in(&selection).join("\n");
        self.clipboard.set_text(&text);
        true
    }

    /// Copy, then delete the selection.
    pub fn cut(&mut self) -> bool {
        if !self.copy() {
            return false;
        }
        self.delete_selection()
    }

    /// Insert the clipboard content. Returns false if it was empty.
    pub fn paste(&mut self) -> bool {
        let Some(text) = self.clipboard.get_text().filter(|t| !t.is_empty()) else {
            return false;
        };
        self.insert_str(&text);
        true
    }

    /// Revert the most recent edit group.
    pub fn undo(&mut self) -> bool {
        self.transact(|this| {
            let Some(group) = this.history.pop_undo() else {
                return false;
            };
            tracing::debug!(target: "caret::history", ops = group.len(), "undo");
            let mut cursor = this.cursor;
            for op in group.iter().rev() {
                let inverse = invert(op);
                inverse.apply(&mut this.document);
                cursor = inverse.start();
            }
            this.history.push_redo(group);
            this.after_history_step(cursor);
            true
        })
    }

    /// Re-apply the most recently undone edit group.
    pub fn redo(&mut self) -> bool {
        self.transact(|this| {
            let Some(group) = this.history.pop_redo() else {
                return false;
            };
            tracing::debug!(target: "caret::history", ops = group.len(), "redo");
            let mut cursor = this.cursor;
            for op in &group {
                cursor = op.apply(&mut this.document);
            }
            this.history.push_undo(group);
            this.after_history_step(cursor);
            true
        })
    }

    fn after_history_step(&mut self, cursor: Position) {
        self.selection = None;
        self.viewport.set_line_count(self.document.line_count());
        self.move_cursor(cursor, false, true);
    }

    fn take_selection_deletion(&mut self) -> Option<Operation> {
        let selection = self.selection.take()?;
        if selection.is_empty() {
            return None;
        }
        let lines = self.document.remove(&selection);
        self.cursor = selection.min();
        Some(Operation::Deletion {
            range: selection,
            lines,
        })
    }

    fn insert_lines(&mut self, lines: &[String]) {
        // Elements may carry '\n' themselves; record the lines the document
        // actually ends up with.
        let lines: Vec<String> = lines.iter().flat_map(|line| split_lines(line)).collect();
        let mut group = Vec::new();
        if let Some(op) = self.take_selection_deletion() {
            group.push(op);
        }
        let has_content = !(lines.is_empty() || (lines.len() == 1 && lines[0].is_empty()));
        if has_content {
            let at = self.cursor;
            self.cursor = self.document.insert(at, &lines);
            group.push(Operation::Insertion { at, lines });
        }
        self.finish_edit(group);
    }

    fn finish_edit(&mut self, group: Vec<Operation>) {
        self.history.record(group);
        self.viewport.set_line_count(self.document.line_count());
        self.scroll_to_cursor();
        self.blink.restart();
    }

    fn delete_or_select(&mut self, motion: Motion) {
        if let Some(op) = self.take_selection_deletion() {
            self.finish_edit(vec![op]);
            return;
        }
        self.apply_motion(motion, true);
        if let Some(op) = self.take_selection_deletion() {
            self.finish_edit(vec![op]);
        }
    }

    // --- Dispatch ---

    /// Run a command.
    pub fn process_command(&mut self, command: Command) {
        tracing::debug!(
            target: "caret::command",
            ?command,
            edit = command.is_edit(),
            "process"
        );
        self.transact(|this| this.run_command(command));
    }

    fn run_command(&mut self, command: Command) {
        if let Some((motion, selecting)) = command.motion() {
            self.apply_motion(motion, selecting);
            return;
        }
        if let Some(motion) = command.delete_motion() {
            self.delete_or_select(motion);
            return;
        }
        match command {
            Command::SelectAll => self.select_all(),
            Command::SelectNone => self.selection = None,
            Command::InsertNewLine => self.insert_new_line(),
            Command::InsertTab => self.insert_tab(),
            Command::Copy => {
                self.copy();
            }
            Command::Cut => {
                self.cut();
            }
            Command::Paste => {
                self.paste();
            }
            Command::Undo => {
                self.undo();
            }
            Command::Redo => {
                self.redo();
            }
            _ => {}
        }
    }

    /// Handle a key event. Returns true if the event was consumed.
    ///
    /// Mapped keys run their command; unmapped printable characters are
    /// inserted as typed text.
    pub fn process_key_event(&mut self, event: &KeyEvent) -> bool {
        if let Some(command) = self.key_mapping.map(event) {
            self.process_command(command);
            return true;
        }
        match event.text_input() {
            Some(c) => {
                self.insert_text(&[c.to_string()]);
                true
            }
            None => false,
        }
    }

    /// Handle a pointer event. Returns true if the event was consumed.
    pub fn process_pointer_event(&mut self, event: &PointerEvent) -> bool {
        self.transact(|this| match (event.kind, event.button) {
            (PointerEventKind::Press, PointerButton::Primary) => {
                this.is_selecting = true;
                let target = this.hit_test(event.x, event.y);
                this.move_cursor(target, event.shift, false);
                true
            }
            (PointerEventKind::Press, PointerButton::Secondary) => {
                let target = this.hit_test(event.x, event.y);
                if !this.selection.is_some_and(|s| s.includes(target)) {
                    this.move_cursor(target, false, true);
                }
                true
            }
            (PointerEventKind::Move, _) if this.is_selecting => {
                this.drag_selection(event.x, event.y);
                true
            }
            (PointerEventKind::Release, PointerButton::Primary) => {
                let was_selecting = this.is_selecting;
                this.is_selecting = false;
                was_selecting
            }
            _ => false,
        })
    }

    /// Document position under a host coordinate.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Position {
        let area = self.viewport.text_area();
        let rel_x = x - area.left + self.viewport.horizontal_offset();
        let rel_y = y - area.top + self.viewport.vertical_offset();
        let row = (rel_y / self.viewport.line_height()).floor().max(0.0) as usize;
        let row = row.min(self.document.line_count() - 1);
        let line = self.document.line(row).unwrap_or_default();
        let col = self
            .layout
            .offset_for_position(row, &line, rel_x)
            .unwrap_or(0);
        self.document.clamp(Position::new(row, col))
    }

    fn drag_selection(&mut self, x: f32, y: f32) {
        let mut target = self.hit_test(x, y);
        let border = self.viewport.text_area().left
            - self.viewport.horizontal_offset()
            - self.config.area_padding;
        if x < border && self.selection.is_some_and(|s| target >= s.start) {
            target = self.hit_test(x, y + self.viewport.line_height());
        }
        if target != self.cursor {
            match self.selection.as_mut() {
                Some(selection) => selection.end = target,
                None => self.selection = Some(Selection::new(self.cursor, target)),
            }
            self.cursor = target;
            self.blink.restart();
        }
        self.viewport.scroll_to_coordinate(x, y, 0.0);
    }

    // --- Notification ---

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            cursor: self.cursor,
            selection: self.selection,
            revision: self.document.revision(),
            scroll: (
                self.viewport.horizontal_offset(),
                self.viewport.vertical_offset(),
            ),
        }
    }

    /// Run `f` and report the state it changed. Nested calls report once,
    /// from the outermost call.
    fn transact<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        if self.in_transaction {
            return f(self);
        }
        self.in_transaction = true;
        let before = self.snapshot();
        let result = f(self);
        self.in_transaction = false;
        self.notify(before);
        result
    }

    fn notify(&mut self, before: Snapshot) {
        let after = self.snapshot();
        let mut events = Vec::new();
        if after.revision != before.revision {
            events.push(EditorEvent::DocumentChanged {
                revision: after.revision,
            });
        }
        if after.cursor != before.cursor {
            events.push(EditorEvent::CursorMoved {
                from: before.cursor,
                to: after.cursor,
            });
        }
        if after.selection != before.selection {
            events.push(EditorEvent::SelectionChanged(after.selection));
        }
        if after.scroll != before.scroll {
            events.push(EditorEvent::Scrolled {
                horizontal: after.scroll.0,
                vertical: after.scroll.1,
            });
        }
        for event in &events {
            self.subscribers.emit(event);
        }
    }
}
