//! Key-to-command mapping.

use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};
use crate::text::Command;

/// Translates key events into editor commands.
///
/// Returning `None` leaves the event to typed-character handling.
pub trait KeyMapping {
    fn map(&self, event: &KeyEvent) -> Option<Command>;
}

/// Conventional Ctrl-based bindings.
///
/// Shift turns a move into a selection; Ctrl moves by word (or document for
/// Home/End); Alt+Up/Down moves by paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultKeyMapping;

impl DefaultKeyMapping {
    fn map_ctrl_char(c: char, shift: bool) -> Option<Command> {
        let command = match (c.to_ascii_lowercase(), shift) {
            ('a', false) => Command::SelectAll,
            ('c', false) => Command::Copy,
            ('x', false) => Command::Cut,
            ('v', false) => Command::Paste,
            ('z', false) => Command::Undo,
            ('z', true) | ('y', false) => Command::Redo,
            (' ', false) => Command::CharacterPalette,
            _ => return None,
        };
        Some(command)
    }

    fn map_navigation(code: KeyCode, ctrl: bool, alt: bool, shift: bool) -> Option<Command> {
        use Command as C;
        let (plain, select) = match (code, ctrl, alt) {
            (KeyCode::Left, false, false) => (C::MoveCursorLeftChar, C::SelectLeftChar),
            (KeyCode::Right, false, false) => (C::MoveCursorRightChar, C::SelectRightChar),
            (KeyCode::Left, true, false) => (C::MoveCursorLeftWord, C::SelectLeftWord),
            (KeyCode::Right, true, false) => (C::MoveCursorRightWord, C::SelectRightWord),
            (KeyCode::Up, false, false) => (C::MoveCursorUpLine, C::SelectUpLine),
            (KeyCode::Down, false, false) => (C::MoveCursorDownLine, C::SelectDownLine),
            (KeyCode::Up, false, true) => (C::MoveCursorPrevParagraph, C::SelectPrevParagraph),
            (KeyCode::Down, false, true) => {
                (C::MoveCursorNextParagraph, C::SelectNextParagraph)
            }
            (KeyCode::Home, false, false) => (C::MoveCursorStartLine, C::SelectStartLine),
            (KeyCode::End, false, false) => (C::MoveCursorEndLine, C::SelectEndLine),
            (KeyCode::Home, true, false) => (C::MoveCursorHome, C::SelectHome),
            (KeyCode::End, true, false) => (C::MoveCursorEnd, C::SelectEnd),
            (KeyCode::PageUp, false, false) => (C::MoveCursorUpPage, C::SelectUpPage),
            (KeyCode::PageDown, false, false) => (C::MoveCursorDownPage, C::SelectDownPage),
            _ => return None,
        };
        Some(if shift { select } else { plain })
    }
}

impl KeyMapping for DefaultKeyMapping {
    fn map(&self, event: &KeyEvent) -> Option<Command> {
        let (ctrl, alt, shift) = (event.ctrl(), event.alt(), event.shift());
        if event.modifiers.contains(KeyModifiers::SUPER) {
            return None;
        }

        if event.code.is_navigation() {
            return Self::map_navigation(event.code, ctrl, alt, shift);
        }

        match (event.code, ctrl, alt) {
            (KeyCode::Char(c), true, false) => Self::map_ctrl_char(c, shift),
            (KeyCode::Backspace, false, false) => Some(Command::DeletePrevChar),
            (KeyCode::Backspace, true, false) => Some(Command::DeletePrevWord),
            (KeyCode::Delete, false, false) => Some(Command::DeleteNextChar),
            (KeyCode::Delete, true, false) => Some(Command::DeleteNextWord),
            (KeyCode::Enter, false, false) => Some(Command::InsertNewLine),
            (KeyCode::Tab, false, false) if !shift => Some(Command::InsertTab),
            (KeyCode::Esc, false, false) => Some(Command::SelectNone),
            _ => None,
        }
    }
}
