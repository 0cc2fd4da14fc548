//! Text storage, editing and presentation state.
//!
//! Key types:
//!
//! - [`Document`]: Rope-backed line store
//! - [`EditorState`]: Cursor, selection, undo/redo and viewport over a document
//! - [`Command`]: Every action the editor understands
//! - [`TextLayout`]: Measurement collaborator supplied by the host
//!
//! # Examples
//!
//! ```
//! use caret::text::{Command, EditorState, Position};
//!
//! let mut editor = EditorState::new();
//! editor.set_text("hello\nworld");
//! editor.update_cursor(Position::new(0, 5), false);
//! editor.process_command(Command::InsertNewLine);
//! assert_eq!(editor.lines(), vec!["hello", "", "world"]);
//!
//! editor.undo();
//! assert_eq!(editor.text(), "hello\nworld");
//! ```

mod clipboard;
mod command;
mod document;
mod editor;
mod layout;
pub mod movement;
mod operation;
mod position;
mod viewport;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use command::{Command, Motion};
pub use document::{Document, split_lines};
pub use editor::EditorState;
pub use layout::{MonospaceLayout, Rect, TextLayout};
pub use operation::{History, Operation, invert};
pub use position::{LineSpan, Position, Selection};
pub use viewport::{CancellationToken, CursorBlink, CursorIndicator, ScrollAnimation, Viewport};
