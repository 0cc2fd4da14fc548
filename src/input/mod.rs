//! Input events and key bindings.
//!
//! The editor consumes already-decoded events: the host translates its
//! windowing or terminal events into [`KeyEvent`] and [`PointerEvent`], and a
//! [`KeyMapping`] turns keys into [`Command`](crate::text::Command)s.

mod keyboard;
mod keymap;
mod pointer;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use keymap::{DefaultKeyMapping, KeyMapping};
pub use pointer::{PointerButton, PointerEvent, PointerEventKind};
