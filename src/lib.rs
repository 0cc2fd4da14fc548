//! `caret` - In-memory text editing core
//!
//! Cursor, selection, undo/redo and viewport logic for a text area, with
//! rendering, fonts and the system clipboard left to the host behind small
//! collaborator traits.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional pixel-to-row casts
#![allow(clippy::cast_sign_loss)] // Intentional pixel-to-row conversions
#![allow(clippy::cast_precision_loss)] // Intentional for geometry math
#![allow(clippy::module_name_repetitions)] // Allow editor::EditorState etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::float_cmp)] // Offsets are compared after explicit clamping
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use config::EditorConfig;
pub use error::{Error, Result};
pub use event::{EditorEvent, SubscriptionId};

// Re-export input types
pub use input::{DefaultKeyMapping, KeyCode, KeyEvent, KeyMapping, KeyModifiers, PointerEvent};

// Re-export commonly used types
pub use text::{
    Clipboard, Command, Document, EditorState, MemoryClipboard, MonospaceLayout, Position, Rect,
    Selection, TextLayout,
};
pub use unicode::WidthMethod;
