//! Unicode utilities for grapheme handling, display width and word bounds.

mod grapheme;
mod width;
mod word;

pub use grapheme::{GraphemeCell, grapheme_cells, graphemes};
pub use width::{WidthMethod, display_width_char_with_method, display_width_with_method};
pub use word::{word_boundary, word_segments};
