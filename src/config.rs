//! Editor configuration.

use crate::error::{Error, Result};
use std::time::Duration;

/// Default maximum number of undo groups to retain.
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 1000;

/// Options controlling editing behaviour and viewport geometry.
///
/// All geometry is in logical pixels. The host converts to device pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    /// Height of one text row.
    pub line_height: f32,
    /// Horizontal padding inside the text area, applied on both sides.
    pub area_padding: f32,
    /// Glyph width used for the cursor at end of line and for the gutter.
    pub default_glyph_width: f32,
    /// Vertical inset of the cursor indicator within its row.
    pub cursor_line_padding: f32,
    /// Number of columns per indent unit.
    pub tab_width: usize,
    /// Insert spaces instead of a tab character.
    pub insert_spaces: bool,
    /// Cursor blink half-period.
    pub blink_interval: Duration,
    /// Duration of an animated horizontal scroll.
    pub scroll_animation: Duration,
    /// Maximum number of undo groups. Oldest entries are dropped when exceeded.
    pub max_history_depth: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            line_height: 20.0,
            area_padding: 6.0,
            default_glyph_width: 12.0,
            cursor_line_padding: 2.0,
            tab_width: 4,
            insert_spaces: true,
            blink_interval: Duration::from_millis(500),
            scroll_animation: Duration::from_millis(100),
            max_history_depth: DEFAULT_MAX_HISTORY_DEPTH,
        }
    }
}

impl EditorConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row height.
    #[must_use]
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the horizontal text area padding (clamped to >= 0).
    #[must_use]
    pub fn with_area_padding(mut self, padding: f32) -> Self {
        self.area_padding = padding.max(0.0);
        self
    }

    /// Set the fallback glyph width.
    #[must_use]
    pub fn with_default_glyph_width(mut self, width: f32) -> Self {
        self.default_glyph_width = width;
        self
    }

    /// Set the indent unit width.
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Choose between spaces and a literal tab for `InsertTab`.
    #[must_use]
    pub fn with_insert_spaces(mut self, insert_spaces: bool) -> Self {
        self.insert_spaces = insert_spaces;
        self
    }

    /// Set the cursor blink interval.
    #[must_use]
    pub fn with_blink_interval(mut self, interval: Duration) -> Self {
        self.blink_interval = interval;
        self
    }

    /// Set the horizontal scroll animation duration. Zero scrolls instantly.
    #[must_use]
    pub fn with_scroll_animation(mut self, duration: Duration) -> Self {
        self.scroll_animation = duration;
        self
    }

    /// Set the undo history depth (at least one group is always kept).
    #[must_use]
    pub fn with_max_history_depth(mut self, depth: usize) -> Self {
        self.max_history_depth = depth.max(1);
        self
    }

    /// The text inserted by `InsertTab`.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_width)
        } else {
            "\t".to_string()
        }
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(Error::invalid_config(
                "line_height",
                format!("must be a positive number, got {}", self.line_height),
            ));
        }
        if !(self.default_glyph_width.is_finite() && self.default_glyph_width > 0.0) {
            return Err(Error::invalid_config(
                "default_glyph_width",
                format!("must be a positive number, got {}", self.default_glyph_width),
            ));
        }
        if !self.area_padding.is_finite() {
            return Err(Error::invalid_config("area_padding", "must be finite"));
        }
        if self.cursor_line_padding * 2.0 >= self.line_height {
            return Err(Error::invalid_config(
                "cursor_line_padding",
                "must leave room for the cursor inside a row",
            ));
        }
        if self.insert_spaces && self.tab_width == 0 {
            return Err(Error::invalid_config(
                "tab_width",
                "must be at least 1 when inserting spaces",
            ));
        }
        if self.blink_interval.is_zero() {
            return Err(Error::invalid_config("blink_interval", "must be non-zero"));
        }
        if self.max_history_depth == 0 {
            return Err(Error::invalid_config("max_history_depth", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EditorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_indent_unit() {
        let config = EditorConfig::new().with_tab_width(2);
        assert_eq!(config.indent_unit(), "  ");

        let config = config.with_insert_spaces(false);
        assert_eq!(config.indent_unit(), "\t");
    }

    #[test]
    fn test_rejects_bad_line_height() {
        let err = EditorConfig::new()
            .with_line_height(0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfig {
                field: "line_height",
                ..
            }
        ));

        assert!(
            EditorConfig::new()
                .with_line_height(f32::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_rejects_zero_tab_with_spaces() {
        let config = EditorConfig::new().with_tab_width(0);
        assert!(config.validate().is_err());
        assert!(config.with_insert_spaces(false).validate().is_ok());
    }

    #[test]
    fn test_builders_clamp() {
        let config = EditorConfig::new()
            .with_area_padding(-4.0)
            .with_max_history_depth(0);
        assert_eq!(config.area_padding, 0.0);
        assert_eq!(config.max_history_depth, 1);
    }
}
