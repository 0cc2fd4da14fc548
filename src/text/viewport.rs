//! Scroll offsets, visible rows and cursor presentation.
//!
//! Time-driven behaviour (cursor blink, horizontal scroll animation) is plain
//! state advanced by the host calling `tick(now)`. Nothing here spawns work.
//! A freshly scheduled timer takes its start time from the first tick after
//! it was scheduled, so editing APIs never need a clock.

use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::text::layout::{Rect, TextLayout};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Shared cancellation flag for a scheduled timer.
///
/// Clones observe the same flag. Single-threaded only.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    /// Create a live token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Cursor blink timer.
///
/// At most one token is live: each [`restart`](Self::restart) cancels the
/// previous one.
#[derive(Debug)]
pub struct CursorBlink {
    interval: Duration,
    visible: bool,
    next_toggle: Option<Instant>,
    token: CancellationToken,
}

impl CursorBlink {
    /// Create a blink timer with the given half-period.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            visible: true,
            next_toggle: None,
            token: CancellationToken::new(),
        }
    }

    /// Show the cursor and schedule a fresh blink cycle.
    pub fn restart(&mut self) {
        self.token.cancel();
        self.token = CancellationToken::new();
        self.visible = true;
        self.next_toggle = None;
    }

    /// Advance the timer. Returns true if visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.token.is_cancelled() || self.interval.is_zero() {
            return false;
        }
        let Some(mut deadline) = self.next_toggle else {
            self.next_toggle = Some(now + self.interval);
            return false;
        };
        let before = self.visible;
        while deadline <= now {
            self.visible = !self.visible;
            deadline += self.interval;
        }
        self.next_toggle = Some(deadline);
        before != self.visible
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The live token of the current blink cycle.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// A pending horizontal scroll, interpolated linearly.
#[derive(Debug)]
pub struct ScrollAnimation {
    pub from: f32,
    pub to: f32,
    pub start: Option<Instant>,
    pub duration: Duration,
    token: CancellationToken,
}

impl ScrollAnimation {
    fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            start: None,
            duration,
            token: CancellationToken::new(),
        }
    }

    /// Offset at `now`, and whether the animation has finished.
    #[must_use]
    pub fn sample(&self, now: Instant) -> (f32, bool) {
        let Some(start) = self.start else {
            return (self.from, false);
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.from + (self.to - self.from) * t, false)
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Where and how to draw the cursor, in text-area coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorIndicator {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
}

/// Scroll state of the editor's text area.
#[derive(Debug)]
pub struct Viewport {
    text_area: Rect,
    line_height: f32,
    area_padding: f32,
    glyph_width: f32,
    cursor_line_padding: f32,
    line_count: usize,
    vertical: f32,
    horizontal: f32,
    content_width: f32,
    scroll_duration: Duration,
    animation: Option<ScrollAnimation>,
}

impl Viewport {
    /// Create a viewport with an empty text area.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            text_area: Rect::ZERO,
            line_height: config.line_height,
            area_padding: config.area_padding,
            glyph_width: config.default_glyph_width,
            cursor_line_padding: config.cursor_line_padding,
            line_count: 1,
            vertical: 0.0,
            horizontal: 0.0,
            content_width: 0.0,
            scroll_duration: config.scroll_animation,
            animation: None,
        }
    }

    /// Set the visible text area. The stored area is inset horizontally by
    /// the configured padding.
    pub fn update_text_area(&mut self, rect: Rect) -> Result<()> {
        let (width, height) = (rect.width(), rect.height());
        let valid = [rect.left, rect.top, width, height]
            .iter()
            .all(|v| v.is_finite())
            && width >= 0.0
            && height >= 0.0;
        if !valid {
            return Err(Error::InvalidDimensions { width, height });
        }
        let inset = self.area_padding.min(width / 2.0);
        self.text_area = Rect::new(
            rect.left + inset,
            rect.top,
            rect.right - inset,
            rect.bottom,
        );
        self.vertical = self.clamp_vertical(self.vertical);
        self.horizontal = self.clamp_horizontal(self.horizontal);
        Ok(())
    }

    /// The text area after padding.
    #[must_use]
    pub fn text_area(&self) -> Rect {
        self.text_area
    }

    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Tell the viewport how many lines the document has.
    pub fn set_line_count(&mut self, line_count: usize) {
        self.line_count = line_count.max(1);
        self.vertical = self.clamp_vertical(self.vertical);
    }

    /// Vertical scroll offset in pixels.
    #[must_use]
    pub fn vertical_offset(&self) -> f32 {
        self.vertical
    }

    /// Horizontal scroll offset in pixels.
    #[must_use]
    pub fn horizontal_offset(&self) -> f32 {
        self.horizontal
    }

    /// Widest measured line so far.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Grow the content width. Never shrinks.
    pub fn increase_width(&mut self, width: f32) {
        if width.is_finite() && width > self.content_width {
            self.content_width = width;
        }
    }

    /// Largest vertical offset for the current document and area.
    #[must_use]
    pub fn max_vertical_offset(&self) -> f32 {
        (self.line_height * self.line_count as f32 - self.text_area.height()).max(0.0)
    }

    /// Largest horizontal offset: the widest line's right edge meets the
    /// text area's right edge.
    #[must_use]
    pub fn max_horizontal_offset(&self) -> f32 {
        (self.content_width - self.text_area.width()).max(0.0)
    }

    /// Set the vertical offset, clamped. Returns true if it changed.
    pub fn set_vertical_offset(&mut self, offset: f32) -> bool {
        let clamped = self.clamp_vertical(offset);
        if clamped == self.vertical {
            return false;
        }
        tracing::debug!(target: "caret::viewport", from = self.vertical, to = clamped, "vertical scroll");
        self.vertical = clamped;
        true
    }

    /// Jump the horizontal offset, cancelling any animation.
    pub fn set_horizontal_offset(&mut self, offset: f32) -> bool {
        self.cancel_animation();
        let clamped = self.clamp_horizontal(offset);
        if clamped == self.horizontal {
            return false;
        }
        self.horizontal = clamped;
        true
    }

    /// Row at the top edge of the text area.
    #[must_use]
    pub fn first_visible_row(&self) -> usize {
        (self.vertical / self.line_height).floor() as usize
    }

    /// Number of rows that fit fully in the text area.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        (self.text_area.height() / self.line_height).floor().max(0.0) as usize
    }

    /// Scroll so that `(x, y)` lies at least `padding` inside the text area.
    ///
    /// `x` is measured against the offset currently shown. Horizontal
    /// adjustments are animated and start from the pending target, if any;
    /// vertical ones apply at once. Returns true if the vertical offset
    /// changed or an animation was scheduled.
    pub fn scroll_to_coordinate(&mut self, x: f32, y: f32, padding: f32) -> bool {
        let area = self.text_area;
        let mut changed = false;

        let base = self.animation.as_ref().map_or(self.horizontal, |a| a.to);
        // Where `x` lands once the pending scroll has finished.
        let x = x + self.horizontal - base;
        let left = area.left + padding;
        let right = area.right - padding;
        if x < left {
            changed |= self.animate_horizontal(base + (x - left));
        } else if x > right {
            changed |= self.animate_horizontal(base + (x - right));
        }

        let top = area.top + padding;
        let bottom = area.bottom - padding;
        if y < top {
            changed |= self.set_vertical_offset(self.vertical + (y - top));
        } else if y > bottom {
            changed |= self.set_vertical_offset(self.vertical + (y - bottom));
        }
        changed
    }

    /// Scroll the cursor at `row` into view, given its caret rectangle.
    ///
    /// A missing rectangle (layout not ready) counts as column 0.
    pub fn scroll_to_cursor(&mut self, row: usize, cursor_rect: Option<Rect>) -> bool {
        let rect = cursor_rect.unwrap_or(Rect::ZERO);
        let x = self.text_area.left + rect.left - self.horizontal;
        let y = self.text_area.top + self.line_height * (row as f32 + 0.5) - self.vertical;
        self.scroll_to_coordinate(x, y, self.line_height * 2.0)
    }

    /// Advance the horizontal animation. Returns true if the offset moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        if animation.is_cancelled() {
            self.animation = None;
            return false;
        }
        if animation.start.is_none() {
            animation.start = Some(now);
        }
        let (value, finished) = animation.sample(now);
        if finished {
            self.animation = None;
        }
        let value = self.clamp_horizontal(value);
        if value == self.horizontal {
            return false;
        }
        self.horizontal = value;
        true
    }

    /// Check if a horizontal animation is pending.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Width of the line-number gutter for `line_count` lines.
    #[must_use]
    pub fn gutter_width(&self, line_count: usize) -> f32 {
        let digits = line_count.max(1).to_string().len();
        digits as f32 * self.glyph_width + 2.0 * self.area_padding + 2.0
    }

    /// Geometry of the cursor on `row` before column `col` of `line`.
    ///
    /// The width is the glyph under the cursor, or the default glyph width
    /// at end of line.
    #[must_use]
    pub fn cursor_indicator(
        &self,
        layout: &dyn TextLayout,
        row: usize,
        line: &str,
        col: usize,
        visible: bool,
    ) -> CursorIndicator {
        let left = layout
            .cursor_rect(row, line, col)
            .map_or(0.0, |rect| rect.left);
        let width = layout
            .bounding_box(row, line, col)
            .map_or(self.glyph_width, |bbox| bbox.width());
        CursorIndicator {
            x: self.text_area.left + left - self.horizontal,
            y: self.text_area.top + self.line_height * row as f32 - self.vertical
                + self.cursor_line_padding,
            width,
            height: self.line_height - 2.0 * self.cursor_line_padding,
            visible,
        }
    }

    fn animate_horizontal(&mut self, target: f32) -> bool {
        let target = self.clamp_horizontal(target);
        let pending = self.animation.as_ref().map_or(self.horizontal, |a| a.to);
        if target == pending {
            return false;
        }
        self.cancel_animation();
        tracing::debug!(target: "caret::viewport", from = self.horizontal, to = target, "horizontal scroll");
        if self.scroll_duration.is_zero() {
            self.horizontal = target;
        } else {
            self.animation = Some(ScrollAnimation::new(
                self.horizontal,
                target,
                self.scroll_duration,
            ));
        }
        true
    }

    fn cancel_animation(&mut self) {
        if let Some(animation) = self.animation.take() {
            animation.token.cancel();
        }
    }

    fn clamp_vertical(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_vertical_offset())
    }

    fn clamp_horizontal(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_horizontal_offset())
    }
}
