//! Pointer (mouse, touchpad) events.

/// Pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, or a tap.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Middle,
    /// No button (for move events).
    None,
}

/// Kind of pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Press,
    Release,
    Move,
}

/// A pointer event in the host's logical pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub button: PointerButton,
    pub kind: PointerEventKind,
    /// Shift key held.
    pub shift: bool,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub fn new(x: f32, y: f32, button: PointerButton, kind: PointerEventKind) -> Self {
        Self {
            x,
            y,
            button,
            kind,
            shift: false,
        }
    }

    /// Create a press event.
    #[must_use]
    pub fn press(x: f32, y: f32, button: PointerButton) -> Self {
        Self::new(x, y, button, PointerEventKind::Press)
    }

    /// Create a release event.
    #[must_use]
    pub fn release(x: f32, y: f32, button: PointerButton) -> Self {
        Self::new(x, y, button, PointerEventKind::Release)
    }

    /// Create a move event.
    #[must_use]
    pub fn move_to(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerButton::None, PointerEventKind::Move)
    }

    /// Set the Shift modifier.
    #[must_use]
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Check if this is a press of the primary button.
    #[must_use]
    pub fn is_primary_press(&self) -> bool {
        self.kind == PointerEventKind::Press && self.button == PointerButton::Primary
    }
}
