//! Change notifications for editor state.
//!
//! The editor does not assume an implicit observer system. Hosts that want to
//! react to changes register a callback with [`EditorState::subscribe`]
//! and receive an [`EditorEvent`] after each mutation.
//!
//! [`EditorState::subscribe`]: crate::text::EditorState::subscribe

use crate::text::{Position, Selection};

/// A state change reported to subscribers.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorEvent {
    /// The cursor moved.
    CursorMoved { from: Position, to: Position },
    /// The selection was created, extended, or cleared.
    SelectionChanged(Option<Selection>),
    /// Document content changed. `revision` is the document's new revision.
    DocumentChanged { revision: u64 },
    /// Scroll offsets changed.
    Scrolled { horizontal: f32, vertical: f32 },
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&EditorEvent) + 'static>;

/// Per-editor list of event callbacks.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    /// Create an empty subscriber list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&EditorEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Deliver an event to every callback, in registration order.
    pub fn emit(&mut self, event: &EditorEvent) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Check if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
