//! Clipboard collaborator.

/// System clipboard access, supplied by the host.
pub trait Clipboard {
    /// Replace the clipboard content.
    fn set_text(&mut self, text: &str);

    /// Current clipboard content, if any.
    fn get_text(&mut self) -> Option<String>;
}

/// In-process clipboard for headless hosts and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    content: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard holding `text`.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
        }
    }

    /// Peek at the content without going through the trait.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn clear(&mut self) {
        self.content = None;
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) {
        self.content = Some(text.to_string());
    }

    fn get_text(&mut self) -> Option<String> {
        self.content.clone()
    }
}
