//! Editor commands, decoupled from physical keys.

/// A cursor motion, shared by the move and select command families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    LeftChar,
    RightChar,
    LeftWord,
    RightWord,
    PrevParagraph,
    NextParagraph,
    LeftLine,
    RightLine,
    StartLine,
    EndLine,
    UpLine,
    DownLine,
    UpPage,
    DownPage,
    Home,
    End,
}

/// Every action the editor understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    MoveCursorLeftChar,
    MoveCursorRightChar,
    MoveCursorLeftWord,
    MoveCursorRightWord,
    MoveCursorPrevParagraph,
    MoveCursorNextParagraph,
    MoveCursorLeftLine,
    MoveCursorRightLine,
    MoveCursorStartLine,
    MoveCursorEndLine,
    MoveCursorUpLine,
    MoveCursorDownLine,
    MoveCursorUpPage,
    MoveCursorDownPage,
    MoveCursorHome,
    MoveCursorEnd,

    SelectLeftChar,
    SelectRightChar,
    SelectLeftWord,
    SelectRightWord,
    SelectPrevParagraph,
    SelectNextParagraph,
    SelectLeftLine,
    SelectRightLine,
    SelectStartLine,
    SelectEndLine,
    SelectUpLine,
    SelectDownLine,
    SelectUpPage,
    SelectDownPage,
    SelectHome,
    SelectEnd,
    SelectAll,
    SelectNone,

    DeletePrevChar,
    DeleteNextChar,
    DeletePrevWord,
    DeleteNextWord,
    DeleteStartLine,
    DeleteEndLine,

    InsertNewLine,
    InsertTab,

    Copy,
    Paste,
    Cut,
    Undo,
    Redo,

    /// Open the host's character palette. Accepted and ignored by the core.
    CharacterPalette,
}

impl Command {
    /// The motion behind a move or select command, and whether it extends
    /// the selection.
    #[must_use]
    pub fn motion(self) -> Option<(Motion, bool)> {
        use Command as C;
        use Motion as M;
        let pair = match self {
            C::MoveCursorLeftChar => (M::LeftChar, false),
            C::MoveCursorRightChar => (M::RightChar, false),
            C::MoveCursorLeftWord => (M::LeftWord, false),
            C::MoveCursorRightWord => (M::RightWord, false),
            C::MoveCursorPrevParagraph => (M::PrevParagraph, false),
            C::MoveCursorNextParagraph => (M::NextParagraph, false),
            C::MoveCursorLeftLine => (M::LeftLine, false),
            C::MoveCursorRightLine => (M::RightLine, false),
            C::MoveCursorStartLine => (M::StartLine, false),
            C::MoveCursorEndLine => (M::EndLine, false),
            C::MoveCursorUpLine => (M::UpLine, false),
            C::MoveCursorDownLine => (M::DownLine, false),
            C::MoveCursorUpPage => (M::UpPage, false),
            C::MoveCursorDownPage => (M::DownPage, false),
            C::MoveCursorHome => (M::Home, false),
            C::MoveCursorEnd => (M::End, false),
            C::SelectLeftChar => (M::LeftChar, true),
            C::SelectRightChar => (M::RightChar, true),
            C::SelectLeftWord => (M::LeftWord, true),
            C::SelectRightWord => (M::RightWord, true),
            C::SelectPrevParagraph => (M::PrevParagraph, true),
            C::SelectNextParagraph => (M::NextParagraph, true),
            C::SelectLeftLine => (M::LeftLine, true),
            C::SelectRightLine => (M::RightLine, true),
            C::SelectStartLine => (M::StartLine, true),
            C::SelectEndLine => (M::EndLine, true),
            C::SelectUpLine => (M::UpLine, true),
            C::SelectDownLine => (M::DownLine, true),
            C::SelectUpPage => (M::UpPage, true),
            C::SelectDownPage => (M::DownPage, true),
            C::SelectHome => (M::Home, true),
            C::SelectEnd => (M::End, true),
            _ => return None,
        };
        Some(pair)
    }

    /// The motion a delete command falls back to when nothing is selected.
    #[must_use]
    pub fn delete_motion(self) -> Option<Motion> {
        match self {
            Self::DeletePrevChar => Some(Motion::LeftChar),
            Self::DeleteNextChar => Some(Motion::RightChar),
            Self::DeletePrevWord => Some(Motion::LeftWord),
            Self::DeleteNextWord => Some(Motion::RightWord),
            Self::DeleteStartLine => Some(Motion::StartLine),
            Self::DeleteEndLine => Some(Motion::EndLine),
            _ => None,
        }
    }

    /// Check if this command can change the document.
    #[must_use]
    pub fn is_edit(self) -> bool {
        self.delete_motion().is_some()
            || matches!(
                self,
                Self::InsertNewLine
                    | Self::InsertTab
                    | Self::Paste
                    | Self::Cut
                    | Self::Undo
                    | Self::Redo
            )
    }
}
