use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactIntent {
    /// Type a character into the focused field.
    Insert(char),
    Backspace,
    /// Line break; only the message field accepts one.
    Newline,
    FocusNext,
    FocusPrev,
    /// Validate and, if clean, move to `Sending`.
    Submit,
    /// The submitter accepted the message.
    Submitted,
    SubmitFailed {
        reason: String,
    },
    Reset,
}

impl Intent for ContactIntent {}
