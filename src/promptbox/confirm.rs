//! Two-choice confirmation for destructive operations.
//!
//! `delete` and `clear` ask a [`ConfirmGate`] before touching the history.
//! Only an explicit `true` lets the mutation run.

/// What the user is being asked to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmPrompt {
    DeleteEntry { file_name: String },
    ClearHistory,
}

pub trait ConfirmGate {
    /// Returns `true` only when the user picked the confirm choice.
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> bool;
}

/// A gate with a fixed answer, for callers that already asked (e.g. `--yes`).
#[derive(Debug, Clone, Copy)]
pub struct Answered(pub bool);

impl ConfirmGate for Answered {
    fn confirm(&mut self, _prompt: &ConfirmPrompt) -> bool {
        self.0
    }
}
