use crate::commands::CmdResult;
use crate::confirm::{ConfirmGate, ConfirmPrompt};
use crate::history::PromptHistory;
use crate::notice::Notice;

pub fn run<C: ConfirmGate + ?Sized>(history: &mut PromptHistory, gate: &mut C) -> CmdResult {
    if !gate.confirm(&ConfirmPrompt::ClearHistory) {
        return CmdResult::default().with_notice(Notice::Cancelled);
    }

    history.clear();
    CmdResult::changed().with_notice(Notice::HistoryCleared)
}
