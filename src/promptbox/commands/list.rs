use crate::commands::CmdResult;
use crate::history::PromptHistory;
use crate::index::index_entries;

pub fn run(history: &PromptHistory) -> CmdResult {
    CmdResult::default().with_listed_entries(index_entries(history.entries()))
}

/// The active entry together with the editor text.
pub fn active(history: &PromptHistory) -> CmdResult {
    let result = CmdResult::default().with_text(history.active_content().to_string());
    match history.active() {
        Some(entry) => result.with_affected_entries(vec![entry.clone()]),
        None => result,
    }
}
