use crate::commands::CmdResult;
use crate::history::PromptHistory;
use crate::notice::Notice;
use chrono::{DateTime, Utc};

/// Content changed: store `text` in the active entry, naming it if possible.
pub fn run(history: &mut PromptHistory, text: &str, now: DateTime<Utc>) -> CmdResult {
    let update = history.update_active_content(text, now);

    let mut result = CmdResult::changed();
    if update.created {
        if let Some(active) = history.active() {
            result.add_notice(Notice::EntryCreated {
                file_name: active.file_name.clone(),
            });
        }
    }
    if let Some(active) = history.active() {
        result.affected_entries.push(active.clone());
    }
    result
}
