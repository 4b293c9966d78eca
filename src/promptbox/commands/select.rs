use crate::commands::CmdResult;
use crate::error::Result;
use crate::history::PromptHistory;
use crate::notice::Notice;

/// Makes the entry at `position` the active one.
pub fn run(history: &mut PromptHistory, position: usize) -> Result<CmdResult> {
    let moved = history.promote(position)?;

    let active = history.entries()[0].clone();
    let mut result = if moved {
        CmdResult::changed()
    } else {
        CmdResult::default()
    };
    result.add_notice(Notice::EntrySelected {
        file_name: active.file_name.clone(),
    });
    Ok(result
        .with_text(active.content.clone())
        .with_affected_entries(vec![active]))
}
