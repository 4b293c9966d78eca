use crate::commands::CmdResult;
use crate::error::{PromptBoxError, Result};
use crate::filename::RenameOutcome;
use crate::history::PromptHistory;
use crate::notice::Notice;

/// Renames the entry at `position`.
///
/// A rejected name is not an error here: it comes back as a
/// `FilenameTxtRequired`/`FilenameInvalidChars` notice with nothing changed.
pub fn run(history: &mut PromptHistory, position: usize, new_name: &str) -> Result<CmdResult> {
    match history.rename(position, new_name) {
        Ok(RenameOutcome::Renamed(file_name)) => {
            let entry = history.entries()[position].clone();
            Ok(CmdResult::changed()
                .with_notice(Notice::EntryRenamed { file_name })
                .with_affected_entries(vec![entry]))
        }
        Ok(RenameOutcome::Unchanged) => Ok(CmdResult::default()),
        Err(PromptBoxError::Rename(err)) => Ok(CmdResult::default().with_notice(err.into())),
        Err(other) => Err(other),
    }
}
