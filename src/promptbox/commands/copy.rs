use crate::commands::CmdResult;
use crate::history::PromptHistory;
use crate::notice::Notice;

/// Hands back the trimmed active content for the clipboard.
///
/// Writing to the clipboard is the UI's job; it reports `Copied` or
/// `CopyFailed` itself.
pub fn run(history: &PromptHistory) -> CmdResult {
    let text = history.active_content().trim();
    if text.is_empty() {
        return CmdResult::default().with_notice(Notice::NoContentToCopy);
    }
    CmdResult::default().with_text(text.to_string())
}
