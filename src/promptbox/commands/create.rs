use crate::commands::CmdResult;
use crate::history::PromptHistory;
use crate::notice::Notice;
use chrono::{DateTime, Utc};

pub fn run(history: &mut PromptHistory, now: DateTime<Utc>) -> CmdResult {
    if !history.create_entry(now) {
        return CmdResult::default();
    }

    let entry = history.entries()[0].clone();
    CmdResult::changed()
        .with_notice(Notice::EntryCreated {
            file_name: entry.file_name.clone(),
        })
        .with_affected_entries(vec![entry])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::update;

    #[test]
    fn creates_first_entry() {
        let mut history = PromptHistory::default();
        let result = run(&mut history, Utc::now());
        assert!(result.changed);
        assert_eq!(history.len(), 1);
        assert!(matches!(result.notices[0], Notice::EntryCreated { .. }));
    }

    #[test]
    fn refuses_blank_duplicate() {
        let mut history = PromptHistory::default();
        run(&mut history, Utc::now());
        let result = run(&mut history, Utc::now());
        assert!(!result.changed);
        assert!(result.notices.is_empty());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn creates_after_content_was_written() {
        let mut history = PromptHistory::default();
        update::run(&mut history, "draft", Utc::now());
        let result = run(&mut history, Utc::now());
        assert!(result.changed);
        assert_eq!(history.len(), 2);
        assert_eq!(history.active_content(), "");
        assert_eq!(history.get(1).unwrap().content, "draft");
    }
}
