use crate::commands::CmdResult;
use crate::confirm::{ConfirmGate, ConfirmPrompt};
use crate::error::{PromptBoxError, Result};
use crate::history::PromptHistory;
use crate::notice::Notice;

pub fn run<C: ConfirmGate + ?Sized>(
    history: &mut PromptHistory,
    position: usize,
    gate: &mut C,
) -> Result<CmdResult> {
    let file_name = history
        .get(position)
        .map(|e| e.file_name.clone())
        .ok_or(PromptBoxError::IndexOutOfRange {
            index: position,
            len: history.len(),
        })?;

    if !gate.confirm(&ConfirmPrompt::DeleteEntry { file_name }) {
        return Ok(CmdResult::default().with_notice(Notice::Cancelled));
    }

    let removed = history.remove(position)?;
    let mut result = CmdResult::changed();
    result.add_notice(Notice::EntryDeleted {
        file_name: removed.file_name.clone(),
    });
    Ok(result.with_affected_entries(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::Answered;
    use crate::model::PromptEntry;
    use chrono::Utc;

    struct Recording {
        asked: Vec<ConfirmPrompt>,
        answer: bool,
    }

    impl ConfirmGate for Recording {
        fn confirm(&mut self, prompt: &ConfirmPrompt) -> bool {
            self.asked.push(prompt.clone());
            self.answer
        }
    }

    fn history_of(names: &[&str]) -> PromptHistory {
        let entries = names
            .iter()
            .map(|n| PromptEntry {
                file_name: format!("{}.txt", n),
                content: n.to_string(),
                timestamp: Utc::now(),
            })
            .collect();
        PromptHistory::from_parts(entries, names[0].to_string(), "%Y").0
    }

    #[test]
    fn asks_with_the_entry_name() {
        let mut history = history_of(&["a", "b"]);
        let mut gate = Recording {
            asked: Vec::new(),
            answer: true,
        };
        run(&mut history, 1, &mut gate).unwrap();
        assert_eq!(
            gate.asked,
            vec![ConfirmPrompt::DeleteEntry {
                file_name: "b.txt".into()
            }]
        );
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn cancel_leaves_history_alone() {
        let mut history = history_of(&["a", "b"]);
        let result = run(&mut history, 0, &mut Answered(false)).unwrap();
        assert!(!result.changed);
        assert_eq!(result.notices, vec![Notice::Cancelled]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.active_content(), "a");
    }

    #[test]
    fn removing_only_entry_empties_history() {
        let mut history = history_of(&["a"]);
        let result = run(&mut history, 0, &mut Answered(true)).unwrap();
        assert!(result.changed);
        assert!(history.is_empty());
        assert_eq!(history.active_content(), "");
    }

    #[test]
    fn out_of_range_never_asks() {
        let mut history = history_of(&["a"]);
        let mut gate = Recording {
            asked: Vec::new(),
            answer: true,
        };
        assert!(run(&mut history, 5, &mut gate).is_err());
        assert!(gate.asked.is_empty());
    }
}
