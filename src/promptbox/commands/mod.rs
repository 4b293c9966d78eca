//! # Command Layer
//!
//! One module per command. Commands work on the in-memory
//! [`PromptHistory`](crate::history::PromptHistory) and
//! [`Preferences`](crate::model::Preferences) only; they never persist and
//! never print. [`CmdResult::changed`] tells the API layer whether there is
//! anything to write back.

use crate::config::PromptBoxConfig;
use crate::index::DisplayEntry;
use crate::model::{Preferences, PromptEntry};
use crate::notice::Notice;

pub mod clear;
pub mod config;
pub mod copy;
pub mod create;
pub mod delete;
pub mod list;
pub mod preferences;
pub mod rename;
pub mod select;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Free-form output that has no catalog entry (config values, key errors).
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Whether the history or preferences were mutated.
    pub changed: bool,
    pub affected_entries: Vec<PromptEntry>,
    pub listed_entries: Vec<DisplayEntry>,
    pub notices: Vec<Notice>,
    pub messages: Vec<CmdMessage>,
    /// Text produced for the caller, e.g. what to put on the clipboard.
    pub text: Option<String>,
    pub preferences: Option<Preferences>,
    pub config: Option<PromptBoxConfig>,
}

impl CmdResult {
    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }

    pub fn add_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn with_affected_entries(mut self, entries: Vec<PromptEntry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn with_config(mut self, config: PromptBoxConfig) -> Self {
        self.config = Some(config);
        self
    }
}
