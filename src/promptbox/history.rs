//! # Prompt History
//!
//! The in-memory MRU collection behind the store. Position 0 is the active
//! entry and `active_content` mirrors its content. The one exception is
//! removing the active entry, which clears `active_content` and leaves the
//! next entry's text alone until it is selected.
//!
//! Nothing in this module performs I/O. Persisting the result of a mutation is
//! the caller's job (see [`crate::api::PromptStore`]).

use crate::error::{PromptBoxError, Result};
use crate::filename::{derive_filename, is_named, validate_rename, RenameOutcome};
use crate::model::PromptEntry;
use crate::naming::extract_label;
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H-%M-%S";

/// What [`PromptHistory::update_active_content`] did besides storing the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentUpdate {
    /// A new entry had to be created first because the history was empty.
    pub created: bool,
    /// The entry received its derived name during this update.
    pub named: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PromptHistory {
    entries: Vec<PromptEntry>,
    active_content: String,
    timestamp_format: String,
}

impl Default for PromptHistory {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_FORMAT)
    }
}

impl PromptHistory {
    pub fn new(timestamp_format: &str) -> Self {
        Self {
            entries: Vec::new(),
            active_content: String::new(),
            timestamp_format: timestamp_format.to_string(),
        }
    }

    /// Rebuilds a history from persisted parts.
    ///
    /// Returns `true` alongside the history when a non-empty `active_content`
    /// disagreed with the first entry and had to be re-mirrored from it. An
    /// empty `active_content` is left alone: that is the state right after the
    /// active entry was removed.
    pub fn from_parts(
        entries: Vec<PromptEntry>,
        active_content: String,
        timestamp_format: &str,
    ) -> (Self, bool) {
        let mut history = Self {
            entries,
            active_content,
            timestamp_format: timestamp_format.to_string(),
        };

        let repaired = match history.entries.first() {
            Some(first)
                if !history.active_content.is_empty()
                    && first.content != history.active_content =>
            {
                history.active_content = first.content.clone();
                true
            }
            _ => false,
        };

        (history, repaired)
    }

    pub fn entries(&self) -> &[PromptEntry] {
        &self.entries
    }

    pub fn active_content(&self) -> &str {
        &self.active_content
    }

    pub fn active(&self) -> Option<&PromptEntry> {
        self.entries.first()
    }

    pub fn get(&self, index: usize) -> Option<&PromptEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(PromptBoxError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Formats the local creation time, falling back to the default format
    /// when the configured one cannot be rendered.
    fn stamp(&self, now: DateTime<Utc>) -> String {
        let local = now.with_timezone(&Local);
        let mut out = String::new();
        if write!(out, "{}", local.format(&self.timestamp_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", local.format(DEFAULT_TIMESTAMP_FORMAT));
        }
        out
    }

    /// Inserts a blank entry at position 0.
    ///
    /// Refused (returns `false`) when the history already has entries and the
    /// active content is blank.
    pub fn create_entry(&mut self, now: DateTime<Utc>) -> bool {
        if !self.entries.is_empty() && self.active_content.trim().is_empty() {
            return false;
        }

        let entry = PromptEntry::new(&self.stamp(now), now);
        self.entries.insert(0, entry);
        self.active_content.clear();
        true
    }

    /// Replaces the active entry's content, creating an entry if there is none.
    ///
    /// An entry that is not yet named gets `{timestamp}_{label}.txt` as soon as
    /// its content produces a label. Named entries keep their name.
    pub fn update_active_content(&mut self, text: &str, now: DateTime<Utc>) -> ContentUpdate {
        let mut update = ContentUpdate::default();
        if self.entries.is_empty() {
            update.created = self.create_entry(now);
        }

        self.active_content = text.to_string();
        let active = &mut self.entries[0];
        active.content = text.to_string();

        if !is_named(&active.file_name) {
            if let Some(label) = extract_label(text) {
                active.file_name = derive_filename(&active.file_name, &label);
                update.named = Some(active.file_name.clone());
            }
        }

        update
    }

    /// Moves the entry at `index` to position 0 and loads its content.
    ///
    /// Returns `false` only when nothing changed: the entry already was at
    /// position 0 and `active_content` already held its text. Selecting the
    /// first entry after the active one was removed reloads it.
    pub fn promote(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        if index == 0 {
            if self.active_content == self.entries[0].content {
                return Ok(false);
            }
            self.active_content = self.entries[0].content.clone();
            return Ok(true);
        }

        self.entries[..=index].rotate_right(1);
        self.active_content = self.entries[0].content.clone();
        Ok(true)
    }

    /// Validates and applies a user-supplied name.
    ///
    /// Validation failures come back as [`PromptBoxError::Rename`] with the
    /// entry untouched.
    pub fn rename(&mut self, index: usize, new_name: &str) -> Result<RenameOutcome> {
        self.check_index(index)?;
        let entry = &mut self.entries[index];
        let outcome = validate_rename(&entry.file_name, new_name)?;
        if let RenameOutcome::Renamed(name) = &outcome {
            entry.file_name = name.clone();
        }
        Ok(outcome)
    }

    /// Removes one entry. Removing the active entry empties `active_content`.
    ///
    /// The entry that slides into position 0 keeps its content, but it only
    /// becomes the editor's text once it is selected.
    pub fn remove(&mut self, index: usize) -> Result<PromptEntry> {
        self.check_index(index)?;
        let removed = self.entries.remove(index);
        if index == 0 {
            self.active_content.clear();
        }
        Ok(removed)
    }

    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.active_content.clear();
        count
    }
}
