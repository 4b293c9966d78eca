use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filename::TXT_SUFFIX;

pub const MIN_FONT_SIZE: u8 = 12;
pub const MAX_FONT_SIZE: u8 = 24;
pub const DEFAULT_FONT_SIZE: u8 = 15;

/// One prompt in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptEntry {
    pub file_name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl PromptEntry {
    /// A blank entry named `{stamp}.txt`.
    pub fn new(stamp: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            file_name: format!("{}{}", stamp, TXT_SUFFIX),
            content: String::new(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Green,
    Dark,
}

impl Theme {
    pub fn next(self) -> Self {
        match self {
            Theme::System => Theme::Green,
            Theme::Green => Theme::Dark,
            Theme::Dark => Theme::System,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::System => write!(f, "system"),
            Theme::Green => write!(f, "green"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Display preferences, persisted independently of the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub word_wrap: bool,
    pub theme: Theme,
    pub font_size: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            word_wrap: true,
            theme: Theme::System,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Keys understood by the persistence gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    ActiveContent,
    Entries,
    Preferences,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [
        StorageKey::ActiveContent,
        StorageKey::Entries,
        StorageKey::Preferences,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::ActiveContent => "activeContent",
            StorageKey::Entries => "entries",
            StorageKey::Preferences => "preferences",
        }
    }
}

/// A keyed document as stored by the gateway.
///
/// Every field is optional: a write carries only the keys it changes and the
/// gateway keeps the last written value per key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<PromptEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

impl Snapshot {
    /// The history pair written after every history mutation.
    pub fn history(entries: &[PromptEntry], active_content: &str) -> Self {
        Self {
            active_content: Some(active_content.to_string()),
            entries: Some(entries.to_vec()),
            preferences: None,
        }
    }

    pub fn preferences(preferences: &Preferences) -> Self {
        Self {
            preferences: Some(preferences.clone()),
            ..Self::default()
        }
    }

    /// Overlays every key present in `other`.
    pub fn merge(&mut self, other: Snapshot) {
        if other.active_content.is_some() {
            self.active_content = other.active_content;
        }
        if other.entries.is_some() {
            self.entries = other.entries;
        }
        if other.preferences.is_some() {
            self.preferences = other.preferences;
        }
    }

    /// Keeps only the requested keys.
    pub fn select(&self, keys: &[StorageKey]) -> Self {
        let mut out = Snapshot::default();
        for key in keys {
            match key {
                StorageKey::ActiveContent => out.active_content = self.active_content.clone(),
                StorageKey::Entries => out.entries = self.entries.clone(),
                StorageKey::Preferences => out.preferences = self.preferences.clone(),
            }
        }
        out
    }
}
