use crate::error::{PromptBoxError, Result};
use crate::filename::{INVALID_CHARS, NAME_SEPARATOR};
use crate::history::DEFAULT_TIMESTAMP_FORMAT;
use crate::i18n::Locale;
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for promptbox, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptBoxConfig {
    /// strftime format for the name of new entries (e.g. "%Y-%m-%d %H-%M-%S")
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Message language; detected from the environment when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for PromptBoxConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            locale: None,
        }
    }
}

/// Morning and evening, short and long month and weekday names, one- and
/// two-digit fields. Text specifiers (`%p`, `%A`, `%B`) render differently
/// across these.
const SAMPLE_INSTANTS: [(i32, u32, u32, u32, u32, u32); 3] = [
    (2024, 12, 31, 23, 59, 58),
    (2024, 5, 1, 9, 5, 3),
    (2025, 9, 17, 12, 0, 0),
];

fn sample_renders(format: &str) -> Vec<String> {
    SAMPLE_INSTANTS
        .iter()
        .filter_map(|&(y, mo, d, h, mi, s)| Local.with_ymd_and_hms(y, mo, d, h, mi, s).single())
        .map(|dt| dt.format(format).to_string())
        .collect()
}

/// Checks that a timestamp format renders, and that what it renders is usable
/// as the start of an unnamed entry.
pub fn validate_timestamp_format(format: &str) -> std::result::Result<(), String> {
    if format.trim().is_empty() {
        return Err("timestamp format cannot be empty".to_string());
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(format!("'{}' is not a valid strftime format", format));
    }

    for sample in sample_renders(format) {
        if sample.contains(NAME_SEPARATOR) {
            return Err(format!(
                "'{}' produces '{}', which would freeze the name immediately",
                format, NAME_SEPARATOR
            ));
        }
        if sample.contains(INVALID_CHARS) {
            return Err(format!(
                "'{}' produces characters that are not allowed in file names",
                format
            ));
        }
    }
    Ok(())
}

impl PromptBoxConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PromptBoxError::Io)?;
        let config: PromptBoxConfig =
            serde_json::from_str(&content).map_err(PromptBoxError::Serialization)?;
        validate_timestamp_format(&config.timestamp_format).map_err(PromptBoxError::Config)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PromptBoxError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PromptBoxError::Serialization)?;
        fs::write(config_path, content).map_err(PromptBoxError::Io)?;
        Ok(())
    }

    /// The configured locale, or the one detected from the environment.
    pub fn effective_locale(&self) -> Locale {
        self.locale.unwrap_or_else(Locale::detect)
    }

    pub fn keys() -> &'static [&'static str] {
        &["timestamp-format", "locale"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "timestamp-format" => Some(self.timestamp_format.clone()),
            "locale" => Some(
                self.locale
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "auto".to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "timestamp-format" => {
                validate_timestamp_format(value)?;
                self.timestamp_format = value.to_string();
                Ok(())
            }
            "locale" => {
                self.locale = if value.eq_ignore_ascii_case("auto") {
                    None
                } else {
                    Some(value.parse()?)
                };
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
