//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Layout (width, truncation,
//! padding) is Unicode-aware so CJK names line up with Latin ones.

use chrono::{DateTime, Utc};
use colored::Colorize;
use promptbox::commands::{CmdMessage, MessageLevel};
use promptbox::config::PromptBoxConfig;
use promptbox::i18n::{notice_text, Locale};
use promptbox::index::DisplayEntry;
use promptbox::model::Preferences;
use promptbox::notice::Notice;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
pub const ACTIVE_MARKER: &str = "▸";

pub fn render_entry_list(entries: &[DisplayEntry]) -> String {
    if entries.is_empty() {
        return "No prompts yet.\n".to_string();
    }

    let index_width = entries
        .last()
        .map(|e| e.index.to_string().len())
        .unwrap_or(1);
    let mut output = String::new();

    for de in entries {
        let marker = if de.is_active { ACTIVE_MARKER } else { " " };
        let idx = format!("{:>width$}.", de.index, width = index_width);
        let fixed = marker.width() + 1 + idx.width() + 1 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);

        let name = truncate_to_width(&de.entry.file_name, available);
        let padding = " ".repeat(available.saturating_sub(name.width()));
        let time_ago = format_time_ago(de.entry.timestamp);

        if de.is_active {
            output.push_str(&format!(
                "{} {} {}{}{}\n",
                marker.green(),
                idx,
                name.bold(),
                padding,
                time_ago.dimmed()
            ));
        } else {
            output.push_str(&format!(
                "{} {} {}{}{}\n",
                marker,
                idx,
                name,
                padding,
                time_ago.dimmed()
            ));
        }
    }

    output
}

pub fn render_notices(locale: Locale, notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|notice| {
            let text = notice_text(locale, notice);
            let styled = if notice.is_problem() {
                text.yellow()
            } else if *notice == Notice::Cancelled {
                text.dimmed()
            } else {
                text.green()
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|msg| {
            let styled = match msg.level {
                MessageLevel::Info => msg.content.normal(),
                MessageLevel::Success => msg.content.green(),
                MessageLevel::Warning => msg.content.yellow(),
                MessageLevel::Error => msg.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn render_preferences(preferences: &Preferences) -> String {
    format!(
        "word wrap: {}\ntheme: {}\nfont size: {}px\n",
        if preferences.word_wrap { "on" } else { "off" },
        preferences.theme,
        preferences.font_size
    )
}

pub fn render_config(config: &PromptBoxConfig) -> String {
    PromptBoxConfig::keys()
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

pub fn print_notices(locale: Locale, notices: &[Notice]) {
    print!("{}", render_notices(locale, notices));
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    if s.width() <= max_width {
        return s.to_string();
    }

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptbox::index::index_entries;
    use promptbox::model::{PromptEntry, Theme};

    fn entry(name: &str) -> PromptEntry {
        PromptEntry {
            file_name: name.to_string(),
            content: String::new(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_list() {
        assert_eq!(render_entry_list(&[]), "No prompts yet.\n");
    }

    #[test]
    fn list_shows_indexes_and_names() {
        let listed = index_entries(&[entry("b.txt"), entry("a.txt")]);
        let output = render_entry_list(&listed);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("1."));
        assert!(lines[0].contains("b.txt"));
        assert!(lines[0].contains(ACTIVE_MARKER));
        assert!(lines[1].contains("2."));
        assert!(!lines[1].contains(ACTIVE_MARKER));
    }

    #[test]
    fn long_names_are_truncated_by_width() {
        let long = "测".repeat(80);
        let truncated = truncate_to_width(&long, 20);
        assert!(truncated.width() <= 20);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn short_names_are_kept() {
        assert_eq!(truncate_to_width("a.txt", 20), "a.txt");
    }

    #[test]
    fn notices_are_translated() {
        let output = render_notices(
            Locale::En,
            &[Notice::EntryDeleted {
                file_name: "x.txt".into(),
            }],
        );
        assert!(output.contains("Deleted x.txt"));
    }

    #[test]
    fn messages_keep_content() {
        let output = render_messages(&[CmdMessage::info("one"), CmdMessage::error("two")]);
        assert!(output.contains("one"));
        assert!(output.contains("two"));
    }

    #[test]
    fn preferences_summary() {
        let prefs = Preferences {
            word_wrap: false,
            theme: Theme::Dark,
            font_size: 18,
        };
        let output = render_preferences(&prefs);
        assert!(output.contains("word wrap: off"));
        assert!(output.contains("18px"));
    }

    #[test]
    fn time_column_is_fixed_width() {
        assert_eq!(format_time_ago(Utc::now()).chars().count(), TIME_WIDTH);
    }
}
