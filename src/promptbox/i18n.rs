//! Message catalog for notices and confirmation prompts.
//!
//! Two tables, `zh` and `en`. Lookups fall back to `en`, then to the key
//! itself. `{name}` placeholders are replaced from the given params; unknown
//! placeholders are left as written.

use crate::confirm::ConfirmPrompt;
use crate::notice::Notice;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Zh,
    #[default]
    En,
}

impl Locale {
    /// Picks `zh` for any `zh*` language tag, `en` otherwise.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_lowercase().starts_with("zh") {
            Locale::Zh
        } else {
            Locale::En
        }
    }

    /// Reads `LC_ALL`, `LC_MESSAGES` and `LANG`, first non-empty wins.
    pub fn detect() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|value| Self::from_tag(&value))
            .unwrap_or_default()
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh" => Ok(Locale::Zh),
            "en" => Ok(Locale::En),
            other => Err(format!("unknown locale '{}' (expected zh or en)", other)),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Zh => write!(f, "zh"),
            Locale::En => write!(f, "en"),
        }
    }
}

type Table = HashMap<&'static str, &'static str>;

static ZH: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("copied", "已复制到剪贴板"),
        ("copy_failed", "复制失败"),
        ("no_content", "无内容可复制"),
        ("min_font_size", "字体大小不能小于 {size}px"),
        ("max_font_size", "字体大小不能大于 {size}px"),
        ("filename_txt_required", "文件名必须以 .txt 结尾"),
        ("filename_invalid_chars", "文件名包含非法字符"),
        ("history_cleared", "已清空所有历史记录"),
        ("entry_created", "已新建 {name}"),
        ("entry_selected", "已切换到 {name}"),
        ("entry_renamed", "已重命名为 {name}"),
        ("entry_deleted", "已删除 {name}"),
        ("cancelled", "已取消"),
        ("confirm_delete", "确定要删除 \"{name}\" 吗？"),
        ("confirm_clear_history", "确定要清空所有历史记录吗？此操作不可恢复。"),
        ("confirm_yes", "删除"),
        ("confirm_clear_yes", "清空"),
        ("confirm_no", "取消"),
    ])
});

static EN: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("copied", "Copied to clipboard"),
        ("copy_failed", "Failed to copy"),
        ("no_content", "No content to copy"),
        ("min_font_size", "Font size cannot be smaller than {size}px"),
        ("max_font_size", "Font size cannot be larger than {size}px"),
        ("filename_txt_required", "Filename must end with .txt"),
        ("filename_invalid_chars", "Filename contains invalid characters"),
        ("history_cleared", "All history cleared"),
        ("entry_created", "Created {name}"),
        ("entry_selected", "Switched to {name}"),
        ("entry_renamed", "Renamed to {name}"),
        ("entry_deleted", "Deleted {name}"),
        ("cancelled", "Cancelled"),
        ("confirm_delete", "Are you sure you want to delete \"{name}\"?"),
        (
            "confirm_clear_history",
            "Are you sure you want to clear all history? This cannot be undone.",
        ),
        ("confirm_yes", "Delete"),
        ("confirm_clear_yes", "Clear"),
        ("confirm_no", "Cancel"),
    ])
});

fn table(locale: Locale) -> &'static Table {
    match locale {
        Locale::Zh => &ZH,
        Locale::En => &EN,
    }
}

/// Replaces `{param}` placeholders; placeholders without a value stay as-is.
fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Looks up `key` in the locale's table and fills in `params`.
pub fn translate(locale: Locale, key: &str, params: &[(&str, String)]) -> String {
    let template = table(locale).get(key).or_else(|| EN.get(key));
    match template {
        Some(template) => interpolate(template, params),
        None => {
            warn!(key, %locale, "translation missing");
            key.to_string()
        }
    }
}

pub fn notice_text(locale: Locale, notice: &Notice) -> String {
    translate(locale, notice.key(), &notice.params())
}

/// The question plus the confirm and cancel labels for a prompt.
pub fn confirm_texts(locale: Locale, prompt: &ConfirmPrompt) -> (String, String, String) {
    let (question, yes) = match prompt {
        ConfirmPrompt::DeleteEntry { file_name } => (
            translate(locale, "confirm_delete", &[("name", file_name.clone())]),
            translate(locale, "confirm_yes", &[]),
        ),
        ConfirmPrompt::ClearHistory => (
            translate(locale, "confirm_clear_history", &[]),
            translate(locale, "confirm_clear_yes", &[]),
        ),
    };
    (question, yes, translate(locale, "confirm_no", &[]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("zh_CN.UTF-8"), Locale::Zh);
        assert_eq!(Locale::from_tag("zh-TW"), Locale::Zh);
        assert_eq!(Locale::from_tag("en_US.UTF-8"), Locale::En);
        assert_eq!(Locale::from_tag("fr_FR"), Locale::En);
    }

    #[test]
    fn test_params_are_substituted() {
        let text = notice_text(Locale::En, &Notice::MinFontSize { size: 12 });
        assert_eq!(text, "Font size cannot be smaller than 12px");

        let text = notice_text(Locale::Zh, &Notice::MaxFontSize { size: 24 });
        assert_eq!(text, "字体大小不能大于 24px");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        assert_eq!(translate(Locale::En, "min_font_size", &[]), "Font size cannot be smaller than {size}px");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(translate(Locale::Zh, "no_such_key", &[]), "no_such_key");
    }

    #[test]
    fn test_every_notice_has_both_translations() {
        let notices = [
            Notice::NoContentToCopy,
            Notice::Copied,
            Notice::CopyFailed,
            Notice::MinFontSize { size: 12 },
            Notice::MaxFontSize { size: 24 },
            Notice::FilenameTxtRequired,
            Notice::FilenameInvalidChars,
            Notice::HistoryCleared,
            Notice::EntryCreated { file_name: "a.txt".into() },
            Notice::EntrySelected { file_name: "a.txt".into() },
            Notice::EntryRenamed { file_name: "a.txt".into() },
            Notice::EntryDeleted { file_name: "a.txt".into() },
            Notice::Cancelled,
        ];
        for notice in notices {
            assert!(ZH.contains_key(notice.key()), "zh missing {}", notice.key());
            assert!(EN.contains_key(notice.key()), "en missing {}", notice.key());
        }
    }

    #[test]
    fn test_confirm_texts() {
        let (question, yes, no) = confirm_texts(
            Locale::En,
            &ConfirmPrompt::DeleteEntry { file_name: "a.txt".into() },
        );
        assert_eq!(question, "Are you sure you want to delete \"a.txt\"?");
        assert_eq!(yes, "Delete");
        assert_eq!(no, "Cancel");
    }
}
