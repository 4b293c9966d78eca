//! File name rules for history entries.
//!
//! An entry starts life as `{timestamp}.txt`. Once its content yields a label
//! it becomes `{timestamp}_{label}.txt` and the name is frozen: the `_`
//! separator marks a name that the naming engine must never touch again.

use thiserror::Error;

/// Separator between the timestamp prefix and the derived label.
pub const NAME_SEPARATOR: char = '_';

/// Required suffix for every user-supplied name.
pub const TXT_SUFFIX: &str = ".txt";

/// Characters that are not allowed in a file name.
pub const INVALID_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// True once a name carries a derived label and must not be renamed again.
pub fn is_named(file_name: &str) -> bool {
    file_name.contains(NAME_SEPARATOR)
}

/// Replaces every character in [`INVALID_CHARS`] with `_`.
pub fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// The portion of a file name before its extension.
fn stem(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

/// Builds `{timestamp}_{label}.txt` from the entry's current name.
///
/// Callers must check [`is_named`] first; a name is derived once per entry.
///
/// ```
/// use promptbox::filename::derive_filename;
///
/// assert_eq!(
///     derive_filename("2024-01-01 09-30-00.txt", "a/b: c?"),
///     "2024-01-01 09-30-00_a_b_ c_.txt"
/// );
/// ```
pub fn derive_filename(existing_name: &str, label: &str) -> String {
    format!(
        "{}{}{}{}",
        stem(existing_name),
        NAME_SEPARATOR,
        sanitize_label(label),
        TXT_SUFFIX
    )
}

/// What a rename request amounts to once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Empty input or the current name: nothing to do.
    Unchanged,
    Renamed(String),
}

/// Why a user-supplied name was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameError {
    #[error("file name must end with .txt")]
    TxtSuffixRequired,

    #[error("file name contains invalid characters")]
    InvalidChars,
}

/// Checks a rename request against the current name.
///
/// Surrounding whitespace in `new_name` is ignored.
pub fn validate_rename(current: &str, new_name: &str) -> Result<RenameOutcome, RenameError> {
    let new_name = new_name.trim();
    if new_name.is_empty() || new_name == current {
        return Ok(RenameOutcome::Unchanged);
    }

    if !new_name.ends_with(TXT_SUFFIX) {
        return Err(RenameError::TxtSuffixRequired);
    }

    if new_name.contains(INVALID_CHARS) {
        return Err(RenameError::InvalidChars);
    }

    Ok(RenameOutcome::Renamed(new_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_keeps_timestamp_prefix() {
        assert_eq!(
            derive_filename("2024-01-01 10-00-00.txt", "the quick brown fox jumps"),
            "2024-01-01 10-00-00_the quick brown fox jumps.txt"
        );
    }

    #[test]
    fn derive_sanitizes_every_invalid_char() {
        assert_eq!(
            derive_filename("t.txt", r#"a\b/c:d*e?f"g<h>i|j"#),
            "t_a_b_c_d_e_f_g_h_i_j.txt"
        );
    }

    #[test]
    fn derive_without_extension_uses_whole_name() {
        assert_eq!(derive_filename("stamp", "label"), "stamp_label.txt");
    }

    #[test]
    fn derived_names_are_frozen() {
        let derived = derive_filename("2024-01-01 10-00-00.txt", "label");
        assert!(is_named(&derived));
        assert!(!is_named("2024-01-01 10-00-00.txt"));
    }

    #[test]
    fn rename_requires_txt_suffix() {
        assert_eq!(
            validate_rename("2024-01-01_x.txt", "notes"),
            Err(RenameError::TxtSuffixRequired)
        );
    }

    #[test]
    fn rename_rejects_invalid_chars() {
        assert_eq!(
            validate_rename("2024-01-01_x.txt", "a/b.txt"),
            Err(RenameError::InvalidChars)
        );
        assert_eq!(
            validate_rename("2024-01-01_x.txt", "what?.txt"),
            Err(RenameError::InvalidChars)
        );
    }

    #[test]
    fn suffix_is_checked_before_chars() {
        assert_eq!(
            validate_rename("x.txt", "a/b"),
            Err(RenameError::TxtSuffixRequired)
        );
    }

    #[test]
    fn empty_or_identical_name_is_a_noop() {
        assert_eq!(validate_rename("x.txt", ""), Ok(RenameOutcome::Unchanged));
        assert_eq!(validate_rename("x.txt", "   "), Ok(RenameOutcome::Unchanged));
        assert_eq!(validate_rename("x.txt", "x.txt"), Ok(RenameOutcome::Unchanged));
    }

    #[test]
    fn valid_rename_is_trimmed() {
        assert_eq!(
            validate_rename("x.txt", "  notes.txt "),
            Ok(RenameOutcome::Renamed("notes.txt".to_string()))
        );
    }

    #[test]
    fn rename_errors_display() {
        assert_eq!(
            RenameError::TxtSuffixRequired.to_string(),
            "file name must end with .txt"
        );
        let err: Box<dyn std::error::Error> = Box::new(RenameError::InvalidChars);
        assert_eq!(err.to_string(), "file name contains invalid characters");
        assert_eq!(
            crate::error::PromptBoxError::from(RenameError::InvalidChars).to_string(),
            "Invalid file name: file name contains invalid characters"
        );
    }
}
