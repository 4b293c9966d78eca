use crate::filename::RenameError;

/// Discrete notifications for the presentation layer.
///
/// Each variant maps to a message key in the [`crate::i18n`] catalog; the
/// fields become its `{placeholders}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NoContentToCopy,
    Copied,
    CopyFailed,
    MinFontSize { size: u8 },
    MaxFontSize { size: u8 },
    FilenameTxtRequired,
    FilenameInvalidChars,
    HistoryCleared,
    EntryCreated { file_name: String },
    EntrySelected { file_name: String },
    EntryRenamed { file_name: String },
    EntryDeleted { file_name: String },
    Cancelled,
}

impl Notice {
    pub fn key(&self) -> &'static str {
        match self {
            Notice::NoContentToCopy => "no_content",
            Notice::Copied => "copied",
            Notice::CopyFailed => "copy_failed",
            Notice::MinFontSize { .. } => "min_font_size",
            Notice::MaxFontSize { .. } => "max_font_size",
            Notice::FilenameTxtRequired => "filename_txt_required",
            Notice::FilenameInvalidChars => "filename_invalid_chars",
            Notice::HistoryCleared => "history_cleared",
            Notice::EntryCreated { .. } => "entry_created",
            Notice::EntrySelected { .. } => "entry_selected",
            Notice::EntryRenamed { .. } => "entry_renamed",
            Notice::EntryDeleted { .. } => "entry_deleted",
            Notice::Cancelled => "cancelled",
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Notice::MinFontSize { size } | Notice::MaxFontSize { size } => {
                vec![("size", size.to_string())]
            }
            Notice::EntryCreated { file_name }
            | Notice::EntrySelected { file_name }
            | Notice::EntryRenamed { file_name }
            | Notice::EntryDeleted { file_name } => vec![("name", file_name.clone())],
            _ => Vec::new(),
        }
    }

    /// Validation failures, as opposed to confirmations of work done.
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            Notice::NoContentToCopy
                | Notice::CopyFailed
                | Notice::MinFontSize { .. }
                | Notice::MaxFontSize { .. }
                | Notice::FilenameTxtRequired
                | Notice::FilenameInvalidChars
        )
    }
}

impl From<RenameError> for Notice {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::TxtSuffixRequired => Notice::FilenameTxtRequired,
            RenameError::InvalidChars => Notice::FilenameInvalidChars,
        }
    }
}
