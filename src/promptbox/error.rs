use crate::filename::RenameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptBoxError {
    #[error("No entry at position {index} (history has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid file name: {0}")]
    Rename(#[from] RenameError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PromptBoxError>;
