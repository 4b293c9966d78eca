use crate::error::{PromptBoxError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const EDIT_FILE_NAME: &str = "promptbox_edit.txt";

/// Gets the editor command from the environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(PromptBoxError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Splits an editor setting like `code --wait` into program and arguments.
fn split_command(editor: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = editor.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();
    let (program, args) = split_command(&editor)
        .ok_or_else(|| PromptBoxError::Api("Editor command is empty".to_string()))?;

    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .map_err(|e| PromptBoxError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(PromptBoxError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    Ok(fs::read_to_string(path)?)
}

/// Opens `initial` in the editor and returns what the user saved.
///
/// The single trailing newline most editors append is dropped.
pub fn edit_text(initial: &str) -> Result<String> {
    let temp_file = env::temp_dir().join(EDIT_FILE_NAME);
    fs::write(&temp_file, initial)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    let mut edited = result?;
    if edited.ends_with('\n') && !initial.ends_with('\n') {
        edited.pop();
        if edited.ends_with('\r') {
            edited.pop();
        }
    }
    Ok(edited)
}
