//! # CLI Layer
//!
//! One possible UI client for promptbox. It is the only place that:
//! - Reads stdin and writes stdout/stderr
//! - Asks the user to confirm destructive operations
//! - Turns notices into localized text
//!
//! ## Structure
//!
//! - `run()`: dispatch (called by `main.rs`)
//! - `init_context()`: resolves the data directory, loads config and the store
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::logging::init_logging;
use super::render::{
    print_messages, print_notices, render_config, render_entry_list, render_preferences,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use promptbox::api::PromptStore;
use promptbox::clipboard::copy_to_clipboard;
use promptbox::commands::config::ConfigAction;
use promptbox::commands::{self, CmdMessage, CmdResult};
use promptbox::config::PromptBoxConfig;
use promptbox::confirm::{Answered, ConfirmGate, ConfirmPrompt};
use promptbox::editor::edit_text;
use promptbox::error::{PromptBoxError, Result};
use promptbox::gateway::fs::JsonFileGateway;
use promptbox::i18n::{confirm_texts, Locale};
use promptbox::index::DisplayIndex;
use promptbox::notice::Notice;
use std::io::{BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

const HOME_ENV: &str = "PROMPTBOX_HOME";

struct AppContext {
    store: PromptStore<JsonFileGateway>,
    locale: Locale,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = data_dir()?;
    debug!(dir = %data_dir.display(), "using data directory");

    // Config has to stay reachable even when the stored config is invalid.
    let command = match cli.command {
        Some(Commands::Config { key, value }) => return handle_config(data_dir, key, value),
        other => other,
    };

    let mut ctx = init_context(data_dir).await?;

    match command {
        Some(Commands::New) => handle_new(&mut ctx).await,
        Some(Commands::Write { text }) => handle_write(&mut ctx, text).await,
        Some(Commands::Select { index }) => handle_select(&mut ctx, &index).await,
        Some(Commands::Rename { index, name }) => {
            handle_rename(&mut ctx, &index, &name.join(" ")).await
        }
        Some(Commands::Delete { index, yes }) => handle_delete(&mut ctx, &index, yes).await,
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes).await,
        Some(Commands::Show) => handle_show(&ctx),
        Some(Commands::Edit) => handle_edit(&mut ctx).await,
        Some(Commands::Copy) => handle_copy(&ctx),
        Some(Commands::Wrap) => {
            let result = ctx.store.toggle_word_wrap().await?;
            print_preferences(&ctx, &result);
            Ok(())
        }
        Some(Commands::Theme) => {
            let result = ctx.store.cycle_theme().await?;
            print_preferences(&ctx, &result);
            Ok(())
        }
        Some(Commands::Font { delta }) => {
            let result = ctx.store.change_font_size(delta).await?;
            print_preferences(&ctx, &result);
            Ok(())
        }
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.trim().is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    ProjectDirs::from("com", "promptbox", "promptbox")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            PromptBoxError::Config(format!(
                "Could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

async fn init_context(data_dir: PathBuf) -> Result<AppContext> {
    let config = PromptBoxConfig::load(&data_dir)?;
    let locale = config.effective_locale();
    let store = PromptStore::load(JsonFileGateway::new(data_dir), &config).await?;
    Ok(AppContext { store, locale })
}

/// Asks on the terminal. Anything but an explicit yes cancels.
struct TerminalGate {
    locale: Locale,
}

impl ConfirmGate for TerminalGate {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> bool {
        let (question, yes, no) = confirm_texts(self.locale, prompt);
        print!("{} [y = {} / N = {}] ", question, yes, no);
        if std::io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => {
                let answer = answer.trim();
                answer.eq_ignore_ascii_case("y")
                    || answer.eq_ignore_ascii_case("yes")
                    || answer == yes
            }
        }
    }
}

fn confirm_gate(ctx: &AppContext, yes: bool) -> Box<dyn ConfirmGate> {
    if yes {
        Box::new(Answered(true))
    } else {
        Box::new(TerminalGate { locale: ctx.locale })
    }
}

fn parse_position(index: &str) -> Result<usize> {
    Ok(index.parse::<DisplayIndex>()?.position())
}

fn print_result(ctx: &AppContext, result: &CmdResult) {
    print_notices(ctx.locale, &result.notices);
    print_messages(&result.messages);
}

fn print_preferences(ctx: &AppContext, result: &CmdResult) {
    print_result(ctx, result);
    if let Some(prefs) = &result.preferences {
        print!("{}", render_preferences(prefs));
    }
}

async fn handle_new(ctx: &mut AppContext) -> Result<()> {
    let mut result = ctx.store.create_entry().await?;
    if !result.changed {
        result.add_message(CmdMessage::warning(
            "The active entry is still empty; write something first.",
        ));
    }
    print_result(ctx, &result);
    Ok(())
}

async fn handle_write(ctx: &mut AppContext, text: Vec<String>) -> Result<()> {
    let content = if text.is_empty() {
        if std::io::stdin().is_terminal() {
            return Err(PromptBoxError::Api(
                "No text given. Pass it as arguments or pipe it in.".to_string(),
            ));
        }
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        strip_trailing_newline(buffer)
    } else {
        text.join(" ")
    };

    let mut result = ctx.store.update_active_content(&content).await?;
    if let Some(active) = result.affected_entries.first() {
        result.add_message(CmdMessage::info(active.file_name.clone()));
    }
    print_result(ctx, &result);
    Ok(())
}

async fn handle_select(ctx: &mut AppContext, index: &str) -> Result<()> {
    let result = ctx.store.promote(parse_position(index)?).await?;
    print_result(ctx, &result);
    Ok(())
}

async fn handle_rename(ctx: &mut AppContext, index: &str, name: &str) -> Result<()> {
    let result = ctx.store.rename(parse_position(index)?, name).await?;
    print_result(ctx, &result);
    Ok(())
}

async fn handle_delete(ctx: &mut AppContext, index: &str, yes: bool) -> Result<()> {
    let position = parse_position(index)?;
    let mut gate = confirm_gate(ctx, yes);
    let result = ctx.store.remove(position, gate.as_mut()).await?;
    print_result(ctx, &result);
    Ok(())
}

async fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let mut gate = confirm_gate(ctx, yes);
    let result = ctx.store.clear(gate.as_mut()).await?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.store.list();
    print!("{}", render_entry_list(&result.listed_entries));
    Ok(())
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let result = ctx.store.show();
    if let Some(text) = result.text {
        if !text.is_empty() {
            println!("{}", text);
        }
    }
    Ok(())
}

async fn handle_edit(ctx: &mut AppContext) -> Result<()> {
    let current = ctx.store.active_content().to_string();
    let edited = edit_text(&current)?;

    if edited == current && !ctx.store.is_empty() {
        print_messages(&[CmdMessage::info("No changes.")]);
        return Ok(());
    }

    let mut result = ctx.store.update_active_content(&edited).await?;
    if let Some(active) = result.affected_entries.first() {
        result.add_message(CmdMessage::info(active.file_name.clone()));
    }
    print_result(ctx, &result);
    Ok(())
}

fn handle_copy(ctx: &AppContext) -> Result<()> {
    let mut result = ctx.store.copy_text();
    if let Some(text) = &result.text {
        let notice = match copy_to_clipboard(text) {
            Ok(()) => Notice::Copied,
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                Notice::CopyFailed
            }
        };
        result.add_notice(notice);
    }
    print_result(ctx, &result);
    Ok(())
}

fn handle_config(data_dir: PathBuf, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = commands::config::run(&data_dir, action)?;
    print_messages(&result.messages);
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    Ok(())
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_newline() {
        assert_eq!(strip_trailing_newline("a\n\n".into()), "a\n");
        assert_eq!(strip_trailing_newline("a\r\n".into()), "a");
        assert_eq!(strip_trailing_newline("a".into()), "a");
    }

    #[test]
    fn display_index_to_position() {
        assert_eq!(parse_position("1").unwrap(), 0);
        assert_eq!(parse_position("3.").unwrap(), 2);
        assert!(parse_position("0").is_err());
        assert!(parse_position("x").is_err());
    }
}
