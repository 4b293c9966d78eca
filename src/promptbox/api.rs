//! # API Facade
//!
//! [`PromptStore`] is the single entry point for every promptbox operation,
//! whatever UI drives it. It owns the in-memory [`PromptHistory`] and
//! [`Preferences`] and the [`PersistenceGateway`] they are written through.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the matching command in `commands/*.rs`
//! - **Persists** after a command reports `changed`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic of its own.
//!
//! ## Persistence
//!
//! History operations write `activeContent` and `entries` together;
//! preference operations write only `preferences`. A command that changed
//! nothing (a refused `create_entry`, a cancelled `clear`, a rejected rename)
//! writes nothing.
//!
//! When the gateway fails, the error is returned to the caller but the
//! in-memory mutation stays. The session keeps working from memory and the
//! next successful write carries the full state again.
//!
//! ## Indexes
//!
//! Positions here are 0-based. The CLI speaks 1-based
//! [`DisplayIndex`](crate::index::DisplayIndex) and converts before calling in.
//!
//! ## Generic Over PersistenceGateway
//!
//! - Production: `PromptStore<JsonFileGateway>`
//! - Testing: `PromptStore<InMemoryGateway>`

use crate::commands::{self, CmdResult};
use crate::config::PromptBoxConfig;
use crate::confirm::ConfirmGate;
use crate::error::Result;
use crate::gateway::PersistenceGateway;
use crate::history::PromptHistory;
use crate::model::{Preferences, PromptEntry, Snapshot, StorageKey, MAX_FONT_SIZE, MIN_FONT_SIZE};
use chrono::Utc;
use tracing::{debug, info, warn};

pub struct PromptStore<G: PersistenceGateway> {
    gateway: G,
    history: PromptHistory,
    preferences: Preferences,
}

impl<G: PersistenceGateway> PromptStore<G> {
    /// An empty store. Nothing is read from the gateway.
    pub fn new(gateway: G, config: &PromptBoxConfig) -> Self {
        Self {
            gateway,
            history: PromptHistory::new(&config.timestamp_format),
            preferences: Preferences::default(),
        }
    }

    /// Reads every key from the gateway and rebuilds the store.
    pub async fn load(gateway: G, config: &PromptBoxConfig) -> Result<Self> {
        let snapshot = gateway.get(&StorageKey::ALL).await?;

        let entries = snapshot.entries.unwrap_or_default();
        let active_content = snapshot.active_content.unwrap_or_default();
        let (history, repaired) =
            PromptHistory::from_parts(entries, active_content, &config.timestamp_format);
        if repaired {
            warn!("active content did not match the first entry; restored from the entry");
        }

        let mut preferences = snapshot.preferences.unwrap_or_default();
        preferences.font_size = preferences.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);

        info!(entries = history.len(), "loaded prompt history");
        Ok(Self {
            gateway,
            history,
            preferences,
        })
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn history(&self) -> &PromptHistory {
        &self.history
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn entries(&self) -> &[PromptEntry] {
        self.history.entries()
    }

    pub fn active_content(&self) -> &str {
        self.history.active_content()
    }

    pub fn entry(&self, index: usize) -> Option<&PromptEntry> {
        self.history.get(index)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub async fn create_entry(&mut self) -> Result<CmdResult> {
        debug!("create_entry");
        let result = commands::create::run(&mut self.history, Utc::now());
        self.persist_history(&result).await?;
        Ok(result)
    }

    pub async fn update_active_content(&mut self, text: &str) -> Result<CmdResult> {
        debug!(len = text.len(), "update_active_content");
        let result = commands::update::run(&mut self.history, text, Utc::now());
        self.persist_history(&result).await?;
        Ok(result)
    }

    pub async fn promote(&mut self, index: usize) -> Result<CmdResult> {
        debug!(index, "promote");
        let result = commands::select::run(&mut self.history, index)?;
        self.persist_history(&result).await?;
        Ok(result)
    }

    pub async fn rename(&mut self, index: usize, new_name: &str) -> Result<CmdResult> {
        debug!(index, new_name, "rename");
        let result = commands::rename::run(&mut self.history, index, new_name)?;
        self.persist_history(&result).await?;
        Ok(result)
    }

    pub async fn remove<C: ConfirmGate + ?Sized>(
        &mut self,
        index: usize,
        gate: &mut C,
    ) -> Result<CmdResult> {
        debug!(index, "remove");
        let result = commands::delete::run(&mut self.history, index, gate)?;
        self.persist_history(&result).await?;
        Ok(result)
    }

    pub async fn clear<C: ConfirmGate + ?Sized>(&mut self, gate: &mut C) -> Result<CmdResult> {
        debug!("clear");
        let result = commands::clear::run(&mut self.history, gate);
        self.persist_history(&result).await?;
        Ok(result)
    }

    pub async fn toggle_word_wrap(&mut self) -> Result<CmdResult> {
        let result = commands::preferences::toggle_word_wrap(&mut self.preferences);
        self.persist_preferences(&result).await?;
        Ok(result)
    }

    pub async fn cycle_theme(&mut self) -> Result<CmdResult> {
        let result = commands::preferences::cycle_theme(&mut self.preferences);
        self.persist_preferences(&result).await?;
        Ok(result)
    }

    pub async fn change_font_size(&mut self, delta: i32) -> Result<CmdResult> {
        debug!(delta, "change_font_size");
        let result = commands::preferences::change_font_size(&mut self.preferences, delta);
        self.persist_preferences(&result).await?;
        Ok(result)
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.history)
    }

    pub fn show(&self) -> CmdResult {
        commands::list::active(&self.history)
    }

    pub fn copy_text(&self) -> CmdResult {
        commands::copy::run(&self.history)
    }

    async fn persist_history(&self, result: &CmdResult) -> Result<()> {
        if !result.changed {
            return Ok(());
        }
        let snapshot = Snapshot::history(self.history.entries(), self.history.active_content());
        self.gateway.set(snapshot).await?;
        info!(entries = self.history.len(), "saved prompt history");
        Ok(())
    }

    async fn persist_preferences(&self, result: &CmdResult) -> Result<()> {
        if !result.changed {
            return Ok(());
        }
        self.gateway
            .set(Snapshot::preferences(&self.preferences))
            .await?;
        info!("saved preferences");
        Ok(())
    }
}
