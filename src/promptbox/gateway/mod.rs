//! # Persistence Layer
//!
//! The store never touches storage directly. Everything durable goes through
//! the [`PersistenceGateway`] trait: a keyed document with `get`/`set`
//! semantics and snapshot granularity.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileGateway`]: production storage
//!   - One JSON document (`storage.json`) in the data directory
//!   - `set` merges the given keys into the stored document
//!   - Writes go to a temp file that is renamed into place
//!
//! - [`memory::InMemoryGateway`]: storage for tests
//!   - No persistence
//!   - Can simulate read and write failures
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/promptbox/
//! ├── storage.json   # {"activeContent": ..., "entries": [...], "preferences": {...}}
//! └── config.json    # PromptBoxConfig
//! ```
//!
//! Keys are last-write-wins. A `set` that carries only `preferences` leaves the
//! stored history untouched and vice versa.

use crate::error::Result;
use crate::model::{Snapshot, StorageKey};
use async_trait::async_trait;

pub mod fs;
pub mod memory;

/// Asynchronous keyed storage for the prompt history and preferences.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Reads the requested keys. Keys that were never written come back as `None`.
    async fn get(&self, keys: &[StorageKey]) -> Result<Snapshot>;

    /// Writes every key present in `snapshot`, leaving the others as they are.
    async fn set(&self, snapshot: Snapshot) -> Result<()>;
}
