use super::PersistenceGateway;
use crate::error::{PromptBoxError, Result};
use crate::model::{Snapshot, StorageKey};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory gateway for testing.
///
/// The lock is never held across an await point.
#[derive(Default)]
pub struct InMemoryGateway {
    stored: Mutex<Snapshot>,
    simulate_write_error: AtomicBool,
    simulate_read_error: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `snapshot` already stored.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            stored: Mutex::new(snapshot),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// A copy of everything stored, regardless of keys.
    pub fn stored(&self) -> Result<Snapshot> {
        self.stored
            .lock()
            .map(|s| s.clone())
            .map_err(|_| PromptBoxError::Persistence("memory store poisoned".to_string()))
    }
}

#[async_trait]
impl PersistenceGateway for InMemoryGateway {
    async fn get(&self, keys: &[StorageKey]) -> Result<Snapshot> {
        if self.simulate_read_error.load(Ordering::SeqCst) {
            return Err(PromptBoxError::Persistence("Simulated read error".to_string()));
        }
        Ok(self.stored()?.select(keys))
    }

    async fn set(&self, snapshot: Snapshot) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(PromptBoxError::Persistence("Simulated write error".to_string()));
        }
        let mut stored = self
            .stored
            .lock()
            .map_err(|_| PromptBoxError::Persistence("memory store poisoned".to_string()))?;
        stored.merge(snapshot);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
