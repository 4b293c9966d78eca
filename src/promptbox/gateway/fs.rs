use super::PersistenceGateway;
use crate::error::{PromptBoxError, Result};
use crate::model::{Snapshot, StorageKey};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub const STORAGE_FILENAME: &str = "storage.json";

/// Stores the whole snapshot as one JSON document.
pub struct JsonFileGateway {
    root: PathBuf,
}

impl JsonFileGateway {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage_path(&self) -> PathBuf {
        self.root.join(STORAGE_FILENAME)
    }

    async fn load(&self) -> Result<Snapshot> {
        let path = self.storage_path();
        if !fs::try_exists(&path).await.map_err(PromptBoxError::Io)? {
            return Ok(Snapshot::default());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| PromptBoxError::Persistence(format!("read {}: {}", path.display(), e)))?;
        if content.trim().is_empty() {
            return Ok(Snapshot::default());
        }
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(PromptBoxError::Serialization)?;
        Ok(snapshot)
    }

    /// Writes to a sibling temp file, then renames it over the real one.
    async fn write_atomic(&self, snapshot: &Snapshot) -> Result<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| PromptBoxError::Persistence(format!("create {}: {}", self.root.display(), e)))?;

        let path = self.storage_path();
        let tmp = self.root.join(format!("{}.tmp", STORAGE_FILENAME));
        let content = serde_json::to_string_pretty(snapshot).map_err(PromptBoxError::Serialization)?;

        fs::write(&tmp, content)
            .await
            .map_err(|e| PromptBoxError::Persistence(format!("write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| PromptBoxError::Persistence(format!("rename to {}: {}", path.display(), e)))?;
        Ok(())
    }
}

#[async_trait]
impl PersistenceGateway for JsonFileGateway {
    async fn get(&self, keys: &[StorageKey]) -> Result<Snapshot> {
        let snapshot = self.load().await?;
        debug!(path = %self.storage_path().display(), keys = keys.len(), "snapshot read");
        Ok(snapshot.select(keys))
    }

    async fn set(&self, snapshot: Snapshot) -> Result<()> {
        let mut stored = self.load().await?;
        stored.merge(snapshot);
        self.write_atomic(&stored).await?;
        debug!(path = %self.storage_path().display(), "snapshot written");
        Ok(())
    }
}
