//! Journal record storage.
//!
//! Two [`JournalRepository`] implementations:
//! - [`MemoryJournalStore`]: process-lifetime storage for tests and embedding
//! - [`FileJournalStore`]: a single pretty-printed JSON array on disk
//!
//! ## Example
//!
//! ```rust,ignore
//! use echo_journal::store::FileJournalStore;
//!
//! let store = FileJournalStore::open("journal.json").await?;
//! store.insert(record).await?;
//! let mine = store.list_for_owner(owner_id).await?;
//! ```

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use uuid::Uuid;

use echo_core::{Error, JournalRecord, JournalRepository, Result};

/// In-memory journal store.
#[derive(Default)]
pub struct MemoryJournalStore {
    records: RwLock<Vec<JournalRecord>>,
}

impl MemoryJournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl JournalRepository for MemoryJournalStore {
    async fn insert(&self, record: JournalRecord) -> Result<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<JournalRecord>> {
        Ok(owned_by(&self.records.read().await, owner_id))
    }
}

/// JSON-file journal store.
///
/// The whole journal is held in memory and the file is rewritten on every
/// insert (temp file, then rename).
pub struct FileJournalStore {
    path: PathBuf,
    records: RwLock<Vec<JournalRecord>>,
}

impl FileJournalStore {
    /// Open the journal at `path`.
    ///
    /// A missing file starts an empty journal. A file that cannot be read or
    /// parsed is logged and also starts empty; it is overwritten on the next
    /// insert.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = load_records(&path).await;
        info!(
            path = %path.display(),
            entry_count = records.len(),
            "Opened journal file"
        );
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    async fn persist(&self, records: &[JournalRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes()).await.map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            Error::Storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), entry_count = records.len(), "Journal file written");
        Ok(())
    }
}

#[async_trait]
impl JournalRepository for FileJournalStore {
    async fn insert(&self, record: JournalRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record);
        if let Err(e) = self.persist(&records).await {
            records.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<JournalRecord>> {
        Ok(owned_by(&self.records.read().await, owner_id))
    }
}

fn owned_by(records: &[JournalRecord], owner_id: Uuid) -> Vec<JournalRecord> {
    records
        .iter()
        .filter(|r| r.owner_id == owner_id)
        .cloned()
        .collect()
}

async fn load_records(path: &Path) -> Vec<JournalRecord> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read journal file, starting empty");
            return Vec::new();
        }
    };

    if content.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(&content) {
        Ok(records) => records,
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to parse journal file, starting empty");
            Vec::new()
        }
    }
}
