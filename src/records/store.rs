//! In-memory record store.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::types::Record;
use crate::error::RecordError;

/// A validated record waiting for its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub dob: String,
    pub doj: String,
    pub username: String,
}

impl RecordDraft {
    fn into_record(self, id: u64) -> Record {
        Record {
            id,
            name: self.name,
            dob: self.dob,
            doj: self.doj,
            username: self.username,
        }
    }
}

#[derive(Debug, Default)]
struct StoreState {
    records: Vec<Record>,
    last_id: u64,
}

impl StoreState {
    fn contains_username(&self, username: &str) -> bool {
        self.records.iter().any(|r| r.username == username)
    }
}

/// Ordered, append-only record storage shared between handlers.
///
/// Clones share the same underlying records. Insertion order is creation
/// order and no record is ever modified or removed.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    state: Arc<RwLock<StoreState>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a draft, assigning the next identifier.
    ///
    /// The username check and the append run under one write lock, so two
    /// concurrent inserts of the same username cannot both succeed. A
    /// rejected draft consumes no identifier.
    pub async fn insert(&self, draft: RecordDraft) -> Result<Record, RecordError> {
        let mut state = self.state.write().await;

        if state.contains_username(&draft.username) {
            return Err(RecordError::DuplicateUsername);
        }

        state.last_id += 1;
        let record = draft.into_record(state.last_id);
        state.records.push(record.clone());

        debug!(id = record.id, total = state.records.len(), "Record appended");
        Ok(record)
    }

    /// Whether any stored record holds `username` (exact match).
    pub async fn contains_username(&self, username: &str) -> bool {
        self.state.read().await.contains_username(username)
    }

    /// Every record in insertion order.
    pub async fn list_all(&self) -> Vec<Record> {
        self.state.read().await.records.clone()
    }

    /// First record whose username equals `username`.
    pub async fn find_by_username(&self, username: &str) -> Option<Record> {
        self.state
            .read()
            .await
            .records
            .iter()
            .find(|r| r.username == username)
            .cloned()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
