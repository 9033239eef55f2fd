//! Persistence of indictment records.
//!
//! The HTTP layer only talks to [`IndictmentStore`]; the concrete store is
//! chosen at startup and handed in through `AppState`.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use thiserror::Error;
use uuid::Uuid;

use super::model::{Indictment, StoredIndictment};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("indictment {0} not found")]
    NotFound(Uuid),
    #[error("row store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("row store request failed: {0}")]
    Transport(String),
    #[error("failed to decode row store response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The four operations the application needs from a row store.
#[async_trait]
pub trait IndictmentStore {
    /// Insert a new record and return it with its assigned id and timestamps.
    async fn insert(&self, indictment: &Indictment) -> Result<StoredIndictment, StoreError>;

    /// Replace the fields of an existing record.
    async fn update(
        &self,
        id: Uuid,
        indictment: &Indictment,
    ) -> Result<StoredIndictment, StoreError>;

    /// All records, newest first.
    async fn list(&self) -> Result<Vec<StoredIndictment>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// In-process store used when no Supabase project is configured.
#[derive(Debug, Default)]
pub struct MemoryIndictmentStore {
    rows: RwLock<Vec<StoredIndictment>>,
}

impl MemoryIndictmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl IndictmentStore for MemoryIndictmentStore {
    async fn insert(&self, indictment: &Indictment) -> Result<StoredIndictment, StoreError> {
        let row = StoredIndictment {
            id: Uuid::new_v4(),
            indictment: indictment.clone(),
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        self.rows.write().push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        indictment: &Indictment,
    ) -> Result<StoredIndictment, StoreError> {
        let mut rows = self.rows.write();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::NotFound(id))?;
        row.indictment = indictment.clone();
        row.updated_at = Some(Utc::now());
        Ok(row.clone())
    }

    async fn list(&self) -> Result<Vec<StoredIndictment>, StoreError> {
        // Later inserts win ties on equal timestamps.
        let mut rows: Vec<StoredIndictment> = self.rows.read().iter().rev().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut rows = self.rows.write();
        let initial_len = rows.len();
        rows.retain(|row| row.id != id);

        if rows.len() == initial_len {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
