use async_trait::async_trait;
use nanoid::nanoid;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use super::RecordStore;
use crate::error::StoreError;
use crate::model::{ConfigFields, StoredRecord};

/// In-process table holding at most the one configuration record.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: RwLock<Option<StoredRecord>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an existing record.
    pub fn with_record(fields: ConfigFields) -> Self {
        Self {
            record: RwLock::new(Some(StoredRecord {
                id: format!("rec{}", nanoid!(14)),
                fields,
            })),
            writes: AtomicUsize::new(0),
        }
    }

    /// Current record, for inspection.
    pub async fn snapshot(&self) -> Option<StoredRecord> {
        self.record.read().await.clone()
    }

    /// Number of create and update calls served.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_singleton(&self) -> Result<Option<StoredRecord>, StoreError> {
        Ok(self.record.read().await.clone())
    }

    async fn create(&self, fields: ConfigFields) -> Result<StoredRecord, StoreError> {
        let record = StoredRecord {
            id: format!("rec{}", nanoid!(14)),
            fields,
        };
        *self.record.write().await = Some(record.clone());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(record)
    }

    async fn update_fields(&self, id: &str, fields: ConfigFields) -> Result<(), StoreError> {
        let mut guard = self.record.write().await;
        let record = guard
            .as_mut()
            .filter(|record| record.id == id)
            .ok_or_else(|| StoreError::Upstream {
                status: 404,
                message: format!("record {} not found", id),
            })?;

        if let Some(name) = fields.model_name {
            record.fields.model_name = Some(name);
        }
        if let Some(avatar) = fields.avatar {
            record.fields.avatar = Some(avatar);
        }
        if let Some(prizes) = fields.prizes {
            record.fields.prizes = Some(prizes);
        }
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
