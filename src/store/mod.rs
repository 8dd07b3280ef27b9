//! Record store abstraction.
//!
//! Handlers only need three capabilities from the backing table: read the
//! first record, create one, and patch one by id.

mod airtable;
mod memory;

pub use airtable::AirtableStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{ConfigFields, StoredRecord};

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns the first record of the table, if any.
    async fn find_singleton(&self) -> Result<Option<StoredRecord>, StoreError>;

    /// Creates a record with the given initial values and returns it with its
    /// store-assigned id.
    async fn create(&self, fields: ConfigFields) -> Result<StoredRecord, StoreError>;

    /// Overwrites only the columns set in `fields`.
    async fn update_fields(&self, id: &str, fields: ConfigFields) -> Result<(), StoreError>;
}

/// Fetches the configuration record, creating it with defaults when the table
/// is empty.
pub async fn load_or_create(store: &dyn RecordStore) -> Result<StoredRecord, StoreError> {
    if let Some(record) = store.find_singleton().await? {
        return Ok(record);
    }
    tracing::info!("No configuration record found, creating defaults");
    store.create(ConfigFields::defaults()).await
}
