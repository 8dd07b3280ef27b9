//! Shared application state.

use std::sync::Arc;

use crate::config::AdminCredentials;
use crate::store::RecordStore;

/// Shared application state accessible to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Backing table for the configuration record
    pub store: Arc<dyn RecordStore>,
    /// Expected administrator credentials
    pub credentials: AdminCredentials,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, credentials: AdminCredentials) -> Self {
        Self { store, credentials }
    }
}
