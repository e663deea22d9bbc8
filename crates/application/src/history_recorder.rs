//! History recorder
//!
//! Renders a transcript and hands it to the history store under a name
//! derived from the response timestamp.

use std::sync::Arc;

use reqcheck_domain::{HistoryRecord, RecordId};

use crate::ports::{HistoryError, HistoryStore};

/// Writes history records through a `HistoryStore`.
#[derive(Clone)]
pub struct HistoryRecorder {
    store: Arc<dyn HistoryStore>,
}

impl HistoryRecorder {
    /// Creates a recorder over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }

    /// Writes the record and returns its id.
    ///
    /// A record written in the same second as an earlier one replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot write the record.
    pub async fn record(&self, record: &HistoryRecord) -> Result<RecordId, HistoryError> {
        let id = record.id();
        self.store.write(&id, &record.render()).await?;
        tracing::info!(record = %id, "history record written");
        Ok(id)
    }

    /// Reads a stored record in full.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::NotFound` if the record does not exist.
    pub async fn open(&self, id: &RecordId) -> Result<String, HistoryError> {
        self.store.read(id).await
    }
}
