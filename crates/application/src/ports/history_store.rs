//! History store port

use async_trait::async_trait;

use reqcheck_domain::RecordId;

/// Errors that can occur during history operations.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// No record with this id exists.
    #[error("History record not found: {0}")]
    NotFound(RecordId),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sink for rendered history records.
///
/// Writing a record whose id already exists replaces it.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Writes a rendered record, creating the history location if needed.
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    async fn write(&self, id: &RecordId, contents: &str) -> Result<(), HistoryError>;

    /// Reads a record back in full.
    ///
    /// # Errors
    /// Returns `HistoryError::NotFound` if the record does not exist.
    async fn read(&self, id: &RecordId) -> Result<String, HistoryError>;
}
