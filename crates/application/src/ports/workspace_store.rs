//! Workspace store port
//!
//! Persistence for the single document holding saved requests and
//! global variables.

use async_trait::async_trait;

use reqcheck_domain::StoreDocument;

/// Errors that can occur while reading or writing the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file exists but is not a valid document.
    #[error("Malformed store file: {0}")]
    Malformed(String),

    /// The document could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Repository trait for the store document.
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    /// Loads the document.
    ///
    /// # Returns
    /// `Ok(None)` if the store does not exist yet.
    ///
    /// # Errors
    /// Returns `StoreError::Malformed` if the content cannot be parsed.
    async fn load(&self) -> Result<Option<StoreDocument>, StoreError>;

    /// Saves the document, replacing any previous content.
    ///
    /// # Errors
    /// Returns an error if the document cannot be written.
    async fn save(&self, document: &StoreDocument) -> Result<(), StoreError>;
}
