//! History record persistence.
//!
//! One text file per record, named `<record id>.txt`, in a single
//! directory created on first write.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use reqcheck_application::ports::{HistoryError, HistoryStore};
use reqcheck_domain::RecordId;
use tokio::fs;

/// Writes history records into a directory.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    dir: PathBuf,
}

impl FileHistoryStore {
    /// Creates a store writing into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the file for `id`.
    #[must_use]
    pub fn record_path(&self, id: &RecordId) -> PathBuf {
        self.dir.join(id.file_name())
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn write(&self, id: &RecordId, contents: &str) -> Result<(), HistoryError> {
        fs::create_dir_all(&self.dir).await?;
        fs::write(self.record_path(id), contents).await?;
        Ok(())
    }

    async fn read(&self, id: &RecordId) -> Result<String, HistoryError> {
        match fs::read_to_string(self.record_path(id)).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(HistoryError::NotFound(id.clone())),
            Err(e) => Err(HistoryError::Io(e)),
        }
    }
}
