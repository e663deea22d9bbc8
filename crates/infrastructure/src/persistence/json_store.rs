//! Store document persistence.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqcheck_application::ports::{StoreError, WorkspaceStore};
use reqcheck_domain::StoreDocument;
use tokio::fs;

use crate::serialization::{from_json_bytes, to_json_pretty_bytes};

/// Stores the document as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WorkspaceStore for JsonFileStore {
    async fn load(&self) -> Result<Option<StoreDocument>, StoreError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };

        from_json_bytes(&content)
            .map(Some)
            .map_err(|e| StoreError::Malformed(e.to_string()))
    }

    async fn save(&self, document: &StoreDocument) -> Result<(), StoreError> {
        let content =
            to_json_pretty_bytes(document).map_err(|e| StoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqcheck_domain::{HttpMethod, RequestCatalog, RequestTemplate, VariableStore};
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("saved_requests.json"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("saved_requests.json"));

        let mut catalog = RequestCatalog::new();
        catalog.add(
            RequestTemplate::new(HttpMethod::Post, "{{host}}/items")
                .with_description("naïve")
                .with_body("{\"a\": {{n}}}"),
        );
        let mut variables = VariableStore::new();
        variables.set("host", "https://example.test").unwrap();
        variables.set("n", "[n.txt]").unwrap();
        let document = StoreDocument::snapshot(&catalog, &variables);

        store.save(&document).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(document));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\n    \"requests\": ["));
        assert!(raw.contains("naïve"));
    }

    #[tokio::test]
    async fn malformed_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved_requests.json");
        std::fs::write(&path, "{\"requests\": [").unwrap();

        let result = JsonFileStore::new(path).load().await;
        assert!(matches!(result, Err(StoreError::Malformed(_))));
    }

    #[tokio::test]
    async fn save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("store.json"));
        store.save(&StoreDocument::default()).await.unwrap();
        assert!(store.path().exists());
    }
}
