//! Store file document
//!
//! The single JSON document holding saved templates and global variables:
//!
//! ```json
//! {
//!     "requests": [ { "method": "GET", "description": "", "url": "", "headers": "", "body": "" } ],
//!     "global_variables": { "host": "https://example.test" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::RequestCatalog;
use crate::request::RequestTemplate;
use crate::variables::VariableStore;

/// On-disk representation of the catalog and the variable store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    /// Saved templates in catalog order.
    #[serde(default)]
    pub requests: Vec<RequestTemplate>,
    /// Global variables.
    #[serde(default)]
    pub global_variables: VariableStore,
}

impl StoreDocument {
    /// Builds a document snapshot from the live collections.
    #[must_use]
    pub fn snapshot(catalog: &RequestCatalog, variables: &VariableStore) -> Self {
        Self {
            requests: catalog.list().to_vec(),
            global_variables: variables.clone(),
        }
    }

    /// Splits the document into the live collections.
    #[must_use]
    pub fn into_parts(self) -> (RequestCatalog, VariableStore) {
        (
            RequestCatalog::from_templates(self.requests),
            self.global_variables,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_the_store_layout() {
        let json = r#"{
            "requests": [
                {"method": "POST", "description": "create", "url": "{{host}}/items",
                 "headers": "Content-Type: application/json", "body": "{\"a\": {{n}}}"}
            ],
            "global_variables": {"host": "https://example.test", "n": "1"}
        }"#;
        let doc: StoreDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.requests.len(), 1);
        assert_eq!(doc.requests[0].method, HttpMethod::Post);
        assert_eq!(doc.requests[0].body, "{\"a\": {{n}}}");
        assert_eq!(doc.global_variables.get("n"), Some("1"));
    }

    #[test]
    fn missing_sections_are_empty() {
        let doc: StoreDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.requests.is_empty());
        assert!(doc.global_variables.is_empty());
    }

    #[test]
    fn snapshot_and_split_preserve_contents() {
        let mut catalog = RequestCatalog::new();
        catalog.add(RequestTemplate::new(HttpMethod::Put, "{{host}}/x").with_body("raw"));
        let mut variables = VariableStore::new();
        variables.set("host", "h").unwrap();

        let (catalog2, variables2) = StoreDocument::snapshot(&catalog, &variables).into_parts();
        assert_eq!(catalog2, catalog);
        assert_eq!(variables2, variables);
    }
}
