//! Request template type
//!
//! A template is the saved, unresolved form of a request. Its text fields may
//! contain `{{name}}` placeholders that are only substituted at send time.

use serde::{Deserialize, Serialize};

use super::HttpMethod;

/// A saved request definition.
///
/// Field names match the on-disk store format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestTemplate {
    /// HTTP method.
    #[serde(default)]
    pub method: HttpMethod,
    /// Free-form description shown in listings.
    #[serde(default)]
    pub description: String,
    /// Target URL, possibly containing placeholders.
    #[serde(default)]
    pub url: String,
    /// Raw header block, one `key: value` per line.
    #[serde(default)]
    pub headers: String,
    /// Raw body text.
    #[serde(default)]
    pub body: String,
}

impl RequestTemplate {
    /// Creates a template with the given method and URL.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the raw header block.
    #[must_use]
    pub fn with_headers(mut self, headers: impl Into<String>) -> Self {
        self.headers = headers.into();
        self
    }

    /// Sets the raw body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns true if the URL is blank, which makes the template unsendable.
    #[must_use]
    pub fn has_blank_url(&self) -> bool {
        self.url.trim().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let template: RequestTemplate = serde_json::from_str(r#"{"url": "{{host}}/ping"}"#).unwrap();
        assert_eq!(template.method, HttpMethod::Get);
        assert_eq!(template.url, "{{host}}/ping");
        assert!(template.headers.is_empty());
        assert!(template.body.is_empty());
    }

    #[test]
    fn blank_url_is_detected() {
        assert!(RequestTemplate::default().has_blank_url());
        assert!(RequestTemplate::new(HttpMethod::Get, "   ").has_blank_url());
        assert!(!RequestTemplate::new(HttpMethod::Get, "{{host}}").has_blank_url());
    }
}
