//! Building the outgoing request from resolved text.

use indexmap::IndexMap;
use reqcheck_domain::HttpMethod;
use serde_json::Value;

/// How the body goes on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPayload {
    /// The body parsed as JSON and is sent as a JSON payload.
    Json(Value),
    /// Anything else, sent verbatim. May be empty.
    Raw(String),
}

impl RequestPayload {
    /// Classifies a resolved body.
    ///
    /// Invalid or empty JSON is not an error: the text is sent as-is.
    #[must_use]
    pub fn classify(body: &str) -> Self {
        if body.is_empty() {
            return Self::Raw(String::new());
        }
        serde_json::from_str(body).map_or_else(|_| Self::Raw(body.to_string()), Self::Json)
    }

    /// Returns true for the JSON variant.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

/// A fully resolved request ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    /// Header map in the order the lines appeared.
    pub headers: IndexMap<String, String>,
    /// Body payload.
    pub payload: RequestPayload,
}

impl OutgoingRequest {
    /// Builds a request from resolved text fields.
    #[must_use]
    pub fn from_resolved(method: HttpMethod, url: &str, headers: &str, body: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: parse_header_block(headers),
            payload: RequestPayload::classify(body),
        }
    }
}

/// Parses a raw header block into a map.
///
/// Each line containing a colon is split on the first colon and both sides
/// are trimmed. Lines without a colon are dropped. A repeated key keeps the
/// last value.
#[must_use]
pub fn parse_header_block(block: &str) -> IndexMap<String, String> {
    block
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
