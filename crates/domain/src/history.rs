//! History record domain model
//!
//! A history record is the immutable text transcript of one resolved request
//! and its response. Records are named after the response timestamp at
//! second precision, so two responses within the same second share a name.

use std::fmt;

use chrono::{DateTime, Local};

use crate::request::HttpMethod;

const DISPLAY_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";
const RECORD_ID_TIMESTAMP: &str = "%Y-%m-%d-%H-%M-%S";

/// Extension used for record files.
pub const RECORD_EXTENSION: &str = "txt";

/// Name of a history record, derived from the response timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// Builds the id for a response received at `timestamp`.
    #[must_use]
    pub fn from_timestamp(timestamp: &DateTime<Local>) -> Self {
        Self(timestamp.format(RECORD_ID_TIMESTAMP).to_string())
    }

    /// Wraps an existing id, accepting either `name` or `name.txt`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        let stem = value
            .strip_suffix(RECORD_EXTENSION)
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(value);
        Self(stem.to_string())
    }

    /// File name of the record, including extension.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{RECORD_EXTENSION}", self.0)
    }

    /// The id as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transcript of one request/response exchange.
///
/// All text fields are the resolved (post-substitution) values. The response
/// body is always stored in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    /// When the request was sent.
    pub request_time: DateTime<Local>,
    /// HTTP method.
    pub method: HttpMethod,
    /// Template description.
    pub description: String,
    /// Resolved URL.
    pub url: String,
    /// Resolved header block.
    pub headers: String,
    /// Resolved request body.
    pub body: String,
    /// When the response (or failure) arrived.
    pub response_time: DateTime<Local>,
    /// Status/time line, e.g. `Status: 200 OK | Time: 0.12 sec`.
    pub info_line: String,
    /// Full response body.
    pub response_body: String,
}

impl HistoryRecord {
    /// The record's name.
    #[must_use]
    pub fn id(&self) -> RecordId {
        RecordId::from_timestamp(&self.response_time)
    }

    /// Renders the fixed-layout transcript.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "[Request Timestamp] {}\n\
             Method: {}\n\
             Description: {}\n\
             URL: {}\n\
             Headers:\n{}\n\
             Body:\n{}\n\
             \n\
             [Response Timestamp] {}\n\
             Response Info: {}\n\
             Response Body:\n{}\n",
            self.request_time.format(DISPLAY_TIMESTAMP),
            self.method,
            self.description,
            self.url,
            self.headers,
            self.body,
            self.response_time.format(DISPLAY_TIMESTAMP),
            self.info_line,
            self.response_body,
        )
    }
}
