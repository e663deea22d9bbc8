//! HTTP transport port

use std::future::Future;

use crate::dispatch::OutgoingRequest;

/// What the transport hands back when the server answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// Numeric status code.
    pub status: u16,
    /// Reason phrase, if the transport knows one.
    pub reason: Option<String>,
    /// Decoded body text.
    pub body: String,
}

/// A network or protocol failure.
///
/// Carries the status line when the failure happened after it was received
/// (for example while reading the body).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    /// Human-readable description.
    pub message: String,
    /// Status code, if it was received before the failure.
    pub status: Option<u16>,
    /// Reason phrase, if known.
    pub reason: Option<String>,
}

impl TransportError {
    /// Creates an error with no status information.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            reason: None,
        }
    }

    /// Attaches the status line that was received before the failure.
    #[must_use]
    pub fn with_status(mut self, status: u16, reason: Option<String>) -> Self {
        self.status = Some(status);
        self.reason = reason;
        self
    }
}

/// Port for sending HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait HttpTransport: Send + Sync {
    /// Sends the request and reads the full response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, or other HTTP-related problems.
    fn send(
        &self,
        request: &OutgoingRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}
