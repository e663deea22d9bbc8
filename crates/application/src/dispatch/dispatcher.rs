//! Request dispatcher
//!
//! Sends an outgoing request through the transport port, measures the
//! round trip and folds success and failure into a `DispatchResult`.

use std::sync::Arc;
use std::time::Instant;

use reqcheck_domain::{CompletedResponse, DispatchResult, FailedExchange};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use super::outgoing::OutgoingRequest;
use crate::ports::HttpTransport;

/// Dispatches requests through an `HttpTransport`.
pub struct RequestDispatcher<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> Clone for RequestDispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: HttpTransport> RequestDispatcher<T> {
    /// Creates a dispatcher over the given transport.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Sends a prepared request.
    ///
    /// Never fails: transport errors become `DispatchResult::Failed`.
    pub async fn execute(&self, request: &OutgoingRequest) -> DispatchResult {
        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");
        let start = Instant::now();

        match self.transport.send(request).await {
            Ok(response) => {
                let elapsed = start.elapsed();
                tracing::info!(
                    status = response.status,
                    elapsed_ms = elapsed.as_millis(),
                    url = %request.url,
                    "response received"
                );
                DispatchResult::Completed(CompletedResponse {
                    status: response.status,
                    reason: response.reason,
                    elapsed,
                    body: pretty_print_body(&response.body),
                })
            }
            Err(error) => {
                tracing::warn!(url = %request.url, error = %error, "transport failure");
                DispatchResult::Failed(FailedExchange {
                    status: error.status,
                    reason: error.reason,
                    message: error.message,
                })
            }
        }
    }
}

/// Pretty-prints a JSON body with 4-space indentation; other text is
/// returned unchanged. Key order and non-ASCII characters are preserved.
#[must_use]
pub fn pretty_print_body(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    if value.serialize(&mut serializer).is_err() {
        return body.to_string();
    }
    String::from_utf8(buffer).unwrap_or_else(|_| body.to_string())
}
