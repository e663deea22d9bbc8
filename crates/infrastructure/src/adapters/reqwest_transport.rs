//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. Any status code the
//! server answers with is a response; only failures to exchange a request
//! at all become a `TransportError`.

use std::time::Duration;

use reqcheck_application::dispatch::{OutgoingRequest, RequestPayload};
use reqcheck_application::ports::{HttpTransport, TransportError, TransportResponse};
use reqcheck_domain::HttpMethod;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Method, Response};

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("reqcheck/", env!("CARGO_PKG_VERSION"));

/// HTTP transport backed by `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport with the given per-request timeout and User-Agent.
    ///
    /// Redirects are followed up to 10 hops.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// The phrase the server sent, or the canonical one for the status.
    fn reason_phrase(response: &Response) -> Option<String> {
        response
            .extensions()
            .get::<ReasonPhrase>()
            .and_then(|phrase| std::str::from_utf8(phrase.as_bytes()).ok())
            .map(String::from)
            .or_else(|| response.status().canonical_reason().map(String::from))
    }

    fn map_error(error: &reqwest::Error) -> TransportError {
        let message = if error.is_timeout() {
            format!("request timed out: {error}")
        } else if error.is_connect() {
            format!("connection failed: {error}")
        } else {
            error.to_string()
        };

        match error.status() {
            Some(status) => TransportError::new(message).with_status(
                status.as_u16(),
                status.canonical_reason().map(String::from),
            ),
            None => TransportError::new(message),
        }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &OutgoingRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), &request.url)
            .timeout(self.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match &request.payload {
            RequestPayload::Json(value) => builder.json(value),
            RequestPayload::Raw(text) if text.is_empty() => builder,
            RequestPayload::Raw(text) => builder.body(text.clone()),
        };

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

        let status = response.status();
        let reason = Self::reason_phrase(&response);

        let body = response.text().await.map_err(|e| {
            TransportError::new(format!("failed to read body: {e}"))
                .with_status(status.as_u16(), reason.clone())
        })?;

        Ok(TransportResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
