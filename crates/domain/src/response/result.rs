//! Uniform result of dispatching a request.

use std::time::Duration;

/// Body recorded in place of a response when the transport fails.
pub const ERROR_MARKER_BODY: &str = "An error occurred";

/// A response that came back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedResponse {
    /// Numeric status code.
    pub status: u16,
    /// Reason phrase, when the transport reports one.
    pub reason: Option<String>,
    /// Wall-clock time from send to full body.
    pub elapsed: Duration,
    /// Body text, pretty-printed if it was JSON.
    pub body: String,
}

/// A transport-level failure, with whatever status was known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedExchange {
    /// Status code, if the exchange got that far.
    pub status: Option<u16>,
    /// Reason phrase, if known.
    pub reason: Option<String>,
    /// Technical description of the failure.
    pub message: String,
}

/// Outcome of a dispatch. Transport failures are values, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// The server answered.
    Completed(CompletedResponse),
    /// The transport failed.
    Failed(FailedExchange),
}

impl DispatchResult {
    /// Returns true for the failure variant.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Status code, if known.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Completed(response) => Some(response.status),
            Self::Failed(failure) => failure.status,
        }
    }

    /// Elapsed time. Not reported for failures.
    #[must_use]
    pub const fn elapsed(&self) -> Option<Duration> {
        match self {
            Self::Completed(response) => Some(response.elapsed),
            Self::Failed(_) => None,
        }
    }

    /// `"<code> <reason>"`, `"<code>"` without a reason, or empty when unknown.
    #[must_use]
    pub fn status_summary(&self) -> String {
        match self {
            Self::Completed(response) => summarize(Some(response.status), response.reason.as_deref()),
            Self::Failed(failure) => summarize(failure.status, failure.reason.as_deref()),
        }
    }

    /// One-line description used for display and in the history record.
    #[must_use]
    pub fn info_line(&self) -> String {
        match self {
            Self::Completed(response) => format!(
                "Status: {} | Time: {:.2} sec",
                self.status_summary(),
                response.elapsed.as_secs_f64()
            ),
            Self::Failed(_) => "Response: Error".to_string(),
        }
    }

    /// Full response body; the fixed marker text for failures.
    #[must_use]
    pub fn body(&self) -> String {
        match self {
            Self::Completed(response) => response.body.clone(),
            Self::Failed(_) => {
                let summary = self.status_summary();
                if summary.is_empty() {
                    ERROR_MARKER_BODY.to_string()
                } else {
                    format!("{ERROR_MARKER_BODY}\nStatus: {summary}")
                }
            }
        }
    }
}

fn summarize(status: Option<u16>, reason: Option<&str>) -> String {
    let Some(status) = status else {
        return String::new();
    };
    match reason.filter(|r| !r.is_empty()) {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn completed(status: u16, reason: Option<&str>, millis: u64) -> DispatchResult {
        DispatchResult::Completed(CompletedResponse {
            status,
            reason: reason.map(String::from),
            elapsed: Duration::from_millis(millis),
            body: "{}".to_string(),
        })
    }

    #[test]
    fn info_line_for_completed_response() {
        let result = completed(200, Some("OK"), 1234);
        assert_eq!(result.info_line(), "Status: 200 OK | Time: 1.23 sec");
        assert!(!result.is_error());
    }

    #[test]
    fn info_line_without_reason() {
        let result = completed(599, None, 50);
        assert_eq!(result.info_line(), "Status: 599 | Time: 0.05 sec");
    }

    #[test]
    fn failure_uses_marker_body() {
        let result = DispatchResult::Failed(FailedExchange {
            status: None,
            reason: None,
            message: "connection refused".to_string(),
        });
        assert!(result.is_error());
        assert_eq!(result.info_line(), "Response: Error");
        assert_eq!(result.body(), "An error occurred");
        assert_eq!(result.status_summary(), "");
        assert_eq!(result.elapsed(), None);
    }

    #[test]
    fn failure_with_known_status_appends_it() {
        let result = DispatchResult::Failed(FailedExchange {
            status: Some(502),
            reason: Some("Bad Gateway".to_string()),
            message: "body decode failed".to_string(),
        });
        assert_eq!(result.body(), "An error occurred\nStatus: 502 Bad Gateway");
        assert_eq!(result.status(), Some(502));
    }
}
