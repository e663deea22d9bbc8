//! Send request use case.
//!
//! The coordinating loop prepares a send through `Session::prepare_send`,
//! then hands it to `SendPipeline::launch`. The network call, history write
//! and display preparation run on a spawned task; the outcome comes back as
//! a `SendCompletion` on the pipeline's channel.

use std::sync::Arc;

use chrono::{DateTime, Local};
use reqcheck_domain::{DispatchResult, DisplayBody, HistoryRecord, HttpMethod, RecordId};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::dispatch::{OutgoingRequest, RequestDispatcher};
use crate::history_recorder::HistoryRecorder;
use crate::ports::{Clock, HttpTransport, Notice, Notifier};
use crate::variable_resolver::ResolvedRequest;

/// A validated, resolved request ready to go on the network.
#[derive(Debug, Clone)]
pub struct PreparedSend {
    /// Catalog index of the stored template.
    pub index: usize,
    /// Method of the template.
    pub method: HttpMethod,
    /// Description of the template.
    pub description: String,
    /// Resolved URL, headers and body text.
    pub resolved: ResolvedRequest,
    /// The request handed to the transport.
    pub request: OutgoingRequest,
    /// When the send was issued.
    pub request_time: DateTime<Local>,
}

/// Outcome of one send, delivered to the coordinating loop.
#[derive(Debug, Clone)]
pub struct SendCompletion {
    /// Catalog index the send belongs to.
    pub index: usize,
    /// What happened on the wire.
    pub result: DispatchResult,
    /// Status line for display.
    pub info_line: String,
    /// Response body as it should be displayed.
    pub display_body: String,
    /// Whether `display_body` was cut at the display limit.
    pub truncated: bool,
    /// The history record, unless writing it failed.
    pub record: Option<RecordId>,
}

/// Runs sends off the coordinating loop and reports their completions.
pub struct SendPipeline<T: HttpTransport + 'static> {
    dispatcher: RequestDispatcher<T>,
    recorder: HistoryRecorder,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    display_limit: usize,
    completions: UnboundedSender<SendCompletion>,
}

impl<T: HttpTransport + 'static> Clone for SendPipeline<T> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
            recorder: self.recorder.clone(),
            clock: Arc::clone(&self.clock),
            notifier: Arc::clone(&self.notifier),
            display_limit: self.display_limit,
            completions: self.completions.clone(),
        }
    }
}

impl<T: HttpTransport + 'static> SendPipeline<T> {
    /// Creates a pipeline and the receiver its completions arrive on.
    #[must_use]
    pub fn new(
        dispatcher: RequestDispatcher<T>,
        recorder: HistoryRecorder,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
        display_limit: usize,
    ) -> (Self, UnboundedReceiver<SendCompletion>) {
        let (completions, receiver) = mpsc::unbounded_channel();
        let pipeline = Self {
            dispatcher,
            recorder,
            clock,
            notifier,
            display_limit,
            completions,
        };
        (pipeline, receiver)
    }

    /// Spawns the send and returns immediately.
    ///
    /// Sends are independent: completions arrive in the order they finish.
    pub fn launch(&self, prepared: PreparedSend) -> JoinHandle<()> {
        let pipeline = self.clone();
        tokio::spawn(async move {
            let completion = pipeline.complete(prepared).await;
            if pipeline.completions.send(completion).is_err() {
                tracing::debug!("completion receiver dropped");
            }
        })
    }

    /// Dispatches, records and prepares the display for one send.
    pub async fn complete(&self, prepared: PreparedSend) -> SendCompletion {
        let result = self.dispatcher.execute(&prepared.request).await;
        let response_time = self.clock.now();
        let info_line = result.info_line();
        let response_body = result.body();

        let record = HistoryRecord {
            request_time: prepared.request_time,
            method: prepared.method,
            description: prepared.description,
            url: prepared.resolved.url,
            headers: prepared.resolved.headers,
            body: prepared.resolved.body,
            response_time,
            info_line: info_line.clone(),
            response_body,
        };

        let record_id = match self.recorder.record(&record).await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::error!(error = %e, "history record could not be written");
                self.notifier
                    .notify(Notice::error(format!("Error writing history: {e}")));
                None
            }
        };

        let display = DisplayBody::new(&record.response_body, self.display_limit);
        SendCompletion {
            index: prepared.index,
            result,
            info_line,
            display_body: display.text,
            truncated: display.truncated,
            record: record_id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ports::{HistoryStore, TransportError};
    use crate::test_support::{
        DelayedTransport, FixedClock, MemoryHistory, MockTransport, RecordingNotifier,
        SteppingClock,
    };
    use pretty_assertions::assert_eq;
    use reqcheck_domain::{DISPLAY_LIMIT, TRUNCATION_MARKER};
    use std::time::Duration;

    struct Harness {
        history: Arc<MemoryHistory>,
        notifier: Arc<RecordingNotifier>,
        pipeline: SendPipeline<MockTransport>,
        completions: UnboundedReceiver<SendCompletion>,
    }

    fn harness_with(transport: MockTransport, history: MemoryHistory) -> Harness {
        let history = Arc::new(history);
        let notifier = Arc::new(RecordingNotifier::default());
        let (pipeline, completions) = SendPipeline::new(
            RequestDispatcher::new(Arc::new(transport)),
            HistoryRecorder::new(Arc::clone(&history) as Arc<dyn HistoryStore>),
            Arc::new(FixedClock::at(12, 30, 15)),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
            DISPLAY_LIMIT,
        );
        Harness {
            history,
            notifier,
            pipeline,
            completions,
        }
    }

    fn prepared(body: &str) -> PreparedSend {
        prepared_for(3, "https://api.test/items", body)
    }

    fn prepared_for(index: usize, url: &str, body: &str) -> PreparedSend {
        let resolved = ResolvedRequest {
            url: url.to_string(),
            headers: "Accept: */*".to_string(),
            body: body.to_string(),
            warnings: Vec::new(),
        };
        PreparedSend {
            index,
            method: HttpMethod::Post,
            description: "create item".to_string(),
            request: OutgoingRequest::from_resolved(
                HttpMethod::Post,
                &resolved.url,
                &resolved.headers,
                &resolved.body,
            ),
            resolved,
            request_time: FixedClock::at(12, 30, 14).0,
        }
    }

    #[tokio::test]
    async fn success_is_recorded_and_displayed() {
        let h = harness_with(
            MockTransport::ok(201, Some("Created"), r#"{"id":7}"#),
            MemoryHistory::default(),
        );

        let completion = h.pipeline.complete(prepared("")).await;

        assert_eq!(completion.index, 3);
        assert!(completion.info_line.starts_with("Status: 201 Created | Time: "));
        assert_eq!(completion.display_body, "{\n    \"id\": 7\n}");
        assert!(!completion.truncated);
        assert_eq!(completion.record.unwrap().as_str(), "2024-06-01-12-30-15");

        let stored = h.history.records.lock().unwrap();
        let text = stored.values().next().unwrap();
        assert!(text.starts_with("[Request Timestamp] 2024-06-01 12:30:14\nMethod: POST\n"));
        assert!(text.contains("Description: create item\n"));
    }

    #[tokio::test]
    async fn long_body_is_truncated_for_display_only() {
        let body = "x".repeat(12_000);
        let h = harness_with(MockTransport::ok(200, Some("OK"), &body), MemoryHistory::default());

        let completion = h.pipeline.complete(prepared("")).await;

        assert!(completion.truncated);
        assert_eq!(
            completion.display_body,
            format!("{}{TRUNCATION_MARKER}", "x".repeat(DISPLAY_LIMIT))
        );
        let stored = h.history.records.lock().unwrap();
        assert!(stored.values().next().unwrap().contains(&body));
    }

    #[tokio::test]
    async fn transport_failure_still_writes_history() {
        let h = harness_with(
            MockTransport::failing(TransportError::new("connection refused")),
            MemoryHistory::default(),
        );

        let completion = h.pipeline.complete(prepared("")).await;

        assert!(completion.result.is_error());
        assert_eq!(completion.info_line, "Response: Error");
        assert_eq!(completion.display_body, "An error occurred");
        let stored = h.history.records.lock().unwrap();
        let text = stored.values().next().unwrap();
        assert!(text.contains("Response Info: Response: Error\n"));
        assert!(text.ends_with("An error occurred\n"));
    }

    #[tokio::test]
    async fn failed_history_write_is_reported() {
        let h = harness_with(
            MockTransport::ok(200, Some("OK"), "fine"),
            MemoryHistory {
                fail_writes: true,
                ..MemoryHistory::default()
            },
        );

        let completion = h.pipeline.complete(prepared("")).await;

        assert_eq!(completion.record, None);
        assert_eq!(completion.display_body, "fine");
        assert_eq!(h.notifier.messages().len(), 1);
        assert!(h.notifier.messages()[0].starts_with("Error writing history:"));
    }

    #[tokio::test]
    async fn launch_delivers_completion_on_channel() {
        let mut h = harness_with(MockTransport::echo(), MemoryHistory::default());

        let handle = h.pipeline.launch(prepared(r#"{"b": 2, "a": 1}"#));
        handle.await.unwrap();

        let completion = h.completions.recv().await.unwrap();
        assert_eq!(completion.display_body, "{\n    \"b\": 2,\n    \"a\": 1\n}");
    }

    #[tokio::test]
    async fn parallel_sends_complete_in_finish_order() {
        let transport = DelayedTransport::default()
            .with("https://slow.test/", Duration::from_millis(300))
            .with("https://fast.test/", Duration::from_millis(10));
        let history = Arc::new(MemoryHistory::default());
        let (pipeline, mut completions) = SendPipeline::new(
            RequestDispatcher::new(Arc::new(transport)),
            HistoryRecorder::new(Arc::clone(&history) as Arc<dyn HistoryStore>),
            Arc::new(SteppingClock::starting_at(9, 0, 0)),
            Arc::new(RecordingNotifier::default()),
            DISPLAY_LIMIT,
        );

        let slow = pipeline.launch(prepared_for(0, "https://slow.test/", ""));
        let fast = pipeline.launch(prepared_for(1, "https://fast.test/", ""));

        let first = completions.recv().await.unwrap();
        let second = completions.recv().await.unwrap();
        slow.await.unwrap();
        fast.await.unwrap();

        assert_eq!(first.index, 1);
        assert_eq!(first.display_body, "https://fast.test/");
        assert_eq!(second.index, 0);
        assert_eq!(second.display_body, "https://slow.test/");

        let stored = history.records.lock().unwrap();
        assert_eq!(stored.len(), 2);
        let fast_record = &stored[first.record.as_ref().unwrap()];
        let slow_record = &stored[second.record.as_ref().unwrap()];
        assert!(fast_record.contains("URL: https://fast.test/\n"));
        assert!(slow_record.contains("URL: https://slow.test/\n"));
    }
}
