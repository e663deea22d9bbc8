//! In-memory port implementations shared by the unit tests.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, TimeZone};
use reqcheck_domain::{RecordId, StoreDocument};

use crate::dispatch::OutgoingRequest;
use crate::ports::{
    Clock, HistoryError, HistoryStore, HttpTransport, Notice, Notifier, StoreError,
    TransportError, TransportResponse, VariableFiles, WorkspaceStore,
};

/// Variable files kept in memory. Names listed as broken fail to read.
#[derive(Default)]
pub struct MemoryFiles {
    files: HashMap<String, String>,
    broken: Vec<String>,
}

impl MemoryFiles {
    pub fn with(mut self, name: &str, content: &str) -> Self {
        self.files.insert(name.to_string(), content.to_string());
        self
    }

    pub fn broken(mut self, name: &str) -> Self {
        self.broken.push(name.to_string());
        self
    }
}

impl VariableFiles for MemoryFiles {
    fn read(&self, filename: &str) -> io::Result<Option<String>> {
        if self.broken.iter().any(|b| b == filename) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            ));
        }
        Ok(self.files.get(filename).cloned())
    }
}

/// History store kept in memory, keyed by record id.
#[derive(Default)]
pub struct MemoryHistory {
    pub records: Mutex<BTreeMap<RecordId, String>>,
    pub fail_writes: bool,
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn write(&self, id: &RecordId, contents: &str) -> Result<(), HistoryError> {
        if self.fail_writes {
            return Err(HistoryError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only history",
            )));
        }
        self.records
            .lock()
            .unwrap()
            .insert(id.clone(), contents.to_string());
        Ok(())
    }

    async fn read(&self, id: &RecordId) -> Result<String, HistoryError> {
        self.records
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| HistoryError::NotFound(id.clone()))
    }
}

/// Store document kept in memory.
#[derive(Default)]
pub struct MemoryStore {
    pub document: Mutex<Option<StoreDocument>>,
    pub malformed: bool,
    pub fail_saves: bool,
    pub saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn holding(document: StoreDocument) -> Self {
        Self {
            document: Mutex::new(Some(document)),
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Option<StoreDocument> {
        self.document.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl WorkspaceStore for MemoryStore {
    async fn load(&self) -> Result<Option<StoreDocument>, StoreError> {
        if self.malformed {
            return Err(StoreError::Malformed("expected value at line 1 column 1".into()));
        }
        Ok(self.document.lock().unwrap().clone())
    }

    async fn save(&self, document: &StoreDocument) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        *self.saves.lock().unwrap() += 1;
        *self.document.lock().unwrap() = Some(document.clone());
        Ok(())
    }
}

/// Notifier that keeps every notice.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Clock frozen at one instant.
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    pub fn at(h: u32, m: u32, s: u32) -> Self {
        Self(Local.with_ymd_and_hms(2024, 6, 1, h, m, s).single().unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Clock that moves one second forward on every reading.
pub struct SteppingClock {
    next: Mutex<DateTime<Local>>,
}

impl SteppingClock {
    pub fn starting_at(h: u32, m: u32, s: u32) -> Self {
        Self {
            next: Mutex::new(FixedClock::at(h, m, s).0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Local> {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + TimeDelta::seconds(1);
        now
    }
}

/// Transport answering 200 with the URL as the body after a per-URL delay.
#[derive(Default)]
pub struct DelayedTransport {
    delays: HashMap<String, Duration>,
}

impl DelayedTransport {
    pub fn with(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }
}

impl HttpTransport for DelayedTransport {
    async fn send(&self, request: &OutgoingRequest) -> Result<TransportResponse, TransportError> {
        let delay = self.delays.get(&request.url).copied().unwrap_or_default();
        tokio::time::sleep(delay).await;
        Ok(TransportResponse {
            status: 200,
            reason: Some("OK".to_string()),
            body: request.url.clone(),
        })
    }
}

/// Transport that returns a canned outcome, or echoes JSON payloads back.
pub struct MockTransport {
    outcome: Option<Result<TransportResponse, TransportError>>,
    pub sent: Mutex<Vec<OutgoingRequest>>,
}

impl MockTransport {
    pub fn ok(status: u16, reason: Option<&str>, body: &str) -> Self {
        Self {
            outcome: Some(Ok(TransportResponse {
                status,
                reason: reason.map(String::from),
                body: body.to_string(),
            })),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            outcome: Some(Err(error)),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Answers 200 with the request payload as the body.
    pub fn echo() -> Self {
        Self {
            outcome: None,
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: &OutgoingRequest) -> Result<TransportResponse, TransportError> {
        self.sent.lock().unwrap().push(request.clone());
        match &self.outcome {
            Some(outcome) => outcome.clone(),
            None => {
                let body = match &request.payload {
                    crate::dispatch::RequestPayload::Json(value) => value.to_string(),
                    crate::dispatch::RequestPayload::Raw(text) => text.clone(),
                };
                Ok(TransportResponse {
                    status: 200,
                    reason: Some("OK".to_string()),
                    body,
                })
            }
        }
    }
}
