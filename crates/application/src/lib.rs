//! Reqcheck Application - Core services
//!
//! Ports for every external collaborator, and the services built on them:
//! template resolution, request dispatch, history recording, the editing
//! session and the send pipeline.

pub mod dispatch;
pub mod error;
pub mod history_recorder;
pub mod ports;
pub mod session;
pub mod use_cases;
pub mod variable_resolver;

#[cfg(test)]
mod test_support;

pub use dispatch::{OutgoingRequest, RequestDispatcher, RequestPayload, parse_header_block};
pub use error::{SendError, SendResult};
pub use history_recorder::HistoryRecorder;
pub use session::{Session, SessionPorts};
pub use use_cases::{PreparedSend, SendCompletion, SendPipeline};
pub use variable_resolver::{ResolveError, ResolutionWarning, ResolvedRequest, TemplateResolver};
