//! Reqcheck Domain - Core types
//!
//! This crate defines the domain model for the reqcheck request composer:
//! request templates, the variable store, the request catalog, dispatch
//! outcomes and history records. All types here are pure Rust with no I/O.

pub mod catalog;
pub mod error;
pub mod history;
pub mod persistence;
pub mod request;
pub mod response;
pub mod variables;

pub use catalog::RequestCatalog;
pub use error::{DomainError, DomainResult};
pub use history::{HistoryRecord, RecordId};
pub use persistence::StoreDocument;
pub use request::{HttpMethod, RequestTemplate};
pub use response::{
    CompletedResponse, DISPLAY_LIMIT, DispatchResult, DisplayBody, ERROR_MARKER_BODY,
    FailedExchange, TRUNCATION_MARKER,
};
pub use variables::{Indirection, VariableStore};
