//! Request dispatch
//!
//! Turns resolved template text into an outgoing request and executes it.

mod dispatcher;
mod outgoing;

pub use dispatcher::{RequestDispatcher, pretty_print_body};
pub use outgoing::{OutgoingRequest, RequestPayload, parse_header_block};
