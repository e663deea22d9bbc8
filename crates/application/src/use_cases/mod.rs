//! Application use cases (business logic orchestration).

mod send_request;

pub use send_request::{PreparedSend, SendCompletion, SendPipeline};
