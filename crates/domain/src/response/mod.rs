//! Dispatch outcome types

mod display;
mod result;

pub use display::{DISPLAY_LIMIT, DisplayBody, TRUNCATION_MARKER};
pub use result::{CompletedResponse, DispatchResult, ERROR_MARKER_BODY, FailedExchange};
