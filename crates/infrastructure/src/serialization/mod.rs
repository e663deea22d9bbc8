//! JSON serialization for workspace files.
//!
//! Files are written pretty-printed with 4-space indentation and a trailing
//! newline. Key order follows the source types and non-ASCII text is kept
//! verbatim.

mod json;

pub use json::*;
