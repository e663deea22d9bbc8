//! Clock port for time-related operations

use chrono::{DateTime, Local};

/// Port for getting the current time.
///
/// This abstraction allows testing time-dependent code by providing
/// a mock implementation. Local time is used because history records
/// are stamped and named with wall-clock time.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> DateTime<Local>;
}
